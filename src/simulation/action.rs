//! Actions decided by the reasoner and applied by the actuator.

use std::collections::BTreeMap;

use ndarray::Array1;

use super::entity::Id;

/// What a bug does during one tick.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    /// Rest: grow mass, spend nutrition.
    Idle,
    /// Move along the given unit vector.
    Crawl(Array1<f32>),
    /// Eat from the food item with the given id.
    Consume(Id),
    /// Split off an offspring.
    Spawn,
}

/// One action per acting bug, folded in ascending id order.
pub type Actions = BTreeMap<Id, Action>;
