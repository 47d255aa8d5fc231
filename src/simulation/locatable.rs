//! Trait for entities that have a position on the plane.

use ndarray::Array1;

/// Trait for entities with a position in 2D space.
///
/// Implemented by [`Bug`](super::bug::Bug), [`Food`](super::food::Food) and
/// the [`Entity`](super::entity::Entity) sum type, so scans over the world
/// can read positions without matching on the variant.
pub trait Locatable {
    /// Returns a reference to the entity's position.
    fn pos(&self) -> &Array1<f32>;
}
