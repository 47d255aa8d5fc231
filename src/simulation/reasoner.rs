//! Per-tick decision making.
//!
//! Every bug looks at the whole, unmodified entity set and picks exactly one
//! [`Action`]. Nothing is mutated here; the actuator applies the result.
//!
//! Scans are brute force: each bug visits every entity, so a tick costs
//! O(n²). Walking the `BTreeMap` in id order also fixes the floating-point
//! summation order of the attraction field.

use ndarray::Array1;

use super::action::{Action, Actions};
use super::bug::Bug;
use super::entity::{Entity, Id};
use super::geometric_utils::{distance, normalize, unit_x};
use super::locatable::Locatable;
use super::world::Entities;

/// Bugs heavier than this split off an offspring.
pub const SPAWN_MASS: f32 = 2.0;
/// Food strictly closer than this can be eaten.
pub const REACH: f32 = 5.0;
/// Scale of the inverse-cube repulsion between bugs.
pub const CROWDING: f32 = 10.0;

/// Decides one action for every bug. Food gets no entry.
pub fn decide(entities: &Entities) -> Actions {
    entities
        .iter()
        .filter_map(|(&id, entity)| {
            entity
                .as_bug()
                .map(|bug| (id, decide_for(bug, entities)))
        })
        .collect()
}

/// Picks the action for a single bug, in strict priority order.
pub fn decide_for(bug: &Bug, entities: &Entities) -> Action {
    if bug.mass > SPAWN_MASS {
        return Action::Spawn;
    }

    if bug.nutrition > bug.mass {
        return Action::Idle;
    }

    if let Some(food_id) = food_within_reach(&bug.pos, entities) {
        return Action::Consume(food_id);
    }

    let direction = normalize(&attraction(&bug.pos, entities)).unwrap_or_else(unit_x);
    Action::Crawl(direction)
}

/// First food item, in id order, strictly closer than [`REACH`].
pub fn food_within_reach(pos: &Array1<f32>, entities: &Entities) -> Option<Id> {
    entities.iter().find_map(|(&id, entity)| match entity {
        Entity::Food(food) if distance(pos, food.pos()) < REACH => Some(id),
        _ => None,
    })
}

/// Raw (unnormalized) attraction vector felt at `pos`.
///
/// Food pulls with magnitude `1 / d`. Other bugs push with magnitude
/// `-CROWDING * m / d³`, applied along the direction towards them. Entities
/// at distance exactly zero (the bug itself, or anything sharing its
/// position) contribute nothing, and so does a bug close enough that its
/// push overflows.
pub fn attraction(pos: &Array1<f32>, entities: &Entities) -> Array1<f32> {
    let mut field = Array1::zeros(2);

    for entity in entities.values() {
        let offset = entity.pos() - pos;
        let d = distance(pos, entity.pos());
        if d <= 0.0 {
            continue;
        }

        let magnitude = match entity {
            Entity::Food(_) => 1.0 / d,
            Entity::Bug(other) => -CROWDING * other.mass / d.powi(3),
        };

        let contribution = offset / d * magnitude;
        if contribution.iter().all(|c| c.is_finite()) {
            field += &contribution;
        }
    }

    field
}
