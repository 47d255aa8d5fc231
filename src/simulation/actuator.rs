//! Applies decided actions to the world.
//!
//! Actions are folded one at a time, in ascending id order, into the world
//! they were decided on. Each step sees everything earlier steps did in the
//! same tick: a food item eaten up by a lower id is gone for a higher id, and
//! offspring are in the world (though they get no action until next tick).
//!
//! Clamping is deliberately uneven. Crawling burns nutrition with a floor at
//! zero and eating is capped by what the food holds, while idling and
//! spawning subtract without any floor, so a bug can carry negative
//! nutrition out of an idle or spawn step.

use ndarray::Array1;
use tracing::debug;

use super::action::{Action, Actions};
use super::bug::Bug;
use super::entity::{Entity, Id};
use super::geometric_utils::unit_x;
use super::world::World;

/// Distance crawled per millisecond.
pub const CRAWL_SPEED: f32 = 0.02;
/// Nutrition burned per millisecond of crawling.
pub const CRAWL_COST: f32 = 0.000_01;
/// Most food a bug can eat per millisecond.
pub const BITE_RATE: f32 = 0.0001;
/// Offspring appear this far along +X from their parent.
pub const OFFSPRING_OFFSET: f32 = 1.0;
/// Nutrition an offspring starts with.
pub const OFFSPRING_NUTRITION: f32 = 1.0;
/// Mass an offspring starts with, taken from the parent.
pub const OFFSPRING_MASS: f32 = 0.1;
/// Nutrition the parent pays for spawning.
pub const SPAWN_COST: f32 = 0.3;

/// Folds `actions` into `world`, `delta` milliseconds after the snapshot
/// they were decided on.
///
/// Actions whose bug no longer exists (or is not a bug) are skipped.
pub fn perform(delta: f32, actions: &Actions, mut world: World) -> World {
    for (&id, action) in actions {
        let Some(Entity::Bug(bug)) = world.get(id) else {
            continue;
        };
        let bug = bug.clone();

        match action {
            Action::Idle => idle(&mut world, id, bug, delta),
            Action::Crawl(direction) => crawl(&mut world, id, bug, direction, delta),
            Action::Consume(target) => consume(&mut world, id, bug, *target, delta),
            Action::Spawn => spawn(&mut world, id, bug),
        }
    }

    world
}

fn idle(world: &mut World, id: Id, mut bug: Bug, delta: f32) {
    bug.mass += delta / 1000.0;
    // Unclamped: idling can leave nutrition below zero.
    bug.nutrition -= delta / 100.0;
    world.replace(id, Entity::Bug(bug));
}

fn crawl(world: &mut World, id: Id, mut bug: Bug, direction: &Array1<f32>, delta: f32) {
    bug.crawl(direction, delta * CRAWL_SPEED);
    bug.burn(delta * CRAWL_COST);

    if bug.is_starved() {
        world.remove(id);
        let remains = world.insert(Entity::food(bug.pos, bug.mass));
        debug!(bug = id, food = remains, quantity = bug.mass, "bug starved");
    } else {
        world.replace(id, Entity::Bug(bug));
    }
}

fn consume(world: &mut World, id: Id, mut bug: Bug, target: Id, delta: f32) {
    let Some(Entity::Food(food)) = world.get(target) else {
        return;
    };
    let mut food = food.clone();

    let eaten = food.take(delta * BITE_RATE);
    if food.is_depleted() {
        world.remove(target);
        debug!(bug = id, food = target, "food depleted");
    } else {
        world.replace(target, Entity::Food(food));
    }

    bug.feed(eaten);
    world.replace(id, Entity::Bug(bug));
}

fn spawn(world: &mut World, id: Id, mut bug: Bug) {
    let offspring = Bug::new(
        &bug.pos + &(unit_x() * OFFSPRING_OFFSET),
        OFFSPRING_NUTRITION,
        OFFSPRING_MASS,
    );

    // Unclamped, like idling.
    bug.mass -= OFFSPRING_MASS;
    bug.nutrition -= SPAWN_COST;

    let child = world.insert(Entity::Bug(offspring));
    world.replace(id, Entity::Bug(bug));
    debug!(parent = id, offspring = child, "bug spawned");
}
