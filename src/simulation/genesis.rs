//! Initial population placement.
//!
//! Builds the starting world by inserting bugs and food at random integer
//! coordinates. Given the same [`Params::seed`], genesis is reproducible.

use ndarray::Array1;
use ndarray_rand::RandomExt;
use ndarray_rand::rand::rngs::StdRng;
use ndarray_rand::rand::{Rng, SeedableRng};
use ndarray_rand::rand_distr::Uniform;
use tracing::info;

use super::entity::Entity;
use super::params::Params;
use super::world::World;

/// Creates a new world populated according to `params`.
///
/// Bugs are inserted first, then food, so bug ids are `0..n_bugs`.
pub fn populate(params: &Params) -> World {
    let seed = params
        .seed
        .unwrap_or_else(|| StdRng::from_entropy().r#gen::<u64>());
    info!(
        seed,
        bugs = params.n_bugs,
        food = params.n_food,
        "seeding world"
    );

    let mut rng = StdRng::seed_from_u64(seed);
    let mut world = World::empty();

    for _ in 0..params.n_bugs {
        let pos = random_position(&mut rng, params.spawn_extent);
        world.insert(Entity::bug(pos, params.bug_nutrition, params.bug_mass));
    }

    for _ in 0..params.n_food {
        let pos = random_position(&mut rng, params.spawn_extent);
        world.insert(Entity::food(pos, params.food_quantity));
    }

    world
}

/// Draws a position with integer coordinates in `[-extent, extent]` on each axis.
fn random_position(rng: &mut StdRng, extent: i32) -> Array1<f32> {
    let extent = extent.max(0);
    Array1::random_using(2, Uniform::new_inclusive(-extent, extent), rng).mapv(|c: i32| c as f32)
}
