//! Population statistics over a world snapshot.

use serde::Serialize;

use super::entity::Entity;
use super::world::World;

/// Aggregate counts and resource totals of a world.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Census {
    /// Number of living bugs.
    pub bugs: usize,
    /// Number of food items.
    pub food: usize,
    /// Summed mass of all bugs.
    pub bug_mass: f32,
    /// Summed quantity of all food items.
    pub food_quantity: f32,
    /// Summed nutrition of all bugs. May be negative.
    pub nutrition: f32,
}

impl Census {
    /// Counts everything in `world`.
    pub fn of(world: &World) -> Self {
        world
            .entities()
            .values()
            .fold(Self::default(), |mut census, entity| {
                match entity {
                    Entity::Bug(bug) => {
                        census.bugs += 1;
                        census.bug_mass += bug.mass;
                        census.nutrition += bug.nutrition;
                    }
                    Entity::Food(food) => {
                        census.food += 1;
                        census.food_quantity += food.quantity;
                    }
                }
                census
            })
    }

    /// Bug mass plus food quantity.
    ///
    /// Starvation and spawning move biomass around without changing it;
    /// idling grows it and eating turns it into nutrition.
    pub fn biomass(&self) -> f32 {
        self.bug_mass + self.food_quantity
    }
}
