//! The entity sum type stored in the world registry.

use ndarray::Array1;

use super::bug::Bug;
use super::food::Food;
use super::locatable::Locatable;

/// Identifier of an entity. Allocated from 0 upward and never reused.
pub type Id = u64;

/// Anything that lives in the world.
#[derive(Debug, Clone, PartialEq)]
pub enum Entity {
    /// A bug that reasons and acts every tick.
    Bug(Bug),
    /// A passive food item.
    Food(Food),
}

impl Entity {
    /// Shorthand for a bug entity.
    pub fn bug(pos: Array1<f32>, nutrition: f32, mass: f32) -> Self {
        Self::Bug(Bug::new(pos, nutrition, mass))
    }

    /// Shorthand for a food entity.
    pub fn food(pos: Array1<f32>, quantity: f32) -> Self {
        Self::Food(Food::new(pos, quantity))
    }

    /// Returns the bug if this entity is one.
    pub fn as_bug(&self) -> Option<&Bug> {
        match self {
            Self::Bug(bug) => Some(bug),
            Self::Food(_) => None,
        }
    }

    /// Returns the food item if this entity is one.
    pub fn as_food(&self) -> Option<&Food> {
        match self {
            Self::Food(food) => Some(food),
            Self::Bug(_) => None,
        }
    }
}

impl Locatable for Entity {
    fn pos(&self) -> &Array1<f32> {
        match self {
            Self::Bug(bug) => bug.pos(),
            Self::Food(food) => food.pos(),
        }
    }
}
