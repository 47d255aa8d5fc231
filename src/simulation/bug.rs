//! Bug state and the resource bookkeeping the actuator applies to it.
//!
//! Bugs carry two resources: `nutrition`, which is spent on moving and
//! earned by eating, and `mass`, which grows while well fed and is handed to
//! offspring on spawn or left behind as food on starvation.

use ndarray::Array1;

use super::locatable::Locatable;

/// A bug living on the plane.
#[derive(Debug, Clone, PartialEq)]
pub struct Bug {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Stored energy. The bug starves once this reaches zero while crawling.
    pub nutrition: f32,
    /// Body mass. Above the spawn threshold the bug reproduces.
    pub mass: f32,
}

impl Bug {
    /// Creates a new bug.
    ///
    /// # Arguments
    ///
    /// * `pos` - Position in 2D space
    /// * `nutrition` - Initial nutrition
    /// * `mass` - Initial mass
    pub fn new(pos: Array1<f32>, nutrition: f32, mass: f32) -> Self {
        Self {
            pos,
            nutrition,
            mass,
        }
    }

    /// Checks if the bug has run out of nutrition.
    ///
    /// # Returns
    ///
    /// `true` if nutrition <= 0, `false` otherwise.
    pub fn is_starved(&self) -> bool {
        self.nutrition <= 0.0
    }

    /// Burns nutrition, never going below zero.
    ///
    /// # Arguments
    ///
    /// * `amount` - Nutrition to subtract
    pub fn burn(&mut self, amount: f32) {
        self.nutrition = (self.nutrition - amount).max(0.0);
    }

    /// Adds nutrition. There is no upper cap.
    pub fn feed(&mut self, amount: f32) {
        self.nutrition += amount;
    }

    /// Moves the bug `distance` units along `direction`.
    ///
    /// # Arguments
    ///
    /// * `direction` - Unit vector to move along
    /// * `distance` - Distance to cover
    pub fn crawl(&mut self, direction: &Array1<f32>, distance: f32) {
        self.pos = &self.pos + &(direction * distance);
    }
}

impl Locatable for Bug {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }
}
