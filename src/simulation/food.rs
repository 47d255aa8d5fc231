//! Food items that bugs can consume for nutrition.
//!
//! Food is either placed by the seeder or left behind by a starved bug, in
//! which case its quantity equals the bug's mass.

use ndarray::Array1;

use super::locatable::Locatable;

/// A food item that bugs can eat from.
#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    /// Position in 2D space.
    pub pos: Array1<f32>,
    /// Quantity remaining. Never negative.
    pub quantity: f32,
}

impl Food {
    /// Creates a new food item.
    pub fn new(pos: Array1<f32>, quantity: f32) -> Self {
        Self { pos, quantity }
    }

    /// Checks if this food item has been fully consumed.
    ///
    /// # Returns
    ///
    /// `true` if quantity is <= 0, `false` otherwise.
    pub fn is_depleted(&self) -> bool {
        self.quantity <= 0.0
    }

    /// Takes up to `amount` from this food item.
    ///
    /// # Arguments
    ///
    /// * `amount` - The most a single bite may take
    ///
    /// # Returns
    ///
    /// The amount actually taken, which is capped by the remaining quantity.
    pub fn take(&mut self, amount: f32) -> f32 {
        let taken = self.quantity.min(amount);
        self.quantity -= taken;
        taken
    }
}

impl Locatable for Food {
    fn pos(&self) -> &Array1<f32> {
        &self.pos
    }
}
