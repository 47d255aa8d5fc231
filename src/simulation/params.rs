use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while loading or validating [`Params`].
#[derive(Debug, Error)]
pub enum ParamsError {
    /// The parameter file could not be read.
    #[error("failed to read parameter file: {0}")]
    Io(#[from] std::io::Error),
    /// The parameter file is not valid JSON for [`Params`].
    #[error("failed to parse parameters: {0}")]
    Parse(#[from] serde_json::Error),
    /// A parameter is out of its allowed range.
    #[error("invalid parameter: {0}")]
    Invalid(String),
}

/// Simulation parameters for seeding and hosting a world.
///
/// The per-tick rules (thresholds, rates) are fixed constants in the
/// reasoner and actuator; these parameters only shape the starting
/// population and how the host drives ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Params {
    /// Number of bugs placed at genesis.
    pub n_bugs: usize,
    /// Number of food items placed at genesis.
    pub n_food: usize,
    /// Genesis draws integer coordinates in `[-spawn_extent, spawn_extent]`.
    pub spawn_extent: i32,
    /// Nutrition of each bug placed at genesis.
    pub bug_nutrition: f32,
    /// Mass of each bug placed at genesis.
    pub bug_mass: f32,
    /// Quantity of each food item placed at genesis.
    pub food_quantity: f32,
    /// Largest delta (milliseconds) the host feeds into a single tick.
    pub max_delta: f32,
    /// Seed for the genesis RNG. `None` draws one from entropy.
    pub seed: Option<u64>,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            n_bugs: 60,
            n_food: 240,
            spawn_extent: 800,
            bug_nutrition: 1.0,
            bug_mass: 1.0,
            food_quantity: 1.0,
            max_delta: 32.0,
            seed: None,
        }
    }
}

impl Params {
    /// Parses and validates parameters from a JSON string.
    ///
    /// Fields missing from the JSON keep their default values.
    pub fn from_json(json: &str) -> Result<Self, ParamsError> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Loads and validates parameters from a JSON file.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Checks that every parameter is in range.
    pub fn validate(&self) -> Result<(), ParamsError> {
        if !(self.max_delta.is_finite() && self.max_delta > 0.0) {
            return Err(ParamsError::Invalid(format!(
                "max_delta must be positive and finite, got {}",
                self.max_delta
            )));
        }

        if self.spawn_extent < 0 {
            return Err(ParamsError::Invalid(format!(
                "spawn_extent must not be negative, got {}",
                self.spawn_extent
            )));
        }

        for (name, value) in [
            ("bug_nutrition", self.bug_nutrition),
            ("bug_mass", self.bug_mass),
            ("food_quantity", self.food_quantity),
        ] {
            if !(value.is_finite() && value >= 0.0) {
                return Err(ParamsError::Invalid(format!(
                    "{name} must be non-negative and finite, got {value}"
                )));
            }
        }

        Ok(())
    }
}
