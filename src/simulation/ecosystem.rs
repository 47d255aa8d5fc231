//! Tick driver and the host-side wrapper around a world.
//!
//! [`tick`] is the pure state transition: reason over the snapshot, then fold
//! the resulting actions into it. [`Ecosystem`] adds what a host loop needs on
//! top: elapsed time, a tick counter and the per-tick delta clamp.

use tracing::trace;

use super::actuator;
use super::census::Census;
use super::genesis;
use super::params::Params;
use super::reasoner;
use super::world::World;

/// Advances `world` by `delta` milliseconds.
///
/// `delta` must be non-negative; hosts should clamp it (see
/// [`Ecosystem::step`]) so long pauses do not turn into one huge tick.
pub fn tick(delta: f32, world: World) -> World {
    let actions = reasoner::decide(world.entities());
    trace!(delta, actions = actions.len(), "tick");
    actuator::perform(delta, &actions, world)
}

/// A world together with the state of the loop driving it.
#[derive(Debug, Clone)]
pub struct Ecosystem {
    /// Current world state.
    pub world: World,
    /// Total simulated time in milliseconds.
    pub time: f32,
    /// Number of ticks run so far.
    pub ticks: u64,
    max_delta: f32,
}

impl Ecosystem {
    /// Creates an ecosystem with a freshly seeded population.
    pub fn new(params: &Params) -> Self {
        Self::from_world(genesis::populate(params), params)
    }

    /// Wraps an existing world.
    ///
    /// A negative or non-finite `max_delta` is treated as zero, so such an
    /// ecosystem never advances.
    pub fn from_world(world: World, params: &Params) -> Self {
        let max_delta = if params.max_delta.is_finite() {
            params.max_delta.max(0.0)
        } else {
            0.0
        };

        Self {
            world,
            time: 0.0,
            ticks: 0,
            max_delta,
        }
    }

    /// Runs one tick for a frame that took `frame_delta` milliseconds.
    ///
    /// Negative or non-finite deltas count as zero and anything above the
    /// configured maximum is clamped to it.
    ///
    /// # Returns
    ///
    /// The delta actually applied.
    pub fn step(&mut self, frame_delta: f32) -> f32 {
        let delta = if frame_delta.is_finite() {
            frame_delta.clamp(0.0, self.max_delta)
        } else {
            0.0
        };

        self.world = tick(delta, std::mem::take(&mut self.world));
        self.time += delta;
        self.ticks += 1;
        delta
    }

    /// Summarizes the current world.
    pub fn census(&self) -> Census {
        Census::of(&self.world)
    }
}
