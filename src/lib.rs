//! # Bugworld - Artificial Life on a Plane
//!
//! A discrete-time simulation of bugs and food on a continuous 2D plane.
//! Every tick each bug inspects the whole world and decides to idle, crawl,
//! eat or spawn; the decisions are then folded into the next world state.
//!
//! ## Features
//!
//! - Attraction field towards food and inverse-cube repulsion between bugs
//! - Nutrition and mass bookkeeping with starvation into food
//! - Reproduction once a bug grows heavy enough
//! - Deterministic ascending-id fold order
//! - Seeded population placement
//! - Real-time visualization with egui/macroquad and a headless runner
//!
//! ## Core Modules
//!
//! - [`simulation::world`] - Entity registry and id allocation
//! - [`simulation::reasoner`] - Per-bug action selection
//! - [`simulation::actuator`] - Action application
//! - [`simulation::ecosystem`] - Tick driver and host loop state
//!
//! ```
//! use bugworld::simulation::ecosystem::tick;
//! use bugworld::simulation::entity::Entity;
//! use bugworld::simulation::geometric_utils::point;
//! use bugworld::simulation::world::World;
//!
//! let mut world = World::empty();
//! world.insert(Entity::bug(point(0.0, 0.0), 0.5, 1.0));
//! world.insert(Entity::food(point(2.0, 0.0), 1.0));
//!
//! let world = tick(16.0, world);
//! assert_eq!(world.len(), 2);
//! ```

/// Core simulation logic and data structures.
pub mod simulation {
    /// Actions a bug can take during a tick.
    pub mod action;
    /// Folds decided actions into the next world state.
    pub mod actuator;
    /// Bug state and resource bookkeeping.
    pub mod bug;
    /// Population statistics.
    pub mod census;
    /// Tick driver and host loop state.
    pub mod ecosystem;
    /// The entity sum type and identifiers.
    pub mod entity;
    /// Food items that bugs can consume.
    pub mod food;
    /// Random initial population placement.
    pub mod genesis;
    /// Geometric utility functions for distances and directions.
    pub mod geometric_utils;
    /// Trait for entities with a position.
    pub mod locatable;
    /// Simulation parameters.
    pub mod params;
    /// Per-bug action selection.
    pub mod reasoner;
    /// Entity registry.
    pub mod world;
}
