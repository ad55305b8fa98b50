//! River Hop - A lane-crossing frog arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, collisions, scoring, transitions)
//! - `input`: Edge-triggered key mapping into simulation events
//! - `session`: Fixed-timestep event fold feeding a renderer sink
//! - `autopilot`: Seeded demo player
//! - `settings`: JSON configuration

pub mod autopilot;
pub mod input;
pub mod session;
pub mod settings;
pub mod sim;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use autopilot::Autopilot;
pub use session::{ExitBuffer, NullSink, Session, StateSink};
pub use settings::{KeyBindings, Settings};

/// Game configuration constants
pub mod consts {
    /// Play area dimensions
    pub const CANVAS_WIDTH: f32 = 600.0;
    pub const CANVAS_HEIGHT: f32 = 780.0;

    /// Player spawn point (also where the player returns after reaching a goal)
    pub const SPAWN_X: f32 = 300.0;
    pub const SPAWN_Y: f32 = 700.0;

    /// Player body extents
    pub const FROG_WIDTH: f32 = 40.0;
    pub const FROG_HEIGHT: f32 = 30.0;
    pub const FROG_RADIUS: f32 = 10.0;

    /// Hazard extents
    pub const CAR_WIDTH: f32 = 40.0;
    pub const CAR_HEIGHT: f32 = 20.0;
    pub const PLANK_WIDTH: f32 = 70.0;
    pub const PLANK_HEIGHT: f32 = 30.0;
    pub const LEAF_RADIUS: f32 = 20.0;
    pub const TIGER_SIZE: f32 = 40.0;
    pub const TREE_WIDTH: f32 = 10.0;
    pub const TREE_HEIGHT: f32 = 20.0;

    /// Goal slots
    pub const GOAL_COUNT: usize = 5;
    pub const GOAL_WIDTH: f32 = 50.0;

    /// Recycling bounds: bodies beyond these x values are out of play
    pub const RECYCLE_MIN_X: f32 = -5.0;
    pub const RECYCLE_MAX_X: f32 = CANVAS_WIDTH + 2.0;

    /// Per-tick velocity growth on the y axis
    pub const VELOCITY_GROWTH: f32 = 1.01;

    /// Grid-stepped player moves
    pub const STEP_X: f32 = 30.0;
    pub const STEP_Y: f32 = 50.0;

    /// Scoring
    pub const FIRST_FILL_POINTS: u32 = 20;
    pub const REFILL_POINTS: u32 = 10;
    pub const BONUS_POINTS: u32 = 100;

    /// Starting value of the object counter
    pub const INITIAL_OBJECT_COUNT: u64 = 12;

    /// Default timer period in milliseconds
    pub const TICK_INTERVAL_MS: u32 = 10;
    /// Maximum ticks emitted per `Session::advance` call
    pub const MAX_SUBSTEPS: u32 = 8;
}
