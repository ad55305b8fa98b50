//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One event in, one state out
//! - Fixed layout tables, no randomness
//! - Stable iteration order (table order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod goals;
pub mod layout;
pub mod state;
pub mod tick;
pub mod vector;

pub use body::{Body, ViewType};
pub use collision::{
    RIVERS, RiverZone, any_collision, bodies_collided, circle_body_collided, goal_reached, touches,
};
pub use goals::{GoalOutcome, GoalSlot, Goals};
pub use state::{GamePhase, State, spawn_position};
pub use tick::{Event, reduce};
pub use vector::Vector;
