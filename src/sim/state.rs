//! Game state
//!
//! A `State` is an immutable snapshot: the transition engine builds a fresh
//! one for every event and renderers only ever read it.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::goals::Goals;
use super::layout;
use super::vector::Vector;
use crate::consts::*;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay
    Playing,
    /// Run ended; only a reset leaves this phase
    GameOver,
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct State {
    /// Player body (extents used by every collision test)
    pub frog: Body,
    /// Player position on the move grid
    pub player_position: Vector,
    pub score: u32,
    /// Best score, only raised when the goal row is completed
    pub max_score: u32,
    /// Elapsed timer ticks as reported by the last tick event
    pub elapsed_ticks: u64,
    /// Incremented once per simulated tick
    pub object_count: u64,
    pub phase: GamePhase,
    pub cars: Vec<Body>,
    pub planks: Vec<Body>,
    pub tigers: Vec<Body>,
    pub trees: Vec<Body>,
    pub leaves: Vec<Body>,
    /// Bodies recycled (or purged) by the step that produced this state
    pub exit: Vec<Body>,
    pub goals: Goals,
}

impl Default for State {
    fn default() -> Self {
        Self::new()
    }
}

impl State {
    /// Fresh game at the fixed initial layout
    pub fn new() -> Self {
        Self {
            frog: Body::frog(),
            player_position: spawn_position(),
            score: 0,
            max_score: 0,
            elapsed_ticks: 0,
            object_count: INITIAL_OBJECT_COUNT,
            phase: GamePhase::Playing,
            cars: layout::initial_cars(),
            planks: layout::initial_planks(),
            tigers: layout::initial_tigers(),
            trees: layout::initial_trees(),
            leaves: layout::initial_leaves(),
            exit: Vec::new(),
            goals: Goals::default(),
        }
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Every hazard and platform currently in play (player excluded)
    pub fn bodies(&self) -> impl Iterator<Item = &Body> {
        self.cars
            .iter()
            .chain(&self.planks)
            .chain(&self.tigers)
            .chain(&self.trees)
            .chain(&self.leaves)
    }
}

/// Where the player starts and returns to after reaching a goal
#[inline]
pub fn spawn_position() -> Vector {
    Vector::new(SPAWN_X, SPAWN_Y)
}
