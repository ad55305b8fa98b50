//! Event reducer
//!
//! `reduce` folds one event into a state and returns the next state. It is
//! total: every (state, event) pair yields a valid state, and illegal moves are
//! silently rejected.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::collision::{RIVERS, any_collision};
use super::state::{GamePhase, State, spawn_position};
use super::vector::Vector;
use crate::consts::*;

/// Simulation input
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Timer pulse carrying the elapsed tick index
    Tick { elapsed: u64 },
    /// Grid move of the player
    Move { dx: f32, dy: f32 },
    /// Restart after game over
    Reset,
}

impl Event {
    pub const LEFT: Event = Event::Move { dx: -STEP_X, dy: 0.0 };
    pub const RIGHT: Event = Event::Move { dx: STEP_X, dy: 0.0 };
    pub const UP: Event = Event::Move { dx: 0.0, dy: -STEP_Y };
    pub const DOWN: Event = Event::Move { dx: 0.0, dy: STEP_Y };
}

/// Produce the state that follows `state` under `event`
pub fn reduce(state: &State, event: &Event) -> State {
    match (*event, state.phase) {
        (Event::Tick { elapsed }, GamePhase::Playing) => tick(state, elapsed),
        // A move recycles nothing, so the previous step's exit list is dropped
        (Event::Move { dx, dy }, GamePhase::Playing) => State {
            player_position: try_move(state, Vector::new(dx, dy)),
            exit: Vec::new(),
            ..state.clone()
        },
        (Event::Reset, GamePhase::GameOver) => restart(state),
        // Terminal phase ignores ticks and moves; reset mid-game is a no-op
        (Event::Tick { .. } | Event::Move { .. }, GamePhase::GameOver)
        | (Event::Reset, GamePhase::Playing) => state.clone(),
    }
}

/// Result of recycling one fleet before motion
struct Recycled {
    bodies: Vec<Body>,
    /// Pre-recycle snapshots of the bodies that left the play area
    exited: Vec<Body>,
}

/// Out-of-bounds bodies wrap to the opposite edge
fn recycle_wrapping(fleet: &[Body]) -> Recycled {
    let mut exited = Vec::new();
    let bodies = fleet
        .iter()
        .map(|b| {
            if b.is_out_of_bounds() {
                log::trace!("{} wrapped at x={}", b.id, b.position.x());
                exited.push(b.clone());
                b.revived()
            } else {
                b.clone()
            }
        })
        .collect();
    Recycled { bodies, exited }
}

/// If any predator is out of bounds the whole fleet turns around in place
fn recycle_bouncing(fleet: &[Body]) -> Recycled {
    let exited: Vec<Body> = fleet.iter().filter(|b| b.is_out_of_bounds()).cloned().collect();
    let bodies = if exited.is_empty() {
        fleet.to_vec()
    } else {
        log::debug!("{} predator(s) hit the edge, fleet turns back", exited.len());
        fleet.iter().map(Body::turned_back).collect()
    };
    Recycled { bodies, exited }
}

fn advance_all(bodies: Vec<Body>) -> Vec<Body> {
    bodies.iter().map(Body::advanced).collect()
}

/// One timer step: recycle, integrate, then resolve collisions and goals
fn tick(state: &State, elapsed: u64) -> State {
    let cars = recycle_wrapping(&state.cars);
    let planks = recycle_wrapping(&state.planks);
    let leaves = recycle_wrapping(&state.leaves);
    let trees = recycle_wrapping(&state.trees);
    let tigers = recycle_bouncing(&state.tigers);

    let exit: Vec<Body> = [&cars, &planks, &leaves, &trees, &tigers]
        .into_iter()
        .flat_map(|r| r.exited.iter().cloned())
        .collect();

    let moved = State {
        frog: state.frog.advanced(),
        cars: advance_all(cars.bodies),
        planks: advance_all(planks.bodies),
        leaves: advance_all(leaves.bodies),
        trees: advance_all(trees.bodies),
        tigers: advance_all(tigers.bodies),
        elapsed_ticks: elapsed,
        object_count: state.object_count + 1,
        exit,
        ..state.clone()
    };

    resolve(moved)
}

/// Collision and scoring pass against the moved positions
///
/// Hazards are tested first; a goal landing in the same step still scores.
fn resolve(mut state: State) -> State {
    let pos = state.player_position;
    let frog = &state.frog;

    let hit_car = any_collision(pos, frog, &state.cars);
    let hit_tiger = any_collision(pos, frog, &state.tigers);
    let on_plank = any_collision(pos, frog, &state.planks);
    let on_leaf = any_collision(pos, frog, &state.leaves);
    let drowned = RIVERS.iter().any(|r| r.submerges(pos, on_plank, on_leaf));

    if hit_car || hit_tiger || drowned {
        log::info!(
            "Game over at tick {} (car={}, tiger={}, river={}), score {}",
            state.elapsed_ticks,
            hit_car,
            hit_tiger,
            drowned,
            state.score
        );
        state.phase = GamePhase::GameOver;
    }

    if let Some(outcome) = state.goals.land(pos) {
        state.score += outcome.points;
        state.player_position = spawn_position();
        log::debug!(
            "Goal {} reached (+{}), {} filled",
            outcome.index + 1,
            outcome.points,
            state.goals.filled_count()
        );

        if outcome.completed {
            state.score += BONUS_POINTS;
            state.max_score = state.max_score.max(state.score);
            log::info!("All goals filled! Score {} (max {})", state.score, state.max_score);
        }
    }

    state
}

/// Apply a move if it stays strictly inside the canvas and clear of trees
fn try_move(state: &State, delta: Vector) -> Vector {
    let next = state.player_position.add(delta);
    let inside = next.x() > 0.0
        && next.x() < CANVAS_WIDTH
        && next.y() > 0.0
        && next.y() < CANVAS_HEIGHT;

    if inside && !any_collision(next, &state.frog, &state.trees) {
        next
    } else {
        state.player_position
    }
}

/// Rebuild the initial layout; every body still on screen is purged
fn restart(state: &State) -> State {
    log::info!("Reset after game over (final score {})", state.score);
    let exit: Vec<Body> = state
        .cars
        .iter()
        .chain(&state.planks)
        .chain(&state.tigers)
        .cloned()
        .collect();
    State {
        exit,
        ..State::new()
    }
}
