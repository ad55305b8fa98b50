//! Initial fleet placement
//!
//! Every fleet is built from a fixed table. Layout is deterministic: a reset
//! rebuilds exactly the same bodies. Lane direction is not stored in the
//! tables; it is derived from the row's y coordinate.

use super::body::{Body, ViewType};
use super::vector::Vector;
use crate::consts::*;

/// Fleet row: `[x, y, speed, acceleration]`
type LaneEntry = [f32; 4];

const CAR_TABLE: [LaneEntry; 9] = [
    [100.0, 650.0, 0.8, 0.02],
    [300.0, 650.0, 0.8, 0.02],
    [500.0, 650.0, 0.8, 0.02],
    [0.0, 350.0, 0.6, 0.04],
    [200.0, 350.0, 0.6, 0.04],
    [400.0, 350.0, 0.6, 0.04],
    [100.0, 100.0, 0.5, 0.05],
    [300.0, 100.0, 0.5, 0.05],
    [500.0, 100.0, 0.5, 0.05],
];

const PLANK_TABLE: [LaneEntry; 9] = [
    [100.0, 590.0, 0.9, 0.02],
    [300.0, 590.0, 0.9, 0.02],
    [500.0, 590.0, 0.9, 0.02],
    [100.0, 490.0, 0.5, 0.03],
    [300.0, 490.0, 0.5, 0.03],
    [500.0, 490.0, 0.5, 0.03],
    [100.0, 190.0, 1.0, 0.04],
    [300.0, 190.0, 1.0, 0.04],
    [500.0, 190.0, 1.0, 0.04],
];

/// `[x, y, speed]`; every tiger shares the same acceleration
const TIGER_TABLE: [[f32; 3]; 6] = [
    [0.0, 280.0, 0.8],
    [200.0, 280.0, 0.8],
    [400.0, 280.0, 0.8],
    [100.0, 125.0, 0.8],
    [300.0, 125.0, 0.8],
    [500.0, 125.0, 0.8],
];
const TIGER_ACCELERATION: f32 = 5.0;

const LEAF_TABLE: [[f32; 2]; 6] = [
    [90.0, 550.0],
    [300.0, 550.0],
    [510.0, 550.0],
    [150.0, 250.0],
    [330.0, 250.0],
    [510.0, 250.0],
];

const TREE_TABLE: [[f32; 2]; 9] = [
    [30.0, 400.0],
    [150.0, 400.0],
    [270.0, 400.0],
    [390.0, 400.0],
    [510.0, 400.0],
    [120.0, 40.0],
    [235.0, 40.0],
    [355.0, 40.0],
    [475.0, 40.0],
];

/// Goal slot centres (top row)
pub const GOAL_POSITIONS: [[f32; 2]; GOAL_COUNT] = [
    [60.0, 50.0],
    [180.0, 50.0],
    [300.0, 50.0],
    [420.0, 50.0],
    [540.0, 50.0],
];

/// Signed lane velocity: `+speed` when `lane_key % 100 == 50`, else `-speed`
///
/// Velocity is subtracted from position each tick, so a positive value moves
/// the body left.
pub fn lane_velocity(lane_key: f32, speed: f32) -> Vector {
    if lane_key % 100.0 == 50.0 {
        Vector::new(speed, 0.0)
    } else {
        Vector::new(-speed, 0.0)
    }
}

pub fn initial_cars() -> Vec<Body> {
    CAR_TABLE
        .iter()
        .enumerate()
        .map(|(i, &[x, y, speed, acc])| {
            Body::rect(
                ViewType::Car,
                i,
                0,
                CAR_WIDTH,
                CAR_HEIGHT,
                Vector::new(x, y),
                lane_velocity(y, speed),
                Vector::new(acc, 0.0),
            )
        })
        .collect()
}

/// Plank rows sit 10px above the lane grid, hence the offset parity key
pub fn initial_planks() -> Vec<Body> {
    PLANK_TABLE
        .iter()
        .enumerate()
        .map(|(i, &[x, y, speed, acc])| {
            Body::rect(
                ViewType::Plank,
                i,
                0,
                PLANK_WIDTH,
                PLANK_HEIGHT,
                Vector::new(x, y),
                lane_velocity(y + 10.0, speed),
                Vector::new(acc, 0.0),
            )
        })
        .collect()
}

pub fn initial_tigers() -> Vec<Body> {
    TIGER_TABLE
        .iter()
        .enumerate()
        .map(|(i, &[x, y, speed])| {
            Body::rect(
                ViewType::Tiger,
                i,
                0,
                TIGER_SIZE,
                TIGER_SIZE,
                Vector::new(x, y),
                lane_velocity(y, speed),
                Vector::new(TIGER_ACCELERATION, 0.0),
            )
        })
        .collect()
}

pub fn initial_leaves() -> Vec<Body> {
    LEAF_TABLE
        .iter()
        .enumerate()
        .map(|(i, &[x, y])| {
            Body::circle(
                ViewType::LotusLeaf,
                i,
                0,
                LEAF_RADIUS,
                Vector::new(x, y),
                Vector::ZERO,
                Vector::ZERO,
            )
        })
        .collect()
}

pub fn initial_trees() -> Vec<Body> {
    TREE_TABLE
        .iter()
        .enumerate()
        .map(|(i, &[x, y])| {
            Body::rect(
                ViewType::Tree,
                i,
                0,
                TREE_WIDTH,
                TREE_HEIGHT,
                Vector::new(x, y),
                Vector::ZERO,
                Vector::ZERO,
            )
        })
        .collect()
}
