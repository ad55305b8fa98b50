//! Collision and zone rules
//!
//! Two shape pairings are used:
//! - rectangle rule: the player's point position with half of its own extents
//!   against an obstacle whose `position` is its top-left corner, so the
//!   obstacle's full extent counts on its far side
//! - circle rule: centre distance against the sum of radii (lily pads)

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::goals::GoalSlot;
use super::vector::Vector;

/// Reach along one axis for the rectangle rule
///
/// Before the obstacle origin only the player's half extent counts; past it
/// the obstacle's full extent is added. On the exact axis the gap is zero.
#[inline]
fn axis_overlap(player: f32, obstacle: f32, player_half: f32, obstacle_extent: f32) -> bool {
    match player.partial_cmp(&obstacle) {
        Some(Ordering::Less) => obstacle - player < player_half,
        Some(Ordering::Greater) => player - obstacle < player_half + obstacle_extent,
        Some(Ordering::Equal) => true,
        None => false,
    }
}

/// Rectangle rule between the player at `pos` and a rectangular obstacle
///
/// Splits on the quadrant of `pos` relative to the obstacle origin (the four
/// diagonal quadrants, the four axis-aligned rays and the exact origin); each
/// case compares the per-axis gap against the combined extents.
pub fn bodies_collided(pos: Vector, player: &Body, obstacle: &Body) -> bool {
    let o = obstacle.position;
    axis_overlap(pos.x(), o.x(), player.width / 2.0, obstacle.width)
        && axis_overlap(pos.y(), o.y(), player.height / 2.0, obstacle.height)
}

/// Circle rule: distance between centres below the sum of radii
pub fn circle_body_collided(pos: Vector, player: &Body, obstacle: &Body) -> bool {
    pos.subtract(obstacle.position).length() < player.radius + obstacle.radius
}

/// Collision test with the rule matching the obstacle's shape
#[inline]
pub fn touches(pos: Vector, player: &Body, obstacle: &Body) -> bool {
    if obstacle.view_type.is_circular() {
        circle_body_collided(pos, player, obstacle)
    } else {
        bodies_collided(pos, player, obstacle)
    }
}

/// Whether `pos` overlaps any body in `fleet`
pub fn any_collision(pos: Vector, player: &Body, fleet: &[Body]) -> bool {
    fleet.iter().any(|b| touches(pos, player, b))
}

/// A river band, open on both ends
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiverZone {
    /// Smaller y bound (exclusive)
    pub upper: f32,
    /// Larger y bound (exclusive)
    pub lower: f32,
}

impl RiverZone {
    pub const fn new(upper: f32, lower: f32) -> Self {
        Self { upper, lower }
    }

    #[inline]
    pub fn contains(&self, y: f32) -> bool {
        y > self.upper && y < self.lower
    }

    /// In the water and not standing on a plank or lily pad
    pub fn submerges(&self, pos: Vector, on_plank: bool, on_leaf: bool) -> bool {
        self.contains(pos.y()) && !on_plank && !on_leaf
    }
}

/// The two river bands of the fixed level
pub const RIVERS: [RiverZone; 2] = [RiverZone::new(190.0, 290.0), RiverZone::new(460.0, 610.0)];

/// Exact coincidence with the goal centre; approaching or touching does not count
#[inline]
pub fn goal_reached(pos: Vector, goal: &GoalSlot) -> bool {
    pos == goal.position
}
