//! Positioned game objects
//!
//! Every hazard, platform, obstacle and the player itself is a `Body`.
//! Rectangular kinds use `width`/`height`; lily pads use `radius`.

use serde::{Deserialize, Serialize};

use super::vector::Vector;
use crate::consts::*;

/// Kind of body; determines collision shape and render style
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewType {
    #[serde(rename = "frog")]
    Frog,
    #[serde(rename = "car")]
    Car,
    #[serde(rename = "tiger")]
    Tiger,
    #[serde(rename = "plank")]
    Plank,
    #[serde(rename = "LotusLeaf")]
    LotusLeaf,
    #[serde(rename = "tree")]
    Tree,
}

impl ViewType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewType::Frog => "frog",
            ViewType::Car => "car",
            ViewType::Tiger => "tiger",
            ViewType::Plank => "plank",
            ViewType::LotusLeaf => "LotusLeaf",
            ViewType::Tree => "tree",
        }
    }

    /// Lily pads are the only circular kind
    pub fn is_circular(&self) -> bool {
        matches!(self, ViewType::LotusLeaf)
    }
}

/// Immutable snapshot of a game object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Stable identifier (`viewType` + ordinal), used by renderers for diffing
    pub id: String,
    pub view_type: ViewType,
    pub position: Vector,
    pub velocity: Vector,
    /// Carried from the layout tables but never integrated
    pub acceleration: Vector,
    pub width: f32,
    pub height: f32,
    pub radius: f32,
    /// Tick index at creation (informational)
    pub create_time: u64,
}

impl Body {
    /// Rectangular body with id `view_type + ordinal`
    #[allow(clippy::too_many_arguments)]
    pub fn rect(
        view_type: ViewType,
        ordinal: usize,
        create_time: u64,
        width: f32,
        height: f32,
        position: Vector,
        velocity: Vector,
        acceleration: Vector,
    ) -> Self {
        Self {
            id: format!("{}{}", view_type.as_str(), ordinal),
            view_type,
            position,
            velocity,
            acceleration,
            width,
            height,
            radius: 0.0,
            create_time,
        }
    }

    /// Circular body with id `view_type + ordinal`
    pub fn circle(
        view_type: ViewType,
        ordinal: usize,
        create_time: u64,
        radius: f32,
        position: Vector,
        velocity: Vector,
        acceleration: Vector,
    ) -> Self {
        Self {
            id: format!("{}{}", view_type.as_str(), ordinal),
            view_type,
            position,
            velocity,
            acceleration,
            width: 0.0,
            height: 0.0,
            radius,
            create_time,
        }
    }

    /// The player token at the spawn point
    pub fn frog() -> Self {
        Self {
            id: "frog".to_string(),
            view_type: ViewType::Frog,
            position: Vector::new(SPAWN_X, SPAWN_Y),
            velocity: Vector::ZERO,
            acceleration: Vector::ZERO,
            width: FROG_WIDTH,
            height: FROG_HEIGHT,
            radius: FROG_RADIUS,
            create_time: 0,
        }
    }

    /// One tick of motion: `position -= velocity`, then `velocity.y *= 1.01`
    pub fn advanced(&self) -> Self {
        Self {
            position: self.position.subtract(self.velocity),
            velocity: self.velocity.scale(VELOCITY_GROWTH),
            ..self.clone()
        }
    }

    /// Whether the body has left the horizontal play area
    pub fn is_out_of_bounds(&self) -> bool {
        let x = self.position.x();
        x > RECYCLE_MAX_X || x < RECYCLE_MIN_X
    }

    /// Teleport an out-of-bounds body to the opposite edge, keeping y and velocity
    pub fn revived(&self) -> Self {
        let x = self.position.x();
        let position = if x > RECYCLE_MAX_X {
            self.position.with_x(0.0)
        } else if x < RECYCLE_MIN_X {
            self.position.with_x(CANVAS_WIDTH)
        } else {
            return self.clone();
        };
        Self {
            position,
            ..self.clone()
        }
    }

    /// Same position, velocity negated
    pub fn turned_back(&self) -> Self {
        Self {
            velocity: self.velocity.negate(),
            ..self.clone()
        }
    }
}
