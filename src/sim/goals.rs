//! Goal slots and the fill/bonus cycle
//!
//! The five fill flags live inside `State` and are updated with the same
//! copy-on-write discipline as the rest of the simulation.

use serde::{Deserialize, Serialize};

use super::collision::goal_reached;
use super::layout::GOAL_POSITIONS;
use super::vector::Vector;
use crate::consts::*;

/// One goal slot on the top row
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalSlot {
    pub position: Vector,
    pub width: f32,
    pub filled: bool,
}

impl GoalSlot {
    pub fn new(position: Vector) -> Self {
        Self {
            position,
            width: GOAL_WIDTH,
            filled: false,
        }
    }
}

/// What happened when the player landed on a goal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GoalOutcome {
    /// Index of the goal that was reached
    pub index: usize,
    /// Points for the landing itself (first fill or refill)
    pub points: u32,
    /// True when this landing completed all five goals
    pub completed: bool,
}

/// The five goal slots
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub slots: [GoalSlot; GOAL_COUNT],
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            slots: GOAL_POSITIONS.map(|[x, y]| GoalSlot::new(Vector::new(x, y))),
        }
    }
}

impl Goals {
    /// Index of the goal whose centre coincides exactly with `pos`
    pub fn reached_by(&self, pos: Vector) -> Option<usize> {
        self.slots.iter().position(|g| goal_reached(pos, g))
    }

    pub fn all_filled(&self) -> bool {
        self.slots.iter().all(|g| g.filled)
    }

    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|g| g.filled).count()
    }

    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            slot.filled = false;
        }
    }

    /// Fill the goal at `pos`, if any
    ///
    /// A first visit is worth double. When the landing completes the row the
    /// fills are cleared so the cycle can repeat; the caller awards the bonus.
    pub fn land(&mut self, pos: Vector) -> Option<GoalOutcome> {
        let index = self.reached_by(pos)?;
        let slot = &mut self.slots[index];
        let points = if slot.filled {
            REFILL_POINTS
        } else {
            slot.filled = true;
            FIRST_FILL_POINTS
        };

        let completed = self.all_filled();
        if completed {
            self.clear();
        }

        Some(GoalOutcome {
            index,
            points,
            completed,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_pos(i: usize) -> Vector {
        let [x, y] = GOAL_POSITIONS[i];
        Vector::new(x, y)
    }

    #[test]
    fn test_default_goals_empty() {
        let goals = Goals::default();
        assert_eq!(goals.filled_count(), 0);
        assert_eq!(goals.slots[2].position, Vector::new(300.0, 50.0));
        assert_eq!(goals.slots[2].width, GOAL_WIDTH);
    }

    #[test]
    fn test_land_miss() {
        let mut goals = Goals::default();
        assert_eq!(goals.land(Vector::new(300.0, 100.0)), None);
        assert_eq!(goals.filled_count(), 0);
    }

    #[test]
    fn test_first_fill_then_refill() {
        let mut goals = Goals::default();
        let first = goals.land(goal_pos(1)).unwrap();
        assert_eq!(first.index, 1);
        assert_eq!(first.points, FIRST_FILL_POINTS);
        assert!(!first.completed);
        assert!(goals.slots[1].filled);

        let again = goals.land(goal_pos(1)).unwrap();
        assert_eq!(again.points, REFILL_POINTS);
        assert_eq!(goals.filled_count(), 1);
    }

    #[test]
    fn test_completion_clears_fills() {
        let mut goals = Goals::default();
        for i in 0..4 {
            assert!(!goals.land(goal_pos(i)).unwrap().completed);
        }
        let last = goals.land(goal_pos(4)).unwrap();
        assert!(last.completed);
        assert_eq!(last.points, FIRST_FILL_POINTS);
        assert_eq!(goals.filled_count(), 0);
    }
}
