//! Demo player
//!
//! Picks moves with a seeded RNG, rejecting any move that a short no-input
//! lookahead shows ending the game. Prefers hopping forward. Same seed, same
//! run.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::session::{Session, StateSink};
use crate::settings::AutopilotSettings;
use crate::sim::{Event, State, reduce};

/// Ticks simulated ahead when judging a move
const LOOKAHEAD_TICKS: u32 = 30;
/// Chance of hopping forward whenever forward is safe
const FORWARD_BIAS: f64 = 0.7;

/// Summary of an unattended run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DemoSummary {
    pub ticks: u64,
    /// Games that ended (each followed by a reset)
    pub games_over: u32,
    pub moves: u32,
    pub best_score: u32,
    pub max_score: u32,
}

#[derive(Debug, Clone)]
pub struct Autopilot {
    rng: Pcg32,
    interval: u32,
    countdown: u32,
}

impl Autopilot {
    pub fn new(settings: &AutopilotSettings) -> Self {
        Self {
            rng: Pcg32::seed_from_u64(settings.seed),
            interval: settings.decision_interval.max(1),
            countdown: settings.decision_interval.max(1),
        }
    }

    /// Input to issue before the next tick, if any
    pub fn decide(&mut self, state: &State) -> Option<Event> {
        if state.is_game_over() {
            self.countdown = self.interval;
            return Some(Event::Reset);
        }

        self.countdown -= 1;
        if self.countdown > 0 {
            return None;
        }
        self.countdown = self.interval;

        let safe: Vec<Event> = [Event::UP, Event::LEFT, Event::RIGHT, Event::DOWN]
            .into_iter()
            .filter(|e| reduce(state, e).player_position != state.player_position)
            .filter(|e| survives(&reduce(state, e)))
            .collect();

        if safe.is_empty() {
            return None;
        }
        if safe.contains(&Event::UP) && self.rng.random_bool(FORWARD_BIAS) {
            return Some(Event::UP);
        }
        Some(safe[self.rng.random_range(0..safe.len())])
    }

    /// Play `ticks` timer ticks on `session`, presenting every state to `sink`
    pub fn drive(&mut self, session: &mut Session, ticks: u64, sink: &mut dyn StateSink) -> DemoSummary {
        let mut summary = DemoSummary::default();
        for _ in 0..ticks {
            if let Some(event) = self.decide(session.state()) {
                match event {
                    Event::Reset => summary.games_over += 1,
                    Event::Move { .. } => summary.moves += 1,
                    Event::Tick { .. } => {}
                }
                session.dispatch(event, sink);
            }
            let state = session.tick(sink);
            summary.best_score = summary.best_score.max(state.score);
            summary.max_score = summary.max_score.max(state.max_score);
            summary.ticks += 1;
        }
        summary
    }
}

/// Whether the player survives the lookahead window without further input
fn survives(state: &State) -> bool {
    let mut ahead = state.clone();
    for i in 0..LOOKAHEAD_TICKS {
        ahead = reduce(&ahead, &Event::Tick { elapsed: state.elapsed_ticks + u64::from(i) + 1 });
        if ahead.is_game_over() {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::NullSink;
    use crate::settings::Settings;

    #[test]
    fn test_resets_after_game_over() {
        let mut pilot = Autopilot::new(&AutopilotSettings::default());
        let mut state = State::new();
        state.phase = crate::sim::GamePhase::GameOver;
        assert_eq!(pilot.decide(&state), Some(Event::Reset));
    }

    #[test]
    fn test_waits_between_decisions() {
        let settings = AutopilotSettings {
            seed: 1,
            decision_interval: 3,
        };
        let mut pilot = Autopilot::new(&settings);
        let state = State::new();
        assert_eq!(pilot.decide(&state), None);
        assert_eq!(pilot.decide(&state), None);
        assert!(matches!(pilot.decide(&state), Some(Event::Move { .. }) | None));
    }

    #[test]
    fn test_same_seed_same_run() {
        let settings = Settings::default();
        let run = || {
            let mut session = Session::new(settings.clone());
            let mut pilot = Autopilot::new(&settings.autopilot);
            let summary = pilot.drive(&mut session, 2_000, &mut NullSink);
            (summary, session.state().clone())
        };
        assert_eq!(run(), run());
    }
}
