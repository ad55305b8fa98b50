//! Event fold driving the simulation
//!
//! A session merges the fixed-period timer and key input into one ordered
//! stream. Each event is reduced into exactly one new state, which is handed
//! to the renderer sink before the next event is processed.

use crate::input::KeyMapper;
use crate::settings::Settings;
use crate::sim::{Event, State, reduce};

/// Consumer of produced states (the renderer). Never feeds back into the engine.
pub trait StateSink {
    fn present(&mut self, state: &State);
}

impl<F: FnMut(&State)> StateSink for F {
    fn present(&mut self, state: &State) {
        self(state)
    }
}

/// Sink that drops every state
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl StateSink for NullSink {
    fn present(&mut self, _state: &State) {}
}

/// Collects `exit` ids across every presented state until drained
///
/// A consumer that only samples the latest state (once per frame) would miss
/// bodies recycled on intermediate ticks. No-op events re-present the previous
/// state, recognisable by an unchanged `object_count`, and are not counted again.
#[derive(Debug, Default, Clone)]
pub struct ExitBuffer {
    ids: Vec<String>,
    last_count: Option<u64>,
}

impl ExitBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Ids gathered since the last call, in presentation order
    pub fn take(&mut self) -> Vec<String> {
        std::mem::take(&mut self.ids)
    }
}

impl StateSink for ExitBuffer {
    fn present(&mut self, state: &State) {
        if self.last_count == Some(state.object_count) {
            return;
        }
        self.last_count = Some(state.object_count);
        self.ids.extend(state.exit.iter().map(|b| b.id.clone()));
    }
}

/// Running game: current state, timer accumulator and key mapping
#[derive(Debug, Clone)]
pub struct Session {
    state: State,
    settings: Settings,
    keys: KeyMapper,
    /// Unconsumed wall-clock time in seconds
    accumulator: f32,
    /// Index carried by the next timer tick
    next_tick: u64,
}

impl Session {
    pub fn new(settings: Settings) -> Self {
        Self {
            state: State::new(),
            keys: KeyMapper::new(settings.bindings.clone()),
            settings,
            accumulator: 0.0,
            next_tick: 0,
        }
    }

    /// Latest state
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Number of timer ticks emitted so far
    pub fn ticks(&self) -> u64 {
        self.next_tick
    }

    /// Fold one event and present the result
    pub fn dispatch(&mut self, event: Event, sink: &mut dyn StateSink) -> &State {
        self.state = reduce(&self.state, &event);
        sink.present(&self.state);
        &self.state
    }

    /// Emit the next timer tick
    pub fn tick(&mut self, sink: &mut dyn StateSink) -> &State {
        let elapsed = self.next_tick;
        self.next_tick += 1;
        self.dispatch(Event::Tick { elapsed }, sink)
    }

    /// Feed wall-clock time; emits as many ticks as fit, capped per call
    ///
    /// Returns the number of ticks emitted.
    pub fn advance(&mut self, dt: f32, sink: &mut dyn StateSink) -> u32 {
        let step = self.settings.tick_interval_secs();
        self.accumulator += dt.clamp(0.0, 0.1);

        let mut substeps = 0;
        while self.accumulator >= step && substeps < self.settings.max_substeps {
            self.tick(sink);
            self.accumulator -= step;
            substeps += 1;
        }
        if substeps == self.settings.max_substeps && self.accumulator >= step {
            log::debug!("Dropping {:.3}s of backlog", self.accumulator);
            self.accumulator = 0.0;
        }
        substeps
    }

    /// Key pressed; dispatches at most one event. Returns whether it did.
    pub fn key_down(&mut self, code: &str, repeat: bool, sink: &mut dyn StateSink) -> bool {
        match self.keys.key_down(code, repeat) {
            Some(event) => {
                self.dispatch(event, sink);
                true
            }
            None => false,
        }
    }

    pub fn key_up(&mut self, code: &str) {
        self.keys.key_up(code);
    }

    /// Window lost focus: key-ups may never arrive
    pub fn blur(&mut self) {
        self.keys.release_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{Body, Vector, ViewType};

    fn car(ordinal: usize, x: f32) -> Body {
        Body::rect(
            ViewType::Car,
            ordinal,
            0,
            40.0,
            20.0,
            Vector::new(x, 100.0),
            Vector::new(-1.0, 0.0),
            Vector::ZERO,
        )
    }

    #[test]
    fn test_ticks_carry_increasing_index() {
        let mut session = Session::new(Settings::default());
        let mut seen = Vec::new();
        let mut sink = |s: &State| seen.push(s.elapsed_ticks);
        session.tick(&mut sink);
        session.tick(&mut sink);
        session.tick(&mut sink);
        assert_eq!(seen, vec![0, 1, 2]);
        assert_eq!(session.ticks(), 3);
    }

    #[test]
    fn test_advance_uses_fixed_step() {
        let mut session = Session::new(Settings::default());
        // 35ms at a 10ms period: three ticks, 5ms carried over
        assert_eq!(session.advance(0.035, &mut NullSink), 3);
        assert_eq!(session.advance(0.006, &mut NullSink), 1);
        assert_eq!(session.ticks(), 4);
    }

    #[test]
    fn test_advance_caps_substeps() {
        let mut session = Session::new(Settings::default());
        assert_eq!(session.advance(1.0, &mut NullSink), 8);
        // backlog beyond the cap is dropped
        assert_eq!(session.advance(0.0, &mut NullSink), 0);
    }

    #[test]
    fn test_key_events_fold_in_order() {
        let mut session = Session::new(Settings::default());
        let mut presented = 0;
        let mut sink = |_: &State| presented += 1;
        assert!(session.key_down("ArrowUp", false, &mut sink));
        assert!(!session.key_down("ArrowUp", true, &mut sink));
        session.key_up("ArrowUp");
        assert!(session.key_down("ArrowUp", false, &mut sink));
        assert!(!session.key_down("Tab", false, &mut sink));
        assert_eq!(presented, 2);
        assert_eq!(session.state().player_position, Vector::new(300.0, 600.0));
    }

    #[test]
    fn test_exit_buffer_keeps_intermediate_ticks() {
        let mut session = Session::new(Settings::default());
        // car90 is already past the right edge; car91 crosses it on the first tick
        session.state.cars = vec![car(90, 603.0), car(91, 602.0)];
        session.state.tigers.clear();

        let mut exits = ExitBuffer::new();
        assert_eq!(session.advance(0.025, &mut exits), 2);

        // the frame only sees the last tick's list
        let last: Vec<&str> = session.state().exit.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(last, vec!["car91"]);
        assert_eq!(exits.take(), vec!["car90".to_string(), "car91".to_string()]);
        assert!(exits.is_empty());
    }

    #[test]
    fn test_exit_buffer_skips_noop_events() {
        let mut session = Session::new(Settings::default());
        session.state.cars = vec![car(90, 603.0)];
        session.state.tigers.clear();

        let mut exits = ExitBuffer::new();
        session.tick(&mut exits);
        // reset mid-game re-presents the same state
        session.dispatch(Event::Reset, &mut exits);
        assert_eq!(session.state().exit.len(), 1);
        assert_eq!(exits.len(), 1);

        // a move clears the list
        session.dispatch(Event::LEFT, &mut exits);
        assert!(session.state().exit.is_empty());
        assert_eq!(exits.take(), vec!["car90".to_string()]);
    }
}
