use proptest::prelude::*;

use river_hop::consts::*;
use river_hop::sim::{Body, Event, GamePhase, State, Vector, ViewType, bodies_collided, reduce};

fn arb_move() -> impl Strategy<Value = Event> {
    prop_oneof![Just(Event::LEFT), Just(Event::RIGHT), Just(Event::UP), Just(Event::DOWN)]
}

fn obstacle(x: f32, y: f32, w: f32, h: f32) -> Body {
    Body::rect(ViewType::Car, 0, 0, w, h, Vector::new(x, y), Vector::ZERO, Vector::ZERO)
}

proptest! {
    /// Moves never leave the canvas; rejected moves leave the state untouched
    #[test]
    fn moves_stay_on_canvas(moves in prop::collection::vec(arb_move(), 0..200)) {
        let mut state = State::new();
        for event in &moves {
            let next = reduce(&state, event);
            let p = next.player_position;
            prop_assert!(p.x() >= 0.0 && p.x() <= CANVAS_WIDTH);
            prop_assert!(p.y() >= 0.0 && p.y() <= CANVAS_HEIGHT);
            if next.player_position == state.player_position {
                prop_assert_eq!(&next, &state);
            }
            state = next;
        }
    }

    /// A wrapped body keeps its y and lands exactly on an edge
    #[test]
    fn revived_bodies_land_on_an_edge(x in -400.0f32..1000.0, y in 0.0f32..780.0) {
        let body = obstacle(x, y, CAR_WIDTH, CAR_HEIGHT);
        let revived = body.revived();
        prop_assert_eq!(revived.position.y(), y);
        if x > RECYCLE_MAX_X {
            prop_assert_eq!(revived.position.x(), 0.0);
        } else if x < RECYCLE_MIN_X {
            prop_assert_eq!(revived.position.x(), CANVAS_WIDTH);
        } else {
            prop_assert_eq!(revived.position.x(), x);
        }
    }

    /// One out-of-bounds predator reverses the whole fleet
    #[test]
    fn predator_fleet_turns_together(which in 0usize..6, past_right in any::<bool>()) {
        let mut state = State::new();
        let y = state.tigers[which].position.y();
        state.tigers[which].position = Vector::new(if past_right { 610.0 } else { -10.0 }, y);
        let next = reduce(&state, &Event::Tick { elapsed: 1 });
        for (before, after) in state.tigers.iter().zip(&next.tigers) {
            prop_assert_eq!(after.velocity, before.velocity.negate());
        }
    }

    /// The obstacle origin is always a hit; far points never are
    #[test]
    fn rect_rule_hits_origin(x in 0.0f32..600.0, y in 0.0f32..780.0, w in 1.0f32..80.0, h in 1.0f32..40.0) {
        let frog = Body::frog();
        let o = obstacle(x, y, w, h);
        prop_assert!(bodies_collided(Vector::new(x, y), &frog, &o));
        // far away never collides
        prop_assert!(!bodies_collided(Vector::new(x + 200.0, y), &frog, &o));
        prop_assert!(!bodies_collided(Vector::new(x, y - 200.0), &frog, &o));
    }

    /// Game over is terminal for everything but reset
    #[test]
    fn game_over_is_terminal(events in prop::collection::vec(
        prop_oneof![arb_move(), (0u64..1000).prop_map(|elapsed| Event::Tick { elapsed })], 0..50)
    ) {
        let mut over = State::new();
        over.phase = GamePhase::GameOver;
        for event in &events {
            prop_assert_eq!(&reduce(&over, event), &over);
        }
        prop_assert_eq!(reduce(&over, &Event::Reset).phase, GamePhase::Playing);
    }
}
