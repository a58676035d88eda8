// Host-side tests for the gesture state machine and emission rules.

use knob_core::*;

fn config() -> KnobConfig {
    KnobConfig::default()
}

fn stepped(step: f64) -> KnobConfig {
    KnobConfig::default().with_range(0.0, 100.0, step)
}

fn start_mouse(c: &mut GestureController, cfg: &KnobConfig, y: f64, current: f64) -> Outcome {
    c.handle(
        cfg,
        current,
        InputEvent::DragStart {
            source: DragSource::Mouse,
            y,
        },
    )
}

fn move_mouse(c: &mut GestureController, cfg: &KnobConfig, y: f64, current: f64) -> Option<f64> {
    c.handle(
        cfg,
        current,
        InputEvent::DragMove {
            source: DragSource::Mouse,
            y,
        },
    )
    .value
}

#[test]
fn emit_snaps_and_suppresses_redundant_values() {
    let cfg = config();
    assert_eq!(emit(&cfg, 50.0, 50.4), None);
    assert_eq!(emit(&cfg, 50.0, 50.6), Some(51.0));
    assert_eq!(emit(&cfg, 50.0, 1e9), Some(100.0));
    assert_eq!(emit(&cfg, 100.0, 1e9), None);
    assert_eq!(emit(&cfg, 3.0, -7.0), Some(0.0));
}

#[test]
fn upward_drag_increases_value() {
    let cfg = config();
    let mut c = GestureController::new();
    let out = start_mouse(&mut c, &cfg, 100.0, 50.0);
    assert_eq!(out.transition, Transition::Started(DragSource::Mouse));
    assert_eq!(out.value, None);
    assert!(c.is_dragging());

    // 50px up over a 200px sensitivity is a quarter of the range
    assert_eq!(move_mouse(&mut c, &cfg, 50.0, 50.0), Some(75.0));
}

#[test]
fn downward_drag_decreases_and_clamps() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    assert_eq!(move_mouse(&mut c, &cfg, 150.0, 50.0), Some(25.0));
    assert_eq!(move_mouse(&mut c, &cfg, 10_000.0, 25.0), Some(0.0));
    assert_eq!(move_mouse(&mut c, &cfg, -10_000.0, 0.0), Some(100.0));
}

#[test]
fn drag_is_anchored_to_the_start_value() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    assert_eq!(move_mouse(&mut c, &cfg, 50.0, 50.0), Some(75.0));
    // owner accepted 75; the next move is still measured from y=100 and 50
    assert_eq!(move_mouse(&mut c, &cfg, 50.0, 75.0), None);
    assert_eq!(move_mouse(&mut c, &cfg, 40.0, 75.0), Some(80.0));
    assert_eq!(
        c.session(),
        Some(DragSession {
            source: DragSource::Mouse,
            start_y: 100.0,
            start_value: 50.0,
        })
    );
}

#[test]
fn drag_end_returns_to_idle_and_stops_moves() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    let out = c.handle(
        &cfg,
        50.0,
        InputEvent::DragEnd {
            source: DragSource::Mouse,
        },
    );
    assert_eq!(out.transition, Transition::Ended(DragSource::Mouse));
    assert_eq!(c.state(), GestureState::Idle);
    assert_eq!(move_mouse(&mut c, &cfg, 0.0, 50.0), None);

    // a second end is a no-op, so listeners are never released twice
    let again = c.handle(
        &cfg,
        50.0,
        InputEvent::DragEnd {
            source: DragSource::Mouse,
        },
    );
    assert_eq!(again.transition, Transition::None);
}

#[test]
fn events_from_the_other_device_do_not_touch_the_session() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    let touch_move = c.handle(
        &cfg,
        50.0,
        InputEvent::DragMove {
            source: DragSource::Touch,
            y: 0.0,
        },
    );
    assert_eq!(touch_move, Outcome::default());
    let touch_end = c.handle(
        &cfg,
        50.0,
        InputEvent::DragEnd {
            source: DragSource::Touch,
        },
    );
    assert_eq!(touch_end.transition, Transition::None);
    assert!(c.is_dragging());
}

#[test]
fn touch_drag_behaves_like_mouse_drag() {
    let cfg = config();
    let mut c = GestureController::new();
    let out = c.handle(
        &cfg,
        20.0,
        InputEvent::DragStart {
            source: DragSource::Touch,
            y: 300.0,
        },
    );
    assert_eq!(out.transition, Transition::Started(DragSource::Touch));
    let moved = c.handle(
        &cfg,
        20.0,
        InputEvent::DragMove {
            source: DragSource::Touch,
            y: 280.0,
        },
    );
    assert_eq!(moved.value, Some(30.0));
}

#[test]
fn new_start_replaces_a_stale_session() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    let out = c.handle(
        &cfg,
        60.0,
        InputEvent::DragStart {
            source: DragSource::Touch,
            y: 10.0,
        },
    );
    assert_eq!(
        out.transition,
        Transition::Replaced {
            ended: DragSource::Mouse,
            started: DragSource::Touch,
        }
    );
    let session = c.session().expect("session should be live");
    assert_eq!(session.source, DragSource::Touch);
    assert_eq!(session.start_value, 60.0);
}

#[test]
fn teardown_force_releases_a_live_session_once() {
    let cfg = config();
    let mut c = GestureController::new();
    assert_eq!(c.teardown(), None);
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    assert_eq!(c.teardown(), Some(DragSource::Mouse));
    assert_eq!(c.teardown(), None);
    assert!(!c.is_dragging());
}

#[test]
fn wheel_moves_one_step_per_event() {
    let cfg = stepped(5.0);
    let mut c = GestureController::new();
    let up = c.handle(&cfg, 50.0, InputEvent::Wheel { delta_y: -100.0 });
    assert_eq!(up.value, Some(55.0));
    let down = c.handle(&cfg, 50.0, InputEvent::Wheel { delta_y: 3.0 });
    assert_eq!(down.value, Some(45.0));
    let none = c.handle(&cfg, 50.0, InputEvent::Wheel { delta_y: 0.0 });
    assert_eq!(none.value, None);
    let at_max = c.handle(&cfg, 100.0, InputEvent::Wheel { delta_y: -1.0 });
    assert_eq!(at_max.value, None);
}

#[test]
fn wheel_applies_during_a_drag() {
    let cfg = stepped(5.0);
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 50.0);
    let up = c.handle(&cfg, 50.0, InputEvent::Wheel { delta_y: -1.0 });
    assert_eq!(up.value, Some(55.0));
}

#[test]
fn click_on_arc_maps_through_angle() {
    let cfg = config();
    let mut c = GestureController::new();
    // straight up on the default 56px knob is the middle of the sweep
    let top = c.handle(&cfg, 0.0, InputEvent::Click { x: 28.0, y: 0.0 });
    assert_eq!(top.value, Some(50.0));
    // straight down is in the gap, 45 degrees past the end: resolves to max
    let bottom = c.handle(&cfg, 0.0, InputEvent::Click { x: 28.0, y: 56.0 });
    assert_eq!(bottom.value, Some(100.0));
    // already there: nothing to emit
    let same = c.handle(&cfg, 50.0, InputEvent::Click { x: 28.0, y: 0.0 });
    assert_eq!(same.value, None);
}

#[test]
fn click_during_drag_is_suppressed() {
    let cfg = config();
    let mut c = GestureController::new();
    start_mouse(&mut c, &cfg, 100.0, 0.0);
    let out = c.handle(&cfg, 0.0, InputEvent::Click { x: 28.0, y: 0.0 });
    assert_eq!(out.value, None);
}

#[test]
fn keys_require_focus() {
    let cfg = config();
    let mut c = GestureController::new();
    let unfocused = c.handle(&cfg, 10.0, InputEvent::Key(KnobKey::Increment));
    assert_eq!(unfocused.value, None);

    c.handle(&cfg, 10.0, InputEvent::Focus);
    assert!(c.is_focused());
    let focused = c.handle(&cfg, 10.0, InputEvent::Key(KnobKey::Increment));
    assert_eq!(focused.value, Some(11.0));

    c.handle(&cfg, 11.0, InputEvent::Blur);
    let blurred = c.handle(&cfg, 11.0, InputEvent::Key(KnobKey::Decrement));
    assert_eq!(blurred.value, None);
}

#[test]
fn keys_step_and_clamp_at_bounds() {
    let cfg = stepped(5.0);
    let mut c = GestureController::new();
    c.handle(&cfg, 98.0, InputEvent::Focus);
    // 98 + 5 = 103 clamps to 100
    let up = c.handle(&cfg, 98.0, InputEvent::Key(KnobKey::Increment));
    assert_eq!(up.value, Some(100.0));
    let down = c.handle(&cfg, 50.0, InputEvent::Key(KnobKey::Decrement));
    assert_eq!(down.value, Some(45.0));
    let home = c.handle(&cfg, 50.0, InputEvent::Key(KnobKey::Home));
    assert_eq!(home.value, Some(0.0));
    let end = c.handle(&cfg, 50.0, InputEvent::Key(KnobKey::End));
    assert_eq!(end.value, Some(100.0));
    let end_again = c.handle(&cfg, 100.0, InputEvent::Key(KnobKey::End));
    assert_eq!(end_again.value, None);
}

#[test]
fn disabled_knob_ignores_every_input() {
    let cfg = config().with_disabled(true);
    let mut c = GestureController::new();
    c.handle(&cfg, 50.0, InputEvent::Focus);
    let events = [
        InputEvent::DragStart {
            source: DragSource::Mouse,
            y: 100.0,
        },
        InputEvent::DragMove {
            source: DragSource::Mouse,
            y: 0.0,
        },
        InputEvent::DragStart {
            source: DragSource::Touch,
            y: 100.0,
        },
        InputEvent::DragMove {
            source: DragSource::Touch,
            y: 0.0,
        },
        InputEvent::Wheel { delta_y: -1.0 },
        InputEvent::Wheel { delta_y: 1.0 },
        InputEvent::Click { x: 28.0, y: 0.0 },
        InputEvent::Key(KnobKey::Increment),
        InputEvent::Key(KnobKey::Decrement),
        InputEvent::Key(KnobKey::Home),
        InputEvent::Key(KnobKey::End),
    ];
    for ev in events {
        let out = c.handle(&cfg, 50.0, ev);
        assert_eq!(out, Outcome::default(), "{ev:?} should be inert");
    }
    assert!(!c.is_dragging());
}

#[test]
fn disabling_mid_drag_stops_emissions_but_still_ends_the_session() {
    let enabled = config();
    let disabled = enabled.with_disabled(true);
    let mut c = GestureController::new();
    start_mouse(&mut c, &enabled, 100.0, 50.0);
    assert_eq!(move_mouse(&mut c, &disabled, 0.0, 50.0), None);
    let end = c.handle(
        &disabled,
        50.0,
        InputEvent::DragEnd {
            source: DragSource::Mouse,
        },
    );
    assert_eq!(end.transition, Transition::Ended(DragSource::Mouse));
    assert!(!c.is_dragging());
}

#[test]
fn every_emission_is_in_range_and_on_the_grid() {
    let cfg = KnobConfig::default().with_range(-3.0, 7.0, 0.5);
    let mut c = GestureController::new();
    c.handle(&cfg, -3.0, InputEvent::Focus);
    let mut current = -3.0;
    start_mouse(&mut c, &cfg, 500.0, current);
    for y in (0..1000).rev().step_by(7) {
        if let Some(v) = move_mouse(&mut c, &cfg, f64::from(y), current) {
            assert!(cfg.range.contains(v));
            let steps = (v - cfg.range.min) / cfg.range.step;
            assert!((steps - steps.round()).abs() < 1e-9, "{v} off grid");
            current = v;
        }
    }
}
