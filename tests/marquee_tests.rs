// Host-side tests for the marquee engine.

use folio_core::constants::{HOVER_DAMPING_RATIO, MAX_FRAME_MS, VELOCITY_SMOOTHING};
use folio_core::{wrap, Direction, Marquee, MarqueeConfig};
use std::time::Duration;

fn reference_frame() -> Duration {
    Duration::from_secs_f64(0.016667)
}

fn marquee(speed: f64, direction: Direction, width: f64) -> Marquee {
    Marquee::new(MarqueeConfig::new(speed, direction), width)
}

fn settle(m: &mut Marquee) {
    for _ in 0..600 {
        m.tick(reference_frame());
    }
}

#[test]
fn wrap_keeps_positions_in_half_open_cycle() {
    assert_eq!(wrap(0.0, 1000.0), 0.0);
    assert_eq!(wrap(-1500.0, 1000.0), -500.0);
    assert_eq!(wrap(250.0, 1000.0), -750.0);
    assert_eq!(wrap(-999.5, 1000.0), -999.5);
    // -0.0 compares equal to 0.0
    assert_eq!(wrap(-1000.0, 1000.0), 0.0);
}

#[test]
fn wrap_never_lands_on_the_open_end() {
    let pos = wrap(1e-14, 1000.0);
    assert!(pos > -1000.0 && pos <= 0.0, "pos={}", pos);
    assert_eq!(pos, 0.0);

    let mut m = marquee(1.0, Direction::Reverse, 1000.0);
    m.begin_drag(0.0);
    let pos = m.update_drag(1e-14).unwrap();
    assert!(pos > -1000.0 && pos <= 0.0, "pos={}", pos);
}

#[test]
fn wrap_passes_through_without_width() {
    assert_eq!(wrap(42.0, 0.0), 42.0);
    assert_eq!(wrap(-7.5, -10.0), -7.5);
    assert_eq!(wrap(3.0, f64::NAN), 3.0);
    assert_eq!(wrap(3.0, f64::INFINITY), 3.0);
}

#[test]
fn first_tick_applies_easing_formula() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    assert_eq!(m.current_velocity(), 0.0);
    let pos = m.tick(reference_frame());
    let expected_v = (1.0 - 0.0) * VELOCITY_SMOOTHING;
    assert!((m.current_velocity() - expected_v).abs() < 1e-12);
    assert!((pos + expected_v).abs() < 1e-6, "pos={}", pos);
}

#[test]
fn settled_velocity_moves_one_speed_per_reference_frame() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    settle(&mut m);
    assert!((m.current_velocity() - 1.0).abs() < 1e-9);
    let before = m.position();
    let after = m.tick(reference_frame());
    let moved = (before - after).rem_euclid(1000.0);
    assert!((moved - 1.0).abs() < 1e-3, "moved={}", moved);
}

#[test]
fn idle_ticks_never_leave_the_cycle() {
    let width = 250.0;
    let mut m = marquee(37.3, Direction::Forward, width);
    let mut prev = m.position();
    for i in 0..2_000 {
        let pos = m.tick(Duration::from_millis(16 + (i % 20)));
        assert!(pos > -width && pos <= 0.0, "tick {} escaped: {}", i, pos);
        let moved = (prev - pos).rem_euclid(width);
        assert!(moved > 0.0, "tick {} did not advance", i);
        prev = pos;
    }
}

#[test]
fn reverse_direction_moves_right() {
    let mut m = marquee(1.0, Direction::Reverse, 1000.0);
    let pos = m.tick(reference_frame());
    // +0.055 wraps to the far end of the cycle.
    assert!(pos > -1000.0 && pos < -999.9, "pos={}", pos);
    let next = m.tick(reference_frame());
    assert!(next > pos);
}

#[test]
fn elapsed_time_is_clamped() {
    let mut a = marquee(2.0, Direction::Forward, 1_000_000.0);
    let mut b = a.clone();
    a.tick(Duration::from_secs(5));
    b.tick(Duration::from_secs_f64(MAX_FRAME_MS / 1000.0));
    assert!((a.position() - b.position()).abs() < 1e-9);
}

#[test]
fn zero_width_never_moves() {
    let mut m = marquee(0.55, Direction::Forward, 0.0);
    for _ in 0..500 {
        let pos = m.tick(reference_frame());
        assert_eq!(pos, 0.0);
    }
    assert!(m.current_velocity() > 0.0);
}

#[test]
fn hover_damps_and_restores_target() {
    let mut m = marquee(0.8, Direction::Forward, 500.0);
    assert_eq!(m.target_velocity(), 0.8);
    m.set_hovered(true);
    assert!((m.target_velocity() - 0.8 * HOVER_DAMPING_RATIO).abs() < 1e-12);
    assert!(m.target_velocity() < 0.8);
    m.set_hovered(false);
    assert_eq!(m.target_velocity(), 0.8);
}

#[test]
fn drag_pins_velocity_to_zero() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    settle(&mut m);
    m.begin_drag(200.0);
    assert!(m.is_dragging());
    assert_eq!(m.current_velocity(), 0.0);
    assert_eq!(m.target_velocity(), 0.0);
    let pos = m.position();
    for _ in 0..10 {
        assert_eq!(m.tick(reference_frame()), pos);
    }
    assert_eq!(m.current_velocity(), 0.0);
}

#[test]
fn drag_round_trip_without_movement_keeps_position() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    for _ in 0..37 {
        m.tick(reference_frame());
    }
    let pos = m.position();
    m.begin_drag(300.0);
    assert_eq!(m.update_drag(300.0), Some(pos));
    assert!(m.end_drag());
    assert_eq!(m.position(), pos);
}

#[test]
fn drag_follows_pointer_delta() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    settle(&mut m);
    let start = m.position();
    m.begin_drag(100.0);
    let pos = m.update_drag(150.0).unwrap();
    assert!((pos - wrap(start + 50.0, 1000.0)).abs() < 1e-9);
    let pos = m.update_drag(-2_900.0).unwrap();
    assert!((pos - wrap(start - 3_000.0, 1000.0)).abs() < 1e-9);
    assert!(pos > -1000.0 && pos <= 0.0);
    assert_eq!(m.drag_state().pointer_start_x, 100.0);
    assert_eq!(m.drag_state().position_at_start, start);
}

#[test]
fn release_resumes_hover_aware_target() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    m.begin_drag(0.0);
    m.set_hovered(true);
    // Hovering during a drag does not unpin velocity.
    assert_eq!(m.target_velocity(), 0.0);
    m.end_drag();
    assert!((m.target_velocity() - HOVER_DAMPING_RATIO).abs() < 1e-12);
    assert_eq!(m.current_velocity(), 0.0);
    m.tick(reference_frame());
    assert!(m.current_velocity() > 0.0);

    m.begin_drag(0.0);
    m.set_hovered(false);
    m.end_drag();
    assert_eq!(m.target_velocity(), 1.0);
}

#[test]
fn drag_calls_without_active_drag_are_ignored() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    m.tick(reference_frame());
    let pos = m.position();
    assert_eq!(m.update_drag(500.0), None);
    assert!(!m.end_drag());
    assert_eq!(m.position(), pos);
    assert_eq!(m.target_velocity(), 1.0);
}

#[test]
fn new_width_rewraps_position() {
    let mut m = marquee(1.0, Direction::Forward, 1000.0);
    m.begin_drag(0.0);
    m.update_drag(-900.0);
    m.end_drag();
    assert_eq!(m.position(), -900.0);
    m.set_track_width(500.0);
    assert_eq!(m.track_width(), 500.0);
    assert_eq!(m.position(), -400.0);
}
