// Host-side tests for pointer smoothing and force falloff.

use folio_core::pointer::{pointer_push, relax};
use folio_core::{falloff, ForceDirection, PointerState};
use glam::Vec2;

#[test]
fn falloff_is_one_at_centre_and_zero_at_radius() {
    assert_eq!(falloff(0.0, 250.0, 3), 1.0);
    assert_eq!(falloff(250.0, 250.0, 3), 0.0);
    assert_eq!(falloff(400.0, 250.0, 3), 0.0);
    assert_eq!(falloff(10.0, 0.0, 1), 0.0);
    assert_eq!(falloff(f32::NAN, 250.0, 3), 0.0);
}

#[test]
fn falloff_decreases_with_distance() {
    for k in [1, 3] {
        let mut prev = falloff(0.0, 100.0, k);
        for d in 1..100 {
            let w = falloff(d as f32, 100.0, k);
            assert!(w <= prev, "k={k} d={d}: {w} > {prev}");
            assert!((0.0..=1.0).contains(&w));
            prev = w;
        }
    }
}

#[test]
fn cubic_falloff_drops_faster_than_linear() {
    let linear = falloff(50.0, 100.0, 1);
    let cubic = falloff(50.0, 100.0, 3);
    assert!((linear - 0.5).abs() < 1e-6);
    assert!((cubic - 0.125).abs() < 1e-6);
}

#[test]
fn repel_pushes_away_and_attract_pulls_in() {
    let pos = Vec2::new(100.0, 100.0);
    let pointer = Vec2::new(110.0, 100.0);
    let away = pointer_push(pos, pointer, 250.0, 3, 0.3, ForceDirection::Repel);
    let toward = pointer_push(pos, pointer, 250.0, 3, 0.3, ForceDirection::Attract);
    assert!(away.x < 0.0);
    assert!(toward.x > 0.0);
    assert_eq!(away, -toward);

    let outside = pointer_push(pos, Vec2::new(1000.0, 100.0), 250.0, 3, 0.3, ForceDirection::Repel);
    assert_eq!(outside, Vec2::ZERO);
}

#[test]
fn relax_converges_to_base() {
    let base = Vec2::new(10.0, 20.0);
    let mut pos = Vec2::new(40.0, -5.0);
    for _ in 0..300 {
        pos = relax(pos, base, 0.92);
    }
    assert!(pos.distance(base) < 1e-3);
}

#[test]
fn smoothing_approaches_raw_position() {
    let mut p = PointerState::default();
    p.record(100.0, 50.0);
    p.smooth(0.5);
    assert_eq!(p.smoothed, Vec2::new(50.0, 25.0));
    assert_eq!(p.velocity, Vec2::new(50.0, 25.0));
    for _ in 0..40 {
        p.smooth(0.5);
    }
    assert!(p.smoothed.distance(p.raw) < 1e-3);
    assert!(p.velocity.length() < 1e-3);
}

#[test]
fn full_smoothing_tracks_raw_immediately() {
    let mut p = PointerState::default();
    p.record(-0.25, 0.75);
    p.smooth(1.0);
    assert_eq!(p.smoothed, p.raw);
}

#[test]
fn non_finite_positions_are_ignored() {
    let mut p = PointerState::at(Vec2::new(5.0, 5.0));
    assert!(!p.moved);
    p.record(f32::NAN, 3.0);
    assert_eq!(p.raw, Vec2::new(5.0, 5.0));
    assert!(!p.moved);
    p.record(6.0, 7.0);
    assert!(p.moved);
}

#[test]
fn press_state_toggles() {
    let mut p = PointerState::default();
    p.set_pressed(true);
    assert!(p.pressed);
    p.set_pressed(false);
    assert!(!p.pressed);
}
