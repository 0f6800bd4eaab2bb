// Host-side tests for the ribbon spiral sampler.

use glam::Vec3;
use tree_core::{ConfigError, SpiralParams, SpiralPath};

fn approx(a: Vec3, b: Vec3, eps: f32) -> bool {
    a.distance(b) <= eps
}

#[test]
fn endpoints_match_ribbon_layout() {
    let spiral = SpiralPath::default();

    // Base: radius 3.0 + 0.15, height -3.5 + 0.3, angle 0
    assert!(approx(spiral.sample(0.0), Vec3::new(3.15, -3.2, 0.0), 1e-4));

    // Apex: radius 3.0 * 0.12 + 0.15, three full turns bring the angle back to 0
    assert!(approx(spiral.apex(), Vec3::new(0.51, 3.8, 0.0), 1e-4));
}

#[test]
fn sample_is_continuous() {
    let spiral = SpiralPath::default();
    let steps = 1000;
    let mut prev = spiral.sample(0.0);
    for i in 1..=steps {
        let p = spiral.sample(i as f32 / steps as f32);
        // Arc speed is at most ~60 units per unit t at the base
        assert!(prev.distance(p) < 0.1, "jump at step {}", i);
        prev = p;
    }
}

#[test]
fn height_and_radius_are_monotone() {
    let spiral = SpiralPath::default();
    let mut prev_h = f32::NEG_INFINITY;
    let mut prev_r = f32::INFINITY;
    for i in 0..=100 {
        let t = i as f32 / 100.0;
        let h = spiral.height_at(t);
        let r = spiral.radius_at(t);
        assert!(h > prev_h);
        assert!(r < prev_r);
        assert!(r > 0.0);
        prev_h = h;
        prev_r = r;
    }
}

#[test]
fn out_of_range_parameters_are_clamped() {
    let spiral = SpiralPath::default();
    assert_eq!(spiral.sample(-0.5), spiral.sample(0.0));
    assert_eq!(spiral.sample(1.7), spiral.sample(1.0));
    assert_eq!(spiral.sample(f32::NAN), spiral.sample(0.0));
}

#[test]
fn nearest_parameter_finds_sampled_points_exactly() {
    let spiral = SpiralPath::default();
    for i in 0..=50 {
        let t = i as f32 / 50.0;
        assert_eq!(spiral.nearest_parameter(spiral.sample(t)), t);
    }
}

#[test]
fn nearest_parameter_is_within_one_sample_step() {
    let spiral = SpiralPath::default();
    for &t in &[0.013_f32, 0.311, 0.5, 0.677, 0.99] {
        let p = spiral.sample(t);
        let found = spiral.nearest_parameter(p);
        assert!(
            (found - t).abs() <= 1.0 / 50.0 + 1e-6,
            "t={} found={}",
            t,
            found
        );
        // The sampled point is no farther than one step of arc length
        assert!(spiral.sample(found).distance(p) < 1.3);
    }
}

#[test]
fn nearest_parameter_for_points_off_the_curve() {
    let spiral = SpiralPath::default();

    // Far above the tree the apex wins
    assert_eq!(spiral.nearest_parameter(Vec3::new(0.0, 50.0, 0.0)), 1.0);
    // Far below, the base wins
    assert_eq!(spiral.nearest_parameter(Vec3::new(0.0, -50.0, 0.0)), 0.0);
    // Degenerate input still yields a valid parameter
    let t = spiral.nearest_parameter(Vec3::splat(f32::NAN));
    assert!((0.0..=1.0).contains(&t));
}

#[test]
fn points_span_base_to_apex() {
    let spiral = SpiralPath::default();
    assert!(spiral.points(0).is_empty());
    assert_eq!(spiral.points(1), vec![spiral.sample(0.0)]);

    let pts = spiral.points(5);
    assert_eq!(pts.len(), 5);
    assert_eq!(pts[0], spiral.sample(0.0));
    assert_eq!(pts[4], spiral.apex());
}

#[test]
fn ease_is_zero_at_ends_and_one_in_middle() {
    assert!(SpiralPath::ease(0.0).abs() < 1e-6);
    assert!(SpiralPath::ease(1.0).abs() < 1e-6);
    assert!((SpiralPath::ease(0.5) - 1.0).abs() < 1e-6);
}

#[test]
fn invalid_params_are_rejected() {
    let flat = SpiralParams {
        max_radius: 0.0,
        ..SpiralParams::default()
    };
    assert!(matches!(
        SpiralPath::new(flat),
        Err(ConfigError::NotPositive { name: "max_radius", .. })
    ));

    let inverted = SpiralParams {
        radius_shrink: 1.2,
        ..SpiralParams::default()
    };
    assert!(matches!(
        SpiralPath::new(inverted),
        Err(ConfigError::DegenerateApexRadius(_))
    ));

    let no_turns = SpiralParams {
        turns: 0,
        ..SpiralParams::default()
    };
    assert_eq!(SpiralPath::new(no_turns), Err(ConfigError::NoTurns));

    assert!(SpiralPath::new(SpiralParams::default()).is_ok());
}
