use super::*;

fn default_model() -> WidthModel {
    WidthModel::new(0.7, 0.5, 2.5)
}

/// Two samples 10px apart over 10ms: raw velocity exactly 1.0 px/ms.
fn unit_velocity_pair() -> (Point, Point) {
    (Point::new(10.0, 0.0, 10), Point::new(0.0, 0.0, 0))
}

// =============================================================
// Initial state and reset
// =============================================================

#[test]
fn first_pair_starts_at_the_width_midpoint() {
    let mut model = default_model();
    let (new, prior) = unit_velocity_pair();
    let pair = model.width_for(new, prior);
    assert_eq!(pair.start, 1.5);
}

#[test]
fn reset_restores_midpoint_and_zero_velocity() {
    let mut model = default_model();
    let (new, prior) = unit_velocity_pair();
    model.width_for(new, prior);
    model.width_for(new, prior);

    model.reset();

    // Stationary pair after reset: EMA sees only zero velocity again.
    let still_prior = Point::new(5.0, 5.0, 0);
    let still_new = Point::new(5.0, 5.0, 16);
    let pair = model.width_for(still_new, still_prior);
    assert_eq!(pair.start, 1.5);
    assert_eq!(pair.end, 2.5);
}

#[test]
fn midpoint_width_is_average_of_bounds() {
    let model = WidthModel::new(0.7, 1.0, 4.0);
    assert_eq!(model.midpoint_width(), 2.5);
}

// =============================================================
// Velocity response
// =============================================================

#[test]
fn zero_velocity_yields_max_width() {
    let mut model = default_model();
    let prior = Point::new(5.0, 5.0, 0);
    let new = Point::new(5.0, 5.0, 16);
    let pair = model.width_for(new, prior);
    assert_eq!(pair.end, 2.5);
}

#[test]
fn high_velocity_clamps_to_min_width() {
    let mut model = default_model();
    let prior = Point::new(0.0, 0.0, 0);
    let new = Point::new(1000.0, 0.0, 1);
    let pair = model.width_for(new, prior);
    assert_eq!(pair.end, 0.5);
}

#[test]
fn unit_velocity_width_matches_formula() {
    let mut model = default_model();
    let (new, prior) = unit_velocity_pair();
    let pair = model.width_for(new, prior);
    // EMA warm-up from zero: v = 0.7 * 1.0, w = 2.5 / 1.7.
    assert!((pair.end - 2.5 / 1.7).abs() < 1e-12);
}

#[test]
fn widths_stay_within_bounds_for_all_velocities() {
    for distance in [0.0, 0.1, 1.0, 5.0, 25.0, 400.0, 10_000.0] {
        let mut model = default_model();
        let prior = Point::new(0.0, 0.0, 0);
        let new = Point::new(distance, 0.0, 10);
        let pair = model.width_for(new, prior);
        assert!(pair.end >= 0.5 && pair.end <= 2.5, "width {} out of bounds", pair.end);
    }
}

// =============================================================
// Smoothing and continuity
// =============================================================

#[test]
fn ema_converges_toward_sustained_velocity() {
    let mut model = default_model();
    let (new, prior) = unit_velocity_pair();
    let first = model.width_for(new, prior);
    let second = model.width_for(new, prior);
    // Filtered velocity rises toward 1.0, so width keeps thinning.
    assert!(second.end < first.end);
}

#[test]
fn consecutive_pairs_chain_start_to_end() {
    let mut model = default_model();
    let (new, prior) = unit_velocity_pair();
    let first = model.width_for(new, prior);
    let second = model.width_for(new, prior);
    assert_eq!(second.start, first.end);
}

// =============================================================
// WidthPair interpolation
// =============================================================

#[test]
fn interpolation_hits_both_endpoints() {
    let pair = WidthPair { start: 1.0, end: 3.0 };
    assert_eq!(pair.at(0.0), 1.0);
    assert_eq!(pair.at(1.0), 3.0);
}

#[test]
fn interpolation_is_cubic_not_linear() {
    let pair = WidthPair { start: 0.0, end: 8.0 };
    // t^3 bias toward the end point: halfway along, only 1/8 of the delta.
    assert_eq!(pair.at(0.5), 1.0);
}
