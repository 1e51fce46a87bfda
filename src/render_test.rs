use super::*;

use crate::curve::Vec2;

fn straight_segment() -> CurveSegment {
    CurveSegment {
        start: Point::new(3.0, 8.0, 0),
        c1: Vec2::new(8.0, 8.0),
        c2: Vec2::new(13.0, 8.0),
        end: Point::new(18.0, 8.0, 30),
    }
}

// =============================================================
// Segments
// =============================================================

#[test]
fn segment_paints_along_its_path() {
    let mut surface = Surface::new(24, 16);
    surface.clear(Color::WHITE);
    draw_segment(
        &mut surface,
        &straight_segment(),
        WidthPair { start: 2.0, end: 2.0 },
        Color::BLACK,
    );

    assert!(!surface.is_empty());
    // Interior of the stroke is solid ink; far corners stay background.
    assert_eq!(surface.pixel(10, 8), Color::BLACK);
    assert_eq!(surface.pixel(0, 0), Color::WHITE);
    assert_eq!(surface.pixel(23, 15), Color::WHITE);
}

#[test]
fn segment_width_varies_between_start_and_end() {
    let mut surface = Surface::new(40, 20);
    surface.clear(Color::WHITE);
    let segment = CurveSegment {
        start: Point::new(5.0, 10.0, 0),
        c1: Vec2::new(15.0, 10.0),
        c2: Vec2::new(25.0, 10.0),
        end: Point::new(35.0, 10.0, 30),
    };
    draw_segment(
        &mut surface,
        &segment,
        WidthPair { start: 4.0, end: 1.0 },
        Color::BLACK,
    );

    // Near the start the ribbon is ~4px half-width, so a pixel 3px off the
    // spine is inked; near the end it has thinned below that.
    assert_eq!(surface.pixel(6, 7), Color::BLACK);
    assert_eq!(surface.pixel(33, 7), Color::WHITE);
}

#[test]
fn non_finite_segment_paints_nothing() {
    let mut surface = Surface::new(16, 16);
    let segment = CurveSegment {
        start: Point::new(0.0, 0.0, 0),
        c1: Vec2::new(f64::NAN, f64::NAN),
        c2: Vec2::new(f64::NAN, f64::NAN),
        end: Point::new(10.0, 10.0, 10),
    };
    draw_segment(
        &mut surface,
        &segment,
        WidthPair { start: 2.0, end: 2.0 },
        Color::BLACK,
    );
    assert!(surface.is_empty());
}

#[test]
fn zero_length_segment_paints_nothing() {
    let mut surface = Surface::new(16, 16);
    let p = Point::new(8.0, 8.0, 0);
    let segment = CurveSegment {
        start: p,
        c1: p.pos(),
        c2: p.pos(),
        end: p,
    };
    draw_segment(
        &mut surface,
        &segment,
        WidthPair { start: 2.0, end: 2.0 },
        Color::BLACK,
    );
    assert!(surface.is_empty());
}

// =============================================================
// Dots
// =============================================================

#[test]
fn dot_paints_a_disc_at_the_point() {
    let mut surface = Surface::new(12, 12);
    surface.clear(Color::WHITE);
    draw_dot(&mut surface, Point::new(6.0, 6.0, 0), 2.0, Color::BLACK);
    assert!(!surface.is_empty());
    assert_eq!(surface.pixel(6, 6), Color::BLACK);
    assert_eq!(surface.pixel(0, 0), Color::WHITE);
}
