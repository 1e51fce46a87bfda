use super::*;

#[test]
fn rgb_is_fully_opaque() {
    let c = Color::rgb(10, 20, 30);
    assert_eq!(c.a, 255);
}

#[test]
fn constants() {
    assert_eq!(Color::BLACK, Color::rgba(0, 0, 0, 255));
    assert_eq!(Color::WHITE, Color::rgba(255, 255, 255, 255));
    assert_eq!(Color::TRANSPARENT.a, 0);
}

#[test]
fn alpha_fraction_maps_full_range() {
    assert_eq!(Color::BLACK.alpha_fraction(), 1.0);
    assert_eq!(Color::TRANSPARENT.alpha_fraction(), 0.0);
}

#[test]
fn css_string_for_opaque_and_transparent() {
    assert_eq!(Color::rgb(255, 0, 0).to_css(), "rgba(255,0,0,1)");
    assert_eq!(Color::TRANSPARENT.to_css(), "rgba(0,0,0,0)");
}

#[test]
fn serde_round_trip() {
    let c = Color::rgba(1, 2, 3, 4);
    let json = serde_json::to_string(&c).expect("serialize");
    let back: Color = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(back, c);
}
