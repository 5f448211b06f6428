use sentiment_core::gradient::{hsl_to_rgb, GradientAnimator};

#[test]
fn test_hsl_primary_hues() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.5), [255, 0, 0]);
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.5), [0, 255, 0]);
    assert_eq!(hsl_to_rgb(240.0, 1.0, 0.5), [0, 0, 255]);
}

#[test]
fn test_hsl_pastel() {
    assert_eq!(hsl_to_rgb(0.0, 1.0, 0.9), [255, 204, 204]);
    assert_eq!(hsl_to_rgb(60.0, 1.0, 0.9), [255, 255, 204]);
    assert_eq!(hsl_to_rgb(120.0, 1.0, 0.9), [204, 255, 204]);
}

#[test]
fn test_hsl_grey_and_wraparound() {
    assert_eq!(hsl_to_rgb(200.0, 0.0, 0.5), [128, 128, 128]);
    assert_eq!(hsl_to_rgb(360.0, 1.0, 0.5), hsl_to_rgb(0.0, 1.0, 0.5));
    assert_eq!(hsl_to_rgb(-120.0, 1.0, 0.5), hsl_to_rgb(240.0, 1.0, 0.5));
}

#[test]
fn test_tick_advances_one_degree() {
    let mut g = GradientAnimator::default();
    g.tick();
    assert_eq!(g.hue(), 1);
    g.tick();
    assert_eq!(g.hue(), 2);
}

#[test]
fn test_tick_wraps_at_360() {
    let mut g = GradientAnimator::new(359);
    g.tick();
    assert_eq!(g.hue(), 0);
}

#[test]
fn test_new_normalizes_hue() {
    assert_eq!(GradientAnimator::new(725).hue(), 5);
}

#[test]
fn test_stops_are_offset_by_sixty_degrees() {
    let stops = GradientAnimator::new(0).stops();
    assert_eq!(stops[0], [255, 204, 204]);
    assert_eq!(stops[1], [255, 255, 204]);
    assert_eq!(stops[2], [204, 255, 204]);
}

#[test]
fn test_stops_wrap_past_360() {
    let stops = GradientAnimator::new(300).stops();
    assert_eq!(stops[1], hsl_to_rgb(0.0, 1.0, 0.9));
    assert_eq!(stops[2], hsl_to_rgb(60.0, 1.0, 0.9));
}
