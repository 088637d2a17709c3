//! Pixel Verification Tests
//!
//! Rendered frames must agree with the color model: a pixel sitting exactly on
//! a stop has that stop's sRGB value, ramps between stops are monotone, and
//! geometry decides where each color lands.
//!
//! Run: cargo test --test pixel_verification_test

#![allow(clippy::unwrap_used)]

use chroma_gradient::prelude::*;

fn gray(lightness: f64) -> Hsl {
    Hsl::new(0.0, 0.0, lightness)
}

// ============================================================================
// STOP COLORS
// ============================================================================

/// Pixels centered on stops reproduce the reference LCh conversions
#[test]
fn pixel_stops_match_lch_reference() {
    let base = Lch::new(50.0, 100.0, 0.0);
    // Pixel centers at x = 0.5, 1.5, 2.5 map to t = 0, 0.5, 1
    let gradient = Gradient::linear(90.0, Point::new(0.5, 0.0), Point::new(2.5, 0.0), base.triad().to_vec());

    let fb = Rasterizer::new(3, 1).render(&gradient).unwrap();

    assert_eq!(fb.get_pixel(0, 0), Some(Rgba::rgb(255, 0, 123)));
    assert_eq!(fb.get_pixel(1, 0), Some(Rgba::rgb(52, 137, 0)));
    assert_eq!(fb.get_pixel(2, 0), Some(Rgba::rgb(0, 148, 255)));
}

/// Stop alpha reaches the pixel's alpha channel
#[test]
fn pixel_alpha_follows_stop_alpha() {
    let gradient = Gradient::new(vec![Lch::with_alpha(50.0, 0.0, 0.0, 0.5)]);
    let fb = Rasterizer::new(2, 2).render(&gradient).unwrap();
    assert_eq!(fb.get_pixel(1, 1), Some(Rgba::new(119, 119, 119, 128)));
}

// ============================================================================
// RAMPS
// ============================================================================

/// A black-to-white ramp never gets darker left to right
#[test]
fn pixel_ramp_is_monotone() {
    let gradient = Gradient::new(vec![gray(0.0), gray(100.0)]);
    let fb = Rasterizer::new(64, 1).render(&gradient).unwrap();

    let reds: Vec<u8> = (0..64).map(|x| fb.get_pixel(x, 0).unwrap().r).collect();
    assert!(reds.windows(2).all(|w| w[0] <= w[1]), "{reds:?}");
    assert!(reds[0] < 5);
    assert!(reds[63] > 250);
}

/// Luminance statistics span the ramp
#[test]
fn pixel_luminance_stats_span_ramp() {
    let gradient = Gradient::new(vec![gray(0.0), gray(100.0)]);
    let fb = Rasterizer::new(128, 4).render(&gradient).unwrap();

    let (min, max, mean) = fb.luminance_stats();
    assert!(min < 5.0);
    assert!(max > 250.0);
    assert!((mean - 127.5).abs() < 3.0, "mean {mean}");
}

/// Stops out of order in the input render in location order
#[test]
fn pixel_unsorted_stops_render_sorted() {
    let gradient = Gradient::new(vec![
        Stop::new(gray(100.0), 1.0),
        Stop::new(gray(0.0), 0.0),
    ]);
    let fb = Rasterizer::new(16, 1).render(&gradient).unwrap();
    assert!(fb.get_pixel(0, 0).unwrap().r < fb.get_pixel(15, 0).unwrap().r);
}

// ============================================================================
// GEOMETRY
// ============================================================================

/// Radial gradients are symmetric about their center
#[test]
fn pixel_radial_symmetry() {
    let gradient = Gradient::radial(Point::new(8.0, 8.0), 8.0, vec![gray(0.0), gray(100.0)]);
    let fb = Rasterizer::new(16, 16).render(&gradient).unwrap();

    for (x, y) in [(2, 5), (4, 1), (7, 3)] {
        let p = fb.get_pixel(x, y);
        assert_eq!(p, fb.get_pixel(15 - x, y));
        assert_eq!(p, fb.get_pixel(x, 15 - y));
        assert_eq!(p, fb.get_pixel(15 - x, 15 - y));
    }
}

/// Harmony gradients change only hue, so a zero-chroma harmony is flat
#[test]
fn pixel_gray_harmony_is_flat() {
    let gradient = Gradient::from_square(&Lch::new(70.0, 0.0, 45.0));
    let fb = Rasterizer::new(20, 2).render(&gradient).unwrap();

    let first = fb.get_pixel(0, 0);
    for x in 0..20 {
        assert_eq!(fb.get_pixel(x, 1), first);
    }
}

// ============================================================================
// ANIMATION
// ============================================================================

/// Frames only use palette colors and their blends, so a gray palette stays gray
#[test]
fn pixel_animated_gray_palette_stays_gray() {
    let gradient = Gradient::new(vec![gray(10.0), gray(90.0)]);
    let frame = AnimatedGradient::new(&gradient, 24, 16).render_frame(7.0).unwrap();

    for y in 0..16 {
        for x in 0..24 {
            let p = frame.get_pixel(x, y).unwrap();
            assert!(p.r.abs_diff(p.g) <= 1 && p.g.abs_diff(p.b) <= 1, "{p:?}");
        }
    }
}

/// Crossfading two frames halfway lands between them
#[test]
fn pixel_crossfade_between_frames() {
    let dark = Rasterizer::new(8, 8).render(&Gradient::new(vec![gray(0.0)])).unwrap();
    let light = Rasterizer::new(8, 8).render(&Gradient::new(vec![gray(100.0)])).unwrap();

    let mid = chroma_gradient::render::crossfade(&dark, &light, 0.5).unwrap();
    let p = mid.get_pixel(4, 4).unwrap();
    assert!((126..=129).contains(&p.r), "{p:?}");
}
