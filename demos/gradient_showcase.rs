#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Gradient Showcase Example
//!
//! Builds one gradient per harmony, prints their CSS, and writes SVG and PNG
//! output plus a few frames of the animated renderer.
//!
//! Run with: `RUST_LOG=chroma_gradient=debug cargo run --example gradient_showcase`

use chroma_gradient::prelude::*;
use chroma_gradient::render::crossfade;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const WIDTH: u32 = 480;
const HEIGHT: u32 = 120;

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_gradient=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("Chroma Gradient Showcase");
    println!("========================\n");
    println!("SIMD backend: {:?}\n", Framebuffer::backend());

    let base = Lch::new(62.0, 70.0, 20.0);

    // Example 1: CSS for every harmony
    println!("1. Harmony gradients as CSS...");
    for harmony in Harmony::ALL {
        let gradient = Gradient::from_harmony(harmony, &base);
        println!("   {harmony:>19}: {}", css::linear_gradient(&gradient, css::lch));
    }
    println!();

    // Example 2: Vector SVG with one band per harmony
    println!("2. Writing harmony bands as SVG...");
    let band = 40.0_f32;
    let mut svg = SvgEncoder::new(WIDTH, (band as u32) * Harmony::ALL.len() as u32);
    for (i, harmony) in Harmony::ALL.into_iter().enumerate() {
        let gradient = Gradient::linear(
            90.0,
            Point::ORIGIN,
            Point::new(f64::from(WIDTH), 0.0),
            Gradient::from_harmony(harmony, &base).stops().to_vec(),
        );
        let id = harmony.name();
        svg = svg
            .linear_gradient(id, &gradient)
            .rect(0.0, i as f32 * band, WIDTH as f32, band, SvgFill::gradient(id));
    }
    svg.write_to_file("harmony_bands.svg").expect("Failed to write SVG");
    println!("   Saved: harmony_bands.svg\n");

    // Example 3: Rasterized linear and radial gradients
    println!("3. Rasterizing linear and radial gradients...");
    let linear = Gradient::linear(
        90.0,
        Point::ORIGIN,
        Point::new(f64::from(WIDTH), f64::from(HEIGHT)),
        base.tetradic().to_vec(),
    );
    let fb = Rasterizer::new(WIDTH, HEIGHT).render(&linear).expect("Failed to rasterize");
    PngEncoder::write_to_file(&fb, "linear_tetradic.png").expect("Failed to write PNG");
    let (min, max, mean) = fb.luminance_stats();
    println!("   Saved: linear_tetradic.png (luminance min {min:.1}, max {max:.1}, mean {mean:.1})");

    let radial = Gradient::radial(
        Point::new(f64::from(HEIGHT), f64::from(HEIGHT)),
        f64::from(HEIGHT),
        vec![Hsl::new(200.0, 90.0, 60.0), Hsl::new(200.0, 90.0, 60.0).complementary()],
    );
    let mut rasterizer = Rasterizer::new(WIDTH, HEIGHT);
    rasterizer.set_dimensions(HEIGHT * 2, HEIGHT * 2);
    let fb = rasterizer.render(&radial).expect("Failed to rasterize");
    PngEncoder::write_to_file(&fb, "radial_complementary.png").expect("Failed to write PNG");
    println!("   Saved: radial_complementary.png ({}x{})\n", fb.width(), fb.height());

    // Example 4: Animated frames
    println!("4. Rendering animated frames...");
    let animated = AnimatedGradient::new(&Gradient::from_analogous(&base), WIDTH, HEIGHT);
    let mut previous = None;
    for (i, time) in [0.0, 0.5, 1.0, 1.5].into_iter().enumerate() {
        let frame = animated.render_frame(time).expect("Failed to render frame");
        let path = format!("animated_{i}.png");
        PngEncoder::write_to_file(&frame, &path).expect("Failed to write PNG");
        println!("   Saved: {path} (t = {time}s)");

        if let Some(prev) = previous.replace(frame.clone()) {
            if i == 3 {
                let blend = crossfade(&prev, &frame, 0.5).expect("Failed to crossfade");
                SvgEncoder::from_framebuffer(&blend)
                    .expect("Failed to embed frame")
                    .write_to_file("animated_crossfade.svg")
                    .expect("Failed to write SVG");
                println!("   Saved: animated_crossfade.svg");
            }
        }
    }

    println!("\nDone!");
}
