#![allow(clippy::expect_used, clippy::unwrap_used)]
//! Palette Configuration Example
//!
//! Loads a YAML gradient description (or falls back to the default one),
//! prints its CSS and renders it to PNG.
//!
//! Run with: `cargo run --example palette_config --features config -- gradient.yaml`

use chroma_gradient::config::GradientConfig;
use chroma_gradient::output::PngEncoder;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const SAMPLE: &str = r"
version: 1
base: { space: hsl, hue: 330, saturation: 80, lightness: 55 }
harmony: split-complementary
geometry: { kind: radial, center: [128, 128], radius: 128 }
render: { width: 256, height: 256 }
";

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chroma_gradient=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => GradientConfig::load_or_default(path),
        None => GradientConfig::parse(SAMPLE).expect("Sample configuration is valid"),
    };

    println!("Configuration:\n{}", config.to_yaml().expect("Failed to serialize"));

    let gradient = config.build().expect("Failed to build gradient");
    println!("CSS: {}", gradient.to_css());

    let fb = gradient.rasterize(&config.rasterizer()).expect("Failed to rasterize");
    PngEncoder::write_to_file(&fb, "palette_config.png").expect("Failed to write PNG");
    println!("Saved: palette_config.png ({}x{})", fb.width(), fb.height());
}
