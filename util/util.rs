#![allow(dead_code)]

use std::sync::OnceLock;

use diffuse_dither::Image;
use palette::Srgba;

/// A smooth diagonal gradient with a horizontal alpha ramp.
#[allow(clippy::cast_precision_loss)]
pub fn gradient(width: u32, height: u32) -> Image<Srgba<f32>> {
    let pixels = (0..height)
        .flat_map(|y| {
            (0..width).map(move |x| {
                let u = x as f32 / width as f32;
                let v = y as f32 / height as f32;
                Srgba::new(u, v, (u + v) / 2.0, 1.0 - u / 2.0)
            })
        })
        .collect();

    Image::new(width, height, pixels).unwrap()
}

pub const BENCHMARK_SIZES: [(u32, u32); 3] = [(256, 256), (1024, 768), (1920, 1080)];

static GRADIENT_IMAGES: OnceLock<Vec<(String, Image<Srgba<f32>>)>> = OnceLock::new();

pub fn load_gradient_images() -> Vec<(String, Image<Srgba<f32>>)> {
    BENCHMARK_SIZES
        .iter()
        .map(|&(width, height)| (format!("{width}x{height}"), gradient(width, height)))
        .collect()
}

pub fn benchmark_images() -> &'static [(String, Image<Srgba<f32>>)] {
    GRADIENT_IMAGES.get_or_init(load_gradient_images)
}
