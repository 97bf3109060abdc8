//! Contains the error diffusion driver.

use crate::{ColorComponents, Image, Kernel, PaletteMode, Quantized};
use palette::cast::{self, AsArrays};
use wide::f32x4;

/// Dithers `input` in a single raster order pass using the given kernel and palette.
///
/// The output buffer doubles as the error accumulator:
/// a cell holds the error deposited into it until its pixel is visited,
/// after which it holds the final palette color with the source alpha.
/// Every kernel tap points to a cell that has not been visited yet,
/// so a finalized cell is never written again.
pub(crate) fn diffuse<Color>(
    input: &Image<Color>,
    kernel: &Kernel,
    mode: PaletteMode,
) -> Image<Color>
where
    Color: ColorComponents<f32, 4>,
{
    let (width, height) = input.dimensions();
    let (width, height) = (width as usize, height as usize);
    let source = input.pixels().as_arrays();

    let mut output = vec![f32x4::splat(0.0); source.len()];

    for y in 0..height {
        for x in 0..width {
            let i = y * width + x;
            let sample = source[i];
            let total = output[i] + f32x4::new(sample);

            let Quantized { candidate, error } = mode.quantize(total);
            let [r, g, b] = candidate.rgb();
            output[i] = f32x4::new([r, g, b, sample[3]]);

            kernel.propagate(error, (x, y), (width, height), |j, share| {
                output[j] = output[j] + share;
            });
        }
    }

    let pixels = output
        .into_iter()
        .map(|pixel| cast::from_array(pixel.to_array()))
        .collect();

    input.with_pixels(pixels)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::*, Algorithm, Candidate};
    use bitvec::vec::BitVec;
    use palette::Srgba;
    use std::array;

    const MODES: [PaletteMode; 2] = [PaletteMode::Monochrome, PaletteMode::Primary];

    /// A straightforward scalar version of the dithering pass.
    fn naive_dither(input: &Image<Srgba<f32>>, kernel: &Kernel, mode: PaletteMode) -> Vec<[f32; 4]> {
        let width = input.width() as usize;
        let height = input.height() as usize;
        let mut out = vec![[0.0_f32; 4]; width * height];

        for y in 0..height {
            for x in 0..width {
                let i = y * width + x;
                let s = cast::into_array(input.pixels()[i]);
                let t: [f32; 4] = array::from_fn(|c| out[i][c] + s[c]);

                let dist = |candidate: Candidate| {
                    let c = candidate.transparent();
                    let d: [f32; 4] = array::from_fn(|k| t[k] - c[k]);
                    (d[0] * d[0] + d[1] * d[1] + d[2] * d[2] + d[3] * d[3]).sqrt()
                };

                let candidates = mode.candidates();
                let chosen = *candidates
                    .iter()
                    .find(|&&c| candidates.iter().all(|&o| dist(c) <= dist(o)))
                    .unwrap();

                let c = chosen.transparent();
                let mut e: [f32; 4] = array::from_fn(|k| t[k] - c[k]);
                if kernel.divisor != 1 {
                    e = e.map(|v| v / f32::from(kernel.divisor));
                }

                let [r, g, b] = chosen.rgb();
                out[i] = [r, g, b, s[3]];

                for &(dx, dy, weight) in kernel.taps {
                    let Some(tx) = x.checked_add_signed(dx).filter(|&tx| tx < width) else {
                        continue;
                    };
                    let ty = y + dy;
                    if ty >= height {
                        continue;
                    }
                    let j = ty * width + tx;
                    for k in 0..4 {
                        out[j][k] += e[k] * f32::from(weight);
                    }
                }
            }
        }

        out
    }

    fn gray(value: f32) -> Srgba<f32> {
        Srgba::new(value, value, value, 1.0)
    }

    fn candidates_of(image: &Image<Srgba<f32>>) -> Vec<[f32; 3]> {
        image
            .pixels()
            .iter()
            .map(|p| [p.red, p.green, p.blue])
            .collect()
    }

    #[test]
    fn naive_dither_oracle() {
        for (width, height) in [(1, 1), (2, 3), (5, 1), (1, 5), (17, 11)] {
            let image = test_image(width, height, u64::from(width * height));
            for algorithm in Algorithm::ALL {
                for mode in MODES {
                    let kernel = algorithm.kernel();
                    let expected = naive_dither(&image, kernel, mode);
                    let actual = diffuse(&image, kernel, mode);
                    assert_eq!(
                        expected,
                        actual.pixels().as_arrays(),
                        "{algorithm} {mode} {width}x{height}"
                    );
                }
            }
        }
    }

    #[test]
    fn empty_inputs() {
        for (width, height) in [(0, 0), (0, 3), (3, 0)] {
            let image = Image::<Srgba<f32>>::new(width, height, Vec::new()).unwrap();
            for algorithm in Algorithm::ALL {
                for mode in MODES {
                    let output = diffuse(&image, algorithm.kernel(), mode);
                    assert_eq!(output.dimensions(), (width, height));
                    assert!(output.is_empty());
                }
            }
        }
    }

    #[test]
    fn outputs_only_palette_colors() {
        let image = test_image(23, 19, 7);
        for algorithm in Algorithm::ALL {
            for mode in MODES {
                let palette = mode.candidates().iter().map(|c| c.rgb()).collect::<Vec<_>>();
                let output = diffuse(&image, algorithm.kernel(), mode);
                for rgb in candidates_of(&output) {
                    assert!(palette.contains(&rgb), "{algorithm} {mode} produced {rgb:?}");
                }
            }
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn alpha_passes_through() {
        let image = test_image(16, 9, 42);
        for algorithm in Algorithm::ALL {
            for mode in MODES {
                let output = diffuse(&image, algorithm.kernel(), mode);
                assert!(output.has_alpha());
                for (input, output) in image.pixels().iter().zip(output.pixels()) {
                    assert_eq!(input.alpha.to_bits(), output.alpha.to_bits());
                }
            }
        }

        let opaque = Image::new_rgb(4, 4, test_image(4, 4, 1).into_pixels()).unwrap();
        let output = diffuse(&opaque, &crate::ATKINSON, PaletteMode::Primary);
        assert!(!output.has_alpha());
        assert!(output.pixels().iter().all(|p| p.alpha == 1.0));
    }

    #[test]
    fn single_pixel_is_nearest_candidate() {
        let image = test_image(1, 1, 3);
        let sample = image.pixels()[0];
        for algorithm in Algorithm::ALL {
            for mode in MODES {
                let output = diffuse(&image, algorithm.kernel(), mode);
                let nearest = mode.quantize(f32x4::new(cast::into_array(sample))).candidate;
                let [r, g, b] = nearest.rgb();
                assert_eq!(output.pixels(), &[Srgba::new(r, g, b, sample.alpha)]);
            }
        }
    }

    #[test]
    fn deterministic() {
        let image = test_image(31, 17, 9);
        for algorithm in Algorithm::ALL {
            for mode in MODES {
                let first = diffuse(&image, algorithm.kernel(), mode);
                let second = diffuse(&image, algorithm.kernel(), mode);
                let bits = |image: &Image<Srgba<f32>>| {
                    image
                        .pixels()
                        .as_arrays()
                        .iter()
                        .map(|p| p.map(f32::to_bits))
                        .collect::<Vec<_>>()
                };
                assert_eq!(bits(&first), bits(&second));
            }
        }
    }

    #[test]
    fn uniform_gray_trivial_alternates() {
        const W: [f32; 3] = [1.0, 1.0, 1.0];
        const B: [f32; 3] = [0.0, 0.0, 0.0];

        let image = Image::filled(4, 1, gray(0.5)).unwrap();
        let output = diffuse(&image, &crate::TRIVIAL, PaletteMode::Monochrome);
        assert_eq!(candidates_of(&output), [W, B, W, B]);
    }

    #[test]
    fn uniform_gray_floyd_steinberg_checkerboard() {
        const W: [f32; 3] = [1.0, 1.0, 1.0];
        const B: [f32; 3] = [0.0, 0.0, 0.0];

        let image = Image::filled(2, 2, gray(0.5)).unwrap();
        let output = diffuse(&image, &crate::FLOYD_STEINBERG, PaletteMode::Monochrome);
        assert_eq!(candidates_of(&output), [W, B, B, W]);
    }

    #[test]
    fn taps_never_reach_finalized_cells() {
        let (width, height) = (7, 5);
        for algorithm in Algorithm::ALL {
            let mut finalized: BitVec = BitVec::repeat(false, width * height);
            for y in 0..height {
                for x in 0..width {
                    finalized.set(y * width + x, true);
                    algorithm.kernel().propagate(
                        f32x4::splat(1.0),
                        (x, y),
                        (width, height),
                        |j, _| assert!(!finalized[j], "{algorithm} wrote behind the scan"),
                    );
                }
            }
        }
    }
}
