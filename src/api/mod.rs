//! Contains the [`Ditherer`] builder struct and the named dithering functions.

pub mod monochrome;
pub mod primary;

use crate::{dither::diffuse, Algorithm, ColorComponents, Image, PaletteMode};
#[cfg(feature = "threads")]
use rayon::prelude::*;

/// A builder struct to specify the diffusion algorithm and palette to dither with.
///
/// # Examples
/// ```
/// # use diffuse_dither::{Algorithm, Ditherer, Image, ImageError, PaletteMode};
/// # use palette::Srgba;
/// # fn main() -> Result<(), ImageError> {
/// let image = Image::filled(4, 4, Srgba::new(0.2, 0.6, 0.9, 1.0))?;
///
/// let ditherer = Ditherer::new()
///     .algorithm(Algorithm::Stucki)
///     .palette_mode(PaletteMode::Primary);
///
/// let dithered = ditherer.dither(&image);
/// assert_eq!(dithered.dimensions(), image.dimensions());
/// # Ok(())
/// # }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Ditherer {
    /// The diffusion kernel to use.
    algorithm: Algorithm,
    /// The palette to dither to.
    mode: PaletteMode,
}

impl Ditherer {
    /// Creates a new [`Ditherer`] with Floyd-Steinberg diffusion and the monochrome palette.
    pub const fn new() -> Self {
        Self {
            algorithm: Algorithm::FloydSteinberg,
            mode: PaletteMode::Monochrome,
        }
    }

    /// Sets the error diffusion algorithm.
    ///
    /// The default is [`Algorithm::FloydSteinberg`].
    pub const fn algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Sets the palette to dither to.
    ///
    /// The default is [`PaletteMode::Monochrome`].
    pub const fn palette_mode(mut self, mode: PaletteMode) -> Self {
        self.mode = mode;
        self
    }

    /// Gets the error diffusion algorithm.
    #[must_use]
    pub const fn get_algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Gets the palette this [`Ditherer`] dithers to.
    #[must_use]
    pub const fn get_palette_mode(&self) -> PaletteMode {
        self.mode
    }

    /// Dithers `input`, returning a new image of the same dimensions.
    ///
    /// Every output pixel has the red, green, and blue components of one of the palette colors
    /// and the alpha of the corresponding input pixel.
    #[must_use]
    pub fn dither<Color>(&self, input: &Image<Color>) -> Image<Color>
    where
        Color: ColorComponents<f32, 4>,
    {
        diffuse(input, self.algorithm.kernel(), self.mode)
    }
}

#[cfg(feature = "threads")]
impl Ditherer {
    /// Dithers each of the given images in parallel.
    ///
    /// Each image is still processed in a single sequential pass,
    /// so the results are identical to calling [`Ditherer::dither`] on each image.
    #[must_use]
    pub fn dither_batch_par<Color>(&self, images: &[Image<Color>]) -> Vec<Image<Color>>
    where
        Color: ColorComponents<f32, 4> + Send + Sync,
    {
        images.par_iter().map(|image| self.dither(image)).collect()
    }
}

/// Defines one public function per algorithm that dithers with the given palette.
macro_rules! named_ditherers {
    ($mode: expr, $($(#[$doc: meta])* $name: ident => $algorithm: ident,)*) => {
        $(
            $(#[$doc])*
            #[must_use]
            pub fn $name<Color>(input: &Image<Color>) -> Image<Color>
            where
                Color: ColorComponents<f32, 4>,
            {
                Ditherer::new()
                    .algorithm(Algorithm::$algorithm)
                    .palette_mode($mode)
                    .dither(input)
            }
        )*
    };
}

pub(crate) use named_ditherers;
