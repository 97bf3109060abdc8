//! Dithering to white and black.
//!
//! Each function here is shorthand for a [`Ditherer`] with [`PaletteMode::Monochrome`]
//! and the corresponding [`Algorithm`].
//! When a value is equally close to white and black, white is chosen.

use super::named_ditherers;
use crate::{Algorithm, ColorComponents, Ditherer, Image, PaletteMode};

named_ditherers!(
    PaletteMode::Monochrome,
    /// Dithers to white and black, carrying the full error to the right neighbor.
    trivial => Trivial,
    /// Dithers to white and black using Floyd-Steinberg diffusion.
    floyd_steinberg => FloydSteinberg,
    /// Dithers to white and black using Jarvis-Judice-Ninke diffusion.
    jarvis_judice_ninke => JarvisJudiceNinke,
    /// Dithers to white and black using Stucki diffusion.
    stucki => Stucki,
    /// Dithers to white and black using Atkinson diffusion.
    atkinson => Atkinson,
    /// Dithers to white and black using Burkes diffusion.
    burkes => Burkes,
    /// Dithers to white and black using Sierra diffusion.
    sierra => Sierra,
    /// Dithers to white and black using two-row Sierra diffusion.
    two_row_sierra => TwoRowSierra,
    /// Dithers to white and black using Sierra Lite diffusion.
    sierra_lite => SierraLite,
);
