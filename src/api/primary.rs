//! Dithering to red, green, blue, and black.
//!
//! Each function here is shorthand for a [`Ditherer`] with [`PaletteMode::Primary`]
//! and the corresponding [`Algorithm`].
//! Ties between equally close colors are broken in the order red, green, blue, black.

use super::named_ditherers;
use crate::{Algorithm, ColorComponents, Ditherer, Image, PaletteMode};

named_ditherers!(
    PaletteMode::Primary,
    /// Dithers to the primaries and black, carrying the full error to the right neighbor.
    trivial => Trivial,
    /// Dithers to the primaries and black using Floyd-Steinberg diffusion.
    floyd_steinberg => FloydSteinberg,
    /// Dithers to the primaries and black using Jarvis-Judice-Ninke diffusion.
    jarvis_judice_ninke => JarvisJudiceNinke,
    /// Dithers to the primaries and black using Stucki diffusion.
    stucki => Stucki,
    /// Dithers to the primaries and black using Atkinson diffusion.
    atkinson => Atkinson,
    /// Dithers to the primaries and black using Burkes diffusion.
    burkes => Burkes,
    /// Dithers to the primaries and black using Sierra diffusion.
    sierra => Sierra,
    /// Dithers to the primaries and black using two-row Sierra diffusion.
    two_row_sierra => TwoRowSierra,
    /// Dithers to the primaries and black using Sierra Lite diffusion.
    sierra_lite => SierraLite,
);
