//! Nearest palette color selection for the two fixed palettes.

use std::fmt::Display;
use wide::f32x4;

/// A color that dithered pixels can take.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Candidate {
    /// `(1, 1, 1)`
    White,
    /// `(0, 0, 0)`
    Black,
    /// `(1, 0, 0)`
    Red,
    /// `(0, 1, 0)`
    Green,
    /// `(0, 0, 1)`
    Blue,
}

impl Candidate {
    /// The red, green, and blue components of this candidate.
    #[must_use]
    pub const fn rgb(self) -> [f32; 3] {
        match self {
            Candidate::White => [1.0, 1.0, 1.0],
            Candidate::Black => [0.0, 0.0, 0.0],
            Candidate::Red => [1.0, 0.0, 0.0],
            Candidate::Green => [0.0, 1.0, 0.0],
            Candidate::Blue => [0.0, 0.0, 1.0],
        }
    }

    /// The candidate with an alpha of `0.0`.
    ///
    /// This is the value that distances and quantization errors are computed against.
    #[must_use]
    pub const fn transparent(self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 0.0]
    }

    /// The candidate with an alpha of `1.0`, i.e., how it is displayed.
    #[must_use]
    pub const fn opaque(self) -> [f32; 4] {
        let [r, g, b] = self.rgb();
        [r, g, b, 1.0]
    }

    /// The candidate as an `f32x4` for distance and error computations.
    #[inline]
    fn lanes(self) -> f32x4 {
        f32x4::new(self.transparent())
    }
}

/// The result of quantizing a single accumulated value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quantized {
    /// The chosen palette color.
    pub candidate: Candidate,
    /// The residual that is diffused to the neighboring pixels.
    ///
    /// This includes the alpha channel, even though alpha is never part of the visible decision.
    pub error: f32x4,
}

/// The fixed set of colors to dither to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PaletteMode {
    /// White and black.
    #[default]
    Monochrome,
    /// Red, green, blue, and black.
    Primary,
}

/// The Euclidean distance between `total` and `candidate` over all four channels.
#[inline]
fn distance(total: f32x4, candidate: Candidate) -> f32 {
    let [r, g, b, a] = (total - candidate.lanes()).to_array();
    (r * r + g * g + b * b + a * a).sqrt()
}

impl PaletteMode {
    /// The candidates of this palette, in tie-break priority order.
    #[must_use]
    pub const fn candidates(self) -> &'static [Candidate] {
        match self {
            PaletteMode::Monochrome => &[Candidate::White, Candidate::Black],
            PaletteMode::Primary => &[
                Candidate::Red,
                Candidate::Green,
                Candidate::Blue,
                Candidate::Black,
            ],
        }
    }

    /// Picks the nearest candidate to `total` (the accumulated error plus the source sample)
    /// and computes the quantization error.
    ///
    /// Ties go to the candidate that comes first in [`PaletteMode::candidates`].
    #[must_use]
    #[inline]
    pub fn quantize(self, total: f32x4) -> Quantized {
        match self {
            PaletteMode::Monochrome => quantize_monochrome(total),
            PaletteMode::Primary => quantize_primary(total),
        }
    }
}

/// Chooses between white and black.
#[inline]
fn quantize_monochrome(total: f32x4) -> Quantized {
    let white = distance(total, Candidate::White);
    let black = distance(total, Candidate::Black);

    let candidate = if white <= black {
        Candidate::White
    } else {
        Candidate::Black
    };

    Quantized { candidate, error: total - candidate.lanes() }
}

/// Chooses between red, green, blue, and black.
#[inline]
fn quantize_primary(total: f32x4) -> Quantized {
    let red = distance(total, Candidate::Red);
    let green = distance(total, Candidate::Green);
    let blue = distance(total, Candidate::Blue);
    let black = distance(total, Candidate::Black);

    let candidate = if red <= green && red <= blue && red <= black {
        Candidate::Red
    } else if green <= red && green <= blue && green <= black {
        Candidate::Green
    } else if blue <= red && blue <= green && blue <= black {
        Candidate::Blue
    } else if black <= red && black <= green && black <= blue {
        Candidate::Black
    } else {
        // Only reachable when a distance is NaN.
        let error = total
            - Candidate::Black.lanes()
            - Candidate::Red.lanes()
            - Candidate::Blue.lanes()
            - Candidate::Green.lanes();

        return Quantized { candidate: Candidate::Black, error };
    };

    Quantized { candidate, error: total - candidate.lanes() }
}

impl Display for PaletteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            PaletteMode::Monochrome => "monochrome",
            PaletteMode::Primary => "primary",
        })
    }
}
