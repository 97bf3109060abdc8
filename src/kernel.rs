//! Error diffusion kernels.
//!
//! Each kernel is a fixed footprint of `(dx, dy, weight)` taps plus a divisor.
//! A tap receives `error / divisor * weight` of the quantization error of the current pixel.
//! Taps never point upward, and taps on the current row always point to the right,
//! so every tap lands on a pixel that a raster order scan has not reached yet.

use std::{fmt::Display, str::FromStr};
use wide::f32x4;

/// An error diffusion kernel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kernel {
    /// `(dx, dy, weight)` entries, relative to the current pixel.
    pub taps: &'static [(isize, usize, u8)],
    /// Each tap receives `weight / divisor` of the error.
    pub divisor: u8,
    /// The largest `dy` among the taps.
    pub max_dy: usize,
}

impl Kernel {
    /// The sum of all tap weights.
    #[must_use]
    pub fn weight_sum(&self) -> u32 {
        self.taps.iter().map(|&(_, _, w)| u32::from(w)).sum()
    }

    /// Distributes `error` from the pixel at `(x, y)` to the in-bounds taps of this kernel.
    ///
    /// `deposit` is called with the row-major index of each target and the share it receives.
    /// Taps outside of the `width` by `height` image are skipped and their share is lost.
    #[inline]
    pub(crate) fn propagate(
        &self,
        error: f32x4,
        (x, y): (usize, usize),
        (width, height): (usize, usize),
        mut deposit: impl FnMut(usize, f32x4),
    ) {
        // a divisor of 1 leaves the error undivided
        let error = if self.divisor == 1 {
            error
        } else {
            error / f32x4::splat(f32::from(self.divisor))
        };

        for &(dx, dy, weight) in self.taps {
            let Some(tx) = x.checked_add_signed(dx).filter(|&tx| tx < width) else {
                continue;
            };
            let ty = y + dy;
            if ty >= height {
                continue;
            }
            deposit(ty * width + tx, error * f32x4::splat(f32::from(weight)));
        }
    }
}

/// Passes the whole error to the right neighbor.
///
/// ```text
///    X   1
/// ```
pub const TRIVIAL: Kernel = Kernel {
    taps: &[(1, 0, 1)],
    divisor: 1,
    max_dy: 0,
};

/// Floyd-Steinberg dithering kernel.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    taps: &[(1, 0, 7), (-1, 1, 3), (0, 1, 5), (1, 1, 1)],
    divisor: 16,
    max_dy: 1,
};

/// Jarvis-Judice-Ninke dithering kernel.
///
/// ```text
///            X   7   5
///    3   5   7   5   3
///    1   3   5   3   1
/// ```
pub const JARVIS_JUDICE_NINKE: Kernel = Kernel {
    taps: &[
        (1, 0, 7),
        (2, 0, 5),
        (-2, 1, 3),
        (-1, 1, 5),
        (0, 1, 7),
        (1, 1, 5),
        (2, 1, 3),
        (-2, 2, 1),
        (-1, 2, 3),
        (0, 2, 5),
        (1, 2, 3),
        (2, 2, 1),
    ],
    divisor: 48,
    max_dy: 2,
};

/// Stucki dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
///    1   2   4   2   1
/// ```
pub const STUCKI: Kernel = Kernel {
    taps: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
        (-2, 2, 1),
        (-1, 2, 2),
        (0, 2, 4),
        (1, 2, 2),
        (2, 2, 1),
    ],
    divisor: 42,
    max_dy: 2,
};

/// Atkinson dithering kernel.
///
/// Only 6/8 of the error is propagated, the remaining 2/8 is discarded.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    taps: &[(1, 0, 1), (2, 0, 1), (-1, 1, 1), (0, 1, 1), (1, 1, 1), (0, 2, 1)],
    divisor: 8,
    max_dy: 2,
};

/// Burkes dithering kernel.
///
/// ```text
///            X   8   4
///    2   4   8   4   2
/// ```
pub const BURKES: Kernel = Kernel {
    taps: &[
        (1, 0, 8),
        (2, 0, 4),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 8),
        (1, 1, 4),
        (2, 1, 2),
    ],
    divisor: 32,
    max_dy: 1,
};

/// Sierra dithering kernel.
///
/// ```text
///            X   5   3
///    2   4   5   4   2
///        2   3   2
/// ```
pub const SIERRA: Kernel = Kernel {
    taps: &[
        (1, 0, 5),
        (2, 0, 3),
        (-2, 1, 2),
        (-1, 1, 4),
        (0, 1, 5),
        (1, 1, 4),
        (2, 1, 2),
        (-1, 2, 2),
        (0, 2, 3),
        (1, 2, 2),
    ],
    divisor: 32,
    max_dy: 2,
};

/// Two-row Sierra dithering kernel.
///
/// ```text
///            X   4   3
///    1   2   3   2   1
/// ```
pub const TWO_ROW_SIERRA: Kernel = Kernel {
    taps: &[
        (1, 0, 4),
        (2, 0, 3),
        (-2, 1, 1),
        (-1, 1, 2),
        (0, 1, 3),
        (1, 1, 2),
        (2, 1, 1),
    ],
    divisor: 16,
    max_dy: 1,
};

/// Sierra Lite dithering kernel.
///
/// ```text
///    X   2
///    1   1
/// ```
pub const SIERRA_LITE: Kernel = Kernel {
    taps: &[(1, 0, 2), (-1, 1, 1), (0, 1, 1)],
    divisor: 4,
    max_dy: 1,
};

/// The set of supported error diffusion algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// No real diffusion: the full error is carried to the next pixel in the row.
    Trivial,
    /// Floyd-Steinberg (1/16).
    #[default]
    FloydSteinberg,
    /// Jarvis, Judice, and Ninke (1/48).
    JarvisJudiceNinke,
    /// Stucki (1/42).
    Stucki,
    /// Atkinson (1/8), which discards a quarter of the error.
    Atkinson,
    /// Burkes (1/32).
    Burkes,
    /// Sierra (1/32).
    Sierra,
    /// Two-row Sierra (1/16).
    TwoRowSierra,
    /// Sierra Lite (1/4).
    SierraLite,
}

impl Algorithm {
    /// Every algorithm, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Trivial,
        Self::FloydSteinberg,
        Self::JarvisJudiceNinke,
        Self::Stucki,
        Self::Atkinson,
        Self::Burkes,
        Self::Sierra,
        Self::TwoRowSierra,
        Self::SierraLite,
    ];

    /// Returns the diffusion kernel for this algorithm.
    #[must_use]
    pub const fn kernel(self) -> &'static Kernel {
        match self {
            Algorithm::Trivial => &TRIVIAL,
            Algorithm::FloydSteinberg => &FLOYD_STEINBERG,
            Algorithm::JarvisJudiceNinke => &JARVIS_JUDICE_NINKE,
            Algorithm::Stucki => &STUCKI,
            Algorithm::Atkinson => &ATKINSON,
            Algorithm::Burkes => &BURKES,
            Algorithm::Sierra => &SIERRA,
            Algorithm::TwoRowSierra => &TWO_ROW_SIERRA,
            Algorithm::SierraLite => &SIERRA_LITE,
        }
    }

    /// The kebab-case name of this algorithm, as accepted by [`FromStr`].
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Algorithm::Trivial => "trivial",
            Algorithm::FloydSteinberg => "floyd-steinberg",
            Algorithm::JarvisJudiceNinke => "jarvis-judice-ninke",
            Algorithm::Stucki => "stucki",
            Algorithm::Atkinson => "atkinson",
            Algorithm::Burkes => "burkes",
            Algorithm::Sierra => "sierra",
            Algorithm::TwoRowSierra => "two-row-sierra",
            Algorithm::SierraLite => "sierra-lite",
        }
    }
}

impl Display for Algorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// The error returned when parsing an unknown [`Algorithm`] name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownAlgorithm(pub String);

impl Display for UnknownAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown dithering algorithm: {}", self.0)
    }
}

impl std::error::Error for UnknownAlgorithm {}

impl FromStr for Algorithm {
    type Err = UnknownAlgorithm;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|algorithm| algorithm.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownAlgorithm(s.to_owned()))
    }
}
