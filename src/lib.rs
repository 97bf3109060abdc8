//! A library for error diffusion dithering to small fixed palettes.
//!
//! `diffuse_dither` converts a continuous-tone RGBA image into an image whose pixels are all
//! either white or black (monochrome mode), or red, green, blue, or black (primary mode).
//! The quantization error of each pixel is spread onto its not-yet-processed neighbors
//! according to one of nine classic diffusion kernels.
//!
//! # Features
//! To reduce dependencies and compile times, `diffuse_dither` has several `cargo` features
//! that can be turned off or on:
//! - `threads`: exposes [`Ditherer::dither_batch_par`] via [`rayon`] to dither many images in parallel.
//! - `image`: enables integration with the [`image`] crate.
//!
//! Each image is always processed in a single sequential pass,
//! since every pixel depends on the error of the pixels before it.
//!
//! # High-Level API
//! To get started, see [`Ditherer`] or the named functions in the [`monochrome`] and [`primary`] modules:
//! ```
//! # use diffuse_dither::{monochrome, Algorithm, Ditherer, Image, ImageError, PaletteMode};
//! # use palette::Srgba;
//! # fn main() -> Result<(), ImageError> {
//! let image = Image::filled(8, 8, Srgba::new(0.5, 0.5, 0.5, 1.0))?;
//!
//! let dithered = Ditherer::new()
//!     .algorithm(Algorithm::Atkinson)
//!     .palette_mode(PaletteMode::Monochrome)
//!     .dither(&image);
//!
//! assert_eq!(dithered, monochrome::atkinson(&image));
//! # Ok(())
//! # }
//! ```

#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::pedantic,
    clippy::cargo,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::unwrap_in_result,
    clippy::expect_used,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice,
    missing_docs,
    clippy::missing_docs_in_private_items,
    rustdoc::all,
    clippy::float_cmp_const,
    clippy::lossy_float_literal
)]
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::many_single_char_names,
    clippy::missing_panics_doc,
    clippy::unreadable_literal,
    clippy::wildcard_imports
)]

mod api;
mod dither;
mod kernel;
mod quantize;
mod traits;
mod types;

pub use api::{monochrome, primary, Ditherer};
pub use kernel::*;
pub use quantize::{Candidate, PaletteMode, Quantized};
pub use traits::*;
pub use types::*;

/// The maximum supported image size in number of pixels is `u32::MAX`.
pub const MAX_PIXELS: u32 = u32::MAX;
