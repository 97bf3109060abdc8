#![deny(unsafe_code, unsafe_op_in_unsafe_fn)]
#![warn(
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::todo,
    clippy::unimplemented,
    clippy::unneeded_field_pattern,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::unnecessary_self_imports,
    clippy::str_to_string,
    clippy::string_to_string,
    clippy::string_slice
)]

use std::{fmt::Display, path::PathBuf};

use clap::{Parser, ValueEnum};
use diffuse_dither::{Algorithm, Ditherer, Image, PaletteMode};
use image::DynamicImage;
use palette::Srgba;

#[derive(Copy, Clone, ValueEnum)]
enum CliAlgorithm {
    Trivial,
    FloydSteinberg,
    JarvisJudiceNinke,
    Stucki,
    Atkinson,
    Burkes,
    Sierra,
    TwoRowSierra,
    SierraLite,
}

impl From<CliAlgorithm> for Algorithm {
    fn from(value: CliAlgorithm) -> Self {
        match value {
            CliAlgorithm::Trivial => Algorithm::Trivial,
            CliAlgorithm::FloydSteinberg => Algorithm::FloydSteinberg,
            CliAlgorithm::JarvisJudiceNinke => Algorithm::JarvisJudiceNinke,
            CliAlgorithm::Stucki => Algorithm::Stucki,
            CliAlgorithm::Atkinson => Algorithm::Atkinson,
            CliAlgorithm::Burkes => Algorithm::Burkes,
            CliAlgorithm::Sierra => Algorithm::Sierra,
            CliAlgorithm::TwoRowSierra => Algorithm::TwoRowSierra,
            CliAlgorithm::SierraLite => Algorithm::SierraLite,
        }
    }
}

impl Display for CliAlgorithm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", Algorithm::from(*self))
    }
}

#[derive(Copy, Clone, ValueEnum)]
enum CliPaletteMode {
    Monochrome,
    Primary,
}

impl From<CliPaletteMode> for PaletteMode {
    fn from(value: CliPaletteMode) -> Self {
        match value {
            CliPaletteMode::Monochrome => PaletteMode::Monochrome,
            CliPaletteMode::Primary => PaletteMode::Primary,
        }
    }
}

impl Display for CliPaletteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", PaletteMode::from(*self))
    }
}

#[derive(Parser)]
pub struct Options {
    #[arg(short, long, default_value_t = CliAlgorithm::FloydSteinberg)]
    algorithm: CliAlgorithm,

    #[arg(short, long, default_value_t = CliPaletteMode::Monochrome)]
    mode: CliPaletteMode,

    #[arg(long)]
    verbose: bool,

    input: PathBuf,

    output: PathBuf,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let Options { algorithm, mode, verbose, input, output } = Options::parse();

    macro_rules! log {
        ($name: literal, $val: expr) => {
            if verbose {
                let time = std::time::Instant::now();
                let value = $val;
                println!("{} took {}ms", $name, time.elapsed().as_millis());
                value
            } else {
                $val
            }
        };
    }

    let image = log!("read image", image::open(input)?);
    let image = log!("convert to f32", Image::<Srgba<f32>>::try_from(&image)?);

    let ditherer = Ditherer::new()
        .algorithm(algorithm.into())
        .palette_mode(mode.into());

    let dithered = log!("dither", ditherer.dither(&image));

    let dithered: DynamicImage = if dithered.has_alpha() {
        dithered.to_dynamic_image().into_rgba8().into()
    } else {
        dithered.to_dynamic_image().into_rgb8().into()
    };

    log!("write image", dithered.save(output)?);

    Ok(())
}
