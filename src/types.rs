//! Contains the image buffer type and the errors returned when constructing one.

use crate::{ColorComponents, MAX_PIXELS};
use std::{
    error::Error,
    fmt::{Debug, Display},
};
#[cfg(feature = "image")]
use {
    image::{DynamicImage, Rgb32FImage, Rgba32FImage},
    palette::cast,
};

/// An error type for when the length of an input (e.g., `Vec` or slice)
/// is above the maximum supported value.
///
/// The inner value is the maximum supported value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AboveMaxLen<T>(pub T);

impl<T: Display> Display for AboveMaxLen<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "above the maximum length of {}", self.0)
    }
}

impl<T: Debug + Display> Error for AboveMaxLen<T> {}

/// The error returned when an [`Image`] cannot be built from the given dimensions and pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageError {
    /// `width * height` is greater than [`MAX_PIXELS`].
    AboveMaxLen(AboveMaxLen<u32>),
    /// The number of pixels does not equal `width * height`.
    LengthMismatch {
        /// The number of pixels implied by the dimensions.
        expected: u64,
        /// The number of pixels that were provided.
        actual: usize,
    },
}

impl Display for ImageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageError::AboveMaxLen(err) => write!(f, "image size is {err}"),
            ImageError::LengthMismatch { expected, actual } => write!(
                f,
                "expected {expected} pixels from the image dimensions but got {actual}"
            ),
        }
    }
}

impl Error for ImageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ImageError::AboveMaxLen(err) => Some(err),
            ImageError::LengthMismatch { .. } => None,
        }
    }
}

impl From<AboveMaxLen<u32>> for ImageError {
    fn from(err: AboveMaxLen<u32>) -> Self {
        ImageError::AboveMaxLen(err)
    }
}

/// A 2-D, row-major buffer of RGBA floating point samples.
///
/// Each channel is nominally in the range `0.0..=1.0`, but nothing is clamped.
/// The color type only has to be viewable as `[f32; 4]`,
/// so `palette::Srgba<f32>` and `palette::LinSrgba<f32>` both work
/// and no color space conversion ever takes place.
///
/// An image remembers whether it came with an alpha channel.
/// Images without one always hold an alpha of `1.0`.
///
/// # Examples
/// ```
/// # use diffuse_dither::{Image, ImageError};
/// # use palette::Srgba;
/// # fn main() -> Result<(), ImageError> {
/// let pixels = vec![Srgba::new(0.5, 0.5, 0.5, 1.0); 6];
/// let image = Image::new(3, 2, pixels)?;
/// assert_eq!(image.dimensions(), (3, 2));
/// assert!(Image::new(4, 2, vec![Srgba::new(0.0, 0.0, 0.0, 1.0); 6]).is_err());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Image<Color> {
    /// The number of pixels in each row.
    width: u32,
    /// The number of rows.
    height: u32,
    /// Whether the image carries a meaningful alpha channel.
    has_alpha: bool,
    /// The pixels in row-major order.
    pixels: Vec<Color>,
}

impl<Color> Image<Color> {
    /// Checks that `len` pixels exactly fill a `width` by `height` image.
    fn check_len(width: u32, height: u32, len: usize) -> Result<(), ImageError> {
        let expected = u64::from(width) * u64::from(height);
        if expected > u64::from(MAX_PIXELS) {
            return Err(AboveMaxLen(MAX_PIXELS).into());
        }
        if usize::try_from(expected).map_or(true, |expected| expected != len) {
            return Err(ImageError::LengthMismatch { expected, actual: len });
        }
        Ok(())
    }

    /// Creates a new [`Image`] with an alpha channel from row-major `pixels`.
    ///
    /// # Errors
    /// Returns an error if `pixels.len()` is not `width * height`
    /// or if `width * height` is greater than [`MAX_PIXELS`].
    pub fn new(width: u32, height: u32, pixels: Vec<Color>) -> Result<Self, ImageError> {
        Self::check_len(width, height, pixels.len())?;
        Ok(Self { width, height, has_alpha: true, pixels })
    }

    /// The width of the image.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// The height of the image.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }

    /// The width and height of the image.
    #[must_use]
    pub const fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Whether the image has an alpha channel.
    #[must_use]
    pub const fn has_alpha(&self) -> bool {
        self.has_alpha
    }

    /// The pixels in row-major order.
    #[must_use]
    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Consumes the image, returning its pixels in row-major order.
    #[must_use]
    pub fn into_pixels(self) -> Vec<Color> {
        self.pixels
    }

    /// Returns `true` if the image has no pixels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Builds an image of the same shape and alpha-presence as `self` from already validated pixels.
    pub(crate) fn with_pixels<Other>(&self, pixels: Vec<Other>) -> Image<Other> {
        debug_assert_eq!(pixels.len(), self.pixels.len());
        Image {
            width: self.width,
            height: self.height,
            has_alpha: self.has_alpha,
            pixels,
        }
    }
}

impl<Color: Copy> Image<Color> {
    /// Creates an image where every pixel is `color`.
    ///
    /// # Errors
    /// Returns an error if `width * height` is greater than [`MAX_PIXELS`].
    pub fn filled(width: u32, height: u32, color: Color) -> Result<Self, ImageError> {
        let len = u64::from(width) * u64::from(height);
        if len > u64::from(MAX_PIXELS) {
            return Err(AboveMaxLen(MAX_PIXELS).into());
        }
        #[allow(clippy::cast_possible_truncation)]
        let pixels = vec![color; len as usize];
        Self::new(width, height, pixels)
    }

    /// Returns the pixel at `(x, y)`, or `None` if it lies outside the image.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Option<Color> {
        if x < self.width && y < self.height {
            Some(self.pixels[y as usize * self.width as usize + x as usize])
        } else {
            None
        }
    }
}

impl<Color: ColorComponents<f32, 4>> Image<Color> {
    /// Creates a new [`Image`] without an alpha channel from row-major `pixels`.
    ///
    /// The alpha component of every pixel is set to `1.0`.
    ///
    /// # Errors
    /// Returns an error if `pixels.len()` is not `width * height`
    /// or if `width * height` is greater than [`MAX_PIXELS`].
    pub fn new_rgb(width: u32, height: u32, mut pixels: Vec<Color>) -> Result<Self, ImageError> {
        Self::check_len(width, height, pixels.len())?;
        for pixel in &mut pixels {
            let [r, g, b, _] = palette::cast::into_array(*pixel);
            *pixel = palette::cast::from_array([r, g, b, 1.0]);
        }
        Ok(Self { width, height, has_alpha: false, pixels })
    }
}

#[cfg(feature = "image")]
impl<'a, Color: ColorComponents<f32, 4>> TryFrom<&'a Rgba32FImage> for Image<Color> {
    type Error = ImageError;

    fn try_from(image: &'a Rgba32FImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        let pixels = image.pixels().map(|p| cast::from_array(p.0)).collect();
        Self::new(width, height, pixels)
    }
}

#[cfg(feature = "image")]
impl<'a, Color: ColorComponents<f32, 4>> TryFrom<&'a Rgb32FImage> for Image<Color> {
    type Error = ImageError;

    fn try_from(image: &'a Rgb32FImage) -> Result<Self, Self::Error> {
        let (width, height) = image.dimensions();
        let pixels = image
            .pixels()
            .map(|&image::Rgb([r, g, b])| cast::from_array([r, g, b, 1.0]))
            .collect();
        Self::new_rgb(width, height, pixels)
    }
}

#[cfg(feature = "image")]
impl<'a, Color: ColorComponents<f32, 4>> TryFrom<&'a DynamicImage> for Image<Color> {
    type Error = ImageError;

    /// Converts to `f32` samples, keeping the alpha channel only if `image` has one.
    fn try_from(image: &'a DynamicImage) -> Result<Self, Self::Error> {
        if image.color().has_alpha() {
            Self::try_from(&image.to_rgba32f())
        } else {
            Self::try_from(&image.to_rgb32f())
        }
    }
}

#[cfg(feature = "image")]
impl<Color: ColorComponents<f32, 4>> Image<Color> {
    /// Copies this image into an [`Rgba32FImage`].
    #[must_use]
    pub fn to_rgba32f_image(&self) -> Rgba32FImage {
        let width = self.width as usize;
        Rgba32FImage::from_fn(self.width, self.height, |x, y| {
            image::Rgba(cast::into_array(self.pixels[y as usize * width + x as usize]))
        })
    }

    /// Copies the color channels of this image into an [`Rgb32FImage`], dropping alpha.
    #[must_use]
    pub fn to_rgb32f_image(&self) -> Rgb32FImage {
        let width = self.width as usize;
        Rgb32FImage::from_fn(self.width, self.height, |x, y| {
            let [r, g, b, _] = cast::into_array(self.pixels[y as usize * width + x as usize]);
            image::Rgb([r, g, b])
        })
    }

    /// Converts this image into a [`DynamicImage`],
    /// which has an alpha channel only if this image does.
    #[must_use]
    pub fn to_dynamic_image(&self) -> DynamicImage {
        if self.has_alpha {
            DynamicImage::ImageRgba32F(self.to_rgba32f_image())
        } else {
            DynamicImage::ImageRgb32F(self.to_rgb32f_image())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use palette::Srgba;

    #[test]
    fn length_must_match_dimensions() {
        let pixels = vec![Srgba::new(0.0, 0.0, 0.0, 1.0); 5];
        assert_eq!(
            Image::new(2, 3, pixels.clone()),
            Err(ImageError::LengthMismatch { expected: 6, actual: 5 })
        );
        assert_eq!(
            Image::new_rgb(3, 2, pixels),
            Err(ImageError::LengthMismatch { expected: 6, actual: 5 })
        );
    }

    #[test]
    fn above_max_pixels() {
        assert_eq!(
            Image::<Srgba<f32>>::new(u32::MAX, 2, Vec::new()),
            Err(ImageError::AboveMaxLen(AboveMaxLen(MAX_PIXELS)))
        );
        assert_eq!(
            Image::filled(u32::MAX, u32::MAX, Srgba::new(0.0, 0.0, 0.0, 1.0)),
            Err(ImageError::AboveMaxLen(AboveMaxLen(MAX_PIXELS)))
        );
    }

    #[test]
    fn empty_images() {
        for (width, height) in [(0, 0), (0, 7), (7, 0)] {
            let image = Image::<Srgba<f32>>::new(width, height, Vec::new()).unwrap();
            assert!(image.is_empty());
            assert_eq!(image.get(0, 0), None);
        }
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn rgb_images_are_opaque() {
        let pixels = vec![Srgba::new(0.1, 0.2, 0.3, 0.25); 4];
        let image = Image::new_rgb(2, 2, pixels).unwrap();
        assert!(!image.has_alpha());
        assert!(image.pixels().iter().all(|p| p.alpha == 1.0));
    }

    #[test]
    fn get_is_row_major() {
        #[allow(clippy::cast_precision_loss)]
        let pixels = (0..6)
            .map(|i| Srgba::new(i as f32, 0.0, 0.0, 1.0))
            .collect::<Vec<_>>();
        let image = Image::new(3, 2, pixels).unwrap();
        assert_eq!(image.get(2, 0).map(|p| p.red), Some(2.0));
        assert_eq!(image.get(0, 1).map(|p| p.red), Some(3.0));
        assert_eq!(image.get(3, 0), None);
        assert_eq!(image.get(0, 2), None);
    }

    #[cfg(feature = "image")]
    #[test]
    #[allow(clippy::cast_precision_loss)]
    fn image_crate_round_trip_keeps_alpha_presence() {
        let rgba = Rgba32FImage::from_fn(3, 2, |x, y| {
            image::Rgba([x as f32 / 3.0, y as f32 / 2.0, 0.5, 0.75])
        });
        let image = Image::<Srgba<f32>>::try_from(&rgba).unwrap();
        assert!(image.has_alpha());
        assert_eq!(image.to_rgba32f_image(), rgba);
        assert!(matches!(image.to_dynamic_image(), DynamicImage::ImageRgba32F(_)));

        let rgb = Rgb32FImage::from_pixel(2, 2, image::Rgb([0.25, 0.5, 0.75]));
        let image = Image::<Srgba<f32>>::try_from(&rgb).unwrap();
        assert!(!image.has_alpha());
        assert_eq!(image.get(1, 1), Some(Srgba::new(0.25, 0.5, 0.75, 1.0)));
        assert!(matches!(image.to_dynamic_image(), DynamicImage::ImageRgb32F(_)));
    }
}
