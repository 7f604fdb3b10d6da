//! Uniform RGB access to decoded images.

use image::{DynamicImage, GenericImageView, RgbImage};

/// Width and height of a decoded image.
///
/// The raw output format does not carry them, so callers have to pass them
/// to the consumers of the raw bytes some other way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Dimensions {
    pub width: u32,
    pub height: u32,
}

impl Dimensions {
    /// Bytes per single serialized pixel.
    pub const BYTES_PER_PIXEL: u64 = 3;

    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total amount of pixels.
    pub fn pixels(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Exact length of the serialized image in bytes.
    pub fn raw_len(&self) -> u64 {
        self.pixels() * Self::BYTES_PER_PIXEL
    }
}

impl core::fmt::Display for Dimensions {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Source of pixels addressable by coordinate.
///
/// Implementations hide the color model of the underlying image and always
/// hand out 8-bit RGB values.
pub trait PixelSource {
    /// Image width in pixels.
    fn width(&self) -> u32;
    /// Image height in pixels.
    fn height(&self) -> u32;
    /// Returns the color of the pixel at the given coordinates.
    ///
    /// The coordinates must satisfy `x < width()` and `y < height()`.
    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3];

    fn dimensions(&self) -> Dimensions {
        Dimensions::new(self.width(), self.height())
    }
}

impl<T: ?Sized + PixelSource> PixelSource for &T {
    fn width(&self) -> u32 {
        T::width(self)
    }

    fn height(&self) -> u32 {
        T::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        T::rgb_at(self, x, y)
    }
}

impl PixelSource for RgbImage {
    fn width(&self) -> u32 {
        self.width()
    }

    fn height(&self) -> u32 {
        self.height()
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        self.get_pixel(x, y).0
    }
}

impl PixelSource for DynamicImage {
    fn width(&self) -> u32 {
        GenericImageView::width(self)
    }

    fn height(&self) -> u32 {
        GenericImageView::height(self)
    }

    fn rgb_at(&self, x: u32, y: u32) -> [u8; 3] {
        // The RGBA view already expands gray levels and narrows wide samples.
        let [r, g, b, _alpha] = self.get_pixel(x, y).0;
        [r, g, b]
    }
}

#[cfg(test)]
mod tests {
    use image::{GrayImage, Luma, Rgb, Rgba, RgbaImage};

    use super::*;

    #[test]
    fn test_dimensions_raw_len() {
        assert_eq!(Dimensions::new(2, 3).raw_len(), 18);
        assert_eq!(Dimensions::new(0, 100).raw_len(), 0);
        // Must not overflow u32.
        assert_eq!(
            Dimensions::new(u32::MAX, 2).raw_len(),
            u64::from(u32::MAX) * 6
        );
        assert_eq!(Dimensions::new(640, 480).to_string(), "640x480");
    }

    #[test]
    fn test_rgb_image_source() {
        let image = RgbImage::from_pixel(2, 1, Rgb([7, 8, 9]));
        assert_eq!(PixelSource::dimensions(&image), Dimensions::new(2, 1));
        assert_eq!(image.rgb_at(1, 0), [7, 8, 9]);
    }

    #[test]
    fn test_dynamic_image_drops_alpha() {
        let image = DynamicImage::ImageRgba8(RgbaImage::from_pixel(1, 1, Rgba([1, 2, 3, 0])));
        assert_eq!(image.rgb_at(0, 0), [1, 2, 3]);
    }

    #[test]
    fn test_dynamic_image_expands_gray() {
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(1, 1, Luma([42])));
        assert_eq!(image.rgb_at(0, 0), [42, 42, 42]);
    }
}
