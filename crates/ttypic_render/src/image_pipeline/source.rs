use image::{DynamicImage, ImageBuffer, Rgb};

use super::layout::Dimensions;

/// Read-only access to decoded pixel data.
///
/// Decouples the painter from any particular decoding library so it can be
/// driven by synthetic sources in tests. `color_at` expects in-range
/// coordinates; `quantum_max` reports the native per-channel maximum
/// (65535 for 16-bit buffers, 255 for 8-bit ones) so color quantization
/// never assumes a depth the source doesn't have.
pub trait PixelSource {
    fn size(&self) -> Dimensions;

    fn quantum_max(&self) -> u16;

    /// Channel triplet at `(x, y)`, where `x < size().width` and
    /// `y < size().height`.
    fn color_at(&self, x: u32, y: u32) -> [u16; 3];
}

/// A decoded image held as 16-bit RGB.
///
/// Narrower sources are widened losslessly on conversion (the 8-bit value
/// `v` becomes `v * 257`), so an 8-bit color survives the round trip through
/// the 16-bit quantum range unchanged.
pub struct DecodedImage {
    pixels: ImageBuffer<Rgb<u16>, Vec<u16>>,
}

impl DecodedImage {
    pub fn from_dynamic(image: DynamicImage) -> Self {
        Self { pixels: image.to_rgb16() }
    }
}

impl PixelSource for DecodedImage {
    fn size(&self) -> Dimensions {
        Dimensions::new(self.pixels.width(), self.pixels.height())
    }

    fn quantum_max(&self) -> u16 {
        u16::MAX
    }

    fn color_at(&self, x: u32, y: u32) -> [u16; 3] {
        self.pixels.get_pixel(x, y).0
    }
}
