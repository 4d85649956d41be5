mod ascii;
mod image_pipeline;

use std::io::{self, Write};
use std::path::Path;

use log::debug;

pub use ascii::{
    cell::{quantize_channel, Rgb, StyledGlyph},
    glyphs::GlyphSet,
};
pub use image_pipeline::{
    layout::{determine_image_size, Dimensions, CHARACTER_ASPECT_RATIO},
    source::{DecodedImage, PixelSource},
};

use ascii::painter;

#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
    #[error("image has zero width or height")]
    EmptyImage,
    #[error("glyph set must contain at least one character")]
    EmptyGlyphs,
    #[error("failed to write output: {0}")]
    Io(#[from] io::Error),
}

/// Rendering parameters: the character-grid bounds the output must fit
/// inside, and the glyphs cycled across its cells.
#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub max_width: u32,
    pub max_height: u32,
    pub glyphs: GlyphSet,
}

#[derive(Default)]
pub struct AsciiRenderer;

impl AsciiRenderer {
    /// Decode the image at `path` and render it into `out`.
    pub fn render_path<P, W>(
        &self,
        path: P,
        options: &RenderOptions,
        out: &mut W,
    ) -> Result<(), RenderError>
    where
        P: AsRef<Path>,
        W: Write,
    {
        let image = image::open(path)?;
        self.render(&DecodedImage::from_dynamic(image), options, out)
    }

    /// Render an already-decoded pixel source into `out`, one line of
    /// truecolor-styled glyphs per grid row.
    pub fn render<S, W>(
        &self,
        source: &S,
        options: &RenderOptions,
        out: &mut W,
    ) -> Result<(), RenderError>
    where
        S: PixelSource,
        W: Write,
    {
        let size = source.size();
        if size.is_empty() {
            return Err(RenderError::EmptyImage);
        }

        let target = determine_image_size(size, options.max_width, options.max_height);
        debug!(
            "rendering {}x{} pixels as {}x{} cells",
            size.width, size.height, target.width, target.height
        );

        painter::paint(source, target, &options.glyphs, out)?;
        Ok(())
    }
}
