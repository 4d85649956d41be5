use std::io::{self, Write};

use crate::ascii::cell::{quantize_channel, Rgb, StyledGlyph};
use crate::ascii::glyphs::GlyphSet;
use crate::image_pipeline::layout::Dimensions;
use crate::image_pipeline::source::PixelSource;

/// Paint `source` onto a `target`-sized character grid, streaming each
/// finished row to `out`.
///
/// Every cell back-maps to one source pixel by nearest-neighbor sampling:
/// the cell's normalized position in the grid (strictly below 1.0 on both
/// axes) is projected onto the source extent and truncated. Downsampling
/// therefore skips pixels rather than averaging them. Rows are built into a
/// reused buffer and written one at a time, so memory stays bounded by a
/// single line regardless of the render size.
///
/// `source` must have nonzero dimensions whenever `target` does; callers
/// reject empty images before deriving a target grid.
pub fn paint<S, W>(
    source: &S,
    target: Dimensions,
    glyphs: &GlyphSet,
    out: &mut W,
) -> io::Result<()>
where
    S: PixelSource,
    W: Write,
{
    let src = source.size();
    let quantum_max = source.quantum_max();

    let mut line = String::new();
    for j in 0..target.height {
        line.clear();
        for i in 0..target.width {
            let percent_x = i as f32 / target.width as f32;
            let percent_y = j as f32 / target.height as f32;

            // Strictly-below-1.0 percentages keep these in range; the min
            // guards the last column against f32 rounding.
            let img_x = ((percent_x * src.width as f32) as u32).min(src.width - 1);
            let img_y = ((percent_y * src.height as f32) as u32).min(src.height - 1);

            let [r, g, b] = source.color_at(img_x, img_y);
            let color = Rgb {
                r: quantize_channel(r, quantum_max),
                g: quantize_channel(g, quantum_max),
                b: quantize_channel(b, quantum_max),
            };

            let cell_index = j as usize * target.width as usize + i as usize;
            let cell = StyledGlyph { glyph: glyphs.char_at(cell_index), color };
            line.push_str(&cell.to_string());
        }
        writeln!(out, "{line}")?;
    }

    Ok(())
}
