use crate::RenderError;

/// Ordered, non-empty sequence of characters cycled across the rendered
/// grid, one per cell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GlyphSet {
    chars: Vec<char>,
}

impl GlyphSet {
    /// Builds a glyph set from the characters of `glyphs`. Fails when the
    /// string is empty so an invalid configuration is reported before any
    /// rendering starts.
    pub fn new(glyphs: impl Into<String>) -> Result<Self, RenderError> {
        let chars: Vec<char> = glyphs.into().chars().collect();
        if chars.is_empty() {
            return Err(RenderError::EmptyGlyphs);
        }
        Ok(Self { chars })
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    /// Glyph for the cell at flattened row-major index `index`. Indices
    /// wrap modulo the set length, so cycling spans the whole image rather
    /// than restarting on each row.
    pub fn char_at(&self, index: usize) -> char {
        self.chars[index % self.chars.len()]
    }
}
