use std::fmt;

/// Display color of one rendered cell, as 8-bit channels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Scale a channel from its native quantum range down to 8 bits.
///
/// Uses truncating division: `32768 * 255 / 65535` gives 127, not 128.
/// With a `quantum_max` of 255 the value passes through unchanged.
pub fn quantize_channel(value: u16, quantum_max: u16) -> u8 {
    (u32::from(value) * 255 / u32::from(quantum_max)) as u8
}

/// One output cell: a glyph and its foreground color.
///
/// `Display` emits the cell as a self-contained truecolor escape sequence,
/// `ESC[38;2;{r};{g};{b}m{glyph}ESC[0m`, so every cell resets its own
/// styling and no trailing reset is needed at line or image end.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StyledGlyph {
    pub glyph: char,
    pub color: Rgb,
}

impl fmt::Display for StyledGlyph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Rgb { r, g, b } = self.color;
        write!(f, "\x1b[38;2;{};{};{}m{}\x1b[0m", r, g, b, self.glyph)
    }
}
