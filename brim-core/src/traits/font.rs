//! Glyph font trait
//!
//! Fonts supply a bitmap plus metrics per character. Only vertically
//! mapped fonts can be rendered: glyph data is column-major with one byte
//! per 8 vertical pixels, and bit 0 of a column's first byte is that
//! column's top pixel.

/// Bit orientation of glyph data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mapping {
    /// No orientation selected yet (initial cursor state, never user-set)
    #[default]
    Unset,
    /// Column-major, byte per 8 vertical pixels, bit 0 = top
    Vertical,
    /// Row-major (not renderable by this engine)
    Horizontal,
}

/// Errors reported by a font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FontError {
    /// No glyph for the requested character
    GlyphNotFound,
    /// Glyph bitmap shorter than its declared metrics require
    Truncated,
}

/// One character's bitmap and metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph<'a> {
    /// Column-major pixel data, `bytes_per_col()` bytes per column
    pub data: &'a [u8],
    /// Width in pixels
    pub width: u16,
    /// Height in pixels
    pub height: u16,
}

impl Glyph<'_> {
    /// Bytes occupied by one column of this glyph
    pub const fn bytes_per_col(&self) -> u16 {
        (self.height + 7) / 8
    }
}

/// Font provider contract
pub trait GlyphFont {
    /// Declared bit orientation of the glyph data
    fn mapping(&self) -> Mapping;

    /// Nominal line height in pixels, used for line advances
    fn height(&self) -> u16;

    /// Look up the glyph for `ch`
    ///
    /// There is no fallback glyph: unsupported characters report
    /// `FontError::GlyphNotFound` and the caller decides what to do.
    fn glyph(&self, ch: char) -> Result<Glyph<'_>, FontError>;
}
