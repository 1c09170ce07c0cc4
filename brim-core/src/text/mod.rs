//! Text layout engine
//!
//! Renders text onto a [`PixelDisplay`](crate::traits::PixelDisplay) by
//! rasterizing glyphs from a vertically mapped
//! [`GlyphFont`](crate::traits::GlyphFont).
//!
//! The writing position lives in a [`Cursor`] owned by the caller, not by
//! any writer: every writer borrows the same cursor per call. That is what
//! lets one screen be composed by alternating writers bound to different
//! fonts while keeping a single writing position.

pub mod cursor;
pub mod writer;

pub use cursor::Cursor;
pub use writer::Writer;

use crate::traits::display::DisplayError;
use crate::traits::font::FontError;

/// Errors that can occur while configuring or laying out text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TextError {
    /// The font is not vertically mapped
    UnsupportedFont,
    /// `Mapping::Unset` passed to the mapping setter
    InvalidMapping,
    /// Propagated font failure
    Font(FontError),
    /// Propagated display failure
    Display(DisplayError),
}

impl From<FontError> for TextError {
    fn from(e: FontError) -> Self {
        Self::Font(e)
    }
}

impl From<DisplayError> for TextError {
    fn from(e: DisplayError) -> Self {
        Self::Display(e)
    }
}
