//! Pixel display trait
//!
//! Defines the pixel sink the text layout engine renders to.

/// Errors that can occur when driving a display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with the display
    Bus,
    /// Coordinates outside the displayable area
    OutOfBounds,
}

/// Bit-addressable monochrome pixel sink
///
/// Implementations handle the specifics of the panel hardware; the text
/// layout engine only needs the dimensions, a pixel primitive and a
/// scroll primitive.
pub trait PixelDisplay {
    /// Display width in pixels
    fn width(&self) -> u16;

    /// Display height in pixels
    fn height(&self) -> u16;

    /// Set one pixel to foreground (`on`) or background
    ///
    /// Out-of-bounds coordinates are the implementation's concern: it may
    /// reject them or clip silently.
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError>;

    /// Shift displayed content by the given pixel offsets
    ///
    /// Negative `dy` moves content up. The text layout engine only ever
    /// calls this with `dx = 0` and `dy < 0`.
    fn scroll(&mut self, dx: i16, dy: i16) -> Result<(), DisplayError>;
}
