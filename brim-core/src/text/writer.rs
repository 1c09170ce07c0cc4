//! Glyph writer
//!
//! Rasterizes vertically mapped glyphs onto a pixel display one character
//! at a time: column-major data, one byte per 8 vertical pixels, bit 0 at
//! the top. Both bit states issue a pixel write, so redrawing the same
//! text over itself is idempotent.

use crate::text::cursor::Cursor;
use crate::text::TextError;
use crate::traits::display::PixelDisplay;
use crate::traits::font::{FontError, GlyphFont, Mapping};

/// Text layout engine bound to one display and one font
///
/// A writer owns no cursor of its own: callers pass the shared [`Cursor`]
/// into [`print`](Self::print). Writers are cheap to construct, so a
/// mixed-font screen is composed by constructing one writer per font and
/// alternating `print` calls on the same cursor.
///
/// All entry points are strictly sequential and synchronous; if the host
/// allows concurrent callers, they must serialize access externally.
pub struct Writer<'a, D, F> {
    device: &'a mut D,
    font: &'a F,
    screen_width: u16,
    screen_height: u16,
    /// Frame-buffer bytes per column at this screen height, kept for
    /// consistency checks; glyphs carry their own height
    bytes_per_col: u16,
}

impl<'a, D, F> Writer<'a, D, F>
where
    D: PixelDisplay,
    F: GlyphFont,
{
    /// Bind a writer to a display and a font
    ///
    /// Dimensions default to the device's unless overridden. Fails with
    /// [`TextError::UnsupportedFont`] if the font declares horizontal bit
    /// mapping; the rasterizer assumes vertical mapping throughout.
    pub fn new(
        device: &'a mut D,
        font: &'a F,
        width: Option<u16>,
        height: Option<u16>,
    ) -> Result<Self, TextError> {
        if font.mapping() == Mapping::Horizontal {
            return Err(TextError::UnsupportedFont);
        }
        let screen_width = width.unwrap_or_else(|| device.width());
        let screen_height = height.unwrap_or_else(|| device.height());
        Ok(Self {
            device,
            font,
            screen_width,
            screen_height,
            bytes_per_col: (screen_height + 7) / 8,
        })
    }

    /// Screen width in pixels
    pub const fn screen_width(&self) -> u16 {
        self.screen_width
    }

    /// Screen height in pixels
    pub const fn screen_height(&self) -> u16 {
        self.screen_height
    }

    /// Frame-buffer bytes per column at this screen height
    pub const fn bytes_per_col(&self) -> u16 {
        self.bytes_per_col
    }

    /// Render a string at the shared cursor
    ///
    /// Characters are consumed in order with no buffering: each one's
    /// pixel writes reach the device before the next character is looked
    /// at. A font or display failure surfaces immediately, leaving the
    /// characters already rendered on screen and the cursor after the last
    /// of them.
    pub fn print(&mut self, cursor: &mut Cursor, text: &str) -> Result<(), TextError> {
        for ch in text.chars() {
            self.print_char(cursor, ch)?;
        }
        Ok(())
    }

    /// Advance to the start of the next line
    ///
    /// With row clipping off, a line that would not fit scrolls the
    /// display up by the shortfall and re-anchors the cursor so the next
    /// glyph lands within bounds. With row clipping on, the cursor is left
    /// past the bottom edge and the overflow check in `print_char`
    /// suppresses later draws.
    fn newline(&mut self, cursor: &mut Cursor) -> Result<(), TextError> {
        let height = self.font.height();
        cursor.row = cursor.row.saturating_add(height);
        cursor.col = 0;
        let margin = self.screen_height as i32 - (cursor.row as i32 + height as i32);
        if margin < 0 && !cursor.row_clip {
            // Cursor positions set far past the screen can push the margin
            // below i16::MIN; the shift must stay negative, and it clears
            // any real screen long before the clamp
            let dy = margin.max(i16::MIN as i32) as i16;
            self.device.scroll(0, dy)?;
            cursor.row = (cursor.row as i32 + margin).max(0) as u16;
        }
        Ok(())
    }

    fn print_char(&mut self, cursor: &mut Cursor, ch: char) -> Result<(), TextError> {
        if ch == '\n' {
            return self.newline(cursor);
        }
        let glyph = self.font.glyph(ch)?;
        if cursor.row as u32 + glyph.height as u32 > self.screen_height as u32 && cursor.row_clip {
            // Whole character would run off the bottom: drop it silently
            return Ok(());
        }
        if cursor.col as u32 + glyph.width as u32 > self.screen_width as u32 {
            if cursor.col_clip {
                return Ok(());
            }
            self.newline(cursor)?;
        }

        let bytes_per_col = glyph.bytes_per_col() as usize;
        if glyph.data.len() < glyph.width as usize * bytes_per_col {
            return Err(TextError::Font(FontError::Truncated));
        }
        for scol in 0..glyph.width {
            let x = cursor.col + scol;
            for r in 0..glyph.height {
                let byte = glyph.data[scol as usize * bytes_per_col + (r >> 3) as usize];
                let on = byte & (1u8 << (r & 7)) != 0;
                // Saturates for cursor rows near u16::MAX (reachable with
                // row clipping off via set_pos); the device treats
                // off-screen coordinates as it sees fit
                self.device.set_pixel(x, cursor.row.saturating_add(r), on)?;
            }
        }
        cursor.col += glyph.width;
        Ok(())
    }
}
