//! Shared cursor and overflow policy

use crate::text::TextError;
use crate::traits::font::Mapping;

/// Writing position and overflow policy shared by all writers
///
/// `row`/`col` are the pixel coordinates of the next glyph's top-left
/// corner. The clip flags select what happens when text runs past a screen
/// edge: drop the character silently (clip), or wrap to a new line
/// (columns) / scroll the display (rows).
///
/// The cursor is deliberately a standalone record instead of writer state:
/// callers own one cursor per screen and pass it to every
/// [`Writer::print`](crate::text::Writer::print) call, whichever font that
/// writer carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    /// Pixel row of the next glyph's top edge
    pub row: u16,
    /// Pixel column of the next glyph's left edge
    pub col: u16,
    /// Drop characters past the bottom edge instead of scrolling
    pub row_clip: bool,
    /// Drop characters past the right edge instead of wrapping
    pub col_clip: bool,
    mapping: Mapping,
}

impl Default for Cursor {
    fn default() -> Self {
        Self::new()
    }
}

impl Cursor {
    /// Cursor at the origin with clipping disabled and no mapping selected
    pub const fn new() -> Self {
        Self {
            row: 0,
            col: 0,
            row_clip: false,
            col_clip: false,
            mapping: Mapping::Unset,
        }
    }

    /// Move to an absolute pixel position
    pub fn set_pos(&mut self, row: u16, col: u16) {
        self.row = row;
        self.col = col;
    }

    /// Select the overflow policy
    pub fn set_clip(&mut self, row_clip: bool, col_clip: bool) {
        self.row_clip = row_clip;
        self.col_clip = col_clip;
    }

    /// Select the glyph bit orientation
    ///
    /// Only `Vertical` and `Horizontal` are selectable. `Unset` exists as
    /// the initial state and is rejected here, leaving the current
    /// selection unchanged.
    pub fn set_mapping(&mut self, mapping: Mapping) -> Result<(), TextError> {
        match mapping {
            Mapping::Vertical | Mapping::Horizontal => {
                self.mapping = mapping;
                Ok(())
            }
            Mapping::Unset => Err(TextError::InvalidMapping),
        }
    }

    /// Currently selected bit orientation
    pub const fn mapping(&self) -> Mapping {
        self.mapping
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_cursor_defaults() {
        let cursor = Cursor::new();
        assert_eq!(cursor.row, 0);
        assert_eq!(cursor.col, 0);
        assert!(!cursor.row_clip);
        assert!(!cursor.col_clip);
        assert_eq!(cursor.mapping(), Mapping::Unset);
    }

    #[test]
    fn test_set_pos_and_clip() {
        let mut cursor = Cursor::new();
        cursor.set_pos(8, 40);
        cursor.set_clip(true, false);
        assert_eq!(cursor.row, 8);
        assert_eq!(cursor.col, 40);
        assert!(cursor.row_clip);
        assert!(!cursor.col_clip);
    }

    #[test]
    fn test_set_mapping_accepts_recognized_modes() {
        let mut cursor = Cursor::new();
        assert!(cursor.set_mapping(Mapping::Vertical).is_ok());
        assert_eq!(cursor.mapping(), Mapping::Vertical);
        assert!(cursor.set_mapping(Mapping::Horizontal).is_ok());
        assert_eq!(cursor.mapping(), Mapping::Horizontal);
    }

    #[test]
    fn test_set_mapping_rejects_unset_and_keeps_previous() {
        let mut cursor = Cursor::new();
        cursor.set_mapping(Mapping::Vertical).unwrap();

        let result = cursor.set_mapping(Mapping::Unset);
        assert_eq!(result, Err(TextError::InvalidMapping));
        assert_eq!(cursor.mapping(), Mapping::Vertical);
    }
}
