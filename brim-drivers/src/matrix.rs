//! Sense HAT LED matrix and joystick
//!
//! The HAT's 8x8 RGB matrix sits behind an ATtiny88 companion at address
//! 0x46 that exposes a 192-byte frame buffer, an ID/version pair and the
//! joystick state. Pixel writes land in a local copy of the frame buffer;
//! `refresh` pushes the whole buffer in one transfer.

use brim_core::traits::{DisplayError, PixelDisplay};
use embedded_hal::i2c::I2c;

/// ATtiny88 front-end I2C address
pub const MATRIX_ADDR: u8 = 0x46;

/// Expected WHO_AM_I response
pub const MATRIX_ID: u8 = b's';

/// Matrix width in pixels
pub const WIDTH: u16 = 8;
/// Matrix height in pixels
pub const HEIGHT: u16 = 8;

/// Frame buffer layout: 8 rows of 24 bytes (R, G, B planes of 8 columns)
const ROW_STRIDE: usize = 24;
const VMEM_LEN: usize = 192;

/// Register map
#[allow(dead_code)]
mod reg {
    pub const FB: u8 = 0x00;
    pub const WAI: u8 = 0xF0;
    pub const VER: u8 = 0xF1;
    pub const KEYS: u8 = 0xF2;
    pub const EE_WP: u8 = 0xF3;
}

/// Gamma curve from the Linux rpisense-fb driver; the hardware caps
/// channel values at 31, so the usable range is 32 levels per channel
const GAMMA: [u8; 32] = [
    0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x01, 0x01, //
    0x02, 0x02, 0x03, 0x03, 0x04, 0x05, 0x06, 0x07, //
    0x08, 0x09, 0x0A, 0x0B, 0x0C, 0x0E, 0x0F, 0x11, //
    0x12, 0x14, 0x15, 0x17, 0x19, 0x1B, 0x1D, 0x1F,
];

/// Joystick state bits from the KEYS register
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyState(u8);

impl KeyState {
    const DOWN: u8 = 0x01;
    const RIGHT: u8 = 0x02;
    const UP: u8 = 0x04;
    const PRESS: u8 = 0x08;
    const LEFT: u8 = 0x10;

    /// Wrap a raw KEYS register value
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw KEYS register value
    pub const fn bits(&self) -> u8 {
        self.0
    }

    pub const fn left(&self) -> bool {
        self.0 & Self::LEFT != 0
    }

    pub const fn right(&self) -> bool {
        self.0 & Self::RIGHT != 0
    }

    pub const fn up(&self) -> bool {
        self.0 & Self::UP != 0
    }

    pub const fn down(&self) -> bool {
        self.0 & Self::DOWN != 0
    }

    pub const fn pressed(&self) -> bool {
        self.0 & Self::PRESS != 0
    }

    /// Any key active at all
    pub const fn any(&self) -> bool {
        self.0 != 0
    }
}

/// LED matrix driver over a blocking I2C bus
pub struct LedMatrix<I2C> {
    i2c: I2C,
    vmem: [u8; VMEM_LEN],
}

impl<I2C: I2c> LedMatrix<I2C> {
    /// Create a driver with a blank local frame buffer
    pub fn new(i2c: I2C) -> Self {
        Self {
            i2c,
            vmem: [0; VMEM_LEN],
        }
    }

    /// Set one pixel from 5-bit RGB components
    ///
    /// Components are masked to 5 bits and gamma corrected before landing
    /// in the local buffer; call [`refresh`](Self::refresh) to make the
    /// change visible.
    pub fn set_rgb(&mut self, x: u16, y: u16, r: u8, g: u8, b: u8) -> Result<(), DisplayError> {
        if x >= WIDTH || y >= HEIGHT {
            return Err(DisplayError::OutOfBounds);
        }
        let base = ROW_STRIDE * y as usize + x as usize;
        self.vmem[base] = GAMMA[(r & 0x1F) as usize];
        self.vmem[base + 8] = GAMMA[(g & 0x1F) as usize];
        self.vmem[base + 16] = GAMMA[(b & 0x1F) as usize];
        Ok(())
    }

    /// Push the local frame buffer to the matrix
    pub fn refresh(&mut self) -> Result<(), DisplayError> {
        let mut frame = [0u8; VMEM_LEN + 1];
        frame[0] = reg::FB;
        frame[1..].copy_from_slice(&self.vmem);
        self.i2c
            .write(MATRIX_ADDR, &frame)
            .map_err(|_| DisplayError::Bus)
    }

    /// Blank the local buffer and the matrix
    pub fn clear(&mut self) -> Result<(), DisplayError> {
        self.vmem = [0; VMEM_LEN];
        self.refresh()
    }

    /// Read the WHO_AM_I register
    pub fn who_am_i(&mut self) -> Result<u8, DisplayError> {
        self.read_reg(reg::WAI)
    }

    /// Read the firmware version of the ATtiny88 front-end
    pub fn version(&mut self) -> Result<u8, DisplayError> {
        self.read_reg(reg::VER)
    }

    /// Read the joystick state
    pub fn read_keys(&mut self) -> Result<KeyState, DisplayError> {
        Ok(KeyState::from_bits(self.read_reg(reg::KEYS)?))
    }

    fn read_reg(&mut self, r: u8) -> Result<u8, DisplayError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(MATRIX_ADDR, &[r], &mut buf)
            .map_err(|_| DisplayError::Bus)?;
        Ok(buf[0])
    }
}

impl<I2C: I2c> PixelDisplay for LedMatrix<I2C> {
    fn width(&self) -> u16 {
        WIDTH
    }

    fn height(&self) -> u16 {
        HEIGHT
    }

    /// Monochrome view of the matrix: full white or black
    fn set_pixel(&mut self, x: u16, y: u16, on: bool) -> Result<(), DisplayError> {
        let level = if on { 0x1F } else { 0x00 };
        self.set_rgb(x, y, level, level, level)
    }

    /// Shift the local frame buffer contents; vacated pixels go black
    fn scroll(&mut self, dx: i16, dy: i16) -> Result<(), DisplayError> {
        let mut next = [0u8; VMEM_LEN];
        for y in 0..HEIGHT as i16 {
            for x in 0..WIDTH as i16 {
                let sx = x - dx;
                let sy = y - dy;
                if sx < 0 || sx >= WIDTH as i16 || sy < 0 || sy >= HEIGHT as i16 {
                    continue;
                }
                let dst = ROW_STRIDE * y as usize + x as usize;
                let src = ROW_STRIDE * sy as usize + sx as usize;
                next[dst] = self.vmem[src];
                next[dst + 8] = self.vmem[src + 8];
                next[dst + 16] = self.vmem[src + 16];
            }
        }
        self.vmem = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fakebus::FakeBus;
    use brim_core::text::{Cursor, Writer};
    use brim_fonts::Font5x8;

    #[test]
    fn test_set_rgb_gamma_and_layout() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        matrix.set_rgb(2, 3, 31, 16, 0).unwrap();

        let base = ROW_STRIDE * 3 + 2;
        assert_eq!(matrix.vmem[base], 0x1F);
        assert_eq!(matrix.vmem[base + 8], 0x08);
        assert_eq!(matrix.vmem[base + 16], 0x00);
    }

    #[test]
    fn test_set_rgb_rejects_out_of_bounds() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        assert_eq!(matrix.set_rgb(8, 0, 1, 1, 1), Err(DisplayError::OutOfBounds));
        assert_eq!(matrix.set_rgb(0, 8, 1, 1, 1), Err(DisplayError::OutOfBounds));
    }

    #[test]
    fn test_refresh_writes_frame_to_register_zero() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        matrix.set_rgb(0, 0, 31, 31, 31).unwrap();
        matrix.refresh().unwrap();

        assert_eq!(matrix.i2c.regs[0], 0x1F);
        assert_eq!(matrix.i2c.regs[8], 0x1F);
        assert_eq!(matrix.i2c.regs[16], 0x1F);
        assert_eq!(matrix.i2c.regs[1], 0x00);
    }

    #[test]
    fn test_read_keys() {
        let mut bus = FakeBus::flat();
        bus.regs[0xF2] = 0x18;
        let mut matrix = LedMatrix::new(bus);

        let keys = matrix.read_keys().unwrap();
        assert!(keys.left());
        assert!(keys.pressed());
        assert!(!keys.right());
        assert!(!keys.up());
        assert!(!keys.down());
        assert!(keys.any());
    }

    #[test]
    fn test_scroll_up_discards_top_row() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        matrix.set_rgb(2, 3, 31, 31, 31).unwrap();
        matrix.set_rgb(5, 0, 31, 31, 31).unwrap();

        matrix.scroll(0, -1).unwrap();

        // (2,3) moved up to (2,2); (5,0) fell off the top
        assert_eq!(matrix.vmem[ROW_STRIDE * 2 + 2], 0x1F);
        assert_eq!(matrix.vmem[ROW_STRIDE * 3 + 2], 0x00);
        assert!(matrix.vmem[..ROW_STRIDE].iter().all(|&b| b == 0));
    }

    #[test]
    fn test_render_text_on_matrix() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        let font = Font5x8;
        let mut cursor = Cursor::new();

        {
            let mut writer = Writer::new(&mut matrix, &font, None, None).unwrap();
            writer.print(&mut cursor, "|").unwrap();
        }
        assert_eq!((cursor.row, cursor.col), (0, 5));

        // '|' is a full-height column at x = 2, rows 0..=6
        for y in 0..7 {
            assert_eq!(matrix.vmem[ROW_STRIDE * y + 2], 0x1F, "row {y}");
        }
        assert_eq!(matrix.vmem[ROW_STRIDE * 7 + 2], 0x00);
        // Neighboring columns stay dark
        for y in 0..8 {
            assert_eq!(matrix.vmem[ROW_STRIDE * y], 0x00);
            assert_eq!(matrix.vmem[ROW_STRIDE * y + 1], 0x00);
            assert_eq!(matrix.vmem[ROW_STRIDE * y + 3], 0x00);
            assert_eq!(matrix.vmem[ROW_STRIDE * y + 4], 0x00);
        }
    }

    #[test]
    fn test_wrap_on_matrix_scrolls_full_screen() {
        let mut matrix = LedMatrix::new(FakeBus::flat());
        let font = Font5x8;
        let mut cursor = Cursor::new();

        // Second glyph cannot fit beside the first on an 8-wide screen:
        // wrapping advances a full 8-pixel line, which forces a scroll
        let mut writer = Writer::new(&mut matrix, &font, None, None).unwrap();
        writer.print(&mut cursor, "AB").unwrap();

        assert_eq!((cursor.row, cursor.col), (0, 5));
    }
}
