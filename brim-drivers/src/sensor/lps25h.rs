//! LPS25H barometric pressure and temperature sensor
//!
//! ST MEMS sensor found on the Sense HAT at address 0x5C. Brought up in
//! the 1 Hz low-power configuration recommended by application note
//! AN4450 (FIFO mean mode, roughly 4 uA).

use brim_core::traits::{PressureSensor, SensorError, TemperatureSensor};
use embedded_hal::i2c::I2c;

/// LPS25H I2C address on the Sense HAT
pub const LPS25H_ADDR: u8 = 0x5C;

/// Expected WHO_AM_I response
pub const LPS25H_ID: u8 = 0xBD;

/// Register map
#[allow(dead_code)]
mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const RES_CONF: u8 = 0x10;
    pub const CTRL_REG1: u8 = 0x20;
    pub const CTRL_REG2: u8 = 0x21;
    pub const PRESS_OUT_XL: u8 = 0x28;
    pub const TEMP_OUT_L: u8 = 0x2B;
    pub const FIFO_CTRL: u8 = 0x2E;
    /// Set on the register address to auto-increment multi-byte transfers
    pub const MULTI: u8 = 0x80;
}

/// LPS25H driver over a blocking I2C bus
pub struct Lps25h<I2C> {
    i2c: I2C,
}

impl<I2C: I2c> Lps25h<I2C> {
    /// Create a driver and apply the AN4450 1 Hz low-power bring-up
    pub fn new(i2c: I2C) -> Result<Self, SensorError> {
        let mut dev = Self { i2c };
        dev.init()?;
        Ok(dev)
    }

    fn init(&mut self) -> Result<(), SensorError> {
        self.write_reg(reg::RES_CONF, 0x05)?;
        self.write_reg(reg::FIFO_CTRL, 0xC1)?;
        self.write_reg(reg::CTRL_REG2, 0x40)?;
        // Power on, 1 Hz output data rate
        self.write_reg(reg::CTRL_REG1, 0x90)?;
        Ok(())
    }

    /// Read the WHO_AM_I register
    pub fn who_am_i(&mut self) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(LPS25H_ADDR, &[reg::WHO_AM_I], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    /// Raw 24-bit two's-complement pressure sample
    pub fn read_pressure_raw(&mut self) -> Result<i32, SensorError> {
        let mut buf = [0u8; 3];
        self.i2c
            .write_read(LPS25H_ADDR, &[reg::PRESS_OUT_XL | reg::MULTI], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(pressure_from_bytes(buf))
    }

    /// Raw 16-bit temperature sample
    pub fn read_temp_raw(&mut self) -> Result<i16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(LPS25H_ADDR, &[reg::TEMP_OUT_L | reg::MULTI], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(i16::from_le_bytes(buf))
    }

    fn write_reg(&mut self, r: u8, value: u8) -> Result<(), SensorError> {
        self.i2c
            .write(LPS25H_ADDR, &[r, value])
            .map_err(|_| SensorError::Bus)
    }
}

/// Assemble the little-endian 24-bit two's-complement pressure sample
pub const fn pressure_from_bytes(buf: [u8; 3]) -> i32 {
    let raw = buf[0] as i32 | (buf[1] as i32) << 8 | (buf[2] as i32) << 16;
    // Sign-extend from 24 bits
    (raw << 8) >> 8
}

/// Convert a raw pressure sample to 0.1 hPa (1 LSB = 1/4096 hPa)
pub const fn pressure_to_hpa_x10(raw: i32) -> i32 {
    ((raw as i64) * 10 / 4096) as i32
}

/// Convert a raw temperature sample to 0.1 degC
///
/// Datasheet transfer function: T = 42.5 degC + raw / 480.
pub const fn temp_to_celsius_x10(raw: i16) -> i16 {
    425 + (raw / 48)
}

impl<I2C: I2c> PressureSensor for Lps25h<I2C> {
    fn read_hpa_x10(&mut self) -> Result<i32, SensorError> {
        let raw = self.read_pressure_raw()?;
        Ok(pressure_to_hpa_x10(raw))
    }
}

impl<I2C: I2c> TemperatureSensor for Lps25h<I2C> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.read_temp_raw()?;
        Ok(temp_to_celsius_x10(raw))
    }
}
