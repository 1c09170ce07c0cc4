//! HTS221 relative humidity and temperature sensor
//!
//! ST capacitive sensor at address 0x5F. Each channel is factory
//! calibrated with two reference points; readings are linearly
//! interpolated between them, integer-only.

use brim_core::traits::{HumiditySensor, SensorError, TemperatureSensor};
use embedded_hal::i2c::I2c;

/// HTS221 I2C address on the Sense HAT
pub const HTS221_ADDR: u8 = 0x5F;

/// Expected WHO_AM_I response
pub const HTS221_ID: u8 = 0xBC;

/// Register map
#[allow(dead_code)]
mod reg {
    pub const WHO_AM_I: u8 = 0x0F;
    pub const CTRL_REG1: u8 = 0x20;
    pub const HUMIDITY_OUT_L: u8 = 0x28;
    pub const TEMP_OUT_L: u8 = 0x2A;
    pub const H0_RH_X2: u8 = 0x30;
    pub const H1_RH_X2: u8 = 0x31;
    pub const T0_DEGC_X8: u8 = 0x32;
    pub const T1_DEGC_X8: u8 = 0x33;
    pub const T1_T0_MSB: u8 = 0x35;
    pub const H0_T0_OUT: u8 = 0x36;
    pub const H1_T0_OUT: u8 = 0x3A;
    pub const T0_OUT: u8 = 0x3C;
    pub const T1_OUT: u8 = 0x3E;
    /// Set on the register address to auto-increment multi-byte transfers
    pub const MULTI: u8 = 0x80;
}

/// Factory calibration points for both channels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Calibration {
    /// Humidity reference points, integer %RH
    pub h0_rh: i16,
    pub h1_rh: i16,
    /// Raw humidity samples at the reference points
    pub h0_out: i16,
    pub h1_out: i16,
    /// Temperature reference points, integer degC
    pub t0_degc: i16,
    pub t1_degc: i16,
    /// Raw temperature samples at the reference points
    pub t0_out: i16,
    pub t1_out: i16,
}

/// Interpolate a raw humidity sample to 0.1 %RH
pub fn humidity_x10(cal: &Calibration, raw: i16) -> Result<i16, SensorError> {
    let span = cal.h1_out as i32 - cal.h0_out as i32;
    if span == 0 {
        return Err(SensorError::NotReady);
    }
    let rh = cal.h0_rh as i32 * 10
        + (cal.h1_rh as i32 - cal.h0_rh as i32) * 10 * (raw as i32 - cal.h0_out as i32) / span;
    Ok(rh as i16)
}

/// Interpolate a raw temperature sample to 0.1 degC
pub fn temperature_x10(cal: &Calibration, raw: i16) -> Result<i16, SensorError> {
    let span = cal.t1_out as i32 - cal.t0_out as i32;
    if span == 0 {
        return Err(SensorError::NotReady);
    }
    let t = cal.t0_degc as i32 * 10
        + (cal.t1_degc as i32 - cal.t0_degc as i32) * 10 * (raw as i32 - cal.t0_out as i32) / span;
    Ok(t as i16)
}

/// HTS221 driver over a blocking I2C bus
pub struct Hts221<I2C> {
    i2c: I2C,
    cal: Calibration,
}

impl<I2C: I2c> Hts221<I2C> {
    /// Create a driver: power up at 1 Hz and load the factory calibration
    pub fn new(i2c: I2C) -> Result<Self, SensorError> {
        let mut dev = Self {
            i2c,
            cal: Calibration::default(),
        };
        dev.init()?;
        Ok(dev)
    }

    fn init(&mut self) -> Result<(), SensorError> {
        // Power on, block data update, 1 Hz
        self.i2c
            .write(HTS221_ADDR, &[reg::CTRL_REG1, 0x81])
            .map_err(|_| SensorError::Bus)?;
        self.cal = self.read_calibration()?;
        Ok(())
    }

    /// Loaded factory calibration
    pub fn calibration(&self) -> &Calibration {
        &self.cal
    }

    /// Read the WHO_AM_I register
    pub fn who_am_i(&mut self) -> Result<u8, SensorError> {
        self.read_u8(reg::WHO_AM_I)
    }

    fn read_calibration(&mut self) -> Result<Calibration, SensorError> {
        // %RH references are stored doubled
        let h0_rh = (self.read_u8(reg::H0_RH_X2)? >> 1) as i16;
        let h1_rh = (self.read_u8(reg::H1_RH_X2)? >> 1) as i16;
        let h0_out = self.read_i16(reg::H0_T0_OUT)?;
        let h1_out = self.read_i16(reg::H1_T0_OUT)?;

        // degC references are 10-bit x8 values with the two MSBs of each
        // packed into T1_T0_MSB
        let msbs = self.read_u8(reg::T1_T0_MSB)? as u16;
        let mut t0_degc = self.read_u8(reg::T0_DEGC_X8)? as u16;
        let mut t1_degc = self.read_u8(reg::T1_DEGC_X8)? as u16;
        t0_degc |= (msbs & 0x03) << 8;
        t1_degc |= (msbs & 0x0C) << 6;
        let t0_degc = (t0_degc >> 3) as i16;
        let t1_degc = (t1_degc >> 3) as i16;

        let t0_out = self.read_i16(reg::T0_OUT)?;
        let t1_out = self.read_i16(reg::T1_OUT)?;

        Ok(Calibration {
            h0_rh,
            h1_rh,
            h0_out,
            h1_out,
            t0_degc,
            t1_degc,
            t0_out,
            t1_out,
        })
    }

    fn read_u8(&mut self, r: u8) -> Result<u8, SensorError> {
        let mut buf = [0u8; 1];
        self.i2c
            .write_read(HTS221_ADDR, &[r], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(buf[0])
    }

    fn read_i16(&mut self, r: u8) -> Result<i16, SensorError> {
        let mut buf = [0u8; 2];
        self.i2c
            .write_read(HTS221_ADDR, &[r | reg::MULTI], &mut buf)
            .map_err(|_| SensorError::Bus)?;
        Ok(i16::from_le_bytes(buf))
    }
}

impl<I2C: I2c> HumiditySensor for Hts221<I2C> {
    fn read_percent_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.read_i16(reg::HUMIDITY_OUT_L)?;
        humidity_x10(&self.cal, raw)
    }
}

impl<I2C: I2c> TemperatureSensor for Hts221<I2C> {
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError> {
        let raw = self.read_i16(reg::TEMP_OUT_L)?;
        temperature_x10(&self.cal, raw)
    }
}
