//! Environmental sensor traits
//!
//! Readings are fixed-point (value x10) to stay integer-only on targets
//! without an FPU.

/// Errors that can occur when reading a sensor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorError {
    /// Bus communication failure
    Bus,
    /// Sensor not initialized or calibration not usable
    NotReady,
    /// Reading outside the sensor's usable range
    OutOfRange,
}

/// Temperature sensor
pub trait TemperatureSensor {
    /// Read temperature in 0.1 degC units (e.g. 250 = 25.0 degC)
    fn read_celsius_x10(&mut self) -> Result<i16, SensorError>;
}

/// Barometric pressure sensor
pub trait PressureSensor {
    /// Read pressure in 0.1 hPa units (e.g. 10132 = 1013.2 hPa)
    fn read_hpa_x10(&mut self) -> Result<i32, SensorError>;
}

/// Relative humidity sensor
pub trait HumiditySensor {
    /// Read relative humidity in 0.1 %RH units (e.g. 455 = 45.5 %RH)
    fn read_percent_x10(&mut self) -> Result<i16, SensorError>;
}
