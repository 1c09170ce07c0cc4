//! Hardware driver implementations
//!
//! Concrete I2C drivers for the peripherals of a Sense HAT-class board:
//!
//! - LED matrix front-end (ATtiny88) with joystick, usable as a
//!   `PixelDisplay` for text rendering
//! - LPS25H pressure/temperature sensor
//! - HTS221 humidity/temperature sensor

#![no_std]
#![deny(unsafe_code)]

pub mod matrix;
pub mod sensor;

#[cfg(test)]
mod fakebus;
