//! Board-agnostic core logic for Sense HAT-class boards
//!
//! This crate contains everything that does not depend on a concrete
//! peripheral implementation:
//!
//! - Hardware abstraction traits (pixel display, glyph font, sensors)
//! - Text layout engine (shared cursor + glyph writer)

#![no_std]
#![deny(unsafe_code)]

// Host-side tests (proptest runner) link std
#[cfg(test)]
extern crate std;

pub mod text;
pub mod traits;
