//! Vertically bit-mapped fonts
//!
//! Glyph data in the format the Brim text layout engine renders:
//! column-major, one byte per 8 vertical pixels, bit 0 = top pixel.

#![no_std]
#![deny(unsafe_code)]

pub mod font5x8;

pub use font5x8::Font5x8;
