//! Hardware abstraction traits
//!
//! These traits define the interface between the text layout engine /
//! application logic and hardware-specific implementations.

pub mod display;
pub mod font;
pub mod sensor;

pub use display::{DisplayError, PixelDisplay};
pub use font::{FontError, Glyph, GlyphFont, Mapping};
pub use sensor::{HumiditySensor, PressureSensor, SensorError, TemperatureSensor};
