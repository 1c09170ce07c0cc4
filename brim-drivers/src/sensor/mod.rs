//! Environmental sensor drivers

pub mod hts221;
pub mod lps25h;

pub use hts221::Hts221;
pub use lps25h::Lps25h;
