#![deny(unsafe_code)]
//! Core color state for the dock theme.
//!
//! Provides the HSV `Color` value type with its range-enforcing operations,
//! `Rgba` and the HSV <-> RGB conversions, the `R;;G;;B;;A` preference string
//! format, and `Adjustment` for describing derived color variants as data.

pub mod adjust;
pub mod color;
pub mod error;
pub mod prefs;
pub mod rgb;

pub use adjust::Adjustment;
pub use color::Color;
pub use error::ColorError;
pub use rgb::Rgba;
