//! Celestial coordinate notations.
//!
//! - [`angle`]: `AngleHms` / `AngleDms` values and their conversions
//! - [`parse`]: `FromStr` support for sexagesimal strings

pub mod angle;
pub mod parse;


pub use angle::{AngleDms, AngleHms};
