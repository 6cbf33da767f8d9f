//! Fixed astronomical constants used throughout the calculator.

use core::f64::consts::PI;

/// Light-years in one parsec, as tabulated by the calculator.
///
/// This is the rounded catalogue factor, not the exact IAU ratio
/// (`3.261_563_777…`). Every distance conversion in the crate uses it so
/// that displayed values agree with each other.
pub const PARSEC_TO_LIGHT_YEARS: f64 = 3.26156;

/// Numerator of the parallax relation `d[pc] = 1000 / p[mas]`.
pub const MILLIARCSEC_PER_ARCSEC: f64 = 1000.0;

/// Degrees swept by one hour of right ascension (`24h == 360°`).
pub const DEGREES_PER_HOUR: f64 = 15.0;

pub const MINUTES_PER_UNIT: f64 = 60.0;
pub const SECONDS_PER_UNIT: f64 = 3600.0;

pub const RADIANS_PER_DEGREE: f64 = PI / 180.0;
pub const DEGREES_PER_RADIAN: f64 = 180.0 / PI;

/// Identifier stamped on every [`crate::CalculationResult`].
pub const METHOD_NAME: &str = "Spherical Law of Cosines + 3D Distance";
