//! Sexagesimal angle representations.
//!
//! Right ascension is carried as [`AngleHms`] (hours, minutes, seconds) and
//! declination as [`AngleDms`] (degree magnitude, minutes, seconds and a
//! hemisphere flag). Neither type validates its components: hours past 24 or
//! negative minutes convert to mathematically consistent, if astronomically
//! meaningless, values. Use [`crate::services::validation`] to report such
//! inputs.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEGREES_PER_HOUR, MINUTES_PER_UNIT, RADIANS_PER_DEGREE, SECONDS_PER_UNIT};
use crate::units::{Degrees, Radians};

/// Hour-angle notation used for right ascension (`24h == 360°`).
///
/// ```rust
/// use stellar_distance::AngleHms;
///
/// let ra = AngleHms::new(6, 30, 0.0);
/// assert_eq!(ra.to_degrees().value(), 97.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleHms {
    pub hours: i32,
    pub minutes: i32,
    pub seconds: f64,
}

impl AngleHms {
    pub const fn new(hours: i32, minutes: i32, seconds: f64) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Decimal hours, `hours + minutes/60 + seconds/3600`.
    pub fn to_hours(&self) -> f64 {
        self.hours as f64 + self.minutes as f64 / MINUTES_PER_UNIT + self.seconds / SECONDS_PER_UNIT
    }

    pub fn to_degrees(&self) -> Degrees {
        Degrees::new(self.to_hours() * DEGREES_PER_HOUR)
    }

    pub fn to_radians(&self) -> Radians {
        Radians::new(self.to_degrees().value() * RADIANS_PER_DEGREE)
    }
}

impl fmt::Display for AngleHms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h {}m {:.2}s", self.hours, self.minutes, self.seconds)
    }
}

/// Degree notation used for declination.
///
/// `degrees` is read as a magnitude; the hemisphere comes from
/// `is_positive` and is applied once, after the components are summed.
/// When deserializing, a missing `is_positive` means north.
///
/// ```rust
/// use stellar_distance::AngleDms;
///
/// let dec = AngleDms::south(16, 30, 0.0);
/// assert_eq!(dec.to_degrees().value(), -16.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AngleDms {
    pub degrees: i32,
    pub minutes: i32,
    pub seconds: f64,
    #[serde(default = "north_default")]
    pub is_positive: bool,
}

fn north_default() -> bool {
    true
}

impl AngleDms {
    pub const fn new(degrees: i32, minutes: i32, seconds: f64, is_positive: bool) -> Self {
        Self {
            degrees,
            minutes,
            seconds,
            is_positive,
        }
    }

    /// Northern-hemisphere (`+`) declination.
    pub const fn north(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self::new(degrees, minutes, seconds, true)
    }

    /// Southern-hemisphere (`-`) declination.
    pub const fn south(degrees: i32, minutes: i32, seconds: f64) -> Self {
        Self::new(degrees, minutes, seconds, false)
    }

    pub fn sign(&self) -> f64 {
        if self.is_positive {
            1.0
        } else {
            -1.0
        }
    }

    /// Unsigned angle, `|degrees| + minutes/60 + seconds/3600`.
    pub fn magnitude(&self) -> f64 {
        self.degrees.unsigned_abs() as f64
            + self.minutes as f64 / MINUTES_PER_UNIT
            + self.seconds / SECONDS_PER_UNIT
    }

    pub fn to_degrees(&self) -> Degrees {
        Degrees::new(self.sign() * self.magnitude())
    }

    pub fn to_radians(&self) -> Radians {
        Radians::new(self.to_degrees().value() * RADIANS_PER_DEGREE)
    }
}

impl Default for AngleDms {
    fn default() -> Self {
        Self::north(0, 0, 0.0)
    }
}

impl fmt::Display for AngleDms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.is_positive { '+' } else { '-' };
        write!(
            f,
            "{}{}° {}' {:.2}\"",
            sign,
            self.degrees.unsigned_abs(),
            self.minutes,
            self.seconds
        )
    }
}
