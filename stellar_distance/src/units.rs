//! Units used by the calculator.
//!
//! Angles and parsecs come straight from [`qtty`]. The light-year is
//! redefined here: `qtty`'s own `LightYear` uses the exact Julian-year
//! definition, while every distance this crate displays is converted with
//! the fixed [`PARSEC_TO_LIGHT_YEARS`] factor. Defining the unit from that
//! factor keeps `Parsecs::to::<LightYear>()` consistent with
//! [`crate::algorithms::parsecs_to_light_years`].
//!
//! ```rust
//! use stellar_distance::units::{LightYear, Parsecs};
//!
//! let ly = Parsecs::new(1.0).to::<LightYear>();
//! assert!((ly.value() - 3.26156).abs() < 1e-12);
//! ```

use qtty::length::Length;
use qtty::{Quantity, Unit};

use crate::constants::PARSEC_TO_LIGHT_YEARS;

pub use qtty::{
    Degree, Degrees, MilliArcsecond, MilliArcseconds, Parsec, Parsecs, Radian, Radians,
};

/// Light-year, fixed at `1 / 3.26156` parsec.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct LightYear;

impl Unit for LightYear {
    const RATIO: f64 = <Parsec as Unit>::RATIO / PARSEC_TO_LIGHT_YEARS;
    type Dim = Length;
    const SYMBOL: &'static str = "ly";
}

/// A quantity measured in (catalogue) light-years.
pub type LightYears = Quantity<LightYear>;
