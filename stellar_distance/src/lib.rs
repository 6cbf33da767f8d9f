//! # Stellar Distance
//!
//! Real 3-D distance between two stars from their parallaxes and sky
//! positions.
//!
//! Each star is given by a right ascension in hours-minutes-seconds, a
//! declination in degrees-minutes-seconds and a parallax in milliarcseconds.
//! The calculator works in three steps:
//!
//! 1. parallax distance `d = 1000 / p` parsecs
//! 2. angular separation θ by the spherical law of cosines
//! 3. real distance `D = √(d₁² + d₂² − 2·d₁·d₂·cos θ)` by the planar law of cosines
//!
//! and returns every intermediate value along with a human-readable
//! derivation trace.
//!
//! ## Architecture
//!
//! - [`coordinates`]: sexagesimal angle values, conversions and string parsing
//! - [`models`]: the [`Star`] descriptor
//! - [`algorithms`]: the distance engine (pure functions over typed quantities)
//! - [`services`]: [`compute_between`], validation and trace rendering
//! - [`parsing`]: JSON / TOML star descriptor files
//! - [`config`]: calculator settings file
//! - `python`: PyO3 bindings (feature `python`)
//!
//! ## Example
//!
//! ```
//! use stellar_distance::{compute_between, AngleDms, AngleHms, Star};
//! use stellar_distance::units::MilliArcseconds;
//!
//! let sirius = Star::new(
//!     "Sirius",
//!     AngleHms::new(6, 45, 8.9),
//!     AngleDms::south(16, 42, 58.0),
//!     MilliArcseconds::new(379.21),
//! );
//! let betelgeuse = Star::new(
//!     "Betelgeuse",
//!     AngleHms::new(5, 55, 10.3),
//!     AngleDms::north(7, 24, 25.0),
//!     MilliArcseconds::new(4.51),
//! );
//!
//! let result = compute_between(&sirius, &betelgeuse);
//! assert!((result.real_distance().value() - 219.385).abs() < 1e-2);
//! ```

pub mod algorithms;
pub mod config;
pub mod constants;
pub mod coordinates;
pub mod error;
pub mod models;
pub mod parsing;
pub mod services;
pub mod units;

#[cfg(feature = "python")]
pub mod python;

pub use algorithms::{
    angular_separation, light_years_to_parsecs, parallax_distance, parsecs_to_light_years,
    real_distance, to_cartesian,
};
pub use config::CalculatorConfig;
pub use coordinates::{AngleDms, AngleHms};
pub use error::{AngleParseError, CalculationError, ConfigError};
pub use models::Star;
pub use services::{compute_between, compute_between_checked, CalculationResult};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module definition
#[cfg(feature = "python")]
#[pymodule]
fn stellar_distance(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Types
    m.add_class::<python::PyStar>()?;
    m.add_class::<python::PyCalculationResult>()?;

    // Calculation entry points
    m.add_function(wrap_pyfunction!(python::compute_between, m)?)?;
    m.add_function(wrap_pyfunction!(python::load_stars, m)?)?;

    // Engine primitives
    m.add_function(wrap_pyfunction!(python::parallax_distance, m)?)?;
    m.add_function(wrap_pyfunction!(python::angular_separation, m)?)?;
    m.add_function(wrap_pyfunction!(python::real_distance, m)?)?;
    m.add_function(wrap_pyfunction!(python::parsecs_to_light_years, m)?)?;
    m.add_function(wrap_pyfunction!(python::light_years_to_parsecs, m)?)?;

    Ok(())
}
