//! Astrometric calculations.
//!
//! # Components
//!
//! - [`distance`]: parallax distance, angular separation and real distance
//! - [`conversions`]: parsec / light-year helpers

pub mod conversions;
pub mod distance;


pub use conversions::{light_years_to_parsecs, parsecs_to_light_years};
pub use distance::{angular_separation, parallax_distance, real_distance, to_cartesian};
