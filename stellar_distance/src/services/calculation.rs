//! Result aggregation for a pair of stars.
//!
//! [`compute_between`] runs the distance engine over two stars and packs
//! every intermediate value into an immutable [`CalculationResult`],
//! including the rendered derivation trace.

use log::{debug, warn};
use serde::Serialize;

use super::trace::{render_trace, TraceFormat, TraceValues};
use super::validation::{ensure_computable, validate_pair};
use crate::algorithms::{
    angular_separation, parallax_distance, parsecs_to_light_years, real_distance,
};
use crate::constants::{DEGREES_PER_RADIAN, METHOD_NAME};
use crate::error::CalculationError;
use crate::models::Star;
use crate::units::{Degrees, LightYears, Parsecs, Radians};

/// Snapshot of one star-pair calculation.
///
/// Created by [`compute_between`]; read through the accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    star_a: String,
    star_b: String,
    separation: Radians,
    separation_degrees: Degrees,
    distance_a: Parsecs,
    distance_b: Parsecs,
    real_distance: Parsecs,
    real_distance_light_years: LightYears,
    method: String,
    derivation: String,
}

impl CalculationResult {
    pub fn star_a(&self) -> &str {
        &self.star_a
    }

    pub fn star_b(&self) -> &str {
        &self.star_b
    }

    /// Angular separation on the sky, in `[0, π]`.
    pub fn separation(&self) -> Radians {
        self.separation
    }

    pub fn separation_degrees(&self) -> Degrees {
        self.separation_degrees
    }

    /// Parallax distance of the first star (0 when its parallax is not positive).
    pub fn distance_a(&self) -> Parsecs {
        self.distance_a
    }

    /// Parallax distance of the second star (0 when its parallax is not positive).
    pub fn distance_b(&self) -> Parsecs {
        self.distance_b
    }

    pub fn real_distance(&self) -> Parsecs {
        self.real_distance
    }

    pub fn real_distance_light_years(&self) -> LightYears {
        self.real_distance_light_years
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    /// Multi-line derivation trace.
    pub fn derivation(&self) -> &str {
        &self.derivation
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Distance between two stars with the default trace precision.
///
/// Never fails. A non-positive parallax yields a zero distance for that
/// star and the real distance is computed from it as-is; callers that need
/// to refuse such input should use [`compute_between_checked`].
pub fn compute_between(star_a: &Star, star_b: &Star) -> CalculationResult {
    compute_between_with(star_a, star_b, &TraceFormat::default())
}

/// Same as [`compute_between`], rendering the trace with `format`.
pub fn compute_between_with(
    star_a: &Star,
    star_b: &Star,
    format: &TraceFormat,
) -> CalculationResult {
    for star in [star_a, star_b] {
        if star.parallax().value() <= 0.0 {
            warn!(
                "Star '{}' has non-positive parallax ({} mas); using 0 pc",
                star.name(),
                star.parallax().value()
            );
        }
    }

    let (ra_a, dec_a) = (star_a.right_ascension_radians(), star_a.declination_radians());
    let (ra_b, dec_b) = (star_b.right_ascension_radians(), star_b.declination_radians());

    let distance_a = parallax_distance(star_a.parallax());
    let distance_b = parallax_distance(star_b.parallax());

    let separation = angular_separation(ra_a, dec_a, ra_b, dec_b);
    let separation_degrees = Degrees::new(separation.value() * DEGREES_PER_RADIAN);

    let real = real_distance(distance_a, distance_b, separation);
    let real_ly = parsecs_to_light_years(real);

    debug!(
        "{} <-> {}: d1={:.6} pc, d2={:.6} pc, θ={:.6}°, D={:.6} pc",
        star_a.name(),
        star_b.name(),
        distance_a.value(),
        distance_b.value(),
        separation_degrees.value(),
        real.value()
    );

    let derivation = render_trace(
        &TraceValues {
            separation: separation_degrees,
            distance_a,
            distance_b,
            real_distance: real,
            real_distance_light_years: real_ly,
        },
        format,
    );

    CalculationResult {
        star_a: star_a.name().to_string(),
        star_b: star_b.name().to_string(),
        separation,
        separation_degrees,
        distance_a,
        distance_b,
        real_distance: real,
        real_distance_light_years: real_ly,
        method: METHOD_NAME.to_string(),
        derivation,
    }
}

/// Validating front for [`compute_between`].
///
/// Refuses stars with an empty name or a parallax that is not strictly
/// positive; range warnings are logged and do not block the computation.
pub fn compute_between_checked(
    star_a: &Star,
    star_b: &Star,
) -> Result<CalculationResult, CalculationError> {
    compute_between_checked_with(star_a, star_b, &TraceFormat::default())
}

pub fn compute_between_checked_with(
    star_a: &Star,
    star_b: &Star,
    format: &TraceFormat,
) -> Result<CalculationResult, CalculationError> {
    ensure_computable(star_a)?;
    ensure_computable(star_b)?;

    let report = validate_pair(star_a, star_b);
    for warning in &report.warnings {
        warn!("{}", warning);
    }

    Ok(compute_between_with(star_a, star_b, format))
}
