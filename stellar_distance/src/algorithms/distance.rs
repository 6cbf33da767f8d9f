//! Distance engine: parallax distance, spherical separation and the
//! observer/star/star triangle.
//!
//! All functions are pure and total. Invalid physical input is absorbed
//! rather than rejected: a non-positive parallax maps to a zero distance,
//! and both trigonometric steps clamp their intermediate values so that
//! floating-point overshoot never produces `NaN`.

use crate::constants::MILLIARCSEC_PER_ARCSEC;
use crate::units::{MilliArcseconds, Parsecs, Radians};

/// Distance implied by a trigonometric parallax, `d = 1000 / p`.
///
/// Returns exactly `0` pc for `p <= 0`; zero is the "unknown" sentinel.
///
/// ```rust
/// use stellar_distance::algorithms::parallax_distance;
/// use stellar_distance::units::MilliArcseconds;
///
/// assert_eq!(parallax_distance(MilliArcseconds::new(100.0)).value(), 10.0);
/// assert_eq!(parallax_distance(MilliArcseconds::new(-3.0)).value(), 0.0);
/// ```
pub fn parallax_distance(parallax: MilliArcseconds) -> Parsecs {
    let p = parallax.value();
    if p > 0.0 {
        Parsecs::new(MILLIARCSEC_PER_ARCSEC / p)
    } else {
        Parsecs::new(0.0)
    }
}

/// Great-circle angle between two equatorial positions (spherical law of cosines).
///
/// `cos θ = sin δ1 · sin δ2 + cos δ1 · cos δ2 · cos(α1 − α2)`
///
/// The cosine is clamped to `[-1, 1]` before `acos`, so the result is always
/// in `[0, π]`, including identical and antipodal inputs.
pub fn angular_separation(ra1: Radians, dec1: Radians, ra2: Radians, dec2: Radians) -> Radians {
    let (sin1, cos1) = dec1.value().sin_cos();
    let (sin2, cos2) = dec2.value().sin_cos();
    let cos_theta = sin1 * sin2 + cos1 * cos2 * (ra1.value() - ra2.value()).cos();

    Radians::new(cos_theta.clamp(-1.0, 1.0).acos())
}

/// Separation of two stars from their distances and the angle between them
/// (planar law of cosines).
///
/// `D = √(d1² + d2² − 2 · d1 · d2 · cos θ)`
///
/// The radicand is clamped to `≥ 0` to absorb rounding noise near `θ = 0`.
pub fn real_distance(d1: Parsecs, d2: Parsecs, separation: Radians) -> Parsecs {
    let (a, b) = (d1.value(), d2.value());
    let radicand = a * a + b * b - 2.0 * a * b * separation.value().cos();

    Parsecs::new(radicand.max(0.0).sqrt())
}

/// Observer-centred Cartesian position `[x, y, z]` in parsecs.
///
/// `x` points to `α = 0, δ = 0`, `z` to the north celestial pole.
pub fn to_cartesian(ra: Radians, dec: Radians, distance: Parsecs) -> [f64; 3] {
    let d = distance.value();
    let (sin_ra, cos_ra) = ra.value().sin_cos();
    let (sin_dec, cos_dec) = dec.value().sin_cos();

    [d * cos_dec * cos_ra, d * cos_dec * sin_ra, d * sin_dec]
}
