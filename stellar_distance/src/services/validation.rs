//! Star descriptor validation with error and warning reporting.
//!
//! The distance engine accepts anything. This module is the boundary where
//! input is judged: errors mark a star that cannot produce a meaningful
//! distance (empty name, non-positive parallax), warnings flag sexagesimal
//! components outside their conventional ranges. Warnings never block a
//! computation; components are not normalised.

use serde::{Deserialize, Serialize};

use crate::error::CalculationError;
use crate::models::Star;

/// Outcome of validating one star or a pair.
///
/// Errors make `is_valid` false, warnings are informational.
///
/// ```
/// use stellar_distance::services::validation::ValidationResult;
///
/// let mut result = ValidationResult::new();
/// assert!(result.is_valid);
///
/// result.add_error("Parallax must be greater than zero".to_string());
/// assert!(!result.is_valid);
/// assert_eq!(result.errors.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}

impl ValidationResult {
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub fn add_error(&mut self, error: String) {
        self.is_valid = false;
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: String) {
        self.warnings.push(warning);
    }

    fn merge(&mut self, other: ValidationResult) {
        self.is_valid &= other.is_valid;
        self.errors.extend(other.errors);
        self.warnings.extend(other.warnings);
    }
}

/// Hard requirements for a star to take part in a real-distance computation.
pub fn ensure_computable(star: &Star) -> Result<(), CalculationError> {
    if star.name().trim().is_empty() {
        return Err(CalculationError::InvalidStar("star name is empty".to_string()));
    }

    let parallax = star.parallax().value();
    if !(parallax.is_finite() && parallax > 0.0) {
        return Err(CalculationError::InvalidParallax {
            star: star.name().to_string(),
            parallax_mas: parallax,
        });
    }

    Ok(())
}

fn sexagesimal_in_range(value: f64) -> bool {
    (0.0..60.0).contains(&value)
}

pub fn validate_star(star: &Star) -> ValidationResult {
    let mut result = ValidationResult::new();

    if let Err(e) = ensure_computable(star) {
        result.add_error(e.to_string());
    }

    let name = star.name();
    let mut out_of_range = |what: &str, value: String, range: &str| {
        result.add_warning(format!("'{}': {} {} outside {}", name, what, value, range));
    };

    let ra = star.right_ascension();
    if !(0..24).contains(&ra.hours) {
        out_of_range("right ascension hours", ra.hours.to_string(), "[0, 24)");
    }
    if !sexagesimal_in_range(ra.minutes as f64) {
        out_of_range("right ascension minutes", ra.minutes.to_string(), "[0, 60)");
    }
    if !sexagesimal_in_range(ra.seconds) {
        out_of_range("right ascension seconds", ra.seconds.to_string(), "[0, 60)");
    }

    let dec = star.declination();
    if !sexagesimal_in_range(dec.minutes as f64) {
        out_of_range("declination minutes", dec.minutes.to_string(), "[0, 60)");
    }
    if !sexagesimal_in_range(dec.seconds) {
        out_of_range("declination seconds", dec.seconds.to_string(), "[0, 60)");
    }
    if dec.magnitude() > 90.0 {
        result.add_warning(format!("'{}': declination {} exceeds 90°", name, dec));
    }

    result
}

pub fn validate_pair(star_a: &Star, star_b: &Star) -> ValidationResult {
    let mut result = validate_star(star_a);
    result.merge(validate_star(star_b));

    if star_a.right_ascension_radians() == star_b.right_ascension_radians()
        && star_a.declination_radians() == star_b.declination_radians()
    {
        result.add_warning(format!(
            "'{}' and '{}' share the same coordinates; separation is 0",
            star_a.name(),
            star_b.name()
        ));
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinates::{AngleDms, AngleHms};
    use crate::units::MilliArcseconds;

    fn star(name: &str, ra: AngleHms, dec: AngleDms, parallax: f64) -> Star {
        Star::new(name, ra, dec, MilliArcseconds::new(parallax))
    }

    fn vega() -> Star {
        star("Vega", AngleHms::new(18, 36, 56.3), AngleDms::north(38, 47, 1.0), 130.23)
    }

    #[test]
    fn test_default_matches_new() {
        let result = ValidationResult::default();
        assert!(result.is_valid);
        assert_eq!(result, ValidationResult::new());
    }

    #[test]
    fn test_valid_star_has_no_issues() {
        let result = validate_star(&vega());
        assert!(result.is_valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_zero_parallax_is_an_error() {
        let s = star("Dim", AngleHms::new(1, 0, 0.0), AngleDms::north(1, 0, 0.0), 0.0);
        let result = validate_star(&s);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
        assert!(result.errors[0].contains("Dim"));
    }

    #[test]
    fn test_non_finite_parallax_is_an_error() {
        let s = star("Nan", AngleHms::new(1, 0, 0.0), AngleDms::north(1, 0, 0.0), f64::NAN);
        assert!(matches!(
            ensure_computable(&s),
            Err(CalculationError::InvalidParallax { .. })
        ));
    }

    #[test]
    fn test_empty_name_is_an_error() {
        let s = star("  ", AngleHms::new(1, 0, 0.0), AngleDms::north(1, 0, 0.0), 10.0);
        assert_eq!(
            ensure_computable(&s),
            Err(CalculationError::InvalidStar("star name is empty".to_string()))
        );
    }

    #[test]
    fn test_out_of_range_components_are_warnings() {
        let s = star("Odd", AngleHms::new(25, 61, 60.0), AngleDms::south(95, -1, 75.0), 10.0);
        let result = validate_star(&s);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 6);
    }

    #[test]
    fn test_pair_merges_both_stars() {
        let bad = star("Bad", AngleHms::new(1, 0, 0.0), AngleDms::north(1, 0, 0.0), -1.0);
        let result = validate_pair(&vega(), &bad);
        assert!(!result.is_valid);
        assert_eq!(result.errors.len(), 1);
    }

    #[test]
    fn test_pair_with_identical_coordinates_warns() {
        let twin = star("Twin", AngleHms::new(18, 36, 56.3), AngleDms::north(38, 47, 1.0), 50.0);
        let result = validate_pair(&vega(), &twin);
        assert!(result.is_valid);
        assert_eq!(result.warnings.len(), 1);
        assert!(result.warnings[0].contains("same coordinates"));
    }
}
