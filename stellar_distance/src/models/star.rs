use core::fmt;

use serde::{Deserialize, Serialize};

use crate::algorithms::{parallax_distance, parsecs_to_light_years, to_cartesian};
use crate::coordinates::{AngleDms, AngleHms};
use crate::units::{LightYears, MilliArcseconds, Parsecs, Radians};

/// A star as seen from the observer: name, equatorial position and parallax.
///
/// Values are built once with every field supplied and never mutated.
/// Distances and radian coordinates are derived on demand.
///
/// ```rust
/// use stellar_distance::{AngleDms, AngleHms, Star};
/// use stellar_distance::units::MilliArcseconds;
///
/// let vega = Star::new(
///     "Vega",
///     AngleHms::new(18, 36, 56.3),
///     AngleDms::north(38, 47, 1.0),
///     MilliArcseconds::new(130.23),
/// );
/// assert!((vega.distance_parsecs().value() - 7.6787).abs() < 1e-4);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star {
    name: String,
    right_ascension: AngleHms,
    declination: AngleDms,
    #[serde(rename = "parallax_mas")]
    parallax: MilliArcseconds,
}

impl Star {
    pub fn new(
        name: impl Into<String>,
        right_ascension: AngleHms,
        declination: AngleDms,
        parallax: MilliArcseconds,
    ) -> Self {
        Self {
            name: name.into(),
            right_ascension,
            declination,
            parallax,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn right_ascension(&self) -> AngleHms {
        self.right_ascension
    }

    pub fn declination(&self) -> AngleDms {
        self.declination
    }

    pub fn parallax(&self) -> MilliArcseconds {
        self.parallax
    }

    /// `1000 / parallax`, or `0` when the parallax is not positive.
    pub fn distance_parsecs(&self) -> Parsecs {
        parallax_distance(self.parallax)
    }

    pub fn distance_light_years(&self) -> LightYears {
        parsecs_to_light_years(self.distance_parsecs())
    }

    pub fn right_ascension_radians(&self) -> Radians {
        self.right_ascension.to_radians()
    }

    pub fn declination_radians(&self) -> Radians {
        self.declination.to_radians()
    }

    /// Observer-centred `[x, y, z]` position in parsecs.
    pub fn position_parsecs(&self) -> [f64; 3] {
        to_cartesian(
            self.right_ascension_radians(),
            self.declination_radians(),
            self.distance_parsecs(),
        )
    }
}

impl fmt::Display for Star {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (RA {}, Dec {}, parallax {} mas)",
            self.name,
            self.right_ascension,
            self.declination,
            self.parallax.value()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn sirius() -> Star {
        Star::new(
            "Sirius",
            AngleHms::new(6, 45, 8.9),
            AngleDms::south(16, 42, 58.0),
            MilliArcseconds::new(379.21),
        )
    }

    #[test]
    fn derived_distances() {
        let star = sirius();
        assert_abs_diff_eq!(star.distance_parsecs().value(), 2.6371, epsilon = 1e-4);
        assert_abs_diff_eq!(star.distance_light_years().value(), 8.6009, epsilon = 1e-4);
    }

    #[test]
    fn radian_coordinates_follow_angles() {
        let star = sirius();
        assert_eq!(star.right_ascension_radians(), star.right_ascension().to_radians());
        assert_eq!(star.declination_radians(), star.declination().to_radians());
        assert!(star.declination_radians().value() < 0.0);
    }

    #[test]
    fn zero_parallax_gives_zero_distances() {
        let star = Star::new(
            "Unknown",
            AngleHms::default(),
            AngleDms::default(),
            MilliArcseconds::new(0.0),
        );
        assert_eq!(star.distance_parsecs().value(), 0.0);
        assert_eq!(star.distance_light_years().value(), 0.0);
        assert_eq!(star.position_parsecs(), [0.0, 0.0, 0.0]);
    }

    #[test]
    fn position_has_distance_as_norm() {
        let star = sirius();
        let [x, y, z] = star.position_parsecs();
        let norm = (x * x + y * y + z * z).sqrt();
        assert_abs_diff_eq!(norm, star.distance_parsecs().value(), epsilon = 1e-12);
    }

    #[test]
    fn serde_roundtrip_uses_parallax_mas_key() {
        let json = serde_json::to_value(sirius()).unwrap();
        assert_eq!(json["parallax_mas"], 379.21);
        let back: Star = serde_json::from_value(json).unwrap();
        assert_eq!(back, sirius());
    }

    #[test]
    fn display() {
        assert_eq!(
            sirius().to_string(),
            "Sirius (RA 6h 45m 8.90s, Dec -16° 42' 58.00\", parallax 379.21 mas)"
        );
    }
}
