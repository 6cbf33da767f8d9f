#[cfg(test)]
mod tests {
    use crate::coordinates::{AngleDms, AngleHms};
    use crate::error::CalculationError;
    use crate::models::Star;
    use crate::services::calculation::*;
    use crate::services::trace::TraceFormat;
    use crate::units::MilliArcseconds;
    use approx::assert_abs_diff_eq;

    fn sirius() -> Star {
        Star::new(
            "Sirius",
            AngleHms::new(6, 45, 8.9),
            AngleDms::south(16, 42, 58.0),
            MilliArcseconds::new(379.21),
        )
    }

    fn betelgeuse() -> Star {
        Star::new(
            "Betelgeuse",
            AngleHms::new(5, 55, 10.3),
            AngleDms::north(7, 24, 25.0),
            MilliArcseconds::new(4.51),
        )
    }

    #[test]
    fn test_result_carries_names_and_method() {
        let result = compute_between(&sirius(), &betelgeuse());
        assert_eq!(result.star_a(), "Sirius");
        assert_eq!(result.star_b(), "Betelgeuse");
        assert_eq!(result.method(), "Spherical Law of Cosines + 3D Distance");
    }

    #[test]
    fn test_sirius_betelgeuse_values() {
        let result = compute_between(&sirius(), &betelgeuse());
        assert_abs_diff_eq!(result.distance_a().value(), 2.6371, epsilon = 1e-4);
        assert_abs_diff_eq!(result.distance_b().value(), 221.7295, epsilon = 1e-4);
        assert_abs_diff_eq!(result.separation_degrees().value(), 27.1044, epsilon = 1e-4);
        assert_abs_diff_eq!(result.real_distance().value(), 219.3853, epsilon = 1e-4);
        assert_abs_diff_eq!(result.real_distance_light_years().value(), 715.54, epsilon = 1e-2);
    }

    #[test]
    fn test_degrees_and_radians_agree() {
        let result = compute_between(&sirius(), &betelgeuse());
        assert_abs_diff_eq!(
            result.separation_degrees().value(),
            result.separation().value().to_degrees(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_order_of_stars_does_not_change_distances() {
        let ab = compute_between(&sirius(), &betelgeuse());
        let ba = compute_between(&betelgeuse(), &sirius());
        assert_abs_diff_eq!(ab.separation().value(), ba.separation().value(), epsilon = 1e-12);
        assert_abs_diff_eq!(ab.real_distance().value(), ba.real_distance().value(), epsilon = 1e-9);
        assert_eq!(ab.distance_a(), ba.distance_b());
    }

    #[test]
    fn test_derivation_substitutes_values() {
        let result = compute_between(&sirius(), &betelgeuse());
        let text = result.derivation();
        assert!(text.starts_with("GEOMETRIC METHOD:"));
        assert!(text.contains("θ = 27.1044°"));
        assert!(text.contains("D = √(2.6371² + 221.7295² - 2·2.6371·221.7295·cos(27.1044°))"));
        assert!(text.contains("D = 219.3853 parsecs"));
        assert!(text.contains("D = 715.54 light-years"));
    }

    #[test]
    fn test_custom_trace_format() {
        let format = TraceFormat {
            angle_decimals: 2,
            parsec_decimals: 1,
            light_year_decimals: 1,
        };
        let result = compute_between_with(&sirius(), &betelgeuse(), &format);
        assert!(result.derivation().contains("θ = 27.10°"));
        assert!(result.derivation().contains("D = 219.4 parsecs"));
        let default_result = compute_between(&sirius(), &betelgeuse());
        assert_eq!(result.real_distance(), default_result.real_distance());
    }

    #[test]
    fn test_zero_parallax_does_not_fail() {
        let unknown = Star::new(
            "Unknown",
            AngleHms::new(5, 55, 10.3),
            AngleDms::north(7, 24, 25.0),
            MilliArcseconds::new(0.0),
        );
        let result = compute_between(&sirius(), &unknown);
        assert_eq!(result.distance_b().value(), 0.0);
        // With one side at 0 pc the real distance collapses to the other side.
        assert_abs_diff_eq!(
            result.real_distance().value(),
            result.distance_a().value(),
            epsilon = 1e-12
        );
        assert!(!result.derivation().is_empty());
    }

    #[test]
    fn test_same_star_twice() {
        let result = compute_between(&sirius(), &sirius());
        assert!(!result.separation().value().is_nan());
        assert_abs_diff_eq!(result.separation().value(), 0.0, epsilon = 1e-7);
        assert_abs_diff_eq!(result.real_distance().value(), 0.0, epsilon = 1e-6);
    }

    #[test]
    fn test_checked_refuses_non_positive_parallax() {
        let unknown = Star::new(
            "Unknown",
            AngleHms::new(1, 0, 0.0),
            AngleDms::north(1, 0, 0.0),
            MilliArcseconds::new(-2.0),
        );
        let err = compute_between_checked(&sirius(), &unknown).unwrap_err();
        assert_eq!(
            err,
            CalculationError::InvalidParallax {
                star: "Unknown".to_string(),
                parallax_mas: -2.0
            }
        );
    }

    #[test]
    fn test_checked_matches_unchecked_for_valid_input() {
        let checked = compute_between_checked(&sirius(), &betelgeuse()).unwrap();
        assert_eq!(checked, compute_between(&sirius(), &betelgeuse()));
    }

    #[test]
    fn test_to_json() {
        let result = compute_between(&sirius(), &betelgeuse());
        let json: serde_json::Value = serde_json::from_str(&result.to_json().unwrap()).unwrap();
        assert_eq!(json["star_a"], "Sirius");
        assert_eq!(json["method"], "Spherical Law of Cosines + 3D Distance");
        assert!(json["real_distance"].as_f64().unwrap() > 219.0);
    }
}
