//! Parsec / light-year helpers.
//!
//! Both directions use [`PARSEC_TO_LIGHT_YEARS`] and accept any value,
//! negative ones included. Keeping distances non-negative is the job of the
//! parallax step upstream.

use crate::constants::PARSEC_TO_LIGHT_YEARS;
use crate::units::{LightYears, Parsecs};

pub fn parsecs_to_light_years(parsecs: Parsecs) -> LightYears {
    LightYears::new(parsecs.value() * PARSEC_TO_LIGHT_YEARS)
}

pub fn light_years_to_parsecs(light_years: LightYears) -> Parsecs {
    Parsecs::new(light_years.value() / PARSEC_TO_LIGHT_YEARS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn one_parsec() {
        assert_eq!(parsecs_to_light_years(Parsecs::new(1.0)).value(), 3.26156);
        assert_eq!(light_years_to_parsecs(LightYears::new(3.26156)).value(), 1.0);
    }

    #[test]
    fn negative_values_propagate() {
        assert_eq!(parsecs_to_light_years(Parsecs::new(-2.0)).value(), -6.52312);
        assert!(light_years_to_parsecs(LightYears::new(-1.0)).value() < 0.0);
    }

    #[test]
    fn zero_stays_zero() {
        assert_eq!(parsecs_to_light_years(Parsecs::new(0.0)).value(), 0.0);
    }

    proptest! {
        #[test]
        fn roundtrip(x in -1.0e9f64..1.0e9) {
            let back = light_years_to_parsecs(parsecs_to_light_years(Parsecs::new(x)));
            prop_assert!((back.value() - x).abs() <= 1e-12 * x.abs().max(1.0));
        }

        #[test]
        fn agrees_with_unit_conversion(x in 0.0f64..1.0e6) {
            let helper = parsecs_to_light_years(Parsecs::new(x)).value();
            let typed = Parsecs::new(x).to::<crate::units::LightYear>().value();
            prop_assert!((helper - typed).abs() <= 1e-9 * x.max(1.0));
        }
    }

    #[test]
    fn relative_roundtrip_large() {
        let x = 12_345.678;
        let back = light_years_to_parsecs(parsecs_to_light_years(Parsecs::new(x)));
        assert_relative_eq!(back.value(), x, max_relative = 1e-14);
    }
}
