//! Python bindings for the stellar distance calculator.
//!
//! All functions are available in the `stellar_distance` Python module
//! after installation with the `python` feature enabled.
//!
//! Example:
//!     >>> import stellar_distance as sd
//!     >>> sirius = sd.Star.from_strings("Sirius", "6h45m8.9s", "-16°42'58\"", 379.21)
//!     >>> betelgeuse = sd.Star("Betelgeuse", 5, 55, 10.3, 7, 24, 25.0, 4.51, is_positive=True)
//!     >>> sd.compute_between(sirius, betelgeuse).real_distance_parsecs
//!     219.385...

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use std::path::PathBuf;

use crate::algorithms;
use crate::coordinates::{AngleDms, AngleHms};
use crate::models::Star;
use crate::parsing::parse_stars_file;
use crate::services::{self, CalculationResult};
use crate::units::{LightYears, MilliArcseconds, Parsecs, Radians};

/// Python wrapper for Star
#[pyclass(name = "Star")]
#[derive(Clone)]
pub struct PyStar {
    inner: Star,
}

/// Declination from the Python constructor's components.
///
/// `dec_degrees` is a magnitude; negative values are refused.
fn declination_from_components(
    dec_degrees: i32,
    dec_minutes: i32,
    dec_seconds: f64,
    is_positive: bool,
) -> Result<AngleDms, String> {
    if dec_degrees < 0 {
        return Err(format!(
            "dec_degrees is a magnitude (got {}); pass is_positive=False for the south",
            dec_degrees
        ));
    }
    Ok(AngleDms::new(dec_degrees, dec_minutes, dec_seconds, is_positive))
}

#[pymethods]
impl PyStar {
    /// Star(name, ra_hours, ra_minutes, ra_seconds, dec_degrees, dec_minutes,
    ///      dec_seconds, parallax_mas, *, is_positive)
    ///
    /// `dec_degrees` is the unsigned declination magnitude. The hemisphere
    /// is given by the required keyword `is_positive` (`False` for south).
    #[new]
    #[pyo3(signature = (
        name,
        ra_hours,
        ra_minutes,
        ra_seconds,
        dec_degrees,
        dec_minutes,
        dec_seconds,
        parallax_mas,
        *,
        is_positive
    ))]
    #[allow(clippy::too_many_arguments)]
    fn new(
        name: String,
        ra_hours: i32,
        ra_minutes: i32,
        ra_seconds: f64,
        dec_degrees: i32,
        dec_minutes: i32,
        dec_seconds: f64,
        parallax_mas: f64,
        is_positive: bool,
    ) -> PyResult<Self> {
        let declination =
            declination_from_components(dec_degrees, dec_minutes, dec_seconds, is_positive)
                .map_err(PyValueError::new_err)?;

        Ok(Self {
            inner: Star::new(
                name,
                AngleHms::new(ra_hours, ra_minutes, ra_seconds),
                declination,
                MilliArcseconds::new(parallax_mas),
            ),
        })
    }

    /// Build a star from sexagesimal strings such as `"6h45m8.9s"` and `"-16°42'58\""`.
    #[staticmethod]
    fn from_strings(
        name: String,
        right_ascension: &str,
        declination: &str,
        parallax_mas: f64,
    ) -> PyResult<Self> {
        let ra: AngleHms = right_ascension
            .parse()
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;
        let dec: AngleDms = declination
            .parse()
            .map_err(|e| PyValueError::new_err(format!("{}", e)))?;

        Ok(Self {
            inner: Star::new(name, ra, dec, MilliArcseconds::new(parallax_mas)),
        })
    }

    #[getter]
    fn name(&self) -> String {
        self.inner.name().to_string()
    }

    #[getter]
    fn parallax_mas(&self) -> f64 {
        self.inner.parallax().value()
    }

    #[getter]
    fn right_ascension(&self) -> String {
        self.inner.right_ascension().to_string()
    }

    #[getter]
    fn declination(&self) -> String {
        self.inner.declination().to_string()
    }

    #[getter]
    fn distance_parsecs(&self) -> f64 {
        self.inner.distance_parsecs().value()
    }

    #[getter]
    fn distance_light_years(&self) -> f64 {
        self.inner.distance_light_years().value()
    }

    fn __repr__(&self) -> String {
        format!("Star({})", self.inner)
    }
}

/// Python wrapper for CalculationResult
#[pyclass(name = "CalculationResult")]
#[derive(Clone)]
pub struct PyCalculationResult {
    inner: CalculationResult,
}

#[pymethods]
impl PyCalculationResult {
    #[getter]
    fn star_a(&self) -> String {
        self.inner.star_a().to_string()
    }

    #[getter]
    fn star_b(&self) -> String {
        self.inner.star_b().to_string()
    }

    #[getter]
    fn separation_radians(&self) -> f64 {
        self.inner.separation().value()
    }

    #[getter]
    fn separation_degrees(&self) -> f64 {
        self.inner.separation_degrees().value()
    }

    #[getter]
    fn distance_a_parsecs(&self) -> f64 {
        self.inner.distance_a().value()
    }

    #[getter]
    fn distance_b_parsecs(&self) -> f64 {
        self.inner.distance_b().value()
    }

    #[getter]
    fn real_distance_parsecs(&self) -> f64 {
        self.inner.real_distance().value()
    }

    #[getter]
    fn real_distance_light_years(&self) -> f64 {
        self.inner.real_distance_light_years().value()
    }

    #[getter]
    fn method(&self) -> String {
        self.inner.method().to_string()
    }

    #[getter]
    fn derivation(&self) -> String {
        self.inner.derivation().to_string()
    }

    fn to_json(&self) -> PyResult<String> {
        self.inner
            .to_json()
            .map_err(|e| PyRuntimeError::new_err(format!("Failed to serialize result: {}", e)))
    }

    fn __repr__(&self) -> String {
        format!(
            "CalculationResult({} <-> {}, D={:.4} pc)",
            self.inner.star_a(),
            self.inner.star_b(),
            self.inner.real_distance().value()
        )
    }
}

/// Real distance between two stars.
///
/// With `checked=True`, stars with an empty name or a non-positive parallax
/// raise `ValueError` instead of computing with a zero distance.
#[pyfunction]
#[pyo3(signature = (star_a, star_b, checked=false))]
pub fn compute_between(
    star_a: &PyStar,
    star_b: &PyStar,
    checked: bool,
) -> PyResult<PyCalculationResult> {
    let inner = if checked {
        services::compute_between_checked(&star_a.inner, &star_b.inner)
            .map_err(|e| PyValueError::new_err(e.to_string()))?
    } else {
        services::compute_between(&star_a.inner, &star_b.inner)
    };
    Ok(PyCalculationResult { inner })
}

/// Load star descriptors from a `.json` or `.toml` file
///
/// Args:
///     file_path: Path to the star file
///
/// Returns:
///     list[Star]
#[pyfunction]
pub fn load_stars(file_path: &str) -> PyResult<Vec<PyStar>> {
    let path = PathBuf::from(file_path);

    let stars = parse_stars_file(&path)
        .map_err(|e| PyRuntimeError::new_err(format!("Failed to load stars: {:#}", e)))?;

    Ok(stars.into_iter().map(|inner| PyStar { inner }).collect())
}

/// Parallax (mas) to distance (pc); 0 for a non-positive parallax.
#[pyfunction]
pub fn parallax_distance(parallax_mas: f64) -> f64 {
    algorithms::parallax_distance(MilliArcseconds::new(parallax_mas)).value()
}

/// Great-circle separation in radians; all inputs in radians.
#[pyfunction]
pub fn angular_separation(ra1: f64, dec1: f64, ra2: f64, dec2: f64) -> f64 {
    algorithms::angular_separation(
        Radians::new(ra1),
        Radians::new(dec1),
        Radians::new(ra2),
        Radians::new(dec2),
    )
    .value()
}

#[pyfunction]
pub fn real_distance(d1_parsecs: f64, d2_parsecs: f64, separation_radians: f64) -> f64 {
    algorithms::real_distance(
        Parsecs::new(d1_parsecs),
        Parsecs::new(d2_parsecs),
        Radians::new(separation_radians),
    )
    .value()
}

#[pyfunction]
pub fn parsecs_to_light_years(parsecs: f64) -> f64 {
    algorithms::parsecs_to_light_years(Parsecs::new(parsecs)).value()
}

#[pyfunction]
pub fn light_years_to_parsecs(light_years: f64) -> f64 {
    algorithms::light_years_to_parsecs(LightYears::new(light_years)).value()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declination_keeps_hemisphere_flag() {
        let dec = declination_from_components(16, 42, 58.0, false).unwrap();
        assert_eq!(dec, AngleDms::south(16, 42, 58.0));
        assert!(dec.to_degrees().value() < 0.0);
    }

    #[test]
    fn test_declination_rejects_signed_degrees() {
        let err = declination_from_components(-16, 42, 58.0, true).unwrap_err();
        assert!(err.contains("is_positive=False"));
    }
}
