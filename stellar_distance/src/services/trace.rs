//! Derivation trace ("equation text") rendering.
//!
//! The trace restates the three formulas used by
//! [`compute_between`](super::calculation::compute_between) with the actual
//! numbers substituted in, for display next to the result.

use serde::{Deserialize, Serialize};

use crate::units::{Degrees, LightYears, Parsecs};

/// Decimal places used when rendering a trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TraceFormat {
    pub angle_decimals: usize,
    pub parsec_decimals: usize,
    pub light_year_decimals: usize,
}

impl Default for TraceFormat {
    fn default() -> Self {
        Self {
            angle_decimals: 4,
            parsec_decimals: 4,
            light_year_decimals: 2,
        }
    }
}

/// Numbers substituted into the trace.
#[derive(Debug, Clone, Copy)]
pub struct TraceValues {
    pub separation: Degrees,
    pub distance_a: Parsecs,
    pub distance_b: Parsecs,
    pub real_distance: Parsecs,
    pub real_distance_light_years: LightYears,
}

pub fn render_trace(values: &TraceValues, format: &TraceFormat) -> String {
    let ang = format.angle_decimals;
    let pc = format.parsec_decimals;
    let ly = format.light_year_decimals;

    let theta = values.separation.value();
    let d1 = values.distance_a.value();
    let d2 = values.distance_b.value();

    let lines = [
        "GEOMETRIC METHOD:".to_string(),
        String::new(),
        "1. Parallax Distance:".to_string(),
        "   d = 1000 / p (parsecs)".to_string(),
        String::new(),
        "2. Angular Separation (Spherical Law of Cosines):".to_string(),
        "   cos(θ) = sin(δ₁)·sin(δ₂) + cos(δ₁)·cos(δ₂)·cos(α₁-α₂)".to_string(),
        format!("   θ = {theta:.ang$}°"),
        String::new(),
        "3. Real Distance (Law of Cosines):".to_string(),
        "   D = √(d₁² + d₂² - 2·d₁·d₂·cos(θ))".to_string(),
        format!("   D = √({d1:.pc$}² + {d2:.pc$}² - 2·{d1:.pc$}·{d2:.pc$}·cos({theta:.ang$}°))"),
        format!("   D = {:.pc$} parsecs", values.real_distance.value()),
        format!("   D = {:.ly$} light-years", values.real_distance_light_years.value()),
    ];

    lines.join("\n")
}
