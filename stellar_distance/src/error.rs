//! Error types for the fallible edges of the calculator.
//!
//! The distance engine itself never fails; these cover parsing user input,
//! the checked computation entry point and configuration loading.

/// Failure to read a sexagesimal angle from text.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum AngleParseError {
    #[error("Cannot parse '{0}' as hours-minutes-seconds")]
    InvalidHms(String),

    #[error("Cannot parse '{0}' as degrees-minutes-seconds")]
    InvalidDms(String),
}

/// Refusal raised by [`crate::compute_between_checked`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CalculationError {
    #[error("Parallax of '{star}' must be greater than zero (got {parallax_mas} mas)")]
    InvalidParallax { star: String, parallax_mas: f64 },

    #[error("Invalid star: {0}")]
    InvalidStar(String),
}

/// Error type for configuration loading.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Read(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("No stellar_distance.toml found in standard locations")]
    NotFound,
}
