//! Sexagesimal angle parsing.
//!
//! Accepted right-ascension notations:
//!
//! ```text
//! Letter markers:   6h45m8.9s   or  6h 45m 8.9s
//! Colon-separated:  06:45:08.9
//! Space-separated:  6 45 8.9
//! ```
//!
//! Accepted declination notations (sign optional, defaults to north):
//!
//! ```text
//! Symbols:          -16°42'58"  or  −16° 42′ 58″
//! Letter markers:   -16d42m58s
//! Colon-separated:  -16:42:58
//! Space-separated:  +07 24 25
//! ```
//!
//! Only the syntax is checked: `25h70m` parses fine and converts to an
//! out-of-range angle, like component construction does.

use core::str::FromStr;

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use super::angle::{AngleDms, AngleHms};
use crate::error::AngleParseError;

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        (\d{1,3})                  # hours
        \s*(?:h|:|\s)\s*           # separator
        (\d{1,2})                  # minutes
        \s*(?:m|:|\s)\s*           # separator
        (\d{1,2}(?:\.\d+)?)        # seconds with optional decimals
        \s*s?
        \s*$
        "#,
    )
    .expect("HMS pattern is valid")
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?xi)
        ^\s*
        ([+\-−])?                  # hemisphere sign, ASCII or U+2212 minus
        \s*
        (\d{1,3})                  # degrees
        \s*(?:°|d|:|\s)\s*         # separator
        (\d{1,2})                  # minutes
        \s*(?:'|′|m|:|\s)\s*       # separator
        (\d{1,2}(?:\.\d+)?)        # seconds with optional decimals
        \s*(?:"|″|''|s)?
        \s*$
        "#,
    )
    .expect("DMS pattern is valid")
});

fn component<T: FromStr>(caps: &Captures<'_>, idx: usize) -> Option<T> {
    caps.get(idx).and_then(|m| m.as_str().parse().ok())
}

impl FromStr for AngleHms {
    type Err = AngleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AngleParseError::InvalidHms(s.to_string());
        let caps = HMS_REGEX.captures(s).ok_or_else(invalid)?;

        let hours = component(&caps, 1).ok_or_else(invalid)?;
        let minutes = component(&caps, 2).ok_or_else(invalid)?;
        let seconds = component(&caps, 3).ok_or_else(invalid)?;
        Ok(AngleHms::new(hours, minutes, seconds))
    }
}

impl FromStr for AngleDms {
    type Err = AngleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AngleParseError::InvalidDms(s.to_string());
        let caps = DMS_REGEX.captures(s).ok_or_else(invalid)?;

        let is_positive = caps.get(1).map_or(true, |m| m.as_str() == "+");
        let degrees = component(&caps, 2).ok_or_else(invalid)?;
        let minutes = component(&caps, 3).ok_or_else(invalid)?;
        let seconds = component(&caps, 4).ok_or_else(invalid)?;
        Ok(AngleDms::new(degrees, minutes, seconds, is_positive))
    }
}
