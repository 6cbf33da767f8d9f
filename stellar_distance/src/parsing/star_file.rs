use anyhow::{anyhow, bail, Context, Result};
use serde::Deserialize;
use std::path::Path;

use crate::coordinates::{AngleDms, AngleHms};
use crate::models::Star;
use crate::units::MilliArcseconds;

/// Right ascension as written in a descriptor file: a sexagesimal string or
/// a component table.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRightAscension {
    Text(String),
    Components(AngleHms),
}

/// Declination as written in a descriptor file.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawDeclination {
    Text(String),
    Components(AngleDms),
}

/// Raw star record as it comes from the file
#[derive(Debug, Deserialize)]
struct RawStar {
    name: String,
    right_ascension: RawRightAscension,
    declination: RawDeclination,
    parallax_mas: f64,
}

/// Container for the file structure
#[derive(Debug, Deserialize)]
struct StarFile {
    stars: Vec<RawStar>,
}

impl RawStar {
    fn into_star(self) -> Result<Star> {
        let right_ascension = match self.right_ascension {
            RawRightAscension::Text(s) => s.parse::<AngleHms>()?,
            RawRightAscension::Components(hms) => hms,
        };
        let declination = match self.declination {
            RawDeclination::Text(s) => s.parse::<AngleDms>()?,
            RawDeclination::Components(dms) => dms,
        };

        Ok(Star::new(
            self.name,
            right_ascension,
            declination,
            MilliArcseconds::new(self.parallax_mas),
        ))
    }
}

fn convert(file: StarFile) -> Result<Vec<Star>> {
    file.stars
        .into_iter()
        .enumerate()
        .map(|(idx, raw)| {
            let name = raw.name.clone();
            raw.into_star()
                .with_context(|| format!("Invalid star at index {} ('{}')", idx, name))
        })
        .collect()
}

/// Parse star descriptors from a JSON string (`{"stars": [...]}`).
pub fn parse_stars_json_str(json_str: &str) -> Result<Vec<Star>> {
    let file: StarFile =
        serde_json::from_str(json_str).context("Invalid star descriptor JSON")?;
    let stars = convert(file)?;
    log::debug!("Parsed {} star descriptors from JSON", stars.len());
    Ok(stars)
}

/// Parse star descriptors from a TOML string (`[[stars]]` tables).
pub fn parse_stars_toml_str(toml_str: &str) -> Result<Vec<Star>> {
    let file: StarFile = toml::from_str(toml_str).context("Invalid star descriptor TOML")?;
    let stars = convert(file)?;
    log::debug!("Parsed {} star descriptors from TOML", stars.len());
    Ok(stars)
}

/// Parse a descriptor file, choosing the format from its extension.
pub fn parse_stars_file(path: &Path) -> Result<Vec<Star>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read star file: {}", path.display()))?;

    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("json") => parse_stars_json_str(&content),
        Some("toml") => parse_stars_toml_str(&content),
        _ => bail!(
            "Unsupported star file extension for {} (expected .json or .toml)",
            path.display()
        ),
    }
    .with_context(|| format!("Failed to load stars from {}", path.display()))
}

/// Case-insensitive lookup by star name.
pub fn find_star<'a>(stars: &'a [Star], name: &str) -> Option<&'a Star> {
    let wanted = name.trim();
    stars.iter().find(|s| s.name().eq_ignore_ascii_case(wanted))
}

/// Pick the pair to compute: the two named stars, or the first two when no
/// names are given. Any other number of names is an error.
pub fn select_pair<'a, S: AsRef<str>>(
    stars: &'a [Star],
    names: &[S],
) -> Result<(&'a Star, &'a Star)> {
    match names {
        [] => match stars {
            [a, b, ..] => Ok((a, b)),
            _ => bail!("Star file must contain at least two stars (found {})", stars.len()),
        },
        [a, b] => {
            let (a, b) = (a.as_ref(), b.as_ref());
            let star_a = find_star(stars, a).ok_or_else(|| anyhow!("Star '{}' not found", a))?;
            let star_b = find_star(stars, b).ok_or_else(|| anyhow!("Star '{}' not found", b))?;
            Ok((star_a, star_b))
        }
        _ => bail!("Expected two star names, got {}", names.len()),
    }
}
