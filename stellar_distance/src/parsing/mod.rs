//! Star descriptor loading.
//!
//! Descriptor files hold the same shape as a catalogue record: a name, a
//! right ascension and declination (sexagesimal strings or component
//! tables) and a parallax in milliarcseconds.

pub mod star_file;


pub use star_file::{
    find_star, parse_stars_file, parse_stars_json_str, parse_stars_toml_str, select_pair,
};
