//! Domain models.

pub mod star;

pub use star::Star;
