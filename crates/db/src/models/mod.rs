//! Row models for the catalog tables.
//!
//! Field names follow the store's column names, which are also the JSON
//! field names consumers depend on.

pub mod film;
pub mod showtime;
