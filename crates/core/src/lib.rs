//! Domain types shared by the catalog crates.

pub mod error;
pub mod types;
pub mod validation;
