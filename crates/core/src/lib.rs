//! Core domain types for filmshelf
//!
//! This crate contains the record type and constants shared across all
//! other crates.

mod constants;
mod movie;
mod paths;

pub use constants::*;
pub use movie::*;
pub use paths::*;
