//! Periodic table and Bohr-model core.
//!
//! The catalog, grid layout, filter engine, electron shells and atom geometry
//! are plain Rust with no GUI dependency. The `ptable` binary (feature `gui`)
//! is thin GTK glue over this crate.

pub mod config;
pub mod error;
pub mod model;
pub mod physics;
pub mod state;
pub mod table;
pub mod utils;

pub use error::{Lookup, PtableError, Result};
