// src/physics/mod.rs

pub mod geometry;
pub mod shells;

// Re-export commonly used items
pub use geometry::{resolve as resolve_geometry, AtomGeometry, ShellGeometry, Spin, Viewport};
pub use shells::{configure, configure_element, ShellConfiguration, SHELL_CAPACITIES};
