//src/model/mod.rs
pub mod catalog;
pub mod elements;

// Re-exports for cleaner imports
pub use catalog::{catalog, Catalog};
pub use elements::{color_hex, color_of, Category, Element, Rgb};
