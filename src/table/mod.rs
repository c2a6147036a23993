// src/table/mod.rs

pub mod filter;
pub mod layout;

pub use filter::{derive_highlighted, derive_visible, FilterAction, FilterState, HighlightedCell, ViewMode};
pub use layout::{CellContent, GridCell, GridPosition, TableLayout};
