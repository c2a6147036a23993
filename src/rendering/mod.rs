pub mod export;
pub mod painter;

// Re-export specific functions to keep the API clean for the rest of the app
pub use export::export_atom;
