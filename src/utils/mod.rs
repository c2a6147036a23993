// src/utils/mod.rs
pub mod report;
