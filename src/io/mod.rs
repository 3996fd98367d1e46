// src/io/mod.rs
pub mod elements;

pub use elements::DataLoadError;
