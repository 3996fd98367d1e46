// src/ui/mod.rs
pub mod terminal;

#[cfg(feature = "gui")]
pub mod window;
