//src/model/mod.rs
pub mod element;
pub mod repository;

// Re-exports for cleaner imports
pub use element::ElementRecord;
pub use repository::{find_by_name, ElementRepository};
