//! Offline chemistry assistant: look up a chemical element by name in a local
//! JSON data file and render its attributes as text.
//!
//! The core is [`model::ElementRepository`] plus [`utils::report`]; front ends
//! (terminal prompt, GTK form) go through [`state::AppState::search`].

pub mod config;
pub mod io;
pub mod model;
pub mod state;
pub mod ui;
pub mod utils;
