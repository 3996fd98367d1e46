// src/state.rs
use crate::config::Config;
use crate::io::DataLoadError;
use crate::model::ElementRepository;
use crate::utils::report;

/// Warning shown by every front end when the query is blank.
pub const EMPTY_INPUT_WARNING: &str = "Please enter an element name.";

/// What a front end should show for one query.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchOutcome {
    /// Blank input; the core was not consulted
    EmptyInput,
    Found(String),
    NotFound(String),
}

impl SearchOutcome {
    pub fn text(&self) -> &str {
        match self {
            SearchOutcome::EmptyInput => EMPTY_INPUT_WARNING,
            SearchOutcome::Found(text) | SearchOutcome::NotFound(text) => text,
        }
    }
}

pub struct AppState {
    pub repository: ElementRepository,
}

impl AppState {
    pub fn new(repository: ElementRepository) -> Self {
        Self { repository }
    }

    /// Loads the element data named by `config`. Failure here ends the program.
    pub fn from_config(config: &Config) -> Result<Self, DataLoadError> {
        let repository = ElementRepository::load(&config.resolve_data_path())?;
        Ok(Self::new(repository))
    }

    pub fn search(&self, input: &str) -> SearchOutcome {
        let name = input.trim();
        if name.is_empty() {
            return SearchOutcome::EmptyInput;
        }

        match self.repository.find_by_name(name) {
            Some(element) => SearchOutcome::Found(report::format_found(element)),
            None => {
                log::debug!("No element named '{}'", name);
                SearchOutcome::NotFound(report::format_not_found())
            }
        }
    }
}
