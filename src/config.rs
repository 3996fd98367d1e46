// src/config.rs

use directories::ProjectDirs;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

/// Where the packaged build installs the element data
pub const SYSTEM_DATA_PATH: &str = "/usr/share/chemassist/elements.json";

// --- Main Config Struct ---

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
  /// Element data file; relative paths resolve against the working directory,
  /// then the user data dir, then the system install location
  #[serde(default = "default_data_path")]
  pub data_path: PathBuf,

  #[serde(default = "default_log_level")]
  pub log_level: String,
}

fn default_data_path() -> PathBuf {
  PathBuf::from("elements.json")
}

fn default_log_level() -> String {
  "info".to_string()
}

impl Default for Config {
  fn default() -> Self {
    Self {
      data_path: default_data_path(),
      log_level: default_log_level(),
    }
  }
}

impl Config {
  /// Loads config from standard OS location (e.g., ~/.config/chemassist/settings.json)
  pub fn load() -> (Self, String) {
    Self::from_path(&Self::get_path())
  }

  /// Never fails: anything unreadable falls back to defaults, reported in the message.
  pub fn from_path(path: &Path) -> (Self, String) {
    if path.exists() {
      match File::open(path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Places a relative `data_path` is looked for, in order
  pub fn data_path_candidates(&self) -> Vec<PathBuf> {
    let mut candidates = vec![self.data_path.clone()];
    if self.data_path.is_relative() {
      if let Some(proj) = ProjectDirs::from("org", "chemassist", "chemassist") {
        candidates.push(proj.data_dir().join(&self.data_path));
      }
      candidates.push(Path::new(SYSTEM_DATA_PATH).with_file_name(&self.data_path));
    }
    candidates
  }

  /// First candidate that exists, else the configured path so load errors name it
  pub fn resolve_data_path(&self) -> PathBuf {
    self
      .data_path_candidates()
      .into_iter()
      .find(|p| p.exists())
      .unwrap_or_else(|| self.data_path.clone())
  }

  pub fn get_path() -> PathBuf {
    if let Some(proj) = ProjectDirs::from("org", "chemassist", "chemassist") {
      proj.config_dir().join("settings.json")
    } else {
      PathBuf::from("settings.json")
    }
  }
}
