use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Site layout settings, all paths relative to the site root.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    pub content: PathBuf,
    pub r#static: PathBuf,
    pub output: PathBuf,
    pub template: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            content: PathBuf::from("content"),
            r#static: PathBuf::from("static"),
            output: PathBuf::from("public"),
            template: PathBuf::from("template.html"),
        }
    }
}

impl Config {
    /// Load config from a TOML file, or return defaults if not found.
    pub fn load(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => Self::default(),
        }
    }
}
