//! Generator file paths (JSON config)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Input and output paths for the dictionary generator
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct GeneratorConfig {
    /// Māori word list, one word per line
    #[serde(default = "default_words_file")]
    pub words_file: String,
    /// Hand-picked briefs merged over the generated entries
    #[serde(default = "default_briefs_file")]
    pub briefs_file: String,
    /// Output path for the main Māori dictionary
    #[serde(default = "default_maori_output")]
    pub maori_output: String,
    /// Māori place-name list, one name per line
    #[serde(default = "default_place_names_file")]
    pub place_names_file: String,
    /// Output path for the Māori place-name dictionary
    #[serde(default = "default_place_names_output")]
    pub place_names_output: String,
    /// Hand-maintained English place-name dictionary, re-sorted in place
    #[serde(default = "default_english_place_names_file")]
    pub english_place_names_file: String,
}

fn default_words_file() -> String {
    "input/maori.txt".to_string()
}

fn default_briefs_file() -> String {
    "input/maori-briefs.json".to_string()
}

fn default_maori_output() -> String {
    "maori.json".to_string()
}

fn default_place_names_file() -> String {
    "input/nz-place-names-maori.txt".to_string()
}

fn default_place_names_output() -> String {
    "nz-place-names-maori.json".to_string()
}

fn default_english_place_names_file() -> String {
    "nz-place-names-english.json".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            words_file: default_words_file(),
            briefs_file: default_briefs_file(),
            maori_output: default_maori_output(),
            place_names_file: default_place_names_file(),
            place_names_output: default_place_names_output(),
            english_place_names_file: default_english_place_names_file(),
        }
    }
}

/// Config file path: `generate.json` next to the inputs
pub fn config_path() -> PathBuf {
    PathBuf::from("generate.json")
}

/// Loads the config file (defaults if missing or unparsable)
pub fn load_config() -> GeneratorConfig {
    match fs::read_to_string(config_path()) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_default(),
        Err(_) => GeneratorConfig::default(),
    }
}
