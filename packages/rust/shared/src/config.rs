//! Application configuration for Flashdeck.
//!
//! User config lives at `~/.flashdeck/flashdeck.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{FlashdeckError, Result};
use crate::types::DocumentFormat;

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "flashdeck.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".flashdeck";

// ---------------------------------------------------------------------------
// Config structs (matching flashdeck.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Global defaults.
    #[serde(default)]
    pub defaults: DefaultsConfig,

    /// Document presentation.
    #[serde(default)]
    pub document: DocumentConfig,
}

/// `[defaults]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    /// Question bank to load when `--input` is not given.
    #[serde(default = "default_input")]
    pub input: String,

    /// Directory that batch exports write into.
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// Output container.
    #[serde(default = "default_format")]
    pub format: DocumentFormat,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            input: default_input(),
            output_dir: default_output_dir(),
            format: default_format(),
        }
    }
}

fn default_input() -> String {
    "technical_flashcards_complete_v2.json".into()
}
fn default_output_dir() -> String {
    ".".into()
}
fn default_format() -> DocumentFormat {
    DocumentFormat::Docx
}

/// `[document]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentConfig {
    /// Title heading at the top of every document.
    #[serde(default = "default_title")]
    pub title: String,

    /// Prefix of batch-exported file names (`<prefix><key>.<ext>`).
    #[serde(default = "default_file_prefix")]
    pub file_prefix: String,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            title: default_title(),
            file_prefix: default_file_prefix(),
        }
    }
}

fn default_title() -> String {
    "Investment Banking Flashcards".into()
}
fn default_file_prefix() -> String {
    "flashcards_".into()
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.flashdeck/`).
pub fn config_dir() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| FlashdeckError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.flashdeck/flashdeck.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| FlashdeckError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| FlashdeckError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| FlashdeckError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let config = AppConfig::default();
    let content =
        toml::to_string_pretty(&config).map_err(|e| FlashdeckError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| FlashdeckError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize default config");
        assert!(toml_str.contains("output_dir"));
        assert!(toml_str.contains("Investment Banking Flashcards"));
        assert!(toml_str.contains("format = \"docx\""));
    }

    #[test]
    fn config_roundtrip() {
        let config = AppConfig::default();
        let toml_str = toml::to_string_pretty(&config).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.defaults.format, DocumentFormat::Docx);
        assert_eq!(parsed.document.file_prefix, "flashcards_");
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[defaults]
output_dir = "/tmp/decks"
format = "md"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.defaults.output_dir, "/tmp/decks");
        assert_eq!(config.defaults.format, DocumentFormat::Markdown);
        assert_eq!(config.defaults.input, "technical_flashcards_complete_v2.json");
        assert_eq!(config.document.title, "Investment Banking Flashcards");
    }

    #[test]
    fn load_config_from_reports_bad_toml() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("flashdeck.toml");
        std::fs::write(&path, "[defaults\nformat = 3").unwrap();
        let err = load_config_from(&path).unwrap_err();
        assert!(err.to_string().contains("failed to parse"));
    }
}
