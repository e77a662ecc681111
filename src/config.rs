//! Gallery settings, read from an optional TOML file.
//!
//! ```toml
//! color = false
//! show_summaries = true
//! demos = ["builder", "observer"]
//! ```

use crate::{PatternError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GalleryConfig {
    pub color: bool,
    pub show_summaries: bool,
    /// Demos to run, in order. Empty runs the whole catalog.
    pub demos: Vec<String>,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            color: true,
            show_summaries: true,
            demos: Vec::new(),
        }
    }
}

impl GalleryConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|err| PatternError::config_read(path, err))?;
        let config = Self::from_toml_str(&content)?;
        tracing::debug!(path = %path.display(), ?config, "loaded gallery config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_file_gives_defaults() {
        assert_eq!(GalleryConfig::from_toml_str("").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn test_partial_config_keeps_other_defaults() {
        let config = GalleryConfig::from_toml_str("color = false\n").unwrap();
        assert!(!config.color);
        assert!(config.show_summaries);
        assert!(config.demos.is_empty());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = GalleryConfig::from_toml_str("colour = false\n");
        assert!(matches!(result, Err(PatternError::ConfigParse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "show_summaries = false").unwrap();
        writeln!(file, "demos = [\"proxy\", \"state\"]").unwrap();

        let config = GalleryConfig::load(file.path()).unwrap();
        assert!(!config.show_summaries);
        assert_eq!(config.demos, vec!["proxy", "state"]);
    }

    #[test]
    fn test_missing_file() {
        let result = GalleryConfig::load(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(PatternError::ConfigRead { .. })));
    }
}
