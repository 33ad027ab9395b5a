use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::document::Category;


/// Pairing settings, read fresh from the host on every trigger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PairSettings {
    /// Whether focus changes open the paired file automatically. Default: true.
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Stylesheet suffixes, in search order.
    #[serde(default = "default_style_extensions")]
    pub style_extensions: Vec<String>,
    /// Component/markup suffixes, in search order.
    #[serde(default = "default_markup_extensions")]
    pub markup_extensions: Vec<String>,
}

fn default_enabled() -> bool {
    true
}

fn default_style_extensions() -> Vec<String> {
    [".css", ".scss", ".sass", ".less", ".module.css", ".module.scss"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_markup_extensions() -> Vec<String> {
    [".tsx", ".jsx", ".ts", ".js"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for PairSettings {
    fn default() -> Self {
        PairSettings {
            enabled: default_enabled(),
            style_extensions: default_style_extensions(),
            markup_extensions: default_markup_extensions(),
        }
    }
}


impl PairSettings {
    /// The extension group for a category.
    pub fn extensions(&self, category: Category) -> &[String] {
        match category {
            Category::Style => &self.style_extensions,
            Category::Markup => &self.markup_extensions,
        }
    }

    /// Both groups concatenated, style first.
    pub fn all_extensions(&self) -> Vec<&str> {
        self.style_extensions
            .iter()
            .chain(self.markup_extensions.iter())
            .map(|s| s.as_str())
            .collect()
    }

    /// Reject settings the matcher cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (key, group) in [
            ("styleExtensions", &self.style_extensions),
            ("markupExtensions", &self.markup_extensions),
        ] {
            if group.is_empty() {
                return Err(ConfigError::Validation(format!("{} must not be empty", key)));
            }
            for ext in group {
                if ext.is_empty() {
                    return Err(ConfigError::Validation(format!(
                        "{} contains an empty extension",
                        key
                    )));
                }
                if !ext.starts_with('.') {
                    log::warn!("{}: extension '{}' has no leading dot", key, ext);
                }
            }
        }
        Ok(())
    }

    /// Parse settings from JSON text.
    pub fn from_json(input: &str) -> Result<PairSettings, ConfigError> {
        let settings: PairSettings = serde_json::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Parse settings from YAML text.
    pub fn from_yaml(input: &str) -> Result<PairSettings, ConfigError> {
        let settings: PairSettings = serde_yaml::from_str(input)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a file that must exist. `.yaml`/`.yml` parse as
    /// YAML, anything else as JSON.
    pub fn load(path: &Path) -> Result<PairSettings, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let is_yaml = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case("yaml") || e.eq_ignore_ascii_case("yml"))
            .unwrap_or(false);
        if is_yaml {
            Self::from_yaml(&content)
        } else {
            Self::from_json(&content)
        }
    }

    /// Like `load`, but a missing file yields the defaults.
    pub fn from_file(path: &Path) -> Result<PairSettings, ConfigError> {
        match Self::load(path) {
            Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("no settings at {}, using defaults", path.display());
                Ok(PairSettings::default())
            }
            other => other,
        }
    }
}
