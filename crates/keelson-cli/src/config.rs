use keelson_schema::{SortOrder, VersionSet};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default config file looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "keelson.toml";

/// Settings read from `keelson.toml`. Command-line flags take precedence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CliConfig {
    /// API versions recognized by the target cluster.
    #[serde(default)]
    pub api_versions: Vec<String>,
    #[serde(default)]
    pub default_order: Option<SortOrder>,
}

impl CliConfig {
    pub fn parse(input: &str) -> Result<Self, String> {
        toml::from_str(input).map_err(|e| format!("config error: {e}"))
    }

    pub fn load(path: &Path) -> Result<Self, String> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| format!("config error: failed to read {}: {e}", path.display()))?;
        Self::parse(&content)
    }

    /// Load `explicit` if given, otherwise [`DEFAULT_CONFIG_FILE`] when it
    /// exists, otherwise defaults.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, String> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        let default_path = Path::new(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            Self::load(default_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Flag values when given, otherwise config values, otherwise defaults.
    pub fn version_set(&self, flags: &[String]) -> VersionSet {
        if !flags.is_empty() {
            VersionSet::new(flags.iter().cloned())
        } else if !self.api_versions.is_empty() {
            VersionSet::new(self.api_versions.iter().cloned())
        } else {
            VersionSet::default()
        }
    }

    pub fn order(&self, flag: Option<SortOrder>) -> SortOrder {
        flag.or(self.default_order).unwrap_or_default()
    }
}
