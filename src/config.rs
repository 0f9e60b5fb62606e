use crate::constants;
use crate::error::{NormalizerError, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Pipeline configuration, loaded from `config.toml`.
///
/// Every field has a default so a missing file or an empty file yields a
/// working configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Prefix identifying the upstream extract's unlabeled index columns.
    #[serde(default = "default_unnamed_prefix")]
    pub unnamed_column_prefix: String,

    /// Column targeted by the phone normalization stage.
    #[serde(default = "default_phone_column")]
    pub phone_column: String,

    /// Columns forced to numeric type in the final stage.
    #[serde(default = "default_numeric_columns")]
    pub numeric_columns: Vec<String>,
}

fn default_unnamed_prefix() -> String {
    constants::UNNAMED_COLUMN_PREFIX.to_string()
}

fn default_phone_column() -> String {
    constants::DEFAULT_PHONE_COLUMN.to_string()
}

fn default_numeric_columns() -> Vec<String> {
    constants::NUMERIC_COLUMNS
        .iter()
        .map(|c| c.to_string())
        .collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unnamed_column_prefix: default_unnamed_prefix(),
            phone_column: default_phone_column(),
            numeric_columns: default_numeric_columns(),
        }
    }
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let config_content = fs::read_to_string(path).map_err(|e| {
            NormalizerError::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        let config: Config = toml::from_str(&config_content)?;
        Ok(config)
    }

    /// Load from the given path, falling back to defaults when the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }
}
