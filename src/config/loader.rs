//! Project configuration loading

use crate::config::types::{PackageManager, StoreKind};
use crate::constants::CONFIG_FILENAMES;
use crate::error::{Error, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Optional per-project settings read from `assetgen.yaml` or `assetgen.json`.
#[derive(Debug, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    /// Overrides `tsconfig.json` detection.
    #[serde(default)]
    pub typescript: Option<bool>,
    /// Overrides store provider detection from `package.json`.
    #[serde(default)]
    pub store: Option<StoreKind>,
    /// Overrides lock file detection.
    #[serde(default)]
    pub package_manager: Option<PackageManager>,
    /// Template root, relative paths resolve against the project root.
    #[serde(default)]
    pub templates: Option<PathBuf>,
}

impl ProjectConfig {
    /// Loads the first configuration file found in `project_root`.
    ///
    /// Returns the default configuration when no file exists.
    pub fn load<P: AsRef<Path>>(project_root: P) -> Result<Self> {
        let project_root = project_root.as_ref();

        for config_file_name in CONFIG_FILENAMES.iter() {
            let config_file_path = project_root.join(config_file_name);

            if config_file_path.is_file() {
                log::debug!("Loading config from '{}'", config_file_path.display());
                let content = std::fs::read_to_string(&config_file_path)?;
                return Self::parse(config_file_name, &content);
            }
        }

        log::debug!("No config file in '{}', using defaults", project_root.display());
        Ok(Self::default())
    }

    fn parse(config_file_name: &str, content: &str) -> Result<Self> {
        let parse_error = |message: String| Error::ConfigParse {
            file: config_file_name.to_string(),
            message,
        };

        if config_file_name.ends_with(".json") {
            serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))
        } else if content.trim().is_empty() {
            Ok(Self::default())
        } else {
            serde_yaml::from_str(content).map_err(|e| parse_error(e.to_string()))
        }
    }
}
