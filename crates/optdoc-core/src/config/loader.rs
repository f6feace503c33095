//! Configuration file discovery and loading

use super::optdoc_config::OptdocConfiguration;
use crate::error::OptdocError;
use crate::result::Result;
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names in discovery priority order
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".optdocrc.json",
    ".optdocrc.toml",
    "optdoc.yaml",
    "optdoc.yml",
    "optdoc.json",
];

/// Configuration loader for discovering and loading config files
pub struct ConfigLoader;

impl ConfigLoader {
    /// Auto-discover config file by traversing upward from start_path
    ///
    /// Within each directory the names of [`CONFIG_FILE_NAMES`] are tried in
    /// order; the first existing file wins.
    pub fn auto_discover(start_path: &Path) -> Result<Option<PathBuf>> {
        let mut current = start_path
            .canonicalize()
            .map_err(|e| OptdocError::config_error(format!("Invalid path: {e}")))?;

        loop {
            for filename in CONFIG_FILE_NAMES {
                let config_path = current.join(filename);
                if config_path.is_file() {
                    tracing::debug!("Found config: {}", config_path.display());
                    return Ok(Some(config_path));
                }
            }

            match current.parent() {
                Some(parent) => current = parent.to_path_buf(),
                None => break,
            }
        }

        Ok(None)
    }

    /// Load a configuration file and every base it `extends`
    pub fn load_from_file(path: &Path) -> Result<OptdocConfiguration> {
        let mut visited = HashSet::new();
        Self::load_chain(path, &mut visited)
    }

    /// Load config from path or auto-discover
    ///
    /// Without a custom path and without a discoverable file the defaults
    /// are used.
    pub fn load(custom_path: Option<&Path>, start_dir: Option<&Path>) -> Result<OptdocConfiguration> {
        if let Some(path) = custom_path {
            if !path.exists() {
                return Err(OptdocError::config_error(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            return Self::load_from_file(path);
        }

        let search_dir = start_dir.unwrap_or_else(|| Path::new("."));
        match Self::auto_discover(search_dir)? {
            Some(path) => Self::load_from_file(&path),
            None => {
                tracing::debug!("No config file found, using defaults");
                Ok(OptdocConfiguration::default())
            }
        }
    }

    fn load_chain(path: &Path, visited: &mut HashSet<PathBuf>) -> Result<OptdocConfiguration> {
        let canonical = path.canonicalize().map_err(|e| {
            OptdocError::config_error(format!(
                "Failed to load config from '{}': {e}",
                path.display()
            ))
        })?;
        if !visited.insert(canonical.clone()) {
            return Err(OptdocError::config_error(format!(
                "Circular config extends at '{}'",
                path.display()
            )));
        }

        let mut config = Self::parse(&canonical)?;
        if let Some(base) = config.extends.clone() {
            let base_path = canonical
                .parent()
                .map(|dir| dir.join(&base))
                .unwrap_or_else(|| PathBuf::from(&base));
            tracing::debug!("Config {} extends {}", path.display(), base_path.display());
            let base_config = Self::load_chain(&base_path, visited)?;
            config.merge_with(base_config);
        }
        Ok(config)
    }

    fn parse(path: &Path) -> Result<OptdocConfiguration> {
        let content = fs::read_to_string(path).map_err(|e| OptdocError::io_error(path, e))?;
        let parse_error = |e: &dyn std::fmt::Display| {
            OptdocError::config_error(format!(
                "Failed to load config from '{}': {e}",
                path.display()
            ))
        };

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("yaml") | Some("yml") => serde_yaml::from_str(&content).map_err(|e| parse_error(&e)),
            Some("toml") => toml::from_str(&content).map_err(|e| parse_error(&e)),
            Some("json") => serde_json::from_str(&content).map_err(|e| parse_error(&e)),
            _ => Err(OptdocError::config_error(format!(
                "Unsupported config file extension: {} (expected .json, .toml, .yaml or .yml)",
                path.display()
            ))),
        }
    }
}
