use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub scanner: ScannerConfig,
    pub cleaner: CleanerConfig,
    pub tui: TuiConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    /// Folder basenames that count as a match
    pub target_names: Vec<String>,
    /// Maximum scan depth (0 = unlimited)
    pub max_depth: usize,
    /// Follow symbolic links during traversal
    pub follow_symlinks: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CleanerConfig {
    /// Prompt before every deletion
    pub require_confirmation: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TuiConfig {
    /// Show a confirmation dialog before deleting
    pub confirm_before_delete: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scanner: ScannerConfig::default(),
            cleaner: CleanerConfig::default(),
            tui: TuiConfig::default(),
        }
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            target_names: crate::scanner::TargetNames::DEFAULT_NAMES
                .iter()
                .map(|s| s.to_string())
                .collect(),
            max_depth: 0,
            follow_symlinks: false,
        }
    }
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            require_confirmation: true,
        }
    }
}

impl Default for TuiConfig {
    fn default() -> Self {
        Self {
            confirm_before_delete: true,
        }
    }
}

impl Config {
    /// Load configuration from an explicit path or the default location.
    ///
    /// An explicit path must exist; the default location
    /// (`$XDG_CONFIG_HOME/depsweep/config.toml`) falls back to defaults
    /// when absent.
    pub fn load(path: Option<&Path>) -> crate::error::Result<Self> {
        Self::load_from(path).map_err(Into::into)
    }

    fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match path {
            Some(p) => p.to_path_buf(),
            None => match dirs::config_dir() {
                Some(dir) => {
                    let default = dir.join("depsweep").join("config.toml");
                    if !default.exists() {
                        return Ok(Self::default());
                    }
                    default
                }
                None => return Ok(Self::default()),
            },
        };

        let contents = std::fs::read_to_string(&path).map_err(|source| ConfigError::ReadError {
            path: path.clone(),
            source,
        })?;

        let config: Config =
            toml::from_str(&contents).map_err(|source| ConfigError::ParseError {
                path: path.clone(),
                source,
            })?;

        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        for name in &self.scanner.target_names {
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "target_names entries must not be empty".to_string(),
                ));
            }
            if name.contains('/') || name.contains('\\') {
                return Err(ConfigError::Invalid(format!(
                    "target_names entry '{}' must be a bare folder name, not a path",
                    name
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SweepError;
    use std::io::Write;

    #[test]
    fn default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert!(config.cleaner.require_confirmation);
        assert!(config.tui.confirm_before_delete);
    }

    #[test]
    fn default_scanner_targets_dependency_caches() {
        let config = ScannerConfig::default();
        assert!(config.target_names.contains(&"vendor".to_string()));
        assert!(config.target_names.contains(&"node_modules".to_string()));
        assert_eq!(config.max_depth, 0);
        assert!(!config.follow_symlinks);
    }

    #[test]
    fn config_serializes_to_toml() {
        let config = Config::default();
        let toml_str = toml::to_string_pretty(&config).unwrap();
        assert!(toml_str.contains("[scanner]"));
        assert!(toml_str.contains("target_names"));
    }

    #[test]
    fn load_explicit_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[scanner]\ntarget_names = [\"bower_components\"]\nmax_depth = 3"
        )
        .unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.scanner.target_names, vec!["bower_components"]);
        assert_eq!(config.scanner.max_depth, 3);
        // Untouched sections keep defaults
        assert!(config.cleaner.require_confirmation);
    }

    #[test]
    fn load_missing_explicit_path_fails() {
        let result = Config::load(Some(Path::new("/nonexistent/depsweep.toml")));
        assert!(matches!(
            result,
            Err(SweepError::Config(ConfigError::ReadError { .. }))
        ));
    }

    #[test]
    fn load_rejects_path_like_target() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[scanner]\ntarget_names = [\"foo/bar\"]").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(
            result,
            Err(SweepError::Config(ConfigError::Invalid(_)))
        ));
    }

    #[test]
    fn load_rejects_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let result = Config::load(Some(file.path()));
        assert!(matches!(
            result,
            Err(SweepError::Config(ConfigError::ParseError { .. }))
        ));
    }
}
