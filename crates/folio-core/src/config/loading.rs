//! Configuration loading and merging logic.
//!
//! # Configuration Hierarchy
//!
//! Configuration is loaded in the following order (later sources override earlier ones):
//! 1. **Hardcoded defaults** - Built-in fallback values
//! 2. **User config** - `~/.folio/config.toml` (global user preferences)
//! 3. **Project config** - `./.folio/config.toml` (directory-specific overrides)
//! 4. **CLI arguments** - Command-line flags (highest priority)

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::types::{DisplayConfig, ExportConfig, FolioConfig, StorageConfig};
use crate::config::validation::validate_config;
use crate::errors::ConfigError;

/// Load configuration from the hierarchy of config files.
///
/// # Errors
///
/// Returns an error if a config file exists but cannot be read or parsed, or
/// if validation fails. Missing config files are not errors.
pub fn load_hierarchy() -> Result<FolioConfig, ConfigError> {
    let mut config = FolioConfig::default();

    if let Some(path) = user_config_path()
        && let Some(user_config) = load_config_file(&path)?
    {
        config = merge_configs(config, user_config);
    }

    let project_path = std::env::current_dir()?.join(".folio").join("config.toml");
    if let Some(project_config) = load_config_file(&project_path)? {
        config = merge_configs(config, project_config);
    }

    validate_config(&config)?;

    Ok(config)
}

fn user_config_path() -> Option<PathBuf> {
    let path = dirs::home_dir().map(|home| home.join(".folio").join("config.toml"));
    if path.is_none() {
        tracing::warn!(
            event = "core.config.home_dir_not_found",
            "Could not find home directory, skipping user config"
        );
    }
    path
}

/// Load a configuration file. `Ok(None)` if the file does not exist.
pub fn load_config_file(path: &Path) -> Result<Option<FolioConfig>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
        Err(e) => return Err(ConfigError::IoError { source: e }),
    };

    let config = toml::from_str(&content).map_err(|e| ConfigError::ConfigParseError {
        message: format!("{}: {}", path.display(), e),
    })?;

    tracing::debug!(event = "core.config.file_loaded", path = %path.display());

    Ok(Some(config))
}

/// Merge two configurations, with override_config taking precedence.
///
/// Optional fields in the override replace base values only if present.
pub fn merge_configs(base: FolioConfig, override_config: FolioConfig) -> FolioConfig {
    FolioConfig {
        storage: StorageConfig {
            file: override_config.storage.file.or(base.storage.file),
            seed_samples: override_config
                .storage
                .seed_samples
                .or(base.storage.seed_samples),
        },
        export: ExportConfig {
            directory: override_config.export.directory.or(base.export.directory),
        },
        display: DisplayConfig {
            default_category: override_config
                .display
                .default_category
                .or(base.display.default_category),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_hierarchy_integration() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let user_path = temp_dir.path().join("user.toml");
        let project_path = temp_dir.path().join("project.toml");

        fs::write(
            &user_path,
            r#"
[storage]
file = "/data/projects.json"
seed_samples = false

[display]
default_category = "web"
"#,
        )
        .unwrap();
        fs::write(
            &project_path,
            r#"
[display]
default_category = "game"

[export]
directory = "/exports"
"#,
        )
        .unwrap();

        let user_config = load_config_file(&user_path).unwrap().unwrap();
        let project_config = load_config_file(&project_path).unwrap().unwrap();
        let merged = merge_configs(user_config, project_config);

        assert_eq!(
            merged.storage.file,
            Some(PathBuf::from("/data/projects.json"))
        ); // From user
        assert_eq!(merged.storage.seed_samples, Some(false)); // From user
        assert_eq!(merged.display.default_category, Some("game".to_string())); // Overridden by project
        assert_eq!(merged.export.directory, Some(PathBuf::from("/exports"))); // From project
    }

    #[test]
    fn test_missing_file_is_none() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let result = load_config_file(&temp_dir.path().join("absent.toml")).unwrap();
        assert!(result.is_none());
    }

    #[test]
    fn test_parse_error_names_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.toml");
        fs::write(&path, "[storage\nfile = ").unwrap();

        let err = load_config_file(&path).unwrap_err();

        assert!(matches!(err, ConfigError::ConfigParseError { .. }));
        assert!(err.to_string().contains("broken.toml"));
    }

    #[test]
    fn test_toml_parsing_edge_cases() {
        let empty_config: FolioConfig = toml::from_str("").unwrap();
        assert_eq!(empty_config, FolioConfig::default());

        let partial_config: FolioConfig = toml::from_str(
            r#"
[export]
directory = "out"
"#,
        )
        .unwrap();
        assert_eq!(partial_config.export.directory, Some(PathBuf::from("out")));
        assert!(partial_config.storage.file.is_none());
    }

    #[test]
    fn test_merge_keeps_base_when_override_empty() {
        let mut base = FolioConfig::default();
        base.storage.seed_samples = Some(false);
        base.display.default_category = Some("app".to_string());

        let merged = merge_configs(base.clone(), FolioConfig::default());

        assert_eq!(merged, base);
    }
}
