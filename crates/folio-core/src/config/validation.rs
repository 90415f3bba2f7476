//! Configuration validation.

use crate::config::types::FolioConfig;
use crate::errors::ConfigError;
use crate::projects::{Category, CategoryFilter};

/// Check values that deserialization alone cannot rule out.
pub fn validate_config(config: &FolioConfig) -> Result<(), ConfigError> {
    if let Some(category) = &config.display.default_category
        && let CategoryFilter::Only(value) = CategoryFilter::parse(category)
        && value.parse::<Category>().is_err()
    {
        return Err(ConfigError::InvalidCategory {
            category: category.clone(),
        });
    }

    if let Some(file) = &config.storage.file
        && file.as_os_str().is_empty()
    {
        return Err(ConfigError::InvalidConfiguration {
            message: "storage.file must not be empty".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&FolioConfig::default()).is_ok());
    }

    #[test]
    fn test_known_categories_are_valid() {
        for value in ["all", "ALL", "web", "app", "game"] {
            let mut config = FolioConfig::default();
            config.display.default_category = Some(value.to_string());
            assert!(validate_config(&config).is_ok(), "{} should be valid", value);
        }
    }

    #[test]
    fn test_unknown_category_is_rejected() {
        let mut config = FolioConfig::default();
        config.display.default_category = Some("music".to_string());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidCategory { category }) if category == "music"
        ));
    }

    #[test]
    fn test_empty_storage_file_is_rejected() {
        let mut config = FolioConfig::default();
        config.storage.file = Some(PathBuf::new());
        assert!(matches!(
            validate_config(&config),
            Err(ConfigError::InvalidConfiguration { .. })
        ));
    }
}
