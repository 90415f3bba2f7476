//! Configuration type definitions for folio.
//!
//! These types are deserialized from TOML config files.
//!
//! # Example Configuration
//!
//! ```toml
//! [storage]
//! file = "/home/me/portfolio/projects.json"
//! seed_samples = false
//!
//! [export]
//! directory = "/home/me/Downloads"
//!
//! [display]
//! default_category = "web"
//! ```

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration loaded from TOML config files.
///
/// Loaded from:
/// 1. User config: `~/.folio/config.toml`
/// 2. Project config: `./.folio/config.toml`
///
/// Project config values override user config values.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct FolioConfig {
    /// Where the catalog is stored and how an empty catalog starts out
    #[serde(default)]
    pub storage: StorageConfig,

    /// Export destination
    #[serde(default)]
    pub export: ExportConfig,

    /// Listing defaults
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct StorageConfig {
    /// Projects file. Default: `~/.folio/projects.json`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,

    /// Seed built-in sample projects when nothing is stored yet.
    /// Default: true.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_samples: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ExportConfig {
    /// Directory `folio export` writes to when no output path is given.
    /// Default: current directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct DisplayConfig {
    /// Category shown by `folio list` without `--category`.
    /// One of: all, web, app, game. Default: all.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_category: Option<String>,
}
