//! Default values for optional configuration fields.

use std::path::PathBuf;

use crate::config::types::FolioConfig;
use crate::projects::{CategoryFilter, projects_file_path};

/// Whether an empty catalog gets the built-in samples (true).
pub fn default_seed_samples() -> bool {
    true
}

/// Export directory when none is configured (current directory).
pub fn default_export_directory() -> PathBuf {
    PathBuf::from(".")
}

impl FolioConfig {
    /// Projects file to open.
    ///
    /// `FOLIO_PROJECTS_FILE` wins over `[storage] file`, which wins over
    /// `~/.folio/projects.json`.
    pub fn projects_file(&self) -> PathBuf {
        if let Ok(path) = std::env::var("FOLIO_PROJECTS_FILE")
            && !path.is_empty()
        {
            return PathBuf::from(path);
        }
        match &self.storage.file {
            Some(file) => file.clone(),
            None => projects_file_path(),
        }
    }

    pub fn seed_samples(&self) -> bool {
        self.storage.seed_samples.unwrap_or_else(default_seed_samples)
    }

    pub fn export_directory(&self) -> PathBuf {
        self.export
            .directory
            .clone()
            .unwrap_or_else(default_export_directory)
    }

    /// Filter applied by listings that do not ask for one.
    pub fn default_filter(&self) -> CategoryFilter {
        self.display
            .default_category
            .as_deref()
            .map(CategoryFilter::parse)
            .unwrap_or_default()
    }
}
