use crate::errors::FolioError;

/// Input rejected before it touches the collection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required field '{field}' is empty")]
    MissingRequiredField { field: &'static str },

    #[error("At least one tag is required")]
    NoTags,

    #[error("Unknown category '{value}'. Supported categories: web, app, game")]
    UnknownCategory { value: String },
}

/// Import payload could not be merged. Nothing is changed when this is returned.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ImportError {
    #[error("Import payload is not a list of projects: {message}")]
    InvalidFormat { message: String },

    #[error("Failed to parse import payload: {message}")]
    ParseFailure { message: String },
}

/// Durable write failed after the in-memory collection was already changed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Failed to save projects: {message}")]
pub struct PersistenceError {
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProjectError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Project '{id}' not found")]
    NotFound { id: String },

    #[error(transparent)]
    Import(#[from] ImportError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("Failed to export projects: {message}")]
    ExportFailed { message: String },
}

impl FolioError for ProjectError {
    fn error_code(&self) -> &'static str {
        match self {
            ProjectError::Validation(ValidationError::MissingRequiredField { .. }) => {
                "PROJECT_MISSING_REQUIRED_FIELD"
            }
            ProjectError::Validation(ValidationError::NoTags) => "PROJECT_NO_TAGS",
            ProjectError::Validation(ValidationError::UnknownCategory { .. }) => {
                "PROJECT_UNKNOWN_CATEGORY"
            }
            ProjectError::NotFound { .. } => "PROJECT_NOT_FOUND",
            ProjectError::Import(ImportError::InvalidFormat { .. }) => {
                "PROJECT_IMPORT_INVALID_FORMAT"
            }
            ProjectError::Import(ImportError::ParseFailure { .. }) => {
                "PROJECT_IMPORT_PARSE_FAILURE"
            }
            ProjectError::Persistence(_) => "PROJECT_SAVE_FAILED",
            ProjectError::ExportFailed { .. } => "PROJECT_EXPORT_FAILED",
        }
    }

    fn is_user_error(&self) -> bool {
        // Exhaustive match ensures new variants force an explicit classification.
        match self {
            ProjectError::Validation(_) | ProjectError::NotFound { .. } | ProjectError::Import(_) => {
                true
            }
            ProjectError::Persistence(_) | ProjectError::ExportFailed { .. } => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_required_field_display() {
        let error = ProjectError::from(ValidationError::MissingRequiredField { field: "title" });
        assert_eq!(error.to_string(), "Required field 'title' is empty");
        assert_eq!(error.error_code(), "PROJECT_MISSING_REQUIRED_FIELD");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_no_tags() {
        let error = ProjectError::from(ValidationError::NoTags);
        assert_eq!(error.to_string(), "At least one tag is required");
        assert_eq!(error.error_code(), "PROJECT_NO_TAGS");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_not_found() {
        let error = ProjectError::NotFound {
            id: "abc".to_string(),
        };
        assert_eq!(error.to_string(), "Project 'abc' not found");
        assert_eq!(error.error_code(), "PROJECT_NOT_FOUND");
        assert!(error.is_user_error());
    }

    #[test]
    fn test_import_errors_are_distinct() {
        let format = ProjectError::from(ImportError::InvalidFormat {
            message: "expected array".to_string(),
        });
        let parse = ProjectError::from(ImportError::ParseFailure {
            message: "EOF".to_string(),
        });
        assert_eq!(format.error_code(), "PROJECT_IMPORT_INVALID_FORMAT");
        assert_eq!(parse.error_code(), "PROJECT_IMPORT_PARSE_FAILURE");
        assert_ne!(format, parse);
        assert!(format.is_user_error());
        assert!(parse.is_user_error());
    }

    #[test]
    fn test_persistence_is_system_error() {
        let error = ProjectError::from(PersistenceError {
            message: "disk full".to_string(),
        });
        assert_eq!(error.to_string(), "Failed to save projects: disk full");
        assert_eq!(error.error_code(), "PROJECT_SAVE_FAILED");
        assert!(!error.is_user_error());
    }
}
