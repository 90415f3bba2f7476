//! Project input validation
//!
//! Turns raw form input into normalized record fields, and checks the
//! structure of records that arrive from outside (slot contents, imports).

use super::errors::ValidationError;
use super::types::{Category, LINK_PLACEHOLDER, Project, ProjectFields, ProjectInput};

/// Validate and normalize raw input.
///
/// Checks run in a fixed order: required text fields, then tags, then the
/// category value.
pub fn validate_input(input: &ProjectInput) -> Result<ProjectFields, ValidationError> {
    let title = required(&input.title, "title")?;
    let description = required(&input.description, "description")?;
    let category = required(&input.category, "category")?;

    let tags = parse_tags(&input.tags);
    if tags.is_empty() {
        return Err(ValidationError::NoTags);
    }

    let category: Category = category.parse()?;

    Ok(ProjectFields {
        title,
        description,
        category,
        tags,
        demo_link: normalize_link(&input.demo_link),
        code_link: normalize_link(&input.code_link),
        image_url: input.image_url.trim().to_string(),
    })
}

/// Split comma-separated tags, trimming each and dropping empties.
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_string)
        .collect()
}

/// Trim a link; blank and the `#` placeholder both become `""`.
pub fn normalize_link(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed == LINK_PLACEHOLDER {
        String::new()
    } else {
        trimmed.to_string()
    }
}

fn required(value: &str, field: &'static str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::MissingRequiredField { field });
    }
    Ok(trimmed.to_string())
}

/// Check the invariants a stored record must satisfy.
///
/// Returns a description of the first violation found.
pub(crate) fn validate_record_structure(project: &Project) -> Result<(), String> {
    if project.id().trim().is_empty() {
        return Err("id is empty".to_string());
    }
    if project.title().trim().is_empty() {
        return Err(format!("project '{}' has an empty title", project.id()));
    }
    if project.description().trim().is_empty() {
        return Err(format!("project '{}' has an empty description", project.id()));
    }
    if project.tags().is_empty() {
        return Err(format!("project '{}' has no tags", project.id()));
    }
    if project.tags().iter().any(|tag| tag.trim().is_empty()) {
        return Err(format!("project '{}' has a blank tag", project.id()));
    }
    Ok(())
}
