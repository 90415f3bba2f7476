use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::errors::ValidationError;

/// Placeholder some stored links carry instead of an empty string.
pub const LINK_PLACEHOLDER: &str = "#";

/// The fixed set of project categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Web,
    App,
    Game,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Web, Category::App, Category::Game];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Web => "web",
            Category::App => "app",
            Category::Game => "game",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ValidationError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| ValidationError::UnknownCategory {
                value: value.to_string(),
            })
    }
}

/// Which slice of the collection `list_visible` returns.
///
/// `Only` holds the raw requested value rather than a [`Category`]: an
/// unknown value is accepted and simply matches nothing.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Parse a filter value. `"all"` (any case) selects everything.
    pub fn parse(value: &str) -> Self {
        let value = value.trim();
        if value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Only(value.to_lowercase())
        }
    }

    pub fn matches(&self, project: &Project) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(value) => project.category().as_str() == value,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category.as_str().to_string())
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("all"),
            CategoryFilter::Only(value) => f.write_str(value),
        }
    }
}

/// One portfolio entry.
///
/// Fields are private so the store stays the only place that assigns ids and
/// timestamps. The serialized form uses camelCase keys and is the format of
/// both the durable slot and import/export files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    id: String,
    title: String,
    description: String,
    category: Category,
    tags: Vec<String>,
    #[serde(default)]
    demo_link: String,
    #[serde(default)]
    code_link: String,
    #[serde(default)]
    image_url: String,
    created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    updated_at: Option<DateTime<Utc>>,
}

impl Project {
    /// Build a record from already validated parts.
    pub(crate) fn from_parts(
        id: String,
        fields: ProjectFields,
        created_at: DateTime<Utc>,
        updated_at: Option<DateTime<Utc>>,
    ) -> Self {
        Self {
            id,
            title: fields.title,
            description: fields.description,
            category: fields.category,
            tags: fields.tags,
            demo_link: fields.demo_link,
            code_link: fields.code_link,
            image_url: fields.image_url,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Demo link, `None` when empty or the `#` placeholder.
    pub fn demo_link(&self) -> Option<&str> {
        present_link(&self.demo_link)
    }

    /// Source link, `None` when empty or the `#` placeholder.
    pub fn code_link(&self) -> Option<&str> {
        present_link(&self.code_link)
    }

    pub fn image_url(&self) -> Option<&str> {
        (!self.image_url.is_empty()).then_some(self.image_url.as_str())
    }

    /// Stored demo link text, exactly as persisted.
    pub fn raw_demo_link(&self) -> &str {
        &self.demo_link
    }

    /// Stored source link text, exactly as persisted.
    pub fn raw_code_link(&self) -> &str {
        &self.code_link
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    /// `updated_at` if the record was ever edited, otherwise `created_at`.
    pub fn last_touched(&self) -> DateTime<Utc> {
        self.updated_at.unwrap_or(self.created_at)
    }

    /// Drop tags that are empty or whitespace only.
    pub(crate) fn drop_blank_tags(&mut self) {
        self.tags.retain(|tag| !tag.trim().is_empty());
    }

    /// Case-insensitive substring match on title, description or any tag.
    ///
    /// `needle` must already be lowercased.
    pub(crate) fn matches_lowercase(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle)
            || self.description.to_lowercase().contains(needle)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(needle))
    }
}

fn present_link(link: &str) -> Option<&str> {
    if link.is_empty() || link == LINK_PLACEHOLDER {
        None
    } else {
        Some(link)
    }
}

/// Raw form input for create and update.
///
/// Every field is unvalidated text; empty means "not provided". `tags` is a
/// comma-separated list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub category: String,
    pub tags: String,
    pub demo_link: String,
    pub code_link: String,
    pub image_url: String,
}

impl ProjectInput {
    /// Pre-fill an input from an existing record, the way an edit form starts.
    pub fn from_project(project: &Project) -> Self {
        Self {
            title: project.title.clone(),
            description: project.description.clone(),
            category: project.category.as_str().to_string(),
            tags: project.tags.join(", "),
            demo_link: project.demo_link.clone(),
            code_link: project.code_link.clone(),
            image_url: project.image_url.clone(),
        }
    }
}

/// Validated, normalized record content (everything except id and timestamps).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectFields {
    pub title: String,
    pub description: String,
    pub category: Category,
    pub tags: Vec<String>,
    pub demo_link: String,
    pub code_link: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Project {
        Project::from_parts(
            "p-1".to_string(),
            ProjectFields {
                title: "Pixel Runner".to_string(),
                description: "A tiny canvas platformer".to_string(),
                category: Category::Game,
                tags: vec!["Canvas".to_string(), "Game Dev".to_string()],
                demo_link: "#".to_string(),
                code_link: "https://example.com/code".to_string(),
                image_url: String::new(),
            },
            Utc.with_ymd_and_hms(2024, 3, 1, 12, 0, 0).unwrap(),
            None,
        )
    }

    #[test]
    fn test_category_from_str_is_case_insensitive() {
        assert_eq!("web".parse::<Category>().unwrap(), Category::Web);
        assert_eq!(" APP ".parse::<Category>().unwrap(), Category::App);
        assert_eq!("Game".parse::<Category>().unwrap(), Category::Game);
        assert!(matches!(
            "music".parse::<Category>(),
            Err(ValidationError::UnknownCategory { value }) if value == "music"
        ));
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!(CategoryFilter::parse("all"), CategoryFilter::All);
        assert_eq!(CategoryFilter::parse(" ALL "), CategoryFilter::All);
        assert_eq!(
            CategoryFilter::parse("Web"),
            CategoryFilter::Only("web".to_string())
        );
        assert_eq!(CategoryFilter::from(Category::App).to_string(), "app");
    }

    #[test]
    fn test_unknown_filter_matches_nothing() {
        let project = sample();
        assert!(!CategoryFilter::parse("music").matches(&project));
        assert!(CategoryFilter::parse("game").matches(&project));
        assert!(CategoryFilter::All.matches(&project));
    }

    #[test]
    fn test_placeholder_links_are_absent() {
        let project = sample();
        assert_eq!(project.demo_link(), None);
        assert_eq!(project.raw_demo_link(), "#");
        assert_eq!(project.code_link(), Some("https://example.com/code"));
        assert_eq!(project.image_url(), None);
    }

    #[test]
    fn test_serialized_form_uses_camel_case() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["category"], "game");
        assert_eq!(json["demoLink"], "#");
        assert!(json.get("createdAt").is_some());
        assert!(
            json.get("updatedAt").is_none(),
            "updatedAt must be omitted until the first edit"
        );
    }

    #[test]
    fn test_deserialize_browser_export() {
        // Shape written by the original browser app: millisecond ISO timestamps,
        // base36 ids, links as "#".
        let json = r##"{
            "id": "lq2x9k3a0.8f7s6d",
            "title": "Sample",
            "description": "Responsive site",
            "category": "web",
            "tags": ["HTML", "CSS"],
            "demoLink": "#",
            "codeLink": "#",
            "imageUrl": "",
            "createdAt": "2024-05-01T09:30:00.000Z"
        }"##;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.id(), "lq2x9k3a0.8f7s6d");
        assert_eq!(project.category(), Category::Web);
        assert_eq!(project.updated_at(), None);
        assert_eq!(project.last_touched(), project.created_at());
    }

    #[test]
    fn test_matches_lowercase() {
        let project = sample();
        assert!(project.matches_lowercase("pixel"));
        assert!(project.matches_lowercase("platformer"));
        assert!(project.matches_lowercase("game dev"));
        assert!(!project.matches_lowercase("react"));
    }

    #[test]
    fn test_drop_blank_tags() {
        let mut project = sample();
        project.tags = vec![String::new(), "Canvas".to_string(), "  ".to_string()];

        project.drop_blank_tags();

        assert_eq!(project.tags(), ["Canvas"]);
    }

    #[test]
    fn test_input_from_project_joins_tags() {
        let input = ProjectInput::from_project(&sample());
        assert_eq!(input.tags, "Canvas, Game Dev");
        assert_eq!(input.category, "game");
        assert_eq!(input.demo_link, "#");
    }
}
