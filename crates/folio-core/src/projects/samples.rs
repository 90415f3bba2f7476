use chrono::{DateTime, Utc};

use super::types::{Category, Project, ProjectFields};

struct Sample {
    id: &'static str,
    title: &'static str,
    description: &'static str,
    category: Category,
    tags: &'static [&'static str],
}

const SAMPLES: [Sample; 3] = [
    Sample {
        id: "sample-web-project",
        title: "Sample Web Project",
        description: "A responsive website built as a showcase example",
        category: Category::Web,
        tags: &["HTML", "CSS", "JavaScript"],
    },
    Sample {
        id: "sample-mobile-app",
        title: "Mobile App Project",
        description: "A cross-platform app developed with React Native",
        category: Category::App,
        tags: &["React Native", "Firebase"],
    },
    Sample {
        id: "sample-browser-game",
        title: "Browser Game",
        description: "A 2D game built on the JavaScript Canvas API",
        category: Category::Game,
        tags: &["Canvas", "Game Dev"],
    },
];

/// Built-in records used when no catalog has been stored yet.
///
/// Content and ids are fixed, so a sample keeps its id from one session to
/// the next. Every record is stamped with `now`. Links carry the `#`
/// placeholder.
pub fn sample_projects(now: DateTime<Utc>) -> Vec<Project> {
    SAMPLES
        .iter()
        .map(|sample| {
            Project::from_parts(
                sample.id.to_string(),
                ProjectFields {
                    title: sample.title.to_string(),
                    description: sample.description.to_string(),
                    category: sample.category,
                    tags: sample.tags.iter().map(|t| t.to_string()).collect(),
                    demo_link: "#".to_string(),
                    code_link: "#".to_string(),
                    image_url: String::new(),
                },
                now,
                None,
            )
        })
        .collect()
}
