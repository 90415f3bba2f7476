use serde::{Deserialize, Serialize};

use crate::projects::{CategoryFilter, ProjectInput};

/// All catalog mutations that can be dispatched through the store.
///
/// Commands use owned types so they can be serialized, queued, and sent
/// across boundaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Command {
    /// Validate input and prepend a new project.
    CreateProject { input: ProjectInput },
    /// Replace an existing project's content in place.
    UpdateProject { id: String, input: ProjectInput },
    /// Remove a project. Missing ids are not an error.
    DeleteProject { id: String },
    /// Change the category filter used by `list_visible`.
    SetFilter { filter: CategoryFilter },
    /// Merge a serialized collection (import file contents).
    ImportProjects { payload: String },
}
