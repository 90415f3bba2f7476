use serde::{Deserialize, Serialize};

use crate::projects::CategoryFilter;

/// State changes that resulted from a dispatched command.
///
/// Each variant describes _what happened_. Failures that leave the
/// collection untouched use the `Result` error channel instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// A project was created and prepended.
    ProjectCreated { id: String, title: String },
    /// A project's content was replaced in place.
    ProjectUpdated { id: String, title: String },
    /// A project was removed.
    ProjectDeleted { id: String, title: String },
    /// Delete was requested for an id that does not exist.
    DeleteSkipped { id: String },
    /// The category filter changed.
    FilterChanged { filter: CategoryFilter },
    /// An import finished; `added` excludes already-known ids.
    ProjectsImported { added: usize },
    /// The change above was applied in memory but could not be persisted.
    SaveFailed { message: String },
}

impl Event {
    /// Whether this event reports a durability problem the user should see.
    pub fn is_warning(&self) -> bool {
        matches!(self, Event::SaveFailed { .. })
    }
}
