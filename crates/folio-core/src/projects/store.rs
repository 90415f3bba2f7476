use std::collections::HashSet;
use std::fmt;

use chrono::{DateTime, NaiveDate, Utc};

use super::clock::{Clock, SystemClock};
use super::errors::{ImportError, PersistenceError, ProjectError};
use super::persistence::{FileSlot, StorageSlot};
use super::relative::{RelativeTime, relative_time};
use super::samples::sample_projects;
use super::types::{CategoryFilter, Project, ProjectInput};
use super::validation::{validate_input, validate_record_structure};

/// Result of an operation that changed the collection.
///
/// The in-memory change has always been applied. `save_error` is set when the
/// follow-up write to the durable slot failed, in which case the change may
/// not survive a reload.
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub struct Committed<T> {
    pub value: T,
    pub save_error: Option<PersistenceError>,
}

impl<T> Committed<T> {
    fn new(value: T, save_error: Option<PersistenceError>) -> Self {
        Self { value, save_error }
    }

    pub fn is_persisted(&self) -> bool {
        self.save_error.is_none()
    }

    /// Treat a failed save as an error.
    pub fn into_result(self) -> Result<T, ProjectError> {
        match self.save_error {
            Some(e) => Err(ProjectError::Persistence(e)),
            None => Ok(self.value),
        }
    }
}

/// "Last updated" part of [`ProjectStats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LastUpdated {
    /// The collection is empty.
    None,
    At {
        at: DateTime<Utc>,
        relative: RelativeTime,
    },
}

impl fmt::Display for LastUpdated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LastUpdated::None => f.write_str("none"),
            LastUpdated::At { relative, .. } => relative.fmt(f),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectStats {
    pub total: usize,
    pub last_updated: LastUpdated,
}

/// Summarize `projects` as seen at `now`.
pub fn compute_stats(projects: &[Project], now: DateTime<Utc>) -> ProjectStats {
    let last_updated = match projects.iter().map(Project::last_touched).max() {
        Some(at) => LastUpdated::At {
            at,
            relative: relative_time(at, now),
        },
        None => LastUpdated::None,
    };

    ProjectStats {
        total: projects.len(),
        last_updated,
    }
}

/// File name used for an export made on `date`.
pub fn export_file_name(date: NaiveDate) -> String {
    format!("vibe-portfolio-{}.json", date.format("%Y-%m-%d"))
}

/// Parse an import payload.
///
/// The whole payload is rejected if any element is not a well-formed record.
/// Blank tags are dropped before the record is checked.
pub fn decode_projects(payload: &str) -> Result<Vec<Project>, ImportError> {
    parse_array(payload)?
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            decode_entry(index, item).map_err(|message| ImportError::InvalidFormat { message })
        })
        .collect()
}

/// Slot contents after a lenient decode.
#[derive(Debug)]
struct StoredProjects {
    projects: Vec<Project>,
    /// One message per element that was left out.
    skipped: Vec<String>,
}

/// Parse the durable slot. Unlike [`decode_projects`], a bad element only
/// costs that element; the rest of the collection is kept.
fn decode_stored_projects(payload: &str) -> Result<StoredProjects, ImportError> {
    let mut projects = Vec::new();
    let mut skipped = Vec::new();
    for (index, item) in parse_array(payload)?.into_iter().enumerate() {
        match decode_entry(index, item) {
            Ok(project) => projects.push(project),
            Err(message) => skipped.push(message),
        }
    }
    Ok(StoredProjects { projects, skipped })
}

fn parse_array(payload: &str) -> Result<Vec<serde_json::Value>, ImportError> {
    let value: serde_json::Value =
        serde_json::from_str(payload).map_err(|e| ImportError::ParseFailure {
            message: e.to_string(),
        })?;

    match value {
        serde_json::Value::Array(items) => Ok(items),
        other => Err(ImportError::InvalidFormat {
            message: format!("expected an array of projects, found {}", json_kind(&other)),
        }),
    }
}

fn decode_entry(index: usize, item: serde_json::Value) -> Result<Project, String> {
    let mut project: Project =
        serde_json::from_value(item).map_err(|e| format!("entry {}: {}", index, e))?;
    project.drop_blank_tags();
    validate_record_structure(&project).map_err(|message| format!("entry {}: {}", index, message))?;
    Ok(project)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

/// Keep only records whose id is not in `seen`, first occurrence wins.
fn retain_new_ids(projects: Vec<Project>, seen: &mut HashSet<String>) -> Vec<Project> {
    projects
        .into_iter()
        .filter(|p| seen.insert(p.id().to_string()))
        .collect()
}

/// Single source of truth for the project collection.
///
/// Owns the ordered records, the current category filter, the durable slot
/// and the clock. Every mutation writes the whole collection back to the
/// slot; a failed write is reported through [`Committed::save_error`] and
/// never undoes the in-memory change.
pub struct ProjectStore<S: StorageSlot = FileSlot> {
    projects: Vec<Project>,
    filter: CategoryFilter,
    slot: S,
    clock: Box<dyn Clock>,
    load_error: Option<String>,
    seed_save_error: Option<PersistenceError>,
    seeded: bool,
}

impl<S: StorageSlot> ProjectStore<S> {
    /// Load the collection from `slot`, seeding built-in samples when nothing
    /// usable is stored.
    pub fn initialize(slot: S) -> Self {
        Self::initialize_with(slot, Box::new(SystemClock), true)
    }

    /// Load with an explicit clock and seeding policy.
    ///
    /// A slot that cannot be read or parsed is treated as empty; the reason
    /// is logged and kept in [`ProjectStore::load_error`]. Elements that do
    /// not form a valid record are left out and reported the same way.
    ///
    /// Samples seeded into an empty slot are written straight away so their
    /// ids and timestamps hold across sessions. Samples standing in for an
    /// unreadable slot are not written until the first mutation.
    pub fn initialize_with(slot: S, clock: Box<dyn Clock>, seed_samples: bool) -> Self {
        let mut slot_was_empty = false;
        let (stored, load_error) = match slot.read() {
            Ok(Some(content)) => match decode_stored_projects(&content) {
                Ok(StoredProjects { projects, skipped }) if skipped.is_empty() => {
                    (Some(projects), None)
                }
                Ok(StoredProjects { projects, skipped }) => {
                    tracing::warn!(
                        event = "core.projects.load_records_skipped",
                        slot = %slot.describe(),
                        skipped = skipped.len(),
                        kept = projects.len(),
                        first = %skipped[0]
                    );
                    let message = format!(
                        "{} stored project(s) could not be read and were left out ({}). They will be dropped from storage on the next change.",
                        skipped.len(),
                        skipped.join("; ")
                    );
                    (Some(projects), Some(message))
                }
                Err(e) => {
                    // ERROR (not warn): the slot exists but is corrupted. The
                    // next mutation overwrites it.
                    tracing::error!(
                        event = "core.projects.load_parse_failed",
                        slot = %slot.describe(),
                        error = %e,
                        "Stored projects could not be parsed - starting from defaults"
                    );
                    (
                        None,
                        Some(format!(
                            "Stored projects are corrupted ({}). They will be replaced on the next change.",
                            e
                        )),
                    )
                }
            },
            Ok(None) => {
                slot_was_empty = true;
                (None, None)
            }
            Err(e) => {
                tracing::error!(
                    event = "core.projects.load_failed",
                    slot = %slot.describe(),
                    error = %e
                );
                (
                    None,
                    Some(format!("Failed to read stored projects: {}", e)),
                )
            }
        };

        let mut store = Self {
            projects: Vec::new(),
            filter: CategoryFilter::All,
            slot,
            clock,
            load_error,
            seed_save_error: None,
            seeded: false,
        };

        match stored {
            Some(projects) => {
                let mut seen = HashSet::new();
                let loaded = projects.len();
                store.projects = retain_new_ids(projects, &mut seen);
                if store.projects.len() != loaded {
                    tracing::warn!(
                        event = "core.projects.load_duplicate_ids",
                        dropped = loaded - store.projects.len(),
                        "Stored projects contained duplicate ids, keeping first occurrence"
                    );
                }
            }
            None if seed_samples => {
                store.projects = sample_projects(store.clock.now());
                store.seeded = true;
                // An unreadable slot is left as it is until the first change
                if slot_was_empty {
                    store.seed_save_error = store.persist();
                }
            }
            None => {}
        }

        tracing::info!(
            event = "core.projects.loaded",
            slot = %store.slot.describe(),
            count = store.projects.len(),
            seeded = store.seeded
        );

        store
    }

    /// Validate `input` and prepend a new record.
    pub fn create(&mut self, input: &ProjectInput) -> Result<Committed<Project>, ProjectError> {
        let fields = validate_input(input)?;

        let ids: HashSet<String> = self.projects.iter().map(|p| p.id().to_string()).collect();
        let project = Project::from_parts(fresh_id(&ids), fields, self.clock.now(), None);

        self.projects.insert(0, project.clone());

        tracing::info!(
            event = "core.projects.created",
            id = project.id(),
            category = %project.category()
        );

        let save_error = self.persist();
        Ok(Committed::new(project, save_error))
    }

    /// Replace the content of record `id` in place.
    ///
    /// Keeps the id, `created_at` and the record's position; stamps
    /// `updated_at`.
    pub fn update(
        &mut self,
        id: &str,
        input: &ProjectInput,
    ) -> Result<Committed<Project>, ProjectError> {
        let fields = validate_input(input)?;

        let index = self.position(id).ok_or_else(|| ProjectError::NotFound {
            id: id.to_string(),
        })?;

        let created_at = self.projects[index].created_at();
        let project =
            Project::from_parts(id.to_string(), fields, created_at, Some(self.clock.now()));
        self.projects[index] = project.clone();

        tracing::info!(event = "core.projects.updated", id = id, index = index);

        let save_error = self.persist();
        Ok(Committed::new(project, save_error))
    }

    /// Remove record `id`. A missing id is a no-op that returns `None` and
    /// does not touch the slot.
    pub fn delete(&mut self, id: &str) -> Committed<Option<Project>> {
        let Some(index) = self.position(id) else {
            tracing::debug!(event = "core.projects.delete_skipped", id = id);
            return Committed::new(None, None);
        };

        let removed = self.projects.remove(index);
        tracing::info!(event = "core.projects.deleted", id = id);

        let save_error = self.persist();
        Committed::new(Some(removed), save_error)
    }

    pub fn set_filter(&mut self, filter: CategoryFilter) {
        tracing::debug!(event = "core.projects.filter_changed", filter = %filter);
        self.filter = filter;
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    /// Records passing the current category filter, in collection order.
    pub fn list_visible(&self) -> Vec<&Project> {
        self.projects
            .iter()
            .filter(|p| self.filter.matches(p))
            .collect()
    }

    /// Case-insensitive search over title, description and tags.
    ///
    /// A blank query means no search is active and returns
    /// [`ProjectStore::list_visible`]. A non-blank query is matched as given,
    /// surrounding whitespace included, against the whole collection
    /// regardless of the category filter.
    pub fn search(&self, query: &str) -> Vec<&Project> {
        if query.trim().is_empty() {
            return self.list_visible();
        }
        let needle = query.to_lowercase();

        self.projects
            .iter()
            .filter(|p| p.matches_lowercase(&needle))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// The whole collection in storage order.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    /// Why the stored collection could not be loaded, if it could not.
    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    /// Set when the samples seeded into an empty slot could not be written.
    pub fn seed_save_error(&self) -> Option<&PersistenceError> {
        self.seed_save_error.as_ref()
    }

    /// Whether the collection was seeded with built-in samples at startup.
    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn slot(&self) -> &S {
        &self.slot
    }

    /// Pretty-printed JSON of the whole collection, valid import input.
    pub fn export_all(&self) -> Result<String, ProjectError> {
        serde_json::to_string_pretty(&self.projects).map_err(|e| ProjectError::ExportFailed {
            message: e.to_string(),
        })
    }

    /// Merge a serialized collection into this one.
    ///
    /// Records whose id already exists are skipped silently. The survivors
    /// are prepended in payload order. Returns how many were added; nothing
    /// is written when that is zero.
    pub fn import_merge(&mut self, payload: &str) -> Result<Committed<usize>, ProjectError> {
        let incoming = decode_projects(payload).map_err(|e| {
            tracing::warn!(event = "core.projects.import_rejected", error = %e);
            e
        })?;
        let offered = incoming.len();

        let mut seen: HashSet<String> =
            self.projects.iter().map(|p| p.id().to_string()).collect();
        let fresh = retain_new_ids(incoming, &mut seen);
        let added = fresh.len();

        tracing::info!(
            event = "core.projects.imported",
            offered = offered,
            added = added,
            skipped = offered - added
        );

        if added == 0 {
            return Ok(Committed::new(0, None));
        }

        let existing = std::mem::replace(&mut self.projects, fresh);
        self.projects.extend(existing);

        let save_error = self.persist();
        Ok(Committed::new(added, save_error))
    }

    /// Count and last-updated label as of the store's clock.
    pub fn stats(&self) -> ProjectStats {
        compute_stats(&self.projects, self.clock.now())
    }

    /// Current time according to the store's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.projects.iter().position(|p| p.id() == id)
    }

    fn persist(&mut self) -> Option<PersistenceError> {
        let json = match serde_json::to_string_pretty(&self.projects) {
            Ok(json) => json,
            Err(e) => {
                tracing::error!(event = "core.projects.serialize_failed", error = %e);
                return Some(PersistenceError {
                    message: format!("Failed to serialize projects: {}", e),
                });
            }
        };

        match self.slot.write(&json) {
            Ok(()) => {
                tracing::info!(
                    event = "core.projects.saved",
                    slot = %self.slot.describe(),
                    count = self.projects.len()
                );
                None
            }
            Err(e) => {
                // WARN (not error): the in-memory change stands, only its
                // durability is in doubt.
                tracing::warn!(
                    event = "core.projects.save_failed",
                    slot = %self.slot.describe(),
                    error = %e,
                    "Change kept in memory but not persisted"
                );
                Some(PersistenceError {
                    message: format!("Failed to write {}: {}", self.slot.describe(), e),
                })
            }
        }
    }
}

/// A new UUID v4 not present in `taken`.
fn fresh_id(taken: &HashSet<String>) -> String {
    loop {
        let id = uuid::Uuid::new_v4().to_string();
        if !taken.contains(&id) {
            return id;
        }
    }
}
