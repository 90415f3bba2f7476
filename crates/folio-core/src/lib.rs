//! folio-core: Core library for portfolio project catalog management
//!
//! This library owns the project collection, its validation and persistence,
//! and the derived views (category filter, search, stats). Front ends call
//! into it and render what comes back.
//!
//! # Main Entry Points
//!
//! - [`projects`] - `ProjectStore`, the record model and storage slots
//! - [`state`] - Command/event dispatch over the store
//! - [`config`] - Configuration management

pub mod config;
pub mod errors;
pub mod events;
pub mod logging;
pub mod projects;
pub mod state;

// Re-export commonly used types at crate root for convenience
pub use config::FolioConfig;
pub use errors::{FolioError, SYSTEM_ERROR_EXIT_CODE, USER_ERROR_EXIT_CODE};
pub use projects::{
    Category, CategoryFilter, Committed, FileSlot, LastUpdated, MemorySlot, Project,
    ProjectError, ProjectInput, ProjectStats, ProjectStore, StorageSlot,
};
pub use state::{Command, DispatchError, Event, Store};

// Re-export logging initialization
pub use logging::init_logging;
