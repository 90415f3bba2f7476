pub mod clock;
pub mod errors;
pub mod persistence;
pub mod relative;
pub mod samples;
pub mod store;
pub mod types;
pub mod validation;

// Re-export commonly used types at module level
pub use clock::{Clock, FixedClock, SystemClock};
pub use errors::{ImportError, PersistenceError, ProjectError, ValidationError};
pub use persistence::{FileSlot, MemorySlot, StorageSlot, projects_file_path};
pub use relative::{RelativeTime, relative_time};
pub use store::{
    Committed, LastUpdated, ProjectStats, ProjectStore, compute_stats, decode_projects,
    export_file_name,
};
pub use types::{Category, CategoryFilter, Project, ProjectInput};
