//! Command/event layer between a front end and the [`ProjectStore`].
//!
//! [`ProjectStore`]: crate::projects::ProjectStore

pub mod dispatch;
pub mod errors;
pub mod events;
pub mod store;
pub mod types;

pub use errors::DispatchError;
pub use events::Event;
pub use store::Store;
pub use types::Command;
