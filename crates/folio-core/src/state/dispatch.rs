use tracing::{debug, error, info};

use crate::projects::{Committed, PersistenceError, ProjectStore, StorageSlot};
use crate::state::errors::DispatchError;
use crate::state::events::Event;
use crate::state::store::Store;
use crate::state::types::Command;

/// Build the event list for a committed change: the change itself, then a
/// `SaveFailed` warning if the write did not go through.
fn with_save_status(event: Event, save_error: Option<PersistenceError>) -> Vec<Event> {
    let mut events = vec![event];
    if let Some(e) = save_error {
        events.push(Event::SaveFailed { message: e.message });
    }
    events
}

impl<S: StorageSlot> Store for ProjectStore<S> {
    type Error = DispatchError;

    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, DispatchError> {
        debug!(event = "core.state.dispatch_started", command = ?cmd);

        let result = match cmd {
            Command::CreateProject { input } => {
                let Committed { value, save_error } = self.create(&input)?;
                Ok(with_save_status(
                    Event::ProjectCreated {
                        id: value.id().to_string(),
                        title: value.title().to_string(),
                    },
                    save_error,
                ))
            }
            Command::UpdateProject { id, input } => {
                let Committed { value, save_error } = self.update(&id, &input)?;
                Ok(with_save_status(
                    Event::ProjectUpdated {
                        id,
                        title: value.title().to_string(),
                    },
                    save_error,
                ))
            }
            Command::DeleteProject { id } => {
                let Committed { value, save_error } = self.delete(&id);
                let event = match value {
                    Some(removed) => Event::ProjectDeleted {
                        id,
                        title: removed.title().to_string(),
                    },
                    None => Event::DeleteSkipped { id },
                };
                Ok(with_save_status(event, save_error))
            }
            Command::SetFilter { filter } => {
                self.set_filter(filter.clone());
                Ok(vec![Event::FilterChanged { filter }])
            }
            Command::ImportProjects { payload } => {
                let Committed { value, save_error } = self.import_merge(&payload)?;
                Ok(with_save_status(
                    Event::ProjectsImported { added: value },
                    save_error,
                ))
            }
        };

        match &result {
            Ok(events) => info!(
                event = "core.state.dispatch_completed",
                event_count = events.len()
            ),
            Err(e) => error!(event = "core.state.dispatch_failed", error = %e),
        }

        result
    }
}
