use super::events::Event;
use super::types::Command;

/// Trait for dispatching catalog commands.
///
/// Decouples command definitions from their execution so a front end can
/// drive the catalog without knowing how it is stored.
///
/// # Semantics
///
/// - **Ordering**: Commands execute in the order received, each to completion.
/// - **Idempotency**: `DeleteProject` is idempotent (a repeat yields
///   `DeleteSkipped`). `CreateProject` is not: every dispatch adds a record.
/// - **Errors**: Validation, lookup and import failures return `Err` and
///   leave the collection untouched.
/// - **Events**: On success, dispatch returns a non-empty `Vec<Event>`. The
///   first event describes the change; a trailing `Event::SaveFailed` means
///   the change was applied but not persisted.
pub trait Store {
    type Error;
    fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::projects::CategoryFilter;

    #[test]
    fn test_store_trait_is_implementable() {
        struct TestStore;
        impl Store for TestStore {
            type Error = String;
            fn dispatch(&mut self, cmd: Command) -> Result<Vec<Event>, String> {
                match cmd {
                    Command::SetFilter { filter } => Ok(vec![Event::FilterChanged { filter }]),
                    _ => Err("not implemented".to_string()),
                }
            }
        }
        let mut store = TestStore;
        let result = store.dispatch(Command::SetFilter {
            filter: CategoryFilter::All,
        });
        assert_eq!(result.unwrap().len(), 1);
        assert!(
            store
                .dispatch(Command::DeleteProject {
                    id: "x".to_string()
                })
                .is_err()
        );
    }
}
