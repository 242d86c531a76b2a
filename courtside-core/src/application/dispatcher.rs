use crate::application::{IgnoreReason, ViewCommand, ViewEvent};
use crate::domain::{CollectionStore, Record};
use crate::traits::{ConfirmationPrompt, NavTarget};

/// Confirmation round-trip state for one view.
///
/// `Idle -> ConfirmPending -> {Removed | Idle}`; the pending state is entered
/// by `RequestDelete` and resolved by exactly one `ConfirmDelete` or
/// `CancelDelete`.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteFlow<Id> {
    Idle,
    /// A delete was requested and awaits its yes/no answer
    ConfirmPending { id: Id },
}

impl<Id> Default for DeleteFlow<Id> {
    fn default() -> Self {
        DeleteFlow::Idle
    }
}

/// Translates user intents into navigation events or store mutations.
///
/// Edit and add delegate to the hosting shell; delete is the only branching
/// control flow and the only path that mutates the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionDispatcher<R: Record> {
    flow: DeleteFlow<R::Id>,
}

impl<R: Record> ActionDispatcher<R> {
    pub fn new() -> Self {
        ActionDispatcher {
            flow: DeleteFlow::Idle,
        }
    }

    pub fn flow(&self) -> &DeleteFlow<R::Id> {
        &self.flow
    }

    pub fn is_idle(&self) -> bool {
        matches!(self.flow, DeleteFlow::Idle)
    }

    /// Process a single command against the store this view owns.
    pub fn handle_command(
        &mut self,
        store: &mut CollectionStore<R>,
        command: ViewCommand<R::Id>,
    ) -> ViewEvent<R::Id> {
        match command {
            ViewCommand::Edit { id } => ViewEvent::NavigationRequested {
                target: NavTarget::EditRecord(id.to_string()),
            },

            ViewCommand::Add => ViewEvent::NavigationRequested {
                target: NavTarget::NewRecord,
            },

            ViewCommand::RequestDelete { id } => self.handle_request_delete(store, id),

            ViewCommand::ConfirmDelete => self.handle_confirm_delete(store),

            ViewCommand::CancelDelete => self.handle_cancel_delete(),
        }
    }

    fn handle_request_delete(
        &mut self,
        store: &CollectionStore<R>,
        id: R::Id,
    ) -> ViewEvent<R::Id> {
        if let DeleteFlow::ConfirmPending { id: pending } = &self.flow {
            tracing::warn!(
                "Delete of {} requested while {} awaits confirmation",
                id,
                pending
            );
            return ViewEvent::CommandIgnored {
                reason: IgnoreReason::DeleteAlreadyPending,
            };
        }

        let message = match store.get(&id) {
            Some(record) => format!(
                "Delete \"{}\"? This cannot be undone.",
                record.display_name()
            ),
            None => {
                tracing::warn!("Delete requested for missing record {}", id);
                return ViewEvent::CommandIgnored {
                    reason: IgnoreReason::RecordAbsent,
                };
            }
        };

        self.flow = DeleteFlow::ConfirmPending { id: id.clone() };
        ViewEvent::ConfirmationRequested { id, message }
    }

    fn handle_confirm_delete(&mut self, store: &mut CollectionStore<R>) -> ViewEvent<R::Id> {
        match std::mem::take(&mut self.flow) {
            DeleteFlow::ConfirmPending { id } => match store.remove(&id) {
                Some(_) => {
                    tracing::info!("Record {} removed after confirmation", id);
                    ViewEvent::RecordRemoved { id }
                }
                None => {
                    // The id vanished between request and confirmation. The
                    // contract makes this a no-op, never an error.
                    tracing::warn!("Confirmed delete found no record {}", id);
                    ViewEvent::CommandIgnored {
                        reason: IgnoreReason::RecordAbsent,
                    }
                }
            },
            DeleteFlow::Idle => {
                tracing::warn!("ConfirmDelete arrived with no delete pending");
                ViewEvent::CommandIgnored {
                    reason: IgnoreReason::NoDeletePending,
                }
            }
        }
    }

    fn handle_cancel_delete(&mut self) -> ViewEvent<R::Id> {
        match std::mem::take(&mut self.flow) {
            DeleteFlow::ConfirmPending { id } => {
                tracing::debug!("Delete of {} cancelled", id);
                ViewEvent::DeleteCancelled { id }
            }
            DeleteFlow::Idle => ViewEvent::CommandIgnored {
                reason: IgnoreReason::NoDeletePending,
            },
        }
    }

    /// Run the whole delete round trip against a synchronous prompt.
    ///
    /// Shares the state machine with the two-phase path, so both have the
    /// same semantics.
    pub fn delete_with_prompt(
        &mut self,
        store: &mut CollectionStore<R>,
        id: R::Id,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> ViewEvent<R::Id> {
        match self.handle_command(store, ViewCommand::RequestDelete { id }) {
            ViewEvent::ConfirmationRequested { message, .. } => {
                if prompt.confirm(&message) {
                    self.handle_command(store, ViewCommand::ConfirmDelete)
                } else {
                    self.handle_command(store, ViewCommand::CancelDelete)
                }
            }
            other => other,
        }
    }
}

impl<R: Record> Default for ActionDispatcher<R> {
    fn default() -> Self {
        Self::new()
    }
}
