use serde::{Deserialize, Serialize};

use crate::traits::NavTarget;

/// Why a command was dropped without effect
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IgnoreReason {
    /// Confirm or cancel arrived with no delete pending
    NoDeletePending,
    /// A delete round trip is already awaiting its answer
    DeleteAlreadyPending,
    /// The named record is not in the collection
    RecordAbsent,
}

/// Events emitted by the dispatcher after processing a command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewEvent<Id> {
    /// Control should transfer to the hosting shell
    NavigationRequested { target: NavTarget },

    /// A delete needs a yes/no answer before anything is removed
    ConfirmationRequested { id: Id, message: String },

    /// The record was removed from the collection
    RecordRemoved { id: Id },

    /// The pending delete was declined; nothing changed
    DeleteCancelled { id: Id },

    /// The command had no effect
    CommandIgnored { reason: IgnoreReason },
}
