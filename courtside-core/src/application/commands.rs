use serde::{Deserialize, Serialize};

/// User intents a view can raise against its collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ViewCommand<Id> {
    /// Open the edit form for a record
    Edit { id: Id },

    /// Open the form for a new record
    Add,

    /// Ask to delete a record; starts the confirmation round trip
    RequestDelete { id: Id },

    /// Affirmative answer to the pending confirmation
    ConfirmDelete,

    /// Negative answer to the pending confirmation
    CancelDelete,
}
