use serde::{Deserialize, Serialize};
use std::fmt;

/// Destination the hosting shell should transfer control to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum NavTarget {
    /// Edit form for the record with this identifier.
    EditRecord(String),
    /// Form for creating a new record.
    NewRecord,
}

impl fmt::Display for NavTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavTarget::EditRecord(id) => write!(f, "edit record {}", id),
            NavTarget::NewRecord => write!(f, "new record"),
        }
    }
}

/// Hands control to the hosting shell. The core never observes a result.
pub trait Navigator {
    fn navigate(&mut self, target: &NavTarget);
}
