use std::collections::HashSet;

use crate::domain::Record;

/// Errors that can occur when seeding a collection
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum StoreError {
    #[error("Duplicate identifier in seed data: {0}")]
    DuplicateId(String),
}

/// Ordered, session-scoped collection backing one admin view.
///
/// The store owns its records for the lifetime of the view session; it is
/// dropped on navigation away and re-seeded on return. The only mutation is
/// removal.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionStore<R: Record> {
    records: Vec<R>,
}

impl<R: Record> CollectionStore<R> {
    /// Build a store from seed records, rejecting duplicate identifiers.
    pub fn from_records(records: Vec<R>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(records.len());
        for record in &records {
            if !seen.insert(record.id()) {
                return Err(StoreError::DuplicateId(record.id().to_string()));
            }
        }

        Ok(CollectionStore { records })
    }

    /// Full ordered sequence of records.
    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn get(&self, id: &R::Id) -> Option<&R> {
        self.records.iter().find(|record| record.id() == id)
    }

    pub fn contains(&self, id: &R::Id) -> bool {
        self.get(id).is_some()
    }

    /// Remove a record by identifier, preserving the order of the rest.
    ///
    /// Returns the removed record, or `None` (leaving the store untouched)
    /// when the identifier is absent. Removal is irreversible within the
    /// session.
    pub fn remove(&mut self, id: &R::Id) -> Option<R> {
        match self.records.iter().position(|record| record.id() == id) {
            Some(index) => {
                let removed = self.records.remove(index);
                tracing::debug!("Removed record {}", removed.id());
                Some(removed)
            }
            None => {
                tracing::debug!("Remove skipped, no record with id {}", id);
                None
            }
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
