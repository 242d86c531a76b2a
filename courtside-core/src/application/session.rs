use uuid::Uuid;

use crate::application::{
    ActionDispatcher, PageView, Projection, ViewCommand, ViewEvent, ViewQuery,
};
use crate::domain::{CollectionStore, Record, StoreError};
use crate::traits::{ConfirmationPrompt, DataSource, DataSourceError};

/// Why a view session could not open
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum SessionError {
    #[error(transparent)]
    Source(#[from] DataSourceError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// One screen's owned state: the collection, the query, and the delete flow.
///
/// The session is dropped when the user navigates away; returning to the
/// screen opens a fresh session and re-seeds from the data source.
#[derive(Debug)]
pub struct ViewSession<R: Record> {
    id: Uuid,
    store: CollectionStore<R>,
    projection: Projection,
    query: ViewQuery,
    dispatcher: ActionDispatcher<R>,
}

impl<R: Record> ViewSession<R> {
    /// Seed a fresh session from the data source.
    ///
    /// A source failure is reported as such, distinct from an empty
    /// collection, so the caller can render an error state.
    pub fn open<S>(source: &S) -> Result<Self, SessionError>
    where
        S: DataSource<R> + ?Sized,
    {
        let records = source.fetch()?;
        let store = CollectionStore::from_records(records)?;
        let id = Uuid::new_v4();

        tracing::info!(session = %id, records = store.len(), "View session opened");

        Ok(ViewSession {
            id,
            store,
            projection: Projection::default(),
            query: ViewQuery::default(),
            dispatcher: ActionDispatcher::new(),
        })
    }

    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.projection = Projection::new(page_size);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn store(&self) -> &CollectionStore<R> {
        &self.store
    }

    pub fn query(&self) -> &ViewQuery {
        &self.query
    }

    /// Update the search box contents; resets to the first page.
    pub fn set_search(&mut self, search: impl Into<String>) {
        let search = search.into();
        self.query.search = if search.trim().is_empty() {
            None
        } else {
            Some(search)
        };
        self.query.page = 1;
    }

    pub fn clear_search(&mut self) {
        self.query.search = None;
        self.query.page = 1;
    }

    /// Request a page; out-of-range values are clamped during projection.
    pub fn set_page(&mut self, page: usize) {
        self.query.page = page;
    }

    /// The currently visible slice.
    pub fn visible(&self) -> PageView<'_, R> {
        self.projection.project(&self.store, &self.query)
    }

    /// Visible slice with the view's filter button applied.
    pub fn visible_filtered<F>(&self, predicate: F) -> PageView<'_, R>
    where
        F: Fn(&R) -> bool,
    {
        self.projection
            .project_filtered(&self.store, &self.query, predicate)
    }

    /// Route a user intent through the dispatcher.
    pub fn handle(&mut self, command: ViewCommand<R::Id>) -> ViewEvent<R::Id> {
        self.dispatcher.handle_command(&mut self.store, command)
    }

    /// Delete with a synchronous yes/no collaborator.
    pub fn delete_with_prompt(
        &mut self,
        id: R::Id,
        prompt: &mut dyn ConfirmationPrompt,
    ) -> ViewEvent<R::Id> {
        self.dispatcher
            .delete_with_prompt(&mut self.store, id, prompt)
    }
}
