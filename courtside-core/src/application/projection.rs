use serde::{Deserialize, Serialize};

use crate::domain::{CollectionStore, Record};

/// Page size the admin tables use unless a view overrides it.
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// What the user has typed and selected on top of the collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewQuery {
    /// Search box contents; `None` when the box is empty
    pub search: Option<String>,
    /// Requested page, 1-based; clamped during projection
    pub page: usize,
}

impl ViewQuery {
    pub fn new() -> Self {
        ViewQuery {
            search: None,
            page: 1,
        }
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn with_page(mut self, page: usize) -> Self {
        self.page = page;
        self
    }
}

impl Default for ViewQuery {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives the visible slice of a collection for a query.
///
/// Pure: identical (collection, query, predicate) inputs always produce the
/// identical page view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Projection {
    page_size: usize,
}

impl Projection {
    /// `page_size` is clamped to at least 1.
    pub fn new(page_size: usize) -> Self {
        Projection {
            page_size: page_size.max(1),
        }
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn project<'a, R: Record>(
        &self,
        store: &'a CollectionStore<R>,
        query: &ViewQuery,
    ) -> PageView<'a, R> {
        self.project_filtered(store, query, |_| true)
    }

    /// Like [`Projection::project`], with an extra per-view predicate (the
    /// filter button) applied before the search match.
    pub fn project_filtered<'a, R, F>(
        &self,
        store: &'a CollectionStore<R>,
        query: &ViewQuery,
        predicate: F,
    ) -> PageView<'a, R>
    where
        R: Record,
        F: Fn(&R) -> bool,
    {
        let needle = query.search.as_deref().unwrap_or("");
        let matched: Vec<&R> = store
            .records()
            .iter()
            .filter(|record| predicate(record) && record.matches(needle))
            .collect();

        let total_matched = matched.len();
        let page_count = total_matched.div_ceil(self.page_size).max(1);
        let page = query.page.clamp(1, page_count);
        let start = (page - 1) * self.page_size;

        let records: Vec<&R> = matched
            .into_iter()
            .skip(start)
            .take(self.page_size)
            .collect();

        PageView {
            records,
            page,
            page_count,
            total_matched,
            total: store.len(),
            page_size: self.page_size,
        }
    }
}

impl Default for Projection {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE)
    }
}

/// One renderable page of a collection.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView<'a, R: Record> {
    records: Vec<&'a R>,
    page: usize,
    page_count: usize,
    total_matched: usize,
    total: usize,
    page_size: usize,
}

impl<'a, R: Record> PageView<'a, R> {
    /// Records visible on this page, in collection order.
    pub fn records(&self) -> &[&'a R] {
        &self.records
    }

    /// Clamped 1-based page number.
    pub fn page(&self) -> usize {
        self.page
    }

    /// Number of pages for the current match set, at least 1.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Records matching the query across all pages.
    pub fn total_matched(&self) -> usize {
        self.total_matched
    }

    /// Size of the whole collection, ignoring the query.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Range label for the table footer: `"1-10 of 23"`, or `"0 of 0"` when
    /// nothing matches.
    pub fn display_range(&self) -> String {
        if self.total_matched == 0 {
            return "0 of 0".to_string();
        }
        let first = (self.page - 1) * self.page_size + 1;
        let last = first + self.records.len() - 1;
        format!("{}-{} of {}", first, last, self.total_matched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MembershipStatus, PlayerRecord};
    use chrono::NaiveDate;

    fn player(id: &str, name: &str, status: MembershipStatus) -> PlayerRecord {
        PlayerRecord::new(
            id,
            name,
            "member@example.com",
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            status,
        )
        .unwrap()
    }

    fn roster() -> CollectionStore<PlayerRecord> {
        CollectionStore::from_records(vec![
            player("SC-001", "Budi Santoso", MembershipStatus::Active),
            player("SC-002", "Siti Rahayu", MembershipStatus::Active),
            player("SC-003", "Agus Wijaya", MembershipStatus::Inactive),
            player("SC-004", "Dewi Lestari", MembershipStatus::Active),
            player("SC-005", "Rudi Hartono", MembershipStatus::Active),
        ])
        .unwrap()
    }

    #[test]
    fn unfiltered_first_page() {
        let store = roster();
        let view = Projection::default().project(&store, &ViewQuery::new());

        assert_eq!(view.records().len(), 5);
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.display_range(), "1-5 of 5");
    }

    #[test]
    fn search_is_case_insensitive_on_name() {
        let store = roster();
        let query = ViewQuery::new().with_search("budi");
        let view = Projection::default().project(&store, &query);

        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].name(), "Budi Santoso");
    }

    #[test]
    fn search_matches_identifier() {
        let store = roster();
        let query = ViewQuery::new().with_search("SC-004");
        let view = Projection::default().project(&store, &query);

        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].name(), "Dewi Lestari");
    }

    #[test]
    fn blank_search_matches_everything() {
        let store = roster();
        let query = ViewQuery::new().with_search("   ");
        let view = Projection::default().project(&store, &query);

        assert_eq!(view.total_matched(), 5);
    }

    #[test]
    fn pages_slice_in_collection_order() {
        let store = roster();
        let projection = Projection::new(2);

        let first = projection.project(&store, &ViewQuery::new());
        let ids: Vec<&str> = first.records().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["SC-001", "SC-002"]);
        assert_eq!(first.page_count(), 3);
        assert_eq!(first.display_range(), "1-2 of 5");

        let second = projection.project(&store, &ViewQuery::new().with_page(2));
        let ids: Vec<&str> = second.records().iter().map(|p| p.id()).collect();
        assert_eq!(ids, vec!["SC-003", "SC-004"]);
        assert_eq!(second.display_range(), "3-4 of 5");

        let third = projection.project(&store, &ViewQuery::new().with_page(3));
        assert_eq!(third.records().len(), 1);
        assert_eq!(third.display_range(), "5-5 of 5");
    }

    #[test]
    fn out_of_range_page_is_clamped() {
        let store = roster();
        let projection = Projection::new(2);

        let high = projection.project(&store, &ViewQuery::new().with_page(99));
        assert_eq!(high.page(), 3);

        let zero = projection.project(&store, &ViewQuery::new().with_page(0));
        assert_eq!(zero.page(), 1);
    }

    #[test]
    fn empty_collection_yields_zero_of_zero() {
        let store: CollectionStore<PlayerRecord> = CollectionStore::from_records(vec![]).unwrap();
        let view = Projection::default().project(&store, &ViewQuery::new());

        assert!(view.is_empty());
        assert_eq!(view.page(), 1);
        assert_eq!(view.page_count(), 1);
        assert_eq!(view.display_range(), "0 of 0");
    }

    #[test]
    fn no_match_yields_zero_of_zero_but_keeps_total() {
        let store = roster();
        let query = ViewQuery::new().with_search("nobody");
        let view = Projection::default().project(&store, &query);

        assert_eq!(view.display_range(), "0 of 0");
        assert_eq!(view.total(), 5);
    }

    #[test]
    fn status_predicate_layers_on_top_of_search() {
        let store = roster();
        let view = Projection::default().project_filtered(&store, &ViewQuery::new(), |p| {
            !p.is_active()
        });

        assert_eq!(view.records().len(), 1);
        assert_eq!(view.records()[0].id(), "SC-003");
    }

    #[test]
    fn projection_is_deterministic() {
        let store = roster();
        let query = ViewQuery::new().with_search("a").with_page(1);
        let projection = Projection::new(2);

        let first = projection.project(&store, &query);
        let second = projection.project(&store, &query);

        assert_eq!(first, second);
    }

    #[test]
    fn page_size_zero_is_clamped_to_one() {
        let projection = Projection::new(0);
        assert_eq!(projection.page_size(), 1);
    }
}
