//! Append-only cache of imaged object records for paged browsing.
//!
//! Pages already scanned are served from memory. The cache remembers which
//! query filled it and how far into that query's identifier list the scan has
//! progressed, so the next page resumes where the previous one stopped.

use crate::collection::query_builder::SearchQuery;
use crate::model::ObjectRecord;

#[derive(Debug, Default)]
pub struct ImageCache {
    query: Option<SearchQuery>,
    entries: Vec<ObjectRecord>,
    // index of the next identifier to examine
    cursor: usize,
}

impl ImageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Binds the cache to `query`, clearing it if it was filled for another one.
    ///
    /// Returns `true` when previous contents were discarded.
    pub fn bind(&mut self, query: &SearchQuery) -> bool {
        if self.query.as_ref() == Some(query) {
            return false;
        }

        let discarded = self.query.is_some();
        if discarded {
            self.clear();
        }
        self.query = Some(query.clone());
        discarded
    }

    /// Records that the identifier at the cursor was examined, keeping `record`
    /// if it is imaged.
    pub fn advance(&mut self, record: Option<ObjectRecord>) {
        self.cursor += 1;
        if let Some(record) = record.filter(ObjectRecord::has_image) {
            self.entries.push(record);
        }
    }

    /// Entries `[(page - 1) * items_per_page, page * items_per_page)`, clipped
    /// to what is cached. Pages start at 1.
    pub fn page(&self, page: usize, items_per_page: usize) -> Vec<ObjectRecord> {
        let start = page
            .saturating_sub(1)
            .saturating_mul(items_per_page)
            .min(self.entries.len());
        let end = start.saturating_add(items_per_page).min(self.entries.len());
        self.entries[start..end].to_vec()
    }

    pub fn clear(&mut self) {
        self.query = None;
        self.entries.clear();
        self.cursor = 0;
    }
}
