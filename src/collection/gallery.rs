//! Multi-request browsing on top of an [`ObjectSource`].
//!
//! Every operation here walks an identifier list one request at a time, in
//! list order, keeping only objects that carry an image. A failure on an
//! individual identifier is logged and skipped; only a failed identifier-list
//! request ends an operation early.

use crate::collection::image_cache::ImageCache;
use crate::collection::{ObjectSource, SearchQuery};
use crate::error::CollectionError;
use crate::model::ObjectRecord;
use rand::Rng;
use std::sync::Arc;
use tokio::sync::Mutex;

pub const DEFAULT_ITEMS_PER_PAGE: usize = 9;
pub const DEFAULT_NUMBER_OF_PAGES: usize = 4;
pub const DEFAULT_RANDOM_COUNT: usize = 9;

pub struct Gallery<S> {
    source: Arc<S>,
    cache: Mutex<ImageCache>,
    random_max_attempts: usize,
}

impl<S: ObjectSource> Gallery<S> {
    pub fn new(source: Arc<S>, random_max_attempts: usize) -> Self {
        Self {
            source,
            cache: Mutex::new(ImageCache::new()),
            random_max_attempts,
        }
    }

    /// One page of imaged artworks for `query`, served from the image cache
    /// and topped up by scanning further into the identifier list.
    ///
    /// The cache is held for the whole call, so concurrent page requests on
    /// one gallery run one after another. Switching to a different query
    /// discards what was cached for the previous one.
    ///
    /// Never fails: a failed identifier-list request yields an empty page, and
    /// the page is short when the list runs out of imaged objects.
    pub async fn list_imaged_artworks_page(
        &self,
        query: &SearchQuery,
        page: usize,
        items_per_page: usize,
    ) -> Vec<ObjectRecord> {
        if page == 0 || items_per_page == 0 {
            tracing::warn!(
                "Ignoring page request with page={} items_per_page={}",
                page,
                items_per_page
            );
            return Vec::new();
        }

        let mut cache = self.cache.lock().await;
        if cache.bind(query) {
            tracing::warn!("Search changed to {}, image cache cleared", query);
        }

        let required = page.saturating_mul(items_per_page);
        if cache.len() >= required {
            tracing::debug!("Page {} served from image cache", page);
            return cache.page(page, items_per_page);
        }

        let ids = match self.source.object_ids(query).await {
            Ok(ids) => ids,
            Err(err) => {
                tracing::error!("Error fetching artwork list for {}: {}", query, err);
                return Vec::new();
            }
        };

        while cache.len() < required && cache.cursor() < ids.len() {
            let id = ids[cache.cursor()];
            let record = match self.source.object(id).await {
                Ok(record) => record,
                Err(err) => {
                    tracing::warn!("Error fetching artwork with ID {}: {}", id, err);
                    None
                }
            };
            cache.advance(record);
        }

        tracing::info!(
            "Image cache holds {} artworks after scanning {} of {} identifiers",
            cache.len(),
            cache.cursor(),
            ids.len()
        );
        cache.page(page, items_per_page)
    }

    /// Identifiers of `count` randomly drawn highlighted works that carry an
    /// image. Draws are made with replacement, so an identifier may repeat.
    ///
    /// # Errors
    /// - the highlighted-works identifier list cannot be fetched
    /// - the list is empty ([`CollectionError::NoIdentifiers`])
    /// - `random_max_attempts` draws did not produce `count` imaged objects
    ///   ([`CollectionError::SampleExhausted`])
    pub async fn list_random_imaged_artworks(
        &self,
        count: usize,
    ) -> Result<Vec<u64>, CollectionError> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let ids = self.source.object_ids(&SearchQuery::highlighted()).await?;
        if ids.is_empty() {
            return Err(CollectionError::NoIdentifiers);
        }

        let mut picked = Vec::with_capacity(count);
        let mut attempts = 0;
        while picked.len() < count {
            if attempts >= self.random_max_attempts {
                return Err(CollectionError::SampleExhausted {
                    requested: count,
                    found: picked.len(),
                    attempts,
                });
            }
            attempts += 1;

            let id = draw(&ids);
            match self.source.object(id).await {
                Ok(Some(record)) if record.has_image() => picked.push(id),
                Ok(_) => tracing::debug!("Artwork with ID {} has no image", id),
                Err(err) if err.is_not_found() => {
                    tracing::warn!("Artwork with ID {} not found (404).", id)
                }
                Err(err) => tracing::error!("Error fetching artwork with ID {}: {}", id, err),
            }
        }

        tracing::debug!("Drew {} imaged artworks in {} attempts", count, attempts);
        Ok(picked)
    }

    /// The first `items_per_page * number_of_pages` imaged records matching
    /// `query`, in identifier-list order. Independent of the image cache.
    pub async fn list_search_results(
        &self,
        query: &SearchQuery,
        items_per_page: usize,
        number_of_pages: usize,
    ) -> Result<Vec<ObjectRecord>, CollectionError> {
        let limit = items_per_page.saturating_mul(number_of_pages);
        let ids = self.source.object_ids(query).await?;

        let mut results = Vec::new();
        for id in ids {
            if results.len() >= limit {
                break;
            }
            match self.source.object(id).await {
                Ok(Some(record)) if record.has_image() => results.push(record),
                Ok(_) => {}
                Err(err) => tracing::warn!("Error fetching artwork with ID {}: {}", id, err),
            }
        }

        Ok(results)
    }

    /// Drops every cached artwork, the scan position and the remembered query.
    #[allow(dead_code)]
    pub async fn reset_cache(&self) {
        self.cache.lock().await.clear();
    }

    pub async fn cached_len(&self) -> usize {
        self.cache.lock().await.len()
    }
}

fn draw(ids: &[u64]) -> u64 {
    ids[rand::rng().random_range(0..ids.len())]
}
