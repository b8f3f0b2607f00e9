use crate::collection::query_builder::SearchQuery;
use crate::error::CollectionError;
use crate::model::ObjectRecord;
use async_trait::async_trait;

/// Where gallery scans read identifiers and object records from.
///
/// [`Client`](crate::collection::Client) is the production implementation.
/// Implementors must be thread-safe (Send + Sync) so a gallery can be shared.
#[async_trait]
pub trait ObjectSource: Send + Sync {
    /// Identifiers matching `query`, in the order the service returned them.
    async fn object_ids(&self, query: &SearchQuery) -> Result<Vec<u64>, CollectionError>;

    /// The record for `id`, or `Ok(None)` when the response lacks an `objectID`.
    async fn object(&self, id: u64) -> Result<Option<ObjectRecord>, CollectionError>;
}
