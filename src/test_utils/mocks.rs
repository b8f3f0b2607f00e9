//! Mock object sources and mock server helpers for testing.
//!
//! [`MockObjectSource`] answers from memory and records every request, for
//! asserting how many fetches a scan issued. [`MockCollectionServerBuilder`]
//! serves the remote endpoints over HTTP for tests that go through `Client`.

use crate::collection::{ObjectSource, SearchQuery};
use crate::error::CollectionError;
use crate::model::ObjectRecord;
use crate::test_utils::fixtures;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// How the mock source answers for one identifier.
#[derive(Debug, Clone, Copy)]
pub enum MockObject {
    /// Existing object with an image
    Imaged,
    /// Existing object with an empty `primaryImageSmall`
    Imageless,
    /// Response without an `objectID`
    Missing,
    /// 404 from the object endpoint
    NotFound,
    /// 500 from the object endpoint
    Failing,
}

/// In-memory [`ObjectSource`]. Identifiers without an explicit behaviour are
/// imaged objects.
pub struct MockObjectSource {
    ids: Option<Vec<u64>>,
    objects: HashMap<u64, MockObject>,
    id_requests: AtomicUsize,
    fetched: Mutex<Vec<u64>>,
}

impl MockObjectSource {
    /// Creates a source returning `ids` for every query.
    pub fn new(ids: Vec<u64>) -> Self {
        Self {
            ids: Some(ids),
            objects: HashMap::new(),
            id_requests: AtomicUsize::new(0),
            fetched: Mutex::new(Vec::new()),
        }
    }

    /// Creates a source whose identifier-list request always fails.
    pub fn failing_ids() -> Self {
        Self {
            ids: None,
            ..Self::new(Vec::new())
        }
    }

    pub fn with_object(mut self, id: u64, object: MockObject) -> Self {
        self.objects.insert(id, object);
        self
    }

    /// Number of identifier-list requests served.
    pub fn id_requests(&self) -> usize {
        self.id_requests.load(Ordering::SeqCst)
    }

    /// Every object id requested so far, in request order.
    pub fn fetched(&self) -> Vec<u64> {
        self.fetched.lock().unwrap().clone()
    }
}

#[async_trait]
impl ObjectSource for MockObjectSource {
    async fn object_ids(&self, _query: &SearchQuery) -> Result<Vec<u64>, CollectionError> {
        self.id_requests.fetch_add(1, Ordering::SeqCst);
        self.ids.clone().ok_or_else(|| CollectionError::ServerError {
            status: 502,
            message: "Bad Gateway".to_string(),
        })
    }

    async fn object(&self, id: u64) -> Result<Option<ObjectRecord>, CollectionError> {
        self.fetched.lock().unwrap().push(id);

        match self.objects.get(&id).copied().unwrap_or(MockObject::Imaged) {
            MockObject::Imaged => Ok(Some(fixtures::imaged_record(id))),
            MockObject::Imageless => Ok(Some(fixtures::imageless_record(id))),
            MockObject::Missing => Ok(None),
            MockObject::NotFound => Err(CollectionError::ObjectNotFound { id }),
            MockObject::Failing => Err(CollectionError::ServerError {
                status: 500,
                message: "Internal Server Error".to_string(),
            }),
        }
    }
}

/// Builder for a wiremock server speaking the collection API.
pub struct MockCollectionServerBuilder {
    server: MockServer,
}

impl MockCollectionServerBuilder {
    /// Starts a new mock server.
    pub async fn new() -> Self {
        Self {
            server: MockServer::start().await,
        }
    }

    /// Gets the server URL.
    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Answers `/search` with `q` equal to `term` (decoded, so spaces not `+`).
    pub async fn with_search(self, term: &str, ids: &[u64]) -> Self {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", term))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "total": ids.len(),
                    "objectIDs": ids,
                })),
            )
            .mount(&self.server)
            .await;
        self
    }

    /// Answers `/search` the way the service does when nothing matches.
    pub async fn with_empty_search(self, term: &str) -> Self {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", term))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({
                    "total": 0,
                    "objectIDs": null,
                })),
            )
            .mount(&self.server)
            .await;
        self
    }

    pub async fn with_object(self, id: u64, body: Value) -> Self {
        self.with_object_status(id, 200, body).await
    }

    pub async fn with_object_status(self, id: u64, status: u16, body: Value) -> Self {
        Mock::given(method("GET"))
            .and(path(format!("/objects/{}", id)))
            .respond_with(ResponseTemplate::new(status).set_body_json(body))
            .mount(&self.server)
            .await;
        self
    }
}
