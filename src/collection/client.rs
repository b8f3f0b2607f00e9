use crate::collection::{ObjectSource, SearchQuery};
use crate::config;
use crate::error::CollectionError;
use crate::model::{Department, DepartmentsResponse, ObjectRecord, ObjectsResponse, SearchResponse};
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct Client {
    http_client: HttpClient,
    config: config::CollectionConfig,
}

impl Client {
    pub fn new(config: config::CollectionConfig) -> Result<Self, CollectionError> {
        let http_client = HttpClient::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()?;
        Ok(Self {
            http_client,
            config,
        })
    }

    /// Issues a GET against the base URL and decodes the JSON body.
    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T, CollectionError> {
        let url = format!("{}{}", self.config.base_url.trim_end_matches('/'), path);
        tracing::debug!("GET {} {:?}", url, query);

        let mut request = self.http_client.get(&url);
        if !query.is_empty() {
            request = request.query(query);
        }
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await?;
            return Err(CollectionError::server_error(status, body));
        }

        let body = response.bytes().await?;
        serde_json::from_slice(&body).map_err(|err| CollectionError::decode(path, err))
    }

    /// Identifiers of every object matching `query`. A search without matches
    /// yields an empty list.
    pub async fn list_matching_identifiers(
        &self,
        query: &SearchQuery,
    ) -> Result<Vec<u64>, CollectionError> {
        let response: SearchResponse = self.get_json("/search", &query.params()).await?;
        tracing::debug!("Search {} matched {} objects", query, response.total);
        Ok(response.object_ids.unwrap_or_default())
    }

    /// Number of objects in the whole catalog.
    pub async fn total_object_count(&self) -> Result<u64, CollectionError> {
        let response: ObjectsResponse = self.get_json("/objects", &[]).await?;
        Ok(response.total)
    }

    /// Fetches one object record.
    ///
    /// # Returns
    /// - `Ok(Some(record))` for an existing object
    /// - `Ok(None)` when the body has no `objectID`
    /// - `Err(ObjectNotFound)` when the service answers 404
    pub async fn fetch_object(&self, id: u64) -> Result<Option<ObjectRecord>, CollectionError> {
        let path = format!("/objects/{}", id);
        let record: ObjectRecord = match self.get_json(&path, &[]).await {
            Ok(record) => record,
            Err(err) if err.is_not_found() => return Err(CollectionError::ObjectNotFound { id }),
            Err(err) => return Err(err),
        };

        if record.exists() {
            Ok(Some(record))
        } else {
            Ok(None)
        }
    }

    /// Like [`fetch_object`](Self::fetch_object) but never fails: errors are
    /// logged and reported as a missing object.
    pub async fn get_object(&self, id: u64) -> Option<ObjectRecord> {
        match self.fetch_object(id).await {
            Ok(record) => record,
            Err(err) => {
                tracing::warn!("Error fetching object with ID {}: {}", id, err);
                None
            }
        }
    }

    pub async fn list_departments(&self) -> Result<Vec<Department>, CollectionError> {
        let response: DepartmentsResponse = self.get_json("/departments", &[]).await?;
        Ok(response.departments)
    }
}

#[async_trait]
impl ObjectSource for Client {
    async fn object_ids(&self, query: &SearchQuery) -> Result<Vec<u64>, CollectionError> {
        self.list_matching_identifiers(query).await
    }

    async fn object(&self, id: u64) -> Result<Option<ObjectRecord>, CollectionError> {
        self.fetch_object(id).await
    }
}
