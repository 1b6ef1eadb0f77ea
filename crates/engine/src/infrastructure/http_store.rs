//! HTTP record store adapter.
//!
//! Talks JSON/REST to the remote keyed document store:
//!
//! - `GET    {base}/{collection}`        - map of key to document fields
//! - `GET    {base}/{collection}/{key}`  - document fields, 404 when absent
//! - `PATCH  {base}/{collection}/{key}`  - merge fields, creating when absent
//! - `DELETE {base}/{collection}/{key}`  - remove document, 404 is fine
//!
//! The store applies each call atomically per key but offers no transaction
//! spanning a read and a later write.

use std::collections::BTreeMap;

use async_trait::async_trait;
use reqwest::{StatusCode, Url};
use serde::Deserialize;

use larder_domain::{InventoryRecord, InventorySnapshot, ItemName};

use super::ports::{RecordPatch, RecordStore, StoreError};

/// Raw document fields as they appear on the wire.
///
/// Both fields are optional: a merge-upsert can create a document carrying
/// only the fields it patched, and `favorite` absent reads as false.
#[derive(Debug, Clone, Copy, Deserialize)]
struct StoredFields {
    #[serde(default)]
    quantity: Option<u32>,
    #[serde(default)]
    favorite: Option<bool>,
}

impl StoredFields {
    fn into_record(self, name: &str) -> Option<InventoryRecord> {
        match InventoryRecord::from_parts(name, self.quantity, self.favorite) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(name = %name, error = %e, "Skipping invalid stored document");
                None
            }
        }
    }
}

pub struct HttpRecordStore {
    client: reqwest::Client,
    base_url: Url,
    collection: String,
}

impl HttpRecordStore {
    pub fn new(base_url: Url, collection: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
            collection: collection.into(),
        }
    }

    fn collection_url(&self) -> Result<Url, StoreError> {
        self.url_with(&[])
    }

    fn document_url(&self, name: &ItemName) -> Result<Url, StoreError> {
        self.url_with(&[name.as_str()])
    }

    fn url_with(&self, segments: &[&str]) -> Result<Url, StoreError> {
        let mut url = self.base_url.clone();
        {
            let mut path = url.path_segments_mut().map_err(|()| {
                StoreError::unavailable("url", "store base URL cannot carry path segments")
            })?;
            path.pop_if_empty().push(&self.collection);
            for segment in segments {
                path.push(segment);
            }
        }
        Ok(url)
    }
}

#[async_trait]
impl RecordStore for HttpRecordStore {
    async fn fetch_all(&self) -> Result<InventorySnapshot, StoreError> {
        let response = self
            .client
            .get(self.collection_url()?)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("fetch_all", e))?;

        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                "fetch_all",
                format!("unexpected status {}", response.status()),
            ));
        }

        let docs: BTreeMap<String, StoredFields> = response
            .json()
            .await
            .map_err(|e| StoreError::serialization(e))?;

        Ok(docs
            .into_iter()
            .filter_map(|(name, fields)| fields.into_record(&name))
            .collect())
    }

    async fn fetch_one(&self, name: &ItemName) -> Result<Option<InventoryRecord>, StoreError> {
        let response = self
            .client
            .get(self.document_url(name)?)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("fetch_one", e))?;

        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                "fetch_one",
                format!("unexpected status {}", response.status()),
            ));
        }

        let fields: StoredFields = response
            .json()
            .await
            .map_err(|e| StoreError::serialization(e))?;

        Ok(fields.into_record(name.as_str()))
    }

    async fn upsert(&self, name: &ItemName, patch: RecordPatch) -> Result<(), StoreError> {
        let response = self
            .client
            .patch(self.document_url(name)?)
            .json(&patch)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("upsert", e))?;

        if !response.status().is_success() {
            return Err(StoreError::unavailable(
                "upsert",
                format!("unexpected status {}", response.status()),
            ));
        }
        Ok(())
    }

    async fn delete(&self, name: &ItemName) -> Result<(), StoreError> {
        let response = self
            .client
            .delete(self.document_url(name)?)
            .send()
            .await
            .map_err(|e| StoreError::unavailable("delete", e))?;

        // Already absent counts as deleted.
        if response.status() == StatusCode::NOT_FOUND || response.status().is_success() {
            return Ok(());
        }
        Err(StoreError::unavailable(
            "delete",
            format!("unexpected status {}", response.status()),
        ))
    }
}
