use crate::models::{Catalog, Image};
use reqwest::header::CACHE_CONTROL;
use reqwest::StatusCode;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request to catalog service failed: {0}")]
    Request(#[source] reqwest::Error),
    #[error("catalog service responded with {0}")]
    Status(StatusCode),
    #[error("catalog response was not a valid envelope: {0}")]
    Decode(#[source] reqwest::Error),
}

/// HTTP client for the catalog endpoint used by the gallery view.
#[derive(Debug, Clone)]
pub struct CatalogClient {
    http: reqwest::Client,
    endpoint: String,
}

impl CatalogClient {
    /// A `timeout` of `None` waits on the catalog service indefinitely.
    pub fn new(endpoint: impl Into<String>, timeout: Option<Duration>) -> reqwest::Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Issues a single uncached GET and returns the catalog's images in order.
    pub async fn try_fetch(&self) -> Result<Vec<Image>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(FetchError::Request)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status));
        }

        let catalog: Catalog = response.json().await.map_err(FetchError::Decode)?;
        Ok(catalog.images)
    }

    /// Never fails: any fetch error is logged and collapses to an empty list.
    pub async fn fetch_images(&self) -> Vec<Image> {
        match self.try_fetch().await {
            Ok(images) => {
                tracing::debug!(endpoint = %self.endpoint, count = images.len(), "Fetched gallery catalog");
                images
            }
            Err(e) => {
                tracing::error!(endpoint = %self.endpoint, error = %e, "Gallery fetch failed");
                Vec::new()
            }
        }
    }
}
