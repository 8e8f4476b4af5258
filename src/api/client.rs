//! HTTP API Client
//!
//! Thin JSON client over `gloo-net`. One request per call: no retry, no
//! caching, no timeout.

use gloo_net::http::{Request, Response};
use serde::{de::DeserializeOwned, Serialize};

use super::error::{ApiError, ApiResult};

/// Generic REST client bound to one API base URL
#[derive(Debug, Clone, PartialEq)]
pub struct RestClient {
    base: String,
}

impl RestClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// Join a resource path onto the base URL
    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base, path.trim_start_matches('/'))
    }

    /// GET a JSON resource
    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let url = self.url(path);
        tracing::debug!(%url, "GET");

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, url).await
    }

    /// POST a JSON body and decode the JSON reply
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "POST");

        let response = Request::post(&url)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, url).await
    }

    /// PUT a JSON body and decode the JSON reply
    pub async fn put_json<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(%url, "PUT");

        let response = Request::put(&url)
            .json(body)
            .map_err(|e| ApiError::Request(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        read_json(response, url).await
    }
}

async fn read_json<T: DeserializeOwned>(response: Response, url: String) -> ApiResult<T> {
    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            url,
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}
