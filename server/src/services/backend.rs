//! Forwarding client for the activities backend.
//!
//! ARCHITECTURE
//! ============
//! The board server owns no activity data. Each `/activities` route hands
//! its method, path segments, raw query, and body to [`ActivitiesBackend`],
//! which replays the call against the configured base URL and returns the
//! backend's status, content type, and body untouched.

use std::time::Duration;

use axum::body::Bytes;
use axum::http::StatusCode;
use reqwest::Method;
use reqwest::header::CONTENT_TYPE;
use url::Url;

/// Errors produced while talking to the activities backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),

    /// The base URL cannot carry the requested path.
    #[error("cannot build backend url from {0}")]
    Url(String),

    /// The request to the backend failed before a response arrived.
    #[error("backend request failed: {0}")]
    Request(String),
}

/// Request body forwarded as-is.
#[derive(Debug, Clone)]
pub struct OutgoingBody {
    pub content_type: Option<String>,
    pub bytes: Bytes,
}

/// Backend response relayed to the browser.
#[derive(Debug, Clone)]
pub struct Forwarded {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub body: Bytes,
}

#[derive(Debug, Clone)]
pub struct ActivitiesBackend {
    http: reqwest::Client,
    base: Url,
}

impl ActivitiesBackend {
    /// # Errors
    ///
    /// Returns [`BackendError::HttpClientBuild`] if the HTTP client cannot be
    /// constructed.
    pub fn new(base: Url, request_timeout: Duration, connect_timeout: Duration) -> Result<Self, BackendError> {
        let http = reqwest::Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| BackendError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Backend URL for `segments` (each percent-encoded as one path segment)
    /// with `query` appended verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError::Url`] if the base cannot carry a path.
    pub fn url(&self, segments: &[&str], query: Option<&str>) -> Result<Url, BackendError> {
        let mut url = self.base.clone();
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| BackendError::Url(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        url.set_query(query.filter(|q| !q.is_empty()));
        Ok(url)
    }

    /// Replay one call against the backend.
    ///
    /// # Errors
    ///
    /// Returns [`BackendError`] when no backend response could be obtained.
    /// Non-2xx backend responses are not errors; they are relayed.
    pub async fn forward(
        &self,
        method: Method,
        segments: &[&str],
        query: Option<&str>,
        body: Option<OutgoingBody>,
    ) -> Result<Forwarded, BackendError> {
        let url = self.url(segments, query)?;
        let mut request = self.http.request(method, url);
        if let Some(body) = body {
            if let Some(content_type) = body.content_type {
                request = request.header(CONTENT_TYPE, content_type);
            }
            request = request.body(body.bytes);
        }

        let resp = request.send().await.map_err(|e| BackendError::Request(e.to_string()))?;
        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_owned);
        let body = resp.bytes().await.map_err(|e| BackendError::Request(e.to_string()))?;
        Ok(Forwarded { status, content_type, body })
    }
}

#[cfg(test)]
#[path = "backend_test.rs"]
mod tests;
