//! `/activities` routes forwarded to the activities backend.
//!
//! ERROR HANDLING
//! ==============
//! Backend statuses and bodies pass through unchanged, including 4xx
//! `{"detail": ...}` rejections. Only a missing backend response is mapped
//! here: `502` with a `detail` body the board can display.

use axum::body::Bytes;
use axum::extract::{Path, RawQuery, State};
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Json, Response};
use reqwest::Method;
use serde::Serialize;

use crate::services::backend::{BackendError, Forwarded, OutgoingBody};
use crate::state::AppState;

pub const BACKEND_UNAVAILABLE_DETAIL: &str = "Activities service unavailable";

/// Error body in the backend's own `{"detail": ...}` shape.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorDetail {
    pub detail: &'static str,
}

impl IntoResponse for Forwarded {
    fn into_response(self) -> Response {
        let mut resp = (self.status, self.body).into_response();
        if let Some(value) = self.content_type.and_then(|ct| HeaderValue::from_str(&ct).ok()) {
            resp.headers_mut().insert(CONTENT_TYPE, value);
        }
        resp
    }
}

fn relay(route: &'static str, result: Result<Forwarded, BackendError>) -> Response {
    match result {
        Ok(forwarded) => {
            tracing::debug!(route, status = %forwarded.status, "relayed backend response");
            forwarded.into_response()
        }
        Err(e) => {
            tracing::warn!(route, error = %e, "activities backend request failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(ErrorDetail { detail: BACKEND_UNAVAILABLE_DETAIL }),
            )
                .into_response()
        }
    }
}

/// `GET /activities`: the full activity roster.
pub async fn list_activities(State(state): State<AppState>) -> Response {
    let result = state.backend.forward(Method::GET, &["activities"], None, None).await;
    relay("list", result)
}

/// `POST /activities/{name}/signup?email=...`. The query is forwarded verbatim.
pub async fn signup(
    State(state): State<AppState>,
    Path(name): Path<String>,
    RawQuery(query): RawQuery,
) -> Response {
    let result = state
        .backend
        .forward(Method::POST, &["activities", &name, "signup"], query.as_deref(), None)
        .await;
    relay("signup", result)
}

/// `POST /activities/{name}/unregister`. The JSON body is forwarded verbatim.
pub async fn unregister(
    State(state): State<AppState>,
    Path(name): Path<String>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);
    let outgoing = OutgoingBody { content_type, bytes: body };
    let result = state
        .backend
        .forward(Method::POST, &["activities", &name, "unregister"], None, Some(outgoing))
        .await;
    relay("unregister", result)
}

#[cfg(test)]
#[path = "activities_test.rs"]
mod tests;
