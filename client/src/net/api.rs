//! REST client for the activities backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: calls return
//! [`ApiError::Unavailable`] since these endpoints are only meaningful in the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns a typed [`ApiError`]. Callers in `util::board_actions`
//! turn these into inline messages or alerts; nothing here panics or retries.
//! Status and body are mapped to an outcome by the `classify_*` functions,
//! which the browser calls only feed with what they fetched.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use url::Url;

#[cfg(feature = "hydrate")]
use super::types::UnregisterRequest;
use super::types::{ActivityCollection, ErrorBody, SignupResponse};

/// Failure modes of an activities API call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, aborted fetch).
    #[error("request failed: {0}")]
    Transport(String),
    /// The response body was not the expected JSON.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The backend answered with a non-2xx status.
    #[error("request rejected with status {status}")]
    Rejected { status: u16, detail: Option<String> },
    /// The configured base URL cannot carry API paths.
    #[error("invalid API base url: {0}")]
    Endpoint(String),
    /// HTTP is not available outside the browser build.
    #[error("not available on server")]
    Unavailable,
}

/// Operations the board needs from the activities backend.
#[allow(async_fn_in_trait)]
pub trait ActivitiesApi {
    /// `GET /activities`.
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError>;

    /// `POST /activities/{activity}/signup?email={email}`; returns the
    /// server's confirmation message.
    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError>;

    /// `POST /activities/{activity}/unregister` with `{"email": email}`.
    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError>;
}

/// [`ActivitiesApi`] over HTTP, rooted at a base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpActivitiesApi {
    base: Url,
}

impl HttpActivitiesApi {
    /// Create a client for `base` (e.g. `https://school.example` or
    /// `https://school.example/api`).
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Endpoint`] if `base` is not an absolute
    /// hierarchical URL.
    pub fn new(base: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base.trim()).map_err(|e| ApiError::Endpoint(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Endpoint(format!("{base}: cannot carry a path")));
        }
        Ok(Self { base })
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// URL of the activity listing.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Endpoint`] if the base cannot carry a path.
    pub fn activities_url(&self) -> Result<Url, ApiError> {
        self.endpoint(&["activities"])
    }

    /// URL of the sign-up call; the activity name is one path segment and
    /// the email a query pair, both percent-encoded.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Endpoint`] if the base cannot carry a path.
    pub fn signup_url(&self, activity: &str, email: &str) -> Result<Url, ApiError> {
        let mut url = self.endpoint(&["activities", activity, "signup"])?;
        url.query_pairs_mut().clear().append_pair("email", email);
        Ok(url)
    }

    /// URL of the unregister call.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Endpoint`] if the base cannot carry a path.
    pub fn unregister_url(&self, activity: &str) -> Result<Url, ApiError> {
        self.endpoint(&["activities", activity, "unregister"])
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.base.clone();
        url.set_query(None);
        url.set_fragment(None);
        url.path_segments_mut()
            .map_err(|()| ApiError::Endpoint(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

/// The page's API handle: a working client, or the error that kept one
/// from being built.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardApi {
    Http(HttpActivitiesApi),
    Unusable(ApiError),
}

impl BoardApi {
    /// Build the page's client from `base`, keeping the construction error
    /// so every later call reports it through the normal failure paths.
    pub fn from_base(base: &str) -> Self {
        match HttpActivitiesApi::new(base) {
            Ok(client) => Self::Http(client),
            Err(err) => Self::Unusable(err),
        }
    }
}

impl ActivitiesApi for BoardApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        match self {
            Self::Http(client) => client.fetch_activities().await,
            Self::Unusable(err) => Err(err.clone()),
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        match self {
            Self::Http(client) => client.signup(activity, email).await,
            Self::Unusable(err) => Err(err.clone()),
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        match self {
            Self::Http(client) => client.unregister(activity, email).await,
            Self::Unusable(err) => Err(err.clone()),
        }
    }
}

fn is_success(status: u16) -> bool {
    (200..300).contains(&status)
}

/// Outcome of `GET /activities` given its status and raw body. Non-2xx
/// bodies are not inspected.
///
/// # Errors
///
/// [`ApiError::Rejected`] for non-2xx, [`ApiError::Decode`] for a 2xx body
/// that is not an activity map.
pub fn classify_activities(status: u16, body: &str) -> Result<ActivityCollection, ApiError> {
    if !is_success(status) {
        return Err(ApiError::Rejected { status, detail: None });
    }
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Outcome of a sign-up call: the server's confirmation `message` on 2xx,
/// its `detail` otherwise.
///
/// # Errors
///
/// [`ApiError::Rejected`] for non-2xx with a JSON body, [`ApiError::Decode`]
/// when either body is not the expected JSON.
pub fn classify_signup(status: u16, body: &str) -> Result<String, ApiError> {
    if is_success(status) {
        let body: SignupResponse = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
        return Ok(body.message);
    }
    let body: ErrorBody = serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))?;
    Err(ApiError::Rejected { status, detail: body.detail })
}

/// Outcome of an unregister call. The 2xx body is ignored; a non-2xx
/// `detail` is read when the body happens to carry one.
///
/// # Errors
///
/// [`ApiError::Rejected`] for any non-2xx status.
pub fn classify_unregister(status: u16, body: &str) -> Result<(), ApiError> {
    if is_success(status) {
        return Ok(());
    }
    let detail = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.detail);
    Err(ApiError::Rejected { status, detail })
}

#[cfg(feature = "hydrate")]
async fn read_response(request: gloo_net::http::RequestBuilder) -> Result<(u16, String), ApiError> {
    let resp = request.send().await.map_err(transport)?;
    let status = resp.status();
    let body = resp.text().await.map_err(transport)?;
    Ok((status, body))
}

#[cfg(feature = "hydrate")]
fn transport(err: gloo_net::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

impl ActivitiesApi for HttpActivitiesApi {
    async fn fetch_activities(&self) -> Result<ActivityCollection, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.activities_url()?;
            let (status, body) = read_response(gloo_net::http::Request::get(url.as_str())).await?;
            classify_activities(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn signup(&self, activity: &str, email: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.signup_url(activity, email)?;
            let (status, body) = read_response(gloo_net::http::Request::post(url.as_str())).await?;
            classify_signup(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }

    async fn unregister(&self, activity: &str, email: &str) -> Result<(), ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let url = self.unregister_url(activity)?;
            let payload = UnregisterRequest { email: email.to_owned() };
            let request = gloo_net::http::Request::post(url.as_str())
                .json(&payload)
                .map_err(transport)?;
            let resp = request.send().await.map_err(transport)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport)?;
            classify_unregister(status, &body)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (activity, email);
            Err(ApiError::Unavailable)
        }
    }
}
