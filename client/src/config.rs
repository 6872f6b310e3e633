//! Client-side board configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provided once as a Leptos context by `App`; the board page reads it to
//! build the REST client and to time the auto-hide of inline messages.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use std::time::Duration;

/// Delay before an inline sign-up message is hidden again.
pub const DEFAULT_MESSAGE_HIDE_DELAY: Duration = Duration::from_millis(5000);

/// Origin used when no explicit base is configured and no browser is present.
pub const FALLBACK_ORIGIN: &str = "http://localhost";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardConfig {
    /// Base URL of the activities API. `None` means the page origin.
    pub api_base: Option<String>,
    pub message_hide_delay: Duration,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self { api_base: None, message_hide_delay: DEFAULT_MESSAGE_HIDE_DELAY }
    }
}

impl BoardConfig {
    /// Resolve the API base URL: the explicit base if set, otherwise the
    /// origin of the current page.
    pub fn resolve_api_base(&self) -> String {
        if let Some(base) = self.api_base.as_deref().map(str::trim).filter(|b| !b.is_empty()) {
            return base.to_owned();
        }
        page_origin().unwrap_or_else(|| FALLBACK_ORIGIN.to_owned())
    }
}

fn page_origin() -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window()?.location().origin().ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}
