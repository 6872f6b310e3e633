//! Activity-board state: the last fetched roster and the inline message.
//!
//! SYSTEM CONTEXT
//! ==============
//! The board page holds one `RwSignal<BoardState>`. Each fetch swaps in a
//! whole new `ActivityCollection`; components derive their views from it and
//! never edit it in place.

#[cfg(test)]
#[path = "board_test.rs"]
mod board_test;

use std::sync::Arc;

use leptos::prelude::*;

use crate::net::types::ActivityCollection;

/// Shown in the list area while the first fetch is in flight.
pub const LOADING_TEXT: &str = "Loading activities...";

/// Shown in the list area when a fetch fails.
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";

/// What the activity list area currently displays.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ListView {
    /// No response yet.
    #[default]
    Pending,
    /// Cards for the most recent successful fetch.
    Ready(Arc<ActivityCollection>),
    /// The most recent fetch failed.
    Failed,
}

/// Inline message severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    /// CSS class applied to the message element.
    pub fn class(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Transient feedback shown under the sign-up form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UiMessage {
    pub text: String,
    pub kind: MessageKind,
}

impl UiMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Success }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { text: text.into(), kind: MessageKind::Error }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BoardState {
    /// Content of the `activities-list` area.
    pub list: ListView,
    /// Source of the activity selector. Only replaced by a successful fetch,
    /// so a failed fetch leaves the selector as it was.
    pub options: Arc<ActivityCollection>,
    /// Last message written to the message area, visible or not.
    pub message: Option<UiMessage>,
    pub message_visible: bool,
    /// Bumped on every `show_message`; hide timers carry the value they saw.
    pub message_seq: u64,
}

impl BoardState {
    /// Replace both the list and the selector with a fresh collection.
    pub fn apply_activities(&mut self, activities: ActivityCollection) {
        let activities = Arc::new(activities);
        self.list = ListView::Ready(Arc::clone(&activities));
        self.options = activities;
    }

    /// Replace the list with the failure notice; the selector is untouched.
    pub fn apply_load_failure(&mut self) {
        self.list = ListView::Failed;
    }

    /// Overwrite and reveal the message. Returns the sequence number a later
    /// [`hide_message`](Self::hide_message) must present.
    pub fn show_message(&mut self, message: UiMessage) -> u64 {
        self.message_seq += 1;
        self.message = Some(message);
        self.message_visible = true;
        self.message_seq
    }

    /// Hide the message if no newer message was shown since `seq`.
    pub fn hide_message(&mut self, seq: u64) {
        if seq == self.message_seq {
            self.message_visible = false;
        }
    }

    /// Class string for the message element, e.g. `"success"` or `"error hidden"`.
    pub fn message_class(&self) -> String {
        match (&self.message, self.message_visible) {
            (Some(message), true) => message.kind.class().to_owned(),
            (Some(message), false) => format!("{} hidden", message.kind.class()),
            (None, _) => "hidden".to_owned(),
        }
    }

    pub fn message_text(&self) -> &str {
        self.message.as_ref().map_or("", |m| m.text.as_str())
    }
}

/// List area content. Message updates leave it unchanged, so readers only
/// re-run after a fetch.
pub fn list_memo(board: RwSignal<BoardState>) -> Memo<ListView> {
    Memo::new(move |_| board.with(|b| b.list.clone()))
}

/// Selector source; changes only on a successful fetch.
pub fn options_memo(board: RwSignal<BoardState>) -> Memo<Arc<ActivityCollection>> {
    Memo::new(move |_| board.with(|b| Arc::clone(&b.options)))
}
