//! Board operations: load the roster, submit a sign-up, remove a participant.
//!
//! SYSTEM CONTEXT
//! ==============
//! These run inside `spawn_local` tasks started by the board page. They talk
//! to the backend through [`ActivitiesApi`] and report everything visible
//! through [`BoardSink`], which keeps them independent of Leptos signals and
//! the browser so tests can drive them with fakes.
//!
//! ERROR HANDLING
//! ==============
//! Nothing is returned to the caller. Every failure becomes user feedback
//! (list notice, inline message, or alert) plus a log record. Nothing is
//! retried. A mutation always finishes before its follow-up reload starts;
//! two independent user actions may still interleave, and the last reload
//! to resolve wins.

#[cfg(test)]
#[path = "board_actions_test.rs"]
mod board_actions_test;

use crate::net::api::{ActivitiesApi, ApiError};
use crate::state::board::{BoardState, UiMessage};
use crate::state::signup::SignupForm;
use crate::util::activity_cards::ParticipantRow;

/// Sign-up rejected without a usable `detail`.
pub const SIGNUP_FALLBACK_ERROR: &str = "An error occurred";

/// Sign-up request that never produced a readable response.
pub const SIGNUP_FAILED_TEXT: &str = "Failed to sign up. Please try again.";

/// Blocking alert text for any failed removal.
pub const REMOVE_FAILED_TEXT: &str = "Failed to remove participant.";

/// Where the board operations write their visible effects.
pub trait BoardSink {
    fn update_board(&self, f: impl FnOnce(&mut BoardState));

    /// Clear the sign-up form inputs.
    fn reset_form(&self);

    /// Show a blocking alert.
    fn alert(&self, text: &str);

    /// Hide the inline message shown with `seq` after the configured delay.
    fn schedule_hide(&self, seq: u64);
}

fn show_message<S: BoardSink>(sink: &S, message: UiMessage) -> u64 {
    let mut seq = 0;
    sink.update_board(|board| seq = board.show_message(message));
    seq
}

/// Fetch the roster and replace the rendered list and selector.
pub async fn load_activities<A, S>(api: &A, sink: &S)
where
    A: ActivitiesApi,
    S: BoardSink,
{
    match api.fetch_activities().await {
        Ok(activities) => {
            log::debug!("loaded {} activities", activities.len());
            sink.update_board(|board| board.apply_activities(activities));
        }
        Err(err) => {
            log::error!("Error fetching activities: {err}");
            sink.update_board(BoardState::apply_load_failure);
        }
    }
}

/// Register `form.email` for `form.activity`.
///
/// On success the server's message is shown, the form is cleared and the
/// roster reloaded once. A rejection shows the server's `detail`. Both of
/// those messages are hidden again after the sink's delay; a transport
/// failure message stays until the next one replaces it.
pub async fn submit_signup<A, S>(api: &A, sink: &S, form: &SignupForm)
where
    A: ActivitiesApi,
    S: BoardSink,
{
    match api.signup(&form.activity, &form.email).await {
        Ok(message) => {
            let seq = show_message(sink, UiMessage::success(message));
            sink.reset_form();
            load_activities(api, sink).await;
            sink.schedule_hide(seq);
        }
        Err(ApiError::Rejected { status, detail }) => {
            log::warn!("sign-up for {} rejected with status {status}", form.activity);
            let text = detail
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| SIGNUP_FALLBACK_ERROR.to_owned());
            let seq = show_message(sink, UiMessage::error(text));
            sink.schedule_hide(seq);
        }
        Err(err) => {
            log::error!("Error signing up: {err}");
            show_message(sink, UiMessage::error(SIGNUP_FAILED_TEXT));
        }
    }
}

/// Unregister one participant, then reload. Failures raise an alert and
/// leave the rendered roster alone.
pub async fn remove_participant<A, S>(api: &A, sink: &S, row: &ParticipantRow)
where
    A: ActivitiesApi,
    S: BoardSink,
{
    match api.unregister(&row.activity, &row.email).await {
        Ok(()) => load_activities(api, sink).await,
        Err(err) => {
            log::error!("Error removing participant: {err}");
            sink.alert(REMOVE_FAILED_TEXT);
        }
    }
}
