//! Inline feedback area under the sign-up form.

use leptos::prelude::*;

use crate::state::board::BoardState;

/// The `message` element. Its class is `success` or `error`, plus `hidden`
/// once the message has been dismissed.
#[component]
pub fn MessageBanner() -> impl IntoView {
    let board = expect_context::<RwSignal<BoardState>>();

    view! {
        <div id="message" class=move || board.with(BoardState::message_class)>
            {move || board.with(|b| b.message_text().to_owned())}
        </div>
    }
}
