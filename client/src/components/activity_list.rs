//! The `activities-list` area: loading notice, failure notice, or cards.

use leptos::prelude::*;

use crate::components::activity_card::ActivityCard;
use crate::state::board::{BoardState, LOAD_FAILED_TEXT, LOADING_TEXT, ListView, list_memo};
use crate::util::activity_cards::{ParticipantRow, activity_cards};

/// Renders whatever the last fetch produced. The whole area is rebuilt from
/// the current collection whenever a fetch lands.
#[component]
pub fn ActivityList(on_remove: Callback<ParticipantRow>) -> impl IntoView {
    let list = list_memo(expect_context::<RwSignal<BoardState>>());

    view! {
        <div id="activities-list">
            {move || match list.get() {
                ListView::Pending => view! { <p>{LOADING_TEXT}</p> }.into_any(),
                ListView::Failed => view! { <p>{LOAD_FAILED_TEXT}</p> }.into_any(),
                ListView::Ready(activities) => activity_cards(&activities)
                    .into_iter()
                    .map(|card| view! { <ActivityCard card=card on_remove=on_remove/> })
                    .collect::<Vec<_>>()
                    .into_any(),
            }}
        </div>
    }
}
