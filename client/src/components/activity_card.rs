//! Card for one activity: details, availability, and participant roster.

use leptos::prelude::*;

use crate::util::activity_cards::{ActivityCardView, NO_PARTICIPANTS_TEXT, ParticipantRow};

/// A single `activity-card`. Each removal button hands its own
/// [`ParticipantRow`] to `on_remove`.
#[component]
pub fn ActivityCard(card: ActivityCardView, on_remove: Callback<ParticipantRow>) -> impl IntoView {
    let availability = card.availability_text();

    let participants = if card.participants.is_empty() {
        view! {
            <li class="participants-list__empty">
                <em>{NO_PARTICIPANTS_TEXT}</em>
            </li>
        }
            .into_any()
    } else {
        card.participants
            .into_iter()
            .map(|row| {
                let email = row.email.clone();
                view! {
                    <li class="participants-list__item">
                        <span>{email}</span>
                        <button
                            class="delete-participant"
                            title="Remove"
                            on:click=move |_| on_remove.run(row.clone())
                        >
                            "\u{1F5D1}"
                        </button>
                    </li>
                }
            })
            .collect::<Vec<_>>()
            .into_any()
    };

    view! {
        <div class="activity-card">
            <h4>{card.name}</h4>
            <p>{card.description}</p>
            <p>
                <strong>"Schedule:"</strong>
                " "
                {card.schedule}
            </p>
            <p>
                <strong>"Availability:"</strong>
                " "
                {availability}
            </p>
            <div class="participants-section">
                <h5>"Participants"</h5>
                <ul class="participants-list">{participants}</ul>
            </div>
        </div>
    }
}
