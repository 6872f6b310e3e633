//! Derive card and selector views from an activity collection.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render these values verbatim. Each participant row carries
//! its `(activity, email)` pair as data, so the removal handler never has to
//! read identifiers back out of DOM attributes.

#[cfg(test)]
#[path = "activity_cards_test.rs"]
mod activity_cards_test;

use crate::net::types::{Activity, ActivityCollection};

/// Text of the placeholder option at the top of the activity selector.
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

/// Shown in place of participant rows when an activity has none.
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";

/// Identifies one registration shown on a card.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParticipantRow {
    pub activity: String,
    pub email: String,
}

/// Everything one `activity-card` displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityCardView {
    pub name: String,
    pub description: String,
    pub schedule: String,
    /// `max_participants - participants.len()`, negative when overbooked.
    pub spots_left: i64,
    pub participants: Vec<ParticipantRow>,
}

impl ActivityCardView {
    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }
}

/// One `<option>` of the activity selector.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

/// Remaining capacity. Not clamped: an overbooked activity reports a
/// negative count.
pub fn spots_left(activity: &Activity) -> i64 {
    let taken = i64::try_from(activity.participants.len()).unwrap_or(i64::MAX);
    activity.max_participants.saturating_sub(taken)
}

/// One card per activity, in collection order.
pub fn activity_cards(activities: &ActivityCollection) -> Vec<ActivityCardView> {
    activities
        .iter()
        .map(|(name, activity)| ActivityCardView {
            name: name.to_owned(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: spots_left(activity),
            participants: activity
                .participants
                .iter()
                .map(|email| ParticipantRow { activity: name.to_owned(), email: email.clone() })
                .collect(),
        })
        .collect()
}

/// Placeholder option followed by one option per activity.
pub fn activity_options(activities: &ActivityCollection) -> Vec<SelectOption> {
    std::iter::once(SelectOption { value: String::new(), label: SELECT_PLACEHOLDER.to_owned() })
        .chain(
            activities
                .names()
                .map(|name| SelectOption { value: name.to_owned(), label: name.to_owned() }),
        )
        .collect()
}
