use super::*;

fn activity(max: i64, participants: &[&str]) -> Activity {
    Activity {
        description: "d".to_owned(),
        schedule: "s".to_owned(),
        max_participants: max,
        participants: participants.iter().map(|p| (*p).to_owned()).collect(),
    }
}

fn chess_only() -> ActivityCollection {
    ActivityCollection::from_entries(vec![("Chess Club".to_owned(), activity(2, &["a@x.com"]))])
}

// =============================================================
// spots_left
// =============================================================

#[test]
fn spots_left_subtracts_participant_count() {
    assert_eq!(spots_left(&activity(12, &["a@x.com", "b@x.com"])), 10);
}

#[test]
fn spots_left_reports_zero_when_full() {
    assert_eq!(spots_left(&activity(1, &["a@x.com"])), 0);
}

#[test]
fn spots_left_goes_negative_when_overbooked() {
    assert_eq!(spots_left(&activity(1, &["a@x.com", "b@x.com", "c@x.com"])), -2);
}

// =============================================================
// activity_cards
// =============================================================

#[test]
fn single_activity_renders_one_card_with_removal_row() {
    let cards = activity_cards(&chess_only());
    assert_eq!(cards.len(), 1);
    let card = &cards[0];
    assert_eq!(card.name, "Chess Club");
    assert_eq!(card.description, "d");
    assert_eq!(card.schedule, "s");
    assert_eq!(card.availability_text(), "1 spots left");
    assert_eq!(
        card.participants,
        vec![ParticipantRow { activity: "Chess Club".to_owned(), email: "a@x.com".to_owned() }]
    );
}

#[test]
fn empty_roster_produces_no_participant_rows() {
    let activities = ActivityCollection::from_entries(vec![("Gym Class".to_owned(), activity(30, &[]))]);
    let cards = activity_cards(&activities);
    assert!(cards[0].participants.is_empty());
    assert_eq!(cards[0].availability_text(), "30 spots left");
}

#[test]
fn card_count_matches_collection_size_in_order() {
    let activities = ActivityCollection::from_entries(vec![
        ("Programming Class".to_owned(), activity(20, &[])),
        ("Chess Club".to_owned(), activity(2, &["a@x.com"])),
        ("Art Studio".to_owned(), activity(5, &["b@x.com", "c@x.com"])),
    ]);
    let cards = activity_cards(&activities);
    assert_eq!(cards.len(), activities.len());
    let names: Vec<&str> = cards.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
}

#[test]
fn participant_rows_keep_server_order_and_special_characters() {
    let activities = ActivityCollection::from_entries(vec![(
        "Q&A \"Club\"".to_owned(),
        activity(5, &["z<z>@x.com", "a'b@x.com"]),
    )]);
    let rows = &activity_cards(&activities)[0].participants;
    assert_eq!(rows[0].email, "z<z>@x.com");
    assert_eq!(rows[1].email, "a'b@x.com");
    assert!(rows.iter().all(|r| r.activity == "Q&A \"Club\""));
}

// =============================================================
// activity_options
// =============================================================

#[test]
fn options_lead_with_placeholder() {
    let options = activity_options(&chess_only());
    assert_eq!(
        options,
        vec![
            SelectOption { value: String::new(), label: SELECT_PLACEHOLDER.to_owned() },
            SelectOption { value: "Chess Club".to_owned(), label: "Chess Club".to_owned() },
        ]
    );
}

#[test]
fn options_count_is_collection_size_plus_one() {
    let activities = ActivityCollection::from_entries(vec![
        ("A".to_owned(), activity(1, &[])),
        ("B".to_owned(), activity(1, &[])),
        ("C".to_owned(), activity(1, &[])),
    ]);
    assert_eq!(activity_options(&activities).len(), activities.len() + 1);
}

#[test]
fn empty_collection_yields_only_placeholder() {
    let options = activity_options(&ActivityCollection::default());
    assert_eq!(options.len(), 1);
    assert_eq!(options[0].value, "");
}
