use super::*;

fn chess_club() -> Activity {
    Activity {
        description: "d".to_owned(),
        schedule: "s".to_owned(),
        max_participants: 2,
        participants: vec!["a@x.com".to_owned()],
    }
}

// =============================================================
// Activity
// =============================================================

#[test]
fn activity_deserializes_backend_shape() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 2,
        "participants": ["a@x.com"]
    }))
    .unwrap();
    assert_eq!(activity, chess_club());
}

#[test]
fn activity_missing_participants_defaults_to_empty() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 12
    }))
    .unwrap();
    assert!(activity.participants.is_empty());
}

#[test]
fn activity_accepts_integral_float_capacity() {
    let activity: Activity = serde_json::from_value(serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 20.0,
        "participants": []
    }))
    .unwrap();
    assert_eq!(activity.max_participants, 20);
}

#[test]
fn activity_rejects_fractional_capacity() {
    let result = serde_json::from_value::<Activity>(serde_json::json!({
        "description": "d",
        "schedule": "s",
        "max_participants": 2.5,
        "participants": []
    }));
    assert!(result.is_err());
}

// =============================================================
// ActivityCollection
// =============================================================

#[test]
fn collection_preserves_backend_key_order() {
    let raw = r#"{
        "Programming Class": {"description": "p", "schedule": "t", "max_participants": 20, "participants": []},
        "Chess Club": {"description": "d", "schedule": "s", "max_participants": 2, "participants": ["a@x.com"]},
        "Art Studio": {"description": "a", "schedule": "u", "max_participants": 5, "participants": []}
    }"#;
    let collection: ActivityCollection = serde_json::from_str(raw).unwrap();
    let names: Vec<&str> = collection.names().collect();
    assert_eq!(names, vec!["Programming Class", "Chess Club", "Art Studio"]);
    assert_eq!(collection.get("Chess Club"), Some(&chess_club()));
}

#[test]
fn collection_duplicate_key_keeps_first_position_and_last_value() {
    let raw = r#"{
        "A": {"description": "first", "schedule": "s", "max_participants": 1, "participants": []},
        "B": {"description": "b", "schedule": "s", "max_participants": 1, "participants": []},
        "A": {"description": "second", "schedule": "s", "max_participants": 1, "participants": []}
    }"#;
    let collection: ActivityCollection = serde_json::from_str(raw).unwrap();
    assert_eq!(collection.len(), 2);
    assert_eq!(collection.names().collect::<Vec<_>>(), vec!["A", "B"]);
    assert_eq!(collection.get("A").map(|a| a.description.as_str()), Some("second"));
}

#[test]
fn collection_empty_object_is_empty() {
    let collection: ActivityCollection = serde_json::from_str("{}").unwrap();
    assert!(collection.is_empty());
    assert_eq!(collection.len(), 0);
}

#[test]
fn collection_rejects_non_object_payload() {
    assert!(serde_json::from_str::<ActivityCollection>("[]").is_err());
    assert!(serde_json::from_str::<ActivityCollection>(r#"{"detail": "boom"}"#).is_err());
}

#[test]
fn collection_serializes_as_ordered_object() {
    let collection = ActivityCollection::from_entries(vec![
        ("Zeta".to_owned(), chess_club()),
        ("Alpha".to_owned(), chess_club()),
    ]);
    let raw = serde_json::to_string(&collection).unwrap();
    assert!(raw.find("Zeta").unwrap() < raw.find("Alpha").unwrap());
}

// =============================================================
// Request / response bodies
// =============================================================

#[test]
fn error_body_detail_is_optional() {
    let with: ErrorBody = serde_json::from_str(r#"{"detail": "Student already signed up"}"#).unwrap();
    assert_eq!(with.detail.as_deref(), Some("Student already signed up"));
    let without: ErrorBody = serde_json::from_str("{}").unwrap();
    assert_eq!(without.detail, None);
}

#[test]
fn unregister_request_serializes_email_field() {
    let body = UnregisterRequest { email: "a@x.com".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), serde_json::json!({ "email": "a@x.com" }));
}
