use super::*;

fn backend(base: &str) -> ActivitiesBackend {
    ActivitiesBackend::new(Url::parse(base).unwrap(), Duration::from_secs(5), Duration::from_secs(1)).unwrap()
}

#[test]
fn url_appends_segments_to_root_base() {
    let url = backend("http://127.0.0.1:8000").url(&["activities"], None).unwrap();
    assert_eq!(url.as_str(), "http://127.0.0.1:8000/activities");
}

#[test]
fn url_keeps_base_path_prefix() {
    let url = backend("https://school.example/api/").url(&["activities"], None).unwrap();
    assert_eq!(url.as_str(), "https://school.example/api/activities");
}

#[test]
fn url_reencodes_activity_segment() {
    let url = backend("http://backend.test")
        .url(&["activities", "Chess Club/A", "signup"], Some("email=a%40x.com"))
        .unwrap();
    assert_eq!(url.as_str(), "http://backend.test/activities/Chess%20Club%2FA/signup?email=a%40x.com");
}

#[test]
fn url_drops_empty_query() {
    let url = backend("http://backend.test").url(&["activities"], Some("")).unwrap();
    assert_eq!(url.as_str(), "http://backend.test/activities");
}

#[test]
fn url_replaces_query_of_base() {
    let url = backend("http://backend.test/?token=x").url(&["activities"], None).unwrap();
    assert_eq!(url.as_str(), "http://backend.test/activities");
}
