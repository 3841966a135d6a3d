//! Integration tests for the reqwest-backed profile adapter.
//!
//! Each test stands up a local HTTP fixture server and points the adapter at
//! it, so the assertions cover the exact request shape and the decoding of
//! real response bodies.

use std::time::Duration;

use profile_client::domain::Profile;
use profile_client::domain::ports::{ErrorKind, ProfileSource, ProfileSourceError};
use profile_client::{ALL_FIELDS, FieldSelector, LinkedInHttpSource};
use url::Url;
use wiremock::matchers::{any, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN: &str = "AQV-test-token";

fn source_for(server: &MockServer) -> LinkedInHttpSource {
    let endpoint = Url::parse(&server.uri()).expect("fixture server URI should parse");
    LinkedInHttpSource::with_options(TOKEN, endpoint, Some(Duration::from_secs(5)))
        .expect("adapter should build")
}

#[tokio::test]
async fn sends_bearer_token_and_field_selector() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/people/~:(first-name,last-name)"))
        .and(query_param("format", "json"))
        .and(header("authorization", format!("Bearer {TOKEN}").as_str()))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"firstName":"Ann","lastName":"Lee"}"#, "application/json"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let profile = source_for(&server)
        .fetch_basic_profile(&FieldSelector::from_fields(["first-name", "last-name"]))
        .await
        .expect("profile should be fetched");

    assert_eq!(profile.first_name.as_deref(), Some("Ann"));
    assert_eq!(profile.last_name.as_deref(), Some("Lee"));
    assert!(profile.id.is_none());
}

#[tokio::test]
async fn default_selector_requests_the_bare_resource() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/people/~"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc123","firstName":"Ann"}"#))
        .expect(1)
        .mount(&server)
        .await;

    let profile = source_for(&server)
        .fetch_basic_profile(&FieldSelector::new())
        .await
        .expect("profile should be fetched");

    assert_eq!(profile.id.as_deref(), Some("abc123"));
    assert_eq!(profile.first_name.as_deref(), Some("Ann"));
    assert!(profile.headline.is_none());
    assert!(profile.positions.is_none());
}

#[tokio::test]
async fn all_sentinel_requests_every_canonical_field() {
    let server = MockServer::start().await;
    let expected_path = format!("/v1/people/~:({})", ALL_FIELDS.join(","));
    Mock::given(method("GET"))
        .and(path(expected_path.as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_string(
            r#"{
                "id": "abc123",
                "numConnections": 500,
                "numConnectionsCapped": true,
                "location": {"name": "Edinburgh, United Kingdom", "country": {"code": "gb"}},
                "positions": {
                    "_total": 2,
                    "values": [
                        {"id": 1, "isCurrent": true, "title": "Lead", "company": {"name": "Acme"}},
                        {"id": 2, "isCurrent": false, "title": "Engineer"}
                    ]
                },
                "pictureUrls": {"_total": 1, "values": ["https://media.example/p.jpg"]}
            }"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let profile = source_for(&server)
        .fetch_basic_profile(&FieldSelector::from_fields(["all"]))
        .await
        .expect("profile should be fetched");

    assert_eq!(profile.num_connections, Some(500));
    assert_eq!(profile.num_connections_capped, Some(true));
    assert_eq!(profile.position_values().len(), 2);
    assert_eq!(profile.current_positions().count(), 1);
    assert_eq!(
        profile
            .picture_urls
            .as_ref()
            .map(|pictures| pictures.urls.len()),
        Some(1)
    );
    assert_eq!(
        profile
            .location
            .as_ref()
            .and_then(|location| location.country.as_ref())
            .and_then(|country| country.code.as_deref()),
        Some("gb")
    );
}

#[tokio::test]
async fn empty_token_never_reaches_the_network() {
    let server = MockServer::start().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let endpoint = Url::parse(&server.uri()).expect("fixture server URI should parse");
    let error = LinkedInHttpSource::with_options("", endpoint, None)
        .err()
        .expect("empty token should be rejected");

    assert_eq!(error, ProfileSourceError::InvalidCredential);
    assert_eq!(error.kind(), ErrorKind::InvalidCredential);
}

#[tokio::test]
async fn non_success_status_is_reported_with_body_preview() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(401).set_body_string(
            r#"{"errorCode": 0, "message": "Invalid access token.", "status": 401}"#,
        ))
        .expect(1)
        .mount(&server)
        .await;

    let error = source_for(&server)
        .fetch_basic_profile(&FieldSelector::new())
        .await
        .expect_err("401 should fail");

    assert_eq!(error.kind(), ErrorKind::TransportOrDecode);
    match error {
        ProfileSourceError::Status { status, message } => {
            assert_eq!(status, 401);
            assert!(message.contains("Invalid access token."));
        }
        other => panic!("expected Status error, got {other:?}"),
    }
}

#[tokio::test]
async fn malformed_body_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>maintenance</html>"))
        .mount(&server)
        .await;

    let error = source_for(&server)
        .fetch_basic_profile(&FieldSelector::new())
        .await
        .expect_err("HTML body should fail to decode");

    assert!(matches!(error, ProfileSourceError::Decode { .. }));
    assert_eq!(error.kind(), ErrorKind::TransportOrDecode);
}

#[tokio::test]
async fn null_body_yields_an_empty_profile() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("null", "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let profile = source_for(&server)
        .fetch_basic_profile(&FieldSelector::all())
        .await
        .expect("null body should decode");

    assert_eq!(profile, Profile::default());
}

#[tokio::test]
async fn slow_responses_hit_the_configured_timeout() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_string("{}")
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let endpoint = Url::parse(&server.uri()).expect("fixture server URI should parse");
    let source = LinkedInHttpSource::with_options(TOKEN, endpoint, Some(Duration::from_millis(100)))
        .expect("adapter should build");
    let error = source
        .fetch_basic_profile(&FieldSelector::new())
        .await
        .expect_err("request should time out");

    assert!(matches!(error, ProfileSourceError::Transport { .. }));
}

#[tokio::test]
async fn one_client_serves_concurrent_callers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"id":"abc123"}"#))
        .expect(2)
        .mount(&server)
        .await;

    let source = source_for(&server);
    let selector = FieldSelector::from_fields(["id"]);
    let (first, second) = tokio::join!(
        source.fetch_basic_profile(&selector),
        source.fetch_basic_profile(&selector),
    );

    assert_eq!(first.expect("first fetch").id.as_deref(), Some("abc123"));
    assert_eq!(second.expect("second fetch").id.as_deref(), Some("abc123"));
}
