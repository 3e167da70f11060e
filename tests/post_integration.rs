use crier::CommunityKind;
use crier::api::ApiClient;
use crier::error::CrierError;
use crier::resolver::Resolver;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ok_body(body: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_string(body.to_string())
}

#[tokio::test]
async fn test_resolve_and_post_to_channel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .and(query_param("token", "T1"))
        .respond_with(ok_body(
            r#"{"ok":true,"channels":[{"id":"C1","name":"general"}]}"#,
        ))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/chat.postMessage"))
        .and(query_param("channel", "C1"))
        .and(query_param("text", "hi"))
        .respond_with(ok_body(r#"{"ok":true,"ts":"1503435956.000247"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    let resolver = Resolver::new(&client);

    let community = resolver.resolve("channel", "general").await.unwrap();
    assert_eq!(community.id, "C1");
    assert_eq!(community.label(), "#general");

    client.post_message(&community.id, "hi").await.unwrap();
}

#[tokio::test]
async fn test_resolve_group_by_prefix() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/groups.list"))
        .and(query_param("token", "T1"))
        .respond_with(ok_body(r#"{"ok":true,"groups":[{"id":"G9","name":"ops"}]}"#))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    let resolver = Resolver::new(&client);

    let community = resolver.resolve("gro", "ops").await.unwrap();
    assert_eq!(community.id, "G9");
    assert_eq!(community.kind, CommunityKind::Group);
    assert_eq!(community.label(), "ops group");
}

#[tokio::test]
async fn test_unknown_name_makes_no_post_call() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .respond_with(ok_body(
            r#"{"ok":true,"channels":[{"id":"C1","name":"general"}]}"#,
        ))
        .mount(&mock_server)
        .await;

    // The pipeline must stop at the failed lookup.
    Mock::given(method("GET"))
        .and(path("/api/chat.postMessage"))
        .respond_with(ok_body(r#"{"ok":true}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    let resolver = Resolver::new(&client);

    let result = resolver.resolve("channel", "nope").await;
    match result {
        Err(CrierError::TargetNotFound { kind, name }) => {
            assert_eq!(kind, CommunityKind::Channel);
            assert_eq!(name, "nope");
        }
        other => panic!("Expected target not found, got {other:?}"),
    }
}

#[tokio::test]
async fn test_list_failure_is_terminal() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .respond_with(ok_body(r#"{"ok":false,"error":"invalid_auth"}"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/chat.postMessage"))
        .respond_with(ok_body(r#"{"ok":true}"#))
        .expect(0)
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    let resolver = Resolver::new(&client);

    let result = resolver.resolve("channel", "general").await;
    match result {
        Err(CrierError::Remote(reason)) => assert_eq!(reason, "invalid_auth"),
        other => panic!("Expected remote error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_empty_list_and_missing_key_stay_distinct() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .respond_with(ok_body(r#"{"ok":true,"channels":[]}"#))
        .mount(&mock_server)
        .await;

    Mock::given(method("GET"))
        .and(path("/api/groups.list"))
        .respond_with(ok_body(r#"{"ok":true}"#))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");

    let channels = client.list_communities(CommunityKind::Channel).await;
    assert_eq!(channels.unwrap(), vec![]);

    let groups = client.list_communities(CommunityKind::Group).await;
    assert!(matches!(groups, Err(CrierError::InvalidResponse(_))));
}

#[tokio::test]
async fn test_posted_text_is_percent_encoded_on_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/chat.postMessage"))
        .respond_with(ok_body(r#"{"ok":true}"#))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    client.post_message("C1", "hi there&more").await.unwrap();

    let requests = mock_server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);

    let raw_query = requests[0].url.query().unwrap();
    // The space and ampersand travel encoded and do not split the query.
    assert!(raw_query.contains("text=hi%20there%26more"), "query was: {raw_query}");

    let text: String = requests[0]
        .url
        .query_pairs()
        .find(|(key, _)| key == "text")
        .map(|(_, value)| value.into_owned())
        .unwrap();
    assert_eq!(text, "hi there&more");
}

#[tokio::test]
async fn test_records_with_missing_fields_default_to_empty() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/channels.list"))
        .respond_with(ok_body(
            r#"{"ok":true,"channels":[{"name":"no-id"},{"id":"C2"},{}]}"#,
        ))
        .mount(&mock_server)
        .await;

    let client = ApiClient::with_base_url(&mock_server.uri(), "T1");
    let records = client
        .list_communities(CommunityKind::Channel)
        .await
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].id, "");
    assert_eq!(records[0].name, "no-id");
    assert_eq!(records[1].id, "C2");
    assert_eq!(records[1].name, "");
    assert_eq!(records[2].id, "");
    assert_eq!(records[2].name, "");
}
