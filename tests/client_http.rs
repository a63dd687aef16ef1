//! HTTP-level tests for the Apify client against a mock server

use actorkit::actors::{self, Pagination};
use actorkit::{ActorError, ApiConfig, ApifyClient, MarketplaceApi};
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> ApifyClient {
    let config = ApiConfig::new("test-token")
        .unwrap()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_secs(5));
    ApifyClient::new(config).unwrap()
}

#[tokio::test]
async fn test_search_sends_pagination_and_token() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/store"))
        .and(query_param("search", "instagram"))
        .and(query_param("limit", "5"))
        .and(query_param("offset", "10"))
        .and(header("authorization", "Bearer test-token"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {
                "total": 42,
                "offset": 10,
                "limit": 5,
                "items": [
                    {"id": "a1", "name": "instagram-scraper", "username": "apify", "stats": {"totalRuns": 7}}
                ]
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server);
    let results = actors::search_actors(&client, "instagram", Pagination::new(5, 10).unwrap())
        .await
        .unwrap();

    assert_eq!(results.total, 42);
    assert_eq!(results.items[0].full_name(), "apify/instagram-scraper");
}

#[tokio::test]
async fn test_get_actor_uses_tilde_path() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/apify~web-scraper"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "moJRLRc85AitArpNN", "name": "web-scraper"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let id = actors::resolve_actor_id(&client, "apify/web-scraper").await.unwrap();

    assert_eq!(id, "moJRLRc85AitArpNN");
}

#[tokio::test]
async fn test_missing_actor_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/nobody~nothing"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "error": {"type": "record-not-found", "message": "Actor was not found"}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);
    assert!(client.get_actor("nobody/nothing").await.unwrap().is_none());

    let err = actors::resolve_actor_id(&client, "nobody/nothing").await.unwrap_err();
    assert!(matches!(err, ActorError::NotFound { ref id, .. } if id == "nobody/nothing"));
}

#[tokio::test]
async fn test_server_error_is_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/store"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = client.search_store("x", 10, 0).await.unwrap_err();

    assert!(matches!(err, ActorError::Api { status: 503, .. }));
    assert!(err.is_transport());
}

#[tokio::test]
async fn test_timeout_surfaces_as_transport_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/slow"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"data": {"id": "slow"}}))
                .set_delay(Duration::from_secs(2)),
        )
        .mount(&server)
        .await;

    let config = ApiConfig::new("t")
        .unwrap()
        .with_base_url(server.uri())
        .with_timeout(Duration::from_millis(200));
    let client = ApifyClient::new(config).unwrap();

    let err = client.get_actor("slow").await.unwrap_err();
    assert!(matches!(err, ActorError::Http(_)));
}

#[tokio::test]
async fn test_latest_build_flow() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/apify~hello-world"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "hw1", "name": "hello-world"}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/hw1/builds/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"id": "b9", "buildNumber": "0.0.4", "actVersion": {"gitRepoUrl": "https://github.com/apify/hello"}}
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/hw1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"total": 1, "items": [
                {"versionNumber": "0.0", "buildTag": "latest", "gitRepoUrl": "https://github.com/apify/hello-old",
                 "sourceFiles": [{"name": "main.js", "format": "TEXT", "content": "1"}]}
            ]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let build = actors::get_actor_latest_build(&client, "apify/hello-world").await.unwrap();
    assert_eq!(build["buildNumber"], "0.0.4");

    let urls = actors::get_actor_github_urls(&client, "apify/hello-world").await.unwrap();
    assert_eq!(
        urls,
        vec!["https://github.com/apify/hello", "https://github.com/apify/hello-old"]
    );

    let tree = actors::get_actor_file_tree(&client, "apify/hello-world").await.unwrap();
    assert_eq!(serde_json::to_value(&tree).unwrap(), json!({"main.js": null}));
}

#[tokio::test]
async fn test_default_build_not_an_object() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/x1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "x1"}})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/x1/builds/default"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(["not", "an", "object"])))
        .mount(&server)
        .await;

    let client = client_for(&server);
    let err = actors::get_actor_latest_build(&client, "x1").await.unwrap_err();

    assert!(matches!(err, ActorError::MalformedResponse { .. }));
}

#[tokio::test]
async fn test_url_exists_without_credentials() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/apify/crawlee"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let client = client_for(&server);

    assert!(client
        .url_exists(&format!("{}/apify/crawlee", server.uri()))
        .await
        .unwrap());
    assert!(!client
        .url_exists(&format!("{}/apify/missing", server.uri()))
        .await
        .unwrap());

    let requests = server.received_requests().await.unwrap();
    assert!(requests
        .iter()
        .all(|r| !r.headers.contains_key("authorization")));
}

#[tokio::test]
async fn test_nameless_file_in_older_version() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/v1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": {"id": "v1"}})))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/v2/acts/v1/versions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": {"total": 2, "items": [
                {"buildTag": "beta", "sourceFiles": [{"format": "TEXT"}]},
                {"buildTag": "latest", "sourceFiles": [{"name": "main.js", "format": "TEXT"}]}
            ]}
        })))
        .mount(&server)
        .await;

    let client = client_for(&server);

    let versions = actors::list_actor_versions(&client, "v1").await.unwrap();
    assert_eq!(versions.len(), 2);

    let files = actors::get_actor_source_files(&client, "v1").await.unwrap();
    assert_eq!(files.len(), 1);
    assert_eq!(files[0].name, "main.js");
}
