use std::time::Duration;

use newsreader_engine::{FailureKind, FetchSettings, Fetcher, ReqwestFetcher, SearchQuery};
use pretty_assertions::assert_eq;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const FRONT_PAGE_BODY: &str = r#"{
    "hits": [
        {"objectID": "101", "title": "Show HN: a thing", "url": "https://thing.example",
         "author": "alice", "created_at": "2024-03-01T10:00:00.000Z", "points": 120, "num_comments": 45},
        {"objectID": "102", "title": "Ask HN: why?", "url": null,
         "author": "bob", "created_at": "2024-03-01T09:00:00.000Z", "points": 12, "num_comments": 3}
    ],
    "nbHits": 2,
    "page": 0
}"#;

fn fetcher() -> ReqwestFetcher {
    ReqwestFetcher::new(FetchSettings::default()).expect("client")
}

#[tokio::test]
async fn front_page_hits_are_decoded() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/search"))
        .and(query_param("tags", "front_page"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FRONT_PAGE_BODY, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new(&format!("{}/api/v1/search", server.uri())).unwrap();
    let hits = fetcher()
        .fetch(query.front_page().as_str())
        .await
        .expect("fetch ok");

    let ids: Vec<_> = hits.iter().map(|hit| hit.object_id.as_str()).collect();
    assert_eq!(ids, vec!["101", "102"]);
    assert_eq!(hits[0].display_title(), "Show HN: a thing");
    assert_eq!(hits[0].points, Some(120));
    assert_eq!(hits[1].link(), "https://news.ycombinator.com/item?id=102");
}

#[tokio::test]
async fn keyword_request_carries_exact_query_parameters() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("query", "rust & tokio"))
        .and(query_param("page", "1"))
        .and(query_param("hitsPerPage", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"hits":[]}"#, "application/json"))
        .expect(1)
        .mount(&server)
        .await;

    let query = SearchQuery::new(&format!("{}/search", server.uri())).unwrap();
    let hits = fetcher()
        .fetch(query.keyword("rust & tokio").as_str())
        .await
        .expect("empty result is still a success");

    assert!(hits.is_empty());
}

#[tokio::test]
async fn http_status_failure_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch(&format!("{}/search", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::HttpStatus(503));
    assert!(err.to_string().contains("503"));
}

#[tokio::test]
async fn non_json_body_is_malformed() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw("<html>maintenance</html>", "text/html"))
        .mount(&server)
        .await;

    let err = fetcher()
        .fetch(&format!("{}/search", server.uri()))
        .await
        .unwrap_err();

    assert_eq!(err.kind, FailureKind::MalformedResponse);
}

#[tokio::test]
async fn invalid_url_fails_without_network() {
    let err = fetcher().fetch("not a url").await.unwrap_err();
    assert_eq!(err.kind, FailureKind::InvalidUrl);
}

#[tokio::test]
async fn connection_refused_is_a_network_error() {
    let err = fetcher()
        .fetch("http://127.0.0.1:1/search")
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Network);
}

#[tokio::test]
async fn configured_timeout_applies() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_delay(Duration::from_millis(500))
                .set_body_raw(r#"{"hits":[]}"#, "application/json"),
        )
        .mount(&server)
        .await;

    let settings = FetchSettings {
        request_timeout: Some(Duration::from_millis(50)),
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();

    let err = fetcher
        .fetch(&format!("{}/search", server.uri()))
        .await
        .unwrap_err();
    assert_eq!(err.kind, FailureKind::Timeout);
}

#[tokio::test]
async fn oversized_body_is_rejected() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(FRONT_PAGE_BODY, "application/json"))
        .mount(&server)
        .await;

    let settings = FetchSettings {
        max_bytes: 16,
        ..FetchSettings::default()
    };
    let fetcher = ReqwestFetcher::new(settings).unwrap();

    let err = fetcher
        .fetch(&format!("{}/search", server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err.kind, FailureKind::TooLarge { max_bytes: 16, .. }));
}
