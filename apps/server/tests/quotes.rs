use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use quotebook_core::quotes::Quote;
use quotebook_server::{api::app_router, build_state, config::Config, AppState};
use quotebook_storage_memory::quotes::{QuoteRepository, SEED_QUOTES};
use tower::ServiceExt;

fn seeded_app() -> Router {
    let state = build_state().unwrap();
    app_router(state, &Config::default())
}

async fn send(app: &Router, method: Method, uri: &str) -> (StatusCode, String, String) {
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string())
        .unwrap_or_default();
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, String::from_utf8(body.to_vec()).unwrap())
}

fn wrapped(id: i32, text: &str) -> String {
    serde_json::json!({ "QuoteObject": { "id": id, "quote": text } }).to_string()
}

#[tokio::test]
async fn landing_page_is_plain_text() {
    let app = seeded_app();
    let (status, content_type, body) = send(&app, Method::GET, "/quotes").await;
    assert_eq!(status, StatusCode::OK);
    assert!(content_type.starts_with("text/plain"));
    assert_eq!(
        body,
        "Welcome to Willy Moore's RESTful Web Service Landing Page!"
    );
}

#[tokio::test]
async fn default_page_lists_seed_quotes_one_per_line() {
    let app = seeded_app();
    let (status, content_type, body) = send(&app, Method::GET, "/quotes/getAllQuotes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");

    let expected: String = SEED_QUOTES
        .iter()
        .zip(1..)
        .map(|(text, id)| format!("{}\n", serde_json::json!({ "id": id, "quote": text })))
        .collect();
    assert_eq!(body, expected);
}

#[tokio::test]
async fn explicit_page_selects_positions() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::GET, "/quotes/getAllQuotes?page=2&per_page=2").await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .lines()
        .map(|line| serde_json::from_str::<serde_json::Value>(line).unwrap()["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 4]);
}

#[tokio::test]
async fn page_past_end_is_server_error() {
    let app = seeded_app();
    let (status, _, _) = send(&app, Method::GET, "/quotes/getAllQuotes?page=2&per_page=5").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, _) = send(&app, Method::GET, "/quotes/getAllQuotes?page=0").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn zero_page_size_is_empty() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::GET, "/quotes/getAllQuotes?per_page=0").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());
}

#[tokio::test]
async fn unconvertible_page_is_not_found() {
    let app = seeded_app();
    for uri in [
        "/quotes/getAllQuotes?page=first",
        "/quotes/getAllQuotes?per_page=many",
        "/quotes/getAllQuotes?page=99999999999",
    ] {
        let (status, _, _) = send(&app, Method::GET, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }
}

#[tokio::test]
async fn get_quote_wraps_object() {
    let app = seeded_app();
    let (status, content_type, body) = send(&app, Method::GET, "/quotes/getQuote/4").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type, "application/json");
    assert_eq!(body, wrapped(4, SEED_QUOTES[3]));
}

#[tokio::test]
async fn missing_quote_is_bad_request() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::GET, "/quotes/getQuote/42").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Quote Not Found");
}

#[tokio::test]
async fn added_quote_gets_next_id_and_is_readable() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::POST, "/quotes/addQuote/Test").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, wrapped(6, "Test"));

    let (status, _, fetched) = send(&app, Method::GET, "/quotes/getQuote/6").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, body);
}

#[tokio::test]
async fn added_quote_text_is_percent_decoded() {
    let app = seeded_app();
    let (_, _, body) = send(&app, Method::POST, "/quotes/addQuote/Stay%20hungry%2C%20stay%20foolish").await;
    assert_eq!(body, wrapped(6, "Stay hungry, stay foolish"));
}

#[tokio::test]
async fn update_replaces_text_only_for_target() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::PUT, "/quotes/updateQuote/2/Rewritten").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, wrapped(2, "Rewritten"));

    let (_, _, fetched) = send(&app, Method::GET, "/quotes/getQuote/2").await;
    assert_eq!(fetched, wrapped(2, "Rewritten"));
    let (_, _, other) = send(&app, Method::GET, "/quotes/getQuote/1").await;
    assert_eq!(other, wrapped(1, SEED_QUOTES[0]));
}

#[tokio::test]
async fn update_missing_is_bad_request() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::PUT, "/quotes/updateQuote/9/Nope").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Quote Not Found");
}

#[tokio::test]
async fn delete_confirms_then_quote_is_gone() {
    let app = seeded_app();
    let (status, _, body) = send(&app, Method::DELETE, "/quotes/deleteQuote/3").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Quote 3successfully removed!");

    let (status, _, body) = send(&app, Method::GET, "/quotes/getQuote/3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Quote Not Found");

    let (status, _, body) = send(&app, Method::DELETE, "/quotes/deleteQuote/3").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, "Quote Not Found");
}

#[tokio::test]
async fn ids_are_not_reused_after_delete() {
    let app = seeded_app();
    send(&app, Method::POST, "/quotes/addQuote/six").await;
    send(&app, Method::DELETE, "/quotes/deleteQuote/6").await;
    let (_, _, body) = send(&app, Method::POST, "/quotes/addQuote/seven").await;
    assert_eq!(body, wrapped(7, "seven"));
}

#[tokio::test]
async fn delete_shifts_later_positions() {
    let app = seeded_app();
    send(&app, Method::DELETE, "/quotes/deleteQuote/1").await;

    // Four quotes remain, so a full default page no longer fits.
    let (status, _, _) = send(&app, Method::GET, "/quotes/getAllQuotes").await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let (status, _, body) = send(&app, Method::GET, "/quotes/getAllQuotes?per_page=4").await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.lines().next().unwrap().contains("\"id\":2"));
}

#[tokio::test]
async fn unconvertible_id_is_not_found() {
    let app = seeded_app();
    for (method, uri) in [
        (Method::GET, "/quotes/getQuote/three"),
        (Method::GET, "/quotes/getQuote/99999999999"),
        (Method::PUT, "/quotes/updateQuote/two/Rewritten"),
        (Method::DELETE, "/quotes/deleteQuote/3.5"),
    ] {
        let (status, _, _) = send(&app, method, uri).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "{uri}");
    }

    // Nothing was touched by the rejected requests.
    let (status, _, body) = send(&app, Method::GET, "/quotes/getAllQuotes").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count(), 5);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_adds_receive_distinct_consecutive_ids() {
    const ADDS: i64 = 50;
    let app = seeded_app();

    let handles: Vec<_> = (0..ADDS)
        .map(|i| {
            let app = app.clone();
            tokio::spawn(async move {
                let (status, _, body) =
                    send(&app, Method::POST, &format!("/quotes/addQuote/q{i}")).await;
                assert_eq!(status, StatusCode::OK);
                let value: serde_json::Value = serde_json::from_str(&body).unwrap();
                value["QuoteObject"]["id"].as_i64().unwrap()
            })
        })
        .collect();

    let mut ids = Vec::new();
    for handle in handles {
        ids.push(handle.await.unwrap());
    }
    ids.sort_unstable();
    assert_eq!(ids, (6..6 + ADDS).collect::<Vec<_>>());

    let (status, _, body) = send(
        &app,
        Method::GET,
        &format!("/quotes/getAllQuotes?per_page={}", 5 + ADDS),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.lines().count() as i64, 5 + ADDS);
}

#[tokio::test]
async fn router_serves_custom_store() {
    let repository = QuoteRepository::new(vec![Quote::new(10, "only")]).unwrap();
    let app = app_router(
        AppState::with_repository(Arc::new(repository)),
        &Config::default(),
    );
    let (_, _, body) = send(&app, Method::GET, "/quotes/getAllQuotes?per_page=1").await;
    assert_eq!(body, "{\"id\":10,\"quote\":\"only\"}\n");

    let (_, _, body) = send(&app, Method::POST, "/quotes/addQuote/next").await;
    assert_eq!(body, wrapped(2, "next"));
}
