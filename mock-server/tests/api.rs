use axum::http::{self, Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, BrazilianState, Stub, STATES_PATH};
use tower::ServiceExt;

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn states_request(accept: Option<&str>) -> Request<String> {
    let mut builder = Request::builder().uri(STATES_PATH);
    if let Some(accept) = accept {
        builder = builder.header(http::header::ACCEPT, accept);
    }
    builder.body(String::new()).unwrap()
}

// --- default stub ---

#[tokio::test]
async fn list_states_returns_latin1_json() {
    let resp = app()
        .oneshot(states_request(Some("application/json")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(
        resp.headers()[http::header::CONTENT_TYPE],
        "application/json;charset=ISO-8859-1"
    );
    let body = body_bytes(resp).await;
    assert!(
        std::str::from_utf8(&body).is_err(),
        "accented names must not be UTF-8 encoded"
    );

    let text: String = body.iter().map(|&b| char::from(b)).collect();
    let states: Vec<BrazilianState> = serde_json::from_str(&text).unwrap();
    assert_eq!(states.len(), 27);
    assert!(states.contains(&BrazilianState::new("SP", "São Paulo")));
}

#[tokio::test]
async fn list_states_without_accept_is_served() {
    let resp = app().oneshot(states_request(None)).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

#[tokio::test]
async fn list_states_rejects_non_json_accept() {
    let resp = app()
        .oneshot(states_request(Some("text/html")))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_ACCEPTABLE);
}

#[tokio::test]
async fn unknown_path_is_not_found() {
    let resp = app()
        .oneshot(
            Request::builder()
                .uri("/dummyserver/rest/city")
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn post_is_not_allowed() {
    let resp = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(STATES_PATH)
                .body(String::new())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);
}

// --- configured stubs ---

#[tokio::test]
async fn raw_stub_passes_status_and_body_through() {
    let stub = Stub::raw(StatusCode::INTERNAL_SERVER_ERROR, "boom");
    let resp = app_with(stub)
        .oneshot(states_request(Some("application/json")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_bytes(resp).await.as_ref(), b"boom");
}

#[tokio::test]
async fn empty_states_stub_serves_empty_array() {
    let resp = app_with(Stub::states(&[]))
        .oneshot(states_request(Some("application/json")))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    assert_eq!(body_bytes(resp).await.as_ref(), b"[]");
}
