use std::sync::Arc;

use axum::{
    extract::State,
    http::{header, HeaderMap},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

/// Route the states list is served on.
pub const STATES_PATH: &str = "/dummyserver/rest/state";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrazilianState {
    pub short_name: String,
    pub name: String,
}

impl BrazilianState {
    pub fn new(short_name: &str, name: &str) -> Self {
        Self {
            short_name: short_name.to_string(),
            name: name.to_string(),
        }
    }
}

/// The 27 federative units, in the order the endpoint returns them.
pub fn federative_units() -> Vec<BrazilianState> {
    [
        ("AC", "Acre"),
        ("AL", "Alagoas"),
        ("AP", "Amapá"),
        ("AM", "Amazonas"),
        ("BA", "Bahia"),
        ("CE", "Ceará"),
        ("DF", "Distrito Federal"),
        ("ES", "Espírito Santo"),
        ("GO", "Goiás"),
        ("MA", "Maranhão"),
        ("MT", "Mato Grosso"),
        ("MS", "Mato Grosso do Sul"),
        ("MG", "Minas Gerais"),
        ("PA", "Pará"),
        ("PB", "Paraíba"),
        ("PR", "Paraná"),
        ("PE", "Pernambuco"),
        ("PI", "Piauí"),
        ("RJ", "Rio de Janeiro"),
        ("RN", "Rio Grande do Norte"),
        ("RS", "Rio Grande do Sul"),
        ("RO", "Rondônia"),
        ("RR", "Roraima"),
        ("SC", "Santa Catarina"),
        ("SP", "São Paulo"),
        ("SE", "Sergipe"),
        ("TO", "Tocantins"),
    ]
    .into_iter()
    .map(|(short_name, name)| BrazilianState::new(short_name, name))
    .collect()
}

/// Encode `text` as ISO-8859-1, replacing anything above U+00FF with `?`.
pub fn encode_latin1(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).unwrap_or(b'?'))
        .collect()
}

/// What the states route answers with.
#[derive(Clone, Debug)]
pub struct Stub {
    pub status: StatusCode,
    pub content_type: String,
    pub body: Vec<u8>,
}

impl Stub {
    /// 200 with `states` serialized as JSON and encoded as ISO-8859-1.
    pub fn states(states: &[BrazilianState]) -> Self {
        let json = serde_json::to_string(states).unwrap_or_else(|_| "[]".to_string());
        Self {
            status: StatusCode::OK,
            content_type: "application/json;charset=ISO-8859-1".to_string(),
            body: encode_latin1(&json),
        }
    }

    /// Arbitrary status and body, labelled as JSON.
    pub fn raw(status: StatusCode, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            content_type: "application/json".to_string(),
            body: body.into(),
        }
    }
}

pub fn app() -> Router {
    app_with(Stub::states(&federative_units()))
}

pub fn app_with(stub: Stub) -> Router {
    Router::new()
        .route(STATES_PATH, get(list_states))
        .with_state(Arc::new(stub))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, stub: Stub) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(stub)).await
}

async fn list_states(State(stub): State<Arc<Stub>>, headers: HeaderMap) -> Response {
    if !accepts_json(&headers) {
        tracing::warn!("rejecting request without an acceptable Accept header");
        return StatusCode::NOT_ACCEPTABLE.into_response();
    }
    (
        stub.status,
        [(header::CONTENT_TYPE, stub.content_type.clone())],
        stub.body.clone(),
    )
        .into_response()
}

/// A missing `Accept` header admits anything.
fn accepts_json(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT) else {
        return true;
    };
    let Ok(accept) = accept.to_str() else {
        return false;
    };
    accept
        .split(',')
        .filter_map(|range| range.split(';').next())
        .map(str::trim)
        .any(|range| matches!(range, "application/json" | "application/*" | "*/*"))
}
