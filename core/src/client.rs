//! Stateless request builder and response parser for the states endpoint.
//!
//! # Design
//! `StatesClient` holds only the endpoint URL. `build_list_states` produces
//! an `HttpRequest` and `parse_list_states` consumes an `HttpResponse`; the
//! round-trip in between belongs to a `Transport`. Parsing is all-or-nothing:
//! one bad element fails the whole response.

use serde_json::{Map, Value};

use crate::charset::decode_latin1;
use crate::error::FetchError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::RemoteState;

/// Synchronous, stateless client for the states endpoint.
#[derive(Debug, Clone)]
pub struct StatesClient {
    url: String,
}

impl StatesClient {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn build_list_states(&self) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: self.url.clone(),
            headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }

    /// Turn a response into display items, in array order.
    ///
    /// The body is decoded as ISO-8859-1 regardless of the response's
    /// `Content-Type` charset.
    pub fn parse_list_states(&self, response: HttpResponse) -> Result<Vec<String>, FetchError> {
        if response.status != 200 {
            return Err(FetchError::UnexpectedStatus {
                status: response.status,
            });
        }
        let text = decode_latin1(&response.body);
        let elements: Vec<Map<String, Value>> = serde_json::from_str(&text)?;
        let mut items = Vec::with_capacity(elements.len());
        for object in elements {
            items.push(RemoteState::from_object(object)?.display_item());
        }
        Ok(items)
    }
}
