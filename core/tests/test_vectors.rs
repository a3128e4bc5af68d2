//! Verify request building and response parsing against the JSON vectors in
//! `test-vectors/`.
//!
//! Vector bodies are written as text; each char is turned back into one byte
//! so the parser sees the same ISO-8859-1 payload a server would send.

use states_core::{FetchError, HttpMethod, HttpResponse, StatesClient};

const URL: &str = "http://localhost:8080/dummyserver/rest/state";

fn latin1_bytes(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| u8::try_from(u32::from(c)).expect("vector bodies must be Latin-1"))
        .collect()
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        other => panic!("unknown method: {other}"),
    }
}

#[test]
fn list_states_test_vectors() {
    let raw = include_str!("../../test-vectors/list_states.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = StatesClient::new(URL);

    // Verify build
    let expected_req = &vectors["expected_request"];
    let req = c.build_list_states();
    assert_eq!(req.method, parse_method(expected_req["method"].as_str().unwrap()));
    assert_eq!(req.url, URL);
    let expected_headers: Vec<(String, String)> = expected_req["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let arr = h.as_array().unwrap();
            (arr[0].as_str().unwrap().to_string(), arr[1].as_str().unwrap().to_string())
        })
        .collect();
    assert_eq!(req.headers, expected_headers);

    // Verify parse
    let cases = vectors["cases"].as_array().unwrap();
    assert!(!cases.is_empty());
    for case in cases {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let response = HttpResponse {
            status: sim["status"].as_u64().unwrap() as u16,
            headers: Vec::new(),
            body: latin1_bytes(sim["body"].as_str().unwrap()),
        };
        let result = c.parse_list_states(response);

        if let Some(expected_error) = case.get("expected_error") {
            let err = result.unwrap_err();
            match expected_error.as_str().unwrap() {
                "UnexpectedStatus" => assert!(
                    matches!(err, FetchError::UnexpectedStatus { .. }),
                    "{name}: expected UnexpectedStatus, got {err:?}"
                ),
                "Json" => assert!(
                    matches!(err, FetchError::Json(_)),
                    "{name}: expected Json, got {err:?}"
                ),
                other => panic!("{name}: unknown expected_error: {other}"),
            }
        } else {
            let items = result.unwrap_or_else(|e| panic!("{name}: unexpected error {e}"));
            let expected: Vec<String> =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(items, expected, "{name}: parsed result");
        }
    }
}
