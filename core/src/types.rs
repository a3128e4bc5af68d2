//! Domain types for the states endpoint.

use serde::{Deserialize, Deserializer};
use serde_json::{Map, Value};

/// One element of the JSON array returned by the states endpoint.
///
/// Both keys are required. Scalar values are taken as text: numbers and
/// booleans are printed, `null` becomes `"null"`, nested values become
/// their compact JSON. Any other keys are ignored.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RemoteState {
    #[serde(deserialize_with = "as_text")]
    pub short_name: String,
    #[serde(deserialize_with = "as_text")]
    pub name: String,
}

fn as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        other => other.to_string(),
    })
}

impl RemoteState {
    /// Read one array element. It must be a JSON object; positional arrays
    /// are rejected even though serde would accept them for a struct.
    pub fn from_object(object: Map<String, Value>) -> Result<Self, serde_json::Error> {
        serde_json::from_value(Value::Object(object))
    }

    /// The row text shown for this state, e.g. `"SP - São Paulo"`.
    pub fn display_item(&self) -> String {
        format!("{} - {}", self.short_name, self.name)
    }
}

/// Result of one fetch, as handed back to the screen.
///
/// Every failure cause is folded into `Failure`; an empty list is a success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    Success(Vec<String>),
    Failure,
}

impl FetchOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, FetchOutcome::Success(_))
    }
}
