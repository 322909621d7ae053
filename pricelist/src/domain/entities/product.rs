//! Product feed entities
//!
//! Records served by the catalogue backend's `*_get_all` endpoints, wrapped
//! in the backend's `{ "value": ..., "error": ... }` envelope.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Number, Value};

use crate::error::FeedError;

/// One catalogue entry (material or product)
///
/// Fields are read leniently: any scalar is kept as its text (`"150"` and
/// `150` both give `150`), while a missing field, `null`, an array or an
/// object shows as empty text. Only a record that is not an object at all
/// rejects the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    #[serde(default, deserialize_with = "scalar_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub cost: Option<String>,
    #[serde(default, deserialize_with = "scalar_text")]
    pub matherial_group: Option<String>,
}

impl ProductRecord {
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    pub fn display_group(&self) -> &str {
        self.matherial_group.as_deref().unwrap_or_default()
    }

    /// Price label, e.g. `150 грн.`
    pub fn price_label(&self, currency_suffix: &str) -> String {
        format!("{} {}", self.cost.as_deref().unwrap_or_default(), currency_suffix)
    }
}

fn scalar_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(format_number(&n)),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

/// Integral numbers print without a fractional part, even when the backend
/// sent them as floats (`150.0` -> `150`).
fn format_number(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_default()
    }
}

/// The feed envelope
///
/// Built only through `from_json`; `Serialize` produces the backend's wire shape.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FeedResponse {
    pub value: Vec<ProductRecord>,
    pub error: String,
}

impl FeedResponse {
    /// Parse and shape-check a response body.
    ///
    /// The whole payload is validated before anything is returned, so a
    /// caller never sees half a feed. `"value": null` is how the backend
    /// encodes an empty result set and yields zero records.
    pub fn from_json(body: &str) -> Result<Self, FeedError> {
        let root: Value = serde_json::from_str(body)
            .map_err(|e| FeedError::MalformedPayload(e.to_string()))?;

        let mut envelope = match root {
            Value::Object(envelope) => envelope,
            other => {
                return Err(FeedError::MalformedPayload(format!(
                    "expected an object, found {}",
                    json_kind(&other)
                )))
            }
        };

        let error = take_error(&mut envelope).unwrap_or_default();

        let value = match envelope.remove("value") {
            None => {
                return Err(FeedError::MalformedPayload(
                    "missing `value` field".to_string(),
                ))
            }
            Some(Value::Null) => Vec::new(),
            Some(records @ Value::Array(_)) => serde_json::from_value(records)
                .map_err(|e| FeedError::MalformedPayload(format!("invalid record: {}", e)))?,
            Some(other) => {
                return Err(FeedError::MalformedPayload(format!(
                    "`value` must be an array, found {}",
                    json_kind(&other)
                )))
            }
        };

        Ok(Self { value, error })
    }

    /// Extract the backend's error text from a failure body, if there is one.
    pub fn error_detail(body: &str) -> Option<String> {
        match serde_json::from_str::<Value>(body) {
            Ok(Value::Object(mut envelope)) => take_error(&mut envelope),
            _ => None,
        }
    }
}

fn take_error(envelope: &mut Map<String, Value>) -> Option<String> {
    match envelope.remove("error") {
        Some(Value::String(s)) if !s.is_empty() => Some(s),
        _ => None,
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
