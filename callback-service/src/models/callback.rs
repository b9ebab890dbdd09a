use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use service_core::error::AppError;

/// Call metadata the proxy sends when it asks for a session configuration.
///
/// Every field is optional. Unknown fields are ignored, and a known field
/// holding anything other than a string is treated as absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallbackRequest {
    #[serde(default, deserialize_with = "string_or_none")]
    pub uri: Option<String>,
    #[serde(rename = "from", default, deserialize_with = "string_or_none")]
    pub caller: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub call_id: Option<String>,
}

impl CallbackRequest {
    /// Decode a request from an already parsed JSON body.
    ///
    /// Only objects are accepted at the top level.
    pub fn from_payload(payload: Value) -> Result<Self, AppError> {
        if !payload.is_object() {
            return Err(AppError::InvalidJson);
        }
        serde_json::from_value(payload).map_err(|_| AppError::InvalidJson)
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}
