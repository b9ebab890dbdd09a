use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Intent report posted by the proxy after (or during) a call.
///
/// The payload is opaque telemetry and is never validated. The accessors only
/// pick out well-known fields for logs and metric labels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IntentNotification(pub Value);

impl IntentNotification {
    /// Detected intent category (1-5 as produced by the proxy), if present.
    pub fn category(&self) -> Option<i64> {
        let category = self.0.get("category")?;
        category
            .as_i64()
            .or_else(|| category.as_str().and_then(|s| s.trim().parse().ok()))
    }

    pub fn reason(&self) -> Option<&str> {
        self.0.get("reason").and_then(Value::as_str)
    }

    pub fn call_id(&self) -> Option<&str> {
        self.0.get("call_id").and_then(Value::as_str)
    }

    /// Metric label for the category; anything outside 1-5 collapses to
    /// `unknown`.
    pub fn category_label(&self) -> String {
        match self.category() {
            Some(c @ 1..=5) => c.to_string(),
            _ => "unknown".to_string(),
        }
    }
}
