use axum::{http::Uri, Json};
use serde::Serialize;
use service_core::error::AppError;
use service_core::extract::JsonBody;

use crate::models::IntentNotification;
use crate::services::record_intent;

#[derive(Debug, Serialize)]
pub struct IntentAck {
    pub status: &'static str,
}

/// `POST /intent` and its `/callback/intent` alias.
///
/// Both routes share this handler so they cannot drift apart. The payload is
/// logged and acknowledged; nothing is stored.
#[tracing::instrument(skip_all)]
pub async fn receive_intent(
    uri: Uri,
    JsonBody(intent): JsonBody<IntentNotification>,
) -> Result<Json<IntentAck>, AppError> {
    tracing::info!(
        path = uri.path(),
        payload = %intent.0,
        category = ?intent.category(),
        reason = intent.reason().unwrap_or("-"),
        call_id = intent.call_id().unwrap_or("-"),
        "Intent notification received"
    );
    record_intent(intent.category_label());

    Ok(Json(IntentAck { status: "ok" }))
}
