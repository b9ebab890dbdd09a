use axum::{extract::State, Json};
use serde_json::Value;
use service_core::error::AppError;
use service_core::extract::JsonBody;

use crate::models::{CallbackRequest, SessionConfig};
use crate::services::{record_callback, select_session};
use crate::startup::AppState;

/// `POST /callback`: hand the proxy its session configuration for a call.
#[tracing::instrument(skip_all)]
pub async fn session_callback(
    State(state): State<AppState>,
    body: Result<JsonBody<Value>, AppError>,
) -> Result<Json<SessionConfig>, AppError> {
    let JsonBody(payload) = body.inspect_err(|_| record_callback("invalid_json"))?;

    tracing::info!(payload = %payload, "Callback request received");

    let request = CallbackRequest::from_payload(payload)
        .inspect_err(|_| record_callback("invalid_json"))?;

    let config = select_session(&state.profile, &request);
    if !config.has_instructions() {
        tracing::error!(
            call_id = request.call_id.as_deref().unwrap_or("-"),
            "Selected session configuration has no system_instructions"
        );
        record_callback("missing_instructions");
        return Err(AppError::MissingSystemInstructions);
    }

    tracing::debug!(
        call_id = request.call_id.as_deref().unwrap_or("-"),
        caller = request.caller.as_deref().unwrap_or("-"),
        voice = config.voice.as_deref().unwrap_or("-"),
        "Session configuration selected"
    );
    record_callback("ok");

    Ok(Json(config))
}
