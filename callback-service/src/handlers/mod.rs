//! HTTP handlers for callback-service.

pub mod callback;
pub mod health;
pub mod intent;

pub use callback::session_callback;
pub use health::{health_check, metrics_endpoint, not_found};
pub use intent::receive_intent;
