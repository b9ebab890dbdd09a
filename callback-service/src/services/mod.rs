pub mod metrics;
pub mod selection;

pub use metrics::{get_metrics, init_metrics, record_callback, record_intent};
pub use selection::select_session;
