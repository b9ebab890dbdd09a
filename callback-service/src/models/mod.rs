pub mod callback;
pub mod intent;
pub mod session;

pub use callback::CallbackRequest;
pub use intent::IntentNotification;
pub use session::{SessionConfig, SessionProfile, COLLECTION_INSTRUCTIONS};
