//! Session selection.
//!
//! [`select_session`] maps call metadata to the configuration the proxy
//! applies for that call. It performs no I/O and reads nothing but its
//! arguments, so per-caller routing (by `from` or `uri`) belongs here.

use crate::models::{CallbackRequest, SessionConfig, SessionProfile};

/// Every caller currently receives the server's profile unchanged.
pub fn select_session(profile: &SessionProfile, _request: &CallbackRequest) -> SessionConfig {
    SessionConfig {
        system_instructions: profile.system_instructions.clone(),
        voice: profile.voice.clone(),
        end_on_intent: profile.end_on_intent,
        intent_timeout_seconds: profile.intent_timeout_seconds,
        intent_end_categories: profile.intent_end_categories.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(uri: &str, caller: &str, call_id: &str) -> CallbackRequest {
        CallbackRequest {
            uri: Some(uri.to_string()),
            caller: Some(caller.to_string()),
            call_id: Some(call_id.to_string()),
        }
    }

    #[test]
    fn default_profile_yields_fixed_config() {
        let config = select_session(&SessionProfile::default(), &CallbackRequest::default());

        assert!(config.has_instructions());
        assert!(config.system_instructions.contains("[COLLECTION]"));
        assert_eq!(config.voice.as_deref(), Some("Puck"));
        assert!(config.end_on_intent);
        assert_eq!(config.intent_timeout_seconds, 30);
        assert_eq!(config.intent_end_categories.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn selection_ignores_call_metadata() {
        let profile = SessionProfile::default();
        let anonymous = select_session(&profile, &CallbackRequest::default());
        let known = select_session(&profile, &request("sip:x", "+1555", "abc"));
        assert_eq!(anonymous, known);
    }

    #[test]
    fn selection_is_deterministic() {
        let profile = SessionProfile::default();
        let request = request("sip:x", "+1555", "abc");
        let first = select_session(&profile, &request);
        for _ in 0..10 {
            assert_eq!(select_session(&profile, &request), first);
        }
    }

    #[test]
    fn selection_follows_profile() {
        let profile = SessionProfile {
            system_instructions: "Be brief.".to_string(),
            voice: None,
            end_on_intent: false,
            intent_timeout_seconds: 0,
            intent_end_categories: [1, 2].into_iter().collect(),
        };
        let config = select_session(&profile, &CallbackRequest::default());

        assert_eq!(config.system_instructions, "Be brief.");
        assert_eq!(config.voice, None);
        assert!(!config.end_on_intent);
        assert_eq!(config.intent_timeout_seconds, 0);
        assert_eq!(config.intent_end_categories.len(), 2);
    }
}
