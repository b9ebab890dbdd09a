use crate::models::SessionProfile;
use service_core::config as core_config;
use service_core::error::AppError;
use std::env;

#[derive(Debug, Clone)]
pub struct CallbackConfig {
    pub common: core_config::Config,
    pub log_level: String,
    pub otlp_endpoint: Option<String>,
    /// Fixed session profile served to every call.
    pub session: SessionProfile,
}

impl CallbackConfig {
    pub fn load() -> Result<Self, AppError> {
        let common = core_config::Config::load()?;

        Ok(CallbackConfig {
            log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            otlp_endpoint: env::var("OTLP_ENDPOINT").ok().filter(|s| !s.trim().is_empty()),
            ..CallbackConfig::new(common)
        })
    }

    /// Config with default logging and the fixed collection profile.
    pub fn new(common: core_config::Config) -> Self {
        CallbackConfig {
            common,
            log_level: "info".to_string(),
            otlp_endpoint: None,
            session: SessionProfile::default(),
        }
    }
}
