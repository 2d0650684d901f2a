use std::env;
use std::path::PathBuf;

/// Runtime configuration, read from the environment (and `.env` when present).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Address the REST resource binds to.
    pub server_addr: String,
    /// Base URL the entity client talks to.
    pub api_base_url: String,
    /// Prefix for alert headers and translation keys.
    pub app_name: String,
    pub default_language: String,
    /// When set, logs are also written to a daily rolling file here.
    pub log_dir: Option<PathBuf>,
    /// Run the view smoke routine against the served API after startup.
    pub debug_mode: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server_addr: "0.0.0.0:8080".into(),
            api_base_url: "http://localhost:8080".into(),
            app_name: "jhipsterVueApp".into(),
            default_language: "en".into(),
            log_dir: None,
            debug_mode: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        // A missing .env file is fine; real env vars still apply.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            server_addr: get("POINT_SERVER_ADDR").unwrap_or(defaults.server_addr),
            api_base_url: get("POINT_API_BASE_URL").unwrap_or(defaults.api_base_url),
            app_name: get("POINT_APP_NAME").unwrap_or(defaults.app_name),
            default_language: get("POINT_DEFAULT_LANGUAGE").unwrap_or(defaults.default_language),
            log_dir: get("POINT_LOG_DIR").map(PathBuf::from),
            debug_mode: get("POINT_DEBUG_MODE")
                .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(defaults.debug_mode),
        }
    }
}
