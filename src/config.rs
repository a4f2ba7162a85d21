//! Deployment configuration.
//!
//! The dashboard ships with two pre-defined upstream accounts: a production
//! one used on Heroku and a development one pointed at a locally running
//! service. Which pair applies is decided once at startup and the resolved
//! value is passed explicitly into the web layer.

use std::env;

const PROD_API_KEY: &str = "3384f7e5-e195-4c2f-94ac-5a1c7ae37b33";
const DEV_API_KEY: &str = "a7633f06-b1b3-4c34-beaf-36e8905ea9ed";

const PROD_BASE_URL: &str = "http://www.passtools.com";
const DEV_BASE_URL: &str = "http://localhost:3000";
const DEV_API_URL: &str = "http://localhost:8080/v1";

/// Heroku dynos carry this segment in `PATH`.
const HEROKU_PATH_MARKER: &str = "/app/.heroku/";

/// Resolved deployment configuration, immutable after startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub api_key: String,

    /// Public site of the upstream vendor, linked from the views.
    pub base_url: String,

    /// Overrides the default upstream API endpoint, used in development.
    pub api_url: Option<String>,
}

impl Config {
    /// Classifies the deployment from the process environment.
    ///
    /// There are no error conditions: when the production marker is absent,
    /// the development pair is silently selected.
    pub fn from_env() -> Self {
        Self::resolve(&env::var("PATH").unwrap_or_default())
    }

    fn resolve(path: &str) -> Self {
        if path.contains(HEROKU_PATH_MARKER) {
            Self {
                api_key: PROD_API_KEY.to_string(),
                base_url: PROD_BASE_URL.to_string(),
                api_url: None,
            }
        } else {
            Self {
                api_key: DEV_API_KEY.to_string(),
                base_url: DEV_BASE_URL.to_string(),
                api_url: Some(DEV_API_URL.to_string()),
            }
        }
    }
}
