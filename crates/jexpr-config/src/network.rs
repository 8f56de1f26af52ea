use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

fn default_timeout_seconds() -> u64 {
    30
}

fn default_user_agent() -> String {
    concat!("jexpr/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Settings for fetching pages given with `--url`
#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct NetworkConfig {
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

impl NetworkConfig {
    pub fn new() -> Self {
        let timeout_seconds = env::var("JEXPR_FETCH_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_timeout_seconds);

        let user_agent = env::var("JEXPR_USER_AGENT").unwrap_or_else(|_| default_user_agent());

        Self {
            timeout_seconds,
            user_agent,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            timeout_seconds: default_timeout_seconds(),
            user_agent: default_user_agent(),
        }
    }
}
