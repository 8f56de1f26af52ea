use std::env;

use serde::{Deserialize, Serialize};

fn default_min_reading_chars() -> usize {
    3
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct MatcherConfig {
    /// Readings must be strictly longer than this to be reported.
    /// Acts as a floor: values below 3 are raised to 3 by the matcher.
    #[serde(default = "default_min_reading_chars")]
    pub min_reading_chars: usize,
}

impl MatcherConfig {
    pub fn new() -> Self {
        let min_reading_chars = env::var("JEXPR_MIN_READING_CHARS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_else(default_min_reading_chars);

        Self { min_reading_chars }
    }
}

impl Default for MatcherConfig {
    fn default() -> Self {
        Self {
            min_reading_chars: default_min_reading_chars(),
        }
    }
}
