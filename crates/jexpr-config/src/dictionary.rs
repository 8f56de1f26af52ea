use std::env;

use serde::{Deserialize, Serialize};

fn default_path() -> String {
    "data_raw/json/expr.json".to_string()
}

fn default_format() -> String {
    "expressions".to_string()
}

#[derive(Debug, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DictionaryConfig {
    /// Lexicon file handed to the loader
    #[serde(default = "default_path")]
    pub path: String,
    /// `expressions` (flat export) or `jmdict` (jmdict-simplified)
    #[serde(default = "default_format")]
    pub format: String,
}

impl DictionaryConfig {
    pub fn new() -> Self {
        let path = env::var("JEXPR_DICT_PATH").unwrap_or_else(|_| default_path());
        let format = env::var("JEXPR_DICT_FORMAT").unwrap_or_else(|_| default_format());

        Self { path, format }
    }
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            path: default_path(),
            format: default_format(),
        }
    }
}
