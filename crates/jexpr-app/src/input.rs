use std::fs;
use std::path::{Path, PathBuf};

use jexpr_config::network::NetworkConfig;
use jexpr_fetch::{FetchError, FetchOptions, TextFetcher, WebTextFetcher};
use jexpr_lang_japanese::contains_japanese;

/// Where the text to search comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    File(PathBuf),
    Url(String),
}

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("The input file could not be found: {0}")]
    FileNotFound(String),

    #[error("The input file is empty: {0}")]
    EmptyFile(String),

    #[error("Failed to read {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to fetch page: {0}")]
    Fetch(#[from] FetchError),
}

/// Resolve `source` into one block of text
pub async fn acquire(source: &InputSource, network: &NetworkConfig) -> Result<String, InputError> {
    match source {
        InputSource::File(path) => read_text_file(path),
        InputSource::Url(url) => {
            let fetcher = WebTextFetcher::new(FetchOptions {
                timeout: network.timeout(),
                user_agent: network.user_agent.clone(),
            })?
            .keep(contains_japanese);

            fetch_text(&fetcher, url).await
        }
    }
}

/// Read a local text file, refusing missing or zero-length files
pub fn read_text_file(path: &Path) -> Result<String, InputError> {
    if !path.is_file() {
        return Err(InputError::FileNotFound(path.display().to_string()));
    }

    let text = fs::read_to_string(path).map_err(|source| InputError::Read {
        path: path.display().to_string(),
        source,
    })?;

    if text.is_empty() {
        return Err(InputError::EmptyFile(path.display().to_string()));
    }

    tracing::info!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}

pub async fn fetch_text(fetcher: &dyn TextFetcher, url: &str) -> Result<String, InputError> {
    let text = fetcher.fetch_text(url).await?;
    tracing::info!("Fetched {} bytes of text from {}", text.len(), url);
    Ok(text)
}
