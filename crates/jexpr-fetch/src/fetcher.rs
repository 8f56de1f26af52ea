use std::time::Duration;

use async_trait::async_trait;

use crate::extract::extract_text;

/// Produces a block of text for the matcher from a remote location
#[async_trait]
pub trait TextFetcher: Send + Sync {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError>;
}

#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub timeout: Duration,
    pub user_agent: String,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: concat!("jexpr/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

type FragmentFilter = Box<dyn Fn(&str) -> bool + Send + Sync>;

/// Fetches an HTML page and keeps the text fragments accepted by its filter
pub struct WebTextFetcher {
    client: reqwest::Client,
    keep: FragmentFilter,
}

impl WebTextFetcher {
    pub fn new(options: FetchOptions) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(options.user_agent)
            .build()?;

        Ok(Self {
            client,
            keep: Box::new(|_| true),
        })
    }

    /// Only fragments for which `filter` holds end up in the text
    pub fn keep(mut self, filter: impl Fn(&str) -> bool + Send + Sync + 'static) -> Self {
        self.keep = Box::new(filter);
        self
    }
}

#[async_trait]
impl TextFetcher for WebTextFetcher {
    async fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let parsed =
            reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl(format!("{url}: {e}")))?;

        tracing::info!("Fetching {}", parsed);

        let response = self.client.get(parsed).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let html = response.text().await?;
        tracing::debug!("Fetched {} bytes from {}", html.len(), url);

        let text = extract_text(&html, |fragment| (self.keep)(fragment));
        if text.is_empty() {
            return Err(FetchError::NoText(url.to_string()));
        }

        Ok(text)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    #[error("No usable text found at {0}")]
    NoText(String),
}
