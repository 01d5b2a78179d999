use tokio::time::Duration;

use crate::error::FetchError;
use crate::types::{ApiBrawler, BrawlerListResponse};

pub const DEFAULT_API_URL: &str = "https://api.brawlapi.com/v1/brawlers";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// HTTP client for the BrawlAPI brawler list.
pub struct BrawlApiClient {
    http: reqwest::Client,
    url: String,
}

impl BrawlApiClient {
    pub fn new(url: impl Into<String>) -> Result<Self, FetchError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("brawldex/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Fetch the full brawler list with a single GET.
    ///
    /// Anything other than `200 OK` with a parseable body is an error.
    pub async fn fetch_brawlers(&self) -> Result<Vec<ApiBrawler>, FetchError> {
        log::debug!("GET {}", self.url);
        let resp = self.http.get(&self.url).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if status != reqwest::StatusCode::OK {
            return Err(FetchError::Status {
                status: status.as_u16(),
                body: snippet(&text).to_string(),
            });
        }

        let response: BrawlerListResponse = serde_json::from_str(&text).map_err(|e| {
            FetchError::Api(format!(
                "Failed to parse brawler list: {e}. Response: {}",
                snippet(&text)
            ))
        })?;

        Ok(response.list)
    }
}

/// First 200 characters of a response body, for diagnostics.
fn snippet(text: &str) -> &str {
    match text.char_indices().nth(200) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}
