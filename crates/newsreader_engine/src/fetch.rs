use std::collections::HashSet;
use std::time::Duration;

use futures_util::StreamExt;
use newsreader_logging::{news_debug, news_warn};
use serde::Deserialize;

use crate::{FailureKind, FetchError, Hit};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    /// Whole-request deadline. `None` waits for the transport indefinitely.
    pub request_timeout: Option<Duration>,
    pub max_bytes: u64,
    pub user_agent: String,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: None,
            max_bytes: 5 * 1024 * 1024,
            user_agent: concat!("newsreader/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

/// Issues one GET per call and returns the decoded hits. Never retries.
#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<Hit>, FetchError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestFetcher {
    client: reqwest::Client,
    settings: FetchSettings,
}

impl ReqwestFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let mut builder = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .user_agent(settings.user_agent.clone());
        if let Some(timeout) = settings.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { client, settings })
    }

    async fn read_body(&self, response: reqwest::Response) -> Result<Vec<u8>, FetchError> {
        let max_bytes = self.settings.max_bytes;
        if let Some(content_len) = response.content_length() {
            if content_len > max_bytes {
                return Err(too_large(max_bytes, Some(content_len)));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > max_bytes {
                return Err(too_large(max_bytes, Some(next_len)));
            }
            bytes.extend_from_slice(&chunk);
        }
        Ok(bytes)
    }
}

#[async_trait::async_trait]
impl Fetcher for ReqwestFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<Hit>, FetchError> {
        let parsed = reqwest::Url::parse(url)
            .map_err(|err| FetchError::new(FailureKind::InvalidUrl, format!("Invalid URL: {err}")))?;

        news_debug!("GET {}", parsed);
        let response = self
            .client
            .get(parsed)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                format!("Request failed with status {status}"),
            ));
        }

        let body = self.read_body(response).await?;
        decode_hits(&body)
    }
}

#[derive(Deserialize)]
struct SearchResponse {
    hits: Vec<Hit>,
}

/// Decodes a search response body into its hits.
///
/// Repeated `objectID`s within one batch are dropped, keeping the first.
pub fn decode_hits(body: &[u8]) -> Result<Vec<Hit>, FetchError> {
    let response: SearchResponse = serde_json::from_slice(body).map_err(|err| {
        FetchError::new(
            FailureKind::MalformedResponse,
            format!("Unexpected response from the news service: {err}"),
        )
    })?;

    let mut seen = HashSet::with_capacity(response.hits.len());
    let total = response.hits.len();
    let hits: Vec<Hit> = response
        .hits
        .into_iter()
        .filter(|hit| seen.insert(hit.object_id.clone()))
        .collect();
    if hits.len() != total {
        news_warn!("Dropped {} duplicate hits", total - hits.len());
    }
    Ok(hits)
}

fn too_large(max_bytes: u64, actual: Option<u64>) -> FetchError {
    FetchError::new(
        FailureKind::TooLarge { max_bytes, actual },
        format!("Response exceeded {max_bytes} bytes"),
    )
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, format!("Request timed out: {err}"));
    }
    FetchError::new(FailureKind::Network, format!("Network error: {err}"))
}
