use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use url::Url;

use super::models::{ContentEnvelope, ContentItem};
use crate::config::SourceConfig;
use crate::{Error, Result};

const MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;
const CLIENT_USER_AGENT: &str = concat!("vitrine/", env!("CARGO_PKG_VERSION"));

/// Anything that can deliver the posts of a collection
#[async_trait::async_trait]
pub trait ContentSource: Send + Sync {
    /// Fetch every item of `collection`, in source order
    async fn fetch(&self, collection: &str) -> Result<Vec<ContentItem>>;
}

/// Content source backed by a headless CMS REST API
pub struct HttpContentSource {
    client: Client,
    base_url: Url,
}

impl HttpContentSource {
    /// Create a new source from configuration
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Self::build_client(config.request_timeout_secs)?;
        let base_url = Url::parse(config.base_url.trim_end_matches('/'))?;

        Ok(Self { client, base_url })
    }

    fn build_client(timeout_secs: u64) -> Result<Client> {
        Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .gzip(true)
            .deflate(true)
            .brotli(true)
            .default_headers(Self::build_headers())
            .build()
            .map_err(Error::Http)
    }

    fn build_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));
        headers
    }

    /// Build `<base>/api/<collection>?populate=*`
    pub fn collection_url(&self, collection: &str) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| Error::Config(format!("Base URL cannot hold a path: {}", self.base_url)))?
            .pop_if_empty()
            .push("api")
            .push(collection);
        url.query_pairs_mut().append_pair("populate", "*");
        Ok(url)
    }
}

/// Decode a collection payload
pub(crate) fn parse_envelope(body: &[u8]) -> Result<Vec<ContentItem>> {
    if body.len() > MAX_PAYLOAD_BYTES {
        return Err(Error::ContentSource(format!(
            "Payload too large ({} bytes)",
            body.len()
        )));
    }
    let envelope: ContentEnvelope = serde_json::from_slice(body)?;
    Ok(envelope.data)
}

#[async_trait::async_trait]
impl ContentSource for HttpContentSource {
    async fn fetch(&self, collection: &str) -> Result<Vec<ContentItem>> {
        let url = self.collection_url(collection)?;

        tracing::info!("Fetching content from: {}", url);

        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        if !status.is_success() {
            return Err(Error::ContentSource(format!(
                "HTTP {} for URL: {}",
                status, url
            )));
        }

        let body = response.bytes().await?;
        let items = parse_envelope(&body)?;

        tracing::debug!("Received {} items from {}", items.len(), url);

        Ok(items)
    }
}
