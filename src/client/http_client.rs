use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use url::Url;

use crate::app::Result;
use crate::client::NewsClient;
use crate::domain::FeedResponse;

pub struct HttpNewsClient {
    client: Client,
    endpoint: Url,
}

impl HttpNewsClient {
    pub fn new(endpoint: &str, timeout: Duration) -> Result<Self> {
        let endpoint = Url::parse(endpoint)?;
        let client = Client::builder()
            .timeout(timeout)
            .gzip(true)
            .brotli(true)
            .user_agent("frontpage/0.1.0")
            .build()?;

        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl NewsClient for HttpNewsClient {
    async fn top_headlines(&self, country: &str, api_key: &str) -> Result<FeedResponse> {
        tracing::debug!(%country, endpoint = %self.endpoint, "requesting top headlines");

        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("country", country), ("apiKey", api_key)])
            .send()
            .await?;

        response.error_for_status_ref()?;

        let body = response.bytes().await?;
        let feed: FeedResponse = serde_json::from_slice(&body)?;

        Ok(feed)
    }
}
