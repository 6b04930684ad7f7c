use std::sync::Arc;
use std::time::Duration;

use crate::app::error::Result;
use crate::client::http_client::HttpNewsClient;
use crate::client::NewsClient;
use crate::config::Config;

pub struct AppContext {
    pub config: Config,
    pub client: Arc<dyn NewsClient + Send + Sync>,
}

impl AppContext {
    pub fn new(config: Config) -> Result<Self> {
        let client: Arc<dyn NewsClient + Send + Sync> = Arc::new(HttpNewsClient::new(
            &config.feed.endpoint,
            Duration::from_secs(config.feed.timeout_secs),
        )?);

        Ok(Self { config, client })
    }

    /// Build a context around an existing client, bypassing HTTP setup.
    pub fn with_client(config: Config, client: Arc<dyn NewsClient + Send + Sync>) -> Self {
        Self { config, client }
    }
}
