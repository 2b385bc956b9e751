use reqwest::Client;

use crate::config::{ServerConfig, GEO_PLACEHOLDER};
use crate::error::{Result, TrendsError};
use crate::feed::{parse_trends, TrendRecord};

/// Fetches the daily-trends feed for one region at a time.
#[derive(Debug, Clone)]
pub struct TrendsClient {
    client: Client,
    feed_url: String,
}

impl TrendsClient {
    pub fn new(config: &ServerConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;
        Ok(Self {
            client,
            feed_url: config.feed_url.clone(),
        })
    }

    pub fn feed_url_for(&self, geo: &str) -> String {
        build_feed_url(&self.feed_url, geo)
    }

    /// One GET, no retries. Non-2xx statuses count as failures.
    pub async fn fetch_trends(&self, geo: &str) -> Result<Vec<TrendRecord>> {
        let url = self.feed_url_for(geo);
        log::debug!("fetching trends feed {url}");
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TrendsError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let trends = parse_trends(&body)?;
        log::debug!("parsed {} trends for {geo}", trends.len());
        Ok(trends)
    }
}

pub fn build_feed_url(template: &str, geo: &str) -> String {
    template.replace(GEO_PLACEHOLDER, &urlencoding::encode(geo))
}
