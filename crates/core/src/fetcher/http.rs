//! reqwest-backed fetcher.

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tracing::debug;

use crate::config::TargetConfig;

use super::{FetchError, Fetcher};

/// Fetches the listings page with a single GET.
pub struct HttpFetcher {
    client: Client,
    url: String,
}

impl HttpFetcher {
    /// Create a fetcher for the configured target.
    pub fn new(config: &TargetConfig) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }

    fn map_send_error(&self, e: reqwest::Error) -> FetchError {
        if e.is_timeout() {
            FetchError::Timeout {
                url: self.url.clone(),
            }
        } else {
            FetchError::ConnectionFailed {
                url: self.url.clone(),
                reason: e.to_string(),
            }
        }
    }
}

#[async_trait]
impl Fetcher for HttpFetcher {
    fn target(&self) -> &str {
        &self.url
    }

    async fn fetch(&self) -> Result<String, FetchError> {
        debug!(url = %self.url, "Fetching listings page");

        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| self.map_send_error(e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url: self.url.clone(),
            });
        }

        let body = response.text().await.map_err(|e| {
            if e.is_timeout() {
                FetchError::Timeout {
                    url: self.url.clone(),
                }
            } else {
                FetchError::Body {
                    url: self.url.clone(),
                    reason: e.to_string(),
                }
            }
        })?;

        debug!(
            url = %self.url,
            status = status.as_u16(),
            bytes = body.len(),
            "Listings page fetched"
        );
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_target_url() {
        let config = TargetConfig {
            url: "http://127.0.0.1:9/wohnen/".to_string(),
            ..TargetConfig::default()
        };
        let fetcher = HttpFetcher::new(&config).unwrap();
        assert_eq!(fetcher.target(), "http://127.0.0.1:9/wohnen/");
    }

    #[test]
    fn test_new_rejects_invalid_user_agent() {
        let config = TargetConfig {
            user_agent: "bad\nagent".to_string(),
            ..TargetConfig::default()
        };
        let result = HttpFetcher::new(&config);
        assert!(matches!(result, Err(FetchError::Client(_))));
    }
}
