//! HTTP client wrapper for File Station requests.

use std::collections::BTreeMap;
use std::time::Duration;

use reqwest::{Client, Method};
use tokio::time::timeout;

use crate::config::ConfigOptions;
use crate::error::{FileStationError, Result};

/// HTTP client for making requests to the storage appliance.
#[derive(Debug, Clone)]
pub struct HttpClient {
    client: Client,
    timeout: Duration,
}

impl HttpClient {
    /// Create a new HTTP client from the session configuration.
    pub fn new(options: &ConfigOptions) -> Result<Self> {
        let mut builder = Client::builder()
            .connect_timeout(options.api_call_timeout)
            .danger_accept_invalid_certs(options.accept_invalid_certs);

        if let Some(user_agent) = &options.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }

        let client = builder.build()?;

        Ok(Self {
            client,
            timeout: options.api_call_timeout,
        })
    }

    /// The timeout applied to every request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Send a request and return the response body.
    ///
    /// # Arguments
    /// * `method` - HTTP method
    /// * `url` - Absolute URL without query string
    /// * `query` - Query parameters
    /// * `body` - Optional body together with its content type
    ///
    /// # Returns
    /// Response body as string, or `HttpError` for any non-2xx status
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        query: &BTreeMap<String, String>,
        body: Option<(&str, &str)>,
    ) -> Result<String> {
        timeout(self.timeout, self.send_inner(method, url, query, body))
            .await
            .map_err(|_| FileStationError::Timeout(self.timeout))?
    }

    async fn send_inner(
        &self,
        method: Method,
        url: &str,
        query: &BTreeMap<String, String>,
        body: Option<(&str, &str)>,
    ) -> Result<String> {
        let mut request = self.client.request(method, url).query(query);
        if let Some((content, content_type)) = body {
            request = request
                .header("Content-Type", content_type)
                .body(content.to_string());
        }

        let response = request.send().await?;

        if !response.status().is_success() {
            return Err(FileStationError::HttpError(response.status().as_u16()));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new(&ConfigOptions::default()).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(60));
    }

    #[test]
    fn test_insecure_client_creation() {
        let options = ConfigOptions::default()
            .with_accept_invalid_certs(true)
            .with_timeout(Duration::from_secs(3))
            .with_user_agent("filestation-test");
        let client = HttpClient::new(&options).unwrap();
        assert_eq!(client.timeout(), Duration::from_secs(3));
    }
}
