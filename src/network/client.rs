//! HTTP client for talking to the geocoding provider

use crate::config::OutgoingSettings;
use bytes::Bytes;
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper with placefinder-specific configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

/// Raw response from the provider: status plus undecoded body
#[derive(Debug, Clone)]
pub struct ApiResponse {
    pub status: u16,
    pub body: Bytes,
}

impl ApiResponse {
    /// Body as text, if it is valid UTF-8
    pub fn text(&self) -> Option<&str> {
        std::str::from_utf8(&self.body).ok()
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> anyhow::Result<Self> {
        Self::with_settings(&OutgoingSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &OutgoingSettings) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// GET with query parameters, reading the full body.
    ///
    /// A body that cannot be read on an otherwise completed exchange
    /// surfaces as a `reqwest::Error` with `is_body()` set; the caller
    /// classifies it separately from transport failures.
    pub async fn get_with_params(
        &self,
        url: &str,
        params: &[(&str, &str)],
    ) -> Result<ApiResponse, reqwest::Error> {
        let response = self.client.get(url).query(params).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;

        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = HttpClient::new();
        assert!(client.is_ok());
    }

    #[test]
    fn test_response_text() {
        let resp = ApiResponse {
            status: 200,
            body: Bytes::from_static(b"hello"),
        };
        assert_eq!(resp.text(), Some("hello"));

        let resp = ApiResponse {
            status: 200,
            body: Bytes::from_static(&[0xff, 0xfe]),
        };
        assert_eq!(resp.text(), None);
    }
}
