//! Blocking HTTP client for the provider API.

use super::types::{Subscription, TtsRequest, Voice, VoicesResponse};
use crate::{Error, ErrorContext, Result};
use reqwest::blocking::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://api.elevenlabs.io";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

const API_KEY_HEADER: &str = "xi-api-key";

/// Client for the provider's voice, account and synthesis endpoints.
pub struct ProviderClient {
    http_client: reqwest::blocking::Client,
    base_url: String,
    api_key: String,
}

impl ProviderClient {
    pub fn builder() -> ProviderClientBuilder {
        ProviderClientBuilder::new()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `GET /v1/voices`
    pub fn list_voices(&self) -> Result<Vec<Voice>> {
        let response: VoicesResponse = self.get_json("/v1/voices", "voices")?;
        debug!(count = response.voices.len(), "fetched voice list");
        Ok(response.voices)
    }

    /// `GET /v1/user/subscription`
    pub fn subscription(&self) -> Result<Subscription> {
        self.get_json("/v1/user/subscription", "subscription")
    }

    /// `POST /v1/text-to-speech/{voice_id}`, returning the raw audio payload.
    ///
    /// Non-OK responses become [`Error::Provider`] carrying the response body.
    pub fn text_to_speech(&self, voice_id: &str, request: &TtsRequest<'_>) -> Result<Vec<u8>> {
        let path = format!("/v1/text-to-speech/{}", voice_id);
        debug!(voice_id, chars = request.text.chars().count(), "requesting speech");
        let builder = self
            .http_client
            .post(self.endpoint(&path))
            .header("Content-Type", "application/json")
            .json(request);
        let response = self.send(builder, "text_to_speech")?;
        let bytes = Self::read_ok_body(response, "text_to_speech")?;
        Ok(bytes)
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn get_json<T: DeserializeOwned>(&self, path: &str, source: &'static str) -> Result<T> {
        let builder = self.http_client.get(self.endpoint(path));
        let response = self.send(builder, source)?;
        let bytes = Self::read_ok_body(response, source)?;
        serde_json::from_slice(&bytes).map_err(|e| Error::Decode {
            endpoint: source,
            source: e,
        })
    }

    fn send(&self, builder: RequestBuilder, source: &'static str) -> Result<Response> {
        builder
            .header("accept", "*/*")
            .header(API_KEY_HEADER, &self.api_key)
            .send()
            .map_err(|e| {
                let message = if e.is_timeout() {
                    format!("{} request timed out: {}", source, e)
                } else {
                    format!("{} request failed: {}", source, e)
                };
                Error::unavailable_with_context(message, ErrorContext::new().with_source(source))
            })
    }

    fn read_ok_body(response: Response, source: &'static str) -> Result<Vec<u8>> {
        let status = response.status();
        let bytes = response.bytes().map_err(|e| {
            Error::unavailable_with_context(
                format!("Failed to read {} response: {}", source, e),
                ErrorContext::new().with_source(source),
            )
        })?;
        if !status.is_success() {
            return Err(Error::Provider {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
                hint: None,
            });
        }
        Ok(bytes.to_vec())
    }
}

pub struct ProviderClientBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    timeout_secs: u64,
}

impl ProviderClientBuilder {
    pub fn new() -> Self {
        Self {
            api_key: None,
            base_url: None,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }
    pub fn timeout_secs(mut self, secs: u64) -> Self {
        self.timeout_secs = secs;
        self
    }

    pub fn build(self) -> Result<ProviderClient> {
        let api_key = self
            .api_key
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| Error::configuration("API key required"))?;
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url).map_err(|e| {
            Error::configuration_with_context(
                format!("Invalid provider base URL: {}", e),
                ErrorContext::new()
                    .with_field_path("base_url")
                    .with_details(base_url.clone()),
            )
        })?;
        if self.timeout_secs == 0 {
            return Err(Error::configuration("HTTP timeout must be at least one second"));
        }
        let http_client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .map_err(|e| Error::configuration(format!("Failed to create HTTP client: {}", e)))?;
        Ok(ProviderClient {
            http_client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }
}

impl Default for ProviderClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
