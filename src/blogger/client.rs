// Blogger API HTTP client.
// Handles the API key, bounded timeouts, and request/response processing.

use std::time::Duration;

use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::{BlogspinError, Result};

const BLOGGER_API_BASE: &str = "https://www.googleapis.com/blogger/v3";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(20);

/// Configuration injected into the client rather than read from globals.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_key: String,
    pub base_url: String,
    pub timeout: Duration,
}

impl ClientConfig {
    /// Build a config from the BLOGGER_API_KEY environment variable,
    /// pointed at the public Googleapis base URL.
    pub fn from_env() -> Result<Self> {
        let api_key =
            std::env::var("BLOGGER_API_KEY").map_err(|_| BlogspinError::MissingApiKey)?;
        Ok(Self::new(api_key, BLOGGER_API_BASE))
    }

    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

/// Blogger API client. The key travels as a query parameter on every
/// request, per the v3 API's public-data access scheme.
pub struct BloggerClient {
    client: Client,
    config: ClientConfig,
}

impl BloggerClient {
    /// Create a new client from the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(BlogspinError::Api)?;

        Ok(Self { client, config })
    }

    /// Create a client configured from the environment.
    pub fn from_env() -> Result<Self> {
        Self::new(ClientConfig::from_env()?)
    }

    /// Make a GET request against the API, appending the key and the given
    /// query parameters, and deserialize the JSON body.
    ///
    /// The body is read as text first so that invalid JSON surfaces as
    /// `MalformedResponse` rather than a transport error.
    pub(crate) async fn get_json<T, P>(&self, endpoint: &str, params: &P) -> Result<T>
    where
        T: DeserializeOwned,
        P: serde::Serialize + ?Sized,
    {
        let url = format!("{}{}", self.config.base_url, endpoint);
        let response = self
            .client
            .get(&url)
            .query(&[("key", self.config.api_key.as_str())])
            .query(params)
            .send()
            .await
            .map_err(BlogspinError::Api)?;

        let response = self.check_response(response)?;
        let body = response.text().await.map_err(BlogspinError::Api)?;
        serde_json::from_str(&body).map_err(BlogspinError::MalformedResponse)
    }

    /// Check response status and convert errors.
    fn check_response(&self, response: Response) -> Result<Response> {
        match response.status() {
            StatusCode::OK => Ok(response),
            StatusCode::NOT_FOUND => {
                let url = response.url().to_string();
                Err(BlogspinError::NotFound(url))
            }
            status => Err(BlogspinError::Status {
                status,
                url: response.url().to_string(),
            }),
        }
    }
}
