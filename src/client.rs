//! Bitbucket API client.
//!
//! Low-level HTTP client that handles authentication and raw requests.
//! Resource objects like [`Issues`](crate::Issues) hold this client
//! through the [`Transport`] trait and delegate one request per operation.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde_json::Value;
use url::Url;

use crate::error::{BucketError, Result};
use crate::transport::{Params, Transport};

const DEFAULT_API_URL: &str = "https://api.bitbucket.org/2.0";
const USER_AGENT: &str = concat!("bucketapi/", env!("CARGO_PKG_VERSION"));

/// Low-level Bitbucket API client.
///
/// Handles authentication and HTTP requests. Endpoint-specific path
/// construction lives in the resource objects; this client only knows
/// verbs, a base URL, and a token.
///
/// This struct is cheaply cloneable; clones reference the same underlying
/// connection pool.
///
/// # Example
///
/// ```no_run
/// use bucketapi::BucketClient;
///
/// # fn example() -> bucketapi::Result<()> {
/// // Create from environment variables
/// let client = BucketClient::from_env()?;
///
/// // Or configure manually
/// let client = BucketClient::new("your-token", "https://api.bitbucket.org/2.0")?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct BucketClient {
    http: Client,
    base_url: Arc<Url>,
    token: String,
}

impl std::fmt::Debug for BucketClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BucketClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

impl BucketClient {
    /// Create a client from environment variables.
    ///
    /// Uses `BITBUCKET_TOKEN` for authentication and optionally
    /// `BITBUCKET_API_URL` for the base URL (defaults to
    /// `https://api.bitbucket.org/2.0`).
    ///
    /// # Errors
    ///
    /// Returns an error if `BITBUCKET_TOKEN` is not set.
    pub fn from_env() -> Result<Self> {
        let token = env::var("BITBUCKET_TOKEN").map_err(|_| {
            BucketError::ConfigMissing("BITBUCKET_TOKEN environment variable not set".to_string())
        })?;

        let base_url =
            env::var("BITBUCKET_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&token, &base_url)
    }

    /// Create a new client with the provided token and base URL.
    ///
    /// # Arguments
    ///
    /// * `token` - Bitbucket access token
    /// * `base_url` - Base URL for the API (e.g., `https://api.bitbucket.org/2.0`)
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn new(token: &str, base_url: &str) -> Result<Self> {
        // Ensure base URL ends with / so relative joins keep the prefix
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };

        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(Duration::from_secs(300))
            .build()
            .map_err(BucketError::HttpError)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            token: token.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Check response status and convert errors.
    async fn check_response(response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            return Ok(response);
        }

        // Handle rate limiting
        if status.as_u16() == 429 {
            let retry_after = response
                .headers()
                .get("retry-after")
                .and_then(|v| v.to_str().ok())
                .and_then(|v| v.parse().ok());
            return Err(BucketError::RateLimited {
                retry_after_secs: retry_after,
            });
        }

        let message = Self::extract_error_message(response, status).await;
        Err(BucketError::ApiError {
            message,
            status_code: Some(status.as_u16()),
        })
    }

    /// Extract error message from a failed response.
    ///
    /// Bitbucket wraps failures in an `{"error": {"message": ...}}`
    /// envelope; fall back to flat `message`/`error` keys, then the raw body.
    async fn extract_error_message(response: Response, status: reqwest::StatusCode) -> String {
        let body = match response.text().await {
            Ok(b) => b,
            Err(_) => return format!("HTTP {status}"),
        };

        if let Ok(json) = serde_json::from_str::<Value>(&body) {
            if let Some(msg) = json
                .get("error")
                .and_then(|e| e.get("message"))
                .and_then(|m| m.as_str())
            {
                return msg.to_string();
            }
            if let Some(msg) = json.get("message").and_then(|m| m.as_str()) {
                return msg.to_string();
            }
            if let Some(err) = json.get("error").and_then(|m| m.as_str()) {
                return err.to_string();
            }
        }

        if body.is_empty() {
            return format!("HTTP {status}");
        }
        body
    }

    /// Decode a successful response body.
    ///
    /// 204s and other empty bodies decode to `Value::Null`.
    async fn decode_body(response: Response) -> Result<Value> {
        let body = response.text().await.map_err(BucketError::HttpError)?;
        if body.trim().is_empty() {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_str(&body)?)
    }
}

#[async_trait]
impl Transport for BucketClient {
    #[tracing::instrument(skip(self, params))]
    async fn get(&self, path: &str, params: &Params) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let mut request = self.http.get(url).bearer_auth(&self.token);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(BucketError::HttpError)?;
        Self::decode_body(Self::check_response(response).await?).await
    }

    #[tracing::instrument(skip(self, params))]
    async fn post(&self, path: &str, params: &Params) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .post(url)
            .bearer_auth(&self.token)
            .json(params)
            .send()
            .await
            .map_err(BucketError::HttpError)?;

        Self::decode_body(Self::check_response(response).await?).await
    }

    #[tracing::instrument(skip(self, params))]
    async fn put(&self, path: &str, params: &Params) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let response = self
            .http
            .put(url)
            .bearer_auth(&self.token)
            .json(params)
            .send()
            .await
            .map_err(BucketError::HttpError)?;

        Self::decode_body(Self::check_response(response).await?).await
    }

    #[tracing::instrument(skip(self, params))]
    async fn delete(&self, path: &str, params: &Params) -> Result<Value> {
        let url = self.base_url.join(path)?;

        let mut request = self.http.delete(url).bearer_auth(&self.token);
        if !params.is_empty() {
            request = request.query(params);
        }

        let response = request.send().await.map_err(BucketError::HttpError)?;
        Self::decode_body(Self::check_response(response).await?).await
    }
}
