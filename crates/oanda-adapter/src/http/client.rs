/*
[INPUT]:  HTTP configuration (environment, timeouts, access token)
[OUTPUT]: Configured reqwest client and request dispatch for API calls
[POS]:    HTTP layer - core client implementation
[UPDATE]: When adding connection options or changing dispatch behavior
*/

use crate::http::{OandaError, Result};
use crate::types::Environment;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Client, Method, Response, Url};
use serde_json::Value;
use std::time::Duration;
use tracing::debug;

/// Versioned path prefix shared by all core endpoints
const VERSION_PREFIX: &str = "v1";

/// HTTP client configuration
///
/// The access token and extra headers are installed as default headers at
/// construction time; the client is immutable afterwards.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub timeout: Duration,
    pub connect_timeout: Duration,
    pub access_token: Option<String>,
    pub extra_headers: Vec<(String, String)>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            access_token: None,
            extra_headers: Vec::new(),
        }
    }
}

impl ClientConfig {
    /// Default configuration with a bearer access token
    pub fn with_access_token(token: impl Into<String>) -> Self {
        Self {
            access_token: Some(token.into()),
            ..Self::default()
        }
    }
}

/// Main HTTP client for the OANDA REST API
#[derive(Debug)]
pub struct OandaClient {
    http_client: Client,
    api_url: Url,
}

impl OandaClient {
    /// Create a new client for an environment with default configuration
    pub fn new(environment: Environment) -> Result<Self> {
        Self::with_config(environment, ClientConfig::default())
    }

    /// Create a new client for an environment with custom configuration
    pub fn with_config(environment: Environment, config: ClientConfig) -> Result<Self> {
        Self::with_config_and_base_url(config, environment.base_url())
    }

    /// Create a new client against an explicit base URL
    ///
    /// Intended for pointing the client at a mock server in tests. A base
    /// with a non-root path is normalized to end in `/` so that joining an
    /// endpoint extends the path instead of replacing its last segment.
    pub fn with_config_and_base_url(config: ClientConfig, base_url: &str) -> Result<Self> {
        let http_client = build_http_client(&config)?;
        let api_url = if base_url.ends_with('/') {
            Url::parse(base_url)?
        } else {
            Url::parse(&format!("{}/", base_url))?
        };
        Ok(Self {
            http_client,
            api_url,
        })
    }

    /// Dispatch a request against an endpoint path
    ///
    /// GET requests carry `params` in the query string; POST/PATCH/DELETE
    /// carry them form-encoded in the request body. A status below 400
    /// yields the parsed JSON body unchanged; 400 and above yields
    /// [`OandaError::Api`] built from the `{"code": .., "message": ..}`
    /// error payload.
    pub async fn request(
        &self,
        method: Method,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<Value> {
        let url = self.api_url.join(endpoint)?;
        let builder = self.http_client.request(method.clone(), url);
        let builder = if method == Method::GET {
            builder.query(params)
        } else {
            builder.form(params)
        };

        debug!(%method, endpoint, params = params.len(), "dispatching API request");
        let response = builder.send().await?;
        read_json(response).await
    }
}

/// Join the fixed version prefix with each segment using `/`
///
/// No escaping is performed beyond what reqwest applies to query parameters.
pub(crate) fn versioned(segments: &[&str]) -> String {
    let mut endpoint = String::from(VERSION_PREFIX);
    for segment in segments {
        endpoint.push('/');
        endpoint.push_str(segment);
    }
    endpoint
}

/// Build a reqwest client with bearer auth and extra headers installed
pub(crate) fn build_http_client(config: &ClientConfig) -> Result<Client> {
    let mut headers = HeaderMap::new();

    if let Some(token) = &config.access_token {
        let value = HeaderValue::from_str(&format!("Bearer {}", token))
            .map_err(|_| OandaError::Config("access token is not a valid header value".into()))?;
        headers.insert(AUTHORIZATION, value);
    }

    for (name, value) in &config.extra_headers {
        let name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| OandaError::Config(format!("invalid header name: {}", name)))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| OandaError::Config(format!("invalid header value for {}", name)))?;
        headers.insert(name, value);
    }

    Client::builder()
        .timeout(config.timeout)
        .connect_timeout(config.connect_timeout)
        .default_headers(headers)
        .build()
        .map_err(OandaError::from)
}

/// Read a response body, mapping error statuses to [`OandaError::Api`]
async fn read_json(response: Response) -> Result<Value> {
    let status = response.status();
    let body = response.bytes().await?;

    if status.as_u16() >= 400 {
        return Err(api_error(status.as_u16(), &body));
    }

    Ok(serde_json::from_slice(&body)?)
}

/// Map a `{"code": .., "message": ..}` error payload to an API error
///
/// OANDA sends `code` as either a number or a string; it is captured in its
/// rendered form so callers can branch on it either way.
fn api_error(status: u16, body: &[u8]) -> OandaError {
    let parsed: Value = match serde_json::from_slice(body) {
        Ok(value) => value,
        Err(_) => {
            return OandaError::InvalidResponse(format!(
                "status {} with unparsable error body",
                status
            ));
        }
    };

    let code = match parsed.get("code") {
        Some(Value::String(code)) => code.clone(),
        Some(code) => code.to_string(),
        None => {
            return OandaError::InvalidResponse(format!(
                "status {} error body without a code field",
                status
            ));
        }
    };
    let message = parsed
        .get("message")
        .and_then(|message| message.as_str())
        .unwrap_or_default()
        .to_string();

    OandaError::Api { code, message }
}
