use crate::errors::{ApiError, HttpError, Result};
use crate::params::QueryParams;
use log::{debug, error, trace};
use loginradius_core::{ErrorResponse, ExistsResponse};
use reqwest::{Client, Method, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde_json::Value;
use url::Url;

/// Default base for the identity API.
pub const DEFAULT_BASE_URL: &str = "https://api.loginradius.com";
/// Default base for the legacy events hub.
pub const DEFAULT_HUB_URL: &str = "https://hub.loginradius.com";

/// Trait for providing configuration to the API client
/// This allows the main application to implement config without circular dependencies
pub trait ApiConfig {
    type Error;

    /// Get the API key for authentication
    fn get_api_key(&self) -> std::result::Result<String, Self::Error>;

    /// Get the API secret (required only for management endpoints)
    fn get_api_secret(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }

    /// Get the base URL for the API (optional, defaults to official API)
    fn get_base_url(&self) -> std::result::Result<Option<String>, Self::Error> {
        Ok(None)
    }
}

/// Which API surface an endpoint belongs to.
///
/// The surface determines the URL prefix and which credentials the client
/// injects into the query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestType {
    /// Customer-facing endpoints, signed with the API key only.
    Authentication,
    /// Management ("manage") endpoints, signed with key and secret.
    Account,
    /// Social login endpoints; credentials are passed explicitly per call.
    Social,
}

impl RequestType {
    pub fn prefix(self) -> &'static str {
        match self {
            RequestType::Authentication => "identity/v2/auth",
            RequestType::Account => "identity/v2/manage",
            RequestType::Social => "api/v2",
        }
    }
}

/// HTTP client for the LoginRadius identity REST API
#[derive(Debug, Clone)]
pub struct LoginRadiusClient {
    client: Client,
    api_key: String,
    api_secret: Option<String>,
    base_url: String,
    hub_url: String,
}

/// First and last four characters of a credential, for log output.
///
/// Counts characters, not bytes, so a credential with multi-byte UTF-8 in
/// it cannot panic on a char boundary.
fn masked(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() > 8 {
        let head: String = chars[..4].iter().collect();
        let tail: String = chars[chars.len() - 4..].iter().collect();
        format!("{}...{}", head, tail)
    } else {
        "****".to_string()
    }
}

/// Compose `base/prefix/path`, tolerating stray slashes on any side.
fn build_url(base: &str, prefix: &str, path: &str) -> String {
    let mut url = base.trim_end_matches('/').to_string();
    for part in [prefix, path] {
        let part = part.trim_matches('/');
        if !part.is_empty() {
            url.push('/');
            url.push_str(part);
        }
    }
    url
}

/// Validate a custom base URL before the client starts using it.
pub fn validate_base_url(url: &str) -> Result<String> {
    let parsed = Url::parse(url)
        .map_err(|e| ApiError::Config(format!("Invalid base URL '{}': {}", url, e)))?;
    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return Err(ApiError::Config(format!(
            "Invalid base URL '{}': scheme must be http or https",
            url
        )));
    }
    Ok(url.trim_end_matches('/').to_string())
}

impl LoginRadiusClient {
    /// Create a new API client
    pub fn new(api_key: String, api_secret: Option<String>, base_url: Option<String>) -> Self {
        let client = Client::new();
        let base_url = base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        debug!("Creating LoginRadiusClient");
        debug!("  API Key: {}", masked(&api_key));
        if let Some(ref secret) = api_secret {
            debug!("  API Secret: {}", masked(secret));
        }
        debug!("  Base URL: {}", base_url);

        Self {
            client,
            api_key,
            api_secret,
            base_url,
            hub_url: DEFAULT_HUB_URL.to_string(),
        }
    }

    /// Create API client from environment variables
    pub fn from_env() -> Result<Self> {
        debug!("Creating LoginRadiusClient from environment variables");
        let api_key = std::env::var("LOGINRADIUS_API_KEY").map_err(|_| {
            error!("LOGINRADIUS_API_KEY environment variable not set");
            ApiError::Http(HttpError::Config(
                "LOGINRADIUS_API_KEY environment variable not set".to_string(),
            ))
        })?;
        let api_secret = std::env::var("LOGINRADIUS_API_SECRET").ok();
        let base_url = match std::env::var("LOGINRADIUS_API_URL") {
            Ok(url) => Some(validate_base_url(&url)?),
            Err(_) => None,
        };

        debug!("Found API key in environment");
        Ok(Self::new(api_key, api_secret, base_url))
    }

    /// Create API client from a key alone (authentication endpoints only)
    pub fn from_api_key(api_key: String) -> Self {
        debug!("Creating LoginRadiusClient with provided API key");
        Self::new(api_key, None, None)
    }

    /// Create API client with key and secret (management endpoints enabled)
    pub fn with_credentials(api_key: String, api_secret: String) -> Self {
        debug!("Creating LoginRadiusClient with key and secret");
        Self::new(api_key, Some(api_secret), None)
    }

    /// Create API client from any configuration implementing ApiConfig trait
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
    {
        debug!("Creating LoginRadiusClient from config");
        let api_key = config.get_api_key()?;
        debug!("Got API key from config: {}", masked(&api_key));

        let api_secret = config.get_api_secret()?;
        let base_url = config.get_base_url()?;

        if let Some(ref url) = base_url {
            debug!("Got custom base URL from config: {}", url);
        } else {
            debug!("Using default base URL");
        }

        Ok(Self::new(api_key, api_secret, base_url))
    }

    /// Override the events hub base URL (testing, regional deployments).
    pub fn set_hub_url(&mut self, hub_url: String) {
        self.hub_url = hub_url;
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// API secret, or a configuration error naming how to set it.
    pub fn require_api_secret(&self) -> Result<&str> {
        self.api_secret.as_deref().ok_or_else(|| {
            ApiError::Config(
                "API secret is required for this endpoint; set LOGINRADIUS_API_SECRET".to_string(),
            )
        })
    }

    /// The single generic request helper every endpoint method goes through:
    /// inject credentials, compose the URL, send, map the response.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        request_type: RequestType,
        method: Method,
        path: &str,
        mut query: QueryParams,
        body: Option<Value>,
    ) -> Result<T> {
        match request_type {
            RequestType::Authentication => {
                query.add("apikey", &self.api_key);
            }
            RequestType::Account => {
                let secret = self.require_api_secret()?.to_string();
                query.add("apikey", &self.api_key);
                query.add("apisecret", &secret);
            }
            RequestType::Social => {}
        }

        let url = build_url(&self.base_url, request_type.prefix(), path);
        debug!("HTTP {} request to: {}", method, url);
        trace!("  {} query parameter(s)", query.len());

        let mut request = self
            .client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json")
            .query(query.entries());

        if let Some(body) = body {
            trace!(
                "Request body: {}",
                serde_json::to_string(&body).unwrap_or_else(|_| "Invalid JSON".to_string())
            );
            request = request.json(&body);
        }

        let response = request.send().await.map_err(|e| {
            error!("{} request failed: {:?}", method, e);
            HttpError::Request(e)
        })?;

        debug!("Response status: {}", response.status());

        let response = self.handle_response(response).await?;
        Ok(response.json::<T>().await.map_err(HttpError::Request)?)
    }

    /// Make a GET request
    pub async fn get<T: DeserializeOwned>(
        &self,
        request_type: RequestType,
        path: &str,
        query: QueryParams,
    ) -> Result<T> {
        self.execute(request_type, Method::GET, path, query, None).await
    }

    /// Make a POST request
    pub async fn post<T: DeserializeOwned>(
        &self,
        request_type: RequestType,
        path: &str,
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<T> {
        self.execute(request_type, Method::POST, path, query, body).await
    }

    /// Make a PUT request
    pub async fn put<T: DeserializeOwned>(
        &self,
        request_type: RequestType,
        path: &str,
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<T> {
        self.execute(request_type, Method::PUT, path, query, body).await
    }

    /// Make a DELETE request
    pub async fn delete<T: DeserializeOwned>(
        &self,
        request_type: RequestType,
        path: &str,
        query: QueryParams,
        body: Option<Value>,
    ) -> Result<T> {
        self.execute(request_type, Method::DELETE, path, query, body).await
    }

    /// GET against the legacy events hub; no credential injection, the
    /// caller embeds secret and token in the path.
    pub async fn execute_hub<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = build_url(&self.hub_url, "", path);
        debug!("HTTP GET request to events hub");

        let response = self
            .client
            .get(&url)
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| {
                error!("Hub GET request failed: {:?}", e);
                HttpError::Request(e)
            })?;

        debug!("Response status: {}", response.status());

        let response = self.handle_response(response).await?;
        Ok(response.json::<T>().await.map_err(HttpError::Request)?)
    }

    /// Handle HTTP response and convert errors
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());

        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", error_text);

        // The API wraps most failures in its own envelope; surface that
        // before falling back to raw status mapping.
        if let Ok(envelope) = serde_json::from_str::<ErrorResponse>(&error_text) {
            error!("API error {}: {}", envelope.error_code, envelope.text());
            return Err(ApiError::Http(HttpError::Api {
                code: envelope.error_code,
                message: envelope.text().to_string(),
            }));
        }

        let api_error = match status {
            StatusCode::UNAUTHORIZED => {
                error!("Authentication failed (401 Unauthorized)");
                HttpError::AuthenticationFailed
            }
            StatusCode::FORBIDDEN => {
                error!("Invalid API key (403 Forbidden)");
                HttpError::InvalidApiKey
            }
            StatusCode::TOO_MANY_REQUESTS => {
                error!("Rate limited (429 Too Many Requests)");
                HttpError::RateLimited
            }
            StatusCode::SERVICE_UNAVAILABLE => {
                error!("Service unavailable (503)");
                HttpError::ServiceUnavailable
            }
            StatusCode::REQUEST_TIMEOUT => {
                error!("Request timeout (408)");
                HttpError::Timeout
            }
            _ => {
                error!("HTTP error with status code: {}", status.as_u16());
                HttpError::HttpError {
                    status: status.as_u16(),
                    message: error_text,
                }
            }
        };

        Err(ApiError::Http(api_error))
    }

    /// Test connection to the API
    ///
    /// Issues the cheapest authenticated call there is (an email availability
    /// probe); any response at all, including an API error envelope, proves
    /// the endpoint is reachable with this key.
    pub async fn test_connection(&self) -> Result<bool> {
        debug!("Testing API connection");
        let mut query = QueryParams::new();
        query.add("email", "connection.test@example.com");
        match self
            .get::<ExistsResponse>(RequestType::Authentication, "email", query)
            .await
        {
            Ok(_) => {
                debug!("API connection successful");
                Ok(true)
            }
            Err(ApiError::Http(HttpError::Api { code, message })) => {
                // The server answered in its own envelope, so the key reached it.
                debug!("API reachable, server replied {}: {}", code, message);
                Ok(true)
            }
            Err(e) => {
                error!("API connection failed: {:?}", e);
                Ok(false)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_url_joins_cleanly() {
        assert_eq!(
            build_url("https://api.loginradius.com", "identity/v2/auth", "login"),
            "https://api.loginradius.com/identity/v2/auth/login"
        );
        assert_eq!(
            build_url("https://api.loginradius.com/", "/identity/v2/auth/", "/login/2fa"),
            "https://api.loginradius.com/identity/v2/auth/login/2fa"
        );
        assert_eq!(
            build_url("https://hub.loginradius.com", "", "GetEvents/s/t"),
            "https://hub.loginradius.com/GetEvents/s/t"
        );
    }

    #[test]
    fn test_request_type_prefixes() {
        assert_eq!(RequestType::Authentication.prefix(), "identity/v2/auth");
        assert_eq!(RequestType::Account.prefix(), "identity/v2/manage");
        assert_eq!(RequestType::Social.prefix(), "api/v2");
    }

    #[test]
    fn test_masking_never_leaks_short_keys() {
        assert_eq!(masked("abcd1234efgh"), "abcd...efgh");
        assert_eq!(masked("short"), "****");
        assert_eq!(masked(""), "****");
    }

    #[test]
    fn test_masking_handles_multibyte_credentials() {
        assert_eq!(masked("käyttäjä-avain-12"), "käyt...n-12");
        assert_eq!(masked("ключключ"), "****");
    }

    #[test]
    fn test_base_url_validation() {
        assert_eq!(
            validate_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert!(validate_base_url("not a url").is_err());
        assert!(validate_base_url("ftp://api.example.com").is_err());
    }

    #[test]
    fn test_secret_required_for_account_calls() {
        let client = LoginRadiusClient::from_api_key("k-123".to_string());
        assert!(client.require_api_secret().is_err());

        let client =
            LoginRadiusClient::with_credentials("k-123".to_string(), "s-456".to_string());
        assert_eq!(client.require_api_secret().unwrap(), "s-456");
    }
}
