use crate::client::{ApiConfig, LoginRadiusClient};
use crate::endpoints::{AccountApi, AuthenticationApi, EventsApi, SocialApi, TwoFactorApi};
use crate::errors::Result;

/// Main SDK entry point.
///
/// Owns one HTTP client; the endpoint-group accessors hand out cheap clones
/// of it.
pub struct LoginRadius {
    client: LoginRadiusClient,
}

impl LoginRadius {
    /// Create a new instance with an API key (authentication endpoints only).
    pub fn new(api_key: String) -> Self {
        Self {
            client: LoginRadiusClient::from_api_key(api_key),
        }
    }

    /// Create a new instance with key and secret (all endpoints).
    pub fn with_credentials(api_key: String, api_secret: String) -> Self {
        Self {
            client: LoginRadiusClient::with_credentials(api_key, api_secret),
        }
    }

    /// Create from `LOGINRADIUS_API_KEY` / `LOGINRADIUS_API_SECRET` /
    /// `LOGINRADIUS_API_URL` environment variables.
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            client: LoginRadiusClient::from_env()?,
        })
    }

    /// Create from any configuration implementing [`ApiConfig`].
    pub fn from_config<C>(config: &C) -> std::result::Result<Self, C::Error>
    where
        C: ApiConfig,
    {
        Ok(Self {
            client: LoginRadiusClient::from_config(config)?,
        })
    }

    pub fn client(&self) -> &LoginRadiusClient {
        &self.client
    }

    /// Customer-facing authentication endpoints.
    pub fn authentication(&self) -> AuthenticationApi {
        AuthenticationApi::new(self.client.clone())
    }

    /// Two-factor login endpoints.
    pub fn two_factor(&self) -> TwoFactorApi {
        TwoFactorApi::new(self.client.clone())
    }

    /// Account management endpoints (requires the API secret).
    pub fn account(&self) -> AccountApi {
        AccountApi::new(self.client.clone())
    }

    /// Social login endpoints.
    pub fn social(&self) -> SocialApi {
        SocialApi::new(self.client.clone())
    }

    /// Legacy events feed for one user's access token.
    pub fn events(&self, access_token: &str) -> Result<EventsApi> {
        EventsApi::new(self.client.clone(), access_token)
    }

    /// Test API connection
    pub async fn test_connection(&self) -> Result<bool> {
        self.client.test_connection().await
    }
}
