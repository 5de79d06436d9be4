use crate::client::{LoginRadiusClient, RequestType};
use crate::errors::Result;
use crate::params::QueryParams;
use log::debug;
use loginradius_core::{validate_required, AccessTokenResponse, UserProfile};

/// Social login endpoints (`api/v2`).
///
/// These predate the identity API's credential injection: the request token
/// and secret travel as explicit query parameters.
#[derive(Debug, Clone)]
pub struct SocialApi {
    client: LoginRadiusClient,
}

impl SocialApi {
    pub fn new(client: LoginRadiusClient) -> Self {
        Self { client }
    }

    /// Exchange the request token from a social login callback for a
    /// LoginRadius access token. Requires the API secret.
    pub async fn exchange_access_token(&self, request_token: &str) -> Result<AccessTokenResponse> {
        validate_required(&[("request_token", request_token)])?;
        debug!("Exchanging social request token");

        let secret = self.client.require_api_secret()?.to_string();
        let mut query = QueryParams::new();
        query.add("token", request_token).add("secret", &secret);

        self.client.get(RequestType::Social, "access_token", query).await
    }

    /// Fetch the social profile behind an access token.
    pub async fn get_user_profile(&self, access_token: &str) -> Result<UserProfile> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Fetching social user profile");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        self.client.get(RequestType::Social, "userprofile", query).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;

    #[tokio::test]
    async fn test_token_exchange_requires_secret() {
        let api = SocialApi::new(LoginRadiusClient::from_api_key("test-key".to_string()));
        let err = api.exchange_access_token("req-tok").await.unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
