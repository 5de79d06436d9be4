use crate::client::{LoginRadiusClient, RequestType};
use crate::errors::Result;
use crate::params::QueryParams;
use log::debug;
use loginradius_core::{
    validate_required, AccessTokenResponse, DeleteResponse, PostResponse, UserProfile,
};
use serde_json::json;

/// Server-to-server account management endpoints (`identity/v2/manage`).
///
/// Every call here is signed with the API key *and* secret; the client
/// refuses the call up front when no secret is configured.
#[derive(Debug, Clone)]
pub struct AccountApi {
    client: LoginRadiusClient,
}

impl AccountApi {
    pub fn new(client: LoginRadiusClient) -> Self {
        Self { client }
    }

    /// Create an account directly, bypassing the registration email flow.
    pub async fn create(&self, profile: serde_json::Value) -> Result<UserProfile> {
        debug!("Creating account");
        self.client
            .post(RequestType::Account, "account", QueryParams::new(), Some(profile))
            .await
    }

    /// Fetch a profile by its UID.
    pub async fn get_by_uid(&self, uid: &str) -> Result<UserProfile> {
        validate_required(&[("uid", uid)])?;
        debug!("Fetching account by uid");

        let path = format!("account/{}", uid);
        self.client.get(RequestType::Account, &path, QueryParams::new()).await
    }

    /// Fetch a profile by email address.
    pub async fn get_by_email(&self, email: &str) -> Result<UserProfile> {
        validate_required(&[("email", email)])?;
        debug!("Fetching account by email");

        let mut query = QueryParams::new();
        query.add("email", email);
        self.client.get(RequestType::Account, "account", query).await
    }

    /// Fetch a profile by phone number.
    pub async fn get_by_phone(&self, phone: &str) -> Result<UserProfile> {
        validate_required(&[("phone", phone)])?;
        debug!("Fetching account by phone");

        let mut query = QueryParams::new();
        query.add("phone", phone);
        self.client.get(RequestType::Account, "account", query).await
    }

    /// Update profile fields on an account.
    ///
    /// With `null_support` the server interprets JSON nulls in `updates` as
    /// field deletions instead of ignoring them.
    pub async fn update(
        &self,
        uid: &str,
        updates: serde_json::Value,
        null_support: bool,
    ) -> Result<UserProfile> {
        validate_required(&[("uid", uid)])?;
        debug!("Updating account");

        let mut query = QueryParams::new();
        if null_support {
            query.add("nullsupport", "true");
        }

        let path = format!("account/{}", uid);
        self.client.put(RequestType::Account, &path, query, Some(updates)).await
    }

    /// Delete an account permanently.
    pub async fn delete(&self, uid: &str) -> Result<DeleteResponse> {
        validate_required(&[("uid", uid)])?;
        debug!("Deleting account");

        let path = format!("account/{}", uid);
        self.client
            .delete(RequestType::Account, &path, QueryParams::new(), None)
            .await
    }

    /// Set an account's password without knowing the old one.
    pub async fn set_password(&self, uid: &str, password: &str) -> Result<PostResponse> {
        validate_required(&[("uid", uid), ("password", password)])?;
        debug!("Setting account password");

        let path = format!("account/{}/password", uid);
        let body = json!({ "password": password });
        self.client.put(RequestType::Account, &path, QueryParams::new(), Some(body)).await
    }

    /// Issue an access token for an account without a login.
    pub async fn generate_access_token(&self, uid: &str) -> Result<AccessTokenResponse> {
        validate_required(&[("uid", uid)])?;
        debug!("Generating access token for account");

        let mut query = QueryParams::new();
        query.add("uid", uid);
        self.client
            .get(RequestType::Account, "account/access_token", query)
            .await
    }

    /// Invalidate the current verification status and resend the
    /// verification email.
    pub async fn resend_verification_email(
        &self,
        email: &str,
        verification_url: Option<&str>,
        email_template: Option<&str>,
    ) -> Result<PostResponse> {
        validate_required(&[("email", email)])?;
        debug!("Resending verification email");

        let mut query = QueryParams::new();
        query.add_opt("verificationurl", verification_url);
        query.add_opt("emailtemplate", email_template);

        let body = json!({ "email": email });
        self.client
            .put(RequestType::Account, "account/invalidateemail", query, Some(body))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use loginradius_core::CoreError;

    #[tokio::test]
    async fn test_account_calls_refused_without_secret() {
        // Key-only client: validation passes but credential injection fails.
        let api = AccountApi::new(LoginRadiusClient::from_api_key("test-key".to_string()));
        let err = api.get_by_uid("uid-1").await.unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[tokio::test]
    async fn test_blank_uid_rejected() {
        let api = AccountApi::new(LoginRadiusClient::with_credentials(
            "test-key".to_string(),
            "test-secret".to_string(),
        ));
        let err = api.delete("").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "uid"
        ));
    }
}
