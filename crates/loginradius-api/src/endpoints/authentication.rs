use crate::client::{LoginRadiusClient, RequestType};
use crate::errors::Result;
use crate::params::{ApiOptionalParams, QueryParams};
use log::debug;
use loginradius_core::{
    require_email, validate_required, AccessTokenResponse, DeleteResponse, ExistsResponse,
    LoginResponse, PostResponse, UserProfile,
};
use serde_json::json;

/// Customer-facing authentication endpoints (`identity/v2/auth`).
///
/// Signed with the API key only; user identity comes from credentials or an
/// access token passed per call.
#[derive(Debug, Clone)]
pub struct AuthenticationApi {
    client: LoginRadiusClient,
}

impl AuthenticationApi {
    pub fn new(client: LoginRadiusClient) -> Self {
        Self { client }
    }

    /// Login by email and password; returns an access token plus a copy of
    /// the profile.
    pub async fn login_by_email(
        &self,
        email: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<LoginResponse> {
        validate_required(&[("email", email), ("password", password)])?;
        debug!("Login by email");

        let mut query = QueryParams::new();
        query.add("email", email).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login", query).await
    }

    /// Login by username and password.
    pub async fn login_by_username(
        &self,
        username: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<LoginResponse> {
        validate_required(&[("username", username), ("password", password)])?;
        debug!("Login by username");

        let mut query = QueryParams::new();
        query.add("username", username).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login", query).await
    }

    /// Login by phone number and password.
    pub async fn login_by_phone(
        &self,
        phone: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<LoginResponse> {
        validate_required(&[("phone", phone), ("password", password)])?;
        debug!("Login by phone");

        let mut query = QueryParams::new();
        query.add("phone", phone).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login", query).await
    }

    /// Login with a one-time passcode previously sent by SMS.
    ///
    /// Only the SMS template is honored here; the other optional parameters
    /// do not apply to passcode logins.
    pub async fn login_by_otp(
        &self,
        phone: &str,
        otp: &str,
        sms_template: Option<&str>,
    ) -> Result<LoginResponse> {
        validate_required(&[("phone", phone), ("otp", otp)])?;
        debug!("Login by one-time passcode");

        let mut query = QueryParams::new();
        query.add("phone", phone).add("otp", otp);
        query.add_opt("smstemplate", sms_template);

        self.client.get(RequestType::Authentication, "login", query).await
    }

    /// Send a login one-time passcode to a phone number.
    pub async fn send_otp(
        &self,
        phone: &str,
        sms_template: Option<&str>,
    ) -> Result<PostResponse> {
        validate_required(&[("phone", phone)])?;
        debug!("Sending one-time passcode");

        let mut query = QueryParams::new();
        query.add("phone", phone);
        query.add_opt("smstemplate", sms_template);

        self.client.get(RequestType::Authentication, "login/otp", query).await
    }

    /// Register a new account; `profile` is the registration payload
    /// (email list, password, any profile fields).
    pub async fn register(
        &self,
        profile: serde_json::Value,
        optional: &ApiOptionalParams,
    ) -> Result<PostResponse> {
        debug!("Registering account");

        let mut query = QueryParams::new();
        optional.append_to(&mut query);

        self.client
            .post(RequestType::Authentication, "register", query, Some(profile))
            .await
    }

    /// Verify an email address with the token from the verification email.
    pub async fn verify_email(
        &self,
        verification_token: &str,
        optional: &ApiOptionalParams,
    ) -> Result<PostResponse> {
        validate_required(&[("verification_token", verification_token)])?;
        debug!("Verifying email");

        let mut query = QueryParams::new();
        query.add("verificationtoken", verification_token);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "email", query).await
    }

    /// Check whether an email address is already registered.
    pub async fn check_email_availability(&self, email: &str) -> Result<ExistsResponse> {
        require_email("email", email)?;
        debug!("Checking email availability");

        let mut query = QueryParams::new();
        query.add("email", email);

        self.client.get(RequestType::Authentication, "email", query).await
    }

    /// Check whether a username is already taken.
    pub async fn check_username_availability(&self, username: &str) -> Result<ExistsResponse> {
        validate_required(&[("username", username)])?;
        debug!("Checking username availability");

        let mut query = QueryParams::new();
        query.add("username", username);

        self.client.get(RequestType::Authentication, "username", query).await
    }

    /// Send a password-reset email carrying a link to `reset_password_url`.
    pub async fn forgot_password(
        &self,
        email: &str,
        reset_password_url: &str,
        email_template: Option<&str>,
    ) -> Result<PostResponse> {
        require_email("email", email)?;
        validate_required(&[("reset_password_url", reset_password_url)])?;
        debug!("Requesting password reset email");

        let mut query = QueryParams::new();
        query.add("resetpasswordurl", reset_password_url);
        query.add_opt("emailtemplate", email_template);

        let body = json!({ "email": email });
        self.client
            .post(RequestType::Authentication, "password", query, Some(body))
            .await
    }

    /// Set a new password with the token from the reset email.
    pub async fn reset_password(
        &self,
        reset_token: &str,
        new_password: &str,
    ) -> Result<PostResponse> {
        validate_required(&[("reset_token", reset_token), ("new_password", new_password)])?;
        debug!("Resetting password");

        let body = json!({
            "resettoken": reset_token,
            "password": new_password,
        });
        self.client
            .put(RequestType::Authentication, "password/reset", QueryParams::new(), Some(body))
            .await
    }

    /// Change the password of a logged-in user.
    pub async fn change_password(
        &self,
        access_token: &str,
        old_password: &str,
        new_password: &str,
    ) -> Result<PostResponse> {
        validate_required(&[
            ("access_token", access_token),
            ("old_password", old_password),
            ("new_password", new_password),
        ])?;
        debug!("Changing password");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        let body = json!({
            "oldpassword": old_password,
            "newpassword": new_password,
        });
        self.client
            .put(RequestType::Authentication, "password/change", query, Some(body))
            .await
    }

    /// Fetch the profile of the user owning the access token.
    pub async fn get_profile_by_token(&self, access_token: &str) -> Result<UserProfile> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Fetching profile by access token");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        self.client.get(RequestType::Authentication, "account", query).await
    }

    /// Update profile fields of the user owning the access token.
    pub async fn update_profile_by_token(
        &self,
        access_token: &str,
        updates: serde_json::Value,
        optional: &ApiOptionalParams,
    ) -> Result<PostResponse> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Updating profile by access token");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);
        optional.append_to(&mut query);

        self.client
            .put(RequestType::Authentication, "account", query, Some(updates))
            .await
    }

    /// Check an access token's validity and expiry.
    pub async fn validate_access_token(&self, access_token: &str) -> Result<AccessTokenResponse> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Validating access token");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        self.client
            .get(RequestType::Authentication, "access_token/validate", query)
            .await
    }

    /// Invalidate an access token (log out).
    pub async fn invalidate_access_token(&self, access_token: &str) -> Result<PostResponse> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Invalidating access token");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        self.client
            .get(RequestType::Authentication, "access_token/invalidate", query)
            .await
    }

    /// Add another email address to the profile.
    pub async fn add_email(
        &self,
        access_token: &str,
        email: &str,
        email_type: &str,
        optional: &ApiOptionalParams,
    ) -> Result<PostResponse> {
        validate_required(&[
            ("access_token", access_token),
            ("email", email),
            ("email_type", email_type),
        ])?;
        debug!("Adding email to profile");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);
        optional.append_to(&mut query);

        let body = json!({ "email": email, "type": email_type });
        self.client
            .post(RequestType::Authentication, "email", query, Some(body))
            .await
    }

    /// Remove an email address from the profile.
    pub async fn remove_email(&self, access_token: &str, email: &str) -> Result<DeleteResponse> {
        validate_required(&[("access_token", access_token), ("email", email)])?;
        debug!("Removing email from profile");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);

        let body = json!({ "email": email });
        self.client
            .delete(RequestType::Authentication, "email", query, Some(body))
            .await
    }

    /// Kick off a passwordless email login for a username: the user gets a
    /// login link, the caller polls [`auto_login_ping`](Self::auto_login_ping)
    /// with the same client GUID until the link is clicked.
    pub async fn auto_login_by_username(
        &self,
        username: &str,
        client_guid: &str,
        auto_login_email_template: Option<&str>,
        welcome_email_template: Option<&str>,
    ) -> Result<PostResponse> {
        validate_required(&[("username", username), ("client_guid", client_guid)])?;
        debug!("Auto login by username");

        let mut query = QueryParams::new();
        query.add("username", username).add("clientguid", client_guid);
        query.add_opt("autologinemailtemplate", auto_login_email_template);
        query.add_opt("welcomeemailtemplate", welcome_email_template);

        self.client
            .get(RequestType::Authentication, "login/autologin", query)
            .await
    }

    /// Kick off a passwordless email login for an email address.
    pub async fn auto_login_by_email(
        &self,
        email: &str,
        client_guid: &str,
        auto_login_email_template: Option<&str>,
        welcome_email_template: Option<&str>,
    ) -> Result<PostResponse> {
        validate_required(&[("email", email), ("client_guid", client_guid)])?;
        debug!("Auto login by email");

        let mut query = QueryParams::new();
        query.add("email", email).add("clientguid", client_guid);
        query.add_opt("autologinemailtemplate", auto_login_email_template);
        query.add_opt("welcomeemailtemplate", welcome_email_template);

        self.client
            .get(RequestType::Authentication, "login/autologin", query)
            .await
    }

    /// Poll a pending passwordless login; succeeds with the login payload
    /// once the user has clicked the emailed link.
    pub async fn auto_login_ping(&self, client_guid: &str) -> Result<LoginResponse> {
        validate_required(&[("client_guid", client_guid)])?;
        debug!("Pinging pending auto login");

        let mut query = QueryParams::new();
        query.add("clientguid", client_guid);

        self.client
            .get(RequestType::Authentication, "login/autologin/ping", query)
            .await
    }

    /// Trigger account deletion, confirmed by the user over email.
    pub async fn delete_account_by_email_confirmation(
        &self,
        access_token: &str,
        delete_url: Option<&str>,
        email_template: Option<&str>,
    ) -> Result<DeleteResponse> {
        validate_required(&[("access_token", access_token)])?;
        debug!("Requesting account deletion by email confirmation");

        let mut query = QueryParams::new();
        query.add("access_token", access_token);
        query.add_opt("deleteurl", delete_url);
        query.add_opt("emailtemplate", email_template);

        self.client
            .delete(RequestType::Authentication, "account", query, None)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use loginradius_core::CoreError;
    use crate::errors::ApiError;

    fn api() -> AuthenticationApi {
        AuthenticationApi::new(LoginRadiusClient::from_api_key("test-key".to_string()))
    }

    #[tokio::test]
    async fn test_blank_credentials_rejected_before_request() {
        let err = api()
            .login_by_email("", "secret", &ApiOptionalParams::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "email"
        ));

        let err = api()
            .login_by_email("a@b.com", "   ", &ApiOptionalParams::default())
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "password"
        ));
    }

    #[tokio::test]
    async fn test_change_password_requires_all_arguments() {
        let err = api().change_password("tok", "old", "").await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "new_password"
        ));
    }

    #[tokio::test]
    async fn test_forgot_password_requires_reset_url() {
        let err = api().forgot_password("a@b.com", "", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_auto_login_requires_client_guid() {
        let err = api()
            .auto_login_by_username("jo", "", None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "client_guid"
        ));

        let err = api()
            .auto_login_by_email("", "guid-1", None, None)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "email"
        ));

        let err = api().auto_login_ping("  ").await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::MissingArgument(_))));
    }

    #[tokio::test]
    async fn test_availability_check_rejects_malformed_email() {
        let err = api().check_email_availability("not-an-email").await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::ValidationFailed(_))));
    }
}
