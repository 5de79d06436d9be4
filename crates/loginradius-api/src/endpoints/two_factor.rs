use crate::client::{LoginRadiusClient, RequestType};
use crate::errors::Result;
use crate::params::{ApiOptionalParams, QueryParams};
use log::debug;
use loginradius_core::{validate_required, LoginResponse, SmsResponse, TwoFactorResponse};
use serde_json::json;

/// Two-factor login endpoints (`identity/v2/auth/login/2fa`).
///
/// First-factor logins return a [`TwoFactorResponse`]; while it still
/// carries a challenge, the verification endpoints finish the login with the
/// second-factor authentication token.
#[derive(Debug, Clone)]
pub struct TwoFactorApi {
    client: LoginRadiusClient,
}

impl TwoFactorApi {
    pub fn new(client: LoginRadiusClient) -> Self {
        Self { client }
    }

    /// First factor by email and password.
    pub async fn login_by_email(
        &self,
        email: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<TwoFactorResponse> {
        validate_required(&[("email", email), ("password", password)])?;
        debug!("2FA login by email");

        let mut query = QueryParams::new();
        query.add("email", email).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login/2fa", query).await
    }

    /// First factor by username and password.
    pub async fn login_by_username(
        &self,
        username: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<TwoFactorResponse> {
        validate_required(&[("username", username), ("password", password)])?;
        debug!("2FA login by username");

        let mut query = QueryParams::new();
        query.add("username", username).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login/2fa", query).await
    }

    /// First factor by phone number and password.
    pub async fn login_by_phone(
        &self,
        phone: &str,
        password: &str,
        optional: &ApiOptionalParams,
    ) -> Result<TwoFactorResponse> {
        validate_required(&[("phone", phone), ("password", password)])?;
        debug!("2FA login by phone");

        let mut query = QueryParams::new();
        query.add("phone", phone).add("password", password);
        optional.append_to(&mut query);

        self.client.get(RequestType::Authentication, "login/2fa", query).await
    }

    /// Finish the login with an SMS one-time passcode.
    pub async fn verify_with_otp(
        &self,
        second_factor_token: &str,
        otp: &str,
        sms_template: Option<&str>,
    ) -> Result<LoginResponse> {
        validate_required(&[
            ("second_factor_token", second_factor_token),
            ("otp", otp),
        ])?;
        debug!("Verifying second factor with OTP");

        let mut query = QueryParams::new();
        query
            .add("secondfactorauthenticationtoken", second_factor_token)
            .add("otp", otp);
        query.add_opt("smstemplate2fa", sms_template);

        self.client
            .get(RequestType::Authentication, "login/2fa/verification/otp", query)
            .await
    }

    /// Finish the login with an authenticator-app code.
    pub async fn verify_with_authenticator_code(
        &self,
        second_factor_token: &str,
        code: &str,
    ) -> Result<LoginResponse> {
        validate_required(&[
            ("second_factor_token", second_factor_token),
            ("code", code),
        ])?;
        debug!("Verifying second factor with authenticator code");

        let mut query = QueryParams::new();
        query
            .add("secondfactorauthenticationtoken", second_factor_token)
            .add("googleauthenticatorcode", code);

        self.client
            .get(
                RequestType::Authentication,
                "login/2fa/verification/googleauthenticatorcode",
                query,
            )
            .await
    }

    /// Change the phone number the second-factor OTP is sent to.
    pub async fn update_phone_number(
        &self,
        second_factor_token: &str,
        phone: &str,
        sms_template: Option<&str>,
    ) -> Result<SmsResponse> {
        validate_required(&[
            ("second_factor_token", second_factor_token),
            ("phone", phone),
        ])?;
        debug!("Updating 2FA phone number");

        let mut query = QueryParams::new();
        query.add("secondfactorauthenticationtoken", second_factor_token);
        query.add_opt("smstemplate2fa", sms_template);

        let body = json!({ "phoneno2fa": phone });
        self.client
            .put(RequestType::Authentication, "login/2fa", query, Some(body))
            .await
    }

    /// Resend the second-factor OTP.
    pub async fn resend_otp(
        &self,
        second_factor_token: &str,
        sms_template: Option<&str>,
    ) -> Result<SmsResponse> {
        validate_required(&[("second_factor_token", second_factor_token)])?;
        debug!("Resending 2FA OTP");

        let mut query = QueryParams::new();
        query.add("secondfactorauthenticationtoken", second_factor_token);
        query.add_opt("smstemplate2fa", sms_template);

        self.client
            .get(RequestType::Authentication, "login/2fa/resend", query)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use loginradius_core::CoreError;

    fn api() -> TwoFactorApi {
        TwoFactorApi::new(LoginRadiusClient::from_api_key("test-key".to_string()))
    }

    #[tokio::test]
    async fn test_verification_requires_challenge_token() {
        let err = api().verify_with_otp("", "123456", None).await.unwrap_err();
        assert!(matches!(
            err,
            ApiError::Core(CoreError::MissingArgument(ref name)) if name == "second_factor_token"
        ));
    }

    #[tokio::test]
    async fn test_phone_update_requires_phone() {
        let err = api().update_phone_number("tok", " ", None).await.unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::MissingArgument(_))));
    }
}
