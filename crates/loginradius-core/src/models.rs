use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Error envelope returned by the API on non-2xx responses.
///
/// Example: `{"ErrorCode":936,"Message":"...","Description":"...","IsProviderError":false}`
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ErrorResponse {
    #[serde(rename = "ErrorCode")]
    pub error_code: i64,
    #[serde(rename = "Message", default)]
    pub message: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "IsProviderError", default)]
    pub is_provider_error: bool,
    #[serde(rename = "ProviderErrorResponse", default)]
    pub provider_error_response: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// Best human-readable text from the envelope.
    pub fn text(&self) -> &str {
        self.description
            .as_deref()
            .or(self.message.as_deref())
            .unwrap_or("Unknown API error")
    }
}

/// One entry of a profile's email list.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct EmailEntry {
    #[serde(rename = "Type", default)]
    pub email_type: Option<String>,
    #[serde(rename = "Value")]
    pub value: String,
}

/// A user identity as returned by the profile endpoints.
///
/// The API sends many more fields than an SDK can usefully type; anything not
/// listed here lands in `extra` so no payload is ever rejected.
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct UserProfile {
    #[serde(rename = "Uid", default)]
    pub uid: Option<String>,
    #[serde(rename = "ID", default)]
    pub id: Option<String>,
    #[serde(rename = "Provider", default)]
    pub provider: Option<String>,
    #[serde(rename = "Email", default)]
    pub email: Vec<EmailEntry>,
    #[serde(rename = "UserName", default)]
    pub user_name: Option<String>,
    #[serde(rename = "FullName", default)]
    pub full_name: Option<String>,
    #[serde(rename = "FirstName", default)]
    pub first_name: Option<String>,
    #[serde(rename = "LastName", default)]
    pub last_name: Option<String>,
    #[serde(rename = "PhoneId", default)]
    pub phone_id: Option<String>,
    #[serde(rename = "ImageUrl", default)]
    pub image_url: Option<String>,
    #[serde(rename = "Gender", default)]
    pub gender: Option<String>,
    #[serde(rename = "BirthDate", default)]
    pub birth_date: Option<String>,
    #[serde(rename = "Country", default)]
    pub country: Option<serde_json::Value>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "CreatedDate", default)]
    pub created_date: Option<String>,
    #[serde(rename = "ModifiedDate", default)]
    pub modified_date: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

impl UserProfile {
    /// Primary email address, falling back to the first one on record.
    pub fn primary_email(&self) -> Option<&str> {
        self.email
            .iter()
            .find(|e| e.email_type.as_deref() == Some("Primary"))
            .or_else(|| self.email.first())
            .map(|e| e.value.as_str())
    }
}

/// Response of the login endpoints: token plus a copy of the profile.
///
/// Note the mixed wire casing: the token fields are lowercase, the profile
/// is PascalCase.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoginResponse {
    pub access_token: String,
    /// Token expiry timestamp, as the API sends it.
    #[serde(default)]
    pub expires_in: Option<String>,
    #[serde(rename = "Profile", default)]
    pub profile: Option<UserProfile>,
}

/// Bare access-token payload (token generation, validation, exchange).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AccessTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<String>,
}

/// `{"IsPosted": true}` acknowledgement envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct PostResponse {
    #[serde(rename = "IsPosted")]
    pub is_posted: bool,
}

/// `{"IsDeleted": true}` acknowledgement envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct DeleteResponse {
    #[serde(rename = "IsDeleted")]
    pub is_deleted: bool,
}

/// `{"IsExist": true}` availability-check envelope.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ExistsResponse {
    #[serde(rename = "IsExist")]
    pub is_exist: bool,
}

/// Acknowledgement of an SMS dispatch (OTP sends, phone updates).
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SmsResponse {
    #[serde(rename = "Sid", default)]
    pub sid: Option<String>,
}

/// Second-factor challenge details issued when a 2FA login needs another step.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SecondFactorAuthentication {
    #[serde(rename = "SecondFactorAuthenticationToken")]
    pub second_factor_authentication_token: String,
    #[serde(rename = "ExpireIn", default)]
    pub expire_in: Option<String>,
    #[serde(rename = "QRCode", default)]
    pub qr_code: Option<String>,
    #[serde(rename = "ManualEntryCode", default)]
    pub manual_entry_code: Option<String>,
    #[serde(rename = "IsGoogleAuthenticatorVerified", default)]
    pub is_google_authenticator_verified: bool,
    #[serde(rename = "IsOTPAuthenticatorVerified", default)]
    pub is_otp_authenticator_verified: bool,
}

/// Response of the 2FA login endpoints.
///
/// Either carries a `SecondFactorAuthentication` challenge (second step still
/// pending) or the completed login: profile plus access token.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TwoFactorResponse {
    #[serde(rename = "SecondFactorAuthentication", default)]
    pub second_factor_authentication: Option<SecondFactorAuthentication>,
    #[serde(rename = "Profile", default)]
    pub profile: Option<UserProfile>,
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub expires_in: Option<String>,
}

impl TwoFactorResponse {
    /// True while the second factor still has to be presented.
    pub fn needs_second_factor(&self) -> bool {
        self.second_factor_authentication.is_some() && self.access_token.is_none()
    }
}

/// One entry of the legacy events feed.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Event {
    #[serde(rename = "Id", default)]
    pub id: Option<String>,
    #[serde(rename = "Name", default)]
    pub name: Option<String>,
    #[serde(rename = "Provider", default)]
    pub provider: Option<String>,
    #[serde(rename = "Value", default)]
    pub value: Option<String>,
    #[serde(rename = "CreatedDate", default)]
    pub created_date: Option<String>,
    #[serde(flatten)]
    pub extra: HashMap<String, serde_json::Value>, // Catch unknown fields
}

impl Event {
    /// Parsed creation timestamp, `None` when absent or not RFC 3339.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_date
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_envelope_parsing() {
        let json = r#"{"ErrorCode":936,"Message":"file not found","Description":"The requested file was not found","IsProviderError":false,"ProviderErrorResponse":null}"#;
        let err: ErrorResponse = serde_json::from_str(json).unwrap();
        assert_eq!(err.error_code, 936);
        assert_eq!(err.text(), "The requested file was not found");
        assert!(!err.is_provider_error);
    }

    #[test]
    fn test_error_envelope_prefers_description() {
        let err: ErrorResponse = serde_json::from_str(r#"{"ErrorCode":1}"#).unwrap();
        assert_eq!(err.text(), "Unknown API error");
    }

    #[test]
    fn test_profile_parsing_with_unknown_fields() {
        let json = r#"{
            "Uid": "5b1f14c0cbd44f6e9a235a0857c12345",
            "ID": "a1b2c3",
            "Provider": "Email",
            "Email": [{"Type": "Primary", "Value": "user@example.com"}],
            "FirstName": "Jo",
            "LastName": "Doe",
            "CreatedDate": "2024-02-01T09:27:07Z",
            "PositionInformation": {"Company": "Acme"}
        }"#;
        let profile: UserProfile = serde_json::from_str(json).unwrap();
        assert_eq!(profile.uid.as_deref(), Some("5b1f14c0cbd44f6e9a235a0857c12345"));
        assert_eq!(profile.primary_email(), Some("user@example.com"));
        assert!(profile.extra.contains_key("PositionInformation"));
    }

    #[test]
    fn test_primary_email_fallback() {
        let profile = UserProfile {
            email: vec![EmailEntry {
                email_type: Some("Secondary".to_string()),
                value: "second@example.com".to_string(),
            }],
            ..Default::default()
        };
        assert_eq!(profile.primary_email(), Some("second@example.com"));
    }

    #[test]
    fn test_login_response_mixed_casing() {
        let json = r#"{
            "Profile": {"Uid": "u-1", "Email": [{"Type": "Primary", "Value": "a@b.com"}]},
            "access_token": "2b7e1b89-e251-4507-b481-b4a1f82b0003",
            "expires_in": "2026-09-14T07:30:00Z"
        }"#;
        let login: LoginResponse = serde_json::from_str(json).unwrap();
        assert_eq!(login.access_token, "2b7e1b89-e251-4507-b481-b4a1f82b0003");
        assert_eq!(login.profile.unwrap().uid.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_two_factor_challenge_state() {
        let json = r#"{
            "SecondFactorAuthentication": {
                "SecondFactorAuthenticationToken": "ff1c0b2a-0000-0000-0000-000000000000",
                "ExpireIn": "2026-09-14T07:30:00Z"
            },
            "Profile": null,
            "access_token": null
        }"#;
        let resp: TwoFactorResponse = serde_json::from_str(json).unwrap();
        assert!(resp.needs_second_factor());

        let done: TwoFactorResponse = serde_json::from_str(
            r#"{"Profile": {"Uid": "u-1"}, "access_token": "tok", "expires_in": null}"#,
        )
        .unwrap();
        assert!(!done.needs_second_factor());
    }

    #[test]
    fn test_event_timestamp_parsing() {
        let json = r#"{"Id":"1","Name":"login","Provider":"facebook","CreatedDate":"2024-02-01T09:27:07Z","Ip":"10.0.0.1"}"#;
        let event: Event = serde_json::from_str(json).unwrap();
        assert!(event.created_at().is_some());
        assert!(event.extra.contains_key("Ip"));

        let no_date: Event = serde_json::from_str(r#"{"Name":"login"}"#).unwrap();
        assert!(no_date.created_at().is_none());
    }
}
