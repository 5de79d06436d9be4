//! Query-parameter bags shared by every endpoint method.

/// Ordered key/value bag serialized into the request query string.
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    entries: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter unconditionally.
    pub fn add(&mut self, key: &str, value: &str) -> &mut Self {
        self.entries.push((key.to_string(), value.to_string()));
        self
    }

    /// Add a parameter only when the value is `Some` and non-blank.
    pub fn add_opt(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        if let Some(value) = value {
            self.add_if_present(key, value);
        }
        self
    }

    /// Add a parameter only when the value is non-blank.
    ///
    /// The upstream API treats an empty template/url parameter the same as a
    /// bogus one, so blanks are dropped instead of sent.
    pub fn add_if_present(&mut self, key: &str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.add(key, value);
        }
        self
    }

    pub fn entries(&self) -> &[(String, String)] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Value of the first entry with the given key, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// Optional parameters accepted by most authentication endpoints.
///
/// Endpoint methods take this bag and append whatever is set; absent fields
/// never reach the wire.
#[derive(Debug, Clone, Default)]
pub struct ApiOptionalParams {
    /// Url of the email-verification landing page.
    pub verification_url: Option<String>,
    /// Name of the email template to send.
    pub email_template: Option<String>,
    /// Name of the SMS template to send.
    pub sms_template: Option<String>,
    /// Template of the welcome email sent after verification.
    pub welcome_email_template: Option<String>,
    /// Recaptcha response, required once an account is locked out.
    pub recaptcha_response: Option<String>,
    /// Comma-separated projection of profile fields to return.
    pub fields: Option<String>,
}

impl ApiOptionalParams {
    /// Append every set field to the query under its wire name.
    pub fn append_to(&self, query: &mut QueryParams) {
        query.add_opt("verificationurl", self.verification_url.as_deref());
        query.add_opt("emailtemplate", self.email_template.as_deref());
        query.add_opt("smstemplate", self.sms_template.as_deref());
        query.add_opt("welcomeemailtemplate", self.welcome_email_template.as_deref());
        query.add_opt("g-recaptcha-response", self.recaptcha_response.as_deref());
        query.add_opt("fields", self.fields.as_deref());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_params_ordering() {
        let mut query = QueryParams::new();
        query.add("email", "a@b.com").add("password", "secret");

        assert_eq!(query.len(), 2);
        assert_eq!(query.entries()[0], ("email".to_string(), "a@b.com".to_string()));
        assert_eq!(query.get("password"), Some("secret"));
        assert_eq!(query.get("missing"), None);
    }

    #[test]
    fn test_blank_values_are_dropped() {
        let mut query = QueryParams::new();
        query.add_if_present("smstemplate", "  ");
        query.add_opt("emailtemplate", None);
        query.add_opt("verificationurl", Some(""));
        assert!(query.is_empty());

        query.add_opt("emailtemplate", Some("welcome"));
        assert_eq!(query.len(), 1);
    }

    #[test]
    fn test_optional_params_injection() {
        let opts = ApiOptionalParams {
            email_template: Some("welcome".to_string()),
            recaptcha_response: Some("tok-123".to_string()),
            ..Default::default()
        };

        let mut query = QueryParams::new();
        query.add("email", "a@b.com");
        opts.append_to(&mut query);

        assert_eq!(query.len(), 3);
        assert_eq!(query.get("emailtemplate"), Some("welcome"));
        assert_eq!(query.get("g-recaptcha-response"), Some("tok-123"));
        assert_eq!(query.get("smstemplate"), None);
    }

    #[test]
    fn test_empty_optional_bag_adds_nothing() {
        let mut query = QueryParams::new();
        ApiOptionalParams::default().append_to(&mut query);
        assert!(query.is_empty());
    }
}
