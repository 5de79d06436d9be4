use crate::client::LoginRadiusClient;
use crate::errors::Result;
use log::{error, info};
use loginradius_core::{require_guid, Event};

/// Legacy events feed (`hub` base, `/GetEvents/{secret}/{token}`).
///
/// The hub embeds both credentials in the URL path and expects them in GUID
/// format, so the constructor rejects anything else before a request can
/// leak a malformed URL.
#[derive(Debug, Clone)]
pub struct EventsApi {
    client: LoginRadiusClient,
    access_token: String,
}

impl EventsApi {
    pub fn new(client: LoginRadiusClient, access_token: &str) -> Result<Self> {
        require_guid("access_token", access_token)?;
        require_guid("api_secret", client.require_api_secret()?)?;

        Ok(Self {
            client,
            access_token: access_token.trim().to_string(),
        })
    }

    /// Fetch the events feed, surfacing any failure.
    pub async fn try_get_events(&self) -> Result<Vec<Event>> {
        let secret = self.client.require_api_secret()?;
        let path = format!("GetEvents/{}/{}", secret.trim(), self.access_token);
        let events: Vec<Event> = self.client.execute_hub(&path).await?;

        info!("Fetched {} event(s)", events.len());
        Ok(events)
    }

    /// Fetch the events feed; on any failure, log it and return an empty
    /// list. This matches the historical wrapper the feed's consumers rely
    /// on, which never propagated transport errors.
    pub async fn get_events(&self) -> Vec<Event> {
        match self.try_get_events().await {
            Ok(events) => events,
            Err(e) => {
                error!("Fetching events failed: {}", e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ApiError;
    use loginradius_core::CoreError;

    const GUID: &str = "c1b1e1a0-3b1f-4d6e-9a23-5a0857c12345";

    #[test]
    fn test_non_guid_token_rejected() {
        let client =
            LoginRadiusClient::with_credentials("key".to_string(), GUID.to_string());
        let err = EventsApi::new(client, "not-a-guid").unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::ValidationFailed(_))));
    }

    #[test]
    fn test_non_guid_secret_rejected() {
        let client =
            LoginRadiusClient::with_credentials("key".to_string(), "not-a-guid".to_string());
        let err = EventsApi::new(client, GUID).unwrap_err();
        assert!(matches!(err, ApiError::Core(CoreError::ValidationFailed(_))));
    }

    #[test]
    fn test_guid_credentials_accepted() {
        let client =
            LoginRadiusClient::with_credentials("key".to_string(), GUID.to_string());
        assert!(EventsApi::new(client, GUID).is_ok());
    }
}
