pub mod cli;
pub mod commands;
pub mod config;
pub mod display;
pub mod errors;

// Re-export main public types
pub use config::Config;
pub use errors::{LrError, Result};

// Re-export the SDK for library consumers
pub use loginradius_api::{
    AccountApi, AuthenticationApi, EventsApi, LoginRadius, LoginRadiusClient, SocialApi,
    TwoFactorApi,
};
pub use loginradius_core::{Event, LoginResponse, TwoFactorResponse, UserProfile};
