//! # LoginRadius API
//!
//! HTTP client for the LoginRadius identity REST API.
//! This crate provides a typed interface over the remote endpoints:
//! authentication, two-factor login, account management, social login and
//! the legacy events feed.

pub mod client;
pub mod endpoints;
pub mod errors;
pub mod params;
pub mod sdk;

// Re-export common types for convenience
pub use client::*;
pub use endpoints::*;
pub use errors::*;
pub use params::*;
pub use sdk::*;

// Re-export core types that API consumers will need
pub use loginradius_core::{
    AccessTokenResponse, Event, LoginResponse, Result as CoreResult, TwoFactorResponse,
    UserProfile,
};
