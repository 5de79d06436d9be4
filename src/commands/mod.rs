pub mod config;
pub mod events;
pub mod login;
pub mod profile;
