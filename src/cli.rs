use crate::commands::{config as config_cmd, events, login, profile};
use crate::config::Config;
use crate::errors::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "lr")]
#[command(about = "A CLI for the LoginRadius identity API")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize configuration
    Init,
    /// Log a user in and print the access token
    Login(login::LoginArgs),
    /// Show a user profile
    Profile(profile::ProfileArgs),
    /// Show the events feed for an access token
    Events(events::EventsArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: config_cmd::ConfigCommands,
    },
}

pub async fn run_cli() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::new()?;

    match cli.command {
        Commands::Init => handle_init().await,
        Commands::Login(args) => login::handle_login(args, &config).await,
        Commands::Profile(args) => profile::handle_profile(args, &config).await,
        Commands::Events(args) => events::handle_events(args, &config).await,
        Commands::Config { action } => config_cmd::handle_config(action),
    }
}

async fn handle_init() -> Result<()> {
    use crate::display::{print_info, print_success, prompt_input, prompt_password};

    print_info("Initializing LoginRadius configuration...");

    let api_key = prompt_input("Enter your LoginRadius API key:", None)?;
    let api_secret =
        prompt_password("Enter your API secret (leave empty for auth-only use):")?;

    let mut config = Config::new()?;
    config.set_api_key(&api_key);
    if !api_secret.trim().is_empty() {
        config.set_api_secret(&api_secret);
    }

    // Test API connection
    print_info("Testing API connection...");
    let sdk = loginradius_api::LoginRadius::from_config(&config)?;
    match sdk.test_connection().await {
        Ok(true) => print_success("API connection successful!"),
        Ok(false) | Err(_) => {
            print_info("Warning: API connection test failed.");
            print_info("Your configuration has been saved, but please verify your API key.");
        }
    }

    config.save()?;
    print_success("Configuration saved successfully!");

    Ok(())
}
