use crate::config::Config;
use crate::display::display_profile;
use crate::errors::{LrError, Result};
use clap::Args;
use loginradius_api::LoginRadius;

#[derive(Args)]
pub struct ProfileArgs {
    /// Access token of the logged-in user
    #[arg(long, conflicts_with = "uid")]
    pub token: Option<String>,
    /// Account UID (requires the API secret)
    #[arg(long)]
    pub uid: Option<String>,
    /// Print the raw JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}

pub async fn handle_profile(args: ProfileArgs, config: &Config) -> Result<()> {
    let sdk = LoginRadius::from_config(config)?;

    let profile = if let Some(token) = args.token.as_deref() {
        sdk.authentication().get_profile_by_token(token).await?
    } else if let Some(uid) = args.uid.as_deref() {
        sdk.account().get_by_uid(uid).await?
    } else {
        return Err(LrError::InvalidInput(
            "Specify one of --token or --uid".to_string(),
        ));
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&profile)?);
    } else {
        display_profile(&profile);
    }

    Ok(())
}
