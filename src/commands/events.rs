use crate::config::Config;
use crate::display::display_events_table;
use crate::errors::Result;
use clap::Args;
use loginradius_api::LoginRadius;

#[derive(Args)]
pub struct EventsArgs {
    /// Access token of the user whose feed to fetch (GUID format)
    #[arg(long)]
    pub token: String,
}

pub async fn handle_events(args: EventsArgs, config: &Config) -> Result<()> {
    let sdk = LoginRadius::from_config(config)?;
    let events_api = sdk.events(&args.token)?;

    // The SDK's get_events swallows failures for legacy callers; the CLI
    // wants the real error.
    let events = events_api.try_get_events().await?;
    display_events_table(&events);

    Ok(())
}
