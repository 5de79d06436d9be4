use crate::config::Config;
use crate::display::{display_profile, print_success, prompt_password};
use crate::errors::{LrError, Result};
use clap::Args;
use loginradius_api::{ApiOptionalParams, LoginRadius};

#[derive(Args)]
pub struct LoginArgs {
    /// Email to log in with
    #[arg(long, conflicts_with_all = ["username", "phone"])]
    pub email: Option<String>,
    /// Username to log in with
    #[arg(long, conflicts_with = "phone")]
    pub username: Option<String>,
    /// Phone number to log in with
    #[arg(long)]
    pub phone: Option<String>,
    /// Password (prompted when omitted)
    #[arg(long)]
    pub password: Option<String>,
    /// Email template for verification mails triggered by the login
    #[arg(long)]
    pub email_template: Option<String>,
}

pub async fn handle_login(args: LoginArgs, config: &Config) -> Result<()> {
    let sdk = LoginRadius::from_config(config)?;
    let auth = sdk.authentication();

    let password = match args.password {
        Some(password) => password,
        None => prompt_password("Password:")?,
    };

    let optional = ApiOptionalParams {
        email_template: args.email_template,
        ..Default::default()
    };

    let response = if let Some(email) = args.email.as_deref() {
        auth.login_by_email(email, &password, &optional).await?
    } else if let Some(username) = args.username.as_deref() {
        auth.login_by_username(username, &password, &optional).await?
    } else if let Some(phone) = args.phone.as_deref() {
        auth.login_by_phone(phone, &password, &optional).await?
    } else {
        return Err(LrError::InvalidInput(
            "Specify one of --email, --username or --phone".to_string(),
        ));
    };

    print_success("Login successful!");
    println!("access_token: {}", response.access_token);
    if let Some(expires) = &response.expires_in {
        println!("expires:      {}", expires);
    }
    if let Some(profile) = &response.profile {
        println!();
        display_profile(profile);
    }

    Ok(())
}
