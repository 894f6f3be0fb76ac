use anyhow::{Context, Result};
use dialoguer::{Input, Password};
use mediacli::auth::AuthMethod;
use mediacli::client::ApiClient;
use mediacli::config::{Config, DEFAULT_API_BASE};

use crate::cli::{AuthCommand, AuthLoginArgs};
use crate::context::{AppContext, load_config};
use crate::helpers::print_line;

pub async fn handle(ctx: &AppContext, cmd: AuthCommand) -> Result<()> {
    match cmd {
        AuthCommand::Login(args) => auth_login(ctx, args).await,
        AuthCommand::Status => auth_status(ctx).await,
        AuthCommand::Logout => {
            Config::clear()?;
            print_line(ctx, "Logged out.");
            Ok(())
        }
    }
}

async fn auth_login(ctx: &AppContext, args: AuthLoginArgs) -> Result<()> {
    let mut config = if let Some(url) = args.url {
        Config::from_cloudinary_url(&url)?
    } else {
        let cloud_name = match args.cloud_name {
            Some(name) => name,
            None => Input::new().with_prompt("Cloud name").interact_text()?,
        };
        let auth = if let Some(token) = args.oauth_token {
            AuthMethod::Bearer { token }
        } else {
            let api_key = match args.api_key {
                Some(key) => key,
                None => Input::new().with_prompt("API key").interact_text()?,
            };
            let api_secret = match args.api_secret {
                Some(secret) => secret,
                None => Password::new().with_prompt("API secret").interact()?,
            };
            AuthMethod::Basic {
                api_key,
                api_secret,
            }
        };
        Config {
            cloud_name,
            api_base: DEFAULT_API_BASE.to_string(),
            auth,
        }
    };
    if let Some(api_base) = args.api_base {
        config.api_base = api_base.trim_end_matches('/').to_string();
    }

    if ctx.dry_run {
        print_line(
            ctx,
            &format!(
                "Would save {} credentials for cloud {} to {}",
                config.auth.description(),
                config.cloud_name,
                Config::path()?.display()
            ),
        );
        return Ok(());
    }

    validate(&config)
        .await
        .context("Failed to validate credentials")?;
    config.save()?;
    print_line(ctx, "Saved credentials.");
    Ok(())
}

async fn auth_status(ctx: &AppContext) -> Result<()> {
    let from_env = Config::from_env()?.is_some();
    if !from_env && !Config::exists()? {
        print_line(ctx, "Not logged in.");
        return Ok(());
    }
    let config = load_config()?;
    validate(&config).await.context("Failed to validate auth")?;
    let source = if from_env {
        "from env".to_string()
    } else {
        format!("config: {}", Config::path()?.display())
    };
    print_line(
        ctx,
        &format!(
            "Logged in to cloud {} using {} {} ({source})",
            config.cloud_name,
            config.auth.description(),
            config.auth.masked()
        ),
    );
    Ok(())
}

/// Cheapest authenticated call: a one-item preset listing.
async fn validate(config: &Config) -> Result<()> {
    let client = ApiClient::from_config(config)?;
    client.list_upload_presets(None, Some(1)).await?;
    Ok(())
}
