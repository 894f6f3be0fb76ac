use anyhow::{Context, Result};
use mediacli::client::ApiClient;
use mediacli::config::Config;

#[derive(Debug, Clone, Copy)]
pub struct AppContext {
    pub quiet: bool,
    pub verbose: u8,
    pub dry_run: bool,
}

pub fn load_config() -> Result<Config> {
    if let Some(config) = Config::from_env()? {
        return Ok(config);
    }
    if !Config::exists()? {
        return Err(anyhow::anyhow!(
            "Not logged in. Run mediacli auth login or set CLOUDINARY_URL"
        ));
    }
    Config::load().context("Failed to load config")
}

pub fn load_client() -> Result<ApiClient> {
    ApiClient::from_config(&load_config()?)
}
