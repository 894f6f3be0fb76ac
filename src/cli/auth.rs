use clap::{Args, Subcommand};

#[derive(Subcommand, Debug)]
pub enum AuthCommand {
    #[command(about = "Log in and store credentials")]
    Login(AuthLoginArgs),
    #[command(about = "Show current authentication status")]
    Status,
    #[command(about = "Clear stored credentials")]
    Logout,
}

#[derive(Args, Debug)]
pub struct AuthLoginArgs {
    #[arg(
        long,
        env = "CLOUDINARY_URL",
        hide_env_values = true,
        help = "Connection URL in the form cloudinary://<api_key>:<api_secret>@<cloud_name>"
    )]
    pub url: Option<String>,
    #[arg(long, env = "CLOUDINARY_CLOUD_NAME", help = "Cloud name of the account")]
    pub cloud_name: Option<String>,
    #[arg(long, env = "CLOUDINARY_API_KEY", help = "API key for basic auth")]
    pub api_key: Option<String>,
    #[arg(
        long,
        env = "CLOUDINARY_API_SECRET",
        hide_env_values = true,
        help = "API secret for basic auth"
    )]
    pub api_secret: Option<String>,
    #[arg(
        long,
        env = "CLOUDINARY_OAUTH_TOKEN",
        hide_env_values = true,
        help = "OAuth bearer token (replaces the key/secret pair)"
    )]
    pub oauth_token: Option<String>,
    #[arg(
        long,
        env = "CLOUDINARY_API_BASE",
        help = "Override the API base URL (default https://api.cloudinary.com)"
    )]
    pub api_base: Option<String>,
}
