use clap::{Args, Subcommand};
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::transformation::Transformation;

use super::common::parse_max_results;
#[cfg(feature = "write")]
use super::common::{parse_key_value, parse_transformation};

#[derive(Subcommand, Debug)]
pub enum PresetCommand {
    #[command(about = "List upload presets")]
    List(PresetListArgs),
    #[command(about = "Show an upload preset")]
    Get(PresetGetArgs),
    #[cfg(feature = "write")]
    #[command(about = "Create an upload preset")]
    Create(PresetCreateArgs),
    #[cfg(feature = "write")]
    #[command(about = "Update an upload preset")]
    Update(PresetUpdateArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete an upload preset")]
    Delete(PresetDeleteArgs),
}

#[derive(Args, Debug)]
pub struct PresetListArgs {
    #[arg(short = 'n', long, value_parser = parse_max_results, help = "Maximum presets to return (1-500)")]
    pub max_results: Option<u32>,
    #[arg(long, help = "Cursor from a previous listing")]
    pub next_cursor: Option<String>,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct PresetGetArgs {
    pub name: String,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

/// Settings shared by preset create and update.
#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct PresetSettingsArgs {
    #[arg(long, num_args = 0..=1, default_missing_value = "true", help = "Allow unsigned uploads")]
    pub unsigned: Option<bool>,
    #[arg(long, help = "Folder to upload into")]
    pub folder: Option<String>,
    #[arg(long, help = "Asset folder for dynamic folder accounts")]
    pub asset_folder: Option<String>,
    #[arg(long, help = "Prefix for generated public ids")]
    pub public_id_prefix: Option<String>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub overwrite: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub use_filename: Option<bool>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    pub unique_filename: Option<bool>,
    #[arg(long, value_delimiter = ',', help = "Comma-separated tags")]
    pub tags: Vec<String>,
    #[arg(long, value_delimiter = ',', help = "Comma-separated allowed formats")]
    pub allowed_formats: Vec<String>,
    #[arg(long = "context", value_parser = parse_key_value, help = "Context entry as key=value (repeatable)")]
    pub context: Vec<(String, String)>,
    #[arg(long = "metadata", value_parser = parse_key_value, help = "Structured metadata as key=value (repeatable)")]
    pub metadata: Vec<(String, String)>,
    #[arg(long, value_parser = parse_transformation, help = "Incoming transformation (e.g. w_500,c_limit)")]
    pub transformation: Option<Transformation>,
    #[arg(long, value_parser = parse_transformation, help = "Eager transformation (repeatable)")]
    pub eager: Vec<Transformation>,
    #[arg(long, help = "JavaScript evaluated before the upload")]
    pub eval: Option<String>,
    #[arg(long, help = "JavaScript evaluated after a successful upload")]
    pub on_success: Option<String>,
    #[arg(long, help = "Webhook URL notified on completion")]
    pub notification_url: Option<String>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct PresetCreateArgs {
    #[arg(long, help = "Preset name (generated by the server when omitted)")]
    pub name: Option<String>,
    #[command(flatten)]
    pub settings: PresetSettingsArgs,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct PresetUpdateArgs {
    pub name: String,
    #[command(flatten)]
    pub settings: PresetSettingsArgs,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", help = "Enable or disable the preset")]
    pub live: Option<bool>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct PresetDeleteArgs {
    pub name: String,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
}
