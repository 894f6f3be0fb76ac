use clap::{Args, Subcommand};
use mediacli::output::OutputFormat;

use super::common::parse_max_results;

#[derive(Subcommand, Debug)]
pub enum MappingCommand {
    #[command(about = "List upload mappings")]
    List(MappingListArgs),
    #[command(about = "Show the mapping for a folder")]
    Get(MappingGetArgs),
    #[cfg(feature = "write")]
    #[command(about = "Map a folder to a remote URL template")]
    Create(MappingWriteArgs),
    #[cfg(feature = "write")]
    #[command(about = "Change the URL template of a mapped folder")]
    Update(MappingWriteArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete a folder mapping")]
    Delete(MappingDeleteArgs),
}

#[derive(Args, Debug)]
pub struct MappingListArgs {
    #[arg(short = 'n', long, value_parser = parse_max_results, help = "Maximum mappings to return (1-500)")]
    pub max_results: Option<u32>,
    #[arg(long, help = "Cursor from a previous listing")]
    pub next_cursor: Option<String>,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct MappingGetArgs {
    pub folder: String,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct MappingWriteArgs {
    #[arg(long, help = "Folder name")]
    pub folder: String,
    #[arg(long, help = "URL prefix fetched for assets in the folder")]
    pub template: String,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct MappingDeleteArgs {
    pub folder: String,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
}
