use clap::{Args, Subcommand};
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::transformation::Transformation;

#[cfg(feature = "write")]
use super::common::parse_transformation;

#[derive(Subcommand, Debug)]
pub enum ProfileCommand {
    #[command(about = "List streaming profiles")]
    List(ProfileListArgs),
    #[command(about = "Show a streaming profile")]
    Get(ProfileGetArgs),
    #[cfg(feature = "write")]
    #[command(about = "Create a streaming profile")]
    Create(ProfileWriteArgs),
    #[cfg(feature = "write")]
    #[command(about = "Replace the representations of a streaming profile")]
    Update(ProfileWriteArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete a custom streaming profile")]
    Delete(ProfileDeleteArgs),
}

#[derive(Args, Debug)]
pub struct ProfileListArgs {
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[derive(Args, Debug)]
pub struct ProfileGetArgs {
    pub name: String,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ProfileWriteArgs {
    pub name: String,
    #[arg(long, help = "Human readable name")]
    pub display_name: Option<String>,
    #[arg(
        short = 'r',
        long = "representation",
        value_parser = parse_transformation,
        help = "Transformation of one representation, in order (repeatable)"
    )]
    pub representations: Vec<Transformation>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ProfileDeleteArgs {
    pub name: String,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
}
