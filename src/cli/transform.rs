use clap::{Args, Subcommand};
use mediacli::output::OutputFormat;
#[cfg(feature = "write")]
use mediacli::transformation::Transformation;

#[cfg(feature = "write")]
use super::common::parse_transformation;

#[derive(Subcommand, Debug)]
pub enum TransformCommand {
    #[command(about = "Show a named or chained transformation")]
    Get(TransformGetArgs),
    #[cfg(feature = "write")]
    #[command(about = "Create a named transformation")]
    Create(TransformCreateArgs),
    #[cfg(feature = "write")]
    #[command(about = "Update a transformation")]
    Update(TransformUpdateArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete a transformation")]
    Delete(TransformDeleteArgs),
}

#[derive(Args, Debug)]
pub struct TransformGetArgs {
    #[arg(help = "Transformation name or string (e.g. w_100,c_fill)")]
    pub transformation: String,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct TransformCreateArgs {
    pub name: String,
    #[arg(value_parser = parse_transformation)]
    pub transformation: Transformation,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", help = "Allow use under strict transformations")]
    pub allowed_for_strict: Option<bool>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct TransformUpdateArgs {
    #[arg(help = "Transformation name or string to update")]
    pub transformation: String,
    #[arg(long, value_parser = parse_transformation, help = "New definition for a named transformation")]
    pub unsafe_update: Option<Transformation>,
    #[arg(long, num_args = 0..=1, default_missing_value = "true", help = "Allow use under strict transformations")]
    pub allowed_for_strict: Option<bool>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct TransformDeleteArgs {
    pub transformation: String,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
}
