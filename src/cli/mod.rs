use clap::{Args, Parser, Subcommand, ValueEnum};

mod auth;
mod common;
mod mapping;
mod preset;
mod profile;
mod resource;
mod transform;

pub use auth::*;
pub use mapping::*;
pub use preset::*;
pub use profile::*;
pub use resource::*;
pub use transform::*;

#[cfg(feature = "write")]
const CLI_AFTER_HELP: &str = "EXAMPLES:\n  mediacli auth login --cloud-name demo --api-key 1234 --api-secret <secret>\n  mediacli preset list\n  mediacli preset get my_preset -o json\n  mediacli preset create --name my_preset --folder uploads --unsigned\n  mediacli resource get samples/cat --faces\n  mediacli profile create hd --representation w_1280,h_720,c_limit\n";

#[cfg(not(feature = "write"))]
const CLI_AFTER_HELP: &str = "EXAMPLES:\n  mediacli auth login --cloud-name demo --api-key 1234 --api-secret <secret>\n  mediacli preset list\n  mediacli preset get my_preset -o json\n  mediacli resource get samples/cat --faces\n";

#[cfg(feature = "write")]
const PRESET_ABOUT: &str = "List, view, create, and manage upload presets";
#[cfg(not(feature = "write"))]
const PRESET_ABOUT: &str = "List and view upload presets";

#[cfg(feature = "write")]
const MAPPING_ABOUT: &str = "List, view, create, and manage upload mappings";
#[cfg(not(feature = "write"))]
const MAPPING_ABOUT: &str = "List and view upload mappings";

#[cfg(feature = "write")]
const PROFILE_ABOUT: &str = "List, view, create, and manage adaptive streaming profiles";
#[cfg(not(feature = "write"))]
const PROFILE_ABOUT: &str = "List and view adaptive streaming profiles";

#[cfg(feature = "write")]
const TRANSFORM_ABOUT: &str = "View, create, and manage transformations";
#[cfg(not(feature = "write"))]
const TRANSFORM_ABOUT: &str = "View transformations";

#[cfg(feature = "write")]
const RESOURCE_ABOUT: &str = "Inspect, update, delete, and restore assets";
#[cfg(not(feature = "write"))]
const RESOURCE_ABOUT: &str = "Inspect assets";

#[derive(Parser, Debug)]
#[command(
    name = "mediacli",
    version,
    about = "Manage media cloud presets, mappings, profiles and assets from the terminal",
    after_help = CLI_AFTER_HELP
)]
pub struct Cli {
    #[arg(short = 'q', long, global = true, help = "Suppress all output")]
    pub quiet: bool,
    #[arg(short = 'v', long, global = true, action = clap::ArgAction::Count, help = "Increase verbosity (-v, -vv)")]
    pub verbose: u8,
    #[arg(long, global = true, help = "Show what would happen without executing")]
    pub dry_run: bool,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(subcommand, about = "Manage authentication")]
    Auth(AuthCommand),
    #[command(subcommand, about = PRESET_ABOUT)]
    Preset(PresetCommand),
    #[command(subcommand, about = MAPPING_ABOUT)]
    Mapping(MappingCommand),
    #[command(subcommand, about = PROFILE_ABOUT)]
    Profile(ProfileCommand),
    #[command(subcommand, about = TRANSFORM_ABOUT)]
    Transform(TransformCommand),
    #[command(subcommand, about = RESOURCE_ABOUT)]
    Resource(ResourceCommand),
    #[command(about = "Generate shell completions")]
    Completions(CompletionsArgs),
}

#[derive(Args, Debug)]
pub struct CompletionsArgs {
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

#[derive(ValueEnum, Debug, Clone)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell")]
    Pwsh,
}
