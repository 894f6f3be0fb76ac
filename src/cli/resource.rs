use clap::{Args, Subcommand};
use mediacli::output::OutputFormat;
use mediacli::params::ResourceType;
#[cfg(feature = "write")]
use mediacli::transformation::Transformation;

use super::common::parse_max_results;
#[cfg(feature = "write")]
use super::common::{parse_key_value, parse_transformation};

#[derive(Subcommand, Debug)]
pub enum ResourceCommand {
    #[command(about = "Show details of a single asset")]
    Get(ResourceGetArgs),
    #[cfg(feature = "write")]
    #[command(about = "Update tags, context, and metadata of an asset")]
    Update(ResourceUpdateArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete assets by id, prefix, tag, or all")]
    Delete(ResourceDeleteArgs),
    #[cfg(feature = "write")]
    #[command(about = "Delete derived assets")]
    DeleteDerived(ResourceDeleteDerivedArgs),
    #[cfg(feature = "write")]
    #[command(about = "Restore deleted assets from backup")]
    Restore(ResourceRestoreArgs),
}

/// Asset location shared by every resource command.
#[derive(Args, Debug)]
pub struct AssetTypeArgs {
    #[arg(long, default_value = "image", help = "Resource type: image, video, raw")]
    pub resource_type: ResourceType,
    #[arg(long = "type", default_value = "upload", help = "Delivery type (upload, private, authenticated)")]
    pub delivery_type: String,
}

#[derive(Args, Debug)]
pub struct ResourceGetArgs {
    pub public_id: String,
    #[command(flatten)]
    pub asset: AssetTypeArgs,
    #[arg(long, help = "Include predominant colors")]
    pub colors: bool,
    #[arg(long, help = "Include detected faces")]
    pub faces: bool,
    #[arg(long, help = "Include IPTC, XMP and detailed Exif metadata")]
    pub image_metadata: bool,
    #[arg(long, help = "Include perceptual hash")]
    pub phash: bool,
    #[arg(long, help = "Include backed up versions")]
    pub versions: bool,
    #[arg(long, help = "Include quality analysis")]
    pub quality_analysis: bool,
    #[arg(long, help = "Include cinemagraph analysis")]
    pub cinemagraph_analysis: bool,
    #[arg(long, value_parser = parse_max_results, help = "Maximum derived assets to include")]
    pub max_results: Option<u32>,
    #[arg(short = 'o', long, value_enum, default_value_t = OutputFormat::Table)]
    pub output: OutputFormat,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ResourceUpdateArgs {
    pub public_id: String,
    #[command(flatten)]
    pub asset: AssetTypeArgs,
    #[arg(long, value_delimiter = ',', help = "Replace tags (comma-separated)")]
    pub tags: Vec<String>,
    #[arg(long = "context", value_parser = parse_key_value, help = "Context entry as key=value (repeatable)")]
    pub context: Vec<(String, String)>,
    #[arg(long = "metadata", value_parser = parse_key_value, help = "Structured metadata as key=value (repeatable)")]
    pub metadata: Vec<(String, String)>,
    #[arg(long, help = "Drop metadata values that fail validation")]
    pub clear_invalid: bool,
    #[arg(long, help = "Display name")]
    pub display_name: Option<String>,
    #[arg(long, help = "Move to asset folder")]
    pub asset_folder: Option<String>,
    #[arg(long, help = "Moderation status (approved, rejected)")]
    pub moderation_status: Option<String>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ResourceDeleteArgs {
    #[arg(help = "Public ids to delete")]
    pub public_ids: Vec<String>,
    #[command(flatten)]
    pub asset: AssetTypeArgs,
    #[arg(long, help = "Delete every asset whose public id starts with this prefix")]
    pub prefix: Option<String>,
    #[arg(long, help = "Delete every asset carrying this tag")]
    pub tag: Option<String>,
    #[arg(long, help = "Delete every asset of the given type")]
    pub all: bool,
    #[arg(long, help = "Keep the original and delete derived assets only")]
    pub keep_original: bool,
    #[arg(long, help = "Invalidate CDN cached copies")]
    pub invalidate: bool,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ResourceDeleteDerivedArgs {
    #[arg(help = "Derived resource ids to delete")]
    pub derived_ids: Vec<String>,
    #[command(flatten)]
    pub asset: AssetTypeArgs,
    #[arg(long, help = "Original asset whose derivatives are removed")]
    pub public_id: Option<String>,
    #[arg(long, value_parser = parse_transformation, help = "Derived transformation to remove (repeatable)")]
    pub transformation: Vec<Transformation>,
    #[arg(long, help = "Invalidate CDN cached copies")]
    pub invalidate: bool,
    #[arg(long, short = 'y', help = "Skip confirmation prompt")]
    pub yes: bool,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}

#[cfg(feature = "write")]
#[derive(Args, Debug)]
pub struct ResourceRestoreArgs {
    #[arg(required = true, help = "Public ids to restore")]
    pub public_ids: Vec<String>,
    #[command(flatten)]
    pub asset: AssetTypeArgs,
    #[arg(long, value_delimiter = ',', help = "Backup versions to restore, matched by position")]
    pub versions: Vec<String>,
    #[arg(short = 'o', long, value_enum)]
    pub output: Option<OutputFormat>,
}
