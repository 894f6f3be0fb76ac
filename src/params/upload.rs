use super::{Params, ParamsDict, ResourceType, StringDict, flatten, require};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::{Transformation, serialize_transformation_list};
use serde::Serialize;
use std::path::PathBuf;

/// Source of an uploaded asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileDescription {
    /// A file on the local filesystem.
    Local(PathBuf),
    /// A remote URL (http, https, s3, gs) fetched by the service.
    Remote(String),
    /// In-memory bytes with the file name to report.
    Stream { file_name: String, data: Vec<u8> },
}

impl FileDescription {
    fn check(&self) -> ParamsResult<()> {
        match self {
            FileDescription::Local(path) if path.as_os_str().is_empty() => {
                Err(ParamsError::Missing("file_path"))
            }
            FileDescription::Remote(url) => require(url, "file"),
            FileDescription::Stream { file_name, .. } => require(file_name, "file_name"),
            FileDescription::Local(_) => Ok(()),
        }
    }

    /// Remote sources travel as a plain `file` parameter; others as multipart.
    pub fn remote_url(&self) -> Option<&str> {
        match self {
            FileDescription::Remote(url) => Some(url),
            _ => None,
        }
    }
}

fn check_file(file: &Option<FileDescription>) -> ParamsResult<()> {
    file.as_ref().ok_or(ParamsError::Missing("file"))?.check()
}

fn with_remote_file(mut dict: ParamsDict, file: &Option<FileDescription>) -> ParamsDict {
    if let Some(url) = file.as_ref().and_then(FileDescription::remote_url) {
        dict.insert("file".to_string(), url.to_string());
    }
    dict
}

/// Upload of any file as a raw asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RawUploadParams {
    #[serde(skip)]
    pub file: Option<FileDescription>,
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub public_id: Option<String>,
    pub public_id_prefix: Option<String>,
    pub folder: Option<String>,
    pub asset_folder: Option<String>,
    pub display_name: Option<String>,
    pub use_filename: Option<bool>,
    pub use_filename_as_display_name: Option<bool>,
    pub use_asset_folder_as_public_id_prefix: Option<bool>,
    pub unique_filename: Option<bool>,
    pub filename_override: Option<String>,
    pub overwrite: Option<bool>,
    pub invalidate: Option<bool>,
    pub backup: Option<bool>,
    pub tags: Vec<String>,
    pub context: StringDict,
    pub metadata: StringDict,
    pub r#type: Option<String>,
    pub upload_preset: Option<String>,
    pub notification_url: Option<String>,
}

impl Params for RawUploadParams {
    fn check(&self) -> ParamsResult<()> {
        check_file(&self.file)
    }

    fn to_params_dict(&self) -> ParamsResult<ParamsDict> {
        Ok(with_remote_file(flatten(self)?, &self.file))
    }
}

/// Image upload, including analysis and eager transformation options.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ImageUploadParams {
    #[serde(skip)]
    pub file: Option<FileDescription>,
    pub public_id: Option<String>,
    pub public_id_prefix: Option<String>,
    pub folder: Option<String>,
    pub asset_folder: Option<String>,
    pub display_name: Option<String>,
    pub use_filename: Option<bool>,
    pub use_filename_as_display_name: Option<bool>,
    pub use_asset_folder_as_public_id_prefix: Option<bool>,
    pub unique_filename: Option<bool>,
    pub overwrite: Option<bool>,
    pub invalidate: Option<bool>,
    pub backup: Option<bool>,
    pub tags: Vec<String>,
    pub context: StringDict,
    pub metadata: StringDict,
    pub r#type: Option<String>,
    pub upload_preset: Option<String>,
    pub notification_url: Option<String>,
    pub format: Option<String>,
    pub transformation: Option<Transformation>,
    #[serde(serialize_with = "serialize_transformation_list")]
    pub eager: Vec<Transformation>,
    pub eager_async: Option<bool>,
    pub faces: Option<bool>,
    pub colors: Option<bool>,
    pub image_metadata: Option<bool>,
    pub phash: Option<bool>,
    pub cinemagraph_analysis: Option<bool>,
    pub quality_analysis: Option<bool>,
    pub accessibility_analysis: Option<bool>,
    pub moderation: Option<String>,
    pub ocr: Option<String>,
    pub categorization: Option<String>,
    pub auto_tagging: Option<f64>,
    pub detection: Option<String>,
}

impl Params for ImageUploadParams {
    fn check(&self) -> ParamsResult<()> {
        check_file(&self.file)
    }

    fn to_params_dict(&self) -> ParamsResult<ParamsDict> {
        Ok(with_remote_file(flatten(self)?, &self.file))
    }
}

/// Re-process an already uploaded asset.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExplicitParams {
    pub public_id: String,
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub r#type: Option<String>,
    pub public_id_prefix: Option<String>,
    pub asset_folder: Option<String>,
    pub display_name: Option<String>,
    pub use_filename_as_display_name: Option<bool>,
    pub use_asset_folder_as_public_id_prefix: Option<bool>,
    pub overwrite: Option<bool>,
    pub invalidate: Option<bool>,
    pub tags: Vec<String>,
    pub context: StringDict,
    pub metadata: StringDict,
    #[serde(serialize_with = "serialize_transformation_list")]
    pub eager: Vec<Transformation>,
    pub eager_async: Option<bool>,
    pub cinemagraph_analysis: Option<bool>,
    pub quality_analysis: Option<bool>,
    pub accessibility_analysis: Option<bool>,
    pub notification_url: Option<String>,
}

impl ExplicitParams {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }
}

impl Params for ExplicitParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.public_id, "public_id")
    }
}
