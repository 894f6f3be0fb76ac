use crate::rate_limit::FeatureRateLimits;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// A parsed response body together with transport metadata.
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    pub data: T,
    pub status: u16,
    pub rate_limits: FeatureRateLimits,
}

/// Acknowledgement returned by create/update/delete calls.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MessageResult {
    pub message: String,
    pub name: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadPreset {
    pub name: String,
    pub unsigned: bool,
    pub settings: Map<String, Value>,
    pub eval: Option<String>,
    pub on_success: Option<String>,
    pub external_id: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUploadPresetsResult {
    pub presets: Vec<UploadPreset>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UploadMapping {
    pub folder: String,
    pub template: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListUploadMappingsResult {
    pub mappings: Vec<UploadMapping>,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingProfileRepresentation {
    pub transformation: Value,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingProfile {
    pub name: String,
    pub display_name: Option<String>,
    pub predefined: bool,
    pub external_id: Option<String>,
    pub representations: Vec<StreamingProfileRepresentation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StreamingProfileResult {
    pub message: Option<String>,
    pub data: StreamingProfile,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListStreamingProfilesResult {
    pub data: Vec<StreamingProfile>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransformResult {
    pub name: String,
    pub allowed_for_strict: bool,
    pub used: bool,
    pub named: bool,
    pub info: Vec<Value>,
    pub derived: Vec<Value>,
    pub next_cursor: Option<String>,
}

/// Asset details. Fields not modelled here are kept in `extra`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Resource {
    pub asset_id: Option<String>,
    pub public_id: String,
    pub format: Option<String>,
    pub version: Option<u64>,
    pub resource_type: Option<String>,
    pub r#type: Option<String>,
    pub created_at: Option<String>,
    pub bytes: Option<i64>,
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub asset_folder: Option<String>,
    pub display_name: Option<String>,
    pub url: Option<String>,
    pub secure_url: Option<String>,
    pub tags: Vec<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelResResult {
    pub deleted: BTreeMap<String, String>,
    pub partial: bool,
    pub next_cursor: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DelDerivedResResult {
    pub deleted: BTreeMap<String, Value>,
}

/// Restored assets keyed by public id.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RestoreResult {
    pub restored: BTreeMap<String, Value>,
}

/// Vendor error envelope: `{"error": {"message": "..."}}`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorEnvelope {
    pub error: ErrorBody,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub(crate) struct ErrorBody {
    pub message: String,
}
