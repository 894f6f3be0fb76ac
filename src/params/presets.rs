use super::{Params, StringDict};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::{Transformation, serialize_transformation_list};
use serde::Serialize;

/// Settings of an upload preset.
///
/// `name` is optional on create (the service generates one) and addresses
/// the preset on update.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadPresetParams {
    pub name: Option<String>,
    pub unsigned: Option<bool>,
    pub disallow_public_id: Option<bool>,
    pub live: Option<bool>,
    pub folder: Option<String>,
    pub asset_folder: Option<String>,
    pub public_id_prefix: Option<String>,
    pub display_name: Option<String>,
    pub use_filename: Option<bool>,
    pub unique_filename: Option<bool>,
    pub use_filename_as_display_name: Option<bool>,
    pub use_asset_folder_as_public_id_prefix: Option<bool>,
    pub overwrite: Option<bool>,
    pub invalidate: Option<bool>,
    pub backup: Option<bool>,
    pub r#type: Option<String>,
    pub format: Option<String>,
    pub allowed_formats: Vec<String>,
    pub tags: Vec<String>,
    pub context: StringDict,
    pub metadata: StringDict,
    pub transformation: Option<Transformation>,
    #[serde(serialize_with = "serialize_transformation_list")]
    pub eager: Vec<Transformation>,
    pub eager_async: Option<bool>,
    pub moderation: Option<String>,
    pub quality_analysis: Option<bool>,
    pub cinemagraph_analysis: Option<bool>,
    pub notification_url: Option<String>,
    pub eval: Option<String>,
    pub on_success: Option<String>,
}

impl UploadPresetParams {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }
}

impl Params for UploadPresetParams {
    fn check(&self) -> ParamsResult<()> {
        if self.overwrite == Some(true) && self.unsigned == Some(true) {
            return Err(ParamsError::Conflict("overwrite", "unsigned"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_overwrite_with_unsigned() {
        let p = UploadPresetParams {
            overwrite: Some(true),
            unsigned: Some(true),
            ..Default::default()
        };
        assert!(matches!(
            p.check(),
            Err(ParamsError::Conflict("overwrite", "unsigned"))
        ));

        let p = UploadPresetParams {
            overwrite: Some(true),
            unsigned: Some(false),
            ..Default::default()
        };
        assert!(p.check().is_ok());
    }

    #[test]
    fn dictionary_keeps_scripts_verbatim() {
        let on_success = r#"current_asset.update({tags: ["autocaption"]});"#;
        let p = UploadPresetParams {
            folder: Some("api_test_folder_name".into()),
            eval: Some("upload_options['tags'] = 'x'".into()),
            on_success: Some(on_success.into()),
            allowed_formats: vec!["jpg".into(), "png".into()],
            ..UploadPresetParams::named("api_test_upload_preset")
        };
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["name"], "api_test_upload_preset");
        assert_eq!(dict["folder"], "api_test_folder_name");
        assert_eq!(dict["eval"], "upload_options['tags'] = 'x'");
        assert_eq!(dict["on_success"], on_success);
        assert_eq!(dict["allowed_formats"], "jpg,png");
    }
}
