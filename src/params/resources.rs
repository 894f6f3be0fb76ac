use super::{Params, ResourceType, StringDict, require};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::{Transformation, serialize_optional_transformation_list};
use serde::Serialize;

fn default_type() -> String {
    "upload".to_string()
}

/// Details of a single asset.
#[derive(Debug, Clone, Serialize)]
pub struct GetResourceParams {
    #[serde(skip)]
    pub public_id: String,
    #[serde(skip)]
    pub resource_type: ResourceType,
    #[serde(skip)]
    pub r#type: String,
    pub colors: Option<bool>,
    pub exif: Option<bool>,
    pub faces: Option<bool>,
    pub image_metadata: Option<bool>,
    pub media_metadata: Option<bool>,
    pub pages: Option<bool>,
    pub phash: Option<bool>,
    pub coordinates: Option<bool>,
    pub versions: Option<bool>,
    pub max_results: Option<u32>,
    pub derived_next_cursor: Option<String>,
    pub cinemagraph_analysis: Option<bool>,
    pub quality_analysis: Option<bool>,
    pub accessibility_analysis: Option<bool>,
}

impl GetResourceParams {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            resource_type: ResourceType::default(),
            r#type: default_type(),
            colors: None,
            exif: None,
            faces: None,
            image_metadata: None,
            media_metadata: None,
            pages: None,
            phash: None,
            coordinates: None,
            versions: None,
            max_results: None,
            derived_next_cursor: None,
            cinemagraph_analysis: None,
            quality_analysis: None,
            accessibility_analysis: None,
        }
    }
}

impl Params for GetResourceParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.public_id, "public_id")
    }
}

/// Update of an existing asset's tags, context, metadata and moderation.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateParams {
    #[serde(skip)]
    pub public_id: String,
    #[serde(skip)]
    pub resource_type: ResourceType,
    #[serde(skip)]
    pub r#type: String,
    pub tags: Vec<String>,
    pub context: StringDict,
    pub metadata: StringDict,
    pub clear_invalid: Option<bool>,
    pub moderation_status: Option<String>,
    pub display_name: Option<String>,
    pub asset_folder: Option<String>,
    pub unique_display_name: Option<bool>,
    pub notification_url: Option<String>,
}

impl UpdateParams {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            resource_type: ResourceType::default(),
            r#type: default_type(),
            tags: Vec::new(),
            context: StringDict::new(),
            metadata: StringDict::new(),
            clear_invalid: None,
            moderation_status: None,
            display_name: None,
            asset_folder: None,
            unique_display_name: None,
            notification_url: None,
        }
    }
}

impl Params for UpdateParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.public_id, "public_id")
    }
}

/// Bulk deletion by public ids, prefix, tag, or everything of a type.
#[derive(Debug, Clone, Serialize)]
pub struct DelResParams {
    #[serde(skip)]
    pub resource_type: ResourceType,
    #[serde(skip)]
    pub r#type: String,
    pub public_ids: Vec<String>,
    pub prefix: Option<String>,
    #[serde(skip)]
    pub tag: Option<String>,
    pub all: Option<bool>,
    pub keep_original: Option<bool>,
    pub invalidate: Option<bool>,
    pub next_cursor: Option<String>,
}

impl Default for DelResParams {
    fn default() -> Self {
        Self {
            resource_type: ResourceType::default(),
            r#type: default_type(),
            public_ids: Vec::new(),
            prefix: None,
            tag: None,
            all: None,
            keep_original: None,
            invalidate: None,
            next_cursor: None,
        }
    }
}

impl Params for DelResParams {
    fn check(&self) -> ParamsResult<()> {
        let has_prefix = self.prefix.as_deref().is_some_and(|p| !p.is_empty());
        let has_tag = self.tag.as_deref().is_some_and(|t| !t.is_empty());
        if self.public_ids.is_empty() && !has_prefix && !has_tag && self.all != Some(true) {
            return Err(ParamsError::MissingOneOf(&["public_ids", "prefix", "tag", "all"]));
        }
        Ok(())
    }
}

/// Deletion of derived assets, by derived id or by transformation.
#[derive(Debug, Clone, Serialize)]
pub struct DelDerivedResParams {
    #[serde(skip)]
    pub resource_type: ResourceType,
    #[serde(skip)]
    pub r#type: String,
    #[serde(rename = "derived_resource_ids")]
    pub derived_resources: Option<Vec<String>>,
    #[serde(serialize_with = "serialize_optional_transformation_list")]
    pub transformations: Option<Vec<Transformation>>,
    #[serde(skip)]
    pub public_id: Option<String>,
    pub invalidate: Option<bool>,
}

impl Default for DelDerivedResParams {
    fn default() -> Self {
        Self {
            resource_type: ResourceType::default(),
            r#type: default_type(),
            derived_resources: None,
            transformations: None,
            public_id: None,
            invalidate: None,
        }
    }
}

impl DelDerivedResParams {
    pub(crate) fn has_transformations(&self) -> bool {
        self.transformations.as_ref().is_some_and(|t| !t.is_empty())
    }
}

impl Params for DelDerivedResParams {
    fn check(&self) -> ParamsResult<()> {
        if self.derived_resources.is_none() && self.transformations.is_none() {
            return Err(ParamsError::MissingOneOf(&["derived_resources", "transformations"]));
        }
        let derived = self.derived_resources.as_ref().map_or(0, Vec::len);
        let transformations = self.transformations.as_ref().map_or(0, Vec::len);
        if derived + transformations == 0 {
            return Err(ParamsError::Empty("derived_resources"));
        }
        if derived > 0 && transformations > 0 {
            return Err(ParamsError::Exclusive("derived_resources", "transformations"));
        }
        if self.has_transformations() {
            require(self.public_id.as_deref().unwrap_or_default(), "public_id")?;
        }
        Ok(())
    }
}

/// Restore of backed-up assets.
#[derive(Debug, Clone, Serialize)]
pub struct RestoreParams {
    #[serde(skip)]
    pub resource_type: ResourceType,
    #[serde(skip)]
    pub r#type: String,
    pub public_ids: Vec<String>,
    pub versions: Vec<String>,
}

impl Default for RestoreParams {
    fn default() -> Self {
        Self {
            resource_type: ResourceType::default(),
            r#type: default_type(),
            public_ids: Vec::new(),
            versions: Vec::new(),
        }
    }
}

impl Params for RestoreParams {
    fn check(&self) -> ParamsResult<()> {
        if self.public_ids.iter().all(|id| id.trim().is_empty()) {
            return Err(ParamsError::Empty("public_ids"));
        }
        Ok(())
    }
}

/// Destroy of a single asset through the Upload API.
#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletionParams {
    pub public_id: String,
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub r#type: Option<String>,
    pub invalidate: Option<bool>,
}

impl DeletionParams {
    pub fn new(public_id: impl Into<String>) -> Self {
        Self {
            public_id: public_id.into(),
            ..Self::default()
        }
    }
}

impl Params for DeletionParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.public_id, "public_id")
    }
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct RenameParams {
    pub from_public_id: String,
    pub to_public_id: String,
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub r#type: Option<String>,
    pub to_type: Option<String>,
    pub overwrite: Option<bool>,
    pub invalidate: Option<bool>,
}

impl RenameParams {
    pub fn new(from_public_id: impl Into<String>, to_public_id: impl Into<String>) -> Self {
        Self {
            from_public_id: from_public_id.into(),
            to_public_id: to_public_id.into(),
            ..Self::default()
        }
    }
}

impl Params for RenameParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.from_public_id, "from_public_id")?;
        require(&self.to_public_id, "to_public_id")
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TagCommand {
    #[default]
    Add,
    Remove,
    Replace,
    RemoveAll,
}

/// Add, remove or replace a tag on a set of assets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TagParams {
    pub tag: Option<String>,
    pub public_ids: Vec<String>,
    pub command: TagCommand,
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub r#type: Option<String>,
}

impl Params for TagParams {
    fn check(&self) -> ParamsResult<()> {
        if self.public_ids.is_empty() {
            return Err(ParamsError::Empty("public_ids"));
        }
        if self.command != TagCommand::RemoveAll {
            require(self.tag.as_deref().unwrap_or_default(), "tag")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TEST_PUBLIC_ID: &str = "mediacli_test_public_id";

    #[test]
    fn get_resource_requires_public_id() {
        assert!(matches!(
            GetResourceParams::new("").check(),
            Err(ParamsError::Missing("public_id"))
        ));
    }

    #[test]
    fn get_resource_params_dictionary() {
        let p = GetResourceParams {
            cinemagraph_analysis: Some(true),
            ..GetResourceParams::new(TEST_PUBLIC_ID)
        };
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["cinemagraph_analysis"], "true");
        assert!(!dict.contains_key("public_id"));
        assert!(!dict.contains_key("type"));
    }

    #[test]
    fn update_requires_public_id() {
        assert!(matches!(
            UpdateParams::new("").check(),
            Err(ParamsError::Missing("public_id"))
        ));
    }

    #[test]
    fn update_resource_params_dictionary() {
        let p = UpdateParams {
            metadata: [("metadataFieldId", "metadataValue")].into_iter().collect(),
            clear_invalid: Some(true),
            ..UpdateParams::new(TEST_PUBLIC_ID)
        };
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["metadata"], "metadataFieldId=metadataValue");
        assert_eq!(dict["clear_invalid"], "true");
        assert!(!dict.contains_key("context"));
    }

    #[test]
    fn del_res_requires_selector() {
        let mut p = DelResParams::default();
        assert!(matches!(p.check(), Err(ParamsError::MissingOneOf(_))));

        p.tag = Some(String::new());
        assert!(p.check().is_err());

        p.all = Some(true);
        assert!(p.check().is_ok());
    }

    #[test]
    fn del_derived_res_checks_in_order() {
        let mut p = DelDerivedResParams::default();
        assert!(matches!(p.check(), Err(ParamsError::MissingOneOf(_))));

        p.derived_resources = Some(Vec::new());
        assert!(matches!(p.check(), Err(ParamsError::Empty(_))));

        p.transformations = Some(vec![Transformation::new()]);
        assert!(matches!(p.check(), Err(ParamsError::Missing("public_id"))));

        p.public_id = Some("sample".into());
        assert!(p.check().is_ok());
    }

    #[test]
    fn del_derived_res_rejects_ids_with_transformations() {
        let p = DelDerivedResParams {
            derived_resources: Some(vec!["d1".into(), "d2".into()]),
            transformations: Some(vec![Transformation::new().width(100)]),
            public_id: Some("sample".into()),
            ..Default::default()
        };
        assert!(matches!(
            p.check(),
            Err(ParamsError::Exclusive("derived_resources", "transformations"))
        ));
    }

    #[test]
    fn del_derived_res_by_ids_needs_no_public_id() {
        let p = DelDerivedResParams {
            derived_resources: Some(vec!["abc".into(), "def".into()]),
            ..Default::default()
        };
        assert!(p.check().is_ok());
        assert_eq!(p.to_params_dict().unwrap()["derived_resource_ids"], "abc,def");
    }

    #[test]
    fn deletion_requires_public_id() {
        assert!(matches!(
            DeletionParams::new("").check(),
            Err(ParamsError::Missing("public_id"))
        ));
    }

    #[test]
    fn rename_requires_both_ids() {
        let mut p = RenameParams::new("", "");
        assert!(matches!(p.check(), Err(ParamsError::Missing("from_public_id"))));

        p.from_public_id = "FromPublicId".into();
        assert!(matches!(p.check(), Err(ParamsError::Missing("to_public_id"))));
    }

    #[test]
    fn restore_requires_public_id() {
        assert!(matches!(
            RestoreParams::default().check(),
            Err(ParamsError::Empty("public_ids"))
        ));
    }

    #[test]
    fn tag_params_emit_type() {
        let p = TagParams {
            r#type: Some("some_type".into()),
            ..Default::default()
        };
        assert_eq!(p.to_params_dict().unwrap()["type"], "some_type");
    }

    #[test]
    fn tag_params_require_public_ids() {
        let p = TagParams {
            tag: Some("animals".into()),
            ..Default::default()
        };
        assert!(matches!(p.check(), Err(ParamsError::Empty("public_ids"))));
    }

    #[test]
    fn tag_params_remove_all_needs_no_tag() {
        let mut p = TagParams {
            public_ids: vec!["a".into()],
            ..Default::default()
        };
        assert!(matches!(p.check(), Err(ParamsError::Missing("tag"))));

        p.command = TagCommand::RemoveAll;
        assert!(p.check().is_ok());
        assert_eq!(p.to_params_dict().unwrap()["command"], "remove_all");
    }
}
