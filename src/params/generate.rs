use super::{Params, ResourceType, require};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::{Transformation, serialize_transformation_list};
use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveFormat {
    #[default]
    Zip,
    Tgz,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArchiveMode {
    #[default]
    Create,
    Download,
}

/// Archive generation from a selection of assets.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ArchiveParams {
    #[serde(skip)]
    pub resource_type: ResourceType,
    pub r#type: Option<String>,
    pub mode: Option<ArchiveMode>,
    pub target_format: Option<ArchiveFormat>,
    pub target_public_id: Option<String>,
    pub public_ids: Vec<String>,
    pub tags: Vec<String>,
    pub prefixes: Vec<String>,
    #[serde(serialize_with = "serialize_transformation_list")]
    pub transformations: Vec<Transformation>,
    pub flatten_folders: Option<bool>,
    pub flatten_transformations: Option<bool>,
    pub keep_derived: Option<bool>,
    pub skip_transformation_name: Option<bool>,
    pub allow_missing: Option<bool>,
    pub use_original_filename: Option<bool>,
    pub expires_at: Option<i64>,
    pub notification_url: Option<String>,
}

impl Params for ArchiveParams {
    fn check(&self) -> ParamsResult<()> {
        if self.public_ids.is_empty() && self.tags.is_empty() && self.prefixes.is_empty() {
            return Err(ParamsError::MissingOneOf(&["public_ids", "tags", "prefixes"]));
        }
        Ok(())
    }
}

/// Split a multi-page asset (PDF, animated GIF) into single-page derivatives.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ExplodeParams {
    pub public_id: String,
    pub transformation: Option<Transformation>,
    pub r#type: Option<String>,
    pub format: Option<String>,
    pub notification_url: Option<String>,
}

impl ExplodeParams {
    pub fn new(public_id: impl Into<String>, transformation: Option<Transformation>) -> Self {
        Self {
            public_id: public_id.into(),
            transformation,
            ..Self::default()
        }
    }
}

impl Params for ExplodeParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.public_id, "public_id")?;
        match &self.transformation {
            Some(t) if !t.is_empty() => Ok(()),
            _ => Err(ParamsError::Missing("transformation")),
        }
    }
}

/// Animated image, video or PDF built from all assets sharing a tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MultiParams {
    pub tag: String,
    pub transformation: Option<Transformation>,
    pub format: Option<String>,
    pub notification_url: Option<String>,
    pub r#async: Option<bool>,
}

impl MultiParams {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }
}

impl Params for MultiParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.tag, "tag")
    }
}

/// Sprite image and CSS built from all images sharing a tag.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SpriteParams {
    pub tag: String,
    pub transformation: Option<Transformation>,
    pub format: Option<String>,
    pub notification_url: Option<String>,
    pub r#async: Option<bool>,
}

impl SpriteParams {
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }
}

impl Params for SpriteParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.tag, "tag")
    }
}

/// Text rendered into an image.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TextParams {
    pub text: String,
    pub public_id: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub font_color: Option<String>,
    pub font_weight: Option<String>,
    pub font_style: Option<String>,
    pub background: Option<String>,
    pub opacity: Option<u8>,
    pub text_decoration: Option<String>,
}

impl TextParams {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }
}

impl Params for TextParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.text, "text")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn archive_requires_a_selection() {
        assert!(matches!(
            ArchiveParams::default().check(),
            Err(ParamsError::MissingOneOf(["public_ids", "tags", "prefixes"]))
        ));

        let p = ArchiveParams {
            prefixes: vec!["folder/".into()],
            ..Default::default()
        };
        assert!(p.check().is_ok());
    }

    #[test]
    fn archive_serializes_enums_lowercase() {
        let p = ArchiveParams {
            tags: vec!["a".into()],
            mode: Some(ArchiveMode::Download),
            target_format: Some(ArchiveFormat::Tgz),
            ..Default::default()
        };
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["mode"], "download");
        assert_eq!(dict["target_format"], "tgz");
        assert!(!dict.contains_key("transformations"));
    }

    #[test]
    fn explode_requires_public_id_then_transformation() {
        let mut p = ExplodeParams::new("", None);
        assert!(matches!(p.check(), Err(ParamsError::Missing("public_id"))));

        p.public_id = "publicId".into();
        assert!(matches!(p.check(), Err(ParamsError::Missing("transformation"))));

        p.transformation = Some(Transformation::new());
        assert!(matches!(p.check(), Err(ParamsError::Missing("transformation"))));

        p.transformation = Some(Transformation::new().param("pg", "all"));
        assert!(p.check().is_ok());
        assert_eq!(p.to_params_dict().unwrap()["transformation"], "pg_all");
    }

    #[test]
    fn multi_requires_tag() {
        assert!(matches!(
            MultiParams::new("").check(),
            Err(ParamsError::Missing("tag"))
        ));
    }

    #[test]
    fn multi_serializes_async_flag() {
        let p = MultiParams {
            r#async: Some(true),
            ..MultiParams::new("animals")
        };
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["async"], "true");
        assert_eq!(dict["tag"], "animals");
    }

    #[test]
    fn sprite_requires_tag() {
        assert!(matches!(
            SpriteParams::new("").check(),
            Err(ParamsError::Missing("tag"))
        ));
    }

    #[test]
    fn text_requires_text() {
        assert!(matches!(
            TextParams::default().check(),
            Err(ParamsError::Missing("text"))
        ));
    }
}
