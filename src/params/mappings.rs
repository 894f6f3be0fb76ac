use super::{Params, require_opt};
use crate::error::{ParamsError, ParamsResult};
use serde::Serialize;

pub const MAX_MAPPING_RESULTS: u32 = 500;

/// Folder-to-URL-prefix mapping used for auto-upload.
///
/// The same object drives list (cursor, `max_results`) and the
/// create/update/delete calls (`folder`, `template`).
#[derive(Debug, Clone, Default, Serialize)]
pub struct UploadMappingParams {
    pub folder: Option<String>,
    pub template: Option<String>,
    pub max_results: Option<u32>,
    pub next_cursor: Option<String>,
}

impl UploadMappingParams {
    pub fn new(folder: impl Into<String>, template: impl Into<String>) -> Self {
        Self {
            folder: Some(folder.into()),
            template: Some(template.into()),
            ..Self::default()
        }
    }

    /// Create and update additionally need both sides of the mapping.
    pub fn check_mapping(&self) -> ParamsResult<()> {
        self.check()?;
        require_opt(self.folder.as_deref(), "folder")?;
        require_opt(self.template.as_deref(), "template")
    }
}

impl Params for UploadMappingParams {
    fn check(&self) -> ParamsResult<()> {
        match self.max_results {
            Some(value) if value > MAX_MAPPING_RESULTS => Err(ParamsError::OutOfRange {
                field: "max_results",
                max: MAX_MAPPING_RESULTS,
                value,
            }),
            _ => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_max_results() {
        let p = UploadMappingParams {
            max_results: Some(1000),
            ..Default::default()
        };
        assert!(matches!(
            p.check(),
            Err(ParamsError::OutOfRange { value: 1000, max: 500, .. })
        ));

        let p = UploadMappingParams {
            max_results: Some(500),
            ..Default::default()
        };
        assert!(p.check().is_ok());
    }

    #[test]
    fn mapping_needs_folder_and_template() {
        let mut p = UploadMappingParams::default();
        assert!(matches!(p.check_mapping(), Err(ParamsError::Missing("folder"))));

        p.folder = Some("wiki".into());
        assert!(matches!(p.check_mapping(), Err(ParamsError::Missing("template"))));

        let p = UploadMappingParams::new("wiki", "https://example.com/wiki/");
        assert!(p.check_mapping().is_ok());
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["folder"], "wiki");
        assert_eq!(dict["template"], "https://example.com/wiki/");
    }
}
