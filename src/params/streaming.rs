use super::{Params, require};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::Transformation;
use serde::Serialize;

/// One rendition of an adaptive streaming profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Representation {
    pub transformation: Transformation,
}

impl Representation {
    pub fn new(transformation: Transformation) -> Self {
        Self { transformation }
    }
}

/// Fields shared by streaming profile create and update.
///
/// `representations` is sent as a JSON array of
/// `{"transformation": "..."}` objects.
#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamingProfileBaseParams {
    pub display_name: Option<String>,
    pub representations: Option<Vec<Representation>>,
}

impl Params for StreamingProfileBaseParams {
    fn check(&self) -> ParamsResult<()> {
        match &self.representations {
            None => Err(ParamsError::Missing("representations")),
            Some(list) if list.is_empty() => Err(ParamsError::Empty("representations")),
            Some(_) => Ok(()),
        }
    }
}

pub type StreamingProfileUpdateParams = StreamingProfileBaseParams;

#[derive(Debug, Clone, Default, Serialize)]
pub struct StreamingProfileCreateParams {
    pub name: String,
    #[serde(flatten)]
    pub base: StreamingProfileBaseParams,
}

impl StreamingProfileCreateParams {
    pub fn new(name: impl Into<String>, representations: Vec<Representation>) -> Self {
        Self {
            name: name.into(),
            base: StreamingProfileBaseParams {
                display_name: None,
                representations: Some(representations),
            },
        }
    }
}

impl Params for StreamingProfileCreateParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.name, "name")?;
        self.base.check()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_requires_representations() {
        let mut p = StreamingProfileBaseParams::default();
        assert!(matches!(p.check(), Err(ParamsError::Missing("representations"))));

        p.representations = Some(Vec::new());
        assert!(matches!(p.check(), Err(ParamsError::Empty("representations"))));
    }

    #[test]
    fn create_requires_name() {
        let p = StreamingProfileCreateParams::default();
        assert!(matches!(p.check(), Err(ParamsError::Missing("name"))));
    }

    #[test]
    fn representations_are_sent_as_json() {
        let p = StreamingProfileCreateParams::new(
            "custom_square",
            vec![
                Representation::new(Transformation::new().width(320).crop("limit")),
                Representation::new(Transformation::new().width(640).bit_rate("1m")),
            ],
        );
        assert!(p.check().is_ok());
        let dict = p.to_params_dict().unwrap();
        assert_eq!(dict["name"], "custom_square");
        assert_eq!(
            dict["representations"],
            r#"[{"transformation":"c_limit,w_320"},{"transformation":"br_1m,w_640"}]"#
        );
        assert!(!dict.contains_key("display_name"));
    }
}
