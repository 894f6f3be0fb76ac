use super::{Params, require};
use crate::error::{ParamsError, ParamsResult};
use crate::transformation::Transformation;
use serde::Serialize;

/// Creation of a named transformation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CreateTransformParams {
    pub name: String,
    pub transformation: Option<Transformation>,
    pub allowed_for_strict: Option<bool>,
}

impl CreateTransformParams {
    pub fn new(name: impl Into<String>, transformation: Transformation) -> Self {
        Self {
            name: name.into(),
            transformation: Some(transformation),
            allowed_for_strict: None,
        }
    }
}

impl Params for CreateTransformParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.name, "name")?;
        match &self.transformation {
            Some(t) if !t.is_empty() => Ok(()),
            _ => Err(ParamsError::Missing("transformation")),
        }
    }
}

/// Update of a named or unnamed transformation.
///
/// `transformation` identifies the target, either a name or a raw string.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateTransformParams {
    pub transformation: String,
    pub unsafe_update: Option<Transformation>,
    pub allowed_for_strict: Option<bool>,
}

impl UpdateTransformParams {
    pub fn new(transformation: impl Into<String>) -> Self {
        Self {
            transformation: transformation.into(),
            ..Self::default()
        }
    }
}

impl Params for UpdateTransformParams {
    fn check(&self) -> ParamsResult<()> {
        require(&self.transformation, "transformation")
    }
}
