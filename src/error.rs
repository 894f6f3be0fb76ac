use thiserror::Error;

pub type ParamsResult<T> = Result<T, ParamsError>;

/// First rule a parameter object violates, reported by `Params::check`.
#[derive(Debug, Error)]
pub enum ParamsError {
    #[error("{0} must be specified")]
    Missing(&'static str),

    #[error("at least one of {} must be specified", .0.join(", "))]
    MissingOneOf(&'static [&'static str]),

    #[error("{0} must contain at least one item")]
    Empty(&'static str),

    #[error("only one of {0} or {1} can be set to true")]
    Conflict(&'static str, &'static str),

    #[error("{0} and {1} cannot be combined in one request")]
    Exclusive(&'static str, &'static str),

    #[error("{field} must be at most {max}, got {value}")]
    OutOfRange {
        field: &'static str,
        max: u32,
        value: u32,
    },

    #[error("failed to serialize parameters: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ParamsError {
    /// Wire name of the field the error refers to, if a single one applies.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ParamsError::Missing(field)
            | ParamsError::Empty(field)
            | ParamsError::OutOfRange { field, .. } => Some(field),
            ParamsError::Conflict(first, _) | ParamsError::Exclusive(first, _) => Some(first),
            ParamsError::MissingOneOf(_) | ParamsError::Serialize(_) => None,
        }
    }
}
