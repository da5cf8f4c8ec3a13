use thiserror::Error;

/// Decoding failure, with enough path context to locate the offending field
/// in the source JSON (e.g. `versions[2].diffs[0].paritySummary`).
#[derive(Debug, Error)]
pub enum Error {
    #[error("missing required field `{field}` at `{path}`")]
    MissingField { path: String, field: String },

    #[error("field `{field}` at `{path}` is not {expected}")]
    TypeMismatch {
        path: String,
        field: String,
        expected: &'static str,
    },

    #[error("field `{field}` at `{path}` is invalid: {reason}")]
    Validation {
        path: String,
        field: String,
        reason: String,
    },

    #[error("JSON syntax error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Dotted path of the field this error refers to, for assertions and logs.
    /// `None` for syntax errors, which have no field.
    pub fn field_path(&self) -> Option<String> {
        match self {
            Error::MissingField { path, field }
            | Error::TypeMismatch { path, field, .. }
            | Error::Validation { path, field, .. } => Some(if path.is_empty() {
                field.clone()
            } else {
                format!("{path}.{field}")
            }),
            Error::Json(_) => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
