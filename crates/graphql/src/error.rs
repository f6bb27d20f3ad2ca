use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum QueryError {
    /// The operation is declared but has no document yet.
    #[error("query '{0}' is declared but not implemented")]
    NotImplemented(&'static str),

    #[error("unknown query '{0}'")]
    Unknown(String),

    /// Response data does not match the document's selection.
    #[error("response shape mismatch at '{path}': {detail}")]
    ShapeMismatch { path: String, detail: String },

    /// The server answered with a non-empty `errors` list.
    #[error("server returned errors: {}", .0.join("; "))]
    Server(Vec<String>),

    #[error("response has no data")]
    MissingData,

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl QueryError {
    pub(crate) fn shape(path: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::ShapeMismatch {
            path: path.into(),
            detail: detail.into(),
        }
    }
}
