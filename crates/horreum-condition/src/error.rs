use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConditionError {
    /// The definition names a variant this client does not know.
    #[error("Unsupported type {0}")]
    UnsupportedType(String),
    #[error("invalid properties for {tag}: {source}")]
    InvalidProperties {
        tag: String,
        source: serde_json::Error,
    },
    #[error("{tag} editor does not accept {input} input")]
    InputMismatch {
        tag: &'static str,
        input: &'static str,
    },
    #[error("'{0}' is not one of the options")]
    UnknownOption(String),
    #[error("{0} is not a finite number")]
    NotFinite(f64),
    #[error("editor is read-only")]
    ReadOnly,
    /// Input sent to the error placeholder.
    #[error("condition has no editor")]
    NoEditor,
}
