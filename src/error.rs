use thiserror::Error;

pub type Result<T> = std::result::Result<T, HeadmetaError>;

#[derive(Debug, Error)]
pub enum HeadmetaError {
    /// The HTML parser gave up on the input.
    #[error("{parser} could not parse html: {reason}")]
    Parse { parser: &'static str, reason: String },
    #[error("cannot read {path}: {source}")]
    ReadInput {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

impl HeadmetaError {
    pub fn parse(parser: &'static str, reason: impl Into<String>) -> Self {
        HeadmetaError::Parse {
            parser,
            reason: reason.into(),
        }
    }

    pub fn read_input(path: impl Into<String>, source: std::io::Error) -> Self {
        HeadmetaError::ReadInput {
            path: path.into(),
            source,
        }
    }
}
