use thiserror::Error;

use crate::text_event::error::TextEventError;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("invalid text event: {0}")]
    InvalidEvent(#[from] TextEventError),
    #[error("`{command}` requires an argument")]
    MissingArgument { command: &'static str },
    #[error("cannot open script: {source}")]
    ScriptOpen {
        path: String,
        source: std::io::Error,
    },
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
