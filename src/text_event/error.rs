use thiserror::Error;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TextEventError {
    #[error("unknown text event kind {kind:?}, expected `insert` or `delete`")]
    InvalidKind { kind: String },
    #[error("invalid text event position {position:?}")]
    InvalidPosition { position: String },
    #[error("text event is missing its text, quote it to insert or delete whitespace")]
    MissingText,
    #[error("quoted text is not terminated")]
    UnterminatedText,
    #[error("unknown escape sequence `\\{sequence}` in quoted text")]
    InvalidEscape { sequence: char },
    #[error("unexpected {rest:?} after quoted text")]
    TrailingText { rest: String },
    #[error("cannot parse text event from {input:?}")]
    Malformed { input: String },
}
