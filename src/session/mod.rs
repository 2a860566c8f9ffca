//! Line-oriented command session over an event stack

pub mod command_parser;
pub mod error;
pub mod protocol;
pub mod response_formatter;

pub use command_parser::StackCommand;
pub use error::SessionError;
pub use protocol::Session;
pub use response_formatter::ResponseFormatter;
