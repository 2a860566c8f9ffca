//! Session command parsing from input lines

use std::str::FromStr;

use crate::text_event::TextEvent;

use super::error::SessionError;

/// Commands a session can receive
#[derive(Debug, PartialEq, Clone)]
pub enum StackCommand {
    /// Push an event, or an absent value when `None`
    Push(Option<TextEvent>),
    Pop,
    Peek,
    Len,
    Empty,
    /// List every entry, top first
    Show,
    Clear,
    Quit,
    /// Blank line
    Noop,
    Unknown(String),
}

impl FromStr for StackCommand {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim_start().trim_end_matches(|c| c == '\r' || c == '\n');
        if line.trim().is_empty() {
            return Ok(StackCommand::Noop);
        }

        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "push" => parse_push_command(rest),
            "pop" => Ok(StackCommand::Pop),
            "peek" => Ok(StackCommand::Peek),
            "len" => Ok(StackCommand::Len),
            "empty" => Ok(StackCommand::Empty),
            "show" => Ok(StackCommand::Show),
            "clear" => Ok(StackCommand::Clear),
            "quit" | "exit" => Ok(StackCommand::Quit),
            _ => Ok(StackCommand::Unknown(line.trim_end().to_string())),
        }
    }
}

fn parse_push_command(rest: &str) -> Result<StackCommand, SessionError> {
    let argument = rest.trim_start();
    if argument.trim().is_empty() {
        return Err(SessionError::MissingArgument { command: "push" });
    }

    if argument.trim().eq_ignore_ascii_case("none") {
        return Ok(StackCommand::Push(None));
    }

    let event = argument.parse::<TextEvent>()?;
    Ok(StackCommand::Push(Some(event)))
}
