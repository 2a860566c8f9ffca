//! A concrete model of a single text-buffer edit.
//!
//! The event stack is generic and never looks inside its payload; this type is
//! what the session driver stores and what most callers will want to push.

pub mod error;

use core::fmt::{self, Write};
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;

use error::TextEventError;

static EVENT_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<kind>\S+)\s+(?P<position>\S+)(?:\s(?P<text>.*))?$")
        .expect("EVENT_RE regex should be valid")
});

/// One editing change, positioned in characters from the start of the buffer.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum TextEvent {
    Insert { position: usize, text: String },
    /// `text` is what was removed, so the event fully describes the change.
    Delete { position: usize, text: String },
}

impl TextEvent {
    pub fn insert(position: usize, text: impl Into<String>) -> Self {
        TextEvent::Insert {
            position,
            text: text.into(),
        }
    }

    pub fn delete(position: usize, text: impl Into<String>) -> Self {
        TextEvent::Delete {
            position,
            text: text.into(),
        }
    }

    pub fn position(&self) -> usize {
        match self {
            TextEvent::Insert { position, .. } | TextEvent::Delete { position, .. } => *position,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            TextEvent::Insert { text, .. } | TextEvent::Delete { text, .. } => text,
        }
    }

    /// Number of characters inserted or removed.
    pub fn len(&self) -> usize {
        self.text().chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text().is_empty()
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, TextEvent::Insert { .. })
    }

    /// Returns the event that reverses this one.
    pub fn inverse(&self) -> TextEvent {
        match self {
            TextEvent::Insert { position, text } => TextEvent::delete(*position, text.clone()),
            TextEvent::Delete { position, text } => TextEvent::insert(*position, text.clone()),
        }
    }

    fn kind_name(&self) -> &'static str {
        match self {
            TextEvent::Insert { .. } => "insert",
            TextEvent::Delete { .. } => "delete",
        }
    }
}

/// Writes `kind position "text"` with the text escaped, so the event always
/// fits on a single line.
impl fmt::Display for TextEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} \"", self.kind_name(), self.position())?;
        for c in self.text().chars() {
            match c {
                '\\' => f.write_str("\\\\")?,
                '"' => f.write_str("\\\"")?,
                '\n' => f.write_str("\\n")?,
                '\r' => f.write_str("\\r")?,
                '\t' => f.write_str("\\t")?,
                _ => f.write_char(c)?,
            }
        }
        f.write_char('"')
    }
}

impl FromStr for TextEvent {
    type Err = TextEventError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let line = input.trim_start().trim_end_matches(|c| c == '\r' || c == '\n');
        let caps = EVENT_RE
            .captures(line)
            .ok_or_else(|| TextEventError::Malformed {
                input: input.to_string(),
            })?;

        let kind = &caps["kind"];
        let position = caps["position"]
            .parse::<usize>()
            .map_err(|_| TextEventError::InvalidPosition {
                position: caps["position"].to_string(),
            })?;
        let text = match caps.name("text") {
            Some(m) if !m.as_str().trim().is_empty() => parse_text(m.as_str())?,
            _ => return Err(TextEventError::MissingText),
        };

        match kind.to_lowercase().as_str() {
            "insert" => Ok(TextEvent::insert(position, text)),
            "delete" => Ok(TextEvent::delete(position, text)),
            _ => Err(TextEventError::InvalidKind {
                kind: kind.to_string(),
            }),
        }
    }
}

/// Quoted text is unescaped; anything else is taken as written.
fn parse_text(raw: &str) -> Result<String, TextEventError> {
    match raw.trim_start().strip_prefix('"') {
        Some(quoted) => unescape_quoted(quoted),
        None => Ok(raw.to_string()),
    }
}

fn unescape_quoted(quoted: &str) -> Result<String, TextEventError> {
    let mut text = String::with_capacity(quoted.len());
    let mut chars = quoted.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => {
                let rest = &quoted[i + 1..];
                if !rest.trim().is_empty() {
                    return Err(TextEventError::TrailingText {
                        rest: rest.to_string(),
                    });
                }
                return Ok(text);
            }
            '\\' => {
                let (_, escaped) = chars.next().ok_or(TextEventError::UnterminatedText)?;
                text.push(match escaped {
                    'n' => '\n',
                    'r' => '\r',
                    't' => '\t',
                    '\\' => '\\',
                    '"' => '"',
                    other => return Err(TextEventError::InvalidEscape { sequence: other }),
                });
            }
            _ => text.push(c),
        }
    }

    Err(TextEventError::UnterminatedText)
}
