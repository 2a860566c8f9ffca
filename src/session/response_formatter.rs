//! Session response formatting

use crate::text_event::TextEvent;

pub struct ResponseFormatter;

impl ResponseFormatter {
    /// Acknowledges a mutation with the resulting stack length
    pub fn format_ok(len: usize) -> String {
        format!("ok {}", len)
    }

    /// Formats the result of a pop or peek
    pub fn format_entry(entry: Option<&Option<TextEvent>>) -> String {
        match entry {
            Some(Some(event)) => event.to_string(),
            Some(None) => "none".to_string(),
            None => "empty".to_string(),
        }
    }

    pub fn format_listing<'a, I>(entries: I) -> String
    where
        I: IntoIterator<Item = &'a Option<TextEvent>>,
    {
        let lines: Vec<String> = entries
            .into_iter()
            .map(|entry| Self::format_entry(Some(entry)))
            .collect();
        if lines.is_empty() {
            "empty".to_string()
        } else {
            lines.join("\n")
        }
    }

    pub fn format_error(message: &str) -> String {
        format!("error: {}", message)
    }
}
