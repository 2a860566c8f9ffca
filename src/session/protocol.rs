//! Session command execution over a single event stack

use std::io::{BufRead, Write};

use log::debug;

use crate::event_stack::EventStack;
use crate::text_event::TextEvent;

use super::command_parser::StackCommand;
use super::error::SessionError;
use super::response_formatter::ResponseFormatter;

/// Line-oriented driver for an `EventStack`. Absent values can be pushed, so
/// the stack holds optional events.
#[derive(Debug, Default)]
pub struct Session {
    stack: EventStack<Option<TextEvent>>,
    should_quit: bool,
}

impl Session {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn stack(&self) -> &EventStack<Option<TextEvent>> {
        &self.stack
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Execute a command and return the response, if it has one
    pub fn execute_command(&mut self, command: StackCommand) -> Option<String> {
        debug!("executing {:?}", command);
        match command {
            StackCommand::Push(entry) => {
                self.stack.push(entry);
                Some(ResponseFormatter::format_ok(self.stack.len()))
            }

            StackCommand::Pop => {
                let entry = self.stack.pop();
                Some(ResponseFormatter::format_entry(entry.as_ref()))
            }

            StackCommand::Peek => Some(ResponseFormatter::format_entry(self.stack.peek())),

            StackCommand::Len => Some(self.stack.len().to_string()),

            StackCommand::Empty => Some(self.stack.is_empty().to_string()),

            StackCommand::Show => Some(ResponseFormatter::format_listing(&self.stack)),

            StackCommand::Clear => {
                self.stack.clear();
                Some(ResponseFormatter::format_ok(0))
            }

            StackCommand::Quit => {
                self.should_quit = true;
                None
            }

            StackCommand::Noop => None,

            StackCommand::Unknown(cmd) => Some(ResponseFormatter::format_error(&format!(
                "unknown command: {}",
                cmd
            ))),
        }
    }

    /// Read commands from `input` until end of input or `quit`, writing each
    /// response to `output`
    pub fn run<R, W>(&mut self, input: R, mut output: W) -> Result<(), SessionError>
    where
        R: BufRead,
        W: Write,
    {
        for line in input.lines() {
            let line = line?;

            let response = match line.parse::<StackCommand>() {
                Ok(command) => self.execute_command(command),
                Err(e) => Some(ResponseFormatter::format_error(&e.to_string())),
            };

            if let Some(response) = response {
                writeln!(output, "{}", response)?;
                output.flush()?;
            }

            if self.should_quit() {
                debug!("quit requested, {} entries left", self.stack.len());
                break;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_script(script: &str) -> (Session, String) {
        let mut session = Session::new();
        let mut output = Vec::new();
        session.run(script.as_bytes(), &mut output).unwrap();
        (session, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_initial_state() {
        let session = Session::new();
        assert!(session.stack().is_empty());
        assert!(!session.should_quit());
    }

    #[test]
    fn test_push_reports_length() {
        let mut session = Session::new();
        let response =
            session.execute_command(StackCommand::Push(Some(TextEvent::insert(0, "a"))));
        assert_eq!(response, Some("ok 1".to_string()));
        let response = session.execute_command(StackCommand::Push(None));
        assert_eq!(response, Some("ok 2".to_string()));
    }

    #[test]
    fn test_pop_and_peek_on_empty_stack() {
        let mut session = Session::new();
        assert_eq!(
            session.execute_command(StackCommand::Pop),
            Some("empty".to_string())
        );
        assert_eq!(
            session.execute_command(StackCommand::Peek),
            Some("empty".to_string())
        );
        assert_eq!(
            session.execute_command(StackCommand::Len),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_pushed_absent_value_reports_none() {
        let mut session = Session::new();
        session.execute_command(StackCommand::Push(None));
        assert_eq!(
            session.execute_command(StackCommand::Peek),
            Some("none".to_string())
        );
        assert_eq!(
            session.execute_command(StackCommand::Pop),
            Some("none".to_string())
        );
        assert_eq!(
            session.execute_command(StackCommand::Empty),
            Some("true".to_string())
        );
    }

    #[test]
    fn test_quit_command() {
        let mut session = Session::new();
        assert_eq!(session.execute_command(StackCommand::Quit), None);
        assert!(session.should_quit());
    }

    #[test]
    fn test_unknown_command() {
        let mut session = Session::new();
        let response = session.execute_command(StackCommand::Unknown("redo".to_string()));
        assert_eq!(response, Some("error: unknown command: redo".to_string()));
    }

    #[test]
    fn test_run_script() {
        let script = "\
push insert 0 E1
push insert 2 E2
push insert 4 E3
len
pop
len
peek
len
pop
pop
len
pop
";
        let (session, output) = run_script(script);
        let expected = "\
ok 1
ok 2
ok 3
3
insert 4 \"E3\"
2
insert 2 \"E2\"
2
insert 2 \"E2\"
insert 0 \"E1\"
0
empty
";
        assert_eq!(output, expected);
        assert!(session.stack().is_empty());
    }

    #[test]
    fn test_run_stops_at_quit() {
        let (session, output) = run_script("push none\nquit\npush none\n");
        assert_eq!(output, "ok 1\n");
        assert!(session.should_quit());
        assert_eq!(session.stack().len(), 1);
    }

    #[test]
    fn test_show_keeps_multiline_events_on_one_line_each() {
        let mut session = Session::new();
        session.execute_command(StackCommand::Push(Some(TextEvent::insert(0, "\n"))));
        session.execute_command(StackCommand::Push(Some(TextEvent::insert(1, "x"))));

        let listing = session.execute_command(StackCommand::Show).unwrap();
        assert_eq!(listing.lines().count(), session.stack().len());
        assert_eq!(listing, "insert 1 \"x\"\ninsert 0 \"\\n\"");
    }

    #[test]
    fn test_run_replays_escaped_events() {
        let script = "push insert 0 \"first\\nsecond\"\npeek\npop\nlen\n";
        let (session, output) = run_script(script);
        assert_eq!(
            output,
            "ok 1\ninsert 0 \"first\\nsecond\"\ninsert 0 \"first\\nsecond\"\n0\n"
        );
        assert!(session.stack().is_empty());
    }

    #[test]
    fn test_run_rejects_push_with_blank_text() {
        let (session, output) = run_script("push insert 0 \nlen\n");
        assert_eq!(
            output,
            "error: invalid text event: text event is missing its text, quote it to insert or delete whitespace\n0\n"
        );
        assert!(session.stack().is_empty());
    }

    #[test]
    fn test_run_reports_parse_errors_and_continues() {
        let (session, output) = run_script("push\npush delete 0 gone\nshow\nclear\nshow\n");
        assert_eq!(
            output,
            "error: `push` requires an argument\nok 1\ndelete 0 \"gone\"\nok 0\nempty\n"
        );
        assert!(session.stack().is_empty());
    }
}
