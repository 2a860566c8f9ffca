//! Interactive session on stdin/stdout

use std::io;

use event_stack::session::Session;

use super::Command;

#[derive(structopt::StructOpt)]
pub struct ReplArgs {}

impl Command for ReplArgs {
    fn execute(self) {
        let stdin = io::stdin();
        let mut session = Session::new();
        if let Err(err) = session.run(stdin.lock(), io::stdout()) {
            eprintln!("Session ended with an error: {}", err);
        }
    }
}
