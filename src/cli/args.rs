//! CLI argument parsing using StructOpt.

use structopt::StructOpt;

use crate::cli::commands::{repl::ReplArgs, run::RunArgs};

#[derive(StructOpt)]
#[structopt(
    name = "event-stack",
    about = "A LIFO stack of text-edit events, driven by line commands"
)]
pub enum EventStackCli {
    #[structopt(
        name = "repl",
        about = "Read stack commands from stdin and answer on stdout. Commands: `push insert <pos> <text>`, `push delete <pos> <text>`, `push none`, `pop`, `peek`, `len`, `empty`, `show`, `clear`, `quit`."
    )]
    Repl(ReplArgs),
    #[structopt(
        name = "run",
        about = "Run the stack commands in the script given by `--file`, one per line, and print each response."
    )]
    Run(RunArgs),
}

impl crate::cli::commands::Command for EventStackCli {
    fn execute(self) {
        match self {
            Self::Repl(cmd) => cmd.execute(),
            Self::Run(cmd) => cmd.execute(),
        }
    }
}
