mod cli;

use cli::commands::Command;
use cli::EventStackCli;
use structopt::StructOpt;

fn main() {
    env_logger::init();
    EventStackCli::from_args().execute();
}
