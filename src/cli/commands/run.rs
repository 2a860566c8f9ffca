//! Run command - replay a script of stack commands.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use event_stack::session::{Session, SessionError};
use log::info;
use structopt::StructOpt;

use super::Command;

#[derive(StructOpt)]
pub struct RunArgs {
    #[structopt(short, long, parse(from_os_str))]
    pub file: PathBuf,
}

impl Command for RunArgs {
    fn execute(self) {
        if let Err(err) = run_script_file(&self.file, io::stdout()) {
            eprintln!("Failed to run {}: {}", self.file.display(), err);
        }
    }
}

/// Runs every command in the script at `path`, writing responses to `output`.
/// A script that cannot be opened is reported as `SessionError::ScriptOpen`.
pub(crate) fn run_script_file<W: Write>(
    path: &Path,
    output: W,
) -> Result<Session, SessionError> {
    let file = File::open(path).map_err(|source| SessionError::ScriptOpen {
        path: path.display().to_string(),
        source,
    })?;

    info!("running script {}", path.display());
    let mut session = Session::new();
    session.run(BufReader::new(file), output)?;
    Ok(session)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::process;

    use super::*;

    fn script_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("event-stack-{}-{}", process::id(), name))
    }

    #[test]
    fn test_missing_script_is_an_open_error() {
        let path = script_path("does-not-exist.txt");
        let mut output = Vec::new();
        let result = run_script_file(&path, &mut output);

        match result {
            Err(SessionError::ScriptOpen { path: reported, source }) => {
                assert_eq!(reported, path.display().to_string());
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("expected ScriptOpen error, got {:?}", other.map(|_| ())),
        }
        assert!(output.is_empty());
    }

    #[test]
    fn test_script_file_is_replayed() {
        let path = script_path("replay.txt");
        fs::write(&path, "push insert 0 \"a\\nb\"\npush none\nlen\npop\n").unwrap();

        let mut output = Vec::new();
        let session = run_script_file(&path, &mut output).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(String::from_utf8(output).unwrap(), "ok 1\nok 2\n2\nnone\n");
        assert_eq!(session.stack().len(), 1);
    }
}
