use std::ffi::OsStr;
use std::fmt;
use std::process::Command;

use crate::config::Config;
use crate::error::CpoldError;
use crate::timestamp;

/// One run of the copy program: `<program> <flags...> <source> <destination>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation<'a> {
    pub program: &'a OsStr,
    pub flags: &'a [String],
    pub source: &'a str,
    pub destination: String,
}

impl<'a> Invocation<'a> {
    /// Derives the destination for `source` from the run's generation stamp.
    pub fn new(flags: &'a [String], source: &'a str, stamp: &str, config: &'a Config) -> Self {
        Self {
            program: &config.copy_program,
            flags,
            source,
            destination: timestamp::backup_destination(
                source,
                stamp,
                &config.destination_delimiter,
            ),
        }
    }

    /// Arguments passed to the program, in order.
    pub fn args(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .map(String::as_str)
            .chain([self.source, self.destination.as_str()])
    }

    fn command(&self) -> Command {
        let mut command = Command::new(self.program);
        command.args(self.args());
        command
    }
}

impl fmt::Display for Invocation<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", shell_quote(&self.program.to_string_lossy()))?;
        for arg in self.args() {
            write!(f, " {}", shell_quote(arg))?;
        }
        Ok(())
    }
}

/// Runs the invocation with inherited stdio and waits for it.
///
/// Returns whether the program exited with status 0. A program killed by a
/// signal counts as failed.
pub fn execute(invocation: &Invocation<'_>) -> Result<bool, CpoldError> {
    let status = invocation
        .command()
        .status()
        .map_err(|source| CpoldError::Spawn {
            program: invocation.program.to_string_lossy().into_owned(),
            source,
        })?;
    Ok(status.success())
}

/// Single-quotes `arg` when a POSIX shell would split or expand it.
fn shell_quote(arg: &str) -> String {
    let plain = !arg.is_empty()
        && arg
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./,:=+@%".contains(c));
    if plain {
        arg.to_string()
    } else {
        format!("'{}'", arg.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STAMP: &str = "2024-01-02T03:04:05Z";

    #[test]
    fn test_invocation_argument_order() {
        let config = Config::default();
        let flags = vec!["-v".to_string(), "-a".to_string()];
        let invocation = Invocation::new(&flags, "file.txt", STAMP, &config);

        assert_eq!(invocation.destination, "file.txt,2024-01-02T03:04:05Z");
        assert_eq!(
            invocation.args().collect::<Vec<_>>(),
            ["-v", "-a", "file.txt", "file.txt,2024-01-02T03:04:05Z"]
        );
    }

    #[test]
    fn test_display_matches_cp_command_line() {
        let config = Config::default();
        let flags = vec!["-v".to_string()];
        let invocation = Invocation::new(&flags, "file.txt", STAMP, &config);
        assert_eq!(
            invocation.to_string(),
            "cp -v file.txt file.txt,2024-01-02T03:04:05Z"
        );
    }

    #[test]
    fn test_display_quotes_awkward_names() {
        let config = Config::default();
        let invocation = Invocation::new(&[], "my notes's.txt", STAMP, &config);
        assert_eq!(
            invocation.to_string(),
            r"cp 'my notes'\''s.txt' 'my notes'\''s.txt,2024-01-02T03:04:05Z'"
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_execute_reports_exit_status() {
        let ok = Config::with_copy_program("true");
        let invocation = Invocation::new(&[], "a", STAMP, &ok);
        assert!(execute(&invocation).unwrap());

        let failing = Config::with_copy_program("false");
        let invocation = Invocation::new(&[], "a", STAMP, &failing);
        assert!(!execute(&invocation).unwrap());
    }

    #[test]
    fn test_execute_missing_program_is_spawn_error() {
        let config = Config::with_copy_program("cpold-test-no-such-program");
        let invocation = Invocation::new(&[], "a", STAMP, &config);
        match execute(&invocation) {
            Err(CpoldError::Spawn { program, .. }) => {
                assert_eq!(program, "cpold-test-no-such-program")
            }
            other => panic!("expected spawn error, got {other:?}"),
        }
    }
}
