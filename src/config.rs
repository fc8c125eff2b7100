use std::ffi::OsString;

/// Program that performs the actual copy.
pub const DEFAULT_COPY_PROGRAM: &str = "cp";

/// Token after which every argument is forwarded to the copy program untouched.
pub const DEFAULT_ARGS_SEPARATOR: &str = "--args";

/// Placed between the source name and the timestamp.
pub const DEFAULT_DESTINATION_DELIMITER: &str = ",";

/// Runtime settings shared by the parser and the copy driver.
///
/// cpold reads no configuration file; the values are fixed at startup. The
/// library still takes them as a value so callers can point it at another
/// program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub copy_program: OsString,
    pub args_separator: String,
    pub destination_delimiter: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            copy_program: OsString::from(DEFAULT_COPY_PROGRAM),
            args_separator: DEFAULT_ARGS_SEPARATOR.to_string(),
            destination_delimiter: DEFAULT_DESTINATION_DELIMITER.to_string(),
        }
    }
}

impl Config {
    /// Returns a config that runs `program` instead of `cp`.
    pub fn with_copy_program(program: impl Into<OsString>) -> Self {
        Self {
            copy_program: program.into(),
            ..Self::default()
        }
    }
}
