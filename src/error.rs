use thiserror::Error;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
/// Shell convention for termination by SIGINT (128 + 2).
pub const EXIT_INTERRUPTED: i32 = 130;

#[derive(Debug, Error)]
pub enum CpoldError {
    /// Malformed command line. clap renders the message and the usage line.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// The copy program could not be started at all.
    #[error("cannot run '{program}': {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Interrupted.")]
    Interrupted,
}

impl CpoldError {
    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Usage(e) => e.exit_code(),
            Self::Spawn { .. } => EXIT_FAILURE,
            Self::Interrupted => EXIT_INTERRUPTED,
        }
    }
}
