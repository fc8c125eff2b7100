use std::fmt;

use crate::error::{EXIT_FAILURE, EXIT_SUCCESS};

/// Per-run tally of copy outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub success_count: usize,
    pub failure_count: usize,
}

impl RunSummary {
    pub fn record(&mut self, succeeded: bool) {
        if succeeded {
            self.success_count += 1;
        } else {
            self.failure_count += 1;
        }
    }

    /// True when no copy failed.
    pub fn is_success(&self) -> bool {
        self.failure_count == 0
    }

    /// 0 when every copy succeeded, 1 otherwise. The number of failures is not encoded.
    pub fn exit_code(&self) -> i32 {
        if self.is_success() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "success: {}, failure: {}",
            self.success_count, self.failure_count
        )
    }
}
