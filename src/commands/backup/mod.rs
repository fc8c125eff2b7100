use chrono::Utc;
use log::{debug, info, warn};

use crate::config::Config;
use crate::summary::RunSummary;
use crate::timestamp;

pub mod args;
pub mod handlers;

use args::ParsedInput;
use handlers::Invocation;

/// Backs up every source with one stamp taken now.
pub fn run(input: &ParsedInput, config: &Config) -> RunSummary {
    let stamp = timestamp::generation_stamp(Utc::now());
    run_with_stamp(input, &stamp, config)
}

/// Runs the copy program once per source, in order, and tallies the outcomes.
///
/// A failed copy, or a program that cannot be started, is counted and the
/// remaining sources are still processed.
pub fn run_with_stamp(input: &ParsedInput, stamp: &str, config: &Config) -> RunSummary {
    let mut summary = RunSummary::default();

    for source in input.sources() {
        let invocation = Invocation::new(input.flags(), source, stamp, config);

        if input.dry_run() {
            println!("{invocation}");
            summary.record(true);
            continue;
        }

        debug!("running {invocation}");
        match handlers::execute(&invocation) {
            Ok(succeeded) => summary.record(succeeded),
            Err(e) => {
                warn!("cpold: {e}");
                summary.record(false);
            }
        }
    }

    info!("cpold {stamp}: {summary}");
    summary
}
