use chrono::{DateTime, Utc};
use std::path::is_separator;

/// ISO-8601 extended format, second precision, Zulu time.
pub const STAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Formats the suffix shared by every backup made in one run.
pub fn generation_stamp(now: DateTime<Utc>) -> String {
    now.format(STAMP_FORMAT).to_string()
}

/// Builds `<source><delimiter><stamp>`.
///
/// Trailing separators are dropped first so that `dir/` is backed up to
/// `dir,<stamp>` and not to a path inside `dir` itself. A source made only of
/// separators is used as given.
pub fn backup_destination(source: &str, stamp: &str, delimiter: &str) -> String {
    let base = match source.trim_end_matches(is_separator) {
        "" => source,
        trimmed => trimmed,
    };
    format!("{base}{delimiter}{stamp}")
}
