use std::ffi::{OsStr, OsString};

use clap::error::ErrorKind;
use clap::{ArgAction, Command, CommandFactory, FromArgMatches, Parser};

use crate::config::Config;
use crate::error::CpoldError;

/// Copy files and directories to a timestamped backup next to the original.
#[derive(Parser, Debug)]
#[command(name = "cpold")]
#[command(version, about, long_about = None)]
#[command(after_help = "Arguments after --args are passed to cp unchanged.")]
pub struct Args {
    /// Explain what is being done (cp -v)
    #[arg(short = 'v', long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Do not prompt before overwriting (cp -f)
    #[arg(short = 'f', long, action = ArgAction::Count)]
    pub force: u8,

    /// Preserve mode, ownership and timestamps (cp -p)
    #[arg(short = 'p', long, action = ArgAction::Count)]
    pub preserve: u8,

    /// Copy directories recursively (cp -R)
    #[arg(short = 'R', visible_short_alias = 'r', long, action = ArgAction::Count)]
    pub recursive: u8,

    /// Print the cp commands instead of running them
    #[arg(long)]
    pub dry_run: bool,

    /// Files or directories to back up
    #[arg(value_name = "SOURCE", required = true)]
    pub sources: Vec<String>,
}

/// Recognized options and the `cp` flag each one turns into.
const FORWARDED_FLAGS: &[(&str, &str)] = &[
    ("verbose", "-v"),
    ("force", "-f"),
    ("preserve", "-p"),
    ("recursive", "-R"),
];

/// Collects the flags for the copy program while the command line is read.
#[derive(Debug, Default)]
pub struct FlagList {
    recognized: Vec<&'static str>,
    passthrough: Vec<String>,
}

impl FlagList {
    /// Records one occurrence of a recognized flag. Call in command-line order.
    pub fn push_recognized(&mut self, token: &'static str) {
        self.recognized.push(token);
    }

    /// Appends raw tokens that must reach the copy program as given.
    pub fn extend_passthrough(&mut self, tokens: impl IntoIterator<Item = String>) {
        self.passthrough.extend(tokens);
    }

    /// Recognized flags in command-line order, then the pass-through tokens.
    pub fn finish(self) -> Vec<String> {
        self.recognized
            .into_iter()
            .map(str::to_string)
            .chain(self.passthrough)
            .collect()
    }
}

/// Result of reading the command line. Built once, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    sources: Vec<String>,
    flags: Vec<String>,
    dry_run: bool,
}

impl ParsedInput {
    pub fn new(sources: Vec<String>, flags: Vec<String>, dry_run: bool) -> Self {
        Self {
            sources,
            flags,
            dry_run,
        }
    }

    pub fn sources(&self) -> &[String] {
        &self.sources
    }

    pub fn flags(&self) -> &[String] {
        &self.flags
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Parses a full argument vector, program name first.
///
/// Everything before the first separator token (`--args` by default) is
/// parsed by clap. Everything after it is appended to the flag list without
/// being looked at, so it may repeat or contradict the recognized flags.
pub fn parse_from<I, T>(itr: I, config: &Config) -> Result<ParsedInput, CpoldError>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let (tokens, raw) = split_at_separator(
        itr.into_iter().map(Into::into).collect(),
        OsStr::new(&config.args_separator),
    );

    let mut command = Args::command();
    let matches = command.try_get_matches_from_mut(tokens.iter())?;
    let args = Args::from_arg_matches(&matches)?;

    let mut flags = FlagList::default();
    collect_recognized(&command, &tokens, &mut flags);

    let mut passthrough = Vec::with_capacity(raw.len());
    for token in raw {
        let token = token.into_string().map_err(|token| {
            command.error(
                ErrorKind::InvalidUtf8,
                format!(
                    "invalid UTF-8 after '{}': {}",
                    config.args_separator,
                    token.to_string_lossy()
                ),
            )
        })?;
        passthrough.push(token);
    }
    flags.extend_passthrough(passthrough);

    Ok(ParsedInput::new(args.sources, flags.finish(), args.dry_run))
}

/// Pushes every occurrence of a forwarded flag, in command-line order.
///
/// clap keeps a single index per counted flag, so repeats are recovered by
/// walking the tokens clap has already accepted. Short and long spellings
/// come from the `Args` definition. Nothing after `--` is a flag.
fn collect_recognized(command: &Command, tokens: &[OsString], flags: &mut FlagList) {
    let spellings: Vec<(Vec<char>, Option<&str>, &'static str)> = FORWARDED_FLAGS
        .iter()
        .filter_map(|&(id, token)| {
            let arg = command.get_arguments().find(|arg| arg.get_id().as_str() == id)?;
            let shorts = arg.get_short_and_visible_aliases().unwrap_or_default();
            Some((shorts, arg.get_long(), token))
        })
        .collect();

    for token in tokens.iter().skip(1).filter_map(|token| token.to_str()) {
        if token == "--" {
            break;
        }
        if let Some(long) = token.strip_prefix("--") {
            if let Some((.., flag)) = spellings.iter().find(|(_, l, _)| *l == Some(long)) {
                flags.push_recognized(*flag);
            }
        } else if let Some(shorts) = token.strip_prefix('-') {
            for c in shorts.chars() {
                if let Some((.., flag)) = spellings.iter().find(|(s, ..)| s.contains(&c)) {
                    flags.push_recognized(*flag);
                }
            }
        }
    }
}

/// Splits off the tokens following the first `separator`. The program name is never matched.
fn split_at_separator(
    mut tokens: Vec<OsString>,
    separator: &OsStr,
) -> (Vec<OsString>, Vec<OsString>) {
    let position = tokens
        .iter()
        .skip(1)
        .position(|token| token.as_os_str() == separator);

    match position {
        Some(offset) => {
            let mut raw = tokens.split_off(offset + 1);
            raw.remove(0);
            (tokens, raw)
        }
        None => (tokens, Vec::new()),
    }
}
