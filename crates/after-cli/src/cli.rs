//! Command-line arguments for `after`.

use std::ffi::OsString;

use chrono::{DateTime, FixedOffset};
use clap::Parser;

/// Options that consume the following argument as their value.
const VALUE_OPTIONS: [&str; 1] = ["--since"];

/// Resolve relative time expressions such as "10s", "+1 minute" or "-2w"
/// to absolute RFC 3339 timestamps.
#[derive(Debug, Parser)]
#[command(name = "after")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// One or more expressions, each resolved independently.
    #[arg(required = true, value_name = "EXPRESSION")]
    pub expressions: Vec<String>,

    /// Reference moment as RFC 3339. Defaults to the current UTC time.
    #[arg(long, value_name = "RFC3339", value_parser = parse_moment)]
    pub since: Option<DateTime<FixedOffset>>,

    /// Print one JSON object per expression.
    #[arg(long)]
    pub json: bool,

    /// Print the signed duration in milliseconds instead of a timestamp.
    #[arg(long, conflicts_with = "json")]
    pub duration_only: bool,

    /// Log parsing details to stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Parse `args` after moving expressions behind a `--`, so options may
    /// appear anywhere and negative expressions such as `-2w` are never
    /// mistaken for short flags.
    pub fn parse_args<I, T>(args: I) -> Cli
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::parse_from(split_expressions(args))
    }

    pub fn try_parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Cli::try_parse_from(split_expressions(args))
    }
}

/// A `-` directly followed by a digit starts a negative expression.
fn is_negative_expression(arg: &str) -> bool {
    arg.strip_prefix('-')
        .and_then(|rest| rest.chars().next())
        .is_some_and(|c| c.is_ascii_digit())
}

/// Reorder `args` into `program options... -- expressions...`.
fn split_expressions<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut args = args.into_iter().map(Into::into);
    let mut options: Vec<OsString> = args.next().into_iter().collect();
    let mut expressions = Vec::new();
    let mut escaped = false;

    while let Some(arg) = args.next() {
        let Some(text) = arg.to_str().filter(|_| !escaped) else {
            expressions.push(arg);
            continue;
        };

        if text == "--" {
            escaped = true;
        } else if is_negative_expression(text) || !text.starts_with('-') {
            expressions.push(arg);
        } else {
            let takes_value = VALUE_OPTIONS.contains(&text);
            options.push(arg);
            if takes_value {
                options.extend(args.next());
            }
        }
    }

    if !expressions.is_empty() {
        options.push(OsString::from("--"));
        options.extend(expressions);
    }
    options
}

fn parse_moment(s: &str) -> Result<DateTime<FixedOffset>, String> {
    DateTime::parse_from_rfc3339(s).map_err(|e| format!("invalid RFC 3339 datetime '{s}': {e}"))
}
