// File: ./src/cli.rs
//! Command-line parsing and usage text for both tools.
//!
//! Parsing never prints or exits; binaries decide what to do with the
//! resulting `CliAction`.

use crate::error::CalendarError;
use crate::model::parser::{Fragment, InputFormat, classify};
use crate::model::ward::Ward;
use chrono::NaiveDate;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliAction<T> {
    Run(T),
    /// `-h`: show usage and exit successfully.
    Help,
    /// Bad input: show the error and usage, exit 1.
    Usage(CalendarError),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TwoWeekArgs {
    pub include_all: bool,
    pub keep_all: bool,
    pub print: bool,
    pub format: InputFormat,
    pub ward: Option<Ward>,
    pub start: Option<NaiveDate>,
    pub root: Option<PathBuf>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub verbose: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UpcomingArgs {
    pub major: bool,
    pub print: bool,
    pub root: Option<PathBuf>,
    pub input: Option<String>,
    pub output: Option<String>,
    pub verbose: bool,
}

/// Options both tools share. Returns `None` when `arg` is not one of them.
fn shared_option<I>(
    arg: &str,
    rest: &mut I,
    root: &mut Option<PathBuf>,
    input: &mut Option<String>,
    output: &mut Option<String>,
) -> Option<Result<(), CalendarError>>
where
    I: Iterator<Item = String>,
{
    let slot = match arg {
        "-r" | "--root" => {
            return Some(
                take_value(arg, rest).map(|v| {
                    *root = Some(PathBuf::from(v));
                }),
            );
        }
        "--input" => input,
        "--output" => output,
        _ => return None,
    };
    Some(take_value(arg, rest).map(|v| *slot = Some(v)))
}

fn take_value<I: Iterator<Item = String>>(flag: &str, rest: &mut I) -> Result<String, CalendarError> {
    rest.next()
        .ok_or_else(|| CalendarError::InvalidArgument(format!("{} needs a value", flag)))
}

pub fn parse_two_week_args<I>(args: I) -> CliAction<TwoWeekArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = TwoWeekArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return CliAction::Help,
            "-a" => parsed.include_all = true,
            "-k" => parsed.keep_all = true,
            "-p" => parsed.print = true,
            "-o" => parsed.format = InputFormat::Classic,
            "-v" | "--verbose" => parsed.verbose = true,
            other => {
                if let Some(result) = shared_option(
                    other,
                    &mut args,
                    &mut parsed.root,
                    &mut parsed.input,
                    &mut parsed.output,
                ) {
                    if let Err(e) = result {
                        return CliAction::Usage(e);
                    }
                    continue;
                }
                if let Some(code) = other.strip_prefix("-w") {
                    match Ward::from_str(code) {
                        Ok(ward) => parsed.ward = Some(ward),
                        Err(_) => {
                            return CliAction::Usage(CalendarError::InvalidWard(code.to_string()));
                        }
                    }
                    continue;
                }
                if other.starts_with('-') || parsed.start.is_some() {
                    return CliAction::Usage(CalendarError::InvalidArgument(other.to_string()));
                }
                // Same shape as a classic date marker: a four-digit year, nothing else.
                match classify(other, InputFormat::Classic) {
                    Fragment::Date(date) => parsed.start = Some(date),
                    _ => {
                        return CliAction::Usage(CalendarError::InvalidArgument(other.to_string()));
                    }
                }
            }
        }
    }
    CliAction::Run(parsed)
}

pub fn parse_upcoming_args<I>(args: I) -> CliAction<UpcomingArgs>
where
    I: IntoIterator<Item = String>,
{
    let mut parsed = UpcomingArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return CliAction::Help,
            "-m" => parsed.major = true,
            "-p" => parsed.print = true,
            "-v" | "--verbose" => parsed.verbose = true,
            other => match shared_option(
                other,
                &mut args,
                &mut parsed.root,
                &mut parsed.input,
                &mut parsed.output,
            ) {
                Some(Ok(())) => {}
                Some(Err(e)) => return CliAction::Usage(e),
                None => {
                    return CliAction::Usage(CalendarError::InvalidArgument(other.to_string()));
                }
            },
        }
    }
    CliAction::Run(parsed)
}

pub fn print_two_week_help(binary_name: &str) {
    println!(
        "Stakecal v{} - two week bulletin calendar",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [-a] [-k] [-p] [-h] [-o] [-v] [-wCODE] [--root <dir>] [--input <file>] [--output <file>] [start_date]",
        binary_name
    );
    println!();
    println!("OPTIONS:");
    println!("    -a                    Include all dates.");
    println!("    -k                    Keep all events, do not skip.");
    println!("    -p                    Print to standard out instead of writing a document.");
    println!("    -h, --help            Show this help message.");
    println!("    -o                    Read old style (date/time/event lines) calendar data.");
    println!("    -v, --verbose         Log debug output to stderr.");
    println!("    -wCODE                Show only one ward's events.");
    println!("                          CODE is one of ({})", Ward::code_list());
    println!("                          BP=Buena Park, CY=Cypress, etc. (e.g. -wBP)");
    println!("    -r, --root <dir>      Use <dir>/config and <dir>/data.");
    println!("    --input <file>        Calendar data to read.");
    println!("    --output <file>       Document to write.");
    println!();
    println!("    start_date            Optional start date as mm/dd/yyyy.");
    println!("                          Defaults to the next Thursday.");
    println!();
}

pub fn print_upcoming_help(binary_name: &str) {
    println!(
        "Stakecal v{} - upcoming events for stake meeting agendas",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("USAGE:");
    println!(
        "    {} [-m] [-p] [-h] [-v] [--root <dir>] [--input <file>] [--output <file>]",
        binary_name
    );
    println!();
    println!("OPTIONS:");
    println!("    -m                    Include only major events.");
    println!("    -p                    Print to standard out instead of writing a document.");
    println!("    -h, --help            Show this help message.");
    println!("    -v, --verbose         Log debug output to stderr.");
    println!("    -r, --root <dir>      Use <dir>/config and <dir>/data.");
    println!("    --input <file>        Calendar data to read.");
    println!("    --output <file>       Document to write.");
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_two_week_flags() {
        let CliAction::Run(parsed) = parse_two_week_args(args(&["-a", "-k", "-p", "-o", "-wcy", "12/7/2023"]))
        else {
            panic!("expected Run");
        };
        assert!(parsed.include_all && parsed.keep_all && parsed.print);
        assert_eq!(parsed.format, InputFormat::Classic);
        assert_eq!(parsed.ward, Some(Ward::Cypress));
        assert_eq!(parsed.start, NaiveDate::from_ymd_opt(2023, 12, 7));
    }

    #[test]
    fn test_two_week_rejections() {
        assert_eq!(
            parse_two_week_args(args(&["-wXX"])),
            CliAction::Usage(CalendarError::InvalidWard("XX".into()))
        );
        assert_eq!(
            parse_two_week_args(args(&["13/45/2023"])),
            CliAction::Usage(CalendarError::InvalidArgument("13/45/2023".into()))
        );
        assert_eq!(
            parse_two_week_args(args(&["--root"])),
            CliAction::Usage(CalendarError::InvalidArgument("--root needs a value".into()))
        );
        assert_eq!(parse_two_week_args(args(&["-p", "-h", "-q"])), CliAction::Help);
    }

    #[test]
    fn test_upcoming_flags() {
        let CliAction::Run(parsed) =
            parse_upcoming_args(args(&["-m", "--root", "/tmp/x", "--output", "out.docx"]))
        else {
            panic!("expected Run");
        };
        assert!(parsed.major);
        assert_eq!(parsed.root, Some(PathBuf::from("/tmp/x")));
        assert_eq!(parsed.output.as_deref(), Some("out.docx"));
        assert_eq!(
            parse_upcoming_args(args(&["-a"])),
            CliAction::Usage(CalendarError::InvalidArgument("-a".into()))
        );
    }
}
