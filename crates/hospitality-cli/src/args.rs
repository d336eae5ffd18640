//! Command-line arguments.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Hospitality Ops - sector views, payroll, procurement and AI helpers
#[derive(Debug, Parser)]
#[command(name = "hospitality")]
#[command(about = "Hospitality operations from the terminal", long_about = None)]
#[command(version, arg_required_else_help = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

fn parse_date(value: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| format!("expected YYYY-MM-DD, got '{}'", value))
}

/// Available commands. Commands taking an optional sector fall back to the
/// one chosen with `use`.
#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Replace stored data with the demo data set
    InitDemo,

    /// Show record counts and when each collection was saved
    Status,

    /// List sectors and their businesses
    Sectors,

    /// Make a sector the default for other commands
    Use { sector: String },

    /// Summarize a sector's scoped data
    Sector { sector: Option<String> },

    /// Payroll run for a sector's team
    Payroll {
        sector: Option<String>,

        /// First day of the pay period (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        from: Option<NaiveDate>,

        /// Last day of the pay period (YYYY-MM-DD)
        #[arg(long, value_parser = parse_date)]
        to: Option<NaiveDate>,
    },

    /// Reorder suggestions for a sector
    Procurement {
        sector: Option<String>,

        /// Place every suggestion as a supplier order
        #[arg(long)]
        accept: bool,
    },

    /// Orders waiting on the kitchen
    Kitchen { sector: Option<String> },

    /// Task board columns
    Board { sector: Option<String> },

    /// Rooms, VIP residents and open housekeeping
    Hotel { sector: Option<String> },

    /// Draft a meeting agenda with the AI service
    Agenda {
        #[arg(required = true, num_args = 1..)]
        topic: Vec<String>,
    },

    /// Summarize social posts, one per line of FILE
    Insights { file: PathBuf },

    /// Ask the AI service for a week of shifts
    SuggestShifts {
        sector: Option<String>,

        /// Monday of the week to plan (defaults to next week)
        #[arg(long, value_parser = parse_date)]
        week: Option<NaiveDate>,

        /// Add the suggested shifts to the schedule
        #[arg(long)]
        apply: bool,
    },

    /// Store the AI service key in the keychain
    SetKey,

    /// Remove the AI service key from the keychain
    ClearKey,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::error::ErrorKind;
    use clap::CommandFactory;

    fn parse(line: &str) -> Result<Command, clap::Error> {
        Cli::try_parse_from(std::iter::once("hospitality").chain(line.split_whitespace()))
            .map(|cli| cli.command)
    }

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_shows_help() {
        let err = Cli::try_parse_from(["hospitality"]).unwrap_err();
        assert_eq!(
            err.kind(),
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
        );
    }

    #[test]
    fn test_sector_optional() {
        assert_eq!(parse("kitchen").unwrap(), Command::Kitchen { sector: None });
        assert_eq!(
            parse("kitchen hotel").unwrap(),
            Command::Kitchen {
                sector: Some("hotel".to_string())
            }
        );
    }

    #[test]
    fn test_payroll_period() {
        let cmd = parse("payroll restaurants --from 2026-10-01 --to 2026-10-15").unwrap();
        assert_eq!(
            cmd,
            Command::Payroll {
                sector: Some("restaurants".to_string()),
                from: NaiveDate::from_ymd_opt(2026, 10, 1),
                to: NaiveDate::from_ymd_opt(2026, 10, 15),
            }
        );
    }

    #[test]
    fn test_bad_date_rejected() {
        let err = parse("payroll --from 10/01/2026").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("YYYY-MM-DD"));
        assert!(parse("payroll --from").is_err());
    }

    #[test]
    fn test_agenda_collects_words() {
        assert_eq!(
            parse("agenda autumn menu launch").unwrap(),
            Command::Agenda {
                topic: vec!["autumn".into(), "menu".into(), "launch".into()]
            }
        );
        assert!(parse("agenda").is_err());
    }

    #[test]
    fn test_flags() {
        assert_eq!(
            parse("procurement --accept").unwrap(),
            Command::Procurement {
                sector: None,
                accept: true
            }
        );
        assert_eq!(
            parse("suggest-shifts hotel --week 2026-10-19 --apply").unwrap(),
            Command::SuggestShifts {
                sector: Some("hotel".to_string()),
                week: NaiveDate::from_ymd_opt(2026, 10, 19),
                apply: true
            }
        );
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(parse("set-key").unwrap(), Command::SetKey);
        assert_eq!(parse("clear-key").unwrap(), Command::ClearKey);
    }

    #[test]
    fn test_errors() {
        assert!(parse("use").is_err());
        assert_eq!(
            parse("frobnicate").unwrap_err().kind(),
            ErrorKind::InvalidSubcommand
        );
        assert_eq!(
            parse("status --verbose").unwrap_err().kind(),
            ErrorKind::UnknownArgument
        );
        assert!(parse("kitchen a b").is_err());
    }
}
