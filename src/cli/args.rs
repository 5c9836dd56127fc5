//! CLI argument definitions using clap
//!
//! Commands:
//! - roster init [--data-dir DIR]
//! - roster list [--search Q] [--sort FIELD]... [--page N]
//! - roster add / update / remove
//! - roster export [--output PATH]
//! - roster stats

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

use crate::executor::SortField;
use crate::record::StudentDraft;

/// Roster - a locally persisted student list
#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to configuration file
    #[arg(long, default_value = "./roster.json", global = true)]
    pub config: PathBuf,

    /// Log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Log output format
    #[arg(long = "log-format", value_enum, default_value = "compact", global = true)]
    pub log_format: LogFormatArg,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a default config file and seed the roster
    Init {
        /// Data directory recorded in the new config
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Print one page of the roster
    List {
        /// Case-insensitive match on id, name or class
        #[arg(long)]
        search: Option<String>,

        /// Sort field; repeat to toggle direction (id, name, class, gpa)
        #[arg(long = "sort", value_name = "FIELD")]
        sort: Vec<SortField>,

        /// 1-based page number
        #[arg(long)]
        page: Option<usize>,
    },

    /// Append a student
    Add(RecordArgs),

    /// Replace the student at a roster position
    Update {
        /// 0-based position as printed by `list`
        #[arg(long)]
        position: usize,

        #[command(flatten)]
        record: RecordArgs,
    },

    /// Delete the student at a roster position
    Remove {
        /// 0-based position as printed by `list`
        #[arg(long)]
        position: usize,
    },

    /// Write the whole roster as CSV
    Export {
        /// Output file; `-` writes to stdout. Defaults to the configured export file
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Print record count and average GPA
    Stats,
}

/// Student fields as entered on the command line
#[derive(Args, Debug, Clone)]
pub struct RecordArgs {
    #[arg(long)]
    pub id: String,

    #[arg(long)]
    pub name: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: String,

    #[arg(long)]
    pub class: String,

    #[arg(long)]
    pub gpa: String,
}

impl RecordArgs {
    pub fn to_draft(&self) -> StudentDraft {
        StudentDraft {
            id: self.id.clone(),
            full_name: self.name.clone(),
            date_of_birth: self.dob.clone(),
            student_class: self.class.clone(),
            gpa: self.gpa.clone(),
        }
    }
}

/// CLI log format choices
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_with_repeated_sort() {
        let cli = Cli::try_parse_from([
            "roster", "list", "--search", "ct01", "--sort", "gpa", "--sort", "gpa", "--page", "2",
        ])
        .unwrap();
        match cli.command {
            Command::List { search, sort, page } => {
                assert_eq!(search.as_deref(), Some("ct01"));
                assert_eq!(sort, vec![SortField::Gpa, SortField::Gpa]);
                assert_eq!(page, Some(2));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_global_flags() {
        let cli =
            Cli::try_parse_from(["roster", "stats", "-vv", "--config", "x.json", "--log-format", "json"])
                .unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.config, PathBuf::from("x.json"));
        assert_eq!(cli.log_format, LogFormatArg::Json);
    }

    #[test]
    fn test_unknown_sort_field_rejected() {
        assert!(Cli::try_parse_from(["roster", "list", "--sort", "age"]).is_err());
    }

    #[test]
    fn test_add_builds_draft() {
        let cli = Cli::try_parse_from([
            "roster", "add", "--id", "9", "--name", "A B", "--dob", "2001-02-03", "--class",
            "C1", "--gpa", "3.1",
        ])
        .unwrap();
        let Command::Add(args) = cli.command else {
            panic!("expected add");
        };
        let draft = args.to_draft();
        assert_eq!(draft.full_name, "A B");
        assert_eq!(draft.gpa, "3.1");
    }
}
