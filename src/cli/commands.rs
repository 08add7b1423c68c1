use crate::journal::GrievanceFilter;
use clap::{Parser, Subcommand, ValueEnum};

mod subcommands;

pub use subcommands::MessageCommands;

/// `grievances` - local-first relationship journal.
#[derive(Parser, Debug)]
#[command(name = "grievances")]
#[command(version)]
#[command(
    about = "Log grievances, track forgiveness, and trade secret messages.",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Log a new grievance
    Add {
        /// What happened
        #[arg(short, long)]
        reason: String,

        /// Mood from 1 (very upset) to 5 (great)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: u8,

        /// What should have happened instead
        #[arg(long)]
        should: Option<String>,
    },

    /// Show grievance history
    List {
        /// Which grievances to show
        #[arg(short, long, value_enum, default_value_t = StatusFilter::All)]
        status: StatusFilter,
    },

    /// Show one grievance with its actions and notes
    Show {
        /// Grievance id or unique prefix
        id: String,
    },

    /// Forgive a grievance
    Forgive {
        /// Grievance id or unique prefix
        id: String,

        /// How it was resolved
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// Record an action taken to make up for a grievance
    Act {
        /// Grievance id or unique prefix
        id: String,

        /// Free-text action description
        #[arg(required_unless_present = "suggestion")]
        action: Option<String>,

        /// Use a suggested action by catalog id instead of free text
        #[arg(short, long, conflicts_with = "action")]
        suggestion: Option<String>,
    },

    /// List suggested actions for a mood
    Suggest {
        /// Mood from 1 (very upset) to 5 (great)
        #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=5))]
        mood: u8,
    },

    /// Secret message commands
    #[command(subcommand)]
    Message(MessageCommands),

    /// Show the love score and journal totals
    Status,
}

/// History filter as accepted on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    All,
    Pending,
    Forgiven,
}

impl From<StatusFilter> for GrievanceFilter {
    fn from(filter: StatusFilter) -> Self {
        match filter {
            StatusFilter::All => Self::All,
            StatusFilter::Pending => Self::Pending,
            StatusFilter::Forgiven => Self::Forgiven,
        }
    }
}
