//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "examplan")]
#[command(about = "Keep track of upcoming exams", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file (default: $EXAMPLAN_FILE, then ./exams.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Without a command, the interactive menu starts
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List exams sorted by date
    List,

    /// Add an exam
    Add {
        /// Exam name
        name: String,

        /// Exam date (DD.MM.YYYY)
        date: String,
    },

    /// Edit an exam
    Edit {
        /// Exam id (see `examplan list`)
        id: String,

        /// New name
        #[arg(short, long)]
        name: Option<String>,

        /// New date (DD.MM.YYYY)
        #[arg(short, long)]
        date: Option<String>,
    },

    /// Delete an exam
    Delete {
        /// Exam id (see `examplan list`)
        id: String,
    },

    /// Delete all exams
    Clear {
        /// Confirm deleting everything
        #[arg(long)]
        yes: bool,
    },
}
