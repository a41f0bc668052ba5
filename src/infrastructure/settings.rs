//! Runtime settings for the CLI

use std::path::PathBuf;

/// Data file used when neither `--file` nor the environment names one
pub const DEFAULT_DATA_FILE: &str = "exams.json";

/// Environment variable that overrides the default data file
pub const DATA_FILE_ENV: &str = "EXAMPLAN_FILE";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub data_file: PathBuf,
    pub verbose: bool,
}

impl Settings {
    /// Resolve settings: explicit flag first, then EXAMPLAN_FILE, then the default
    pub fn resolve(file: Option<PathBuf>, verbose: bool) -> Self {
        let data_file = file
            .or_else(|| {
                std::env::var_os(DATA_FILE_ENV)
                    .filter(|v| !v.is_empty())
                    .map(PathBuf::from)
            })
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_FILE));

        Settings { data_file, verbose }
    }

    /// Default tracing directive when RUST_LOG is not set
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "examplan=debug"
        } else {
            "examplan=warn"
        }
    }
}
