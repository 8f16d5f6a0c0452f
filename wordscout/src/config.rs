use std::path::PathBuf;

use crate::errors::{SearchError, SearchResult};

/// File the match log is written to when saving is enabled.
pub const DEFAULT_LOG_FILE: &str = "logs.txt";

/// Configuration for one search run.
///
/// Built once at startup and passed by reference into every component;
/// nothing mutates it after construction.
#[derive(Debug, Clone)]
pub struct SearchConfig {
    /// Words to look for, in the order the user gave them
    pub words: Vec<String>,

    /// A line containing any of these words is never counted
    pub exclude: Vec<String>,

    /// Root directory of the recursive search
    pub root_path: PathBuf,

    /// Fold case before matching; the default is case sensitive
    pub case_fold: bool,

    /// Aggregate counts under the full path instead of the bare file name
    pub full_path: bool,

    /// Match file names instead of file contents
    pub name_search: bool,

    /// Ignore the fixed extension allow-list and scan every non-hidden file
    pub all_files: bool,

    /// Print each match as it is found
    pub verbose: bool,

    /// Append match details to the log artifact
    pub save: bool,

    /// Where the log artifact is written when `save` is set
    pub log_file: PathBuf,
}

impl SearchConfig {
    /// Creates a configuration with default flags for the given words and root.
    pub fn new(words: Vec<String>, root_path: impl Into<PathBuf>) -> Self {
        Self {
            words,
            exclude: Vec::new(),
            root_path: root_path.into(),
            case_fold: false,
            full_path: false,
            name_search: false,
            all_files: false,
            verbose: false,
            save: false,
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
        }
    }

    /// Checks for the fatal configuration errors that must be reported
    /// before any traversal begins.
    pub fn validate(&self) -> SearchResult<()> {
        if self.words.is_empty() {
            return Err(SearchError::config_error(
                "at least one search word is required",
            ));
        }
        if self.words.iter().any(String::is_empty) {
            return Err(SearchError::invalid_pattern(
                "search words must not be empty",
            ));
        }
        if self.exclude.iter().any(String::is_empty) {
            return Err(SearchError::invalid_pattern(
                "exclusion words must not be empty",
            ));
        }
        if !self.root_path.is_dir() {
            return Err(SearchError::invalid_root(self.root_path.clone()));
        }
        Ok(())
    }
}
