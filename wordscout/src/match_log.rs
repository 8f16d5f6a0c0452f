//! Persistent log artifact for match details.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::errors::SearchResult;

/// Formats the text block shared by verbose output and the log
/// artifact: line number, file path, then the matched line itself.
///
/// Bytes that do not decode as UTF-8 are shown as the replacement
/// character rather than failing the print.
pub fn format_match_block(line_number: u64, path: &Path, line: &[u8]) -> String {
    format!(
        "Match found on line {}\n{}\n{}\n",
        line_number,
        path.display(),
        String::from_utf8_lossy(line)
    )
}

/// Append-only log file holding one block per match, blocks separated
/// by a blank line.
///
/// Created fresh at run start, truncating whatever a previous run left
/// behind, so every invocation produces a clean log.
#[derive(Debug)]
pub struct MatchLog {
    file: File,
}

impl MatchLog {
    /// Creates or truncates the artifact at `path`.
    pub fn create(path: &Path) -> SearchResult<Self> {
        Ok(Self {
            file: File::create(path)?,
        })
    }

    /// Appends one match block.
    pub fn append(&mut self, line_number: u64, path: &Path, line: &[u8]) -> SearchResult<()> {
        writeln!(self.file, "{}", format_match_block(line_number, path, line))?;
        Ok(())
    }
}
