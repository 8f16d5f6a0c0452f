use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use bstr::io::BufReadExt;
use tracing::trace;

use super::matcher::PatternSet;
use crate::errors::SearchResult;

/// A matched line handed to the per-match callback.
#[derive(Debug, Clone)]
pub struct LineHit {
    /// 1-based line number within the file
    pub line_number: u64,
    /// Corrected per-word counts for this line, in display order
    pub counts: Vec<u64>,
    /// The raw line bytes, without the terminator
    pub line: Vec<u8>,
}

/// Scans files line by line against a compiled pattern set.
#[derive(Debug)]
pub struct FileProcessor<'a> {
    patterns: &'a PatternSet,
}

impl<'a> FileProcessor<'a> {
    pub fn new(patterns: &'a PatternSet) -> Self {
        Self { patterns }
    }

    /// Reads `path` as raw byte lines and invokes `on_match` for every
    /// line the pattern set accepts.
    ///
    /// The file handle lives only for the duration of this call and is
    /// released on error as well. Open and read errors are returned to
    /// the caller, which decides whether to skip the file.
    pub fn scan_file<F>(&self, path: &Path, mut on_match: F) -> SearchResult<()>
    where
        F: FnMut(LineHit) -> SearchResult<()>,
    {
        trace!("scanning {}", path.display());

        let reader = BufReader::new(File::open(path)?);
        let mut line_number = 0u64;
        for line in reader.byte_lines() {
            let line = line?;
            line_number += 1;

            let result = self.patterns.evaluate_line(&line);
            if result.matched {
                on_match(LineHit {
                    line_number,
                    counts: result.counts,
                    line,
                })?;
            }
        }
        Ok(())
    }
}
