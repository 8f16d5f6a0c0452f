use std::path::Path;

use tracing::{debug, info, warn};

use super::matcher::PatternSet;
use super::processor::FileProcessor;
use crate::config::SearchConfig;
use crate::errors::SearchResult;
use crate::match_log::{format_match_block, MatchLog};
use crate::results::CountTable;
use crate::walker::FileWalker;

/// Runs a content search and returns the aggregated count table.
///
/// Files are enumerated, scanned, and aggregated strictly one after
/// the other. Per-file errors are logged and skipped; counts already
/// recorded for earlier lines of a failing file are kept. When saving
/// is enabled the log artifact is recreated before the walk starts, so
/// a run with no matches still leaves an empty log.
pub fn search_content(config: &SearchConfig) -> SearchResult<CountTable> {
    let patterns = PatternSet::compile(config)?;
    info!(
        "searching for {:?} under {}",
        patterns.labels(),
        config.root_path.display()
    );

    let walker = FileWalker::new(&config.root_path, config.all_files)?;
    let mut log = if config.save {
        Some(MatchLog::create(&config.log_file)?)
    } else {
        None
    };

    let processor = FileProcessor::new(&patterns);
    let mut table = CountTable::new(patterns.labels().to_vec());
    let mut files_scanned = 0u64;

    for path in walker {
        files_scanned += 1;
        let key = file_key(&path, config.full_path);

        let scanned = processor.scan_file(&path, |hit| {
            table.record(&key, &hit.counts);
            if config.verbose {
                println!("{}", format_match_block(hit.line_number, &path, &hit.line));
            }
            if let Some(log) = log.as_mut() {
                log.append(hit.line_number, &path, &hit.line)?;
            }
            Ok(())
        });
        if let Err(err) = scanned {
            warn!("skipping {}: {}", path.display(), err);
        }
    }

    info!(
        "scanned {} files, {} with matches",
        files_scanned,
        table.rows().len()
    );
    Ok(table)
}

/// Runs a filename search, printing each matching path the moment it
/// is found.
///
/// No aggregation and no report table apply here; the number of
/// matching paths is returned. A path is printed once even when
/// several words occur in its name.
pub fn search_names(config: &SearchConfig) -> SearchResult<u64> {
    let patterns = PatternSet::compile(config)?;
    info!(
        "searching file names for {:?} under {}",
        patterns.labels(),
        config.root_path.display()
    );

    let mut matched = 0u64;
    for path in FileWalker::new(&config.root_path, config.all_files)? {
        let name = match path.file_name() {
            Some(name) => name.to_string_lossy(),
            None => continue,
        };
        if patterns.matches_name(name.as_bytes()) {
            println!("{}", path.display());
            matched += 1;
        }
    }

    debug!("{} file names matched", matched);
    Ok(matched)
}

/// The aggregation identity of a file: its full path or its bare name.
fn file_key(path: &Path, full_path: bool) -> String {
    if full_path {
        path.display().to_string()
    } else {
        path.file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string())
    }
}
