use std::path::{Path, PathBuf};

use ignore::{Walk, WalkBuilder};
use tracing::warn;

use crate::errors::{SearchError, SearchResult};
use crate::filters;

/// Lazy sequence of searchable file paths below a root directory.
///
/// Hidden files and directories are skipped, with hidden directories
/// pruned from descent rather than merely filtered from the output.
/// Unless `all_files` is set, only names ending in one of
/// [`filters::ACCEPTED_EXTENSIONS`] are yielded. Siblings are visited in
/// file-name order so a given tree always enumerates the same way.
pub struct FileWalker {
    inner: Walk,
    all_files: bool,
}

impl FileWalker {
    /// Starts a recursive walk below `root`.
    ///
    /// Fails fast when the root does not exist or is not a directory; a
    /// partial walk is never attempted.
    pub fn new(root: &Path, all_files: bool) -> SearchResult<Self> {
        if !root.is_dir() {
            return Err(SearchError::invalid_root(root));
        }

        let mut builder = WalkBuilder::new(root);
        builder
            .standard_filters(false)
            .hidden(true)
            .follow_links(false)
            .sort_by_file_name(|a, b| a.cmp(b));

        Ok(Self {
            inner: builder.build(),
            all_files,
        })
    }
}

impl Iterator for FileWalker {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.inner.next()? {
                Ok(entry) => entry,
                Err(err) => {
                    // Unreadable directories and broken entries are
                    // skipped, never fatal to the walk.
                    warn!("skipping unreadable entry: {}", err);
                    continue;
                }
            };

            if !entry.file_type().is_some_and(|ft| ft.is_file()) {
                continue;
            }

            let searchable = entry
                .file_name()
                .to_str()
                .is_some_and(|name| filters::is_searchable(name, self.all_files));
            if searchable {
                return Some(entry.into_path());
            }
        }
    }
}
