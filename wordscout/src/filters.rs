//! Filename-level filtering rules for the directory walk.

/// Fixed allow-list of file name suffixes scanned by default.
///
/// Not user-configurable; the all-files mode bypasses it entirely.
pub const ACCEPTED_EXTENSIONS: &[&str] = &[".py", ".html", ".js", ".txt", ".log", ".php"];

/// Checks whether a name carries the hidden-file marker.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Checks whether a file name ends with one of the accepted suffixes.
///
/// This is a plain suffix test on the whole name, so `archive.tar.txt`
/// passes and a bare `txt` does not.
pub fn has_accepted_extension(name: &str) -> bool {
    ACCEPTED_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Determines whether a file should be scanned at all.
///
/// The hidden-name rule applies regardless of the all-files mode.
pub fn is_searchable(name: &str, all_files: bool) -> bool {
    if is_hidden(name) {
        return false;
    }
    all_files || has_accepted_extension(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_hidden() {
        assert!(is_hidden(".gitignore"));
        assert!(is_hidden(".env"));
        assert!(!is_hidden("notes.txt"));
        assert!(!is_hidden("dotted.name.txt"));
    }

    #[test]
    fn test_has_accepted_extension() {
        assert!(has_accepted_extension("main.py"));
        assert!(has_accepted_extension("index.html"));
        assert!(has_accepted_extension("app.js"));
        assert!(has_accepted_extension("notes.txt"));
        assert!(has_accepted_extension("server.log"));
        assert!(has_accepted_extension("page.php"));
        assert!(has_accepted_extension("archive.tar.txt"));

        assert!(!has_accepted_extension("main.rs"));
        assert!(!has_accepted_extension("binary"));
        assert!(!has_accepted_extension("txt"));
        assert!(!has_accepted_extension("notes.TXT")); // suffix test is case sensitive
    }

    #[test]
    fn test_is_searchable() {
        assert!(is_searchable("notes.txt", false));
        assert!(!is_searchable("main.rs", false));
        assert!(is_searchable("main.rs", true));
        assert!(is_searchable("README", true));

        // Hidden names stay out even in all-files mode
        assert!(!is_searchable(".env", false));
        assert!(!is_searchable(".env", true));
        assert!(!is_searchable(".hidden.txt", true));
    }
}
