use bstr::ByteSlice;

use crate::config::SearchConfig;
use crate::errors::{SearchError, SearchResult};

/// One compiled search word.
#[derive(Debug, Clone)]
struct Pattern {
    bytes: Vec<u8>,
    /// Which report column this word's counts belong to
    display_index: usize,
}

/// Outcome of matching one line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineMatch {
    /// True when at least one word kept a nonzero corrected count
    pub matched: bool,
    /// Corrected per-word counts, indexed by display order
    pub counts: Vec<u64>,
}

/// The compiled word and exclusion sets for one run.
///
/// Words are case-folded up front when folding is enabled, duplicates
/// are collapsed to their first occurrence, and the set is held
/// internally in longest-first order. The overlap correction in
/// [`evaluate_line`](Self::evaluate_line) depends on that ordering: it
/// only ever compares a word against the longer-or-equal words already
/// processed. Display labels keep the user's input order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    labels: Vec<String>,
    ordered: Vec<Pattern>,
    exclusions: Vec<Vec<u8>>,
    case_fold: bool,
}

impl PatternSet {
    /// Builds the word and exclusion sets from the run configuration.
    ///
    /// Empty words are rejected here: an empty needle occurs at every
    /// byte offset and would degenerate the counting below.
    pub fn compile(config: &SearchConfig) -> SearchResult<Self> {
        if config.words.is_empty() {
            return Err(SearchError::config_error(
                "at least one search word is required",
            ));
        }

        let fold = |word: &str| {
            if config.case_fold {
                word.to_ascii_lowercase()
            } else {
                word.to_string()
            }
        };

        let mut labels: Vec<String> = Vec::new();
        for word in &config.words {
            if word.is_empty() {
                return Err(SearchError::invalid_pattern(
                    "search words must not be empty",
                ));
            }
            let folded = fold(word);
            if !labels.contains(&folded) {
                labels.push(folded);
            }
        }

        let mut exclusions = Vec::with_capacity(config.exclude.len());
        for word in &config.exclude {
            if word.is_empty() {
                return Err(SearchError::invalid_pattern(
                    "exclusion words must not be empty",
                ));
            }
            exclusions.push(fold(word).into_bytes());
        }

        let mut ordered: Vec<Pattern> = labels
            .iter()
            .enumerate()
            .map(|(display_index, label)| Pattern {
                bytes: label.clone().into_bytes(),
                display_index,
            })
            .collect();
        // Stable sort: ties keep input order, so the correction below
        // only ever looks back at words at least as long.
        ordered.sort_by(|a, b| b.bytes.len().cmp(&a.bytes.len()));

        Ok(Self {
            labels,
            ordered,
            exclusions,
            case_fold: config.case_fold,
        })
    }

    /// Word labels in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Evaluates one raw line.
    ///
    /// A line containing any exclusion word is rejected outright, with
    /// no counts recorded. Otherwise every word gets its non-overlapping
    /// occurrence count, reduced by the highest raw count among the
    /// longer-or-equal words that contain it as a substring (so a short
    /// word is not also credited for every hit of a longer word it is
    /// part of), then clamped at zero. The correction is a heuristic,
    /// not exact interval accounting.
    pub fn evaluate_line(&self, line: &[u8]) -> LineMatch {
        let folded;
        let line: &[u8] = if self.case_fold {
            folded = line.to_ascii_lowercase();
            &folded
        } else {
            line
        };

        let mut counts = vec![0u64; self.labels.len()];
        if self.excludes(line) {
            return LineMatch {
                matched: false,
                counts,
            };
        }

        let mut matched = false;
        // Raw counts of the words already processed, all at least as
        // long as the current one.
        let mut seen: Vec<(&[u8], u64)> = Vec::with_capacity(self.ordered.len());
        for pattern in &self.ordered {
            let raw = line.find_iter(&pattern.bytes).count() as u64;
            let correction = seen
                .iter()
                .filter(|(longer, _)| longer.find(&pattern.bytes).is_some())
                .map(|&(_, count)| count)
                .max()
                .unwrap_or(0);
            let corrected = raw.saturating_sub(correction);

            counts[pattern.display_index] = corrected;
            if corrected > 0 {
                matched = true;
            }
            seen.push((&pattern.bytes, raw));
        }

        LineMatch { matched, counts }
    }

    /// Checks a file name in filename-search mode: does any word occur
    /// in it?
    pub fn matches_name(&self, name: &[u8]) -> bool {
        let folded;
        let name: &[u8] = if self.case_fold {
            folded = name.to_ascii_lowercase();
            &folded
        } else {
            name
        };
        self.ordered
            .iter()
            .any(|pattern| name.find(&pattern.bytes).is_some())
    }

    /// True when any exclusion word occurs anywhere in the line.
    fn excludes(&self, line: &[u8]) -> bool {
        self.exclusions.iter().any(|word| line.find(word).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn compile(words: &[&str], exclude: &[&str], case_fold: bool) -> PatternSet {
        let mut config = SearchConfig::new(words.iter().map(|w| w.to_string()).collect(), ".");
        config.exclude = exclude.iter().map(|w| w.to_string()).collect();
        config.case_fold = case_fold;
        PatternSet::compile(&config).unwrap()
    }

    #[test]
    fn test_independent_words() {
        let patterns = compile(&["cat", "dog"], &[], false);
        let result = patterns.evaluate_line(b"a cat and a dog");
        assert!(result.matched);
        assert_eq!(result.counts, vec![1, 1]);
    }

    #[test]
    fn test_nested_word_is_not_double_counted() {
        // "cat" occurs inside "category"; the longer word absorbs it.
        let patterns = compile(&["cat", "category"], &[], false);
        let result = patterns.evaluate_line(b"category");
        assert!(result.matched);
        assert_eq!(result.counts, vec![0, 1]);
    }

    #[test]
    fn test_nested_word_keeps_its_own_extra_hits() {
        let patterns = compile(&["cat", "category"], &[], false);
        let result = patterns.evaluate_line(b"the category of a cat");
        assert_eq!(result.counts, vec![1, 1]);
    }

    #[test]
    fn test_correction_uses_max_not_sum() {
        // Two longer words both contain "a"; only the larger raw count
        // is subtracted, not their sum.
        let patterns = compile(&["a", "ab", "ax"], &[], false);
        let result = patterns.evaluate_line(b"ab ab ax a");
        // raw: ab=2, ax=1, a=4; correction for "a" = max(2, 1) = 2
        assert_eq!(result.counts, vec![2, 2, 1]);
    }

    #[test]
    fn test_counts_never_go_negative() {
        let patterns = compile(&["cat", "category"], &[], false);
        let result = patterns.evaluate_line(b"category category");
        // The raw "cat" count (2) is fully absorbed, never negative.
        assert_eq!(result.counts, vec![0, 2]);
        assert!(result.matched);
    }

    #[test]
    fn test_raw_counting_is_non_overlapping() {
        let patterns = compile(&["aa"], &[], false);
        // "aaaa" holds two non-overlapping "aa", not three.
        let result = patterns.evaluate_line(b"aaaa");
        assert_eq!(result.counts, vec![2]);
    }

    #[test]
    fn test_exclusion_voids_the_whole_line() {
        let patterns = compile(&["cat"], &["dog"], false);
        let result = patterns.evaluate_line(b"a cat chased a dog");
        assert!(!result.matched);
        assert_eq!(result.counts, vec![0]);
    }

    #[test]
    fn test_exclusion_checked_before_inclusion() {
        // Even a line full of search words is rejected when an
        // exclusion word appears anywhere in it.
        let patterns = compile(&["cat", "dog"], &["vet"], false);
        let result = patterns.evaluate_line(b"cat dog cat vet");
        assert!(!result.matched);
        assert_eq!(result.counts, vec![0, 0]);
    }

    #[test]
    fn test_case_fold_matches_uppercase_line() {
        let patterns = compile(&["cat"], &[], true);
        let result = patterns.evaluate_line(b"CAT");
        assert!(result.matched);
        assert_eq!(result.counts, vec![1]);
    }

    #[test]
    fn test_default_is_case_sensitive() {
        let patterns = compile(&["cat"], &[], false);
        let result = patterns.evaluate_line(b"CAT");
        assert!(!result.matched);
        assert_eq!(result.counts, vec![0]);
    }

    #[test]
    fn test_exclusions_fold_with_the_line() {
        let patterns = compile(&["cat"], &["DOG"], true);
        let result = patterns.evaluate_line(b"cat and dog");
        assert!(!result.matched);
    }

    #[test]
    fn test_duplicate_words_collapse() {
        let patterns = compile(&["cat", "cat"], &[], false);
        assert_eq!(patterns.labels(), &["cat".to_string()]);
        let result = patterns.evaluate_line(b"cat");
        assert_eq!(result.counts, vec![1]);
    }

    #[test]
    fn test_duplicates_collapse_after_folding() {
        let patterns = compile(&["Cat", "cat"], &[], true);
        assert_eq!(patterns.labels(), &["cat".to_string()]);
    }

    #[test]
    fn test_labels_keep_input_order() {
        // Matching runs longest-first internally, but counts come back
        // in the order the words were given.
        let patterns = compile(&["cat", "category"], &[], false);
        assert_eq!(
            patterns.labels(),
            &["cat".to_string(), "category".to_string()]
        );

        let patterns = compile(&["category", "cat"], &[], false);
        assert_eq!(
            patterns.labels(),
            &["category".to_string(), "cat".to_string()]
        );
        let result = patterns.evaluate_line(b"category");
        assert_eq!(result.counts, vec![1, 0]);
    }

    #[test]
    fn test_empty_word_is_rejected() {
        let config = SearchConfig::new(vec![String::new()], ".");
        assert!(matches!(
            PatternSet::compile(&config),
            Err(SearchError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_empty_exclusion_is_rejected() {
        let mut config = SearchConfig::new(vec!["cat".to_string()], ".");
        config.exclude = vec![String::new()];
        assert!(matches!(
            PatternSet::compile(&config),
            Err(SearchError::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_no_words_is_rejected() {
        let config = SearchConfig::new(Vec::new(), ".");
        assert!(matches!(
            PatternSet::compile(&config),
            Err(SearchError::ConfigError(_))
        ));
    }

    #[test]
    fn test_matches_name() {
        let patterns = compile(&["note"], &[], false);
        assert!(patterns.matches_name(b"notes.txt"));
        assert!(!patterns.matches_name(b"todo.txt"));
    }

    #[test]
    fn test_matches_name_with_folding() {
        let patterns = compile(&["readme"], &[], true);
        assert!(patterns.matches_name(b"README.txt"));

        let patterns = compile(&["readme"], &[], false);
        assert!(!patterns.matches_name(b"README.txt"));
    }
}
