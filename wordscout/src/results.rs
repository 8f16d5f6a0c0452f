use std::collections::HashMap;

/// Accumulated occurrence counts for one file key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCounts {
    /// Aggregation key: the bare file name or the full path
    pub key: String,
    /// One running total per pattern, in display order
    pub counts: Vec<u64>,
}

/// Per-file, per-pattern occurrence counts for a whole run.
///
/// Rows keep the order in which their file keys first matched; the
/// reporter relies on that order. The table only ever grows during a
/// run and is read once, at the end.
#[derive(Debug, Clone, Default)]
pub struct CountTable {
    labels: Vec<String>,
    rows: Vec<FileCounts>,
    index: HashMap<String, usize>,
}

impl CountTable {
    /// Creates an empty table with one column per pattern label.
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            labels,
            rows: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Adds one matched line's counts into the row for `file_key`,
    /// creating a zero-initialized row on first touch.
    ///
    /// The caller makes exactly one call per matched line; recording
    /// the same line twice doubles its counts.
    pub fn record(&mut self, file_key: &str, counts: &[u64]) {
        debug_assert_eq!(counts.len(), self.labels.len());

        let idx = match self.index.get(file_key) {
            Some(&idx) => idx,
            None => {
                self.rows.push(FileCounts {
                    key: file_key.to_string(),
                    counts: vec![0; self.labels.len()],
                });
                self.index.insert(file_key.to_string(), self.rows.len() - 1);
                self.rows.len() - 1
            }
        };

        let row = &mut self.rows[idx];
        for (total, count) in row.counts.iter_mut().zip(counts) {
            *total += count;
        }
    }

    /// Pattern labels, one per column, in display order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Rows in the order their file keys first matched.
    pub fn rows(&self) -> &[FileCounts] {
        &self.rows
    }

    /// True when no file has matched yet.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Column-wise sum over all rows.
    pub fn totals(&self) -> Vec<u64> {
        let mut totals = vec![0; self.labels.len()];
        for row in &self.rows {
            for (total, count) in totals.iter_mut().zip(&row.counts) {
                *total += count;
            }
        }
        totals
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(labels: &[&str]) -> Vec<String> {
        labels.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_first_touch_creates_zero_row() {
        let mut table = CountTable::new(labels(&["cat", "dog"]));
        table.record("notes.txt", &[0, 1]);

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].key, "notes.txt");
        assert_eq!(table.rows()[0].counts, vec![0, 1]);
    }

    #[test]
    fn test_record_accumulates() {
        let mut table = CountTable::new(labels(&["cat", "dog"]));
        table.record("notes.txt", &[2, 0]);
        table.record("notes.txt", &[1, 3]);

        assert_eq!(table.rows().len(), 1);
        assert_eq!(table.rows()[0].counts, vec![3, 3]);
    }

    #[test]
    fn test_double_record_doubles_counts() {
        // One call per matched line is the caller's contract; replaying
        // the same line's result is indistinguishable from a second
        // matching line.
        let mut table = CountTable::new(labels(&["cat"]));
        table.record("notes.txt", &[2]);
        table.record("notes.txt", &[2]);
        assert_eq!(table.rows()[0].counts, vec![4]);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut table = CountTable::new(labels(&["cat"]));
        table.record("zebra.txt", &[1]);
        table.record("apple.txt", &[1]);
        table.record("zebra.txt", &[1]);

        let keys: Vec<&str> = table.rows().iter().map(|r| r.key.as_str()).collect();
        assert_eq!(keys, vec!["zebra.txt", "apple.txt"]);
    }

    #[test]
    fn test_totals() {
        let mut table = CountTable::new(labels(&["cat", "dog"]));
        table.record("a.txt", &[1, 2]);
        table.record("b.txt", &[3, 4]);
        assert_eq!(table.totals(), vec![4, 6]);
    }

    #[test]
    fn test_empty_table() {
        let table = CountTable::new(labels(&["cat"]));
        assert!(table.is_empty());
        assert_eq!(table.totals(), vec![0]);
    }
}
