//! Levenshtein edit distance
//!
//! Classic insert/delete/substitute distance over Unicode scalar values,
//! compared case-insensitively. Case folding is per character, so a string's
//! length never changes.

/// Lowercase `c` when it maps to a single character, keep it otherwise
fn fold_case(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => c,
    }
}

/// Edit distance calculator that keeps its row buffers between calls.
///
/// Scoring loops compare one query term against many candidate words; reusing
/// one `Levenshtein` avoids a pair of allocations per comparison.
#[derive(Debug, Default, Clone)]
pub struct Levenshtein {
    prev: Vec<usize>,
    curr: Vec<usize>,
}

impl Levenshtein {
    pub fn new() -> Self {
        Self::default()
    }

    /// Minimum number of single-character edits turning `a` into `b`
    pub fn distance(&mut self, a: &str, b: &str) -> usize {
        let a: Vec<char> = a.chars().map(fold_case).collect();
        let b: Vec<char> = b.chars().map(fold_case).collect();

        if a.is_empty() {
            return b.len();
        }
        if b.is_empty() {
            return a.len();
        }

        self.prev.clear();
        self.prev.extend(0..=b.len());
        self.curr.clear();
        self.curr.resize(b.len() + 1, 0);

        for (i, ca) in a.iter().enumerate() {
            self.curr[0] = i + 1;
            for (j, cb) in b.iter().enumerate() {
                let cost = usize::from(ca != cb);
                self.curr[j + 1] = (self.prev[j + 1] + 1)
                    .min(self.curr[j] + 1)
                    .min(self.prev[j] + cost);
            }
            std::mem::swap(&mut self.prev, &mut self.curr);
        }

        self.prev[b.len()]
    }
}

/// Compute the case-insensitive Levenshtein distance between two strings
pub fn edit_distance(a: &str, b: &str) -> usize {
    Levenshtein::new().distance(a, b)
}
