// ============================================================
// Layer 4 — Word Scorer
// ============================================================
// Counts how often each word occurs across the whole document.
// The count is the "importance" signal for keyword picking:
// a term the document keeps repeating is probably worth a card.
//
// What counts as a word:
//   a run of at least four ASCII letters in the lower-cased text,
//   standing alone. Shorter words ("the", "and", "of") never
//   qualify, and neither do letter runs glued to digits, `_` or
//   other letters ("h2o", "water_bottle", "café").
//
//   "Standing alone" is checked on the neighbouring chars, not
//   with regex \b: a neighbour only joins the run when it is
//   alphanumeric or `_`. Combining marks are not, so decomposed
//   text such as "cafe\u{301}" still yields "cafe". The regex
//   crate's \b counts marks as word chars and would drop it.
//
// Besides the counts, the table remembers the order words were
// first seen. Sorting by count is stable over that order, so
// equally frequent words rank by first appearance, the same
// every run.
//
// Reference: Rust Book §8 (Hash Maps)
//            regex crate documentation

use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// How many top words feed the distractor pool by default
pub const VOCAB_SIZE: usize = 500;

static LETTER_RUN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z]{4,}").expect("letter run pattern is valid")
});

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// The qualifying words of `text`, in order, case unchanged.
pub(crate) fn words(text: &str) -> impl Iterator<Item = &str> {
    LETTER_RUN.find_iter(text).filter_map(move |m| {
        let before = text[..m.start()].chars().next_back();
        let after  = text[m.end()..].chars().next();
        let glued  = before.is_some_and(is_word_char) || after.is_some_and(is_word_char);
        (!glued).then(|| m.as_str())
    })
}

/// Document-wide frequency of every qualifying lower-case word.
#[derive(Debug, Default, Clone)]
pub struct WordFrequencies {
    counts: HashMap<String, usize>,
    /// Words in first-seen order
    order: Vec<String>,
}

impl WordFrequencies {
    /// Build the table from the full document text.
    pub fn from_text(text: &str) -> Self {
        let lower = text.to_lowercase();
        let mut table = Self::default();
        for word in words(&lower) {
            table.add(word);
        }
        table
    }

    fn add(&mut self, word: &str) {
        match self.counts.get_mut(word) {
            Some(count) => *count += 1,
            None => {
                self.counts.insert(word.to_string(), 1);
                self.order.push(word.to_string());
            }
        }
    }

    /// Occurrences of `word` (expects lower case); 0 if never seen
    pub fn get(&self, word: &str) -> usize {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// The `n` most frequent words with their counts, highest first.
    /// Equal counts keep first-seen order.
    pub fn most_common(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .order
            .iter()
            .map(|w| (w.as_str(), self.get(w)))
            .collect();
        // sort_by is stable
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// The distractor pool: the `n` most frequent words, no counts.
    pub fn vocabulary(&self, n: usize) -> Vec<String> {
        self.most_common(n)
            .into_iter()
            .map(|(w, _)| w.to_string())
            .collect()
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_are_case_insensitive() {
        let f = WordFrequencies::from_text("Cell cell CELL membrane");
        assert_eq!(f.get("cell"), 3);
        assert_eq!(f.get("membrane"), 1);
        assert_eq!(f.len(), 2);
    }

    #[test]
    fn test_short_and_glued_words_are_ignored() {
        let f = WordFrequencies::from_text("The cat ate h2o2 water_bottle and café tea.");
        // "the", "cat", "ate", "and", "tea" are too short;
        // "h2o2", "water_bottle" and "café" have no word boundary
        // around a pure ASCII-letter run
        assert!(f.is_empty());
    }

    #[test]
    fn test_combining_mark_ends_a_word() {
        // "café" spelled as "e" + U+0301 COMBINING ACUTE ACCENT
        let f = WordFrequencies::from_text("A cafe\u{301} serves coffee.");
        assert_eq!(f.get("cafe"), 1);
        assert_eq!(f.get("serves"), 1);
        assert_eq!(f.get("coffee"), 1);
    }

    #[test]
    fn test_words_keep_their_case() {
        let found: Vec<&str> = words("Glucose, ATP and NADH-rich cafe\u{301}s").collect();
        assert_eq!(found, vec!["Glucose", "NADH", "rich", "cafe"]);
    }

    #[test]
    fn test_punctuation_is_a_boundary() {
        let f = WordFrequencies::from_text("(enzyme), enzyme; \"enzyme\" well-known");
        assert_eq!(f.get("enzyme"), 3);
        assert_eq!(f.get("well"), 1);
        assert_eq!(f.get("known"), 1);
    }

    #[test]
    fn test_most_common_breaks_ties_by_first_seen() {
        let f = WordFrequencies::from_text("zeta alpha beta alpha beta gamma");
        assert_eq!(
            f.most_common(10),
            vec![("alpha", 2), ("beta", 2), ("zeta", 1), ("gamma", 1)]
        );
    }

    #[test]
    fn test_vocabulary_is_truncated() {
        let f = WordFrequencies::from_text("alpha alpha beta gamma delta");
        assert_eq!(f.vocabulary(2), vec!["alpha", "beta"]);
        assert_eq!(f.vocabulary(0), Vec::<String>::new());
    }

    #[test]
    fn test_unknown_word_scores_zero() {
        let f = WordFrequencies::from_text("");
        assert_eq!(f.get("anything"), 0);
    }
}
