// ============================================================
// Layer 4 — Sentence Splitter
// ============================================================
// Cuts the document text into candidate sentences.
//
// Boundary rule (a heuristic, not a grammar):
//   a '.', '?' or '!' followed by whitespace, followed by an
//   ASCII capital letter or a digit.
//
//   "It divides. Then it grows."  →  "It divides." | "Then it grows."
//
// The whitespace run is dropped; the punctuation stays with the
// sentence it ends and the capital/digit starts the next one.
// Known mis-splits: abbreviations ("Dr. Smith") and numbers that
// follow a full stop ("page 3. 4 cells").
//
// Newlines are turned into spaces first. PDF extraction puts a
// newline at the end of every text line, mid-sentence or not.
//
// Anything not longer than `min_len` characters (after trimming)
// is discarded: headings, page numbers, figure labels.
//
// Reference: regex crate documentation

use regex::Regex;
use std::sync::LazyLock;

/// Default minimum sentence length, in characters
pub const MIN_SENTENCE_LEN: usize = 30;

// group 1 = the terminator, group 2 = first char of the next sentence
static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([.?!])\s+([A-Z0-9])").expect("sentence boundary pattern is valid")
});

pub struct SentenceSplitter {
    /// Sentences must be strictly longer than this many chars
    min_len: usize,
}

impl SentenceSplitter {
    pub fn new(min_len: usize) -> Self {
        Self { min_len }
    }

    /// Split `text` into trimmed sentences longer than `min_len`.
    pub fn split(&self, text: &str) -> Vec<String> {
        let text = text.replace('\n', " ");

        let mut pieces: Vec<&str> = Vec::new();
        let mut start = 0usize;

        for caps in BOUNDARY.captures_iter(&text) {
            // Both groups always participate in a match
            let (Some(end), Some(next)) = (caps.get(1), caps.get(2)) else {
                continue;
            };
            pieces.push(&text[start..end.end()]);
            start = next.start();
        }
        pieces.push(&text[start..]);

        pieces
            .into_iter()
            .map(str::trim)
            .filter(|s| s.chars().count() > self.min_len)
            .map(str::to_string)
            .collect()
    }
}

impl Default for SentenceSplitter {
    fn default() -> Self {
        Self::new(MIN_SENTENCE_LEN)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_splits_on_terminator_and_capital() {
        let s = SentenceSplitter::default();
        let out = s.split(
            "The mitochondria is the powerhouse of the cell. \
             Ribosomes are responsible for protein synthesis! \
             Is the nucleus the control centre of the cell?",
        );
        assert_eq!(
            out,
            vec![
                "The mitochondria is the powerhouse of the cell.",
                "Ribosomes are responsible for protein synthesis!",
                "Is the nucleus the control centre of the cell?",
            ]
        );
    }

    #[test]
    fn test_no_split_before_lowercase() {
        let s = SentenceSplitter::new(0);
        let out = s.split("Measured at approx. three hundred metres above sea level.");
        assert_eq!(out.len(), 1);
    }

    #[test]
    fn test_splits_before_digit() {
        let s = SentenceSplitter::new(0);
        let out = s.split("Cells were counted. 42 of them survived.");
        assert_eq!(out, vec!["Cells were counted.", "42 of them survived."]);
    }

    #[test]
    fn test_newlines_become_spaces() {
        let s = SentenceSplitter::new(0);
        let out = s.split("Photosynthesis happens\nin the chloroplast.\nIt needs light.");
        assert_eq!(
            out,
            vec!["Photosynthesis happens in the chloroplast.", "It needs light."]
        );
    }

    #[test]
    fn test_drops_short_fragments() {
        let s = SentenceSplitter::default();
        // "Chapter 1." is far below the minimum length
        let out = s.split("Chapter 1. Enzymes lower the activation energy of reactions.");
        assert_eq!(out, vec!["Enzymes lower the activation energy of reactions."]);
    }

    #[test]
    fn test_length_threshold_is_exclusive() {
        let s = SentenceSplitter::new(30);
        let exactly_30 = "a".repeat(30);
        let exactly_31 = "b".repeat(31);
        assert!(s.split(&exactly_30).is_empty());
        assert_eq!(s.split(&exactly_31), vec![exactly_31.clone()]);
    }

    #[test]
    fn test_empty_text() {
        assert!(SentenceSplitter::default().split("").is_empty());
    }
}
