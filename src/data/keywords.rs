// ============================================================
// Layer 4 — Keyword Picker & Cloze Builder
// ============================================================
// For one sentence, choose the single word worth blanking out,
// then blank it.
//
// Picking:
//   1. Candidates are the sentence's qualifying words
//      (same standalone ASCII-letter rule as the word scorer),
//      lower-cased and de-duplicated in first-seen order.
//   2. Each candidate scores (document frequency, length).
//      Frequency dominates; length only separates equal counts,
//      favouring the more specific term.
//   3. A linear scan keeps the current best and only replaces it
//      on a strictly greater score, so a full tie goes to the
//      candidate that appears first in the sentence.
//
// Blanking:
//   The first case-insensitive occurrence of the keyword is
//   replaced by the blank marker. The match is a plain substring
//   match, no word boundaries. If nothing matches, the sentence
//   comes back unchanged and the caller drops it.
//
// Reference: Rust Book §13 (Iterators)
//            regex crate documentation

use regex::{NoExpand, RegexBuilder};
use std::collections::HashSet;

use crate::data::scorer::{words, WordFrequencies};
use crate::domain::flashcard::BLANK;

/// Function words that make useless cards.
/// Checked after picking: a sentence whose best word is one of
/// these yields no card at all.
pub const STOP_WORDS: [&str; 10] = [
    "this", "that", "these", "those", "which",
    "where", "when", "what", "there", "their",
];

pub fn is_stop_word(word: &str) -> bool {
    let lower = word.to_lowercase();
    STOP_WORDS.contains(&lower.as_str())
}

/// Choose the keyword for `sentence`, or `None` if it has no
/// qualifying word. The returned keyword is lower case.
pub fn pick_keyword(sentence: &str, scores: &WordFrequencies) -> Option<String> {
    let mut seen = HashSet::new();
    let candidates = words(sentence)
        .map(str::to_lowercase)
        .filter(|w| seen.insert(w.clone()));

    let mut best: Option<((usize, usize), String)> = None;
    for word in candidates {
        let score = (scores.get(&word), word.chars().count());
        let better = match &best {
            Some((best_score, _)) => score > *best_score,
            None => true,
        };
        if better {
            best = Some((score, word));
        }
    }

    best.map(|(_, word)| word)
}

/// Replace the first case-insensitive occurrence of `keyword`
/// in `sentence` with the blank marker.
pub fn make_cloze(sentence: &str, keyword: &str) -> String {
    let pattern = RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build();

    match pattern {
        Ok(re) => re.replacen(sentence, 1, NoExpand(BLANK)).into_owned(),
        // An escaped literal always compiles; unchanged means "no card"
        Err(_) => sentence.to_string(),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_picks_most_frequent_word() {
        let scores = WordFrequencies::from_text(
            "mitochondria mitochondria mitochondria powerhouse respiration",
        );
        let kw = pick_keyword(
            "The mitochondria is the powerhouse of the cell and produces energy through respiration.",
            &scores,
        );
        assert_eq!(kw.as_deref(), Some("mitochondria"));
    }

    #[test]
    fn test_length_breaks_frequency_ties() {
        let scores = WordFrequencies::from_text("cell membrane");
        // Both appear once; "membrane" is longer
        let kw = pick_keyword("The cell membrane is thin.", &scores);
        assert_eq!(kw.as_deref(), Some("membrane"));
    }

    #[test]
    fn test_full_tie_goes_to_first_candidate() {
        let scores = WordFrequencies::from_text("");
        // All unseen (frequency 0) and all five letters long
        let kw = pick_keyword("Alpha gamma delta sigma", &scores);
        assert_eq!(kw.as_deref(), Some("alpha"));
    }

    #[test]
    fn test_candidates_are_lower_cased() {
        let scores = WordFrequencies::from_text("photosynthesis");
        let kw = pick_keyword("PHOTOSYNTHESIS needs light.", &scores);
        assert_eq!(kw.as_deref(), Some("photosynthesis"));
    }

    #[test]
    fn test_decomposed_accent_still_gives_keyword() {
        let text   = "The cafe\u{301} sells cafe\u{301} drinks to cells.";
        let scores = WordFrequencies::from_text(text);
        let kw     = pick_keyword(text, &scores);
        assert_eq!(kw.as_deref(), Some("cafe"));
        // The mark stays behind after the blank
        assert_eq!(make_cloze(text, "cafe"), "The _____\u{301} sells cafe\u{301} drinks to cells.");
    }

    #[test]
    fn test_no_candidates() {
        let scores = WordFrequencies::from_text("");
        assert_eq!(pick_keyword("It is 42 km to go, by car.", &scores), None);
    }

    #[test]
    fn test_stop_words() {
        assert!(is_stop_word("there"));
        assert!(is_stop_word("Their"));
        assert!(!is_stop_word("energy"));
    }

    #[test]
    fn test_cloze_replaces_first_occurrence_only() {
        let out = make_cloze("Energy in, energy out.", "energy");
        assert_eq!(out, "_____ in, energy out.");
    }

    #[test]
    fn test_cloze_is_case_insensitive() {
        let out = make_cloze("The MITOCHONDRIA makes ATP.", "mitochondria");
        assert_eq!(out, "The _____ makes ATP.");
    }

    #[test]
    fn test_cloze_matches_inside_longer_words() {
        // Plain substring match: "cell" hits "cells" first
        let out = make_cloze("Many cells form one cell wall.", "cell");
        assert_eq!(out, "Many _____s form one cell wall.");
    }

    #[test]
    fn test_cloze_without_match_is_unchanged() {
        let s = "Nothing to replace here.";
        assert_eq!(make_cloze(s, "mitochondria"), s);
    }

    #[test]
    fn test_cloze_treats_keyword_literally() {
        // Regex metacharacters in the keyword must not act as a pattern
        assert_eq!(make_cloze("a+b equals c", "a+b"), "_____ equals c");
        assert_eq!(make_cloze("aab equals c", "a+b"), "aab equals c");
    }
}
