// ============================================================
// Layer 4 — Distractor Generator
// ============================================================
// Wrong answers for a multiple-choice card, drawn from the
// document's own vocabulary so they "look like" the subject.
//
// A vocabulary word is eligible when:
//   - it is not the answer (compared case-insensitively)
//   - its length is within ±2 characters of the answer's
//     ("energy" (6) accepts 4..=8 letter words)
//
// Up to `n` eligible words are sampled without replacement.
// The random source is passed in by the caller: a seeded StdRng
// gives the same distractors every run, which is what the
// tests rely on.
//
// Reference: rand crate documentation (SliceRandom)
//            Rust Book §13 (Iterators and Closures)

use rand::seq::SliceRandom;
use rand::Rng;

/// Length window around the answer's length
pub const LENGTH_TOLERANCE: usize = 2;

/// Sample up to `n` distractors for `correct` from `vocab`.
/// Returns fewer when the eligible pool is smaller, and an empty
/// Vec when nothing is eligible.
pub fn generate_distractors<R: Rng + ?Sized>(
    correct: &str,
    vocab:   &[String],
    n:       usize,
    rng:     &mut R,
) -> Vec<String> {
    let correct_lower = correct.to_lowercase();
    let correct_len   = correct.chars().count();

    let candidates: Vec<&String> = vocab
        .iter()
        .filter(|w| w.to_lowercase() != correct_lower)
        .filter(|w| w.chars().count().abs_diff(correct_len) <= LENGTH_TOLERANCE)
        .collect();

    candidates
        .choose_multiple(rng, n)
        .map(|w| (*w).clone())
        .collect()
}
