// ============================================================
// Layer 2 — GenerateUseCase (Card Assembler)
// ============================================================
// Orchestrates the whole pipeline for one document:
//
//   Step 1: Load the document          (Layer 4 - PdfLoader)
//   Step 2: Split into sentences       (Layer 4 - SentenceSplitter)
//   Step 3: Count words, take vocab    (Layer 4 - WordFrequencies)
//   Step 4: Longest sentences first
//   Step 5: For each sentence, until the card limit:
//             a. pick a keyword  — none, or a stop word → skip
//             b. blank it out    — nothing replaced     → skip
//             c. exact sentence already used            → skip
//             d. emit a cloze card, or an MCQ card with
//                sampled distractors + answer, shuffled
//
// Longer sentences go first because they carry more context
// around the blank. The sort is stable: equally long sentences
// keep their document order.
//
// The random source is created once per run from the config
// (fixed seed or OS entropy) and threaded through distractor
// sampling and option shuffling.
//
// Reference: Rust Book §13 (Iterators and Closures)
//            rand crate documentation

use anyhow::Result;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::PathBuf;

use crate::data::{
    distractors::generate_distractors,
    keywords::{is_stop_word, make_cloze, pick_keyword},
    loader::PdfLoader,
    scorer::{WordFrequencies, VOCAB_SIZE},
    sentences::{SentenceSplitter, MIN_SENTENCE_LEN},
};
use crate::domain::flashcard::Flashcard;
use crate::domain::traits::DocumentSource;

// ─── Generation Configuration ────────────────────────────────────────────────
// Everything that shapes one run. Filled either from clap flags
// or from the interactive prompts; the application layer never
// sees where the values came from.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateConfig {
    /// Stop once this many cards exist
    pub max_cards:        usize,
    /// Emit multiple-choice cards instead of cloze cards
    pub make_mcq:         bool,
    /// Wrong answers per multiple-choice card (fewer if the pool is small)
    pub distractors:      usize,
    /// Size of the top-N vocabulary used as the distractor pool
    pub vocab_size:       usize,
    /// Sentences must be longer than this many characters
    pub min_sentence_len: usize,
    /// Fixed seed for reproducible distractors; entropy when None
    pub seed:             Option<u64>,
}

impl Default for GenerateConfig {
    fn default() -> Self {
        Self {
            max_cards:        20,
            make_mcq:         false,
            distractors:      3,
            vocab_size:       VOCAB_SIZE,
            min_sentence_len: MIN_SENTENCE_LEN,
            seed:             None,
        }
    }
}

impl GenerateConfig {
    /// The random source for one run
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None       => StdRng::from_entropy(),
        }
    }
}

// ─── GenerateUseCase ──────────────────────────────────────────────────────────
// Owns a document source and the config, runs the pipeline.
pub struct GenerateUseCase<S> {
    source: S,
    config: GenerateConfig,
}

impl<S: DocumentSource> GenerateUseCase<S> {
    pub fn new(source: S, config: GenerateConfig) -> Self {
        Self { source, config }
    }

    /// Load the document and build its cards
    pub fn execute(&self) -> Result<Vec<Flashcard>> {
        let doc = self.source.load()?;
        if doc.is_blank() {
            tracing::warn!("'{}' has no extractable text", doc.source);
        }
        tracing::info!("Generating cards from '{}' ({} chars)", doc.source, doc.text.len());

        let mut rng = self.config.rng();
        let cards   = build_cards(&doc.text, &self.config, &mut rng);

        tracing::info!("Generated {} cards from '{}'", cards.len(), doc.source);
        Ok(cards)
    }
}

/// Extract `path` and build its flashcards in one call.
pub fn generate_flashcards_from_pdf(
    path:   impl Into<PathBuf>,
    config: &GenerateConfig,
) -> Result<Vec<Flashcard>> {
    GenerateUseCase::new(PdfLoader::new(path), config.clone()).execute()
}

/// The card assembler proper: document text in, cards out.
pub fn build_cards<R: Rng + ?Sized>(
    text:   &str,
    config: &GenerateConfig,
    rng:    &mut R,
) -> Vec<Flashcard> {
    // ── Steps 2 & 3: sentences, frequencies, vocabulary ──────────────────────
    let sentences = SentenceSplitter::new(config.min_sentence_len).split(text);
    let scores    = WordFrequencies::from_text(text);
    let vocab     = scores.vocabulary(config.vocab_size);
    tracing::info!(
        "Found {} sentences, {} distinct words ({} in vocabulary)",
        sentences.len(),
        scores.len(),
        vocab.len()
    );
    if sentences.is_empty() || scores.is_empty() {
        return Vec::new();
    }

    // ── Step 4: longest first (stable) ───────────────────────────────────────
    let mut ordered: Vec<&str> = sentences.iter().map(String::as_str).collect();
    ordered.sort_by_key(|s| Reverse(s.chars().count()));

    // ── Step 5: one card per usable sentence ─────────────────────────────────
    let mut cards: Vec<Flashcard> = Vec::new();
    let mut used:  HashSet<&str>  = HashSet::new();

    for sentence in ordered {
        if cards.len() >= config.max_cards {
            break;
        }

        let Some(keyword) = pick_keyword(sentence, &scores) else {
            tracing::debug!("No keyword candidates: {:?}", sentence);
            continue;
        };
        if is_stop_word(&keyword) {
            tracing::debug!("Best word '{}' is a stop word, skipping sentence", keyword);
            continue;
        }

        let prompt = make_cloze(sentence, &keyword);
        if prompt == sentence {
            tracing::debug!("Could not blank '{}' in {:?}", keyword, sentence);
            continue;
        }

        if !used.insert(sentence) {
            tracing::debug!("Duplicate sentence skipped");
            continue;
        }

        let card = if config.make_mcq {
            let mut options = generate_distractors(&keyword, &vocab, config.distractors, rng);
            options.push(keyword.clone());
            options.shuffle(rng);
            Flashcard::mcq(prompt, keyword, options)
        } else {
            Flashcard::cloze(prompt, keyword)
        };
        cards.push(card);
    }

    cards
}
