// ============================================================
// Layer 1 — CLI Commands and Arguments
// ============================================================
// Ways to run:
//   interactive — asks for the PDF path and options (default)
//   generate    — everything given as flags, no prompts
//   show        — re-prints cards from an existing output file
//
// clap's derive macros generate --help, error messages for
// bad flags, and string → number conversion.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::application::generate_use_case::GenerateConfig;
use crate::data::{scorer::VOCAB_SIZE, sentences::MIN_SENTENCE_LEN};
use crate::infra::card_store::DEFAULT_OUTPUT;

/// Cards shown on the console after a run
pub const PREVIEW_CARDS: usize = 5;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Ask for the PDF and options interactively (the default)
    Interactive(InteractiveArgs),

    /// Generate cards from a PDF without prompting
    Generate(GenerateArgs),

    /// Print cards from a previously saved file
    Show(ShowArgs),
}

/// Options that are never prompted for
#[derive(Args, Debug, Clone)]
pub struct InteractiveArgs {
    /// File the cards are written to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for distractor sampling and option order
    #[arg(long)]
    pub seed: Option<u64>,
}

impl Default for InteractiveArgs {
    fn default() -> Self {
        Self {
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed:   None,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// The PDF to read
    pub pdf: PathBuf,

    /// Maximum number of cards
    #[arg(long, default_value_t = 20)]
    pub max_cards: usize,

    /// Make multiple-choice cards instead of cloze cards
    #[arg(long)]
    pub mcq: bool,

    /// Wrong answers per multiple-choice card
    #[arg(long, default_value_t = 3)]
    pub distractors: usize,

    /// File the cards are written to
    #[arg(long, default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for distractor sampling and option order
    #[arg(long)]
    pub seed: Option<u64>,

    /// How many cards to print after saving
    #[arg(long, default_value_t = PREVIEW_CARDS)]
    pub preview: usize,

    /// Most frequent words used as the distractor pool
    #[arg(long, default_value_t = VOCAB_SIZE)]
    pub vocab_size: usize,

    /// Sentences must be longer than this many characters
    #[arg(long, default_value_t = MIN_SENTENCE_LEN)]
    pub min_sentence_len: usize,
}

#[derive(Args, Debug, Clone)]
pub struct ShowArgs {
    /// The card file to read
    #[arg(default_value = DEFAULT_OUTPUT)]
    pub file: PathBuf,

    /// How many cards to print
    #[arg(long, default_value_t = PREVIEW_CARDS)]
    pub limit: usize,
}

/// Boundary between Layer 1 and Layer 2:
/// the application layer never sees clap types.
impl From<&GenerateArgs> for GenerateConfig {
    fn from(a: &GenerateArgs) -> Self {
        GenerateConfig {
            max_cards:        a.max_cards,
            make_mcq:         a.mcq,
            distractors:      a.distractors,
            vocab_size:       a.vocab_size,
            min_sentence_len: a.min_sentence_len,
            seed:             a.seed,
        }
    }
}
