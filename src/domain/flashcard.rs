// ============================================================
// Layer 3 — Flashcard Domain Type
// ============================================================
// A flashcard is one of two variants:
//
//   Cloze — a sentence with one keyword blanked out
//     { "type": "cloze", "prompt": "The _____ is ...", "answer": "mitochondria" }
//
//   Mcq   — the same prompt plus a shuffled list of options
//     { "type": "mcq", "prompt": "...", "answer": "...", "options": [...] }
//
// serde's internally-tagged enum representation writes the
// "type" field first, then the variant's own fields, which is
// exactly the shape of the output file.
//
// Reference: Rust Book §6 (Enums and Pattern Matching)
//            serde docs, "Enum representations"

use serde::{Deserialize, Serialize};

/// The string substituted for the chosen keyword in a prompt
pub const BLANK: &str = "_____";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Flashcard {
    /// Recall the blanked keyword with no hints
    Cloze {
        prompt: String,
        answer: String,
    },

    /// Pick the blanked keyword out of `options`.
    /// Invariant: `answer` is always one of `options`.
    Mcq {
        prompt:  String,
        answer:  String,
        options: Vec<String>,
    },
}

impl Flashcard {
    pub fn cloze(prompt: impl Into<String>, answer: impl Into<String>) -> Self {
        Self::Cloze {
            prompt: prompt.into(),
            answer: answer.into(),
        }
    }

    pub fn mcq(
        prompt:  impl Into<String>,
        answer:  impl Into<String>,
        options: Vec<String>,
    ) -> Self {
        Self::Mcq {
            prompt: prompt.into(),
            answer: answer.into(),
            options,
        }
    }

    pub fn prompt(&self) -> &str {
        match self {
            Self::Cloze { prompt, .. } | Self::Mcq { prompt, .. } => prompt,
        }
    }

    pub fn answer(&self) -> &str {
        match self {
            Self::Cloze { answer, .. } | Self::Mcq { answer, .. } => answer,
        }
    }

    /// Options for a multiple-choice card, `None` for a cloze card
    pub fn options(&self) -> Option<&[String]> {
        match self {
            Self::Cloze { .. }         => None,
            Self::Mcq { options, .. } => Some(options.as_slice()),
        }
    }
}
