// ============================================================
// Layer 3 — Document Domain Type
// ============================================================
// The full text of one source document.
// Produced once by a DocumentSource and never mutated afterwards:
// every later stage (sentence splitting, word scoring) borrows it.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::traits::DocumentSource;

/// A document after text extraction.
/// By the time a Document exists, the PDF format is gone;
/// only the concatenated page text remains.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Document {
    /// The filename, kept so log lines say which file a card came from
    pub source: String,

    /// All extracted page text, pages joined with newlines
    pub text: String,
}

impl Document {
    /// Create a new Document from a source name and its text.
    ///
    /// Example:
    ///   let doc = Document::new("notes.pdf", "Cells divide by mitosis...");
    pub fn new(source: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            text:   text.into(),
        }
    }

    /// True when extraction produced nothing but whitespace
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// An already-extracted Document is its own source.
/// Lets the card assembler run on in-memory text (tests, piping)
/// without touching the filesystem.
impl DocumentSource for Document {
    fn load(&self) -> anyhow::Result<Document> {
        Ok(self.clone())
    }
}
