// ============================================================
// Layer 6 — Card Store
// ============================================================
// Writes the generated cards to a JSON file.
//
// Output format: one JSON array, two-space indentation,
// non-ASCII text written as-is (serde_json never escapes it):
//
//   [
//     {
//       "type": "cloze",
//       "prompt": "The _____ is the powerhouse of the cell ...",
//       "answer": "mitochondria"
//     }
//   ]
//
// Reference: Rust Book §9 (Error Handling)
//            serde_json documentation

use anyhow::{Context, Result};
use std::{fs, path::{Path, PathBuf}};

use crate::domain::flashcard::Flashcard;

/// Default output file, relative to the working directory
pub const DEFAULT_OUTPUT: &str = "flashcards.json";

pub struct CardStore {
    /// Full path of the JSON file
    path: PathBuf,
}

impl CardStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Serialise `cards` and overwrite the file.
    pub fn save(&self, cards: &[Flashcard]) -> Result<()> {
        let json = serde_json::to_string_pretty(cards)?;

        fs::write(&self.path, json)
            .with_context(|| format!("Cannot write cards to '{}'", self.path.display()))?;

        tracing::info!("Wrote {} cards to '{}'", cards.len(), self.path.display());
        Ok(())
    }

    /// Read a previously saved card file back.
    pub fn load(&self) -> Result<Vec<Flashcard>> {
        let json = fs::read_to_string(&self.path)
            .with_context(|| format!("Cannot read cards from '{}'", self.path.display()))?;

        serde_json::from_str(&json)
            .with_context(|| format!("'{}' is not a flashcard file", self.path.display()))
    }
}
