// ============================================================
// Layer 1 — Console Report
// ============================================================
// Runs the pipeline for one PDF and tells the user what happened:
//
//   missing file  → "❌ File not found."        (nothing else runs)
//   zero cards    → a warning                   (no file written)
//   otherwise     → save, "Saved N cards to …", preview
//
// None of these outcomes is an error; only failures inside the
// PDF library or while writing the file propagate.

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::application::generate_use_case::{generate_flashcards_from_pdf, GenerateConfig};
use crate::domain::flashcard::Flashcard;
use crate::infra::card_store::CardStore;

pub const BANNER: &str = "\n📚 PDF → Flashcard Generator\n";

pub fn print_file_not_found<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "❌ File not found.")?;
    Ok(())
}

pub fn generate_and_report<W: Write>(
    out:     &mut W,
    pdf:     &Path,
    config:  &GenerateConfig,
    output:  &Path,
    preview: usize,
) -> Result<()> {
    if !pdf.exists() {
        return print_file_not_found(out);
    }

    let cards = generate_flashcards_from_pdf(pdf, config)?;
    if cards.is_empty() {
        tracing::warn!("No cards generated from '{}'", pdf.display());
        writeln!(
            out,
            "⚠ No cards generated. Try a different document or a lower minimum sentence length."
        )?;
        return Ok(());
    }

    let store = CardStore::new(output);
    store.save(&cards)?;
    writeln!(out, "Saved {} cards to {}", cards.len(), store.path().display())?;

    print_preview(out, &cards, preview)
}

/// Print the first `limit` cards
pub fn print_preview<W: Write>(out: &mut W, cards: &[Flashcard], limit: usize) -> Result<()> {
    if limit == 0 || cards.is_empty() {
        return Ok(());
    }

    writeln!(out, "\n🔎 Sample cards:")?;
    for (i, card) in cards.iter().take(limit).enumerate() {
        writeln!(out, "\nCard {}:", i + 1)?;
        writeln!(out, "Prompt: {}", card.prompt())?;
        if let Some(options) = card.options() {
            writeln!(out, "Options: {:?}", options)?;
        }
        writeln!(out, "Answer: {}", card.answer())?;
    }
    Ok(())
}
