// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The card assembler only needs "something that yields a
// Document". Programming against this trait keeps the PDF
// library out of the application layer and lets tests feed
// plain text straight into the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;
use crate::domain::document::Document;

// ─── DocumentSource ───────────────────────────────────────────────────────────
/// Any component that can produce the text of one document.
///
/// Implementations:
///   - PdfLoader → extracts every page of a PDF file
///   - Document  → an already-extracted document returns itself
pub trait DocumentSource {
    /// Load (or extract) the document.
    fn load(&self) -> Result<Document>;
}
