// ============================================================
// Layer 4 — PDF Loader
// ============================================================
// Extracts the text of every page of a PDF using lopdf
// (pure Rust, no native pdfium/poppler needed).
//
// How the extraction works:
//   lopdf::Document::load  → parses the cross-reference table
//   get_pages()            → BTreeMap<page number, object id>,
//                            so iteration is in page order
//   extract_text(&[n])     → decodes the text-showing operators
//                            (Tj / TJ) of page n's content stream
//
// Pages that yield no text at all (scanned images, empty
// separators) are skipped. Any other page is kept verbatim, even
// whitespace only: its spaces can sit inside a sentence that runs
// across the page break, and they count toward its length. A page
// whose content lopdf cannot decode is treated the same way:
// it has no text we can use. Failing to open or parse the file
// itself is an error and propagates to the caller.
//
// Reference: lopdf crate documentation
//            Rust Book §9 (Error Handling)

use anyhow::{Context, Result};
use lopdf::Document as PdfDocument;
use std::path::PathBuf;

use crate::domain::document::Document;
use crate::domain::traits::DocumentSource;

/// Loads one PDF file from disk.
/// Implements the DocumentSource trait from Layer 3.
pub struct PdfLoader {
    /// Path to the PDF file
    path: PathBuf,
}

impl PdfLoader {
    /// Create a new PdfLoader pointed at a file
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl DocumentSource for PdfLoader {
    fn load(&self) -> Result<Document> {
        let pdf = PdfDocument::load(&self.path)
            .with_context(|| format!("Cannot open PDF '{}'", self.path.display()))?;

        let pages = pdf.get_pages();
        let mut page_texts: Vec<String> = Vec::with_capacity(pages.len());

        for &page_num in pages.keys() {
            match pdf.extract_text(&[page_num]) {
                Ok(text) if !text.is_empty() => page_texts.push(text),
                Ok(_) => {
                    tracing::debug!("Page {} has no extractable text", page_num);
                }
                Err(e) => {
                    tracing::debug!("Page {} skipped, text not decodable: {}", page_num, e);
                }
            }
        }

        tracing::info!(
            "Extracted text from {} of {} pages in '{}'",
            page_texts.len(),
            pages.len(),
            self.path.display()
        );

        // Use the filename as the source identifier
        let source = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("unknown")
            .to_string();

        Ok(Document::new(source, page_texts.join("\n")))
    }
}
