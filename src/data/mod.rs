// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// Everything between the PDF file and a finished card:
//
//   PDF file
//       │
//       ▼
//   PdfLoader          → extracts page text into a Document
//       │
//       ├──────────────────────────┐
//       ▼                          ▼
//   SentenceSplitter          WordFrequencies
//   (candidate sentences)     (document-wide counts,
//       │                      top-N vocabulary)
//       ▼                          │
//   pick_keyword  ◄────────────────┤
//       │                          │
//       ▼                          │
//   make_cloze                     │
//       │                          ▼
//       └──────────────► generate_distractors (MCQ only)
//
// Each step is a small pure function or struct, testable on
// its own. Only the loader touches the filesystem; only the
// distractor generator uses randomness, and it receives its
// random source from the caller.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Extracts page text from a PDF with lopdf
pub mod loader;

/// Splits text into candidate sentences
pub mod sentences;

/// Document-wide word frequencies and vocabulary
pub mod scorer;

/// Keyword picking, stop words and cloze building
pub mod keywords;

/// Multiple-choice distractor sampling
pub mod distractors;
