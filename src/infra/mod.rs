// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Output persistence, kept apart from the pipeline so the
// application layer only ever hands over a list of cards:
//
//   card_store.rs — writes the cards as a pretty-printed JSON
//                   array (and reads such a file back)
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// JSON flashcard file writer/reader
pub mod card_store;
