// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// Plain Rust structs and traits describing what the system
// works with: a document's text and the flashcards made from it.
//
// Rules for this layer:
//   - NO PDF library types allowed here
//   - NO file I/O
//   - NO randomness
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// Text extracted from a source document
pub mod document;

// Cloze and multiple-choice cards
pub mod flashcard;

// Core abstractions (traits) that other layers implement
pub mod traits;
