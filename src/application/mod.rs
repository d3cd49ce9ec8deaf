// ============================================================
// Layer 2 — Application / Use Cases
// ============================================================
// Orchestrates the data layer to turn one document into a list
// of flashcards.
//
// Rules for this layer:
//   - No printing or prompting here (that's Layer 1)
//   - No direct file access (the loader and the card store do that)
//   - Only workflow coordination
//
// Reference: Clean Architecture pattern
//            Rust Book §7 (Module System)

// The card generation workflow
pub mod generate_use_case;
