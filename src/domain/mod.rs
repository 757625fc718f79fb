// ============================================================
// Layer 3 — Domain Layer
// ============================================================
// This is the heart of the application — pure Rust structs,
// enums and traits that define the core concepts of the system.
//
// Rules for this layer:
//   - NO tokenizer framework types allowed here
//   - NO file I/O or subprocess calls
//   - Only plain Rust structs, enums, and traits
//
// Why keep this layer pure?
//   - Easy to unit test (no tokenizer files needed)
//   - Easy to understand (no framework noise)
//   - Easy to swap implementations (just implement the trait)
//
// Think of this layer as the "dictionary" of the system —
// it defines what things ARE, not how they work.
//
// Reference: Rust Book §5 (Structs), §6 (Enums), §10 (Traits)

// The eight fixed Overnight topical domains
pub mod overnight;

// A single (query, logical form) example tagged with its domain
pub mod example;

// The five-array encoded output unit for one split
pub mod encoded;

// Vocabulary metadata written alongside the encoded splits
pub mod vocab;

// Core abstractions (traits) that other layers implement
pub mod traits;
