// ============================================================
// Layer 4 — Data Pipeline
// ============================================================
// This layer handles everything from raw TSV files all the
// way to the five encoded arrays per split.
//
// The pipeline flows in this order:
//
//   <domain>_train.tsv / <domain>_test.tsv
//       │
//       ▼
//   reader            → parses tab-separated lines into Examples
//       │
//       ▼
//   splitter          → seeded shuffle, 80/20 train/val split
//       │
//       ▼
//   encoder           → IR translation + tokenization into the
//       │               five-array EncodedSplit
//       ▼
//   serializer (Layer 6) → vocab.json + <split>.pt files
//
// Each module is responsible for exactly one step.
// This makes each step independently testable and replaceable.
//
// Reference: Rust Book §13 (Iterators and Closures)

/// Parses domain TSV files into Examples
pub mod reader;

/// Shuffles and splits data into train/validation sets
pub mod splitter;

/// Tokenizes IR and logical-form sequences into padded arrays
pub mod encoder;
