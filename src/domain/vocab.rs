// ============================================================
// Layer 3 — Vocab Domain Type
// ============================================================
// Vocabulary metadata written next to the encoded splits.
//
// In this pipeline the tokenizer vocabulary lives inside the
// pretrained tokenizer itself, so this record holds only the
// answer-token mapping — and for the Overnight preparation
// that mapping is empty. The record is still written because
// the downstream training code unconditionally reads a
// vocab.json from the output directory.
//
// A BTreeMap (rather than HashMap) keeps the JSON output in a
// deterministic key order across runs.
//
// Reference: Rust Book §8 (Collections)

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The vocab.json record for one preparation run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Vocab {
    /// Answer token → index mapping; empty for Overnight
    pub answer_token_to_idx: BTreeMap<String, u32>,
}

impl Vocab {
    /// The initial (empty) vocabulary record
    pub fn init() -> Self {
        Self::default()
    }
}
