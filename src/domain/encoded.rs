// ============================================================
// Layer 3 — EncodedSplit Domain Type
// ============================================================
// The output unit of the encoder: five parallel arrays for one
// dataset split, ready to be serialized for model training.
//
// The five arrays, in their fixed serialization order:
//   1. source_ids  — IR token ids          shape [n, padded_len]
//   2. source_mask — IR attention mask     shape [n, padded_len]
//   3. target_ids  — logical-form token ids shape [n, padded_len]
//   4. choices     — reserved/legacy field, always all zeros
//   5. domains     — domain index per example, shape [n]
//
// Invariants:
//   - all five arrays share the same leading dimension n
//   - source_ids, source_mask and target_ids share the same
//     trailing (padded) dimension within a split
//
// The "choices" array carries no semantic content — it exists
// only so the serialized layout matches what the downstream
// training code expects to unpickle.
//
// Reference: Rust Book §5 (Structs)

use serde::{Deserialize, Serialize};

/// Five parallel arrays encoding one dataset split.
/// Token ids are i32, matching the dtype the downstream
/// training code reads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodedSplit {
    /// IR token ids — one padded row per example
    pub source_ids: Vec<Vec<i32>>,

    /// IR attention mask — 1 for real tokens, 0 for padding
    pub source_mask: Vec<Vec<i32>>,

    /// Logical-form token ids — one padded row per example
    pub target_ids: Vec<Vec<i32>>,

    /// Reserved/legacy field — always all zeros
    pub choices: Vec<i32>,

    /// Domain index of each example
    pub domains: Vec<i32>,
}

impl EncodedSplit {
    /// Number of examples in this split (the shared leading dimension)
    pub fn len(&self) -> usize {
        self.source_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source_ids.is_empty()
    }

    /// The shared padded sequence length, or 0 for an empty split
    pub fn padded_len(&self) -> usize {
        self.source_ids.first().map_or(0, Vec::len)
    }

    /// An encoded split with zero examples (e.g. a domain whose
    /// validation slice is empty)
    pub fn empty() -> Self {
        Self {
            source_ids:  Vec::new(),
            source_mask: Vec::new(),
            target_ids:  Vec::new(),
            choices:     Vec::new(),
            domains:     Vec::new(),
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_split() {
        let split = EncodedSplit::empty();
        assert!(split.is_empty());
        assert_eq!(split.len(), 0);
        assert_eq!(split.padded_len(), 0);
    }

    #[test]
    fn test_len_and_padded_len() {
        let split = EncodedSplit {
            source_ids:  vec![vec![1, 2, 0], vec![3, 4, 5]],
            source_mask: vec![vec![1, 1, 0], vec![1, 1, 1]],
            target_ids:  vec![vec![1, 0, 0], vec![2, 3, 0]],
            choices:     vec![0, 0],
            domains:     vec![4, 4],
        };
        assert_eq!(split.len(), 2);
        assert_eq!(split.padded_len(), 3);
    }
}
