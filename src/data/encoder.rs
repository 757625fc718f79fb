// ============================================================
// Layer 4 — Sequence Encoder
// ============================================================
// Turns a list of Examples into the five-array EncodedSplit.
//
// Two entry points share one encoding core:
//   - encode()           → train path: the IR translator is
//                          invoked once per example
//   - encode_predicted() → val/test path: IR strings come from
//                          a prior inference stage, aligned
//                          one-to-one with the dataset
//
// How the shared padded length is chosen:
//   1. Tokenize the concatenation of all IR strings and all
//      logical-form strings, padded to the batch longest.
//   2. Sanity-check that the first and last sequence in that
//      combined batch have equal length (a weak invariant —
//      it only proves padding was applied, not that every row
//      matches, but it catches a misconfigured tokenizer).
//   3. Re-tokenize IRs alone and logical forms alone, each
//      padded AND truncated to that shared length.
//
// Padding both sides to one uniform length means source and
// target tensors can be stacked without per-batch repadding
// downstream.
//
// Reference: Rust Book §13 (Iterators)
//            tokenizers crate documentation

use anyhow::{anyhow, bail, ensure, Result};
use tokenizers::{PaddingParams, PaddingStrategy, Tokenizer, TruncationParams};

use crate::domain::{encoded::EncodedSplit, example::Example, traits::IrTranslator};

/// Pad token spellings used by the pretrained tokenizer
/// families this pipeline runs with (BART-style, BERT-style).
const PAD_TOKENS: [&str; 2] = ["<pad>", "[PAD]"];

/// Encodes IR/logical-form pairs into padded id arrays using a
/// pretrained tokenizer.
pub struct SequenceEncoder {
    tokenizer: Tokenizer,
    padding:   PaddingParams,
}

impl SequenceEncoder {
    /// Wrap a pretrained tokenizer, resolving its padding
    /// configuration up front. A tokenizer that defines neither
    /// a padding section nor a recognisable pad token cannot
    /// produce valid padded arrays, so that is a fatal error.
    pub fn new(tokenizer: Tokenizer) -> Result<Self> {
        let padding = resolve_padding(&tokenizer)?;
        Ok(Self { tokenizer, padding })
    }

    /// Train path: obtain the IR for every example from the
    /// translator, then encode. A logical form the translator
    /// cannot handle aborts the run.
    pub fn encode(
        &mut self,
        dataset:    &[Example],
        translator: &dyn IrTranslator,
    ) -> Result<EncodedSplit> {
        let mut irs     = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        let mut domains = Vec::with_capacity(dataset.len());

        for item in dataset {
            irs.push(translator.lambda_to_ir(&item.logical_form)?);
            targets.push(item.logical_form.clone());
            domains.push(item.domain_index() as i32);
        }

        self.encode_pairs(irs, targets, domains)
    }

    /// Val/test path: IR strings were predicted by a separate
    /// inference step. The list must align positionally with
    /// the dataset — one IR per example, same order.
    pub fn encode_predicted(
        &mut self,
        predicted_irs: &[String],
        dataset:       &[Example],
    ) -> Result<EncodedSplit> {
        ensure!(
            predicted_irs.len() == dataset.len(),
            "predicted IR count ({}) does not match dataset size ({})",
            predicted_irs.len(),
            dataset.len()
        );

        let mut irs     = Vec::with_capacity(dataset.len());
        let mut targets = Vec::with_capacity(dataset.len());
        let mut domains = Vec::with_capacity(dataset.len());

        for (item, ir) in dataset.iter().zip(predicted_irs) {
            irs.push(ir.clone());
            targets.push(item.logical_form.clone());
            domains.push(item.domain_index() as i32);
        }

        self.encode_pairs(irs, targets, domains)
    }

    // ── Shared encoding core ──────────────────────────────────────────────────
    fn encode_pairs(
        &mut self,
        irs:     Vec<String>,
        targets: Vec<String>,
        domains: Vec<i32>,
    ) -> Result<EncodedSplit> {
        if irs.is_empty() {
            return Ok(EncodedSplit::empty());
        }

        // ── Step 1: find the shared padded length ─────────────────────────────
        // Tokenize IRs and targets together, padded to the batch
        // longest, so both sides end up with one uniform length.
        let mut combined = irs.clone();
        combined.extend(targets.iter().cloned());

        let encodings = self.encode_batch(combined, PaddingStrategy::BatchLongest, None)?;

        let first_len = encodings
            .first()
            .map(|e| e.get_ids().len())
            .ok_or_else(|| anyhow!("tokenizer returned no encodings"))?;
        let last_len = encodings
            .last()
            .map(|e| e.get_ids().len())
            .unwrap_or_default();

        // Weak sanity check: padding was actually applied
        ensure!(
            first_len == last_len,
            "tokenizer padding mismatch: first sequence has {} tokens, last has {}",
            first_len,
            last_len
        );
        let max_seq_length = first_len;

        // ── Step 2: encode each side to the shared length ─────────────────────
        let source = self.encode_batch(
            irs,
            PaddingStrategy::Fixed(max_seq_length),
            Some(max_seq_length),
        )?;
        let target = self.encode_batch(
            targets,
            PaddingStrategy::Fixed(max_seq_length),
            Some(max_seq_length),
        )?;

        let source_ids: Vec<Vec<i32>> = source
            .iter()
            .map(|e| e.get_ids().iter().map(|&id| id as i32).collect())
            .collect();
        let source_mask: Vec<Vec<i32>> = source
            .iter()
            .map(|e| e.get_attention_mask().iter().map(|&m| m as i32).collect())
            .collect();
        let target_ids: Vec<Vec<i32>> = target
            .iter()
            .map(|e| e.get_ids().iter().map(|&id| id as i32).collect())
            .collect();

        // Reserved/legacy field — always all zeros
        let choices = vec![0i32; source_ids.len()];

        Ok(EncodedSplit {
            source_ids,
            source_mask,
            target_ids,
            choices,
            domains,
        })
    }

    /// Run one batch through the tokenizer with the given padding
    /// strategy and optional truncation length. Padding params
    /// other than the strategy (pad id, pad token, ...) are the
    /// ones resolved from the tokenizer at construction.
    fn encode_batch(
        &mut self,
        inputs:     Vec<String>,
        strategy:   PaddingStrategy,
        truncate_to: Option<usize>,
    ) -> Result<Vec<tokenizers::Encoding>> {
        let padding = PaddingParams {
            strategy,
            ..self.padding.clone()
        };
        self.tokenizer.with_padding(Some(padding));

        let truncation = truncate_to.map(|max_length| TruncationParams {
            max_length,
            ..TruncationParams::default()
        });
        self.tokenizer
            .with_truncation(truncation)
            .map_err(|e| anyhow!("Cannot configure truncation: {e}"))?;

        self.tokenizer
            .encode_batch(inputs, true)
            .map_err(|e| anyhow!("Tokenisation error: {e}"))
    }
}

/// Determine the padding parameters for a pretrained tokenizer.
///
/// A saved pretrained tokenizer.json usually ships with
/// "padding": null — the padding section is runtime
/// configuration, not part of the vocabulary. In that case the
/// pad token must be looked up in the vocabulary itself: BART
/// pads with "<pad>" (id 1), BERT-family tokenizers with
/// "[PAD]". Falling back to a default id here would silently
/// pad with a real vocabulary token.
fn resolve_padding(tokenizer: &Tokenizer) -> Result<PaddingParams> {
    if let Some(params) = tokenizer.get_padding() {
        return Ok(params.clone());
    }

    for pad_token in PAD_TOKENS {
        if let Some(pad_id) = tokenizer.token_to_id(pad_token) {
            return Ok(PaddingParams {
                pad_id,
                pad_token: pad_token.to_string(),
                ..PaddingParams::default()
            });
        }
    }

    bail!(
        "tokenizer defines no padding configuration and none of {:?} is in its \
         vocabulary — cannot build padded arrays",
        PAD_TOKENS
    );
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::overnight::OvernightDomain;
    use crate::infra::tokenizer_store::{
        load_tokenizer_json, tiny_tokenizer, tiny_tokenizer_json, tiny_tokenizer_late_pad,
    };

    /// Stand-in translator: prefixes the logical form so the IR
    /// side tokenizes one token longer than the target side.
    struct StubTranslator;

    impl IrTranslator for StubTranslator {
        fn lambda_to_ir(&self, logical_form: &str) -> Result<String> {
            Ok(format!("ir {logical_form}"))
        }
    }

    /// Translator that rejects everything, to exercise the
    /// fatal-on-failure path.
    struct FailingTranslator;

    impl IrTranslator for FailingTranslator {
        fn lambda_to_ir(&self, logical_form: &str) -> Result<String> {
            Err(anyhow!("unsupported logical form: {logical_form}"))
        }
    }

    fn examples() -> Vec<Example> {
        vec![
            Example::new("who won?", "answer call listValue", OvernightDomain::Basketball),
            Example::new("how many?", "answer count", OvernightDomain::Basketball),
        ]
    }

    fn encoder() -> SequenceEncoder {
        SequenceEncoder::new(tiny_tokenizer(&[
            "ir", "answer", "call", "listValue", "count",
        ]))
        .unwrap()
    }

    #[test]
    fn test_train_path_shapes() {
        let split = encoder().encode(&examples(), &StubTranslator).unwrap();

        // Leading dimension equals the dataset size for all five arrays
        assert_eq!(split.len(), 2);
        assert_eq!(split.source_ids.len(), 2);
        assert_eq!(split.source_mask.len(), 2);
        assert_eq!(split.target_ids.len(), 2);
        assert_eq!(split.choices.len(), 2);
        assert_eq!(split.domains.len(), 2);

        // Source ids and mask have identical shapes, and every row
        // shares the split's uniform padded length
        let padded = split.padded_len();
        assert!(padded > 0);
        for i in 0..split.len() {
            assert_eq!(split.source_ids[i].len(), padded);
            assert_eq!(split.source_mask[i].len(), padded);
            assert_eq!(split.target_ids[i].len(), padded);
        }
    }

    #[test]
    fn test_reserved_array_is_all_zeros() {
        let split = encoder().encode(&examples(), &StubTranslator).unwrap();
        assert!(split.choices.iter().all(|&c| c == 0));
    }

    #[test]
    fn test_domain_indices_carried_through() {
        let dataset = vec![
            Example::new("q1", "answer call", OvernightDomain::Basketball),
            Example::new("q2", "answer count", OvernightDomain::SocialNetwork),
        ];
        let split = encoder().encode(&dataset, &StubTranslator).unwrap();
        assert_eq!(split.domains, vec![0, 7]);
    }

    #[test]
    fn test_mask_marks_padding() {
        // "ir answer call listValue" (4 tokens) vs "ir answer count"
        // (3 tokens): the shorter IR row must end in mask zeros
        let split = encoder().encode(&examples(), &StubTranslator).unwrap();
        let short_row = &split.source_mask[1];
        assert_eq!(*short_row.last().unwrap(), 0);
        assert_eq!(short_row[0], 1);
    }

    #[test]
    fn test_translator_failure_is_fatal() {
        assert!(encoder().encode(&examples(), &FailingTranslator).is_err());
    }

    #[test]
    fn test_predicted_path_uses_supplied_irs() {
        let dataset   = examples();
        let predicted = vec!["ir answer call".to_string(), "ir answer count".to_string()];
        let split = encoder().encode_predicted(&predicted, &dataset).unwrap();
        assert_eq!(split.len(), 2);
        assert_eq!(split.source_ids[0].len(), split.target_ids[0].len());
    }

    #[test]
    fn test_predicted_length_mismatch_fails_fast() {
        let dataset   = examples();
        let predicted = vec!["ir answer call".to_string()]; // one short
        assert!(encoder().encode_predicted(&predicted, &dataset).is_err());
    }

    #[test]
    fn test_empty_dataset_gives_empty_split() {
        let split = encoder().encode(&[], &StubTranslator).unwrap();
        assert!(split.is_empty());
    }

    #[test]
    fn test_padding_uses_tokenizer_pad_id_when_unconfigured() {
        // A saved pretrained tokenizer ships "padding": null and a
        // non-zero pad id — the encoder must pad with that id, not
        // a default that collides with a real vocabulary token
        let tokenizer = tiny_tokenizer_late_pad(&["ir", "answer", "call", "listValue", "count"]);
        let pad_id = tokenizer.token_to_id("[PAD]").unwrap() as i32;
        assert_ne!(pad_id, 0);

        let mut encoder = SequenceEncoder::new(tokenizer).unwrap();
        let split = encoder.encode(&examples(), &StubTranslator).unwrap();

        // Row 1's IR ("ir answer count") is one token short of the
        // padded length, so its tail must hold the pad id with a
        // zero attention mask
        assert_eq!(*split.source_ids[1].last().unwrap(), pad_id);
        assert_eq!(*split.source_mask[1].last().unwrap(), 0);
        assert_eq!(*split.target_ids[1].last().unwrap(), pad_id);
    }

    #[test]
    fn test_decoding_padded_row_recovers_input() {
        let tokenizer = tiny_tokenizer_late_pad(&["ir", "answer", "call", "listValue", "count"]);
        let decoder = tokenizer.clone();

        let mut encoder = SequenceEncoder::new(tokenizer).unwrap();
        let split = encoder.encode(&examples(), &StubTranslator).unwrap();

        // Decoding a padded row with special tokens stripped must
        // recover the original IR string
        let ids: Vec<u32> = split.source_ids[1].iter().map(|&id| id as u32).collect();
        let decoded = decoder.decode(&ids, true).unwrap();
        assert_eq!(decoded, "ir answer count");
    }

    #[test]
    fn test_tokenizer_without_pad_token_is_rejected() {
        // Strip [PAD] from the fixture entirely: no padding
        // section and no pad token in the vocabulary
        let mut json = tiny_tokenizer_json(&["answer"]);
        json["model"]["vocab"]
            .as_object_mut()
            .unwrap()
            .remove("[PAD]");
        json["added_tokens"]
            .as_array_mut()
            .unwrap()
            .retain(|t| t["content"] != "[PAD]");

        let tokenizer = load_tokenizer_json(&json);
        assert!(SequenceEncoder::new(tokenizer).is_err());
    }
}
