// ============================================================
// Layer 6 — Infrastructure Layer
// ============================================================
// Handles all cross-cutting concerns that don't belong in
// any specific business layer:
//
//   tokenizer_store.rs — Loads the pretrained tokenizer named
//                        by --model_name_or_path. The pipeline
//                        never trains a tokenizer; the same
//                        pretrained vocabulary must be used by
//                        this preparation step and by the
//                        downstream training code.
//
//   translator.rs      — Stand-in IrTranslator implementation.
//                        The real grammar-based translator is
//                        developed separately and plugs into
//                        the IrTranslator trait seam.
//
//   predictions.rs     — File-backed PredictedIrSource reading
//                        the prior inference stage's predicted
//                        IR lines for the val/test splits.
//
//   serializer.rs      — Writes vocab.json and the per-split
//                        .pt array files to the output
//                        directory.
//
// Why is this a separate layer?
//   These concerns integrate with the outside world (files on
//   disk, artifacts of other pipeline stages). Keeping them
//   here keeps the data layer focused on pure transformation.
//
// Reference: Rust Book §7 (Modules)
//            Rust Book §9 (Error Handling with anyhow)

/// Pretrained tokenizer loading
pub mod tokenizer_store;

/// Stand-in logical-form-to-IR translator
pub mod translator;

/// Predicted-IR file source for val/test splits
pub mod predictions;

/// Output artifact writing (vocab.json, <split>.pt)
pub mod serializer;
