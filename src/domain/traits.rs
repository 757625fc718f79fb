// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// Traits are Rust's way of defining shared behaviour.
//
// By programming against traits instead of concrete types,
// we can swap implementations without changing the code
// that uses them. The two external collaborators of this
// pipeline hide behind exactly these seams:
//
//   - IrTranslator      → the logical-form-to-IR translator
//                         (grammar-based, developed separately)
//   - PredictedIrSource → the prior seq2seq inference stage
//                         that predicts IR for val/test splits
//
// The encoder and the use case only ever see the traits, so
// the real components plug in without touching the pipeline.
//
// Reference: Rust Book §10 (Traits: Defining Shared Behaviour)

use anyhow::Result;

// ─── IrTranslator ─────────────────────────────────────────────────────────────
/// Translates one lambda-DCS logical form into its intermediate
/// representation (IR) string.
///
/// Implementations:
///   - WhitespaceNormalizer → stand-in used until the grammar
///     translator is ported (infra layer)
///   - test stubs in encoder tests
///
/// A logical form the translator cannot handle is a fatal error
/// for the whole run — there is no partial-failure recovery.
pub trait IrTranslator {
    fn lambda_to_ir(&self, logical_form: &str) -> Result<String>;
}

// ─── PredictedIrSource ────────────────────────────────────────────────────────
/// Supplies externally predicted IR strings for a named split.
///
/// The val/test encoding path does not invoke the translator;
/// it consumes IR predicted by a separate inference step. The
/// returned list must align one-to-one (positionally) with the
/// split's examples — the encoder enforces the length match.
pub trait PredictedIrSource {
    fn load(&self, split: &str) -> Result<Vec<String>>;
}
