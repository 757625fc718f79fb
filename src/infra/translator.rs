// ============================================================
// Layer 6 — Stand-in IR Translator
// ============================================================
// The real Overnight translator rewrites lambda-DCS logical
// forms into canonical IR using a domain grammar. That grammar
// port lives in a separate component and plugs in through the
// IrTranslator trait.
//
// Until it lands, this stand-in normalises whitespace so the
// tokenizer sees one canonical spelling of each logical form
// regardless of how the TSV export spaced it. It never fails,
// so the train path is exercisable end to end.
//
// TODO: swap in the grammar-based Overnight translator once
// its Rust port is available.

use anyhow::Result;

use crate::domain::traits::IrTranslator;

/// Whitespace-normalising stand-in for the grammar translator.
pub struct WhitespaceNormalizer;

impl IrTranslator for WhitespaceNormalizer {
    fn lambda_to_ir(&self, logical_form: &str) -> Result<String> {
        Ok(logical_form.split_whitespace().collect::<Vec<_>>().join(" "))
    }
}
