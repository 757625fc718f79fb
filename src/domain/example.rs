// ============================================================
// Layer 3 — Example Domain Type
// ============================================================
// Represents a single dataset record: a natural language query
// paired with its logical form, tagged with the Overnight
// domain it was read from. This is a plain data struct with no
// behaviour beyond construction — by the time an Example
// exists, both fields have already been trimmed.
//
// Examples are immutable once read: the pipeline reads them
// fresh from disk each run, transforms them in memory, and
// never persists them individually.
//
// Reference: Rust Book §5 (Structs and Methods)

use serde::{Deserialize, Serialize};

use crate::domain::overnight::OvernightDomain;

/// One (query, logical form) pair from a domain TSV file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Example {
    /// The natural language question, e.g. "who won the game?"
    pub query: String,

    /// The lambda-DCS logical form paired with the query,
    /// e.g. "( call SW.listValue ( call SW.getProperty ... ) )"
    pub logical_form: String,

    /// Which of the eight Overnight domains this example belongs to
    pub domain: OvernightDomain,
}

impl Example {
    /// Create a new Example.
    /// Uses impl Into<String> so callers can pass &str or String.
    pub fn new(
        query:        impl Into<String>,
        logical_form: impl Into<String>,
        domain:       OvernightDomain,
    ) -> Self {
        Self {
            query:        query.into(),
            logical_form: logical_form.into(),
            domain,
        }
    }

    /// The stable integer index of this example's domain,
    /// as stored in the encoded domain-index array
    pub fn domain_index(&self) -> usize {
        self.domain.index()
    }
}
