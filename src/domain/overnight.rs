// ============================================================
// Layer 3 — Overnight Domains
// ============================================================
// The Overnight dataset is partitioned into eight topical
// domains (basketball, blocks, calendar, ...). Each domain has
// its own pair of TSV files on disk and a stable integer index
// that is carried through into the encoded arrays so the model
// can condition on it.
//
// The index of a domain is its position in the fixed ALL order
// below — this order is part of the on-disk contract and must
// never be reordered, or previously encoded datasets would
// silently disagree with new ones.
//
// Reference: Wang et al. (2015) - Overnight dataset paper
//            Rust Book §6 (Enums and Pattern Matching)

use std::fmt;

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// One of the eight fixed Overnight topical domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum OvernightDomain {
    Basketball,
    Blocks,
    Calendar,
    Housing,
    Publications,
    Recipes,
    Restaurants,
    SocialNetwork,
}

impl OvernightDomain {
    /// Every domain, in index order. Position in this array IS
    /// the domain index stored in the encoded arrays.
    pub const ALL: [OvernightDomain; 8] = [
        OvernightDomain::Basketball,
        OvernightDomain::Blocks,
        OvernightDomain::Calendar,
        OvernightDomain::Housing,
        OvernightDomain::Publications,
        OvernightDomain::Recipes,
        OvernightDomain::Restaurants,
        OvernightDomain::SocialNetwork,
    ];

    /// The stable integer index of this domain (0..8)
    pub fn index(self) -> usize {
        Self::ALL
            .iter()
            .position(|d| *d == self)
            .unwrap_or_default()
    }

    /// The lowercase name used in file names and on the CLI
    pub fn name(self) -> &'static str {
        match self {
            OvernightDomain::Basketball    => "basketball",
            OvernightDomain::Blocks        => "blocks",
            OvernightDomain::Calendar      => "calendar",
            OvernightDomain::Housing       => "housing",
            OvernightDomain::Publications  => "publications",
            OvernightDomain::Recipes       => "recipes",
            OvernightDomain::Restaurants   => "restaurants",
            OvernightDomain::SocialNetwork => "socialnetwork",
        }
    }

    /// Parse a domain from its CLI / file-name spelling.
    /// Unknown names are a fatal configuration error.
    pub fn from_name(name: &str) -> Result<Self> {
        for domain in Self::ALL {
            if domain.name() == name {
                return Ok(domain);
            }
        }
        bail!(
            "unknown domain '{}' — expected one of: {}",
            name,
            Self::ALL.map(|d| d.name()).join(", ")
        );
    }

    /// File name of this domain's training TSV, e.g. "basketball_train.tsv"
    pub fn train_file(self) -> String {
        format!("{}_train.tsv", self.name())
    }

    /// File name of this domain's test TSV, e.g. "basketball_test.tsv"
    pub fn test_file(self) -> String {
        format!("{}_test.tsv", self.name())
    }
}

impl fmt::Display for OvernightDomain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
