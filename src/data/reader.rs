// ============================================================
// Layer 4 — Dataset Reader
// ============================================================
// Parses one Overnight TSV file into a Vec of Examples.
//
// File format, one example per line:
//   <natural language query> \t <logical form>
//
// Parsing rules:
//   - Blank lines are skipped
//   - Every non-blank line must contain exactly two
//     tab-separated fields — anything else aborts the run.
//     A malformed line means the dataset export is broken,
//     and silently dropping it would desync the val/test
//     predictions, so this is deliberately fatal.
//   - Each field is trimmed of surrounding whitespace only
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use anyhow::{ensure, Context, Result};

use crate::domain::{example::Example, overnight::OvernightDomain};

/// Read every example from a domain TSV file.
/// Returns one Example per non-blank line, in file order.
pub fn read_examples(path: &Path, domain: OvernightDomain) -> Result<Vec<Example>> {
    let file = File::open(path)
        .with_context(|| format!("Cannot open dataset file '{}'", path.display()))?;

    let mut examples = Vec::new();

    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line
            .with_context(|| format!("Cannot read line {} of '{}'", line_no + 1, path.display()))?;
        let line = line.trim();

        // Blank lines contribute nothing
        if line.is_empty() {
            continue;
        }

        // Exactly two tab-separated fields: query and logical form
        let fields: Vec<&str> = line.split('\t').collect();
        ensure!(
            fields.len() == 2,
            "malformed line {} in '{}': expected 2 tab-separated fields, found {}",
            line_no + 1,
            path.display(),
            fields.len()
        );

        examples.push(Example::new(fields[0].trim(), fields[1].trim(), domain));
    }

    tracing::debug!(
        "Read {} examples from '{}' (domain {})",
        examples.len(),
        path.display(),
        domain
    );

    Ok(examples)
}
