// ============================================================
// Layer 6 — Predicted-IR File Source
// ============================================================
// The val/test encoding path consumes IR strings predicted by
// a separate seq2seq inference stage, not IR produced by the
// translator. That stage writes one IR per line into
// <split>.ir under its output directory (--input_dir here).
//
// Alignment is positional: line i of val.ir belongs to example
// i of the val split. Because of that, lines are trimmed but
// NEVER skipped — dropping a blank line would silently shift
// every following prediction onto the wrong example. The
// encoder enforces the final length match.
//
// Reference: Rust Book §12 (I/O and File Handling)

use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

use crate::domain::traits::PredictedIrSource;

/// Reads predicted IR lines from `<dir>/<split>.ir`.
pub struct FilePredictions {
    dir: PathBuf,
}

impl FilePredictions {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }
}

impl PredictedIrSource for FilePredictions {
    fn load(&self, split: &str) -> Result<Vec<String>> {
        let path = self.dir.join(format!("{split}.ir"));

        let content = fs::read_to_string(&path).with_context(|| {
            format!(
                "Cannot read predicted IR for split '{}' from '{}'. \
                 Has the inference stage been run?",
                split,
                path.display()
            )
        })?;

        // Trim each line but keep every line, blank or not —
        // alignment with the split is positional
        let irs: Vec<String> = content.lines().map(|line| line.trim().to_string()).collect();

        tracing::debug!(
            "Loaded {} predicted IR lines for split '{}' from '{}'",
            irs.len(),
            split,
            path.display()
        );

        Ok(irs)
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_loads_trimmed_lines_in_order() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("val.ir"), "  ir one \nir two\n").unwrap();

        let source = FilePredictions::new(dir.path());
        let irs = source.load("val").unwrap();
        assert_eq!(irs, vec!["ir one".to_string(), "ir two".to_string()]);
    }

    #[test]
    fn test_blank_lines_are_kept_for_alignment() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("test.ir"), "ir one\n\nir three\n").unwrap();

        let source = FilePredictions::new(dir.path());
        let irs = source.load("test").unwrap();
        assert_eq!(irs.len(), 3);
        assert_eq!(irs[1], "");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = FilePredictions::new(dir.path());
        assert!(source.load("val").is_err());
    }
}
