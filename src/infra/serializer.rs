// ============================================================
// Layer 6 — Output Serializer
// ============================================================
// Writes the run's artifacts into the output directory:
//
//   vocab.json — the Vocab record as indented JSON
//   <split>.pt — the five EncodedSplit arrays as a sequence of
//                MessagePack objects appended in fixed order:
//                source ids, source mask, target ids,
//                reserved/zero array, domain-index array
//
// One MessagePack object per array, back to back in one file,
// mirrors how the downstream loader reads them: five
// sequential deserialize calls on the same handle. No
// compression, no versioning, no checksum.
//
// A symmetric read_split() reconstructs an EncodedSplit from
// such a file, for downstream consumers and for tests.
//
// Reference: Rust Book §9 (Error Handling)
//            Rust Book §12 (I/O and File Handling)

use std::{
    fs::{self, File},
    io::{BufReader, BufWriter},
    path::PathBuf,
};

use anyhow::{Context, Result};

use crate::domain::{encoded::EncodedSplit, vocab::Vocab};

/// Writes encoded splits and vocab metadata to one directory.
pub struct SplitWriter {
    dir: PathBuf,
}

impl SplitWriter {
    /// Create a new SplitWriter.
    /// Creates the output directory if it doesn't already exist
    /// (idempotent, like `mkdir -p`).
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)
            .with_context(|| format!("Cannot create output directory '{}'", dir.display()))?;
        Ok(Self { dir })
    }

    /// Write the vocab record as indented JSON to vocab.json.
    pub fn write_vocab(&self, vocab: &Vocab) -> Result<PathBuf> {
        let path = self.dir.join("vocab.json");

        let json = serde_json::to_string_pretty(vocab)?;
        fs::write(&path, json)
            .with_context(|| format!("Cannot write vocab to '{}'", path.display()))?;

        tracing::info!("Dumped vocab to '{}'", path.display());
        Ok(path)
    }

    /// Write one encoded split as five MessagePack objects
    /// appended in fixed order into `<name>.pt`.
    pub fn write_split(&self, name: &str, split: &EncodedSplit) -> Result<PathBuf> {
        let path = self.dir.join(format!("{name}.pt"));

        let file = File::create(&path)
            .with_context(|| format!("Cannot create split file '{}'", path.display()))?;
        let mut writer = BufWriter::new(file);

        // Fixed serialization order — the downstream loader
        // deserializes these five objects in exactly this order
        rmp_serde::encode::write(&mut writer, &split.source_ids)?;
        rmp_serde::encode::write(&mut writer, &split.source_mask)?;
        rmp_serde::encode::write(&mut writer, &split.target_ids)?;
        rmp_serde::encode::write(&mut writer, &split.choices)?;
        rmp_serde::encode::write(&mut writer, &split.domains)?;

        tracing::info!(
            "Wrote split '{}' ({} examples, padded length {}) to '{}'",
            name,
            split.len(),
            split.padded_len(),
            path.display()
        );
        Ok(path)
    }

    /// Read an encoded split back from `<name>.pt` — the exact
    /// inverse of write_split.
    pub fn read_split(&self, name: &str) -> Result<EncodedSplit> {
        let path = self.dir.join(format!("{name}.pt"));

        let file = File::open(&path)
            .with_context(|| format!("Cannot open split file '{}'", path.display()))?;
        let mut reader = BufReader::new(file);

        let source_ids  = rmp_serde::decode::from_read(&mut reader)?;
        let source_mask = rmp_serde::decode::from_read(&mut reader)?;
        let target_ids  = rmp_serde::decode::from_read(&mut reader)?;
        let choices     = rmp_serde::decode::from_read(&mut reader)?;
        let domains     = rmp_serde::decode::from_read(&mut reader)?;

        Ok(EncodedSplit { source_ids, source_mask, target_ids, choices, domains })
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_split() -> EncodedSplit {
        EncodedSplit {
            source_ids:  vec![vec![2, 3, 0], vec![4, 5, 6]],
            source_mask: vec![vec![1, 1, 0], vec![1, 1, 1]],
            target_ids:  vec![vec![3, 0, 0], vec![5, 6, 0]],
            choices:     vec![0, 0],
            domains:     vec![0, 7],
        }
    }

    #[test]
    fn test_split_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SplitWriter::new(dir.path()).unwrap();

        let split = sample_split();
        writer.write_split("train", &split).unwrap();

        let loaded = writer.read_split("train").unwrap();
        assert_eq!(loaded, split);
    }

    #[test]
    fn test_vocab_json_shape() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SplitWriter::new(dir.path()).unwrap();

        let path = writer.write_vocab(&Vocab::init()).unwrap();
        let content = fs::read_to_string(path).unwrap();

        // Indented JSON with the single (empty) mapping
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value, serde_json::json!({ "answer_token_to_idx": {} }));
        assert!(content.contains('\n'));
    }

    #[test]
    fn test_output_directory_creation_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("out");

        // Twice in a row must both succeed
        SplitWriter::new(&nested).unwrap();
        SplitWriter::new(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn test_file_holds_exactly_five_objects() {
        let dir = tempfile::tempdir().unwrap();
        let writer = SplitWriter::new(dir.path()).unwrap();
        writer.write_split("val", &sample_split()).unwrap();

        let file = File::open(dir.path().join("val.pt")).unwrap();
        let mut reader = BufReader::new(file);

        // Five values deserialize cleanly...
        for _ in 0..5 {
            let _: serde_json::Value = rmp_serde::decode::from_read(&mut reader).unwrap();
        }
        // ...and a sixth read hits end of file
        let extra: Result<serde_json::Value, _> = rmp_serde::decode::from_read(&mut reader);
        assert!(extra.is_err());
    }
}
