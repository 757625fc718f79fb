// ============================================================
// Layer 6 — Tokenizer Store
// ============================================================
// Loads the pretrained tokenizer used for sequence encoding.
//
// --model_name_or_path may point either directly at a
// tokenizer.json file or at a model directory containing one
// (the layout produced by a HuggingFace `save_pretrained`).
// Both spellings resolve to the same file.
//
// Nothing is ever trained or written here — the vocabulary is
// fixed by the pretrained model, and the downstream training
// code must see exactly the same token ids this step produced.
//
// Reference: tokenizers crate documentation

use std::path::PathBuf;

use anyhow::{ensure, Result};
use tokenizers::Tokenizer;

pub struct TokenizerStore {
    path: PathBuf,
}

impl TokenizerStore {
    pub fn new(model_name_or_path: impl Into<PathBuf>) -> Self {
        Self { path: model_name_or_path.into() }
    }

    /// Load the pretrained tokenizer from disk.
    pub fn load(&self) -> Result<Tokenizer> {
        let file = if self.path.is_dir() {
            self.path.join("tokenizer.json")
        } else {
            self.path.clone()
        };

        ensure!(
            file.exists(),
            "no tokenizer found at '{}' — expected a tokenizer.json file or a \
             model directory containing one",
            self.path.display()
        );

        tracing::info!("Loading pretrained tokenizer from '{}'", file.display());

        Tokenizer::from_file(&file).map_err(|e| {
            anyhow::anyhow!("Cannot load tokenizer from '{}': {}", file.display(), e)
        })
    }
}

// ─── Test tokenizer fixture ───────────────────────────────────────────────────
// A minimal whitespace word-level tokenizer, built as raw
// tokenizer JSON the same way a saved pretrained file looks.
// [PAD] is id 0 so the default padding configuration applies.
// Shared by the encoder and use-case tests.
#[cfg(test)]
pub(crate) fn tiny_tokenizer_json(words: &[&str]) -> serde_json::Value {
    let mut vocab = serde_json::json!({
        "[PAD]": 0,
        "[UNK]": 1,
    });

    let mut next_id = 2usize;
    for &word in words {
        if vocab.get(word).is_none() {
            vocab[word] = serde_json::json!(next_id);
            next_id += 1;
        }
    }

    serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": 0, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": 1, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": {
            "type": "Whitespace"
        },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    })
}

// Variant mirroring how pretrained tokenizers actually ship:
// the pad token sits at a non-zero id, and no padding section
// is configured (the encoder must resolve the pad id itself).
#[cfg(test)]
pub(crate) fn tiny_tokenizer_json_late_pad(words: &[&str]) -> serde_json::Value {
    let mut vocab = serde_json::json!({});

    let mut next_id = 0usize;
    for &word in words {
        if vocab.get(word).is_none() {
            vocab[word] = serde_json::json!(next_id);
            next_id += 1;
        }
    }

    let unk_id = next_id;
    let pad_id = next_id + 1;
    vocab["[UNK]"] = serde_json::json!(unk_id);
    vocab["[PAD]"] = serde_json::json!(pad_id);

    serde_json::json!({
        "version": "1.0",
        "truncation": null,
        "padding": null,
        "added_tokens": [
            {"id": unk_id, "content": "[UNK]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true},
            {"id": pad_id, "content": "[PAD]", "single_word": false, "lstrip": false, "rstrip": false, "normalized": false, "special": true}
        ],
        "normalizer": null,
        "pre_tokenizer": {
            "type": "Whitespace"
        },
        "post_processor": null,
        "decoder": null,
        "model": {
            "type": "WordLevel",
            "vocab": vocab,
            "unk_token": "[UNK]"
        }
    })
}

#[cfg(test)]
pub(crate) fn load_tokenizer_json(json: &serde_json::Value) -> Tokenizer {
    use std::io::Write;

    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(serde_json::to_string(json).unwrap().as_bytes())
        .unwrap();
    Tokenizer::from_file(file.path()).unwrap()
}

#[cfg(test)]
pub(crate) fn tiny_tokenizer(words: &[&str]) -> Tokenizer {
    load_tokenizer_json(&tiny_tokenizer_json(words))
}

#[cfg(test)]
pub(crate) fn tiny_tokenizer_late_pad(words: &[&str]) -> Tokenizer {
    load_tokenizer_json(&tiny_tokenizer_json_late_pad(words))
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file_path() {
        let json = tiny_tokenizer_json(&["answer", "call"]);
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .unwrap();
        file.write_all(serde_json::to_string(&json).unwrap().as_bytes())
            .unwrap();

        let store = TokenizerStore::new(file.path());
        assert!(store.load().is_ok());
    }

    #[test]
    fn test_load_from_model_directory() {
        let dir = tempfile::tempdir().unwrap();
        let json = tiny_tokenizer_json(&["answer"]);
        std::fs::write(
            dir.path().join("tokenizer.json"),
            serde_json::to_string(&json).unwrap(),
        )
        .unwrap();

        let store = TokenizerStore::new(dir.path());
        assert!(store.load().is_ok());
    }

    #[test]
    fn test_missing_tokenizer_is_an_error() {
        let store = TokenizerStore::new("/nonexistent/model");
        assert!(store.load().is_err());
    }
}
