// ============================================================
// Layer 2 — PrepareUseCase
// ============================================================
// Orchestrates the full dataset preparation pipeline in order:
//
//   Step 1: Resolve requested domains     (Layer 3 - domain)
//   Step 2: Read + split per-domain TSVs  (Layer 4 - data)
//   Step 3: Write vocab.json              (Layer 6 - infra)
//   Step 4: Load pretrained tokenizer     (Layer 6 - infra)
//   Step 5: Encode each split             (Layer 4 - data)
//             train    → IR translator per example
//             val/test → predicted IR from the inference stage
//   Step 6: Serialize the encoded arrays  (Layer 6 - infra)
//
// Everything is sequential and synchronous — this is a
// one-shot batch job, each stage blocks until the previous
// one completes.
//
// Reference: Rust Book §13 (Iterators and Closures)

use std::path::Path;

use anyhow::Result;
use rand::{rngs::StdRng, SeedableRng};
use serde::{Deserialize, Serialize};

use crate::data::{encoder::SequenceEncoder, reader::read_examples, splitter::split_train_val};
use crate::domain::{
    example::Example,
    overnight::OvernightDomain,
    traits::{IrTranslator, PredictedIrSource},
    vocab::Vocab,
};
use crate::infra::{
    predictions::FilePredictions,
    serializer::SplitWriter,
    tokenizer_store::TokenizerStore,
    translator::WhitespaceNormalizer,
};

/// Fraction of each domain's training file allocated to the
/// training set; the remainder becomes validation.
const TRAIN_FRACTION: f64 = 0.8;

// ─── Preparation Configuration ───────────────────────────────────────────────
// All options for one preparation run, converted from the CLI
// arguments. Serialisable so a run's configuration can be
// inspected or reproduced later.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrepareConfig {
    /// Directory holding <domain>_train.tsv / <domain>_test.tsv
    pub data_dir: String,

    /// Directory holding the inference stage's <split>.ir files
    pub input_dir: String,

    /// Directory the encoded artifacts are written to
    pub output_dir: String,

    /// Pretrained tokenizer: a tokenizer.json file or a model
    /// directory containing one
    pub model_name_or_path: String,

    /// Checkpoint path of the IR prediction model — carried for
    /// configuration parity with the inference stage, not read here
    pub ckpt: String,

    /// A single domain name, or "all" for all eight
    pub domain: String,

    /// Batch size hint for the downstream training code —
    /// carried for configuration parity, not used here
    pub batch_size: usize,

    /// Seed for the train/validation shuffle
    pub seed: u64,
}

// ─── PrepareUseCase ──────────────────────────────────────────────────────────
// Owns the config and both external seams, runs the pipeline.
pub struct PrepareUseCase {
    config:      PrepareConfig,
    translator:  Box<dyn IrTranslator>,
    predictions: Box<dyn PredictedIrSource>,
}

impl PrepareUseCase {
    /// Create a PrepareUseCase with the default collaborators:
    /// the stand-in translator and file-backed predictions
    /// read from the configured input directory.
    pub fn new(config: PrepareConfig) -> Self {
        let predictions = FilePredictions::new(&config.input_dir);
        Self {
            config,
            translator:  Box::new(WhitespaceNormalizer),
            predictions: Box::new(predictions),
        }
    }

    /// Replace the IR translator — this is where the
    /// grammar-based translator plugs in.
    pub fn with_translator(mut self, translator: Box<dyn IrTranslator>) -> Self {
        self.translator = translator;
        self
    }

    /// Replace the predicted-IR source — e.g. an in-process
    /// inference stage instead of its file handoff.
    pub fn with_predictions(mut self, predictions: Box<dyn PredictedIrSource>) -> Self {
        self.predictions = predictions;
        self
    }

    /// Execute the full preparation pipeline end to end.
    pub fn execute(&self) -> Result<()> {
        let cfg = &self.config;

        tracing::debug!(
            "Run options: ckpt '{}', batch_size {} (recorded for the inference stage)",
            cfg.ckpt,
            cfg.batch_size
        );

        // ── Step 1: Resolve requested domains ─────────────────────────────────
        let domains = resolve_domains(&cfg.domain)?;
        tracing::info!("Preparing {} domain(s)", domains.len());

        // One explicitly seeded RNG per run, threaded through the
        // splitter — same seed, same split, every time
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        // ── Step 2: Read and split per-domain TSVs ────────────────────────────
        // Domains are processed independently and concatenated in
        // request order.
        tracing::info!("Loading queries from '{}'", cfg.data_dir);
        let data_dir = Path::new(&cfg.data_dir);

        let mut train_set: Vec<Example> = Vec::new();
        let mut val_set:   Vec<Example> = Vec::new();
        let mut test_set:  Vec<Example> = Vec::new();

        for domain in domains {
            let train_data = read_examples(&data_dir.join(domain.train_file()), domain)?;
            let (train, val) = split_train_val(train_data, TRAIN_FRACTION, &mut rng);
            tracing::info!(
                "Domain {}: {} train, {} validation",
                domain,
                train.len(),
                val.len()
            );
            train_set.extend(train);
            val_set.extend(val);
            test_set.extend(read_examples(&data_dir.join(domain.test_file()), domain)?);
        }

        // ── Step 3: Write vocab metadata ──────────────────────────────────────
        // The answer-token mapping is empty for Overnight, but the
        // downstream loader expects the file to exist.
        let writer = SplitWriter::new(&cfg.output_dir)?;
        writer.write_vocab(&Vocab::init())?;

        // ── Step 4: Load the pretrained tokenizer ─────────────────────────────
        let tokenizer = TokenizerStore::new(&cfg.model_name_or_path).load()?;
        let mut encoder = SequenceEncoder::new(tokenizer)?;

        // ── Step 5 + 6: Encode and serialize each split ───────────────────────
        // train goes through the translator; val/test consume the
        // inference stage's predicted IR.
        for (name, dataset) in [("train", &train_set), ("val", &val_set), ("test", &test_set)] {
            tracing::info!("Encoding split '{}' ({} examples)", name, dataset.len());

            let split = if name == "train" {
                encoder.encode(dataset, self.translator.as_ref())?
            } else {
                let irs = self.predictions.load(name)?;
                encoder.encode_predicted(&irs, dataset)?
            };

            writer.write_split(name, &split)?;
        }

        Ok(())
    }
}

/// Expand the CLI domain argument: "all" → all eight domains,
/// otherwise the single named domain.
fn resolve_domains(domain: &str) -> Result<Vec<OvernightDomain>> {
    if domain == "all" {
        Ok(OvernightDomain::ALL.to_vec())
    } else {
        Ok(vec![OvernightDomain::from_name(domain)?])
    }
}
