// ============================================================
// Layer 1 — CLI Arguments
// ============================================================
// Defines every configurable flag of the preparation run.
//
// clap's derive macros automatically generate:
//   - help text (--help)
//   - error messages for missing args
//   - type conversion (string → usize, u64, etc.)
//
// The flags keep their historical underscore spelling
// (--data_dir, not --data-dir) so existing pipeline scripts
// keep working unchanged.
//
// Reference: Rust Book §12 (Building a CLI Program)

use clap::Args;

use crate::application::prepare_use_case::PrepareConfig;

/// All arguments for a preparation run.
/// Each field becomes a --flag on the command line.
#[derive(Args, Debug)]
pub struct PrepareArgs {
    /// Directory containing <domain>_train.tsv and <domain>_test.tsv
    #[arg(long = "data_dir", required = true)]
    pub data_dir: String,

    /// Directory with the prior inference stage's outputs
    /// (val.ir / test.ir predicted-IR files)
    #[arg(long = "input_dir", required = true)]
    pub input_dir: String,

    /// Directory to write vocab.json and the encoded splits to
    #[arg(long = "output_dir", required = true)]
    pub output_dir: String,

    /// Pretrained tokenizer: a tokenizer.json file or a model
    /// directory containing one
    #[arg(long = "model_name_or_path", required = true)]
    pub model_name_or_path: String,

    /// Checkpoint path of the IR prediction model (recorded for
    /// the inference stage; not read by this tool)
    #[arg(long, required = true)]
    pub ckpt: String,

    /// One of the eight Overnight domains, or "all"
    #[arg(long, default_value = "all")]
    pub domain: String,

    /// Batch size hint carried for downstream config parity
    #[arg(long = "batch_size", default_value_t = 256)]
    pub batch_size: usize,

    /// Random seed for the train/validation shuffle
    #[arg(long, default_value_t = 666)]
    pub seed: u64,
}

/// Convert CLI PrepareArgs into the application-layer
/// PrepareConfig. This is the boundary between Layer 1 and
/// Layer 2 — the application layer never sees clap types.
impl From<PrepareArgs> for PrepareConfig {
    fn from(a: PrepareArgs) -> Self {
        PrepareConfig {
            data_dir:           a.data_dir,
            input_dir:          a.input_dir,
            output_dir:         a.output_dir,
            model_name_or_path: a.model_name_or_path,
            ckpt:               a.ckpt,
            domain:             a.domain,
            batch_size:         a.batch_size,
            seed:               a.seed,
        }
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Cli;
    use clap::Parser;

    #[test]
    fn test_parses_historical_flag_spelling() {
        let cli = Cli::parse_from([
            "overnight-ir-prep",
            "--data_dir", "data",
            "--input_dir", "in",
            "--output_dir", "out",
            "--model_name_or_path", "tokenizer.json",
            "--ckpt", "model.ckpt",
            "--domain", "basketball",
        ]);

        assert_eq!(cli.args.data_dir, "data");
        assert_eq!(cli.args.domain, "basketball");
        // Defaults
        assert_eq!(cli.args.batch_size, 256);
        assert_eq!(cli.args.seed, 666);
    }

    #[test]
    fn test_missing_required_arg_is_rejected() {
        let result = Cli::try_parse_from([
            "overnight-ir-prep",
            "--data_dir", "data",
        ]);
        assert!(result.is_err());
    }
}
