// ============================================================
// Layer 1 — CLI / Presentation Layer
// ============================================================
// This is the entry point for all user interaction.
// It uses the `clap` crate to parse command line arguments.
// All business logic is delegated to Layer 2 (application).
//
// The tool does exactly one thing — prepare the encoded
// Overnight dataset — so there are no subcommands, just the
// preparation flags.
//
// Reference: Rust Book §12 (CLI programs)

// Declare the arguments submodule
pub mod commands;

use anyhow::Result;
use clap::Parser;
use commands::PrepareArgs;

/// The main CLI struct — clap reads the fields and generates
/// argument parsing code automatically via the Parser derive macro.
#[derive(Parser, Debug)]
#[command(
    name = "overnight-ir-prep",
    version = "0.1.0",
    about = "Prepare the Overnight dataset: translate logical forms to IR, \
             tokenize, and serialize encoded splits."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: PrepareArgs,
}

impl Cli {
    /// Convert CLI args into a PrepareConfig and hand off to
    /// Layer 2. This keeps the CLI layer thin — it only routes,
    /// never computes.
    pub fn run(self) -> Result<()> {
        use crate::application::prepare_use_case::PrepareUseCase;

        tracing::info!("Starting dataset preparation from: {}", self.args.data_dir);

        let use_case = PrepareUseCase::new(self.args.into());
        use_case.execute()?;

        println!("Preparation complete. Encoded splits written.");
        Ok(())
    }
}
