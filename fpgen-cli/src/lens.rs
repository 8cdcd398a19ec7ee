//! The lens subcommand.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fpgen::{LensConfig, LensTemplates};

/// Arguments for the lens subcommand.
#[derive(Args, Debug)]
pub struct LensArgs {
    /// Directory to scan recursively
    #[arg(long, short = 'd', default_value = ".")]
    pub dir: PathBuf,

    /// File name of each generated module
    #[arg(long, short = 'f', default_value = LensConfig::DEFAULT_FILENAME)]
    pub filename: String,

    /// Also scan test sources
    #[arg(long)]
    pub include_test_files: bool,

    /// Crate path that provides the optics module
    #[arg(long, default_value = LensTemplates::DEFAULT_RUNTIME)]
    pub runtime: String,
}

/// Scans `args.dir` with the given runtime path.
pub fn run(args: &LensArgs) -> Result<()> {
    let config = LensConfig::new(&args.dir)
        .with_filename(args.filename.clone())
        .with_test_files(args.include_test_files);
    generate(&config, &args.runtime)
}

/// Shared by the subcommand and manifest jobs.
pub fn generate(config: &LensConfig, runtime: &str) -> Result<()> {
    let templates = LensTemplates::new(runtime)?;
    let report = fpgen::generate_lenses(config, &templates)
        .with_context(|| format!("failed to generate lenses under `{}`", config.dir.display()))?;

    if !report.failures.is_empty() {
        tracing::warn!(
            skipped = report.failures.len(),
            scanned = report.scanned,
            "some files could not be scanned"
        );
    }
    Ok(())
}
