//! Arity family subcommands.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use fpgen::{ApplyKind, FamilyKind, GeneratorConfig};

/// Arguments shared by every arity family.
#[derive(Args, Debug)]
pub struct ArityArgs {
    /// Highest arity to generate
    #[arg(long, short = 'c', default_value_t = GeneratorConfig::DEFAULT_COUNT)]
    pub count: usize,

    /// Output file; the module name is taken from its stem
    #[arg(long, short = 'f', default_value = GeneratorConfig::DEFAULT_FILENAME)]
    pub filename: PathBuf,
}

/// Arguments for the apply subcommand.
#[derive(Args, Debug)]
pub struct ApplyArgs {
    #[command(flatten)]
    pub arity: ArityArgs,

    /// Carrier to sequence (option|result)
    #[arg(long, short = 'k', default_value_t = ApplyKind::Option)]
    pub kind: ApplyKind,
}

/// Generates one family as configured by `args`.
pub fn run(kind: FamilyKind, args: &ArityArgs) -> Result<()> {
    generate(kind, args.count, args.filename.clone())
}

/// Generates the apply family for the requested carrier.
pub fn run_apply(args: &ApplyArgs) -> Result<()> {
    run(FamilyKind::Apply(args.kind), &args.arity)
}

/// Shared by the subcommands and manifest jobs.
pub fn generate(kind: FamilyKind, count: usize, filename: PathBuf) -> Result<()> {
    let config = GeneratorConfig::new(count, filename);
    let family = kind.family();
    let report = fpgen::generate(family.as_ref(), &config)
        .with_context(|| format!("failed to generate the {kind} family"))?;

    for file in &report.files {
        tracing::info!(family = report.family, path = %file.display(), "wrote");
    }
    Ok(())
}
