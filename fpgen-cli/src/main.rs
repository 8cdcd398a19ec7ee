//! fpgen - generates arity families and lens accessors
//!
//! Usage:
//!   fpgen tuple --count 8 --filename src/tuple/gen.rs
//!   fpgen apply --kind result --filename src/apply/gen.rs
//!   fpgen lens --dir src
//!   fpgen batch --manifest fpgen.yaml

mod arity;
mod lens;
mod manifest;

use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "FPGEN_LOG";

#[derive(Parser, Debug)]
#[command(name = "fpgen", version)]
#[command(about = "Generates arity-specialized functional boilerplate and lens accessors")]
struct Cli {
    /// Log at debug level unless FPGEN_LOG says otherwise
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Generate Tuple1..TupleN with their helpers
    Tuple(arity::ArityArgs),
    /// Generate pipe, flow, curry and friends
    Pipe(arity::ArityArgs),
    /// Generate Option or Result sequencing helpers
    Apply(arity::ApplyArgs),
    /// Generate partial-application helpers
    Bind(arity::ArityArgs),
    /// Generate dependency-injection providers
    Di(arity::ArityArgs),
    /// Generate reader helpers and their generic variants
    #[command(name = "readerioeither")]
    ReaderIoEither(arity::ArityArgs),
    /// Generate lens and prism accessors for annotated items
    Lens(lens::LensArgs),
    /// Run every job of a YAML manifest
    Batch(manifest::BatchArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Tuple(args) => arity::run(fpgen::FamilyKind::Tuple, &args),
        Commands::Pipe(args) => arity::run(fpgen::FamilyKind::Pipe, &args),
        Commands::Apply(args) => arity::run_apply(&args),
        Commands::Bind(args) => arity::run(fpgen::FamilyKind::Bind, &args),
        Commands::Di(args) => arity::run(fpgen::FamilyKind::Di, &args),
        Commands::ReaderIoEither(args) => arity::run(fpgen::FamilyKind::ReaderIoEither, &args),
        Commands::Lens(args) => lens::run(&args),
        Commands::Batch(args) => manifest::run(&args),
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
