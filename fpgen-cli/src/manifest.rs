//! Batch runs driven by a YAML manifest.
//!
//! ```yaml
//! defaults:
//!   count: 8
//! jobs:
//!   - family: tuple
//!     filename: src/tuple/gen.rs
//!   - family: apply
//!     kind: result
//!     filename: src/apply/gen.rs
//!   - family: lens
//!     dir: src
//! ```
//!
//! Relative paths are resolved against the manifest's directory. Jobs run in
//! order and the first failure stops the batch.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;
use fpgen::{ApplyKind, FamilyKind, GeneratorConfig, LensConfig, LensTemplates};
use serde::Deserialize;

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Manifest YAML file path (required)
    #[arg(long, short = 'm')]
    pub manifest: PathBuf,
}

/// Manifest file contents.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct Manifest {
    #[serde(default)]
    defaults: Defaults,
    jobs: Vec<Job>,
}

#[derive(Debug, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct Defaults {
    count: usize,
    runtime: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            count: GeneratorConfig::DEFAULT_COUNT,
            runtime: LensTemplates::DEFAULT_RUNTIME.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "family", rename_all = "lowercase")]
enum Job {
    Tuple(ArityJob),
    Pipe(ArityJob),
    Apply(ApplyJob),
    Bind(ArityJob),
    Di(ArityJob),
    #[serde(rename = "readerioeither")]
    ReaderIoEither(ArityJob),
    Lens(LensJob),
}

#[derive(Debug, Deserialize)]
struct ArityJob {
    count: Option<usize>,
    filename: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
struct ApplyJob {
    kind: Option<String>,
    #[serde(flatten)]
    arity: ArityJob,
}

#[derive(Debug, Deserialize)]
struct LensJob {
    dir: Option<PathBuf>,
    filename: Option<String>,
    #[serde(default)]
    include_test_files: bool,
    runtime: Option<String>,
}

impl Job {
    fn describe(&self) -> String {
        match self {
            Self::Tuple(_) => "tuple".to_string(),
            Self::Pipe(_) => "pipe".to_string(),
            Self::Apply(job) => format!("apply ({})", job.kind.as_deref().unwrap_or("option")),
            Self::Bind(_) => "bind".to_string(),
            Self::Di(_) => "di".to_string(),
            Self::ReaderIoEither(_) => "readerioeither".to_string(),
            Self::Lens(_) => "lens".to_string(),
        }
    }
}

/// Loads the manifest and runs its jobs in order.
pub fn run(args: &BatchArgs) -> Result<()> {
    let text = fs::read_to_string(&args.manifest)
        .with_context(|| format!("failed to read manifest `{}`", args.manifest.display()))?;
    let manifest = parse(&text)
        .with_context(|| format!("invalid manifest `{}`", args.manifest.display()))?;
    let base = args.manifest.parent().unwrap_or_else(|| Path::new("."));

    tracing::info!(jobs = manifest.jobs.len(), "running manifest");
    for (index, job) in manifest.jobs.iter().enumerate() {
        run_job(job, &manifest.defaults, base)
            .with_context(|| format!("job {} ({}) failed", index + 1, job.describe()))?;
    }
    Ok(())
}

fn parse(text: &str) -> Result<Manifest> {
    Ok(serde_yaml::from_str(text)?)
}

fn run_job(job: &Job, defaults: &Defaults, base: &Path) -> Result<()> {
    match job {
        Job::Tuple(job) => run_arity(FamilyKind::Tuple, job, defaults, base),
        Job::Pipe(job) => run_arity(FamilyKind::Pipe, job, defaults, base),
        Job::Apply(job) => {
            let kind: ApplyKind = job.kind.as_deref().unwrap_or("option").parse()?;
            run_arity(FamilyKind::Apply(kind), &job.arity, defaults, base)
        }
        Job::Bind(job) => run_arity(FamilyKind::Bind, job, defaults, base),
        Job::Di(job) => run_arity(FamilyKind::Di, job, defaults, base),
        Job::ReaderIoEither(job) => run_arity(FamilyKind::ReaderIoEither, job, defaults, base),
        Job::Lens(job) => {
            let dir = job.dir.as_deref().unwrap_or_else(|| Path::new("."));
            let config = LensConfig::new(resolve(base, dir))
                .with_filename(
                    job.filename
                        .clone()
                        .unwrap_or_else(|| LensConfig::DEFAULT_FILENAME.to_string()),
                )
                .with_test_files(job.include_test_files);
            let runtime = job.runtime.as_deref().unwrap_or(&defaults.runtime);
            crate::lens::generate(&config, runtime)
        }
    }
}

fn run_arity(kind: FamilyKind, job: &ArityJob, defaults: &Defaults, base: &Path) -> Result<()> {
    let filename = job
        .filename
        .as_deref()
        .unwrap_or_else(|| Path::new(GeneratorConfig::DEFAULT_FILENAME));
    crate::arity::generate(kind, job.count.unwrap_or(defaults.count), resolve(base, filename))
}

fn resolve(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}
