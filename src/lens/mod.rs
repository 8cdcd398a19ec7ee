//! Lens and prism accessors for annotated structs and enums.
//!
//! Mark a struct with a `fpgen:lens` comment (or an enum with
//! `fpgen:prism`) and the scanner emits, next to the source, a module with
//! ready-made optics for it:
//!
//! ```text
//! // fpgen:lens
//! #[derive(Clone)]
//! pub struct Person {
//!     pub name: String,
//!     pub age: u32,
//!     pub phone: Option<String>,
//! }
//! ```
//!
//! yields `PersonLenses` (`name`, `age`, `phone` plus the optionals `name_o`,
//! `age_o` and `phone_o`), `PersonRefLenses` over `Rc<Person>`, and the
//! constructors `make_person_lenses` and `make_person_ref_lenses`.
//!
//! Scanning is best effort: a file that cannot be read or parsed is logged
//! and skipped, and the remaining files are still processed.

mod annotation;
mod descriptor;
mod emit;
mod scan;

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info, warn};

use crate::error::{GenerateError, ScanError};
use crate::header::write_banner;

pub use annotation::Markers;
pub use descriptor::{
    EnumDescriptor, FieldDescriptor, Optionality, StructDescriptor, TypeDescriptor,
    VariantDescriptor, describe_file, is_comparable,
};
pub use emit::LensTemplates;
pub use scan::{ScannedFile, discover, is_test_source, output_path, scan_file, test_output_filename};

/// Settings for one lens run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LensConfig {
    /// Directory to scan recursively.
    pub dir: PathBuf,
    /// File name of each generated module.
    pub filename: String,
    /// Whether test sources are scanned too.
    pub include_test_files: bool,
    /// Marker comments.
    pub markers: Markers,
    /// Timestamp written into the header.
    pub generated_at: DateTime<Utc>,
}

impl LensConfig {
    /// Default output file name.
    pub const DEFAULT_FILENAME: &'static str = "gen_lens.rs";

    /// Creates a configuration for `dir` stamped with the current time.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            filename: Self::DEFAULT_FILENAME.to_string(),
            include_test_files: false,
            markers: Markers::default(),
            generated_at: Utc::now(),
        }
    }

    /// Replaces the output file name.
    #[must_use]
    pub fn with_filename(mut self, filename: impl Into<String>) -> Self {
        self.filename = filename.into();
        self
    }

    /// Includes or excludes test sources.
    #[must_use]
    pub fn with_test_files(mut self, include_test_files: bool) -> Self {
        self.include_test_files = include_test_files;
        self
    }

    /// Replaces the header timestamp.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

impl Default for LensConfig {
    fn default() -> Self {
        Self::new(".")
    }
}

/// The outcome of a lens run.
#[derive(Debug, Default)]
pub struct LensReport {
    /// Number of source files scanned.
    pub scanned: usize,
    /// Files skipped because they could not be read or parsed.
    pub failures: Vec<ScanError>,
    /// Generated files, in discovery order.
    pub outputs: Vec<PathBuf>,
}

/// Scans `config.dir` and writes accessors for every file with annotated
/// items.
///
/// Per-file read and parse errors are logged, collected in
/// [`LensReport::failures`] and otherwise ignored. A file without annotated
/// items produces no output.
///
/// # Errors
///
/// Returns a [`GenerateError`] when the directory cannot be walked, the
/// accessors cannot be rendered, or an output cannot be written.
pub fn generate_lenses(
    config: &LensConfig,
    templates: &LensTemplates,
) -> Result<LensReport, GenerateError> {
    let root = std::path::absolute(&config.dir).map_err(|source| GenerateError::ResolvePath {
        path: config.dir.clone(),
        source,
    })?;
    let sources = discover(&root, &config.filename, config.include_test_files)?;
    let scanned = sources.len();

    let (successes, failures): (Vec<_>, Vec<_>) = sources
        .iter()
        .map(|path| scan_file(&root, path, &config.filename, &config.markers))
        .partition(Result::is_ok);
    let successes: Vec<ScannedFile> = successes.into_iter().filter_map(Result::ok).collect();
    let failures: Vec<ScanError> = failures.into_iter().filter_map(Result::err).collect();

    for failure in &failures {
        warn!(path = %failure.path().display(), error = %failure, "skipping file");
    }

    let mut outputs = Vec::new();
    for scanned_file in successes {
        if scanned_file.descriptors.is_empty() {
            continue;
        }
        write_accessors(config, templates, &scanned_file)?;
        outputs.push(scanned_file.output);
    }

    info!(
        dir = %root.display(),
        scanned,
        failures = failures.len(),
        outputs = outputs.len(),
        "generated lenses"
    );
    Ok(LensReport {
        scanned,
        failures,
        outputs,
    })
}

fn write_accessors(
    config: &LensConfig,
    templates: &LensTemplates,
    scanned: &ScannedFile,
) -> Result<(), GenerateError> {
    let body = templates
        .render(&scanned.descriptors)
        .map_err(|error| GenerateError::Render {
            path: scanned.path.clone(),
            message: error.to_string(),
        })?;

    let output = &scanned.output;
    if let Some(directory) = output.parent() {
        fs::create_dir_all(directory).map_err(|source| GenerateError::CreateDirectory {
            path: directory.to_path_buf(),
            source,
        })?;
    }
    let file = File::create(output).map_err(|source| GenerateError::CreateFile {
        path: output.clone(),
        source,
    })?;
    let write_error = |source| GenerateError::Write {
        path: output.clone(),
        source,
    };

    let mut writer = BufWriter::new(file);
    write_banner(
        &mut writer,
        config.generated_at,
        &format!("lens: {}", source_name(&config.dir, &scanned.path)),
    )
    .map_err(write_error)?;
    writeln!(writer).map_err(write_error)?;
    writer.write_all(body.as_bytes()).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    for descriptor in &scanned.descriptors {
        debug!(item = %descriptor.name(), path = %output.display(), "wrote accessors");
    }
    Ok(())
}

/// The source path relative to the scanned directory, with `/` separators,
/// so headers do not depend on where the run happened.
fn source_name(dir: &Path, source: &Path) -> String {
    let relative = std::path::absolute(dir)
        .ok()
        .and_then(|dir| source.strip_prefix(dir).ok().map(Path::to_path_buf))
        .unwrap_or_else(|| source.to_path_buf());
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
