//! File-assembly driver for the arity families.
//!
//! One run generates one family: it resolves the output path, creates the
//! primary file (and the secondary `generic/` file for families that have a
//! generic variant), writes the standard header, and then asks the family to
//! emit each arity in ascending order.
//!
//! Failures are not transactional. A write error aborts the run and leaves
//! whatever was already written on disk; re-running the command is the only
//! recovery path.

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::ops::RangeInclusive;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::GenerateError;
use crate::header::write_banner;

/// Name of the subdirectory that receives generic variants.
pub const GENERIC_DIRECTORY: &str = "generic";

/// Lints that generated arity code trips by construction.
const GENERATED_ALLOWS: &str = "#![allow(\n    unexpected_cfgs,\n    unused_imports,\n    clippy::many_single_char_names,\n    clippy::too_many_arguments,\n    clippy::type_complexity\n)]";

/// Settings for one generation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    /// Highest arity to generate.
    pub count: usize,
    /// Path of the primary output file.
    pub filename: PathBuf,
    /// Timestamp written into the header.
    pub generated_at: DateTime<Utc>,
}

impl GeneratorConfig {
    /// Default highest arity.
    pub const DEFAULT_COUNT: usize = 20;

    /// Default output file name.
    pub const DEFAULT_FILENAME: &'static str = "gen.rs";

    /// Creates a configuration stamped with the current time.
    pub fn new(count: usize, filename: impl Into<PathBuf>) -> Self {
        Self {
            count,
            filename: filename.into(),
            generated_at: Utc::now(),
        }
    }

    /// Replaces the header timestamp.
    #[must_use]
    pub fn with_generated_at(mut self, generated_at: DateTime<Utc>) -> Self {
        self.generated_at = generated_at;
        self
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COUNT, Self::DEFAULT_FILENAME)
    }
}

/// What the emitters need to know about where their output lands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitContext {
    /// Module name of the output file (its file stem).
    pub module: String,
}

impl EmitContext {
    /// Derives the context from the primary output path, or `None` when
    /// its stem cannot name a module.
    pub fn for_path(path: &Path) -> Option<Self> {
        let module = path.file_stem()?.to_str()?;
        is_module_name(module).then(|| Self {
            module: module.to_string(),
        })
    }

    /// The module name as an identifier, raw when it collides with a keyword
    /// (the default `gen.rs` is `r#gen` in edition 2024).
    pub fn module_ident(&self) -> String {
        if RESERVED_WORDS.contains(&self.module.as_str()) {
            format!("r#{}", self.module)
        } else {
            self.module.clone()
        }
    }
}

/// Whether `name` can be declared as `mod name;` and loaded from
/// `name.rs`. Path keywords have no raw form and non-ASCII module names
/// cannot be loaded from a file.
fn is_module_name(name: &str) -> bool {
    let mut characters = name.chars();
    let starts_well = characters
        .next()
        .is_some_and(|first| first.is_ascii_alphabetic() || first == '_');
    starts_well
        && name != "_"
        && characters.all(|character| character.is_ascii_alphanumeric() || character == '_')
        && !PATH_KEYWORDS.contains(&name)
}

/// Keywords that cannot be module names even in raw form.
const PATH_KEYWORDS: &[&str] = &["self", "super", "crate", "Self"];

/// Keywords that can be used as module names only in raw form.
const RESERVED_WORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if", "impl", "in",
    "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref",
    "return", "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized",
    "use", "virtual", "where", "while", "yield",
];

/// One family of arity-specialized definitions.
///
/// Implementations format text only; the driver owns files and ordering.
pub trait Family {
    /// Family name as used on the command line.
    fn name(&self) -> &'static str;

    /// The arities to emit for a configured maximum of `count`.
    fn arities(&self, count: usize) -> RangeInclusive<usize>;

    /// `use` declarations for the header.
    fn imports(&self, context: &EmitContext) -> Vec<String>;

    /// Writes the arity-independent items that follow the header.
    fn write_preamble(&self, _out: &mut dyn Write, _context: &EmitContext) -> io::Result<()> {
        Ok(())
    }

    /// Writes every definition for one arity.
    fn write_arity(&self, out: &mut dyn Write, arity: usize) -> io::Result<()>;

    /// The lower-level generic variant written to `generic/<file name>`.
    fn generic_variant(&self) -> Option<Box<dyn Family>> {
        None
    }
}

/// The outcome of a successful run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationReport {
    /// Family name.
    pub family: &'static str,
    /// Arities emitted.
    pub arities: RangeInclusive<usize>,
    /// Files written, primary first.
    pub files: Vec<PathBuf>,
}

/// Runs `family` for `config`, writing the primary file and, if the family
/// has one, its generic variant.
///
/// # Errors
///
/// Returns a [`GenerateError`] when the output path cannot be resolved, a
/// directory or file cannot be created, or a write fails. Files written
/// before the failure are left in place.
pub fn generate(
    family: &dyn Family,
    config: &GeneratorConfig,
) -> Result<GenerationReport, GenerateError> {
    let primary = std::path::absolute(&config.filename).map_err(|source| {
        GenerateError::ResolvePath {
            path: config.filename.clone(),
            source,
        }
    })?;
    let (directory, file_name) = match (primary.parent(), primary.file_name()) {
        (Some(directory), Some(file_name)) => (directory.to_path_buf(), file_name.to_owned()),
        _ => return Err(GenerateError::InvalidOutputPath { path: primary }),
    };
    let context = EmitContext::for_path(&primary).ok_or_else(|| {
        GenerateError::InvalidOutputPath {
            path: primary.clone(),
        }
    })?;

    create_directory(&directory)?;
    write_file(family, config, &context, &primary)?;
    let mut files = vec![primary];

    if let Some(generic) = family.generic_variant() {
        let generic_directory = directory.join(GENERIC_DIRECTORY);
        create_directory(&generic_directory)?;
        let secondary = generic_directory.join(file_name);
        write_file(generic.as_ref(), config, &context, &secondary)?;
        files.push(secondary);
    }

    info!(
        family = family.name(),
        count = config.count,
        files = files.len(),
        "generated family"
    );

    Ok(GenerationReport {
        family: family.name(),
        arities: family.arities(config.count),
        files,
    })
}

/// Renders the primary file of `family` into a string without touching the
/// filesystem.
///
/// # Errors
///
/// Fails with [`io::ErrorKind::InvalidInput`] when the file stem of
/// `config.filename` is not a module name. Emitters writing to the
/// in-memory buffer never fail.
pub fn render(family: &dyn Family, config: &GeneratorConfig) -> io::Result<String> {
    let context = EmitContext::for_path(&config.filename).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("`{}` does not name a module", config.filename.display()),
        )
    })?;
    let mut buffer = Vec::new();
    emit(family, config, &context, &mut buffer)?;
    String::from_utf8(buffer).map_err(|error| io::Error::new(io::ErrorKind::InvalidData, error))
}

/// Writes the header, the preamble and every arity of `family` to `out`.
///
/// # Errors
///
/// Propagates the first write error unchanged.
pub fn emit(
    family: &dyn Family,
    config: &GeneratorConfig,
    context: &EmitContext,
    out: &mut dyn Write,
) -> io::Result<()> {
    write_banner(
        out,
        config.generated_at,
        &format!("family: {}, count: {}", family.name(), config.count),
    )?;
    writeln!(out)?;
    writeln!(out, "{GENERATED_ALLOWS}")?;

    let imports = family.imports(context);
    if !imports.is_empty() {
        writeln!(out)?;
        for import in imports {
            writeln!(out, "use {import};")?;
        }
    }
    writeln!(out)?;

    family.write_preamble(out, context)?;
    for arity in family.arities(config.count) {
        debug!(family = family.name(), arity, "emitting arity");
        family.write_arity(out, arity)?;
    }
    Ok(())
}

fn create_directory(directory: &Path) -> Result<(), GenerateError> {
    fs::create_dir_all(directory).map_err(|source| GenerateError::CreateDirectory {
        path: directory.to_path_buf(),
        source,
    })
}

fn write_file(
    family: &dyn Family,
    config: &GeneratorConfig,
    context: &EmitContext,
    path: &Path,
) -> Result<(), GenerateError> {
    let write_error = |source| GenerateError::Write {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(|source| GenerateError::CreateFile {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = BufWriter::new(file);
    emit(family, config, context, &mut writer).map_err(write_error)?;
    writer.flush().map_err(write_error)?;

    debug!(path = %path.display(), "wrote generated file");
    Ok(())
}
