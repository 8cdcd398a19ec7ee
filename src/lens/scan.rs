//! Source discovery and per-file scanning.

use std::fs;
use std::path::{Component, Path, PathBuf};

use tracing::debug;
use walkdir::{DirEntry, WalkDir};

use super::annotation::Markers;
use super::descriptor::{TypeDescriptor, describe_file};
use crate::error::{GenerateError, ScanError};
use crate::header::GENERATED_BANNER;

/// Directories that hold crate roots rather than modules.
const CRATE_ROOT_DIRECTORIES: &[&str] = &["tests", "benches", "examples"];

/// Files whose `mod` declarations resolve next to themselves.
const MODULE_ROOT_FILES: &[&str] = &["mod.rs", "lib.rs", "main.rs"];

/// The result of scanning one source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ScannedFile {
    /// The source file.
    pub path: PathBuf,
    /// Where its accessors go.
    pub output: PathBuf,
    /// The annotated items, in file order.
    pub descriptors: Vec<TypeDescriptor>,
}

/// Finds every `.rs` file under `root`, skipping `target/`, hidden
/// directories and files named like generated outputs.
///
/// Test sources are included only when `include_test_files` is set.
///
/// # Errors
///
/// Returns [`GenerateError::ScanDirectory`] when `root` or one of its
/// subdirectories cannot be read.
pub fn discover(
    root: &Path,
    output_filename: &str,
    include_test_files: bool,
) -> Result<Vec<PathBuf>, GenerateError> {
    let generated = [
        output_filename.to_string(),
        test_output_filename(output_filename),
    ];
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|entry| entry.depth() == 0 || !is_ignored_directory(entry));
    for entry in walker {
        let entry = entry.map_err(|error| {
            let path = error.path().unwrap_or(root).to_path_buf();
            GenerateError::ScanDirectory {
                path,
                source: error.into(),
            }
        })?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if path.extension().is_none_or(|extension| extension != "rs") {
            continue;
        }
        let file_name = entry.file_name().to_string_lossy();
        if generated
            .iter()
            .any(|name| file_name == name.as_str() || file_name.ends_with(&format!("_{name}")))
        {
            debug!(path = %path.display(), "skipping generated file");
            continue;
        }
        if !include_test_files && is_test_source(root, path) {
            debug!(path = %path.display(), "skipping test source");
            continue;
        }
        files.push(path.to_path_buf());
    }
    Ok(files)
}

fn is_ignored_directory(entry: &DirEntry) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| name == "target" || name.starts_with('.'))
}

/// `gen_lens_test.rs` for `gen_lens.rs`.
pub fn test_output_filename(output_filename: &str) -> String {
    let path = Path::new(output_filename);
    let stem = path
        .file_stem()
        .map_or_else(|| output_filename.to_string(), |stem| stem.to_string_lossy().into_owned());
    match path.extension() {
        Some(extension) => format!("{stem}_test.{}", extension.to_string_lossy()),
        None => format!("{stem}_test"),
    }
}

/// `*_test.rs`, `*_tests.rs`, `tests.rs`, or anything under a `tests/`
/// directory below `root`.
pub fn is_test_source(root: &Path, path: &Path) -> bool {
    let stem = path
        .file_stem()
        .map(|stem| stem.to_string_lossy())
        .unwrap_or_default();
    if stem == "tests" || stem.ends_with("_test") || stem.ends_with("_tests") {
        return true;
    }
    relative_directories(root, path).iter().any(|name| name == "tests")
}

/// The directory names between `root` and `path`.
fn relative_directories(root: &Path, path: &Path) -> Vec<String> {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .parent()
        .map(|parent| {
            parent
                .components()
                .filter_map(|component| match component {
                    Component::Normal(name) => Some(name.to_string_lossy().into_owned()),
                    _ => None,
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Where the accessors for `source` are written.
///
/// Module roots (`mod.rs`, `lib.rs`, `main.rs`) declare their submodules
/// next to themselves; any other `name.rs` declares them in `name/`.
///
/// Files directly under `tests/`, `benches/`, `examples/` or `src/bin/` are
/// crate roots of their own, and Cargo turns every `.rs` file there into a
/// target. Their accessors always go to `<dir>/<stem>/<filename>`, which
/// Cargo does not pick up, and the crate root includes them with
///
/// ```text
/// #[path = "<stem>/gen_lens.rs"]
/// mod gen_lens;
/// ```
pub fn output_path(root: &Path, source: &Path, filename: &str, test_source: bool) -> PathBuf {
    let filename = if test_source {
        test_output_filename(filename)
    } else {
        filename.to_string()
    };
    let directory = source.parent().unwrap_or(root);
    let file_name = source
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stem = source
        .file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_default();

    if MODULE_ROOT_FILES.contains(&file_name.as_str()) && !is_crate_root(root, source) {
        return directory.join(filename);
    }
    directory.join(stem).join(filename)
}

/// Whether `source` sits directly in a directory whose `.rs` files Cargo
/// builds as separate targets.
fn is_crate_root(root: &Path, source: &Path) -> bool {
    let directories = relative_directories(root, source);
    match directories.as_slice() {
        [.., parent] if CRATE_ROOT_DIRECTORIES.contains(&parent.as_str()) => true,
        [.., src, bin] => src == "src" && bin == "bin",
        _ => false,
    }
}

/// Reads and parses one file and collects its annotated items.
///
/// Files that are themselves generated yield no descriptors.
///
/// # Errors
///
/// Returns [`ScanError`] when the file cannot be read or parsed.
pub fn scan_file(
    root: &Path,
    path: &Path,
    filename: &str,
    markers: &Markers,
) -> Result<ScannedFile, ScanError> {
    let source = fs::read_to_string(path).map_err(|source| ScanError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let test_source = is_test_source(root, path);
    let output = output_path(root, path, filename, test_source);

    if source.starts_with(GENERATED_BANNER) {
        return Ok(ScannedFile {
            path: path.to_path_buf(),
            output,
            descriptors: Vec::new(),
        });
    }

    let file = syn::parse_file(&source).map_err(|error| {
        let start = error.span().start();
        ScanError::Parse {
            path: path.to_path_buf(),
            line: start.line,
            column: start.column,
            message: error.to_string(),
        }
    })?;

    Ok(ScannedFile {
        path: path.to_path_buf(),
        output,
        descriptors: describe_file(&file, &source, markers),
    })
}
