//! Error types for generation runs.
//!
//! Two tiers, matching how failures are handled:
//!
//! - [`GenerateError`]: fatal. Directory resolution, file creation and write
//!   failures abort the whole run and are surfaced to the caller unchanged
//!   (the underlying error stays reachable through [`std::error::Error::source`]).
//! - [`ScanError`]: per-file and non-fatal. The lens scanner logs it, skips
//!   the file and keeps going.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// A fatal error that aborts a generation run.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// The output path could not be made absolute.
    #[error("failed to resolve output path `{path}`")]
    ResolvePath {
        /// The path as supplied by the caller.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The output path has no parent directory or no file name, or its
    /// stem is not a Rust module name.
    #[error("output path `{path}` does not name a module file")]
    InvalidOutputPath {
        /// The offending path.
        path: PathBuf,
    },

    /// An output directory could not be created.
    #[error("failed to create directory `{path}`")]
    CreateDirectory {
        /// The directory that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An output file could not be created.
    #[error("failed to create file `{path}`")]
    CreateFile {
        /// The file that could not be created.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Writing generated text to an output file failed.
    #[error("failed to write `{path}`")]
    Write {
        /// The file being written.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The source directory could not be walked.
    #[error("failed to scan directory `{path}`")]
    ScanDirectory {
        /// The directory being scanned.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The runtime crate path given for generated optics is not a Rust path.
    #[error("`{path}` is not a valid runtime crate path")]
    InvalidRuntimePath {
        /// The rejected path.
        path: String,
    },

    /// Generated lens tokens did not form a valid Rust file.
    #[error("generated accessors for `{path}` are not valid Rust: {message}")]
    Render {
        /// The source file the accessors were generated for.
        path: PathBuf,
        /// The parser message.
        message: String,
    },
}

/// A per-file error raised while scanning annotated sources.
#[derive(Debug, Error)]
pub enum ScanError {
    /// The file could not be read.
    #[error("failed to read `{path}`")]
    Read {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// The file is not valid Rust.
    #[error("failed to parse `{path}` at {line}:{column}: {message}")]
    Parse {
        /// The file that failed to parse.
        path: PathBuf,
        /// One-based line of the error, `0` when unknown.
        line: usize,
        /// Zero-based column of the error.
        column: usize,
        /// The parser message.
        message: String,
    },
}

impl ScanError {
    /// Returns the file this error is about.
    pub fn path(&self) -> &PathBuf {
        match self {
            Self::Read { path, .. } | Self::Parse { path, .. } => path,
        }
    }
}

static_assertions::assert_impl_all!(GenerateError: Send, Sync);
static_assertions::assert_impl_all!(ScanError: Send, Sync);
