//! The banner at the top of every generated file.

use std::io::{self, Write};

use chrono::{DateTime, SecondsFormat, Utc};

/// First line of every generated file.
pub const GENERATED_BANNER: &str = "// Code generated by fpgen. DO NOT EDIT.";

/// Writes the "do not edit" marker, the timestamp on a line of its own and a
/// one-line description of the run.
///
/// Only the timestamp line differs between two runs with the same inputs.
///
/// # Errors
///
/// Propagates write errors.
pub fn write_banner(
    out: &mut dyn Write,
    generated_at: DateTime<Utc>,
    description: &str,
) -> io::Result<()> {
    writeln!(out, "{GENERATED_BANNER}")?;
    writeln!(out, "// This file was generated by robots at")?;
    writeln!(
        out,
        "// {}",
        generated_at.to_rfc3339_opts(SecondsFormat::Secs, true)
    )?;
    writeln!(out, "// {description}")
}
