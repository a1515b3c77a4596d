use std::io::{self, Write};

use camino::Utf8Path;
use serde::Serialize;

use crate::app::RunSummary;
use crate::error::SheetError;
use crate::manifest::Manifest;

/// Writes the manifest as CSV with a `sample,fastq_1` header, replacing any
/// existing file at `path`.
pub fn write_manifest(manifest: &Manifest, path: &Utf8Path) -> Result<(), SheetError> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|err| SheetError::ManifestWrite(format!("{path}: {err}")))?;
    for row in manifest.rows() {
        writer
            .serialize(row)
            .map_err(|err| SheetError::ManifestWrite(err.to_string()))?;
    }
    writer
        .flush()
        .map_err(|err| SheetError::ManifestWrite(err.to_string()))?;
    Ok(())
}

#[derive(Debug, Clone, Copy)]
pub enum OutputMode {
    Text,
    Json,
}

pub struct TextOutput;

impl TextOutput {
    pub fn print_summary(summary: &RunSummary) -> io::Result<()> {
        Self::write_summary(summary, &mut io::stdout(), &mut io::stderr())
    }

    /// Writes the report to `out` and the unmapped warning block to `warn`.
    pub fn write_summary<O: Write, E: Write>(
        summary: &RunSummary,
        out: &mut O,
        warn: &mut E,
    ) -> io::Result<()> {
        if !summary.unmapped.is_empty() {
            writeln!(
                warn,
                "WARNING: Some samples were not found in the mapping (left unmapped):"
            )?;
            for sample in &summary.unmapped {
                writeln!(warn, "  - {sample}")?;
            }
        }
        if summary.written {
            writeln!(out, "Saved: {}", summary.output_path)?;
        } else {
            writeln!(out, "Dry run, not written: {}", summary.output_path)?;
        }
        writeln!(out, "Rows: {}", summary.rows)?;
        Ok(())
    }
}

pub struct JsonOutput;

impl JsonOutput {
    pub fn print_summary(summary: &RunSummary) -> io::Result<()> {
        Self::write_summary(summary, &mut io::stdout())
    }

    pub fn write_summary<W: Write>(summary: &RunSummary, out: &mut W) -> io::Result<()> {
        Self::write_json(summary, out)
    }

    fn write_json<T: Serialize, W: Write>(value: &T, out: &mut W) -> io::Result<()> {
        let json = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        out.write_all(json.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(())
    }
}
