use std::collections::BTreeSet;

use camino::Utf8Path;
use serde::Serialize;

use crate::error::SheetError;
use crate::mapping::NameMapping;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ManifestRow {
    pub sample: String,
    pub fastq_1: String,
}

/// Rows in input order, one per discovered file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Manifest {
    rows: Vec<ManifestRow>,
}

impl Manifest {
    pub fn rows(&self) -> &[ManifestRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct ManifestOutcome {
    pub manifest: Manifest,
    /// Raw keys with no standardized name; their rows keep the raw key.
    pub unmapped: BTreeSet<String>,
}

/// Derives the raw sample key of a file: its base name without `suffix`.
/// A base name that does not end with `suffix` is used whole.
pub fn sample_key<'a>(path: &'a Utf8Path, suffix: &str) -> &'a str {
    let base = path.file_name().unwrap_or(path.as_str());
    base.strip_suffix(suffix).unwrap_or(base)
}

pub fn build_manifest<P: AsRef<Utf8Path>>(
    file_paths: &[P],
    extension_suffix: &str,
    mapping: &NameMapping,
) -> Result<ManifestOutcome, SheetError> {
    if file_paths.is_empty() {
        return Err(SheetError::EmptyInput);
    }

    let mut rows = Vec::with_capacity(file_paths.len());
    let mut unmapped = BTreeSet::new();
    for path in file_paths {
        let path = path.as_ref();
        let raw = sample_key(path, extension_suffix);
        let sample = match mapping.get(raw) {
            Some(name) => name.to_string(),
            None => {
                unmapped.insert(raw.to_string());
                raw.to_string()
            }
        };
        tracing::debug!(raw, %sample, path = %path, "manifest row");
        rows.push(ManifestRow {
            sample,
            fastq_1: path.to_string(),
        });
    }

    Ok(ManifestOutcome {
        manifest: Manifest { rows },
        unmapped,
    })
}
