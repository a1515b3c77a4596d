use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

use crate::config::ResolvedConfig;
use crate::error::SheetError;
use crate::fs_util;
use crate::manifest::{self, Manifest};
use crate::mapping;
use crate::output;

/// Source of input files for a run.
pub trait FileSource {
    fn discover(&self, root: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, SheetError>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct GlobFileSource;

impl FileSource for GlobFileSource {
    fn discover(&self, root: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, SheetError> {
        fs_util::discover_files(root, pattern)
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub dry_run: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    pub output_path: Utf8PathBuf,
    pub written: bool,
    pub rows: usize,
    pub mapping_size: usize,
    pub unmapped: Vec<String>,
    pub manifest: Manifest,
}

#[derive(Clone)]
pub struct App<F: FileSource> {
    source: F,
}

impl<F: FileSource> App<F> {
    pub fn new(source: F) -> Self {
        Self { source }
    }

    pub fn run(&self, config: &ResolvedConfig, options: RunOptions) -> Result<RunSummary, SheetError> {
        let files = self
            .source
            .discover(&config.root_directory, &config.pattern)?;
        if files.is_empty() {
            return Err(SheetError::NoMatchingFiles {
                root: config.root_directory.clone(),
                pattern: config.pattern.clone(),
            });
        }

        let mapping = mapping::build_group_mapping(&config.groups);
        let outcome = manifest::build_manifest(files.as_slice(), &config.file_suffix, &mapping)?;
        if !outcome.unmapped.is_empty() {
            tracing::warn!(
                count = outcome.unmapped.len(),
                samples = ?outcome.unmapped,
                "samples not found in the name mapping, left unmapped"
            );
        }

        let output_path = if options.dry_run {
            config.output_path.clone()
        } else {
            output::write_manifest(&outcome.manifest, &config.output_path)?;
            resolve_written(&config.output_path)
        };
        tracing::info!(rows = outcome.manifest.len(), path = %output_path, "samplesheet ready");

        Ok(RunSummary {
            output_path,
            written: !options.dry_run,
            rows: outcome.manifest.len(),
            mapping_size: mapping.len(),
            unmapped: outcome.unmapped.into_iter().collect(),
            manifest: outcome.manifest,
        })
    }
}

fn resolve_written(path: &Utf8Path) -> Utf8PathBuf {
    fs::canonicalize(path)
        .ok()
        .and_then(|resolved| Utf8PathBuf::from_path_buf(resolved).ok())
        .unwrap_or_else(|| path.to_path_buf())
}
