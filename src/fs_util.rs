use std::fs;

use camino::{Utf8Path, Utf8PathBuf};
use glob::{MatchOptions, Pattern};

use crate::error::SheetError;

/// Lists regular files directly under `root` whose names match `pattern`,
/// resolved to absolute paths and sorted ascending.
pub fn discover_files(root: &Utf8Path, pattern: &str) -> Result<Vec<Utf8PathBuf>, SheetError> {
    if !root.is_dir() {
        return Err(SheetError::MissingRoot(root.to_path_buf()));
    }
    Pattern::new(pattern).map_err(|err| SheetError::InvalidPattern(format!("{pattern}: {err}")))?;

    let full_pattern = format!(
        "{}/{pattern}",
        Pattern::escape(root.as_str().trim_end_matches('/'))
    );
    let options = MatchOptions {
        case_sensitive: true,
        require_literal_separator: true,
        require_literal_leading_dot: false,
    };
    let entries = glob::glob_with(&full_pattern, options)
        .map_err(|err| SheetError::InvalidPattern(format!("{pattern}: {err}")))?;

    let mut matched = Vec::new();
    for entry in entries {
        let path = entry.map_err(|err| SheetError::Filesystem(err.to_string()))?;
        if path.is_file() {
            matched.push(path);
        }
    }
    matched.sort();

    let mut out = Vec::with_capacity(matched.len());
    for path in matched {
        let resolved = fs::canonicalize(&path)
            .map_err(|err| SheetError::Filesystem(format!("resolve {}: {err}", path.display())))?;
        out.push(Utf8PathBuf::from_path_buf(resolved).map_err(SheetError::NonUtf8Path)?);
    }
    tracing::debug!(root = %root, pattern, count = out.len(), "discovered input files");
    Ok(out)
}
