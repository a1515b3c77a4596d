use std::fs;
use std::path::PathBuf;

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::domain::{AccessionRange, GroupLabel, GroupSpec};
use crate::error::SheetError;

pub const DEFAULT_CONFIG_FILE: &str = "samplesheet.json";
pub const DEFAULT_ROOT_DIRECTORY: &str = "fastqgz_copy";
pub const DEFAULT_OUTPUT_PATH: &str = "samplesheet.csv";
pub const DEFAULT_FILE_SUFFIX: &str = ".fastq.gz";

#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub root_directory: Option<Utf8PathBuf>,
    #[serde(default)]
    pub output_path: Option<Utf8PathBuf>,
    #[serde(default)]
    pub file_suffix: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub groups: Option<Vec<GroupEntry>>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct GroupEntry {
    pub label: String,
    pub accessions: RangeEntry,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RangeEntry {
    Shorthand(String),
    Detailed(RangeEntryObject),
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RangeEntryObject {
    pub prefix: String,
    pub start: u64,
    pub end: u64,
}

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub root_directory: Utf8PathBuf,
    pub output_path: Utf8PathBuf,
    pub file_suffix: String,
    pub pattern: String,
    pub groups: [GroupSpec; 2],
    explicit_pattern: bool,
}

/// Values supplied on the command line; they take precedence over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub root_directory: Option<Utf8PathBuf>,
    pub output_path: Option<Utf8PathBuf>,
    pub file_suffix: Option<String>,
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Reads the config at `path`, or `samplesheet.json` in the working
    /// directory. Without an explicit path a missing default file means the
    /// built-in defaults.
    pub fn resolve(path: Option<&str>) -> Result<ResolvedConfig, SheetError> {
        let config_path = match path {
            Some(path) => PathBuf::from(path),
            None => PathBuf::from(DEFAULT_CONFIG_FILE),
        };

        if path.is_none() && !config_path.exists() {
            tracing::debug!("no {DEFAULT_CONFIG_FILE} found, using defaults");
            return Self::resolve_config(Config::default());
        }

        let content = fs::read_to_string(&config_path)
            .map_err(|_| SheetError::ConfigRead(config_path.clone()))?;
        let config: Config = serde_json::from_str(&content)
            .map_err(|err| SheetError::ConfigParse(err.to_string()))?;

        Self::resolve_config(config)
    }

    pub fn resolve_config(config: Config) -> Result<ResolvedConfig, SheetError> {
        let file_suffix = config
            .file_suffix
            .unwrap_or_else(|| DEFAULT_FILE_SUFFIX.to_string());
        let explicit_pattern = config.pattern.is_some();
        let pattern = config
            .pattern
            .unwrap_or_else(|| default_pattern(&file_suffix));

        let groups = match config.groups {
            Some(entries) => resolve_groups(entries)?,
            None => default_groups()?,
        };

        Ok(ResolvedConfig {
            root_directory: config
                .root_directory
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_ROOT_DIRECTORY)),
            output_path: config
                .output_path
                .unwrap_or_else(|| Utf8PathBuf::from(DEFAULT_OUTPUT_PATH)),
            file_suffix,
            pattern,
            groups,
            explicit_pattern,
        })
    }
}

impl ResolvedConfig {
    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(root) = overrides.root_directory {
            self.root_directory = root;
        }
        if let Some(output) = overrides.output_path {
            self.output_path = output;
        }
        if let Some(suffix) = overrides.file_suffix {
            // A pattern written in the config file outlives a suffix override.
            if !self.explicit_pattern {
                self.pattern = default_pattern(&suffix);
            }
            self.file_suffix = suffix;
        }
        self
    }
}

pub fn default_pattern(suffix: &str) -> String {
    format!("*{suffix}")
}

pub fn default_groups() -> Result<[GroupSpec; 2], SheetError> {
    Ok([
        GroupSpec {
            label: "ad".parse()?,
            range: AccessionRange::new("SRR355823", 54, 64)?,
        },
        GroupSpec {
            label: "control".parse()?,
            range: AccessionRange::new("SRR355823", 64, 73)?,
        },
    ])
}

fn resolve_groups(entries: Vec<GroupEntry>) -> Result<[GroupSpec; 2], SheetError> {
    let count = entries.len();
    let groups = entries
        .into_iter()
        .map(|entry| {
            let label: GroupLabel = entry.label.parse()?;
            let range = match entry.accessions {
                RangeEntry::Shorthand(value) => value.parse()?,
                RangeEntry::Detailed(obj) => AccessionRange::new(obj.prefix, obj.start, obj.end)?,
            };
            Ok(GroupSpec { label, range })
        })
        .collect::<Result<Vec<_>, SheetError>>()?;

    groups
        .try_into()
        .map_err(|_| SheetError::ConfigParse(format!("expected exactly 2 groups, found {count}")))
}
