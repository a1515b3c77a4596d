use std::fs;

use assert_matches::assert_matches;

use fastq_samplesheet::config::{
    Config, ConfigLoader, ConfigOverrides, GroupEntry, RangeEntry, RangeEntryObject,
};
use fastq_samplesheet::error::SheetError;

#[test]
fn parse_config_shorthand_and_detailed() {
    let config = Config {
        root_directory: Some("/data/fastq".into()),
        output_path: None,
        file_suffix: Some(".fq.gz".to_string()),
        pattern: None,
        groups: Some(vec![
            GroupEntry {
                label: "case".to_string(),
                accessions: RangeEntry::Shorthand("ERR100[1..5)".to_string()),
            },
            GroupEntry {
                label: "control".to_string(),
                accessions: RangeEntry::Detailed(RangeEntryObject {
                    prefix: "ERR100".to_string(),
                    start: 5,
                    end: 8,
                }),
            },
        ]),
    };

    let resolved = ConfigLoader::resolve_config(config).unwrap();
    assert_eq!(resolved.root_directory, "/data/fastq");
    assert_eq!(resolved.output_path, "samplesheet.csv");
    assert_eq!(resolved.pattern, "*.fq.gz");
    assert_eq!(resolved.groups[0].range.to_string(), "ERR100[1..5)");
    assert_eq!(resolved.groups[1].label.as_str(), "control");
    assert_eq!(resolved.groups[1].range.len(), 3);
}

#[test]
fn empty_range_in_config_rejected() {
    let config = Config {
        groups: Some(vec![
            GroupEntry {
                label: "case".to_string(),
                accessions: RangeEntry::Shorthand("SRR1[4..4)".to_string()),
            },
            GroupEntry {
                label: "control".to_string(),
                accessions: RangeEntry::Shorthand("SRR1[5..9)".to_string()),
            },
        ]),
        ..Config::default()
    };
    let err = ConfigLoader::resolve_config(config).unwrap_err();
    assert_matches!(err, SheetError::InvalidRange { .. });
}

#[test]
fn resolve_reads_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("samplesheet.json");
    fs::write(
        &path,
        r#"{
            "root_directory": "reads",
            "output_path": "out.csv",
            "groups": [
                { "label": "ad", "accessions": "SRR355823[54..64)" },
                { "label": "control", "accessions": { "prefix": "SRR355823", "start": 64, "end": 73 } }
            ]
        }"#,
    )
    .unwrap();

    let resolved = ConfigLoader::resolve(path.to_str()).unwrap();
    assert_eq!(resolved.root_directory, "reads");
    assert_eq!(resolved.output_path, "out.csv");
    assert_eq!(resolved.file_suffix, ".fastq.gz");
    assert_eq!(resolved.groups[1].range.to_string(), "SRR355823[64..73)");
}

#[test]
fn resolve_rejects_unknown_fields() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, r#"{ "root": "reads" }"#).unwrap();
    let err = ConfigLoader::resolve(path.to_str()).unwrap_err();
    assert_matches!(err, SheetError::ConfigParse(_));
}

#[test]
fn resolve_missing_explicit_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let err = ConfigLoader::resolve(path.to_str()).unwrap_err();
    assert_matches!(err, SheetError::ConfigRead(_));
}

#[test]
fn overrides_take_precedence() {
    let resolved = ConfigLoader::resolve_config(Config::default())
        .unwrap()
        .apply(ConfigOverrides {
            root_directory: Some("/mnt/reads".into()),
            output_path: Some("sheet.csv".into()),
            file_suffix: None,
        });
    assert_eq!(resolved.root_directory, "/mnt/reads");
    assert_eq!(resolved.output_path, "sheet.csv");
    assert_eq!(resolved.pattern, "*.fastq.gz");
}

#[test]
fn suffix_override_keeps_configured_pattern() {
    let config = Config {
        file_suffix: Some(".fastq.gz".to_string()),
        pattern: Some("SRR*.fastq.gz".to_string()),
        ..Config::default()
    };
    let resolved = ConfigLoader::resolve_config(config)
        .unwrap()
        .apply(ConfigOverrides {
            file_suffix: Some(".fq.gz".to_string()),
            ..ConfigOverrides::default()
        });
    assert_eq!(resolved.pattern, "SRR*.fastq.gz");
    assert_eq!(resolved.file_suffix, ".fq.gz");
}
