use std::fs;

use assert_matches::assert_matches;
use camino::Utf8PathBuf;

use fastq_samplesheet::error::SheetError;
use fastq_samplesheet::fs_util::discover_files;

fn utf8_tempdir() -> (tempfile::TempDir, Utf8PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).unwrap();
    (dir, root)
}

#[test]
fn discovers_matching_files_sorted() {
    let (_dir, root) = utf8_tempdir();
    fs::write(root.join("SRR35582364.fastq.gz"), b"").unwrap();
    fs::write(root.join("SRR35582354.fastq.gz"), b"").unwrap();
    fs::write(root.join("readme.txt"), b"").unwrap();
    fs::create_dir(root.join("nested.fastq.gz")).unwrap();

    let files = discover_files(&root, "*.fastq.gz").unwrap();
    let names = files
        .iter()
        .map(|path| path.file_name().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["SRR35582354.fastq.gz", "SRR35582364.fastq.gz"]);
    assert!(files.iter().all(|path| path.is_absolute()));
}

#[test]
fn no_matches_is_empty() {
    let (_dir, root) = utf8_tempdir();
    fs::write(root.join("reads.bam"), b"").unwrap();
    let files = discover_files(&root, "*.fastq.gz").unwrap();
    assert!(files.is_empty());
}

#[test]
fn missing_root_rejected() {
    let (_dir, root) = utf8_tempdir();
    let err = discover_files(&root.join("absent"), "*.fastq.gz").unwrap_err();
    assert_matches!(err, SheetError::MissingRoot(_));
}

#[test]
fn root_with_glob_characters_is_literal() {
    let (_dir, base) = utf8_tempdir();
    let root = base.join("run[1]");
    fs::create_dir(&root).unwrap();
    fs::write(root.join("SRR1.fastq.gz"), b"").unwrap();

    let files = discover_files(&root, "*.fastq.gz").unwrap();
    assert_eq!(files.len(), 1);
}

#[test]
fn malformed_pattern_rejected() {
    let (_dir, root) = utf8_tempdir();
    let err = discover_files(&root, "[.fastq.gz").unwrap_err();
    assert_matches!(err, SheetError::InvalidPattern(_));
}
