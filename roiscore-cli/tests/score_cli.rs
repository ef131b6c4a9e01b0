use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../tests/data")
}

/// Copy the fixtures into a scratch directory so outputs land next to them.
fn staged_inputs() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in ["promoters.gff", "signal.bedgraph", "signal.wig"] {
        fs::copy(data_dir().join(name), dir.path().join(name)).unwrap();
    }
    dir
}

fn roiscore(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("roiscore").unwrap();
    cmd.arg("score")
        .arg("--regions")
        .arg(dir.join("promoters.gff"))
        .arg("--scores")
        .arg(dir.join("signal.bedgraph"));
    cmd
}

/// (chr, start, score, attributes) of every line in a GFF output.
fn read_output(path: &Path) -> Vec<(String, String, String, String)> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| {
            let fields: Vec<&str> = line.split('\t').collect();
            (
                fields[0].to_string(),
                fields[3].to_string(),
                fields[5].to_string(),
                fields[8].to_string(),
            )
        })
        .collect()
}

fn scores(path: &Path) -> Vec<String> {
    read_output(path).into_iter().map(|(_, _, s, _)| s).collect()
}

#[test]
fn test_score_writes_sorted_scored_regions() {
    let dir = staged_inputs();

    roiscore(dir.path()).assert().success();

    let output = read_output(&dir.path().join("promoters_scored.gff"));
    let positions: Vec<(&str, &str)> = output
        .iter()
        .map(|(chr, start, _, _)| (chr.as_str(), start.as_str()))
        .collect();

    assert_eq!(
        positions,
        vec![("chr1", "10"), ("chr1", "40"), ("chr1", "100"), ("chr2", "5")]
    );
    assert_eq!(
        scores(&dir.path().join("promoters_scored.gff")),
        vec!["2.8", "0.6", "0", "1.5"]
    );
    // no bin counts unless asked for
    assert_eq!(output[0].3, "gene_id \"g1\"");
}

#[test]
fn test_ignore_negative_and_count_bins() {
    let dir = staged_inputs();

    roiscore(dir.path()).args(["-n", "-c"]).assert().success();

    let output = read_output(&dir.path().join("promoters_scored.gff"));
    let scores: Vec<&str> = output.iter().map(|(_, _, s, _)| s.as_str()).collect();
    let attributes: Vec<&str> = output.iter().map(|(_, _, _, a)| a.as_str()).collect();

    assert_eq!(scores, vec!["2.8", "1.2", "0", "1.5"]);
    assert_eq!(
        attributes,
        vec![
            "gene_id \"g1\"; CpGs 2",
            "gene_id \"g2\"; CpGs 1",
            "gene_id \"g4\"; CpGs 0",
            "CpGs 0",
        ]
    );
}

#[test]
fn test_discretize_by_bounds() {
    let dir = staged_inputs();

    roiscore(dir.path())
        .args(["--bounds", "1", "2"])
        .assert()
        .success();

    assert_eq!(
        scores(&dir.path().join("promoters_scored_discrete_by_bounds.gff")),
        vec!["3", "1", "1", "2"]
    );
    // the continuous output is still written
    assert!(dir.path().join("promoters_scored.gff").exists());
}

#[test]
fn test_discretize_ignoring_zero() {
    let dir = staged_inputs();

    roiscore(dir.path())
        .args(["-z", "-d", "--bounds", "1", "2"])
        .assert()
        .success();

    assert_eq!(
        scores(&dir.path().join("promoters_scored_discrete_by_bounds.gff")),
        vec!["3", "1", "0", "2"]
    );
}

#[test]
fn test_discretize_by_interval() {
    let dir = staged_inputs();

    roiscore(dir.path())
        .args(["--interval", "2"])
        .assert()
        .success();

    // scores span 0 to 2.8, so the classes split at 1.4
    assert_eq!(
        scores(&dir.path().join("promoters_scored_discrete_by_interval.gff")),
        vec!["2", "1", "1", "2"]
    );
}

#[test]
fn test_discretize_by_quantile() {
    let dir = staged_inputs();

    roiscore(dir.path())
        .args(["--quantile", "4"])
        .assert()
        .success();

    let classes = scores(&dir.path().join("promoters_scored_discrete_by_quantile.gff"));
    assert_eq!(classes.len(), 4);
    // highest score in the top class, lowest in the bottom one
    assert_eq!(classes[0], "4");
    assert_eq!(classes[2], "1");
}

#[test]
fn test_wig_scores() {
    let dir = staged_inputs();

    let mut cmd = Command::cargo_bin("roiscore").unwrap();
    cmd.arg("score")
        .arg("--regions")
        .arg(dir.path().join("promoters.gff"))
        .arg("--scores")
        .arg(dir.path().join("signal.wig"))
        .assert()
        .success();

    assert!(dir.path().join("promoters_scored.gff").exists());
}

#[test]
fn test_output_dir_and_gzip() {
    let dir = staged_inputs();
    let out = dir.path().join("results");

    roiscore(dir.path())
        .arg("--output-dir")
        .arg(&out)
        .arg("--gzip")
        .assert()
        .success();

    assert!(out.join("promoters_scored.gff.gz").exists());
    assert!(!dir.path().join("promoters_scored.gff").exists());
}

#[test]
fn test_config_file() {
    let dir = staged_inputs();
    let config = dir.path().join("scoring.toml");
    fs::write(
        &config,
        "ignore_negative = true\n\n[discretization]\nbounds = [1.0]\n",
    )
    .unwrap();

    roiscore(dir.path())
        .arg("--config")
        .arg(&config)
        .assert()
        .success();

    assert_eq!(
        scores(&dir.path().join("promoters_scored.gff")),
        vec!["2.8", "1.2", "0", "1.5"]
    );
    assert_eq!(
        scores(&dir.path().join("promoters_scored_discrete_by_bounds.gff")),
        vec!["2", "2", "1", "2"]
    );
}

#[test]
fn test_conflicting_discretization_modes() {
    let dir = staged_inputs();

    roiscore(dir.path())
        .args(["--quantile", "4", "--interval", "2"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}

#[test]
fn test_unsupported_score_file() {
    let dir = staged_inputs();
    let bogus = dir.path().join("signal.txt");
    fs::write(&bogus, "chr1\t0\t10\t1.0\n").unwrap();

    let mut cmd = Command::cargo_bin("roiscore").unwrap();
    cmd.arg("score")
        .arg("--regions")
        .arg(dir.path().join("promoters.gff"))
        .arg("--scores")
        .arg(&bogus)
        .assert()
        .failure();

    assert!(!dir.path().join("promoters_scored.gff").exists());
}

#[test]
fn test_missing_chromosome_fails() {
    let dir = staged_inputs();
    fs::write(dir.path().join("signal.bedgraph"), "chr1\t0\t200\t1.0\n").unwrap();

    roiscore(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("chr2"));
}

#[test]
fn test_zero_span_wig_is_rejected_while_reading() {
    let dir = staged_inputs();
    let wig = dir.path().join("zero_span.wig");
    fs::write(&wig, "variableStep chrom=chr1 span=0\n3 1.0\n").unwrap();

    let mut cmd = Command::cargo_bin("roiscore").unwrap();
    cmd.arg("score")
        .arg("--regions")
        .arg(dir.path().join("promoters.gff"))
        .arg("--scores")
        .arg(&wig)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read scores"))
        .stderr(predicate::str::contains("span"));
}

#[test]
fn test_unsupported_regions_file() {
    let dir = staged_inputs();
    let bed = dir.path().join("promoters.bed");
    fs::copy(dir.path().join("promoters.gff"), &bed).unwrap();

    let mut cmd = Command::cargo_bin("roiscore").unwrap();
    cmd.arg("score")
        .arg("--regions")
        .arg(&bed)
        .arg("--scores")
        .arg(dir.path().join("signal.bedgraph"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("No valid regions file"));

    assert!(!dir.path().join("promoters_scored.bed").exists());
}
