use std::collections::HashMap;
use std::io::BufRead;
use std::path::Path;

use roiscore_core::models::ScoreInterval;
use roiscore_core::utils::get_dynamic_reader;

use crate::error::{Result, RoiIoError, is_header_line, parse_field};

/// The declaration the following data lines belong to.
enum WigBlock {
    Fixed {
        chrom: String,
        next_start: u32,
        step: u32,
        span: u32,
    },
    Variable {
        chrom: String,
        span: u32,
    },
}

fn parse_declaration(line: &str, line_num: usize) -> Result<HashMap<&str, &str>> {
    let mut pairs = HashMap::new();
    for token in line.split_whitespace().skip(1) {
        let (key, value) = token.split_once('=').ok_or_else(|| {
            RoiIoError::parse(line_num, format!("expected key=value, found '{}'", token))
        })?;
        pairs.insert(key, value);
    }
    Ok(pairs)
}

fn required<'a>(pairs: &HashMap<&str, &'a str>, key: &str, line_num: usize) -> Result<&'a str> {
    pairs
        .get(key)
        .copied()
        .ok_or_else(|| RoiIoError::parse(line_num, format!("missing '{}' in declaration", key)))
}

/// `step` and `span` default to 1 and must be at least 1.
fn optional_length(pairs: &HashMap<&str, &str>, key: &str, line_num: usize) -> Result<u32> {
    let length = match pairs.get(key) {
        Some(value) => parse_field(value, key, line_num)?,
        None => 1,
    };
    match length {
        0 => Err(RoiIoError::parse(line_num, format!("'{}' must be at least 1", key))),
        length => Ok(length),
    }
}

/// Turn a 1-based wig position into the 0-based half-open interval it covers.
fn wig_interval(chrom: &str, position: u32, span: u32, score: f64, line_num: usize) -> Result<ScoreInterval> {
    if position == 0 {
        return Err(RoiIoError::parse(line_num, "wiggle positions are 1-based, found 0"));
    }
    let start = position - 1;
    let end = start
        .checked_add(span)
        .ok_or_else(|| RoiIoError::parse(line_num, "interval end overflows"))?;

    Ok(ScoreInterval::new(chrom, start, end, score))
}

///
/// Read all score intervals from a wiggle file (optionally gzipped).
///
/// Both `fixedStep` and `variableStep` blocks are supported. Every data value becomes
/// one interval of length `span` (default 1), converted from the 1-based wiggle
/// positions to 0-based half-open coordinates.
///
/// # Arguments
/// - path: path to the file on disk
pub fn read_wig<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreInterval>> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut intervals: Vec<ScoreInterval> = Vec::new();
    let mut block: Option<WigBlock> = None;

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;
        let line = line.trim();

        if line.is_empty() || is_header_line(line) {
            continue;
        }

        if line.starts_with("fixedStep") {
            let pairs = parse_declaration(line, line_num)?;
            let span = optional_length(&pairs, "span", line_num)?;
            block = Some(WigBlock::Fixed {
                chrom: required(&pairs, "chrom", line_num)?.to_string(),
                next_start: parse_field(required(&pairs, "start", line_num)?, "start", line_num)?,
                step: optional_length(&pairs, "step", line_num)?,
                span,
            });
            continue;
        }

        if line.starts_with("variableStep") {
            let pairs = parse_declaration(line, line_num)?;
            block = Some(WigBlock::Variable {
                chrom: required(&pairs, "chrom", line_num)?.to_string(),
                span: optional_length(&pairs, "span", line_num)?,
            });
            continue;
        }

        match block.as_mut() {
            Some(WigBlock::Fixed {
                chrom,
                next_start,
                step,
                span,
            }) => {
                let score: f64 = parse_field(line, "value", line_num)?;
                intervals.push(wig_interval(chrom, *next_start, *span, score, line_num)?);
                *next_start = next_start.saturating_add(*step);
            }
            Some(WigBlock::Variable { chrom, span }) => {
                let mut fields = line.split_whitespace();
                let (Some(position), Some(score)) = (fields.next(), fields.next()) else {
                    return Err(RoiIoError::parse(
                        line_num,
                        "expected 2 columns: position, value",
                    ));
                };
                let position: u32 = parse_field(position, "position", line_num)?;
                let score: f64 = parse_field(score, "value", line_num)?;
                intervals.push(wig_interval(chrom, position, *span, score, line_num)?);
            }
            None => {
                return Err(RoiIoError::parse(
                    line_num,
                    "data line before any fixedStep or variableStep declaration",
                ));
            }
        }
    }

    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    use pretty_assertions::assert_eq;
    use rstest::*;

    fn get_test_path(file_name: &str) -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR"))
            .join("../tests/data")
            .join(file_name)
    }

    #[rstest]
    fn test_read_wig() {
        let intervals = read_wig(get_test_path("signal.wig")).unwrap();
        assert_eq!(
            intervals,
            vec![
                ScoreInterval::new("chr1", 10, 15, 2.0),
                ScoreInterval::new("chr1", 15, 20, 4.0),
                ScoreInterval::new("chr2", 0, 10, 1.5),
                ScoreInterval::new("chr2", 10, 20, 1.5),
            ]
        );
    }

    #[rstest]
    fn test_fixed_step_defaults() {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("defaults.wig");
        std::fs::write(&path, "fixedStep chrom=chr3 start=1\n0.5\n0.75\n").unwrap();

        let intervals = read_wig(&path).unwrap();
        assert_eq!(
            intervals,
            vec![
                ScoreInterval::new("chr3", 0, 1, 0.5),
                ScoreInterval::new("chr3", 1, 2, 0.75),
            ]
        );
    }

    #[rstest]
    #[case("1.0\n", 1)]
    #[case("fixedStep chrom=chr1\n1.0\n", 1)]
    #[case("variableStep span=5\n", 1)]
    #[case("variableStep chrom=chr1\n0 1.0\n", 2)]
    #[case("variableStep chrom=chr1\n10\n", 2)]
    #[case("variableStep chrom=chr1 span=0\n3 1.0\n", 1)]
    #[case("fixedStep chrom=chr1 start=1 step=0\n1.0\n", 1)]
    #[case("track type=wiggle_0\nfixedStep chrom=chr1 start=1 span=0\n1.0\n", 2)]
    fn test_read_wig_rejects_malformed_input(#[case] content: &str, #[case] line: usize) {
        let tempdir = tempfile::tempdir().unwrap();
        let path = tempdir.path().join("bad.wig");
        std::fs::write(&path, content).unwrap();

        match read_wig(&path) {
            Err(RoiIoError::Parse { line: l, .. }) => assert_eq!(l, line),
            other => panic!("expected a parse error, got {:?}", other),
        }
    }
}
