use std::io::BufRead;
use std::path::Path;

use roiscore_core::models::ScoreInterval;
use roiscore_core::utils::get_dynamic_reader;

use crate::error::{Result, RoiIoError, is_header_line, parse_field};

///
/// Read all score intervals from a bedGraph file (optionally gzipped).
///
/// `track`, `browser` and `#` lines are skipped. Columns may be separated by tabs
/// or spaces; anything after the fourth column is ignored.
///
/// # Arguments
/// - path: path to the file on disk
pub fn read_bedgraph<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreInterval>> {
    let reader = get_dynamic_reader(path.as_ref())?;

    let mut intervals: Vec<ScoreInterval> = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let line_num = idx + 1;

        if line.trim().is_empty() || is_header_line(&line) {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(chr), Some(start), Some(end), Some(score)) =
            (fields.next(), fields.next(), fields.next(), fields.next())
        else {
            return Err(RoiIoError::parse(
                line_num,
                "expected 4 columns: chrom, start, end, score",
            ));
        };

        let start: u32 = parse_field(start, "start", line_num)?;
        let end: u32 = parse_field(end, "end", line_num)?;
        let score: f64 = parse_field(score, "score", line_num)?;

        let interval = ScoreInterval::new(chr, start, end, score);
        if interval.width() == 0 {
            return Err(RoiIoError::parse(
                line_num,
                format!("interval end ({}) must be greater than start ({})", end, start),
            ));
        }

        intervals.push(interval);
    }

    Ok(intervals)
}
