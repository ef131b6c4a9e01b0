use std::path::Path;

use log::debug;

use roiscore_core::models::ScoreInterval;
use roiscore_core::utils::{FileType, get_file_info};

use crate::bedgraph::read_bedgraph;
use crate::error::{Result, RoiIoError};
use crate::wig::read_wig;

///
/// Check that a path names a score track we know how to read.
///
pub fn check_score_file(path: &Path) -> Result<FileType> {
    let info = get_file_info(path);
    match info.file_type.is_score_file() {
        true => Ok(info.file_type),
        false => Err(RoiIoError::UnsupportedScoreFile(path.display().to_string())),
    }
}

///
/// Read score intervals from a bedGraph or wiggle file, chosen by suffix.
///
/// # Arguments
/// - path: path to a `.bedgraph`/`.bdg`/`.bg` or `.wig` file, optionally gzipped
pub fn read_score_intervals<P: AsRef<Path>>(path: P) -> Result<Vec<ScoreInterval>> {
    let path = path.as_ref();

    let intervals = match check_score_file(path)? {
        FileType::WIG => read_wig(path)?,
        _ => read_bedgraph(path)?,
    };

    debug!("Read {} score intervals from {}", intervals.len(), path.display());

    Ok(intervals)
}
