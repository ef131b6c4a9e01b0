use std::io;
use thiserror::Error;

use roiscore_core::RoiCoreError;

/// Error type for roiscore-io operations.
#[derive(Error, Debug)]
pub enum RoiIoError {
    /// IO error occurred during file operations.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// A line could not be turned into a record.
    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    /// The score file suffix is neither bedGraph nor wiggle.
    #[error("No valid scoring file was given: {0}. Expected a .bedgraph, .bdg or .wig file")]
    UnsupportedScoreFile(String),

    /// The regions file suffix is not one of the GFF family.
    #[error("No valid regions file was given: {0}. Expected a .gff, .gff3 or .gtf file")]
    UnsupportedRegionFile(String),

    /// The file held no records at all.
    #[error("Corrupted file. 0 records found in the file: {0}")]
    EmptyFile(String),

    #[error(transparent)]
    Core(#[from] RoiCoreError),
}

impl RoiIoError {
    pub(crate) fn parse<S: Into<String>>(line: usize, message: S) -> Self {
        RoiIoError::Parse {
            line,
            message: message.into(),
        }
    }
}

/// Result type alias for roiscore-io operations.
pub type Result<T> = std::result::Result<T, RoiIoError>;

///
/// Parse one field, turning a failure into a [RoiIoError::Parse] naming the field.
///
pub(crate) fn parse_field<T: std::str::FromStr>(value: &str, name: &str, line: usize) -> Result<T> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| RoiIoError::parse(line, format!("can't parse {} from '{}'", name, value)))
}

/// Header lines shared by the track formats we read.
pub(crate) fn is_header_line(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("track") || line.starts_with("browser")
}
