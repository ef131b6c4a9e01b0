use std::fmt::{self, Display};

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScoringError {
    #[error("No score data given. Can't build a chromosome index from an empty score track")]
    NoScoreData,

    #[error("Chromosome {chr} of region {region} has no entries in the score track")]
    ChromosomeNotFound { chr: String, region: String },

    #[error(
        "Error in scoring! Unhandled overlap case between region {region} and score interval {interval}. Please report a bug!"
    )]
    UnhandledOverlapCase { region: String, interval: String },

    #[error("Region {0} ends before it starts")]
    InvalidRegion(String),

    #[error("No scores are left after applying the ignore filters")]
    EmptyScoreSet,

    #[error("The number of classes must be at least 1")]
    InvalidClassCount,

    #[error("Discretization bounds must be ascending and must not contain NaN: {0:?}")]
    UnsortedBounds(Vec<f64>),
}

pub type Result<T> = std::result::Result<T, ScoringError>;

///
/// Advisory conditions found while scoring. They never abort a scoring call; the
/// caller decides what to do with them.
///
#[derive(Debug, Clone, PartialEq)]
pub enum ScoringWarning {
    /// More bases were attributed to a region than it has. Only happens when score
    /// intervals overlap each other.
    OverlapLengthExceeded {
        region: String,
        overlap_length: u64,
        region_length: u64,
    },
}

impl Display for ScoringWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoringWarning::OverlapLengthExceeded {
                region,
                overlap_length,
                region_length,
            } => write!(
                f,
                "Invalid length calculated for region {}: {} overlapping bases for a region of {} bases",
                region, overlap_length, region_length
            ),
        }
    }
}
