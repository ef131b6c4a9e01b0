//! # Overlap scoring of genomic regions of interest.
//!
//! Given regions of interest and a continuous score track, each region is assigned the
//! length-weighted mean of the score intervals overlapping it. The continuous scores
//! can then be turned into discrete classes using explicit bounds, equal-width
//! intervals or quantiles.
//!
//! The engine works on the caller's data: both inputs are sorted in place and the
//! region scores and attributes are overwritten.
//!
//! ```no_run
//! use roiscore_core::models::{Region, ScoreInterval};
//! use roiscore_scoring::{RoiScorer, ScoringOptions};
//!
//! let mut regions = vec![Region::new("chr1", 10, 19)];
//! let mut intervals = vec![
//!     ScoreInterval::new("chr1", 0, 15, 2.0),
//!     ScoreInterval::new("chr1", 15, 25, 4.0),
//! ];
//!
//! let scorer = RoiScorer::new(ScoringOptions::default().with_count_bins(true));
//! let report = scorer.score_regions(&mut regions, &mut intervals).unwrap();
//!
//! assert_eq!(regions[0].score, 2.8);
//! assert!(report.warnings.is_empty());
//! ```
//!
pub mod config;
pub mod consts;
pub mod discretize;
pub mod distribution;
pub mod errors;
pub mod index;
pub mod options;
pub mod overlap;
pub mod scorer;

// re-exports
pub use config::*;
pub use distribution::*;
pub use errors::*;
pub use index::*;
pub use options::*;
pub use overlap::*;
pub use scorer::*;
