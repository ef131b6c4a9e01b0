//! # Core data model for roiscore.
//!
//! Two record types flow through every roiscore crate:
//!
//! - [`models::Region`]: a region of interest as read from a GFF-family file.
//!   Coordinates are 1-based and closed.
//! - [`models::ScoreInterval`]: an interval carrying one continuous score, as read
//!   from a bedGraph or wiggle file. Coordinates are 0-based and half-open.
//!
//! Both implement [`models::GenomicPosition`], which is all that is needed to put
//! them into the stable `(chromosome, start)` order the scoring engine relies on.
//!
pub mod errors;
pub mod models;
pub mod utils;

pub use errors::*;
