//! # Input/Output utilities for roiscore.
//!
//! Reading regions of interest from GFF-family files, reading score intervals from
//! bedGraph and wiggle tracks, and writing scored regions back out as GFF. The scoring
//! engine itself never touches the filesystem; everything it consumes is produced here.
//!
pub mod bedgraph;
pub mod error;
pub mod gff;
pub mod scores;
pub mod wig;

// re-expose core functions
pub use bedgraph::*;
pub use error::*;
pub use gff::*;
pub use scores::*;
pub use wig::*;
