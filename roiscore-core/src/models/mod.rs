pub mod attributes;
pub mod interval;
pub mod position;
pub mod region;

// re-export for cleaner imports
pub use self::attributes::Attributes;
pub use self::interval::ScoreInterval;
pub use self::position::{GenomicPosition, sort_by_position};
pub use self::region::{Region, Strand, parse_frame};
