use std::fmt::{self, Display};
use std::str::FromStr;

use crate::errors::RoiCoreError;
use crate::models::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strand {
    Forward,
    Reverse,
    #[default]
    Unknown,
}

impl FromStr for Strand {
    type Err = RoiCoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "+" => Ok(Strand::Forward),
            "-" => Ok(Strand::Reverse),
            "." | "?" => Ok(Strand::Unknown),
            _ => Err(RoiCoreError::InvalidStrand(s.to_string())),
        }
    }
}

///
/// Parse the GFF frame (phase) column: `0`, `1`, `2`, or `.` for none.
///
pub fn parse_frame(s: &str) -> Result<Option<u8>, RoiCoreError> {
    match s {
        "." => Ok(None),
        "0" => Ok(Some(0)),
        "1" => Ok(Some(1)),
        "2" => Ok(Some(2)),
        _ => Err(RoiCoreError::InvalidFrame(s.to_string())),
    }
}

impl Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Strand::Forward => "+",
            Strand::Reverse => "-",
            Strand::Unknown => ".",
        };
        write!(f, "{}", symbol)
    }
}

///
/// Region struct, representation of one region of interest in a GFF-family file.
///
/// Coordinates are 1-based and closed, so a region covers `end - start + 1` bases.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Region {
    pub chr: String,
    pub source: String,
    pub feature: String,
    pub start: u32,
    pub end: u32,
    pub score: f64,
    pub strand: Strand,
    pub frame: Option<u8>,
    pub attributes: Attributes,
}

impl Region {
    ///
    /// Create a bare region with a zero score, no strand and no attributes.
    ///
    pub fn new<S: Into<String>>(chr: S, start: u32, end: u32) -> Self {
        Region {
            chr: chr.into(),
            source: ".".to_string(),
            feature: "region".to_string(),
            start,
            end,
            score: 0.0,
            strand: Strand::Unknown,
            frame: None,
            attributes: Attributes::new(),
        }
    }

    ///
    /// Number of bases covered by the region, `0` when `end < start`.
    ///
    pub fn width(&self) -> u64 {
        match self.end < self.start {
            true => 0,
            false => u64::from(self.end) - u64::from(self.start) + 1,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.end >= self.start
    }

    ///
    /// Check coordinates read from a file: 1-based, so `start` is at least 1, and
    /// `end` not before `start`.
    ///
    pub fn check_coordinates(start: u32, end: u32) -> Result<(), RoiCoreError> {
        match start == 0 || end < start {
            true => Err(RoiCoreError::InvalidCoordinates { start, end }),
            false => Ok(()),
        }
    }

    ///
    /// Get the GFF line of the Region
    ///
    pub fn as_string(&self) -> String {
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            self.chr,
            self.source,
            self.feature,
            self.start,
            self.end,
            self.score,
            self.strand,
            self.frame.map_or(".".to_string(), |f| f.to_string()),
            self.attributes,
        )
    }
}

impl Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    #[case(10, 19, 10)]
    #[case(5, 5, 1)]
    #[case(20, 10, 0)]
    #[case(0, u32::MAX, 1 << 32)]
    fn test_width(#[case] start: u32, #[case] end: u32, #[case] expected: u64) {
        assert_eq!(Region::new("chr1", start, end).width(), expected);
    }

    #[rstest]
    fn test_strand_round_trip() {
        for symbol in ["+", "-", "."] {
            let strand = Strand::from_str(symbol).unwrap();
            assert_eq!(strand.to_string(), symbol);
        }
        assert!(Strand::from_str("x").is_err());
    }

    #[rstest]
    #[case(".", None)]
    #[case("0", Some(0))]
    #[case("2", Some(2))]
    fn test_parse_frame(#[case] column: &str, #[case] expected: Option<u8>) {
        assert_eq!(parse_frame(column).unwrap(), expected);
    }

    #[rstest]
    #[case("3")]
    #[case("7")]
    #[case("-1")]
    fn test_parse_frame_rejects_out_of_range(#[case] column: &str) {
        assert!(matches!(
            parse_frame(column),
            Err(RoiCoreError::InvalidFrame(_))
        ));
    }

    #[rstest]
    #[case(1, 1, true)]
    #[case(10, 19, true)]
    #[case(0, 19, false)]
    #[case(20, 19, false)]
    fn test_check_coordinates(#[case] start: u32, #[case] end: u32, #[case] valid: bool) {
        assert_eq!(Region::check_coordinates(start, end).is_ok(), valid);
    }

    #[rstest]
    fn test_as_string() {
        let mut region = Region::new("chr2", 100, 200);
        region.score = 2.5;
        region.strand = Strand::Reverse;
        region.attributes = Attributes::from_text("ID=p1");

        assert_eq!(
            region.as_string(),
            "chr2\t.\tregion\t100\t200\t2.5\t-\t.\tID=p1"
        );
    }
}
