use std::fmt::{self, Display};

///
/// One continuous-score interval from a bedGraph or wiggle track.
///
/// Represents the range `[start, end)`: inclusive start, exclusive end, 0-based.
/// In 1-based closed terms the covered bases are `start + 1 ..= end`.
///
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreInterval {
    pub chr: String,
    pub start: u32,
    pub end: u32,
    pub score: f64,
}

impl ScoreInterval {
    pub fn new<S: Into<String>>(chr: S, start: u32, end: u32, score: f64) -> Self {
        ScoreInterval {
            chr: chr.into(),
            start,
            end,
            score,
        }
    }

    /// Number of bases covered, `0` for empty or inverted intervals.
    #[inline]
    pub fn width(&self) -> u32 {
        self.end.saturating_sub(self.start)
    }

    ///
    /// Get the bedGraph line of the interval
    ///
    pub fn as_string(&self) -> String {
        format!("{}\t{}\t{}\t{}", self.chr, self.start, self.end, self.score)
    }
}

impl Display for ScoreInterval {
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
    fn test_width() {
        assert_eq!(ScoreInterval::new("chr1", 0, 15, 2.0).width(), 15);
        assert_eq!(ScoreInterval::new("chr1", 15, 15, 2.0).width(), 0);
        assert_eq!(ScoreInterval::new("chr1", 20, 15, 2.0).width(), 0);
    }
}
