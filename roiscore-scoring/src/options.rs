use serde::{Deserialize, Serialize};

///
/// Flags controlling scoring and discretization.
///
/// - `ignore_negative`: during scoring, only intervals with a score above zero are
///   accumulated. During discretization, negative scores are set to class 0 and left
///   out of the score distribution.
/// - `ignore_zero`: during discretization, zero scores are set to class 0 and left
///   out of the score distribution. Scoring does not look at it.
/// - `count_bins`: during scoring, record the number of overlapping intervals on each
///   region as a `CpGs` attribute.
///
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringOptions {
    pub ignore_negative: bool,
    pub ignore_zero: bool,
    pub count_bins: bool,
}

impl ScoringOptions {
    pub fn with_ignore_negative(mut self, ignore_negative: bool) -> Self {
        self.ignore_negative = ignore_negative;
        self
    }

    pub fn with_ignore_zero(mut self, ignore_zero: bool) -> Self {
        self.ignore_zero = ignore_zero;
        self
    }

    pub fn with_count_bins(mut self, count_bins: bool) -> Self {
        self.count_bins = count_bins;
        self
    }
}
