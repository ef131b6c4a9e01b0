use roiscore_core::models::{Region, ScoreInterval};

///
/// A 1-based closed coordinate range, `[start, end]`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    pub fn new(start: u32, end: u32) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> u64 {
        match self.end < self.start {
            true => 0,
            false => u64::from(self.end) - u64::from(self.start) + 1,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.end < self.start
    }
}

impl From<&Region> for Span {
    fn from(region: &Region) -> Self {
        Span::new(region.start, region.end)
    }
}

impl From<&ScoreInterval> for Span {
    /// `[start, end)` 0-based becomes `[start + 1, end]` 1-based.
    fn from(interval: &ScoreInterval) -> Self {
        Span::new(interval.start.saturating_add(1), interval.end)
    }
}

///
/// How a score interval (the bin) sits relative to a region (the frame).
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlapCase {
    /// The bin covers the whole frame.
    Containing,
    /// The bin starts before the frame and ends inside it.
    LeadingPartial,
    /// The bin lies completely inside the frame.
    Contained,
    /// The bin starts inside the frame and ends after it.
    TrailingPartial,
}

impl OverlapCase {
    ///
    /// Classify a bin against a frame. Cases are tried in declaration order and the
    /// first match wins. `None` means the pair fits no case: the two are disjoint,
    /// or the bin is empty or inverted.
    ///
    pub fn classify(frame: Span, bin: Span) -> Option<OverlapCase> {
        if bin.is_empty() {
            return None;
        }

        if bin.start <= frame.start && bin.end >= frame.end {
            Some(OverlapCase::Containing)
        } else if bin.start < frame.start && bin.end >= frame.start {
            Some(OverlapCase::LeadingPartial)
        } else if bin.start >= frame.start && bin.end <= frame.end {
            Some(OverlapCase::Contained)
        } else if bin.start <= frame.end && bin.end > frame.end {
            Some(OverlapCase::TrailingPartial)
        } else {
            None
        }
    }

    /// Number of bases shared by the frame and a bin of this case.
    pub fn overlap_length(&self, frame: Span, bin: Span) -> u64 {
        match self {
            OverlapCase::Containing => frame.len(),
            OverlapCase::LeadingPartial => Span::new(frame.start, bin.end).len(),
            OverlapCase::Contained => bin.len(),
            OverlapCase::TrailingPartial => Span::new(bin.start, frame.end).len(),
        }
    }
}
