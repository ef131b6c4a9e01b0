use log::{info, warn};

use roiscore_core::models::{Region, ScoreInterval, sort_by_position};

use crate::consts::BIN_COUNT_ATTRIBUTE;
use crate::errors::{Result, ScoringError, ScoringWarning};
use crate::index::ChromosomeIndex;
use crate::options::ScoringOptions;
use crate::overlap::{OverlapCase, Span};

///
/// Scores regions of interest against a continuous score track.
///
/// The scorer works on the caller's data. Every call sorts its inputs in place and
/// overwrites region scores (and attributes, when counting bins).
///
#[derive(Debug, Clone, Default)]
pub struct RoiScorer {
    options: ScoringOptions,
}

/// What a scoring pass found besides the scores themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringReport {
    pub regions_scored: usize,
    pub warnings: Vec<ScoringWarning>,
}

/// Running totals for one region.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
struct OverlapTally {
    weighted_sum: f64,
    overlap_length: u64,
    bins: u32,
}

fn region_label(region: &Region) -> String {
    format!("{}:{}-{}", region.chr, region.start, region.end)
}

impl RoiScorer {
    pub fn new(options: ScoringOptions) -> Self {
        RoiScorer { options }
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    pub fn set_ignore_negative(&mut self, ignore_negative: bool) {
        self.options.ignore_negative = ignore_negative;
    }

    pub fn set_ignore_zero(&mut self, ignore_zero: bool) {
        self.options.ignore_zero = ignore_zero;
    }

    pub fn set_count_bins(&mut self, count_bins: bool) {
        self.options.count_bins = count_bins;
    }

    ///
    /// Score every region by the length-weighted mean of the intervals overlapping it.
    ///
    /// Both slices are sorted by `(chromosome, start)` first. Scores for all regions are
    /// computed before any region is written to, so an error leaves scores and
    /// attributes untouched.
    ///
    /// # Arguments
    /// - regions: regions of interest, 1-based closed coordinates
    /// - intervals: score intervals, 0-based half-open coordinates
    ///
    /// # Returns
    /// A [ScoringReport] with the advisory warnings raised along the way.
    pub fn score_regions(
        &self,
        regions: &mut [Region],
        intervals: &mut [ScoreInterval],
    ) -> Result<ScoringReport> {
        sort_by_position(intervals);
        sort_by_position(regions);

        let index = ChromosomeIndex::build(intervals)?;
        let intervals: &[ScoreInterval] = intervals;

        let tallies = regions
            .iter()
            .map(|region| self.tally_region(region, intervals, &index))
            .collect::<Result<Vec<_>>>()?;

        let mut report = ScoringReport::default();

        for (region, tally) in regions.iter_mut().zip(tallies) {
            let region_length = region.width();

            if tally.overlap_length > region_length {
                let warning = ScoringWarning::OverlapLengthExceeded {
                    region: region_label(region),
                    overlap_length: tally.overlap_length,
                    region_length,
                };
                warn!("{}", warning);
                report.warnings.push(warning);
            }

            region.score = tally.weighted_sum / region_length as f64;

            if self.options.count_bins {
                match region.attributes.has_text() {
                    true => region
                        .attributes
                        .append_text(&format!("; {} {}", BIN_COUNT_ATTRIBUTE, tally.bins)),
                    false => region
                        .attributes
                        .insert(BIN_COUNT_ATTRIBUTE, tally.bins.to_string()),
                }
            }

            report.regions_scored += 1;
        }

        info!(
            "Scored {} regions against {} score intervals on {} chromosomes",
            report.regions_scored,
            intervals.len(),
            index.len()
        );

        Ok(report)
    }

    /// Whether an interval with this score is added to a partial-overlap sum.
    #[inline]
    fn contributes(&self, score: f64) -> bool {
        !self.options.ignore_negative || score > 0.0
    }

    fn tally_region(
        &self,
        region: &Region,
        intervals: &[ScoreInterval],
        index: &ChromosomeIndex,
    ) -> Result<OverlapTally> {
        if !region.is_valid() {
            return Err(ScoringError::InvalidRegion(region_label(region)));
        }

        let run = index
            .run(&region.chr)
            .ok_or_else(|| ScoringError::ChromosomeNotFound {
                chr: region.chr.clone(),
                region: region_label(region),
            })?;

        let frame = Span::from(region);
        let mut tally = OverlapTally::default();

        for interval in &intervals[run] {
            // sorted by start, nothing further along can reach into the frame
            if interval.start >= frame.end {
                break;
            }

            let bin = Span::from(interval);

            // ends before the frame starts, empty bins included
            if bin.end < frame.start {
                continue;
            }

            let case = OverlapCase::classify(frame, bin).ok_or_else(|| {
                ScoringError::UnhandledOverlapCase {
                    region: region_label(region),
                    interval: format!("{}:{}-{}", interval.chr, interval.start, interval.end),
                }
            })?;

            match case {
                // the bin alone supplies the region score
                OverlapCase::Containing => {
                    tally.weighted_sum = interval.score * frame.len() as f64;
                }
                _ => {
                    if !self.contributes(interval.score) {
                        continue;
                    }
                    let length = case.overlap_length(frame, bin);
                    tally.weighted_sum += length as f64 * interval.score;
                    tally.overlap_length += length;
                    tally.bins += 1;
                }
            }
        }

        Ok(tally)
    }
}
