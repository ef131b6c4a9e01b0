use log::debug;

use roiscore_core::models::Region;

use crate::distribution::{EmpiricalDistribution, QuantileDistribution};
use crate::errors::{Result, ScoringError};
use crate::scorer::RoiScorer;

fn validate_bounds(bounds: &[f64]) -> Result<()> {
    let ascending = bounds.windows(2).all(|pair| pair[0] <= pair[1]);
    match ascending && !bounds.iter().any(|b| b.is_nan()) {
        true => Ok(()),
        false => Err(ScoringError::UnsortedBounds(bounds.to_vec())),
    }
}

impl RoiScorer {
    ///
    /// Class of a single score. `0` for scores the ignore flags exclude, otherwise the
    /// 1-based index of the first bound the score does not exceed, or
    /// `bounds.len() + 1` if it exceeds them all.
    ///
    pub fn class_of(&self, score: f64, bounds: &[f64]) -> usize {
        let options = self.options();

        if options.ignore_zero && score == 0.0 {
            return 0;
        }
        if options.ignore_negative && score < 0.0 {
            return 0;
        }

        bounds
            .iter()
            .position(|&bound| score <= bound)
            .map_or(bounds.len() + 1, |idx| idx + 1)
    }

    ///
    /// Scores that make up the distribution the class bounds are derived from.
    /// Positive scores always count; zeros and negatives only when not ignored.
    ///
    pub fn source_scores(&self, regions: &[Region]) -> Vec<f64> {
        let options = self.options();

        regions
            .iter()
            .map(|region| region.score)
            .filter(|&score| {
                score > 0.0
                    || (score == 0.0 && !options.ignore_zero)
                    || (score < 0.0 && !options.ignore_negative)
            })
            .collect()
    }

    ///
    /// Replace each region score by its class under ascending upper `bounds`.
    ///
    /// A score equal to a bound falls into that bound's class.
    ///
    pub fn discretize_by_bounds(&self, regions: &mut [Region], bounds: &[f64]) -> Result<()> {
        validate_bounds(bounds)?;

        for region in regions.iter_mut() {
            region.score = self.class_of(region.score, bounds) as f64;
        }

        Ok(())
    }

    ///
    /// Discretize into `classes` quantile classes of the current scores.
    ///
    /// # Returns
    /// The upper bounds used, one per class.
    pub fn discretize_by_quantiles(&self, regions: &mut [Region], classes: u32) -> Result<Vec<f64>> {
        self.discretize_by_quantiles_with(regions, classes, EmpiricalDistribution::new())
    }

    ///
    /// Same as [RoiScorer::discretize_by_quantiles] with a caller supplied distribution
    /// estimate. The distribution should be empty when passed in.
    ///
    pub fn discretize_by_quantiles_with<D: QuantileDistribution>(
        &self,
        regions: &mut [Region],
        classes: u32,
        mut distribution: D,
    ) -> Result<Vec<f64>> {
        if classes == 0 {
            return Err(ScoringError::InvalidClassCount);
        }

        for score in self.source_scores(regions) {
            distribution.add_element(score);
        }
        if distribution.is_empty() {
            return Err(ScoringError::EmptyScoreSet);
        }

        let bounds: Vec<f64> = (1..=classes)
            .map(|i| distribution.quantile(f64::from(i) / f64::from(classes)))
            .collect();

        debug!("Quantile bounds: {:?}", bounds);

        self.discretize_by_bounds(regions, &bounds)?;

        Ok(bounds)
    }

    ///
    /// Discretize into `classes` equal-width intervals between the smallest and the
    /// largest score.
    ///
    /// # Returns
    /// The upper bounds used, one per class.
    pub fn discretize_by_intervals(&self, regions: &mut [Region], classes: u32) -> Result<Vec<f64>> {
        if classes == 0 {
            return Err(ScoringError::InvalidClassCount);
        }

        let mut scores = self.source_scores(regions);
        scores.sort_by(f64::total_cmp);

        let (Some(&min), Some(&max)) = (scores.first(), scores.last()) else {
            return Err(ScoringError::EmptyScoreSet);
        };

        let width = (max - min) / f64::from(classes);
        let bounds: Vec<f64> = (1..=classes)
            .map(|i| min + width * f64::from(i))
            .collect();

        debug!("Interval bounds: {:?}", bounds);

        self.discretize_by_bounds(regions, &bounds)?;

        Ok(bounds)
    }
}
