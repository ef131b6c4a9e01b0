use std::ops::Range;

use fxhash::FxHashMap as HashMap;
use log::debug;

use roiscore_core::models::ScoreInterval;

use crate::errors::{Result, ScoringError};

///
/// Map from chromosome name to the contiguous run of score intervals belonging to it.
///
/// Offsets point into the interval slice the index was built from, which must be
/// sorted by `(chromosome, start)`. The index is invalid as soon as that slice is
/// re-sorted or modified.
///
#[derive(Debug, Clone, Default)]
pub struct ChromosomeIndex {
    runs: HashMap<String, Range<usize>>,
}

impl ChromosomeIndex {
    ///
    /// Scan the sorted intervals once and record where each chromosome starts and ends.
    ///
    /// If a chromosome shows up in more than one run (unsorted input) only its first
    /// run is kept.
    ///
    pub fn build(intervals: &[ScoreInterval]) -> Result<Self> {
        if intervals.is_empty() {
            return Err(ScoringError::NoScoreData);
        }

        let mut runs: HashMap<String, Range<usize>> = HashMap::default();
        let mut run_start = 0;

        for idx in 1..=intervals.len() {
            if idx == intervals.len() || intervals[idx].chr != intervals[run_start].chr {
                runs.entry(intervals[run_start].chr.clone())
                    .or_insert(run_start..idx);
                run_start = idx;
            }
        }

        debug!(
            "Indexed {} chromosomes over {} score intervals",
            runs.len(),
            intervals.len()
        );

        Ok(ChromosomeIndex { runs })
    }

    /// Offset of the first interval on `chr`.
    pub fn first(&self, chr: &str) -> Option<usize> {
        self.runs.get(chr).map(|run| run.start)
    }

    /// Offsets of all intervals on `chr`.
    pub fn run(&self, chr: &str) -> Option<Range<usize>> {
        self.runs.get(chr).cloned()
    }

    pub fn contains(&self, chr: &str) -> bool {
        self.runs.contains_key(chr)
    }

    pub fn chromosomes(&self) -> impl Iterator<Item = &String> {
        self.runs.keys()
    }

    pub fn len(&self) -> usize {
        self.runs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}
