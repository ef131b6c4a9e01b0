use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::options::ScoringOptions;

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum Discretization {
    Bounds(Vec<f64>),
    Quantiles(u32),
    Intervals(u32),
}

impl Discretization {
    /// Tag used when naming the discretized output file.
    pub fn output_tag(&self) -> &'static str {
        match self {
            Discretization::Bounds(_) => "scored_discrete_by_bounds",
            Discretization::Quantiles(_) => "scored_discrete_by_quantile",
            Discretization::Intervals(_) => "scored_discrete_by_interval",
        }
    }
}

///
/// Settings for a scoring run, as read from a TOML file:
///
/// ```toml
/// ignore_negative = true
/// count_bins = true
/// discretize_ignored = true
///
/// [discretization]
/// quantiles = 4
/// ```
///
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(default)]
pub struct ScoringConfig {
    pub ignore_negative: bool,
    pub ignore_zero: bool,
    pub count_bins: bool,
    /// Apply the ignore flags during discretization too.
    pub discretize_ignored: bool,
    pub discretization: Option<Discretization>,
}

#[derive(Error, Debug)]
pub enum ScoringConfigError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Toml(#[from] toml::de::Error),
    #[error("Invalid discretization in scoring config: {0}")]
    InvalidDiscretization(String),
}

pub type ScoringConfigResult<T> = std::result::Result<T, ScoringConfigError>;

impl ScoringConfig {
    /// Options for the scoring pass.
    pub fn scoring_options(&self) -> ScoringOptions {
        ScoringOptions {
            ignore_negative: self.ignore_negative,
            ignore_zero: self.ignore_zero,
            count_bins: self.count_bins,
        }
    }

    /// Options for the discretization pass. The ignore flags only apply when
    /// `discretize_ignored` is set.
    pub fn discretization_options(&self) -> ScoringOptions {
        ScoringOptions {
            ignore_negative: self.ignore_negative && self.discretize_ignored,
            ignore_zero: self.ignore_zero && self.discretize_ignored,
            count_bins: false,
        }
    }

    pub fn validate(&self) -> ScoringConfigResult<()> {
        match &self.discretization {
            Some(Discretization::Quantiles(0)) | Some(Discretization::Intervals(0)) => Err(
                ScoringConfigError::InvalidDiscretization("class count must be at least 1".into()),
            ),
            Some(Discretization::Bounds(bounds))
                if !bounds.windows(2).all(|pair| pair[0] <= pair[1]) =>
            {
                Err(ScoringConfigError::InvalidDiscretization(format!(
                    "bounds must be ascending, got {:?}",
                    bounds
                )))
            }
            _ => Ok(()),
        }
    }
}

impl TryFrom<&Path> for ScoringConfig {
    type Error = ScoringConfigError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let toml_str = read_to_string(path)?;
        let config: ScoringConfig = toml::from_str(&toml_str)?;
        config.validate()?;
        Ok(config)
    }
}
