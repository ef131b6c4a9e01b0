use statrs::statistics::{Data, OrderStatistics};

///
/// A collection of values that can answer "value at fraction f" queries.
///
/// Quantile discretization only needs elements to be added one at a time and
/// quantiles to be read back, so any distribution estimate fits behind this trait.
///
pub trait QuantileDistribution {
    fn add_element(&mut self, value: f64);

    /// Value at `fraction` (in `[0, 1]`) of the distribution. `NaN` when empty.
    fn quantile(&mut self, fraction: f64) -> f64;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

///
/// Empirical distribution of the values added so far.
///
/// Quantiles are interpolated the way `statrs` does for [OrderStatistics::quantile]
/// (the median-unbiased estimate, type 8 in Hyndman & Fan). The fraction `1.0` always
/// gives the largest value.
///
#[derive(Debug, Clone, Default)]
pub struct EmpiricalDistribution {
    values: Vec<f64>,
}

impl EmpiricalDistribution {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FromIterator<f64> for EmpiricalDistribution {
    fn from_iter<T: IntoIterator<Item = f64>>(iter: T) -> Self {
        EmpiricalDistribution {
            values: iter.into_iter().collect(),
        }
    }
}

impl QuantileDistribution for EmpiricalDistribution {
    fn add_element(&mut self, value: f64) {
        self.values.push(value);
    }

    fn quantile(&mut self, fraction: f64) -> f64 {
        Data::new(self.values.as_mut_slice()).quantile(fraction)
    }

    fn len(&self) -> usize {
        self.values.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::*;

    #[fixture]
    fn distribution() -> EmpiricalDistribution {
        let mut distribution = EmpiricalDistribution::new();
        for value in [4.0, 1.0, 3.0, 2.0] {
            distribution.add_element(value);
        }
        distribution
    }

    #[rstest]
    fn test_quantiles(mut distribution: EmpiricalDistribution) {
        assert_eq!(distribution.len(), 4);
        assert_eq!(distribution.quantile(0.5), 2.5);
        assert_eq!(distribution.quantile(1.0), 4.0);
        assert_eq!(distribution.quantile(0.0), 1.0);
    }

    #[rstest]
    fn test_quantiles_are_monotone(mut distribution: EmpiricalDistribution) {
        let quantiles: Vec<f64> = (1..=10)
            .map(|i| distribution.quantile(i as f64 / 10.0))
            .collect();
        assert!(quantiles.windows(2).all(|w| w[0] <= w[1]));
    }

    #[rstest]
    fn test_empty_distribution() {
        let mut distribution: EmpiricalDistribution = std::iter::empty().collect();
        assert!(distribution.is_empty());
        assert!(distribution.quantile(0.5).is_nan());
    }
}
