use crate::error::ScoreError;
use crate::normalize::Criterion;

/// Absolute tolerance on the weight-sum invariant.
pub const WEIGHT_SUM_TOLERANCE: f64 = 0.001;

/// Relative importance of each criterion. The five fields must sum to 1.0
/// within [`WEIGHT_SUM_TOLERANCE`] and each lie in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WeightSet {
    pub solar: f64,
    pub area: f64,
    pub grid: f64,
    pub slope: f64,
    pub infrastructure: f64,
}

/// Stock weighting applied when the caller supplies none. Sums to 1.0 exactly.
pub const DEFAULT_WEIGHTS: WeightSet = WeightSet {
    solar: 0.35,
    area: 0.25,
    grid: 0.20,
    slope: 0.15,
    infrastructure: 0.05,
};

impl Default for WeightSet {
    fn default() -> Self {
        DEFAULT_WEIGHTS
    }
}

impl WeightSet {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Solar => self.solar,
            Criterion::Area => self.area,
            Criterion::Grid => self.grid,
            Criterion::Slope => self.slope,
            Criterion::Infrastructure => self.infrastructure,
        }
    }

    pub fn sum(&self) -> f64 {
        self.solar + self.area + self.grid + self.slope + self.infrastructure
    }

    /// The sum invariant is checked before individual ranges, so a set that
    /// violates both reports `InvalidWeightSum`.
    pub fn validate(&self) -> Result<(), ScoreError> {
        let sum = self.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ScoreError::InvalidWeightSum { sum });
        }

        for criterion in Criterion::ALL {
            let value = self.get(criterion);
            if !(0.0..=1.0).contains(&value) {
                return Err(ScoreError::WeightOutOfRange { criterion, value });
            }
        }

        Ok(())
    }
}
