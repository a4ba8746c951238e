use crate::error::ScoreError;
use crate::metrics::SiteMetrics;
use crate::normalize::{
    area_score, grid_score, infrastructure_score, slope_score, solar_score, Criterion,
};
use crate::weights::WeightSet;

/// Per-criterion normalized scores, each in [0, 100]. Built fresh on every
/// call and never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub solar: f64,
    pub area: f64,
    pub grid: f64,
    pub slope: f64,
    pub infrastructure: f64,
}

impl ScoreBreakdown {
    pub fn get(&self, criterion: Criterion) -> f64 {
        match criterion {
            Criterion::Solar => self.solar,
            Criterion::Area => self.area,
            Criterion::Grid => self.grid,
            Criterion::Slope => self.slope,
            Criterion::Infrastructure => self.infrastructure,
        }
    }
}

/// Result of scoring one site: the weighted composite plus the breakdown it
/// was derived from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SuitabilityScore {
    /// Weighted sum of the breakdown, rounded to two decimals, in [0, 100].
    pub composite: f64,
    pub breakdown: ScoreBreakdown,
}

/// Scores one site: validates the weights, normalizes each measurement, and
/// combines them into the composite. Pure and deterministic; identical
/// inputs produce bit-identical output.
pub fn score_site(
    metrics: &SiteMetrics,
    weights: &WeightSet,
) -> Result<SuitabilityScore, ScoreError> {
    weights.validate()?;

    let breakdown = ScoreBreakdown {
        solar: solar_score(metrics.solar_irradiance_kwh),
        area: area_score(metrics.area_sqm),
        grid: grid_score(metrics.grid_distance_km),
        slope: slope_score(metrics.slope_degrees),
        infrastructure: infrastructure_score(metrics.road_distance_km),
    };

    let composite: f64 = Criterion::ALL
        .iter()
        .map(|&criterion| breakdown.get(criterion) * weights.get(criterion))
        .sum();

    Ok(SuitabilityScore {
        composite: round2(composite),
        breakdown,
    })
}

/// Rounds half away from zero (`f64::round` semantics) to two decimals.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
