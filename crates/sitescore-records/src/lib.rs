use serde::{Deserialize, Serialize};

use sitescore_core::{
    score_site, summarize_scores, PartialSiteMetrics, ScoreError, ScoreStatistics, WeightSet,
};

/// One surveyed parcel as delivered by upstream data collection. Measurement
/// fields may be absent when a survey is incomplete; scoring such a record
/// fails with `MissingMetric` rather than guessing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteRecord {
    pub site_id: u64,
    pub site_name: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default)]
    pub elevation_m: Option<f64>,
    #[serde(default)]
    pub land_type: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub solar_irradiance_kwh: Option<f64>,
    #[serde(default)]
    pub area_sqm: Option<f64>,
    #[serde(default)]
    pub grid_distance_km: Option<f64>,
    #[serde(default)]
    pub slope_degrees: Option<f64>,
    #[serde(default)]
    pub road_distance_km: Option<f64>,
}

impl SiteRecord {
    pub fn metrics(&self) -> PartialSiteMetrics {
        PartialSiteMetrics {
            solar_irradiance_kwh: self.solar_irradiance_kwh,
            area_sqm: self.area_sqm,
            grid_distance_km: self.grid_distance_km,
            slope_degrees: self.slope_degrees,
            road_distance_km: self.road_distance_km,
        }
    }
}

/// Wire form of a weight set. Aliases accept the upstream
/// `analysis_parameters` naming alongside the short keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeightsPayload {
    #[serde(alias = "solar_irradiance_weight")]
    pub solar: f64,
    #[serde(alias = "area_weight")]
    pub area: f64,
    #[serde(alias = "grid_distance_weight")]
    pub grid: f64,
    #[serde(alias = "slope_weight")]
    pub slope: f64,
    #[serde(alias = "infrastructure_weight")]
    pub infrastructure: f64,
}

impl WeightsPayload {
    /// Validates eagerly, so an invalid payload never reaches scoring.
    pub fn into_weight_set(self) -> Result<WeightSet, ScoreError> {
        let weights = WeightSet {
            solar: self.solar,
            area: self.area,
            grid: self.grid,
            slope: self.slope,
            infrastructure: self.infrastructure,
        };
        weights.validate()?;
        Ok(weights)
    }
}

/// A scored parcel, ready for the service layer to persist or expose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredSite {
    pub site_id: u64,
    pub site_name: String,
    pub solar_irradiance_score: f64,
    pub area_score: f64,
    pub grid_distance_score: f64,
    pub slope_score: f64,
    pub infrastructure_score: f64,
    pub total_suitability_score: f64,
}

pub fn evaluate_record(
    record: &SiteRecord,
    weights: &WeightSet,
) -> Result<ScoredSite, ScoreError> {
    let metrics = record.metrics().complete()?;
    let score = score_site(&metrics, weights)?;

    Ok(ScoredSite {
        site_id: record.site_id,
        site_name: record.site_name.clone(),
        solar_irradiance_score: score.breakdown.solar,
        area_score: score.breakdown.area,
        grid_distance_score: score.breakdown.grid,
        slope_score: score.breakdown.slope,
        infrastructure_score: score.breakdown.infrastructure,
        total_suitability_score: score.composite,
    })
}

/// Scores a batch with one shared weight set. Fail-fast: the first invalid
/// record aborts the batch, so callers never see partial output.
pub fn evaluate_records(
    records: &[SiteRecord],
    weights: &WeightSet,
) -> Result<Vec<ScoredSite>, ScoreError> {
    weights.validate()?;
    records
        .iter()
        .map(|record| evaluate_record(record, weights))
        .collect()
}

pub fn summarize(scored: &[ScoredSite]) -> ScoreStatistics {
    let composites: Vec<f64> = scored
        .iter()
        .map(|site| site.total_suitability_score)
        .collect();
    summarize_scores(&composites)
}
