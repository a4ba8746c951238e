use crate::error::ScoreError;

/// Raw physical measurements for one candidate parcel. Immutable input to
/// the scoring engine; the engine never writes back into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SiteMetrics {
    /// Average daily solar irradiance (kWh/m²/day).
    pub solar_irradiance_kwh: f64,
    /// Usable area (m²).
    pub area_sqm: f64,
    /// Distance to the nearest grid connection (km).
    pub grid_distance_km: f64,
    /// Terrain slope (degrees, 0 = flat).
    pub slope_degrees: f64,
    /// Distance to the nearest road (km).
    pub road_distance_km: f64,
}

/// A survey record as upstream delivers it: any measurement may still be
/// unfilled. Completing it is the only path into [`SiteMetrics`], so a
/// missing field is caught before any scoring happens.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PartialSiteMetrics {
    pub solar_irradiance_kwh: Option<f64>,
    pub area_sqm: Option<f64>,
    pub grid_distance_km: Option<f64>,
    pub slope_degrees: Option<f64>,
    pub road_distance_km: Option<f64>,
}

impl PartialSiteMetrics {
    /// Reports the first absent field in declaration order.
    pub fn complete(self) -> Result<SiteMetrics, ScoreError> {
        Ok(SiteMetrics {
            solar_irradiance_kwh: require(self.solar_irradiance_kwh, "solar_irradiance_kwh")?,
            area_sqm: require(self.area_sqm, "area_sqm")?,
            grid_distance_km: require(self.grid_distance_km, "grid_distance_km")?,
            slope_degrees: require(self.slope_degrees, "slope_degrees")?,
            road_distance_km: require(self.road_distance_km, "road_distance_km")?,
        })
    }
}

fn require(value: Option<f64>, field: &'static str) -> Result<f64, ScoreError> {
    value.ok_or(ScoreError::MissingMetric { field })
}
