use std::fmt;

/// One of the five measured physical factors that feed the composite score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Solar,
    Area,
    Grid,
    Slope,
    Infrastructure,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::Solar,
        Criterion::Area,
        Criterion::Grid,
        Criterion::Slope,
        Criterion::Infrastructure,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Criterion::Solar => "solar",
            Criterion::Area => "area",
            Criterion::Grid => "grid",
            Criterion::Slope => "slope",
            Criterion::Infrastructure => "infrastructure",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Average daily solar irradiance (kWh/m²/day). Saturates at 5.5, floor below 3.0.
pub fn solar_score(solar_irradiance_kwh: f64) -> f64 {
    if solar_irradiance_kwh >= 5.5 {
        100.0
    } else if solar_irradiance_kwh < 3.0 {
        0.0
    } else {
        (solar_irradiance_kwh - 3.0) / 2.5 * 100.0
    }
}

/// Usable area (m²). Saturates at 50 000 m², floor below 5 000 m².
pub fn area_score(area_sqm: f64) -> f64 {
    if area_sqm >= 50_000.0 {
        100.0
    } else if area_sqm < 5_000.0 {
        0.0
    } else {
        (area_sqm - 5_000.0) / 45_000.0 * 100.0
    }
}

/// Distance to the nearest grid connection (km). Grid hookup is impractical
/// beyond 20 km, which anchors the zero end of the curve.
pub fn grid_score(grid_distance_km: f64) -> f64 {
    if grid_distance_km <= 1.0 {
        100.0
    } else if grid_distance_km >= 20.0 {
        0.0
    } else {
        100.0 - (grid_distance_km - 1.0) / 19.0 * 100.0
    }
}

/// Terrain slope (degrees, 0 = flat). Two tiers: 5 points/degree over
/// [5, 15], then 10 points/degree over (15, 20]. The kink at 15° evaluates
/// to exactly 50.
pub fn slope_score(slope_degrees: f64) -> f64 {
    if slope_degrees <= 5.0 {
        100.0
    } else if slope_degrees > 20.0 {
        0.0
    } else if slope_degrees <= 15.0 {
        100.0 - (slope_degrees - 5.0) / 10.0 * 50.0
    } else {
        50.0 - (slope_degrees - 15.0) / 5.0 * 50.0
    }
}

/// Distance to the nearest road (km). Saturates within 0.5 km, floor at 5 km.
pub fn infrastructure_score(road_distance_km: f64) -> f64 {
    if road_distance_km <= 0.5 {
        100.0
    } else if road_distance_km >= 5.0 {
        0.0
    } else {
        100.0 - (road_distance_km - 0.5) / 4.5 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn solar_boundaries_saturate() {
        assert_eq!(solar_score(5.5), 100.0);
        assert_eq!(solar_score(7.2), 100.0);
        assert_eq!(solar_score(2.999), 0.0);
        assert_eq!(solar_score(-4.0), 0.0);
        // 3.0 sits on the interpolated branch and happens to land on 0
        assert_eq!(solar_score(3.0), 0.0);
        assert!(approx(solar_score(4.25), 50.0));
    }

    #[test]
    fn area_boundaries_saturate() {
        assert_eq!(area_score(50_000.0), 100.0);
        assert_eq!(area_score(1_000_000.0), 100.0);
        assert_eq!(area_score(4_999.0), 0.0);
        assert_eq!(area_score(-1.0), 0.0);
        assert!(approx(area_score(27_500.0), 50.0));
    }

    #[test]
    fn grid_boundaries_saturate() {
        assert_eq!(grid_score(1.0), 100.0);
        assert_eq!(grid_score(0.0), 100.0);
        assert_eq!(grid_score(20.0), 0.0);
        assert_eq!(grid_score(300.0), 0.0);
        assert!(approx(grid_score(10.5), 50.0));
    }

    #[test]
    fn slope_kink_is_exact() {
        assert_eq!(slope_score(5.0), 100.0);
        assert_eq!(slope_score(15.0), 50.0);
        assert_eq!(slope_score(20.0), 0.0);
        assert_eq!(slope_score(20.0001), 0.0);
        assert!(approx(slope_score(10.0), 75.0));
        assert!(approx(slope_score(17.5), 25.0));
    }

    #[test]
    fn infrastructure_boundaries_saturate() {
        assert_eq!(infrastructure_score(0.5), 100.0);
        assert_eq!(infrastructure_score(0.0), 100.0);
        assert_eq!(infrastructure_score(5.0), 0.0);
        assert_eq!(infrastructure_score(50.0), 0.0);
        assert!(approx(infrastructure_score(2.75), 50.0));
    }

    #[test]
    fn curves_are_monotonic_and_bounded() {
        let inputs: Vec<f64> = (-100..2100).map(|i| f64::from(i) * 0.05).collect();
        let curves: [(fn(f64) -> f64, bool); 5] = [
            (solar_score, true),
            (area_score, true),
            (grid_score, false),
            (slope_score, false),
            (infrastructure_score, false),
        ];

        for (curve, increasing) in curves {
            let mut prev = None;
            for &x in &inputs {
                let y = curve(x);
                assert!((0.0..=100.0).contains(&y), "curve escaped [0,100] at {x}");
                if let Some(p) = prev {
                    if increasing {
                        assert!(y >= p, "expected non-decreasing at {x}");
                    } else {
                        assert!(y <= p, "expected non-increasing at {x}");
                    }
                }
                prev = Some(y);
            }
        }
    }

    #[test]
    fn criterion_keys_are_stable() {
        let keys: Vec<&str> = Criterion::ALL.iter().map(|c| c.key()).collect();
        assert_eq!(keys, ["solar", "area", "grid", "slope", "infrastructure"]);
    }
}
