/// Summary statistics over a batch of composite scores. Aggregates are
/// `None` when the batch is empty.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScoreStatistics {
    pub total_sites: usize,
    pub avg_score: Option<f64>,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    /// Population standard deviation.
    pub std_dev: Option<f64>,
}

pub fn summarize_scores(scores: &[f64]) -> ScoreStatistics {
    if scores.is_empty() {
        return ScoreStatistics::default();
    }

    let total_sites = scores.len();
    let count = total_sites as f64;
    let sum: f64 = scores.iter().sum();
    let mean = sum / count;

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &score in scores {
        min = min.min(score);
        max = max.max(score);
    }

    let variance = scores
        .iter()
        .map(|&score| {
            let d = score - mean;
            d * d
        })
        .sum::<f64>()
        / count;

    ScoreStatistics {
        total_sites,
        avg_score: Some(mean),
        min_score: Some(min),
        max_score: Some(max),
        std_dev: Some(variance.sqrt()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_batch_has_no_aggregates() {
        let stats = summarize_scores(&[]);
        assert_eq!(stats.total_sites, 0);
        assert_eq!(stats.avg_score, None);
        assert_eq!(stats.min_score, None);
        assert_eq!(stats.max_score, None);
        assert_eq!(stats.std_dev, None);
    }

    #[test]
    fn known_batch_summarizes() {
        let stats = summarize_scores(&[40.0, 60.0, 80.0, 100.0]);
        assert_eq!(stats.total_sites, 4);
        assert_eq!(stats.avg_score, Some(70.0));
        assert_eq!(stats.min_score, Some(40.0));
        assert_eq!(stats.max_score, Some(100.0));
        // population variance of {40,60,80,100} is 500
        let std_dev = stats.std_dev.expect("non-empty batch");
        assert!((std_dev - 500.0_f64.sqrt()).abs() < 1e-9);
    }

    #[test]
    fn single_score_has_zero_spread() {
        let stats = summarize_scores(&[54.03]);
        assert_eq!(stats.total_sites, 1);
        assert_eq!(stats.avg_score, Some(54.03));
        assert_eq!(stats.min_score, Some(54.03));
        assert_eq!(stats.max_score, Some(54.03));
        assert_eq!(stats.std_dev, Some(0.0));
    }
}
