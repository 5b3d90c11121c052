//! Summary statistics over score distributions

/// Spread of a score distribution
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoreDistribution {
    pub mean: f64,
    /// Population variance
    pub variance: f64,
    pub std_dev: f64,
    pub min: f64,
    pub max: f64,
    /// Shannon entropy `-Σ p ln p`, zero scores contribute nothing
    pub entropy: f64,
}

/// Mean, variance, extremes and entropy of `scores`. Empty input gives all zeros.
pub fn score_distribution(scores: &[f64]) -> ScoreDistribution {
    if scores.is_empty() {
        return ScoreDistribution::default();
    }

    let n = scores.len() as f64;
    let mean = scores.iter().sum::<f64>() / n;
    let variance = scores.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
    let min = scores.iter().copied().fold(f64::INFINITY, f64::min);
    let max = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let entropy = -scores
        .iter()
        .filter(|&&p| p > 0.0)
        .map(|&p| p * p.ln())
        .sum::<f64>();

    ScoreDistribution {
        mean,
        variance,
        std_dev: variance.sqrt(),
        min,
        max,
        entropy,
    }
}
