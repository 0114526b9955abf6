use crate::model::deviation::{DeviationResult, DeviationScale};
use crate::model::stats::AggregateStats;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ScoreError {
    #[error("invalid candidate score: {0:?}")]
    InvalidCandidateScore(String),
    #[error("no statistics computed yet; calculate the distribution first")]
    NoStatistics,
}

pub fn score_deviation(
    candidate: f64,
    stats: &AggregateStats,
) -> Result<DeviationResult, ScoreError> {
    score_deviation_scaled(candidate, stats, &DeviationScale::default_v1())
}

pub fn score_deviation_scaled(
    candidate: f64,
    stats: &AggregateStats,
    scale: &DeviationScale,
) -> Result<DeviationResult, ScoreError> {
    if !candidate.is_finite() {
        return Err(ScoreError::InvalidCandidateScore(candidate.to_string()));
    }
    let score_difference = candidate - stats.average;
    let deviation_value = if stats.std_dev == 0.0 {
        None
    } else {
        let z = score_difference / stats.std_dev;
        Some(round_to_one_decimal(z * scale.scale + scale.mean))
    };
    Ok(DeviationResult {
        candidate,
        deviation_value,
        score_difference,
    })
}

/// Rounds half away from zero at the second decimal.
pub fn round_to_one_decimal(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_deviation.rs"]
mod tests;
