use serde::Serialize;

use crate::model::deviation::{DeviationResult, ScoreComparison};
use crate::model::stats::AggregateStats;

pub mod json;
pub mod text;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveStatus {
    Sampled,
    DegenerateVariance,
}

#[derive(Debug, Clone, Serialize)]
pub struct ToolMeta {
    pub name: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct InputSummary {
    pub source: String,
    pub rows_read: usize,
    pub rows_used: usize,
    pub rows_dropped: usize,
    pub total_count: u64,
}

#[derive(Debug, Clone, Serialize)]
pub struct StatsSummary {
    pub average: f64,
    pub std_dev: f64,
    pub variance: f64,
}

#[derive(Debug, Clone, Serialize)]
pub struct CurveSummary {
    pub status: CurveStatus,
    pub n_points: usize,
    pub x_min: Option<f64>,
    pub x_max: Option<f64>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeviationSummary {
    pub candidate: f64,
    pub deviation_value: Option<f64>,
    pub score_difference: f64,
    pub comparison: ScoreComparison,
}

#[derive(Debug, Clone, Serialize)]
pub struct SummaryData {
    pub tool: ToolMeta,
    pub input: InputSummary,
    pub stats: StatsSummary,
    pub curve: CurveSummary,
    pub deviation: Option<DeviationSummary>,
}

impl From<&AggregateStats> for StatsSummary {
    fn from(s: &AggregateStats) -> Self {
        Self {
            average: s.average,
            std_dev: s.std_dev,
            variance: s.variance,
        }
    }
}

impl From<&DeviationResult> for DeviationSummary {
    fn from(d: &DeviationResult) -> Self {
        Self {
            candidate: d.candidate,
            deviation_value: d.deviation_value,
            score_difference: d.score_difference,
            comparison: d.comparison(),
        }
    }
}

/// Fixed-point display with `digits` decimals; `-0.00` prints as `0.00`.
pub fn format_fixed(v: f64, digits: usize) -> String {
    let s = format!("{:.*}", digits, v);
    if s.starts_with('-') && s[1..].chars().all(|c| c == '0' || c == '.') {
        s[1..].to_string()
    } else {
        s
    }
}

pub fn comparison_sentence(result: &DeviationResult) -> String {
    match result.comparison() {
        ScoreComparison::Above => format!(
            "{} points above the average.",
            format_fixed(result.score_difference, 2)
        ),
        ScoreComparison::Below => format!(
            "{} points below the average.",
            format_fixed(result.score_difference.abs(), 2)
        ),
        ScoreComparison::Equal => "Equal to the average.".to_string(),
    }
}

pub fn deviation_line(result: &DeviationResult) -> String {
    match result.deviation_value {
        Some(v) => format!("Deviation value: {}", format_fixed(v, 1)),
        None => "Deviation value cannot be computed (standard deviation is 0)".to_string(),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
