use crate::model::curve::{CurveParams, CurvePoint};
use crate::model::deviation::DeviationResult;
use crate::model::rows::RawRow;
use crate::model::stats::AggregateStats;
use crate::pipeline::stage1_validate::parse_candidate_score;
use crate::pipeline::stage2_aggregate::aggregate;
use crate::pipeline::stage3_curve::build_curve;
use crate::pipeline::stage4_deviation::{ScoreError, score_deviation};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    NoStats,
    Stats,
    Scored,
}

/// Caller-side holder for one analysis.
///
/// Every upstream change discards the results derived from it: new rows drop
/// the statistics, curve and deviation; recalculating drops the deviation.
#[derive(Debug, Clone, Default)]
pub struct Analysis {
    rows: Vec<RawRow>,
    params: CurveParams,
    stats: Option<AggregateStats>,
    curve: Option<Vec<CurvePoint>>,
    deviation: Option<DeviationResult>,
}

impl Analysis {
    pub fn new(params: CurveParams) -> Self {
        Self {
            params,
            ..Self::default()
        }
    }

    pub fn stage(&self) -> Stage {
        match (&self.stats, &self.deviation) {
            (None, _) => Stage::NoStats,
            (Some(_), None) => Stage::Stats,
            (Some(_), Some(_)) => Stage::Scored,
        }
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn stats(&self) -> Option<&AggregateStats> {
        self.stats.as_ref()
    }

    pub fn curve(&self) -> Option<&[CurvePoint]> {
        self.curve.as_deref()
    }

    pub fn deviation(&self) -> Option<&DeviationResult> {
        self.deviation.as_ref()
    }

    pub fn set_rows(&mut self, rows: Vec<RawRow>) {
        self.rows = rows;
        self.invalidate();
    }

    pub fn push_row(&mut self, row: RawRow) {
        self.rows.push(row);
        self.invalidate();
    }

    pub fn remove_row(&mut self, index: usize) -> Option<RawRow> {
        if index >= self.rows.len() {
            return None;
        }
        let removed = self.rows.remove(index);
        self.invalidate();
        Some(removed)
    }

    /// Recomputes statistics and curve from the current rows.
    ///
    /// Returns `None` when no row is usable.
    pub fn calculate(&mut self) -> Option<&AggregateStats> {
        self.invalidate();
        let stats = aggregate(&self.rows)?;
        self.curve = build_curve(&stats, &self.params);
        if self.curve.is_none() {
            tracing::warn!(
                average = stats.average,
                "standard deviation is 0; distribution curve skipped"
            );
        }
        self.stats = Some(stats);
        self.stats.as_ref()
    }

    pub fn score(&mut self, candidate: &str) -> Result<&DeviationResult, ScoreError> {
        self.deviation = None;
        let stats = self.stats.as_ref().ok_or(ScoreError::NoStatistics)?;
        let value = parse_candidate_score(candidate)?;
        let result = score_deviation(value, stats)?;
        let stored: &DeviationResult = self.deviation.insert(result);
        Ok(stored)
    }

    fn invalidate(&mut self) {
        self.stats = None;
        self.curve = None;
        self.deviation = None;
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/session.rs"]
mod tests;
