use crate::model::rows::{RawRow, ScoreRow};
use crate::pipeline::stage4_deviation::ScoreError;

#[derive(Debug, Clone)]
pub struct Stage1Output {
    pub rows: Vec<ScoreRow>,
    pub dropped: usize,
}

pub fn run_stage1(raw: &[RawRow]) -> Stage1Output {
    let rows = validate_rows(raw);
    let dropped = raw.len() - rows.len();
    if dropped > 0 {
        tracing::debug!(dropped, kept = rows.len(), "discarded invalid rows");
    }
    Stage1Output { rows, dropped }
}

/// Keeps rows whose score is a finite number and whose count is a positive integer.
pub fn validate_rows(raw: &[RawRow]) -> Vec<ScoreRow> {
    raw.iter().filter_map(parse_row).collect()
}

pub fn parse_row(raw: &RawRow) -> Option<ScoreRow> {
    let score = parse_finite(&raw.score)?;
    let count = raw.count.trim().parse::<u64>().ok()?;
    if count == 0 {
        return None;
    }
    Some(ScoreRow { score, count })
}

pub fn parse_candidate_score(input: &str) -> Result<f64, ScoreError> {
    parse_finite(input).ok_or_else(|| ScoreError::InvalidCandidateScore(input.trim().to_string()))
}

fn parse_finite(field: &str) -> Option<f64> {
    let field = field.trim();
    if field.is_empty() {
        return None;
    }
    field.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_validate.rs"]
mod tests;
