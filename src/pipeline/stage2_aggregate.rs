use std::cmp::Ordering;

use crate::model::rows::{RawRow, ScoreRow};
use crate::model::stats::AggregateStats;
use crate::pipeline::stage1_validate::run_stage1;

/// Weighted mean and population standard deviation of the valid rows.
///
/// Returns `None` when no row survives validation.
pub fn aggregate(raw: &[RawRow]) -> Option<AggregateStats> {
    let stage1 = run_stage1(raw);
    let mut stats = aggregate_valid(&stage1.rows)?;
    stats.rows_dropped = stage1.dropped;
    Some(stats)
}

pub fn aggregate_valid(rows: &[ScoreRow]) -> Option<AggregateStats> {
    if rows.is_empty() {
        return None;
    }

    // Fixed summation order keeps the result identical for any permutation.
    let mut sorted = rows.to_vec();
    sorted.sort_by(|a, b| match a.score.total_cmp(&b.score) {
        Ordering::Equal => a.count.cmp(&b.count),
        other => other,
    });

    let mut total_count = 0u64;
    for row in &sorted {
        match total_count.checked_add(row.count) {
            Some(v) => total_count = v,
            None => {
                tracing::warn!("total count overflows u64; treating input as empty");
                return None;
            }
        }
    }
    if total_count == 0 {
        return None;
    }
    let total = total_count as f64;

    let mut score_sum = 0.0f64;
    for row in &sorted {
        score_sum += row.score * row.count as f64;
    }
    let average = score_sum / total;
    if !average.is_finite() {
        tracing::warn!("score sum overflows f64; treating input as empty");
        return None;
    }

    let mut sq_sum = 0.0f64;
    for row in &sorted {
        let diff = row.score - average;
        sq_sum += row.count as f64 * diff * diff;
    }
    let raw_variance = sq_sum / total;
    if raw_variance.is_infinite() {
        tracing::warn!("variance overflows f64; treating input as empty");
        return None;
    }
    let variance = if raw_variance > 0.0 { raw_variance } else { 0.0 };
    let std_dev = variance.sqrt();

    Some(AggregateStats {
        average,
        std_dev,
        variance,
        total_count,
        rows_used: rows.len(),
        rows_dropped: 0,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_aggregate.rs"]
mod tests;
