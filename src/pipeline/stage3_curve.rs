use std::f64::consts::PI;

use crate::model::curve::{CurveParams, CurvePoint};
use crate::model::stats::AggregateStats;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid point count {0}: the curve needs at least 2 points")]
    InvalidPointCount(usize),
}

pub fn validate_params(params: &CurveParams) -> Result<(), ConfigError> {
    if params.num_points < 2 {
        return Err(ConfigError::InvalidPointCount(params.num_points));
    }
    Ok(())
}

/// Samples the normal curve for `stats`, or `None` when there is no spread to draw.
pub fn build_curve(stats: &AggregateStats, params: &CurveParams) -> Option<Vec<CurvePoint>> {
    if !stats.has_spread() || params.num_points < 2 {
        return None;
    }
    Some(sample_curve(
        stats.average,
        stats.std_dev,
        params.num_points,
        params.span_sigmas,
    ))
}

/// Samples the normal density over `average ± 4·std_dev`.
///
/// Callers must skip sampling when `std_dev <= 0`; an empty curve is returned in that case.
pub fn sample_normal_curve(average: f64, std_dev: f64, num_points: usize) -> Vec<CurvePoint> {
    sample_curve(
        average,
        std_dev,
        num_points,
        CurveParams::default_v1().span_sigmas,
    )
}

fn sample_curve(average: f64, std_dev: f64, num_points: usize, span_sigmas: f64) -> Vec<CurvePoint> {
    if std_dev.is_nan() || std_dev <= 0.0 || num_points < 2 {
        return Vec::new();
    }
    let start = average - span_sigmas * std_dev;
    let end = average + span_sigmas * std_dev;
    let step = (end - start) / (num_points - 1) as f64;

    let mut out = Vec::with_capacity(num_points);
    for i in 0..num_points {
        let x = if i + 1 == num_points {
            end
        } else {
            start + step * i as f64
        };
        out.push(CurvePoint {
            x,
            label: format!("{:.1}", x),
            density: normal_pdf(x, average, std_dev),
        });
    }
    out
}

pub fn normal_pdf(x: f64, average: f64, std_dev: f64) -> f64 {
    let exponent = -(x - average).powi(2) / (2.0 * std_dev * std_dev);
    (1.0 / (std_dev * (2.0 * PI).sqrt())) * exponent.exp()
}

/// Trapezoidal area under the sampled curve.
pub fn trapezoid_area(points: &[CurvePoint]) -> f64 {
    points
        .windows(2)
        .map(|w| (w[1].x - w[0].x) * (w[0].density + w[1].density) / 2.0)
        .sum()
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_curve.rs"]
mod tests;
