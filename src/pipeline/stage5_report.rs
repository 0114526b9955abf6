use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::model::curve::CurvePoint;
use crate::model::deviation::DeviationResult;
use crate::model::stats::AggregateStats;
use crate::report::json::render_summary_json;
use crate::report::text::render_report_text;
use crate::report::{
    CurveStatus, CurveSummary, DeviationSummary, InputSummary, StatsSummary, SummaryData, ToolMeta,
};

#[derive(Debug, Clone)]
pub struct Stage5Input<'a> {
    pub source: String,
    pub rows_read: usize,
    pub stats: &'a AggregateStats,
    pub curve: Option<&'a [CurvePoint]>,
    pub deviation: Option<&'a DeviationResult>,
    pub tool_name: String,
    pub tool_version: String,
}

pub fn write_reports(input: &Stage5Input<'_>, out_dir: &Path) -> std::io::Result<()> {
    fs::create_dir_all(out_dir)?;

    let summary = build_summary(input);
    let summary_path = out_dir.join("summary.json");
    write_text(&summary_path, &render_summary_json(&summary)?)?;
    tracing::info!(path = %summary_path.display(), "wrote summary");

    if let Some(curve) = input.curve {
        let curve_path = out_dir.join("curve.tsv");
        write_curve_tsv(curve, &curve_path)?;
        tracing::info!(path = %curve_path.display(), points = curve.len(), "wrote curve");
    }

    match input.deviation {
        Some(deviation) => {
            let report_path = out_dir.join("report.txt");
            write_text(&report_path, &render_report_text(&summary, deviation))?;
            tracing::info!(path = %report_path.display(), "wrote report");
        }
        None => {
            tracing::info!("no candidate score given; report.txt skipped");
        }
    }

    Ok(())
}

pub fn build_summary(input: &Stage5Input<'_>) -> SummaryData {
    let curve = match input.curve {
        Some(points) => CurveSummary {
            status: CurveStatus::Sampled,
            n_points: points.len(),
            x_min: points.first().map(|p| p.x),
            x_max: points.last().map(|p| p.x),
        },
        None => CurveSummary {
            status: CurveStatus::DegenerateVariance,
            n_points: 0,
            x_min: None,
            x_max: None,
        },
    };

    SummaryData {
        tool: ToolMeta {
            name: input.tool_name.clone(),
            version: input.tool_version.clone(),
        },
        input: InputSummary {
            source: input.source.clone(),
            rows_read: input.rows_read,
            rows_used: input.stats.rows_used,
            rows_dropped: input.stats.rows_dropped,
            total_count: input.stats.total_count,
        },
        stats: StatsSummary::from(input.stats),
        curve,
        deviation: input.deviation.map(DeviationSummary::from),
    }
}

fn write_curve_tsv(curve: &[CurvePoint], path: &Path) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    writeln!(w, "x_label\tx\tdensity")?;
    for p in curve {
        writeln!(w, "{}\t{}\t{:e}", p.label, p.x, p.density)?;
    }
    w.flush()?;
    Ok(())
}

fn write_text(path: &Path, contents: &str) -> std::io::Result<()> {
    let mut w = BufWriter::new(File::create(path)?);
    w.write_all(contents.as_bytes())?;
    w.flush()?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
