use crate::model::deviation::DeviationResult;
use crate::report::{CurveStatus, SummaryData, comparison_sentence, deviation_line, format_fixed};

pub fn render_report_text(summary: &SummaryData, deviation: &DeviationResult) -> String {
    let mut out = String::new();

    out.push_str("Score Distribution Report\n");
    out.push_str("=========================\n\n");

    out.push_str("1. Distribution\n");
    out.push_str(&format!(
        "Observations: {} ({} rows)\n",
        summary.input.total_count, summary.input.rows_used
    ));
    out.push_str(&format!(
        "Average: {}\n",
        format_fixed(summary.stats.average, 2)
    ));
    out.push_str(&format!(
        "Standard deviation: {}\n\n",
        format_fixed(summary.stats.std_dev, 2)
    ));

    out.push_str("2. Your score\n");
    out.push_str(&format!("Score: {}\n", deviation.candidate));
    out.push_str(&format!("{}\n", deviation_line(deviation)));
    out.push_str(&format!("{}\n\n", comparison_sentence(deviation)));

    out.push_str("3. Normal curve\n");
    out.push_str(&format!("{}\n", curve_note(summary)));

    out
}

fn curve_note(summary: &SummaryData) -> String {
    match (summary.curve.status, summary.curve.x_min, summary.curve.x_max) {
        (CurveStatus::Sampled, Some(lo), Some(hi)) => format!(
            "{} points from {} to {} (see curve.tsv)",
            summary.curve.n_points,
            format_fixed(lo, 1),
            format_fixed(hi, 1)
        ),
        (CurveStatus::Sampled, _, _) => format!("{} points (see curve.tsv)", summary.curve.n_points),
        (CurveStatus::DegenerateVariance, _, _) => {
            "Not drawn: the standard deviation is 0.".to_string()
        }
    }
}
