use std::path::PathBuf;

use clap::{Parser, Subcommand};
use kira_tscore::input::{InputError, load_input};
use kira_tscore::model::curve::CurveParams;
use kira_tscore::pipeline::session::Analysis;
use kira_tscore::pipeline::stage3_curve::{ConfigError, validate_params};
use kira_tscore::pipeline::stage4_deviation::ScoreError;
use kira_tscore::pipeline::stage5_report::{Stage5Input, write_reports};
use kira_tscore::report::{comparison_sentence, deviation_line, format_fixed};
use tracing::{info, warn};

#[derive(Parser, Debug)]
#[command(name = "kira-tscore", version)]
#[command(about = "Weighted score statistics, normal curve and deviation score from a frequency table", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Compute statistics, sample the curve and optionally score one candidate
    Run(RunArgs),
}

#[derive(clap::Args, Debug, Clone)]
struct RunArgs {
    /// Frequency table (score and count per line; .gz accepted)
    #[arg(short, long, value_name = "FILE")]
    input: Option<PathBuf>,

    /// Extra row as SCORE:COUNT (repeatable)
    #[arg(short, long = "row", value_name = "SCORE:COUNT")]
    rows: Vec<String>,

    /// Output directory for summary.json, curve.tsv and report.txt
    #[arg(short, long, value_name = "DIR")]
    out: PathBuf,

    /// Candidate score to convert into a deviation value
    #[arg(short, long, value_name = "SCORE", allow_hyphen_values = true)]
    score: Option<String>,

    /// Number of curve samples
    #[arg(long, default_value_t = 101)]
    points: usize,

    /// Only log warnings and errors
    #[arg(short, long, default_value_t = false)]
    quiet: bool,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error("no valid rows: enter at least one row with a numeric score and a positive count")]
    EmptyInput,
    #[error("failed to write reports: {0}")]
    Report(#[from] std::io::Error),
}

fn main() {
    let cli = Cli::parse();
    let Command::Run(args) = cli.command;
    kira_tscore::tracing::init_logging(args.quiet);
    if let Err(err) = run(&args) {
        tracing::error!("{err}");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(args: &RunArgs) -> Result<(), RunError> {
    let params = CurveParams::with_points(args.points);
    validate_params(&params)?;

    let bundle = load_input(args.input.as_deref(), &args.rows)?;
    let rows_read = bundle.rows.len();

    let mut analysis = Analysis::new(params);
    analysis.set_rows(bundle.rows);
    let stats = *analysis.calculate().ok_or(RunError::EmptyInput)?;
    info!(
        average = stats.average,
        std_dev = stats.std_dev,
        total_count = stats.total_count,
        rows_dropped = stats.rows_dropped,
        "aggregated frequency table"
    );

    println!("average\t{}", format_fixed(stats.average, 2));
    println!("std_dev\t{}", format_fixed(stats.std_dev, 2));

    if let Some(candidate) = &args.score {
        let result = *analysis.score(candidate)?;
        if result.deviation_value.is_none() {
            warn!("standard deviation is 0; deviation value not computable");
        }
        println!("{}", deviation_line(&result));
        println!("{}", comparison_sentence(&result));
    }

    let input = Stage5Input {
        source: bundle.source,
        rows_read,
        stats: &stats,
        curve: analysis.curve(),
        deviation: analysis.deviation(),
        tool_name: "kira-tscore".to_string(),
        tool_version: env!("CARGO_PKG_VERSION").to_string(),
    };
    write_reports(&input, &args.out)?;

    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
