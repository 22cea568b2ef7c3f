mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::Parser;

use crate::input::{ANSWERS_DIR, InputError, SUBMISSIONS_DIR};
use crate::pipeline::stage1_load::run_stage1;
use crate::pipeline::stage4_rank::aggregate;
use crate::pipeline::stage5_report::{ReportError, ReportFormat, write_reports};
use crate::report::TIMESTAMP_FORMAT;

/// Score SIQA challenge submissions and render the leaderboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "siqa-leaderboard", version, about)]
struct Cli {
    /// Directory holding answer-u.json and answer-s.json
    #[arg(long, default_value = ANSWERS_DIR)]
    answers: PathBuf,

    /// Directory scanned for *.json submissions
    #[arg(long, default_value = SUBMISSIONS_DIR)]
    submissions: PathBuf,

    /// Output directory for the rendered leaderboard
    #[arg(long, default_value = ".")]
    out: PathBuf,

    #[arg(long, value_enum, default_value_t = ReportFormat::All)]
    format: ReportFormat,
}

#[derive(Debug, thiserror::Error)]
enum RunError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error(transparent)]
    Report(#[from] ReportError),
}

fn main() {
    logging::init();
    let cli = Cli::parse();
    if let Err(err) = run(&cli) {
        tracing::error!("{err}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), RunError> {
    let loaded = run_stage1(&cli.answers, &cli.submissions)?;
    let board = aggregate(&loaded.ground_truth, &loaded.submissions);

    let skipped = loaded
        .submissions
        .iter()
        .filter(|f| f.parsed.is_err())
        .count();
    tracing::info!(
        teams = board.overall.len(),
        u_entries = board.understanding.len(),
        s_entries = board.scoring.len(),
        skipped,
        "leaderboard computed"
    );

    let timestamp = chrono::Utc::now().format(TIMESTAMP_FORMAT).to_string();
    write_reports(&board, &cli.out, cli.format, &timestamp)?;
    Ok(())
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
