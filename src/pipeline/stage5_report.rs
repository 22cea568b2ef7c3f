use std::fs;
use std::path::{Path, PathBuf};

use crate::model::results::Leaderboard;
use crate::report::html::render_html;
use crate::report::json::render_json;
use crate::report::markdown::render_markdown;

pub const MARKDOWN_FILE: &str = "index.md";
pub const HTML_FILE: &str = "index.html";
pub const JSON_FILE: &str = "leaderboard.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ReportFormat {
    Markdown,
    Html,
    Json,
    All,
}

impl ReportFormat {
    fn includes(self, other: ReportFormat) -> bool {
        self == ReportFormat::All || self == other
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to serialize leaderboard: {0}")]
    Json(#[from] serde_json::Error),
}

/// Writes the selected renderings into `out_dir` and returns the written paths.
pub fn write_reports(
    board: &Leaderboard,
    out_dir: &Path,
    format: ReportFormat,
    timestamp: &str,
) -> Result<Vec<PathBuf>, ReportError> {
    fs::create_dir_all(out_dir).map_err(|source| ReportError::Io {
        path: out_dir.to_path_buf(),
        source,
    })?;

    let mut written = Vec::new();
    if format.includes(ReportFormat::Markdown) {
        let path = out_dir.join(MARKDOWN_FILE);
        write_text(&path, &render_markdown(board, timestamp))?;
        written.push(path);
    }
    if format.includes(ReportFormat::Html) {
        let path = out_dir.join(HTML_FILE);
        write_text(&path, &render_html(board, timestamp))?;
        written.push(path);
    }
    if format.includes(ReportFormat::Json) {
        let path = out_dir.join(JSON_FILE);
        write_text(&path, &render_json(board, timestamp)?)?;
        written.push(path);
    }

    for path in &written {
        tracing::info!(path = %path.display(), "leaderboard written");
    }
    Ok(written)
}

fn write_text(path: &Path, text: &str) -> Result<(), ReportError> {
    fs::write(path, text).map_err(|source| ReportError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage5_report.rs"]
mod tests;
