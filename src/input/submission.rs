use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::input::{InputError, SubmissionError};
use crate::model::items::PredictionItem;
use crate::model::track::Track;

#[derive(Debug, Clone)]
pub struct Submission {
    pub team: String,
    pub track: Track,
    pub method: Option<String>,
    pub predictions: Vec<PredictionItem>,
}

/// One discovered file and the outcome of parsing it.
#[derive(Debug)]
pub struct SubmissionFile {
    pub source: String,
    pub parsed: Result<Submission, SubmissionError>,
}

#[derive(Debug, Deserialize)]
struct SubmissionDoc {
    #[serde(default)]
    team: Option<String>,
    #[serde(default)]
    track: Option<String>,
    #[serde(default)]
    method: Option<String>,
    #[serde(default)]
    predictions: Option<Vec<PredictionItem>>,
}

pub fn parse_submission(text: &str) -> Result<Submission, SubmissionError> {
    let doc: SubmissionDoc = serde_json::from_str(text)?;

    let team = doc.team.ok_or(SubmissionError::MissingField("team"))?;
    let track = doc.track.ok_or(SubmissionError::MissingField("track"))?;
    let predictions = doc
        .predictions
        .ok_or(SubmissionError::MissingField("predictions"))?;
    let track = Track::parse(&track)
        .ok_or_else(|| SubmissionError::UnknownTrack(track.to_uppercase()))?;

    let method = doc
        .method
        .map(|m| m.trim().to_string())
        .filter(|m| !m.is_empty());

    Ok(Submission {
        team: team.trim().to_string(),
        track,
        method,
        predictions,
    })
}

/// `*.json` files directly inside `dir`, ordered by file name. Hidden files are
/// ignored. A missing directory is an empty submission set.
pub fn discover(dir: &Path) -> Result<Vec<PathBuf>, InputError> {
    if !dir.is_dir() {
        tracing::warn!(
            dir = %dir.display(),
            "submissions directory not found; no submissions to score"
        );
        return Ok(Vec::new());
    }

    let io_err = |source: std::io::Error| InputError::Io {
        path: dir.to_path_buf(),
        source,
    };
    let mut paths = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.starts_with('.') || !name.ends_with(".json") {
            continue;
        }
        paths.push(path);
    }
    paths.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    Ok(paths)
}

pub fn load_submissions(dir: &Path) -> Result<Vec<SubmissionFile>, InputError> {
    let paths = discover(dir)?;
    tracing::info!(dir = %dir.display(), files = paths.len(), "discovered submissions");

    let files = paths
        .iter()
        .map(|path| SubmissionFile {
            source: path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            parsed: read_submission(path),
        })
        .collect();
    Ok(files)
}

fn read_submission(path: &Path) -> Result<Submission, SubmissionError> {
    let text = std::fs::read_to_string(path)?;
    parse_submission(&text)
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/submission.rs"]
mod tests;
