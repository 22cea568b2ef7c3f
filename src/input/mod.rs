use std::path::PathBuf;

pub mod ground_truth;
pub mod submission;

pub const ANSWERS_DIR: &str = "answer";
pub const SUBMISSIONS_DIR: &str = "submissions";
pub const U_ANSWER_FILE: &str = "answer-u.json";
pub const S_ANSWER_FILE: &str = "answer-s.json";

/// Errors that stop the run before any scoring happens.
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("missing input: {path} has no \"predictions\" array")]
    MissingPredictions { path: PathBuf },
}

/// Errors confined to one submission file; the file is skipped and the batch
/// continues.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("missing required field \"{0}\"")]
    MissingField(&'static str),
    #[error("unknown track: {0}")]
    UnknownTrack(String),
}
