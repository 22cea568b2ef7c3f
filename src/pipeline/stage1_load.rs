use std::path::Path;

use crate::input::InputError;
use crate::input::ground_truth::{GroundTruth, load};
use crate::input::submission::{SubmissionFile, load_submissions};

#[derive(Debug)]
pub struct Stage1Output {
    pub ground_truth: GroundTruth,
    pub submissions: Vec<SubmissionFile>,
}

/// Ground truth first: a broken answer set aborts before any submission is read.
pub fn run_stage1(answers_dir: &Path, submissions_dir: &Path) -> Result<Stage1Output, InputError> {
    let ground_truth = load(answers_dir)?;
    let submissions = load_submissions(submissions_dir)?;
    Ok(Stage1Output {
        ground_truth,
        submissions,
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage1_load.rs"]
mod tests;
