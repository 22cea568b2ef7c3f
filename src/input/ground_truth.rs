use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;

use crate::input::{InputError, S_ANSWER_FILE, U_ANSWER_FILE};
use crate::model::items::{GroundTruthItem, ItemId};

pub type AnswerKey = HashMap<ItemId, GroundTruthItem>;

/// Reference answers for both tracks. Loaded once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    pub understanding: AnswerKey,
    pub scoring: AnswerKey,
}

#[derive(Debug, Deserialize)]
struct AnswerFile {
    #[serde(default)]
    predictions: Option<Vec<GroundTruthItem>>,
}

impl GroundTruth {
    pub fn from_items(
        understanding: impl IntoIterator<Item = GroundTruthItem>,
        scoring: impl IntoIterator<Item = GroundTruthItem>,
    ) -> Self {
        Self {
            understanding: index_items(understanding),
            scoring: index_items(scoring),
        }
    }
}

pub fn load(answers_dir: &Path) -> Result<GroundTruth, InputError> {
    let understanding = read_answer_items(&answers_dir.join(U_ANSWER_FILE))?;
    let scoring = read_answer_items(&answers_dir.join(S_ANSWER_FILE))?;
    let ground_truth = GroundTruth::from_items(understanding, scoring);

    tracing::info!(
        dir = %answers_dir.display(),
        u_items = ground_truth.understanding.len(),
        s_items = ground_truth.scoring.len(),
        "loaded ground truth"
    );
    Ok(ground_truth)
}

fn read_answer_items(path: &Path) -> Result<Vec<GroundTruthItem>, InputError> {
    let text = std::fs::read_to_string(path).map_err(|source| InputError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: AnswerFile = serde_json::from_str(&text).map_err(|source| InputError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    file.predictions.ok_or_else(|| InputError::MissingPredictions {
        path: path.to_path_buf(),
    })
}

// Duplicate ids keep the last occurrence.
fn index_items(items: impl IntoIterator<Item = GroundTruthItem>) -> AnswerKey {
    let mut key = AnswerKey::new();
    for item in items {
        key.insert(item.id.clone(), item);
    }
    key
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/ground_truth.rs"]
mod tests;
