use std::fmt;

use crate::input::ground_truth::{AnswerKey, GroundTruth};
use crate::model::items::PredictionItem;
use crate::model::results::TrackResult;
use crate::pipeline::stage2_understanding::evaluate_u;
use crate::pipeline::stage3_scoring::evaluate_s;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Track {
    /// SIQA-U: multiple-choice understanding questions.
    Understanding,
    /// SIQA-S: continuous perception and knowledge quality scores.
    Scoring,
}

impl Track {
    /// Case-insensitive; surrounding whitespace is not tolerated.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.to_uppercase().as_str() {
            "U" => Some(Track::Understanding),
            "S" => Some(Track::Scoring),
            _ => None,
        }
    }

    pub fn code(self) -> &'static str {
        match self {
            Track::Understanding => "U",
            Track::Scoring => "S",
        }
    }

    pub fn answer_key(self, ground_truth: &GroundTruth) -> &AnswerKey {
        match self {
            Track::Understanding => &ground_truth.understanding,
            Track::Scoring => &ground_truth.scoring,
        }
    }

    pub fn evaluate(
        self,
        predictions: &[PredictionItem],
        ground_truth: &GroundTruth,
    ) -> TrackResult {
        let key = self.answer_key(ground_truth);
        match self {
            Track::Understanding => TrackResult::Understanding(evaluate_u(predictions, key)),
            Track::Scoring => TrackResult::Scoring(evaluate_s(predictions, key)),
        }
    }
}

impl fmt::Display for Track {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
