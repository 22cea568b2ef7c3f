use crate::input::ground_truth::AnswerKey;
use crate::model::items::{PredictionItem, QuestionType, normalize_answer};
use crate::model::results::UnderstandingResult;
use crate::model::stats::round_to;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CategoryTally {
    pub correct: u32,
    pub total: u32,
}

impl CategoryTally {
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }
}

/// Per-category tallies, indexed by `QuestionType::index`.
pub fn tally_u(predictions: &[PredictionItem], key: &AnswerKey) -> [CategoryTally; 3] {
    let mut tallies = [CategoryTally::default(); 3];

    for pred in predictions {
        let Some(truth) = pred.item_id().and_then(|id| key.get(&id)) else {
            continue;
        };
        let Some(category) = truth.category() else {
            tracing::debug!(id = %truth.id, "reference item has no scored question type");
            continue;
        };

        let tally = &mut tallies[category.index()];
        tally.total += 1;
        let expected = normalize_answer(truth.precision.as_ref());
        if expected == normalize_answer(pred.precision.as_ref()) {
            tally.correct += 1;
        }
    }

    tallies
}

pub fn evaluate_u(predictions: &[PredictionItem], key: &AnswerKey) -> UnderstandingResult {
    let tallies = tally_u(predictions, key);
    let acc = |q: QuestionType| tallies[q.index()].accuracy();

    let score = QuestionType::ALL
        .iter()
        .map(|&q| q.weight() * acc(q))
        .sum::<f64>();

    UnderstandingResult {
        score: round_to(score * 100.0, 2),
        acc_yes_no: round_to(acc(QuestionType::YesOrNo) * 100.0, 2),
        acc_what: round_to(acc(QuestionType::What) * 100.0, 2),
        acc_how: round_to(acc(QuestionType::How) * 100.0, 2),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage2_understanding.rs"]
mod tests;
