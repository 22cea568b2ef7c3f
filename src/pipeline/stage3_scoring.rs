use crate::input::ground_truth::AnswerKey;
use crate::model::items::{PredictionItem, coerce_f64};
use crate::model::results::ScoringResult;
use crate::model::stats::{clamp_agreement, is_constant, pearson, round_to, spearman};

/// Paired reference/predicted values for the items usable in both dimensions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QualitySeries {
    pub truth_perception: Vec<f64>,
    pub pred_perception: Vec<f64>,
    pub truth_knowledge: Vec<f64>,
    pub pred_knowledge: Vec<f64>,
}

impl QualitySeries {
    pub fn is_empty(&self) -> bool {
        self.truth_perception.is_empty()
    }
}

/// Clamped agreement between reference and predicted values of one dimension.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Agreement {
    pub srcc: f64,
    pub plcc: f64,
}

impl Agreement {
    /// Sub-score in percent: mean of both coefficients.
    pub fn score(&self) -> f64 {
        (self.srcc + self.plcc) / 2.0 * 100.0
    }
}

pub fn collect_series(predictions: &[PredictionItem], key: &AnswerKey) -> QualitySeries {
    let mut series = QualitySeries::default();

    for pred in predictions {
        let Some(truth) = pred.item_id().and_then(|id| key.get(&id)) else {
            continue;
        };
        // An item counts only when all four values are usable.
        let values = (
            coerce_f64(truth.perception.as_ref()),
            coerce_f64(pred.perception.as_ref()),
            coerce_f64(truth.knowledge.as_ref()),
            coerce_f64(pred.knowledge.as_ref()),
        );
        let (Some(tp), Some(pp), Some(tk), Some(pk)) = values else {
            tracing::debug!(id = %truth.id, "skipping item without numeric quality scores");
            continue;
        };
        series.truth_perception.push(tp);
        series.pred_perception.push(pp);
        series.truth_knowledge.push(tk);
        series.pred_knowledge.push(pk);
    }

    series
}

/// Constant series have no defined correlation and score zero.
pub fn agreement(truth: &[f64], pred: &[f64]) -> Agreement {
    if is_constant(truth) || is_constant(pred) {
        return Agreement::default();
    }
    Agreement {
        srcc: clamp_agreement(spearman(truth, pred)),
        plcc: clamp_agreement(pearson(truth, pred)),
    }
}

pub fn evaluate_s(predictions: &[PredictionItem], key: &AnswerKey) -> ScoringResult {
    let series = collect_series(predictions, key);
    if series.is_empty() {
        return ScoringResult::default();
    }

    let perception = agreement(&series.truth_perception, &series.pred_perception);
    let knowledge = agreement(&series.truth_knowledge, &series.pred_knowledge);
    let score = (perception.score() + knowledge.score()) / 2.0;

    ScoringResult {
        score: round_to(score, 2),
        srcc_perception: round_to(perception.srcc, 4),
        plcc_perception: round_to(perception.plcc, 4),
        srcc_knowledge: round_to(knowledge.srcc, 4),
        plcc_knowledge: round_to(knowledge.plcc, 4),
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage3_scoring.rs"]
mod tests;
