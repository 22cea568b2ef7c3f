use serde::Serialize;

/// Understanding-track outcome. All values are percentages rounded to two decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UnderstandingResult {
    pub score: f64,
    #[serde(rename = "acc_yes/no")]
    pub acc_yes_no: f64,
    pub acc_what: f64,
    pub acc_how: f64,
}

/// Scoring-track outcome. `score` is a percentage rounded to two decimals;
/// correlations are clamped into [0, 1] and rounded to four decimals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct ScoringResult {
    pub score: f64,
    #[serde(rename = "srcc_p")]
    pub srcc_perception: f64,
    #[serde(rename = "plcc_p")]
    pub plcc_perception: f64,
    #[serde(rename = "srcc_k")]
    pub srcc_knowledge: f64,
    #[serde(rename = "plcc_k")]
    pub plcc_knowledge: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackResult {
    Understanding(UnderstandingResult),
    Scoring(ScoringResult),
}

impl TrackResult {
    pub fn score(&self) -> f64 {
        match self {
            TrackResult::Understanding(r) => r.score,
            TrackResult::Scoring(r) => r.score,
        }
    }
}

/// Everything known about one team after all submissions are processed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamRecord {
    pub team: String,
    pub method: String,
    pub understanding: Option<UnderstandingResult>,
    pub scoring: Option<ScoringResult>,
}

impl TeamRecord {
    pub fn new(team: &str) -> Self {
        Self {
            team: team.to_string(),
            ..Self::default()
        }
    }

    pub fn u_score(&self) -> f64 {
        self.understanding.map(|r| r.score).unwrap_or(0.0)
    }

    pub fn s_score(&self) -> f64 {
        self.scoring.map(|r| r.score).unwrap_or(0.0)
    }

    /// Mean of both track scores, absent tracks counting as zero. Zero when
    /// neither track scored.
    pub fn combined(&self) -> f64 {
        let u = self.u_score();
        let s = self.s_score();
        if u > 0.0 || s > 0.0 {
            (u + s) / 2.0
        } else {
            0.0
        }
    }
}

/// Row of the overall ranking. Rank is the position in the table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedEntry {
    pub team: String,
    pub method: String,
    #[serde(rename = "U")]
    pub u_score: f64,
    #[serde(rename = "S")]
    pub s_score: f64,
    pub combined: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UnderstandingEntry {
    pub team: String,
    pub method: String,
    #[serde(flatten)]
    pub result: UnderstandingResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringEntry {
    pub team: String,
    pub method: String,
    #[serde(flatten)]
    pub result: ScoringResult,
}

/// The three ranked tables handed to the renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Leaderboard {
    pub overall: Vec<RankedEntry>,
    pub understanding: Vec<UnderstandingEntry>,
    pub scoring: Vec<ScoringEntry>,
}
