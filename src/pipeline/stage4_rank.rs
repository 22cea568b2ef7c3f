use std::cmp::Ordering;
use std::collections::HashMap;

use crate::input::ground_truth::GroundTruth;
use crate::input::submission::{Submission, SubmissionFile};
use crate::model::results::{
    Leaderboard, RankedEntry, ScoringEntry, TeamRecord, TrackResult, UnderstandingEntry,
};
use crate::model::stats::round_to;

/// Builds team records one submission at a time. Teams keep the order in which
/// they were first seen, which is the tie order of every table.
#[derive(Debug)]
pub struct Aggregator<'a> {
    ground_truth: &'a GroundTruth,
    teams: Vec<TeamRecord>,
    index: HashMap<String, usize>,
}

impl<'a> Aggregator<'a> {
    pub fn new(ground_truth: &'a GroundTruth) -> Self {
        Self {
            ground_truth,
            teams: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Scores one submission and stores the result, replacing any earlier result
    /// of the same team on the same track.
    pub fn ingest(&mut self, submission: &Submission) -> TrackResult {
        let result = submission
            .track
            .evaluate(&submission.predictions, self.ground_truth);

        let record = self.record_mut(&submission.team);
        match result {
            TrackResult::Understanding(r) => record.understanding = Some(r),
            TrackResult::Scoring(r) => record.scoring = Some(r),
        }
        if let Some(method) = &submission.method {
            record.method = method.clone();
        }
        result
    }

    pub fn teams(&self) -> &[TeamRecord] {
        &self.teams
    }

    pub fn finish(self) -> Leaderboard {
        rank(&self.teams)
    }

    fn record_mut(&mut self, team: &str) -> &mut TeamRecord {
        let idx = match self.index.get(team) {
            Some(&idx) => idx,
            None => {
                self.teams.push(TeamRecord::new(team));
                self.index.insert(team.to_string(), self.teams.len() - 1);
                self.teams.len() - 1
            }
        };
        &mut self.teams[idx]
    }
}

/// Scores every parsed file in order. Files that failed to parse are reported
/// and skipped.
pub fn aggregate(ground_truth: &GroundTruth, files: &[SubmissionFile]) -> Leaderboard {
    let mut aggregator = Aggregator::new(ground_truth);

    for file in files {
        match &file.parsed {
            Ok(submission) => {
                let result = aggregator.ingest(submission);
                tracing::info!(
                    source = %file.source,
                    team = %submission.team,
                    track = %submission.track,
                    score = result.score(),
                    "scored submission"
                );
            }
            Err(err) => {
                tracing::warn!(source = %file.source, error = %err, "skipping submission");
            }
        }
    }

    tracing::debug!(teams = aggregator.teams().len(), "aggregation finished");
    aggregator.finish()
}

/// Sorts teams into the three tables. Sorting is stable, so equal scores keep
/// team order.
pub fn rank(teams: &[TeamRecord]) -> Leaderboard {
    let mut overall = teams
        .iter()
        .map(|t| RankedEntry {
            team: t.team.clone(),
            method: t.method.clone(),
            u_score: t.u_score(),
            s_score: t.s_score(),
            combined: round_to(t.combined(), 2),
        })
        .collect::<Vec<_>>();
    overall.sort_by(|a, b| descending(a.combined, b.combined));

    let mut understanding = teams
        .iter()
        .filter_map(|t| {
            t.understanding.map(|result| UnderstandingEntry {
                team: t.team.clone(),
                method: t.method.clone(),
                result,
            })
        })
        .collect::<Vec<_>>();
    understanding.sort_by(|a, b| descending(a.result.score, b.result.score));

    let mut scoring = teams
        .iter()
        .filter_map(|t| {
            t.scoring.map(|result| ScoringEntry {
                team: t.team.clone(),
                method: t.method.clone(),
                result,
            })
        })
        .collect::<Vec<_>>();
    scoring.sort_by(|a, b| descending(a.result.score, b.result.score));

    Leaderboard {
        overall,
        understanding,
        scoring,
    }
}

fn descending(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

#[cfg(test)]
#[path = "../../tests/src_inline/pipeline/stage4_rank.rs"]
mod tests;
