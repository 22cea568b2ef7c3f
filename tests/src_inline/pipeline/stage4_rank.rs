use serde_json::json;

use super::*;
use crate::input::SubmissionError;
use crate::input::submission::parse_submission;
use crate::model::items::GroundTruthItem;
use crate::model::results::{ScoringResult, UnderstandingResult};

fn ground_truth() -> GroundTruth {
    let u: Vec<GroundTruthItem> = serde_json::from_value(json!([
        {"id": "q1", "type": "yes-or-no", "precision": "A"},
        {"id": "q2", "type": "what", "precision": "B"},
        {"id": "q3", "type": "how", "precision": "C"}
    ]))
    .unwrap();
    let s: Vec<GroundTruthItem> = serde_json::from_value(json!([
        {"id": "s1", "perception": 1, "knowledge": 1},
        {"id": "s2", "perception": 2, "knowledge": 2},
        {"id": "s3", "perception": 3, "knowledge": 3},
        {"id": "s4", "perception": 4, "knowledge": 4}
    ]))
    .unwrap();
    GroundTruth::from_items(u, s)
}

fn file(source: &str, doc: serde_json::Value) -> SubmissionFile {
    SubmissionFile {
        source: source.to_string(),
        parsed: parse_submission(&doc.to_string()),
    }
}

/// Understanding submission answering q1..q3 with the given letters.
fn u_file(source: &str, team: &str, method: &str, answers: [&str; 3]) -> SubmissionFile {
    file(
        source,
        json!({
            "team": team,
            "track": "U",
            "method": method,
            "predictions": [
                {"id": "q1", "precision": answers[0]},
                {"id": "q2", "precision": answers[1]},
                {"id": "q3", "precision": answers[2]}
            ]
        }),
    )
}

fn s_file(source: &str, team: &str, method: &str, perception: [f64; 4]) -> SubmissionFile {
    file(
        source,
        json!({
            "team": team,
            "track": "s",
            "method": method,
            "predictions": [
                {"id": "s1", "perception": perception[0], "knowledge": 1},
                {"id": "s2", "perception": perception[1], "knowledge": 2},
                {"id": "s3", "perception": perception[2], "knowledge": 3},
                {"id": "s4", "perception": perception[3], "knowledge": 4}
            ]
        }),
    )
}

#[test]
fn test_overall_combines_both_tracks() {
    let gt = ground_truth();
    let files = vec![
        u_file("a.json", "alpha", "m1", ["A", "B", "C"]),
        s_file("b.json", "alpha", "", [1.0, 2.0, 3.0, 4.0]),
        u_file("c.json", "beta", "m2", ["A", "X", "X"]),
    ];
    let board = aggregate(&gt, &files);

    assert_eq!(board.overall.len(), 2);
    assert_eq!(board.overall[0].team, "alpha");
    assert_eq!(board.overall[0].u_score, 100.0);
    assert_eq!(board.overall[0].s_score, 100.0);
    assert_eq!(board.overall[0].combined, 100.0);
    assert_eq!(board.overall[0].method, "m1");

    assert_eq!(board.overall[1].team, "beta");
    assert_eq!(board.overall[1].u_score, 20.0);
    assert_eq!(board.overall[1].combined, 10.0);

    assert_eq!(board.understanding.len(), 2);
    assert_eq!(board.scoring.len(), 1);
    assert_eq!(board.scoring[0].team, "alpha");
}

#[test]
fn test_team_with_only_u_track() {
    let gt = ground_truth();
    let files = vec![u_file("a.json", "solo", "m", ["A", "B", "X"])];
    let board = aggregate(&gt, &files);

    let entry = &board.overall[0];
    assert_eq!(entry.u_score, 50.0);
    assert_eq!(entry.s_score, 0.0);
    assert_eq!(entry.combined, 25.0);
    assert!(board.scoring.is_empty());
}

#[test]
fn test_later_file_overwrites_same_track() {
    let gt = ground_truth();
    let files = vec![
        u_file("01.json", "alpha", "first", ["A", "B", "C"]),
        u_file("02.json", "alpha", "second", ["X", "X", "X"]),
    ];
    let board = aggregate(&gt, &files);

    assert_eq!(board.understanding.len(), 1);
    assert_eq!(board.understanding[0].result.score, 0.0);
    assert_eq!(board.understanding[0].method, "second");
    assert_eq!(board.overall[0].combined, 0.0);
}

#[test]
fn test_method_keeps_last_non_empty() {
    let gt = ground_truth();
    let files = vec![
        u_file("01.json", "alpha", "vision-net", ["A", "B", "C"]),
        s_file("02.json", "alpha", "", [1.0, 2.0, 3.0, 4.0]),
    ];
    let board = aggregate(&gt, &files);
    assert_eq!(board.overall[0].method, "vision-net");
    assert_eq!(board.scoring[0].method, "vision-net");

    let files = vec![
        u_file("01.json", "alpha", "vision-net", ["A", "B", "C"]),
        s_file("02.json", "alpha", "vision-net-v2", [1.0, 2.0, 3.0, 4.0]),
    ];
    let board = aggregate(&gt, &files);
    assert_eq!(board.understanding[0].method, "vision-net-v2");
}

#[test]
fn test_invalid_submissions_are_skipped() {
    let gt = ground_truth();
    let files = vec![
        file("01.json", json!({"team": "ghost", "predictions": []})),
        file("02.json", json!({"team": "ghost", "track": "Z", "predictions": []})),
        SubmissionFile {
            source: "03.json".to_string(),
            parsed: Err(SubmissionError::MissingField("team")),
        },
        u_file("04.json", "real", "", ["A", "B", "C"]),
    ];
    let board = aggregate(&gt, &files);

    assert_eq!(board.overall.len(), 1);
    assert_eq!(board.overall[0].team, "real");
    assert!(board.overall.iter().all(|e| e.team != "ghost"));
}

#[test]
fn test_ties_keep_first_seen_order() {
    let gt = ground_truth();
    let files = vec![
        u_file("01.json", "zulu", "", ["A", "X", "X"]),
        u_file("02.json", "alpha", "", ["A", "X", "X"]),
        u_file("03.json", "mike", "", ["A", "B", "C"]),
    ];
    let board = aggregate(&gt, &files);
    let order = board
        .understanding
        .iter()
        .map(|e| e.team.as_str())
        .collect::<Vec<_>>();
    assert_eq!(order, vec!["mike", "zulu", "alpha"]);
}

#[test]
fn test_aggregation_is_idempotent() {
    let gt = ground_truth();
    let files = vec![
        u_file("01.json", "a", "", ["A", "X", "C"]),
        s_file("02.json", "b", "", [2.0, 1.0, 4.0, 3.0]),
        u_file("03.json", "b", "", ["A", "B", "X"]),
    ];
    assert_eq!(aggregate(&gt, &files), aggregate(&gt, &files));
}

#[test]
fn test_zero_scores_combine_to_zero() {
    let record = TeamRecord {
        team: "t".into(),
        method: String::new(),
        understanding: Some(UnderstandingResult::default()),
        scoring: Some(ScoringResult::default()),
    };
    assert_eq!(record.combined(), 0.0);

    let board = rank(&[record]);
    assert_eq!(board.overall[0].combined, 0.0);
    assert_eq!(board.understanding.len(), 1);
    assert_eq!(board.scoring.len(), 1);
}

#[test]
fn test_aggregator_tracks_teams_incrementally() {
    let gt = ground_truth();
    let mut agg = Aggregator::new(&gt);
    let sub = parse_submission(
        r#"{"team": "alpha", "track": "U", "predictions": [{"id": "q3", "precision": "c"}]}"#,
    )
    .unwrap();

    let result = agg.ingest(&sub);
    assert_eq!(result.score(), 50.0);
    assert_eq!(agg.teams().len(), 1);
    assert!(agg.teams()[0].scoring.is_none());

    agg.ingest(&sub);
    assert_eq!(agg.teams().len(), 1);
}
