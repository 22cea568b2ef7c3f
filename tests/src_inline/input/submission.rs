use std::fs;
use std::sync::atomic::{AtomicUsize, Ordering};

use super::*;

static DIR_COUNTER: AtomicUsize = AtomicUsize::new(0);

fn make_temp_dir() -> PathBuf {
    let mut dir = std::env::temp_dir();
    let id = DIR_COUNTER.fetch_add(1, Ordering::SeqCst);
    dir.push(format!("siqa_submission_test_{}_{}", std::process::id(), id));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn test_parse_submission_normalizes_fields() {
    let sub = parse_submission(
        r#"{"team": "  Alpha ", "track": "u", "method": " Net-X ",
            "predictions": [{"id": "q1", "precision": "a"}]}"#,
    )
    .unwrap();
    assert_eq!(sub.team, "Alpha");
    assert_eq!(sub.track, Track::Understanding);
    assert_eq!(sub.method.as_deref(), Some("Net-X"));
    assert_eq!(sub.predictions.len(), 1);
}

#[test]
fn test_parse_submission_blank_method_is_none() {
    let sub = parse_submission(r#"{"team": "A", "track": "S", "method": "  ", "predictions": []}"#)
        .unwrap();
    assert_eq!(sub.track, Track::Scoring);
    assert!(sub.method.is_none());

    let sub = parse_submission(r#"{"team": "A", "track": "S", "predictions": []}"#).unwrap();
    assert!(sub.method.is_none());
}

#[test]
fn test_parse_submission_missing_fields() {
    let err = parse_submission(r#"{"team": "A", "predictions": []}"#).unwrap_err();
    assert!(matches!(err, SubmissionError::MissingField("track")));

    let err = parse_submission(r#"{"track": "U", "predictions": []}"#).unwrap_err();
    assert!(matches!(err, SubmissionError::MissingField("team")));

    let err = parse_submission(r#"{"team": "A", "track": "U"}"#).unwrap_err();
    assert!(matches!(err, SubmissionError::MissingField("predictions")));
}

#[test]
fn test_parse_submission_unknown_track() {
    let err = parse_submission(r#"{"team": "A", "track": "x", "predictions": []}"#).unwrap_err();
    match err {
        SubmissionError::UnknownTrack(t) => assert_eq!(t, "X"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_parse_submission_malformed() {
    assert!(matches!(
        parse_submission("{not json").unwrap_err(),
        SubmissionError::Json(_)
    ));
    // predictions must be objects
    assert!(matches!(
        parse_submission(r#"{"team": "A", "track": "U", "predictions": [1, 2]}"#).unwrap_err(),
        SubmissionError::Json(_)
    ));
}

#[test]
fn test_malformed_item_fields_do_not_reject_file() {
    let sub = parse_submission(
        r#"{"team": "A", "track": "U", "predictions": [
            {"id": "q1", "type": 7, "precision": "A"},
            {"id": true, "precision": "B"},
            {"id": "q2", "precision": "C"}
        ]}"#,
    )
    .unwrap();
    assert_eq!(sub.predictions.len(), 3);
    assert!(sub.predictions[1].item_id().is_none());
}

#[test]
fn test_discover_sorted_json_only() {
    let dir = make_temp_dir();
    fs::write(dir.join("b_team.json"), "{}").unwrap();
    fs::write(dir.join("a_team.json"), "{}").unwrap();
    fs::write(dir.join("notes.txt"), "x").unwrap();
    fs::write(dir.join(".hidden.json"), "{}").unwrap();
    fs::create_dir_all(dir.join("nested.json")).unwrap();

    let found = discover(&dir).unwrap();
    let names = found
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect::<Vec<_>>();
    assert_eq!(names, vec!["a_team.json", "b_team.json"]);
}

#[test]
fn test_discover_missing_dir_is_empty() {
    let dir = make_temp_dir().join("does_not_exist");
    assert!(discover(&dir).unwrap().is_empty());
}

#[test]
fn test_load_submissions_keeps_failures() {
    let dir = make_temp_dir();
    fs::write(
        dir.join("01.json"),
        r#"{"team": "A", "track": "U", "predictions": []}"#,
    )
    .unwrap();
    fs::write(dir.join("02.json"), "{broken").unwrap();

    let files = load_submissions(&dir).unwrap();
    assert_eq!(files.len(), 2);
    assert_eq!(files[0].source, "01.json");
    assert!(files[0].parsed.is_ok());
    assert_eq!(files[1].source, "02.json");
    assert!(files[1].parsed.is_err());
}
