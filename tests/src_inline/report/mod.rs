use super::*;

#[test]
fn test_score_formatting() {
    assert_eq!(format_score(50.0), "50.00");
    assert_eq!(format_score(66.666), "66.67");
    assert_eq!(format_corr(0.8), "0.8000");
    assert_eq!(correlation_pair(1.0, 0.12345), "1.0000 / 0.1235");
}

#[test]
fn test_missing_scores_use_placeholder() {
    assert_eq!(score_or(0.0, "-"), "-");
    assert_eq!(score_or(12.5, "-"), "12.50");
    assert_eq!(method_or("", "-"), "-");
    assert_eq!(method_or("net", "-"), "net");
}
