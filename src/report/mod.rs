pub mod html;
pub mod json;
pub mod markdown;

pub const TITLE: &str = "SIQA Leaderboard";
pub const HEADLINE: &str = "SIQA Competition Leaderboard";
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M UTC";

pub fn format_score(v: f64) -> String {
    format!("{:.2}", v)
}

pub fn format_corr(v: f64) -> String {
    format!("{:.4}", v)
}

/// Missing tracks are stored as zero and shown as `placeholder`.
pub fn score_or(v: f64, placeholder: &str) -> String {
    if v > 0.0 {
        format_score(v)
    } else {
        placeholder.to_string()
    }
}

pub fn method_or<'a>(method: &'a str, placeholder: &'a str) -> &'a str {
    if method.is_empty() { placeholder } else { method }
}

pub fn correlation_pair(srcc: f64, plcc: f64) -> String {
    format!("{} / {}", format_corr(srcc), format_corr(plcc))
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/mod.rs"]
mod tests;
