use serde::Serialize;

use crate::model::results::Leaderboard;

#[derive(Debug, Serialize)]
struct LeaderboardDocument<'a> {
    tool: &'a str,
    version: &'a str,
    generated_at: &'a str,
    #[serde(flatten)]
    board: &'a Leaderboard,
}

/// Machine-readable copy of the three tables. Rank is the array position.
pub fn render_json(board: &Leaderboard, timestamp: &str) -> serde_json::Result<String> {
    let doc = LeaderboardDocument {
        tool: env!("CARGO_PKG_NAME"),
        version: env!("CARGO_PKG_VERSION"),
        generated_at: timestamp,
        board,
    };
    serde_json::to_string_pretty(&doc)
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/json.rs"]
mod tests;
