use crate::model::results::Leaderboard;
use crate::report::{HEADLINE, TITLE, correlation_pair, format_score, method_or, score_or};

const DASH: &str = "-";

pub fn render_markdown(board: &Leaderboard, timestamp: &str) -> String {
    let mut lines: Vec<String> = vec![
        "---".into(),
        "layout: leaderboard".into(),
        format!("title: {TITLE}"),
        "permalink: /".into(),
        "---".into(),
        String::new(),
        format!("# 🏆 {HEADLINE}"),
        String::new(),
        "> **SIQA-U Weighting**: Yes/No (20%), What (30%), How (50%)  \n\
         > **SIQA-S Score**: Average of Perception and Knowledge (each: mean of SRCC & PLCC)"
            .into(),
        String::new(),
    ];

    lines.push("## 🥇 Overall Ranking (Average of U and S)".into());
    lines.push("| Rank | Team | Method | SIQA-U | SIQA-S | Combined |".into());
    lines.push("|:----:|:-----|:-------|:------:|:------:|:--------:|".into());
    for (i, e) in board.overall.iter().enumerate() {
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            i + 1,
            cell(&e.team),
            cell(method_or(&e.method, DASH)),
            score_or(e.u_score, DASH),
            score_or(e.s_score, DASH),
            score_or(e.combined, DASH),
        ));
    }
    lines.push(String::new());

    lines.push("## 💡 SIQA-U Leaderboard (Understanding)".into());
    lines.push(
        "| Rank | Team | Method | Yes/No ACC | What ACC | How ACC | Final Score |".into(),
    );
    lines.push(
        "|:----:|:-----|:-------|:----------:|:--------:|:-------:|:-----------:|".into(),
    );
    for (i, e) in board.understanding.iter().enumerate() {
        let r = &e.result;
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} | {} |",
            i + 1,
            cell(&e.team),
            cell(method_or(&e.method, DASH)),
            format_score(r.acc_yes_no),
            format_score(r.acc_what),
            format_score(r.acc_how),
            format_score(r.score),
        ));
    }
    lines.push(String::new());

    lines.push("## 📈 SIQA-S Leaderboard (Scoring)".into());
    lines.push(
        "| Rank | Team | Method | Perception (SRCC / PLCC) | Knowledge (SRCC / PLCC) | Final Score |"
            .into(),
    );
    lines.push(
        "|:----:|:-----|:-------|:------------------------:|:-----------------------:|:-----------:|"
            .into(),
    );
    for (i, e) in board.scoring.iter().enumerate() {
        let r = &e.result;
        lines.push(format!(
            "| {} | {} | {} | {} | {} | {} |",
            i + 1,
            cell(&e.team),
            cell(method_or(&e.method, DASH)),
            correlation_pair(r.srcc_perception, r.plcc_perception),
            correlation_pair(r.srcc_knowledge, r.plcc_knowledge),
            format_score(r.score),
        ));
    }
    lines.push(String::new());

    lines.push(format!("> 🕒 Last updated: {timestamp}"));

    lines.join("\n")
}

// Pipes would split the table cell.
fn cell(text: &str) -> String {
    text.replace('|', "\\|")
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/markdown.rs"]
mod tests;
