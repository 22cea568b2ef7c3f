use crate::model::results::Leaderboard;
use crate::report::{HEADLINE, TITLE, correlation_pair, format_score, method_or, score_or};

const DASH: &str = "–";

const STYLE: &str = r#"
    body {
      font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
      line-height: 1.6;
      color: #24292e;
      background-color: #ffffff;
      max-width: 1000px;
      margin: 0 auto;
      padding: 30px 15px;
    }

    h1, h2 {
      margin-top: 1.2em;
      margin-bottom: 0.8em;
      font-weight: 600;
      color: #24292e;
      border-bottom: 1px solid #eaecef;
      padding-bottom: 0.3em;
    }

    h1 {
      font-size: 2em;
      display: flex;
      align-items: center;
      gap: 8px;
    }

    blockquote {
      margin: 1.2em 0;
      padding: 0 1em;
      color: #6a737d;
      border-left: 0.25em solid #dfe2e5;
      font-style: italic;
    }

    table {
      width: 100%;
      border-collapse: collapse;
      margin: 1.4em 0;
      display: block;
      overflow-x: auto;
      background-color: white;
      box-shadow: 0 1px 3px rgba(0,0,0,0.1);
    }

    th, td {
      padding: 10px 12px;
      text-align: left;
      border: 1px solid #d0d7de;
    }

    th {
      background-color: #f6f8fa;
      font-weight: 600;
      text-align: center;
    }

    @media (max-width: 600px) {
      body {
        padding: 15px 8px;
      }
      h1 {
        font-size: 1.6em;
      }
      table {
        font-size: 0.9em;
      }
    }

    footer {
      margin-top: 2em;
      color: #6a737d;
      font-size: 0.95em;
    }
"#;

pub fn render_html(board: &Leaderboard, timestamp: &str) -> String {
    let mut out = Vec::<String>::new();

    out.extend(
        [
            "<!DOCTYPE html>",
            "<html lang=\"en\">",
            "<head>",
            "  <meta charset=\"UTF-8\" />",
            "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\"/>",
        ]
        .map(String::from),
    );
    out.push(format!("  <title>{TITLE}</title>"));
    out.push("  <style>".into());
    out.push(STYLE.into());
    out.push("  </style>".into());
    out.push("</head>".into());
    out.push("<body>".into());
    out.push(String::new());
    out.push(format!("  <h1>🏆 {HEADLINE}</h1>"));
    out.push(String::new());
    out.extend(
        [
            "  <blockquote>",
            "    <p><strong>SIQA-U Weighting</strong>: Yes/No (20%), What (30%), How (50%)<br />",
            "    <strong>SIQA-S Score</strong>: Average of Perception and Knowledge (each: mean of SRCC &amp; PLCC)</p>",
            "  </blockquote>",
            "",
        ]
        .map(String::from),
    );

    open_table(
        &mut out,
        "🥇 Overall Ranking (Average of U and S)",
        &["Rank", "Team", "Method", "SIQA-U", "SIQA-S", "Combined"],
    );
    for (i, e) in board.overall.iter().enumerate() {
        out.push(row(&[
            (i + 1).to_string(),
            escape_html(&e.team),
            escape_html(method_or(&e.method, DASH)),
            score_or(e.u_score, DASH),
            score_or(e.s_score, DASH),
            score_or(e.combined, DASH),
        ]));
    }
    close_table(&mut out);

    open_table(
        &mut out,
        "🧠 SIQA-U Leaderboard (Understanding)",
        &[
            "Rank",
            "Team",
            "Method",
            "Yes/No ACC",
            "What ACC",
            "How ACC",
            "Final Score",
        ],
    );
    for (i, e) in board.understanding.iter().enumerate() {
        let r = &e.result;
        out.push(row(&[
            (i + 1).to_string(),
            escape_html(&e.team),
            escape_html(method_or(&e.method, DASH)),
            format_score(r.acc_yes_no),
            format_score(r.acc_what),
            format_score(r.acc_how),
            format_score(r.score),
        ]));
    }
    close_table(&mut out);

    open_table(
        &mut out,
        "📊 SIQA-S Leaderboard (Scoring)",
        &[
            "Rank",
            "Team",
            "Method",
            "Perception (SRCC / PLCC)",
            "Knowledge (SRCC / PLCC)",
            "Final Score",
        ],
    );
    for (i, e) in board.scoring.iter().enumerate() {
        let r = &e.result;
        out.push(row(&[
            (i + 1).to_string(),
            escape_html(&e.team),
            escape_html(method_or(&e.method, DASH)),
            correlation_pair(r.srcc_perception, r.plcc_perception),
            correlation_pair(r.srcc_knowledge, r.plcc_knowledge),
            format_score(r.score),
        ]));
    }
    close_table(&mut out);

    out.push("  <blockquote>".into());
    out.push(format!("    <p>🕒 Last updated: {}</p>", escape_html(timestamp)));
    out.push("  </blockquote>".into());
    out.push(String::new());
    out.push("  <footer>".into());
    out.push("    Built with ❤️ for the SIQA Challenge".into());
    out.push("  </footer>".into());
    out.push("</body>".into());
    out.push("</html>".into());

    out.join("\n")
}

fn open_table(out: &mut Vec<String>, heading: &str, columns: &[&str]) {
    out.push(format!("  <h2>{heading}</h2>"));
    out.push("  <table>".into());
    out.push("    <thead>".into());
    let mut header = String::from("      <tr>");
    for col in columns {
        header.push_str("<th>");
        header.push_str(col);
        header.push_str("</th>");
    }
    header.push_str("</tr>");
    out.push(header);
    out.push("    </thead>".into());
    out.push("    <tbody>".into());
}

fn close_table(out: &mut Vec<String>) {
    out.push("    </tbody>".into());
    out.push("  </table>".into());
    out.push(String::new());
}

fn row(cells: &[String]) -> String {
    let mut line = String::from("      <tr>");
    for c in cells {
        line.push_str("<td>");
        line.push_str(c);
        line.push_str("</td>");
    }
    line.push_str("</tr>");
    line
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len() + 8);
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            _ => out.push(ch),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/html.rs"]
mod tests;
