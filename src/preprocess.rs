use once_cell::sync::Lazy;
use regex::Regex;

use crate::line::Line;

static CARET_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[\^(.*?)\^\]").unwrap());
static BARE_REF: Lazy<Regex> = Lazy::new(|| Regex::new(r"\[([^\[\]]*)\]").unwrap());

/// Promote setext-style headings and normalize reference notation.
///
/// A line of only dashes underneath a non-blank line turns that line into a
/// level-2 heading; the dash line itself is consumed. Bracketed references
/// are rewritten to bare caret markers and a leading `* ` bullet is
/// canonicalized to `- `. The rewrites are textual and irreversible; there is
/// no escaping for literal brackets or carets.
pub fn preprocess(mut lines: Vec<Line>) -> Vec<Line> {
    let mut promote = vec![false; lines.len()];
    let mut consumed = vec![false; lines.len()];

    for i in 1..lines.len() {
        if is_dash_rule(&lines[i].text) && !lines[i - 1].text.is_empty() {
            // Clearing the text here keeps a chain of dash lines from
            // promoting each other.
            lines[i].text.clear();
            consumed[i] = true;
            promote[i - 1] = true;
        }
    }

    lines
        .into_iter()
        .enumerate()
        .filter(|(i, _)| !consumed[*i])
        .map(|(i, mut line)| {
            line.text = rewrite_references(&line.text);
            if let Some(rest) = line.text.strip_prefix("* ") {
                line.text = format!("- {rest}");
            }
            if promote[i] {
                line.text = format!("## {}", line.text);
            }
            line
        })
        .collect()
}

fn is_dash_rule(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c == '-')
}

fn rewrite_references(text: &str) -> String {
    let text = CARET_REF.replace_all(text, "^$1");
    BARE_REF.replace_all(&text, "^$1").into_owned()
}
