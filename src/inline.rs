use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Run, Style};

static LEADING_FOOTNOTE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\^(\d+)").unwrap());
static SUPERSCRIPT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\^(\d+)").unwrap());

/// Tokenize one line's text into styled runs and resolve superscripts.
pub fn tokenize(text: &str) -> Vec<Run> {
    resolve_superscripts(tokenize_runs(text))
}

/// Toggle-based emphasis tokenizer.
///
/// `**` toggles bold and `*` toggles italic; an open toggle at end of line
/// leaves the remainder in the active style, never an error. `***` is a
/// paired delimiter only while both toggles are off: its interior becomes one
/// bold-italic run with no recursion, and an unmatched `***` is emitted as a
/// single literal run. Carets start superscript candidates that are captured
/// verbatim, caret included, up to the next space or end of line; the
/// resolver pass decides which of them become superscripts.
pub fn tokenize_runs(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut bold = false;
    let mut italic = false;
    let mut i = 0;

    // A footnote line opens with its number as plain bold text, not a
    // superscript.
    if let Some(caps) = LEADING_FOOTNOTE.captures(text) {
        runs.push(Run::new(&caps[1], Style::Bold));
        i = caps.get(0).unwrap().end();
    }

    while i < text.len() {
        let rest = &text[i..];
        if rest.starts_with("***") && !bold && !italic {
            match rest[3..].find("***") {
                Some(end) => {
                    runs.push(Run::new(&rest[3..3 + end], Style::BoldItalic));
                    i += end + 6;
                }
                None => {
                    runs.push(Run::new("***", Style::Normal));
                    i += 3;
                }
            }
        } else if rest.starts_with("**") {
            bold = !bold;
            i += 2;
        } else if rest.starts_with('*') {
            italic = !italic;
            i += 1;
        } else if rest.starts_with('^') {
            let end = rest.find(' ').unwrap_or(rest.len());
            runs.push(Run::new(&rest[..end], Style::from_toggles(bold, italic)));
            i += end;
        } else {
            let end = rest.find(['*', '^']).unwrap_or(rest.len());
            runs.push(Run::new(&rest[..end], Style::from_toggles(bold, italic)));
            i += end;
        }
    }

    runs
}

/// Split `^digits` matches out of each run into superscript-styled runs.
///
/// Carets not followed by digits stay embedded as literal text.
fn resolve_superscripts(runs: Vec<Run>) -> Vec<Run> {
    let mut out = Vec::new();

    for run in runs {
        let mut last = 0;
        for caps in SUPERSCRIPT.captures_iter(&run.text) {
            let whole = caps.get(0).unwrap();
            if whole.start() > last {
                out.push(Run::new(&run.text[last..whole.start()], run.style));
            }
            out.push(Run::new(&caps[1], run.style.with_superscript()));
            last = whole.end();
        }
        if last == 0 {
            out.push(run);
        } else if last < run.text.len() {
            out.push(Run::new(&run.text[last..], run.style));
        }
    }

    out
}
