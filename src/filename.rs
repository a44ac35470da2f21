use once_cell::sync::Lazy;
use regex::Regex;

static NON_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\W+").unwrap());

const MAX_LEN: usize = 42;

/// Derive a file stem from the first line of the input text.
///
/// Runs of non-word characters collapse to a single underscore and the
/// result is truncated to 42 characters. Inputs with no usable first line
/// fall back to `document`.
pub fn derive_filename(text: &str) -> String {
    let first_line = text.lines().next().unwrap_or("");
    let name: String = NON_WORD
        .replace_all(first_line, "_")
        .chars()
        .take(MAX_LEN)
        .collect();
    if name.trim_matches('_').is_empty() {
        return "document".to_string();
    }
    name
}
