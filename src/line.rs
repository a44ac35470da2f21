/// One source line with its indentation tier resolved.
///
/// The tier is derived once from the leading spaces of the raw line and never
/// recomputed; the stored text has leading and trailing whitespace stripped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub indent: u8,
}

// Leading space count to indentation tier. Counts past the table saturate at
// the deepest tier.
const INDENT_TABLE: [u8; 7] = [0, 0, 1, 1, 2, 2, 2];

fn indent_for(spaces: usize) -> u8 {
    INDENT_TABLE.get(spaces).copied().unwrap_or(2)
}

/// Split raw text into lines, normalizing line endings to `\n`.
pub fn split_lines(text: &str) -> Vec<Line> {
    let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
    normalized
        .split('\n')
        .map(|raw| {
            let spaces = raw.chars().take_while(|c| *c == ' ').count();
            Line {
                text: raw.trim().to_string(),
                indent: indent_for(spaces),
            }
        })
        .collect()
}
