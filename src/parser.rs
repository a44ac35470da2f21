use once_cell::sync::Lazy;
use regex::Regex;

use crate::block::{Block, ListKind, Run, Style};
use crate::inline;
use crate::line::{self, Line};
use crate::preprocess;

// One or more digit groups each closed by a period, so multi-level labels
// like `1.2. ` are captured whole.
static NUMBER_LABEL: Lazy<Regex> = Lazy::new(|| Regex::new(r"^((?:\d+\.)+) ").unwrap());

/// Parse note text into an ordered block sequence.
///
/// The transform is total: every input, including the empty string, yields a
/// valid block sequence, and every line classifies (the paragraph case is the
/// fallback).
pub fn parse(text: &str) -> Vec<Block> {
    preprocess::preprocess(line::split_lines(text))
        .into_iter()
        .map(classify)
        .collect()
}

fn classify(line: Line) -> Block {
    if let Some((level, rest)) = heading_prefix(&line.text) {
        return Block::Heading {
            level,
            runs: inline::tokenize(rest),
        };
    }

    if let Some(rest) = line.text.strip_prefix("- ") {
        return Block::ListItem {
            kind: ListKind::Bullet,
            tier: line.indent.min(2),
            number_label: None,
            runs: inline::tokenize(rest),
        };
    }

    if let Some(caps) = NUMBER_LABEL.captures(&line.text) {
        let label = caps[1].to_string();
        let rest = &line.text[caps.get(0).unwrap().end()..];
        // The numeral stays visible exactly as written: it leads the content
        // runs as a bold prefix instead of relying on sink auto-numbering.
        let mut runs = vec![Run::new(format!("{label} "), Style::Bold)];
        runs.extend(inline::tokenize(rest));
        return Block::ListItem {
            kind: ListKind::Number,
            tier: line.indent.min(2),
            number_label: Some(label),
            runs,
        };
    }

    Block::Paragraph {
        indent: line.indent,
        runs: inline::tokenize(&line.text),
    }
}

fn heading_prefix(text: &str) -> Option<(u8, &str)> {
    let hashes = text.bytes().take_while(|b| *b == b'#').count();
    if (1..=6).contains(&hashes) {
        if let Some(rest) = text[hashes..].strip_prefix(' ') {
            return Some((hashes as u8, rest));
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(text: &str, style: Style) -> Run {
        Run::new(text, style)
    }

    #[test]
    fn empty_input_is_one_empty_paragraph() {
        assert_eq!(
            parse(""),
            vec![Block::Paragraph {
                indent: 0,
                runs: vec![],
            }]
        );
    }

    #[test]
    fn totality_on_marker_soup() {
        // Degenerate marker combinations classify without fault.
        for input in ["*** [ ^ #", "^", "1.", "- ", "####### x", "***", "[]"] {
            let blocks = parse(input);
            assert_eq!(blocks.len(), 1);
        }
    }

    #[test]
    fn heading_levels() {
        assert_eq!(
            parse("# One"),
            vec![Block::Heading {
                level: 1,
                runs: vec![run("One", Style::Normal)],
            }]
        );
        assert_eq!(
            parse("###### Six"),
            vec![Block::Heading {
                level: 6,
                runs: vec![run("Six", Style::Normal)],
            }]
        );
    }

    #[test]
    fn seven_hashes_is_a_paragraph() {
        assert!(matches!(
            parse("####### nope").as_slice(),
            [Block::Paragraph { .. }]
        ));
    }

    #[test]
    fn hash_without_space_is_a_paragraph() {
        assert!(matches!(parse("#tag").as_slice(), [Block::Paragraph { .. }]));
    }

    #[test]
    fn setext_promotion() {
        assert_eq!(
            parse("Title\n---\nBody"),
            vec![
                Block::Heading {
                    level: 2,
                    runs: vec![run("Title", Style::Normal)],
                },
                Block::Paragraph {
                    indent: 0,
                    runs: vec![run("Body", Style::Normal)],
                },
            ]
        );
    }

    #[test]
    fn bullet_item_with_tier_from_indentation() {
        assert_eq!(
            parse("- top\n  - nested\n        - deep"),
            vec![
                Block::ListItem {
                    kind: ListKind::Bullet,
                    tier: 0,
                    number_label: None,
                    runs: vec![run("top", Style::Normal)],
                },
                Block::ListItem {
                    kind: ListKind::Bullet,
                    tier: 1,
                    number_label: None,
                    runs: vec![run("nested", Style::Normal)],
                },
                Block::ListItem {
                    kind: ListKind::Bullet,
                    tier: 2,
                    number_label: None,
                    runs: vec![run("deep", Style::Normal)],
                },
            ]
        );
    }

    #[test]
    fn star_bullet_is_canonicalized() {
        assert_eq!(
            parse("* item"),
            vec![Block::ListItem {
                kind: ListKind::Bullet,
                tier: 0,
                number_label: None,
                runs: vec![run("item", Style::Normal)],
            }]
        );
    }

    #[test]
    fn numbered_items_keep_their_labels() {
        assert_eq!(
            parse("1. First\n2. Second"),
            vec![
                Block::ListItem {
                    kind: ListKind::Number,
                    tier: 0,
                    number_label: Some("1.".to_string()),
                    runs: vec![run("1. ", Style::Bold), run("First", Style::Normal)],
                },
                Block::ListItem {
                    kind: ListKind::Number,
                    tier: 0,
                    number_label: Some("2.".to_string()),
                    runs: vec![run("2. ", Style::Bold), run("Second", Style::Normal)],
                },
            ]
        );
    }

    #[test]
    fn multi_level_numeral_label() {
        assert_eq!(
            parse("1.2. Sub"),
            vec![Block::ListItem {
                kind: ListKind::Number,
                tier: 0,
                number_label: Some("1.2.".to_string()),
                runs: vec![run("1.2. ", Style::Bold), run("Sub", Style::Normal)],
            }]
        );
    }

    #[test]
    fn numeral_without_trailing_space_is_a_paragraph() {
        assert!(matches!(
            parse("1.First").as_slice(),
            [Block::Paragraph { .. }]
        ));
    }

    #[test]
    fn paragraph_keeps_indent_level() {
        assert_eq!(
            parse("    deep text"),
            vec![Block::Paragraph {
                indent: 2,
                runs: vec![run("deep text", Style::Normal)],
            }]
        );
    }

    #[test]
    fn footnote_reference_line_round_trip() {
        // `[^3^]` normalizes to a caret marker, which at line start renders
        // as a bold footnote number.
        assert_eq!(
            parse("[^3^] A note"),
            vec![Block::Paragraph {
                indent: 0,
                runs: vec![run("3", Style::Bold), run(" A note", Style::Normal)],
            }]
        );
    }

    #[test]
    fn blocks_follow_source_line_order() {
        let blocks = parse("# H\n- a\n1. b\ntext");
        assert!(matches!(blocks[0], Block::Heading { .. }));
        assert!(matches!(
            blocks[1],
            Block::ListItem {
                kind: ListKind::Bullet,
                ..
            }
        ));
        assert!(matches!(
            blocks[2],
            Block::ListItem {
                kind: ListKind::Number,
                ..
            }
        ));
        assert!(matches!(blocks[3], Block::Paragraph { .. }));
    }
}
