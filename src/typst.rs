use typst_as_lib::TypstEngine;
use typst_as_lib::typst_kit_options::TypstKitFontOptions;
use typst_pdf::PdfOptions;

use crate::block::{ListKind, Run};
use crate::config::Config;
use crate::sink::{DocumentSink, SinkError};

/// Document sink that accumulates Typst markup and compiles it to PDF bytes.
///
/// Tier maps to list nesting through two-space indentation of `-` markers;
/// numbered items render their own numeral label (already the leading run)
/// inside a padded block instead of Typst auto-numbering, so the visible
/// numeral always matches the source. Paragraph indentation is one
/// `indent_unit` of left padding per level.
pub struct TypstSink {
    out: String,
    indent_unit: String,
    in_list: bool,
}

impl TypstSink {
    pub fn new(config: &Config) -> Self {
        let mut out = String::from("#set par(linebreaks: \"optimized\")\n");
        if config.page.numbers {
            out.push_str("#set page(numbering: \"1\")\n");
        }
        out.push('\n');
        Self {
            out,
            indent_unit: config.layout.indent_unit.clone(),
            in_list: false,
        }
    }

    /// The Typst markup accumulated so far.
    pub fn into_markup(self) -> String {
        self.out
    }

    // A blank line after the last bullet keeps following content out of the
    // list.
    fn close_list(&mut self) {
        if self.in_list {
            self.out.push('\n');
            self.in_list = false;
        }
    }

    fn push_runs(&mut self, runs: &[Run]) {
        for run in runs {
            push_run(run, &mut self.out);
        }
    }

    fn push_pad_open(&mut self, levels: u8) {
        self.out
            .push_str(&format!("#pad(left: {} * {})[", self.indent_unit, levels));
    }
}

impl DocumentSink for TypstSink {
    fn append_heading(&mut self, level: u8, runs: &[Run]) {
        self.close_list();
        for _ in 0..level {
            self.out.push('=');
        }
        self.out.push(' ');
        self.push_runs(runs);
        self.out.push_str("\n\n");
    }

    fn append_list_item(&mut self, kind: ListKind, tier: u8, runs: &[Run], _label: Option<&str>) {
        match kind {
            ListKind::Bullet => {
                for _ in 0..tier {
                    self.out.push_str("  ");
                }
                self.out.push_str("- ");
                self.push_runs(runs);
                self.out.push('\n');
                self.in_list = true;
            }
            ListKind::Number => {
                self.close_list();
                self.push_pad_open(tier);
                self.push_runs(runs);
                self.out.push_str("]\n");
            }
        }
    }

    fn append_paragraph(&mut self, indent: u8, runs: &[Run]) {
        self.close_list();
        if runs.is_empty() {
            self.out.push('\n');
            return;
        }
        if indent > 0 {
            self.push_pad_open(indent);
            self.push_runs(runs);
            self.out.push_str("]\n\n");
        } else {
            self.push_runs(runs);
            self.out.push_str("\n\n");
        }
    }

    fn serialize(&mut self) -> Result<Vec<u8>, SinkError> {
        use typst_library::layout::PagedDocument;

        let font_options = TypstKitFontOptions::new()
            .include_embedded_fonts(true)
            .include_system_fonts(false);

        let engine = TypstEngine::builder()
            .main_file(self.out.clone())
            .search_fonts_with(font_options)
            .build();

        let doc: PagedDocument = engine
            .compile()
            .output
            .map_err(|e| SinkError::Compile(format!("{e:?}")))?;

        typst_pdf::pdf(&doc, &PdfOptions::default())
            .map_err(|e| SinkError::Export(format!("{e:?}")))
    }
}

fn push_run(run: &Run, out: &mut String) {
    let text = run.text.as_str();
    let trimmed = text.trim_end_matches(' ');
    let trail = &text[trimmed.len()..];
    let lead_len = trimmed.len() - trimmed.trim_start_matches(' ').len();
    let (lead, core) = trimmed.split_at(lead_len);

    // Styled whitespace is invisible, and Typst emphasis markers do not close
    // across it, so edge spaces stay outside the markers.
    if core.is_empty() || !(run.style.bold() || run.style.italic() || run.style.superscript()) {
        escape_into(text, out);
        return;
    }

    let mut piece = String::new();
    escape_into(core, &mut piece);
    if run.style.bold() {
        piece = format!("*{piece}*");
    }
    if run.style.italic() {
        piece = format!("_{piece}_");
    }
    if run.style.superscript() {
        piece = format!("#super[{piece}]");
    }
    out.push_str(lead);
    out.push_str(&piece);
    out.push_str(trail);
}

// Escape characters Typst would otherwise interpret as markup.
fn escape_into(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '#' | '*' | '_' | '@' | '$' | '\\' | '`' | '<' | '>' | '[' | ']' => {
                out.push('\\');
                out.push(ch);
            }
            _ => out.push(ch),
        }
    }
}
