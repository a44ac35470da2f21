use thiserror::Error;

use crate::block::{Block, ListKind, Run};
use crate::parser;

/// Failures at the document sink boundary.
///
/// The transform itself is total; only serialization can fail, and that
/// failure propagates to the caller unmodified.
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("document compilation failed: {0}")]
    Compile(String),
    #[error("document export failed: {0}")]
    Export(String),
}

/// External collaborator that turns a block sequence into a serialized
/// binary document.
///
/// The sink owns all presentation decisions: mapping `tier` to a named list
/// style, applying per-run bold/italic/superscript flags, and indenting
/// paragraphs proportionally to their indent level.
pub trait DocumentSink {
    fn append_heading(&mut self, level: u8, runs: &[Run]);
    fn append_list_item(&mut self, kind: ListKind, tier: u8, runs: &[Run], label: Option<&str>);
    fn append_paragraph(&mut self, indent: u8, runs: &[Run]);
    fn serialize(&mut self) -> Result<Vec<u8>, SinkError>;
}

/// Feed blocks to the sink in source order.
pub fn emit<S: DocumentSink>(blocks: &[Block], sink: &mut S) {
    for block in blocks {
        match block {
            Block::Heading { level, runs } => sink.append_heading(*level, runs),
            Block::ListItem {
                kind,
                tier,
                number_label,
                runs,
            } => sink.append_list_item(*kind, *tier, runs, number_label.as_deref()),
            Block::Paragraph { indent, runs } => sink.append_paragraph(*indent, runs),
        }
    }
}

/// Run the whole pipeline against a sink.
///
/// `serialize` is called on every path, including inputs that produce zero
/// styled content.
pub fn convert<S: DocumentSink>(text: &str, sink: &mut S) -> Result<Vec<u8>, SinkError> {
    let blocks = parser::parse(text);
    emit(&blocks, sink);
    sink.serialize()
}
