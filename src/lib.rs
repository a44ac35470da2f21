mod block;
mod config;
mod filename;
mod inline;
mod line;
mod parser;
mod preprocess;
mod sink;
mod typst;

pub use block::{Block, ListKind, Run, Style};
pub use config::Config;
pub use filename::derive_filename;
pub use sink::{DocumentSink, SinkError, convert, emit};
pub use typst::TypstSink;

/// Parse note text into a vector of blocks.
pub fn parse(text: &str) -> Vec<Block> {
    parser::parse(text)
}

/// Convert note text to Typst markup using default config.
pub fn text_to_typst(text: &str) -> String {
    text_to_typst_with_config(text, &Config::default())
}

/// Convert note text to Typst markup with custom config.
pub fn text_to_typst_with_config(text: &str, config: &Config) -> String {
    let blocks = parse(text);
    let mut sink = TypstSink::new(config);
    sink::emit(&blocks, &mut sink);
    sink.into_markup()
}

/// Convert note text to PDF bytes using default config.
pub fn text_to_pdf(text: &str) -> Result<Vec<u8>, SinkError> {
    text_to_pdf_with_config(text, &Config::default())
}

/// Convert note text to PDF bytes with custom config.
pub fn text_to_pdf_with_config(text: &str, config: &Config) -> Result<Vec<u8>, SinkError> {
    let mut sink = TypstSink::new(config);
    sink::convert(text, &mut sink)
}
