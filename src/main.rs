use std::fs;
use std::path::PathBuf;

use clap::Parser;

use notedoc::Config;

#[derive(Parser)]
#[command(name = "notedoc")]
#[command(about = "Convert note text to a PDF document")]
struct Cli {
    /// Input text file
    input: PathBuf,

    /// Output PDF file (defaults to a name derived from the first line)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let text = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let config = match &cli.config {
        Some(path) => Config::load(path),
        None => Config::default(),
    };

    let pdf_bytes = match notedoc::text_to_pdf_with_config(&text, &config) {
        Ok(bytes) => bytes,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| PathBuf::from(format!("{}.pdf", notedoc::derive_filename(&text))));

    if let Err(e) = fs::write(&output, pdf_bytes) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    println!("Created {}", output.display());
}
