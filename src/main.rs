use std::io::Read;

use anyhow::{Context, Result};
use clap::Parser;

use hypa_parse::PageConfig;

#[derive(Parser)]
#[command(
    name = "hypa",
    version,
    about = "Interprets hypa-formatted plaintext from stdin and writes it out as an HTML document"
)]
struct Cli {
    /// A header for the output document
    #[arg(short, long)]
    title: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value = "html")]
    format: OutputFormat,
}

#[derive(Clone, Copy, clap::ValueEnum)]
enum OutputFormat {
    /// Complete HTML page with inlined CSS
    Html,
    /// The parsed block sequence as JSON
    Json,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The whole input is read before parsing starts.
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("Failed to read stdin")?;

    let doc = hypa_parse::parse(&input)?;

    let output = match cli.format {
        OutputFormat::Html => doc.to_html_page(&PageConfig {
            title: cli.title,
            ..Default::default()
        }),
        OutputFormat::Json => doc.to_json().context("Failed to serialize blocks")?,
    };

    println!("{output}");
    Ok(())
}
