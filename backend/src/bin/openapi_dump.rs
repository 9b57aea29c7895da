//! Print the OpenAPI document as JSON.

use std::io::Write;

use clap::Parser;
use color_eyre::eyre::{Context, Result};
use todo_backend::doc::ApiDoc;
use utoipa::OpenApi;

/// Command-line options for the dump.
#[derive(Debug, Parser)]
#[command(about = "Print the to-do API OpenAPI document")]
struct Args {
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();

    let doc = ApiDoc::openapi();
    let json = if args.pretty {
        doc.to_pretty_json()
    } else {
        doc.to_json()
    }
    .context("failed to serialise OpenAPI document")?;

    let mut stdout = std::io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write OpenAPI document")?;
    Ok(())
}
