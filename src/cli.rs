//! CLI for the metadata extractor.
use crate::error::{HeadmetaError, Result};
use crate::metadata::{extract, Metadata};
use clap::Parser;
use std::io::{self, Read};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "headmeta",
    version,
    about = "Extract page metadata from an HTML <head> (JSON only)"
)]
pub struct Cli {
    /// HTML file to read, or `-` for stdin
    #[arg(default_value = "-")]
    pub input: String,
    /// Print single-line JSON instead of pretty JSON
    #[arg(long)]
    pub compact: bool,
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    let html = read_input(&cli.input)?;
    let meta = extract(&html);
    if meta.is_empty() {
        log::warn!("no metadata tags found in {}", source_label(&cli.input));
    }
    println!("{}", render(&meta, cli.compact)?);
    Ok(())
}

pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        log::debug!("reading html from stdin");
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .map_err(|e| HeadmetaError::read_input("stdin", e))?;
        Ok(buffer)
    } else {
        let path = PathBuf::from(input);
        log::debug!("reading html from {}", path.display());
        std::fs::read_to_string(&path)
            .map_err(|e| HeadmetaError::read_input(path.display().to_string(), e))
    }
}

pub fn render(meta: &Metadata, compact: bool) -> Result<String> {
    let json = if compact {
        serde_json::to_string(meta)?
    } else {
        serde_json::to_string_pretty(meta)?
    };
    Ok(json)
}

fn source_label(input: &str) -> &str {
    if input == "-" {
        "stdin"
    } else {
        input
    }
}
