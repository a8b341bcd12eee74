//! The `tokenize` binary: reads UTF-8 text, runs the ordskil tokenizer
//! and writes shallow text, CSV or JSON output.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use anyhow::{Context, Result};
use clap::Parser;

use ordskil_cli::cli::Cli;
use ordskil_cli::input::read_input;
use ordskil_cli::output::{text::Surface, CsvWriter, JsonWriter, TextWriter, TokenWriter};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let cli = Cli::parse();
    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let options = cli.tokenizer_options()?;
    log::debug!("options: {options:?}");

    let text = read_input(cli.infile.as_deref())?;
    log::info!("tokenizing {} bytes", text.len());

    let out: Box<dyn Write> = match &cli.outfile {
        Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
            format!("failed to create output file {}", path.display())
        })?)),
        None => Box::new(BufWriter::new(io::stdout())),
    };

    let mut writer: Box<dyn TokenWriter> = if cli.csv {
        Box::new(CsvWriter::new(out))
    } else if cli.json {
        Box::new(JsonWriter::new(out))
    } else {
        let surface = if cli.normalize {
            Surface::Normalized
        } else if cli.original {
            Surface::Original
        } else {
            Surface::Text
        };
        Box::new(TextWriter::new(out, surface))
    };

    for token in ordskil_core::tokenize(&text, &options)? {
        writer.write_token(&token)?;
    }
    writer.finish()?;
    Ok(())
}
