//! Reading the text to tokenize.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};

/// Read the input text as UTF-8, from a file or from stdin.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read input file {}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            Ok(text)
        }
    }
}
