//! Command-line argument definitions.

use std::path::PathBuf;

use clap::Parser;
use ordskil_core::{KludgyOrdinals, TokenizerOptions};

use crate::error::CliError;

/// Tokenizes Icelandic text.
#[derive(Debug, Parser)]
#[command(name = "tokenize", version, about = "Tokenizes Icelandic text")]
pub struct Cli {
    /// UTF-8 text file to tokenize (default: stdin)
    pub infile: Option<PathBuf>,

    /// UTF-8 output text file (default: stdout)
    pub outfile: Option<PathBuf>,

    /// Output one token per line in CSV format
    #[arg(long)]
    pub csv: bool,

    /// Output one token per line in JSON format
    #[arg(long, conflicts_with = "csv")]
    pub json: bool,

    /// Input contains one sentence per line
    #[arg(short = 's', long)]
    pub one_sent_per_line: bool,

    /// Degree signal in temperature tokens normalized (200° C -> 200 °C)
    #[arg(short = 'm', long)]
    pub convert_measurements: bool,

    /// Numbers combined into one token with percentage word forms
    #[arg(short = 'p', long)]
    pub coalesce_percent: bool,

    /// Output normalized punctuation instead of the original text
    #[arg(short = 'n', long)]
    pub normalize: bool,

    /// Output the original text of tokens
    #[arg(short = 'o', long)]
    pub original: bool,

    /// Composite glyphs not replaced with single code points
    #[arg(short = 'g', long)]
    pub keep_composite_glyphs: bool,

    /// Escape codes from HTML replaced
    #[arg(short = 'e', long)]
    pub replace_html_escapes: bool,

    /// English-style numbers changed to Icelandic style
    #[arg(short = 'c', long)]
    pub convert_numbers: bool,

    /// Kludgy ordinal handling: 0 passes them through, 1 rewrites them as
    /// words, 2 translates them to ordinals
    #[arg(short = 'k', long, value_name = "MODE", default_value_t = 0)]
    pub handle_kludgy_ordinals: u8,
}

impl Cli {
    /// Convert the flags into tokenizer options.
    pub fn tokenizer_options(&self) -> Result<TokenizerOptions, CliError> {
        let kludgy = KludgyOrdinals::from_code(self.handle_kludgy_ordinals).ok_or_else(|| {
            CliError::Options(format!(
                "handle_kludgy_ordinals must be 0, 1 or 2, not {}",
                self.handle_kludgy_ordinals
            ))
        })?;
        Ok(TokenizerOptions::builder()
            .convert_numbers(self.convert_numbers)
            .convert_measurements(self.convert_measurements)
            .replace_composite_glyphs(!self.keep_composite_glyphs)
            .replace_html_escapes(self.replace_html_escapes)
            .one_sent_per_line(self.one_sent_per_line)
            .original(self.original)
            .coalesce_percent(self.coalesce_percent)
            .normalize(self.normalize)
            .kludgy_ordinals(kludgy)
            .build())
    }
}
