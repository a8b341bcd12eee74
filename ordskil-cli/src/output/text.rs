//! Shallow text output: one sentence per line, tokens separated by single
//! spaces (or rendered with their original or normalized surfaces).

use std::io::Write;

use anyhow::Result;
use ordskil_core::{normalized_text, Token};

use super::TokenWriter;

/// How token surfaces are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Surface {
    Text,
    Normalized,
    Original,
}

pub struct TextWriter<W: Write> {
    writer: W,
    surface: Surface,
    current: Vec<String>,
}

impl<W: Write> TextWriter<W> {
    pub fn new(writer: W, surface: Surface) -> Self {
        TextWriter {
            writer,
            surface,
            current: Vec::new(),
        }
    }

    fn separator(&self) -> &'static str {
        if self.surface == Surface::Original {
            ""
        } else {
            " "
        }
    }

    fn flush_sentence(&mut self) -> Result<()> {
        if !self.current.is_empty() {
            let line = self.current.join(self.separator());
            writeln!(self.writer, "{line}")?;
            self.current.clear();
        }
        Ok(())
    }
}

impl<W: Write> TokenWriter for TextWriter<W> {
    fn write_token(&mut self, token: &Token) -> Result<()> {
        if token.kind.is_end() {
            self.flush_sentence()?;
        }
        let text = match self.surface {
            Surface::Text => token.txt.clone(),
            Surface::Normalized => normalized_text(token).to_string(),
            Surface::Original => token.original.clone(),
        };
        if !text.is_empty() && !token.kind.is_meta() {
            self.current.push(text);
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.flush_sentence()?;
        self.writer.flush()?;
        Ok(())
    }
}
