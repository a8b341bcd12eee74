//! CSV output: one row per token, `kind,txt,value,original,offsets`.
//!
//! Tuple values are joined with `|`, offset lists with `-`. A sentence
//! boundary is marked with a `0,"","","",""` row.

use std::io::Write;

use anyhow::Result;
use ordskil_core::{Token, TokenKind, TokenValue};

use super::{format_number, TokenWriter};

pub struct CsvWriter<W: Write> {
    writer: W,
}

impl<W: Write> CsvWriter<W> {
    pub fn new(writer: W) -> Self {
        CsvWriter { writer }
    }
}

/// Double-quote a string, escaping backslashes and embedded quotes.
fn quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        if c == '\\' || c == '"' {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('"');
    out
}

/// The value column for a token, already quoted where applicable.
fn value_column(token: &Token) -> String {
    let Some(val) = &token.val else {
        return "\"\"".to_string();
    };
    match val {
        TokenValue::Meanings(meanings) => {
            let stems: Vec<&str> = meanings.iter().map(|m| m.stem.as_str()).collect();
            quote(&stems.join("|"))
        }
        TokenValue::Number(n) | TokenValue::Percent(n) => format_number(*n),
        TokenValue::Year(y) => y.to_string(),
        TokenValue::Ordinal(n) => n.to_string(),
        TokenValue::Amount { value, currency } => {
            quote(&format!("{}|{}", format_number(*value), currency))
        }
        TokenValue::Currency(iso) => quote(iso),
        TokenValue::Punct { symbol, .. } => quote(symbol),
        TokenValue::Date { year, month, day } => quote(&format!("{year}|{month}|{day}")),
        TokenValue::Time {
            hour,
            minute,
            second,
        } => quote(&format!("{hour}|{minute}|{second}")),
        TokenValue::Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => quote(&format!("{year}|{month}|{day}|{hour}|{minute}|{second}")),
        TokenValue::Telno {
            number,
            country_code,
        } => quote(&format!("{number}|{country_code}")),
        TokenValue::NumberWithLetter { number, letter } => quote(&format!("{number}|{letter}")),
        TokenValue::Measurement { unit, value } => {
            quote(&format!("{unit}|{}", format_number(*value)))
        }
        TokenValue::Username(handle) => quote(handle),
        TokenValue::Ssn(ssn) => quote(ssn),
    }
}

fn offsets_column(token: &Token) -> String {
    let parts: Vec<String> = token.offsets.iter().map(|o| o.to_string()).collect();
    quote(&parts.join("-"))
}

impl<W: Write> TokenWriter for CsvWriter<W> {
    fn write_token(&mut self, token: &Token) -> Result<()> {
        if !token.txt.is_empty() {
            writeln!(
                self.writer,
                "{},{},{},{},{}",
                token.kind.code(),
                quote(&token.txt),
                value_column(token),
                quote(&token.original),
                offsets_column(token),
            )?;
        } else if token.kind == TokenKind::SentEnd {
            writeln!(self.writer, "0,\"\",\"\",\"\",\"\"")?;
        }
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ordskil_core::{tokenize, TokenizerOptions};

    fn render(text: &str) -> String {
        let mut buf = Vec::new();
        {
            let mut w = CsvWriter::new(&mut buf);
            for t in tokenize(text, &TokenizerOptions::default()).unwrap() {
                w.write_token(&t).unwrap();
            }
            w.finish().unwrap();
        }
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn rows_have_five_columns() {
        let out = render("Hann á kr. 5.999.");
        let amount_row = out
            .lines()
            .find(|l| l.contains("5999|ISK"))
            .expect("amount row present");
        assert!(amount_row.starts_with("13,"));
        assert!(amount_row.contains("\"kr. 5.999\""));
    }

    #[test]
    fn sentence_separator_row() {
        let out = render("Fyrri. Seinni.");
        assert_eq!(out.matches("0,\"\",\"\",\"\",\"\"").count(), 2);
    }

    #[test]
    fn quotes_are_escaped() {
        assert_eq!(quote("a\"b\\c"), "\"a\\\"b\\\\c\"");
    }
}
