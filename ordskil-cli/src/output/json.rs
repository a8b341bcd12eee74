//! JSON output: one object per line with the keys `k` (kind name),
//! `t` (text), `v` (value), `o` (original) and `s` (offsets). Sentence
//! markers reduce to their kind, e.g. `{"k":"BEGIN SENT"}`.

use std::io::Write;

use anyhow::Result;
use ordskil_core::{Token, TokenKind, TokenValue};
use serde::Serialize;
use serde_json::{json, Value};

use super::TokenWriter;

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        JsonWriter { writer }
    }
}

/// One output line. Field order is part of the wire format.
#[derive(Debug, Serialize)]
struct TokenRecord<'a> {
    k: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    t: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    v: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    o: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    s: Option<Vec<u32>>,
}

fn value_field(token: &Token) -> Option<Value> {
    let val = token.val.as_ref()?;
    let v = match val {
        TokenValue::Meanings(meanings) => {
            json!(meanings.iter().map(|m| m.stem.as_str()).collect::<Vec<_>>())
        }
        TokenValue::Number(n) | TokenValue::Percent(n) => json!(n),
        TokenValue::Year(y) => json!(y),
        TokenValue::Ordinal(n) => json!(n),
        TokenValue::Amount { value, currency } => json!([json!(value), json!(currency)]),
        TokenValue::Currency(iso) => json!(iso),
        TokenValue::Punct { symbol, .. } => json!(symbol),
        TokenValue::Date { year, month, day } => json!([year, month, day]),
        TokenValue::Time {
            hour,
            minute,
            second,
        } => json!([hour, minute, second]),
        TokenValue::Timestamp {
            year,
            month,
            day,
            hour,
            minute,
            second,
        } => json!([
            json!(year),
            json!(month),
            json!(day),
            json!(hour),
            json!(minute),
            json!(second)
        ]),
        TokenValue::Telno {
            number,
            country_code,
        } => json!([number, country_code]),
        TokenValue::NumberWithLetter { number, letter } => {
            json!([json!(number), json!(letter.to_string())])
        }
        TokenValue::Measurement { unit, value } => json!([json!(unit), json!(value)]),
        TokenValue::Username(handle) => json!(handle),
        TokenValue::Ssn(ssn) => json!(ssn),
    };
    Some(v)
}

impl<W: Write> TokenWriter for JsonWriter<W> {
    fn write_token(&mut self, token: &Token) -> Result<()> {
        if token.kind == TokenKind::EndSentinel {
            return Ok(());
        }
        let record = if token.kind.is_meta() {
            // Markers reduce to their kind, keeping any absorbed original
            TokenRecord {
                k: token.kind.name(),
                t: None,
                v: None,
                o: (!token.original.is_empty()).then_some(token.original.as_str()),
                s: None,
            }
        } else {
            TokenRecord {
                k: token.kind.name(),
                t: Some(&token.txt),
                v: value_field(token),
                o: Some(&token.original),
                s: Some(token.offsets.iter().copied().collect()),
            }
        };
        writeln!(self.writer, "{}", serde_json::to_string(&record)?)?;
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

    fn render(text: &str) -> Vec<Value> {
        let mut buf = Vec::new();
        {
            let mut w = JsonWriter::new(&mut buf);
            for t in tokenize(text, &TokenizerOptions::default()).unwrap() {
                w.write_token(&t).unwrap();
            }
            w.finish().unwrap();
        }
        String::from_utf8(buf)
            .unwrap()
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect()
    }

    #[test]
    fn marker_lines_and_token_lines() {
        let lines = render("Hann kom.");
        assert_eq!(lines[0]["k"], "BEGIN SENT");
        assert_eq!(lines[1]["k"], "WORD");
        assert_eq!(lines[1]["t"], "Hann");
        assert_eq!(lines[1]["s"], json!([0, 1, 2, 3]));
        assert_eq!(lines.last().unwrap()["k"], "END SENT");
    }

    #[test]
    fn values_serialize_per_kind() {
        let lines = render("kl. 15:30 kostaði €100.");
        let time = lines.iter().find(|l| l["k"] == "TIME").unwrap();
        assert_eq!(time["v"], json!([15, 30, 0]));
        let amount = lines.iter().find(|l| l["k"] == "AMOUNT").unwrap();
        assert_eq!(amount["v"], json!([100.0, "EUR"]));
    }

    #[test]
    fn field_order_is_stable() {
        let lines_raw = {
            let mut buf = Vec::new();
            let mut w = JsonWriter::new(&mut buf);
            for t in tokenize("orð", &TokenizerOptions::default()).unwrap() {
                w.write_token(&t).unwrap();
            }
            String::from_utf8(buf).unwrap()
        };
        let word_line = lines_raw.lines().nth(1).unwrap();
        assert!(word_line.starts_with("{\"k\":\"WORD\",\"t\":\"orð\""), "{word_line}");
    }
}
