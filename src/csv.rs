//! Minimal CSV parser that turns a sheet export into header-keyed [`Row`]s.

use crate::error::{Result, SheetMapError};
use crate::types::Row;

/// Parse CSV text into rows keyed by the first record's headers.
///
/// Blank records are skipped. Short records are padded with empty cells;
/// cells past the last header are dropped.
pub fn parse_rows(text: &str) -> Result<Vec<Row>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut records = split_records(text, ',')?.into_iter();

    let Some(headers) = records.next() else {
        return Ok(Vec::new());
    };
    let headers: Vec<String> = headers.into_iter().map(|h| h.trim().to_string()).collect();

    let rows = records
        .map(|record| {
            let mut cells = record.into_iter();
            headers
                .iter()
                .map(|header| (header.clone(), cells.next().unwrap_or_default()))
                .collect::<Row>()
        })
        .collect();
    Ok(rows)
}

/// Split CSV text into records, respecting quoted fields.
///
/// Quoted fields may contain separators, `""` escapes and line breaks.
/// A quote inside an unquoted field is kept as a literal character.
/// Records that are entirely empty are dropped.
fn split_records(text: &str, sep: char) -> Result<Vec<Vec<String>>> {
    let mut records = Vec::new();
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut quote_line = 0usize;
    let mut line = 1usize;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if in_quotes {
            if ch == '"' {
                if chars.peek() == Some(&'"') {
                    // Escaped quote
                    current.push('"');
                    chars.next();
                } else {
                    in_quotes = false;
                }
            } else {
                if ch == '\n' {
                    line += 1;
                }
                current.push(ch);
            }
        } else if ch == '"' && current.is_empty() {
            in_quotes = true;
            quote_line = line;
        } else if ch == sep {
            fields.push(std::mem::take(&mut current));
        } else if ch == '\r' || ch == '\n' {
            if ch == '\r' && chars.peek() == Some(&'\n') {
                chars.next();
            }
            line += 1;
            fields.push(std::mem::take(&mut current));
            push_record(&mut records, std::mem::take(&mut fields));
        } else {
            current.push(ch);
        }
    }

    if in_quotes {
        return Err(SheetMapError::Csv(format!(
            "unterminated quoted field starting on line {quote_line}"
        )));
    }
    if !current.is_empty() || !fields.is_empty() {
        fields.push(current);
        push_record(&mut records, fields);
    }
    Ok(records)
}

fn push_record(records: &mut Vec<Vec<String>>, fields: Vec<String>) {
    if fields.iter().any(|f| !f.is_empty()) {
        records.push(fields);
    }
}
