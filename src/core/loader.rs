use encoding_rs::{Encoding, SHIFT_JIS, UTF_8};

use crate::domain::model::Table;
use crate::utils::error::{EtlError, Result};

/// Parses raw CSV bytes into a [`Table`], auto-detecting the text encoding.
///
/// Hand-edited files arrive as UTF-8 with or without a BOM; spreadsheet
/// exports arrive as cp932. Candidates are tried in order and the first
/// error-free decode wins.
pub fn load_table(bytes: &[u8], path: &str) -> Result<Table> {
    let text = decode_text(bytes).ok_or_else(|| EtlError::DecodeError {
        path: path.to_string(),
    })?;
    parse_table(&text)
}

fn decode_text(bytes: &[u8]) -> Option<String> {
    // UTF-8 with BOM removal, then the cp932-compatible WHATWG Shift_JIS,
    // then plain UTF-8.
    let candidates: [(&'static Encoding, bool); 3] =
        [(UTF_8, true), (SHIFT_JIS, false), (UTF_8, false)];

    for (encoding, bom_removal) in candidates {
        let (text, had_errors) = if bom_removal {
            encoding.decode_with_bom_removal(bytes)
        } else {
            encoding.decode_without_bom_handling(bytes)
        };
        if !had_errors {
            return Some(text.into_owned());
        }
    }
    None
}

fn parse_table(text: &str) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(|field| field.to_string()).collect());
    }
    Ok(Table::new(rows))
}
