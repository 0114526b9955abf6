use std::io::BufRead;

use crate::input::InputError;
use crate::model::rows::RawRow;

/// Splits each non-comment line into score and count fields.
///
/// Field values are kept verbatim; validation happens downstream.
pub fn parse_table<R: BufRead>(mut reader: R) -> Result<Vec<RawRow>, InputError> {
    let mut buf = String::new();
    let mut rows = Vec::new();

    loop {
        buf.clear();
        let read = reader.read_line(&mut buf)?;
        if read == 0 {
            break;
        }
        // Leading separators mark empty fields, so only the terminator is stripped.
        let line = buf.trim_end_matches(['\n', '\r']);
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        rows.push(split_line(line));
    }

    Ok(rows)
}

fn split_line(line: &str) -> RawRow {
    let fields: Vec<&str> = if line.contains('\t') {
        line.split('\t').map(str::trim).collect()
    } else if line.contains(',') {
        line.split(',').map(str::trim).collect()
    } else {
        line.split_whitespace().collect()
    };

    let score = fields.first().copied().unwrap_or("");
    let count = fields.get(1).copied().unwrap_or("");
    RawRow::new(score, count)
}

/// Parses a `SCORE:COUNT` command-line row.
pub fn parse_inline_row(spec: &str) -> Result<RawRow, InputError> {
    let (score, count) = spec
        .split_once(':')
        .ok_or_else(|| InputError::Parse(format!("row {spec:?} is not SCORE:COUNT")))?;
    Ok(RawRow::new(score.trim(), count.trim()))
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/table.rs"]
mod tests;
