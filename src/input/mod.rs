use std::path::Path;

pub mod reader;
pub mod table;

use crate::model::rows::RawRow;
use table::{parse_inline_row, parse_table};

#[derive(Debug, thiserror::Error)]
pub enum InputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("missing input: {0}")]
    MissingInput(String),
    #[error("parse error: {0}")]
    Parse(String),
}

#[derive(Debug, Clone)]
pub struct InputBundle {
    pub rows: Vec<RawRow>,
    pub source: String,
}

/// Reads the frequency table file (if any) and appends inline `SCORE:COUNT` rows.
pub fn load_input(path: Option<&Path>, inline: &[String]) -> Result<InputBundle, InputError> {
    if path.is_none() && inline.is_empty() {
        return Err(InputError::MissingInput(
            "provide --input or at least one --row".to_string(),
        ));
    }

    let mut rows = Vec::new();
    let mut sources = Vec::new();
    if let Some(path) = path {
        if !path.is_file() {
            return Err(InputError::MissingInput(format!(
                "table file not found: {}",
                path.display()
            )));
        }
        let reader = reader::open_maybe_gz(path)?;
        let table_rows = parse_table(reader)?;
        tracing::info!(
            path = %path.display(),
            rows = table_rows.len(),
            "read frequency table"
        );
        rows.extend(table_rows);
        sources.push(path.display().to_string());
    }

    for spec in inline {
        rows.push(parse_inline_row(spec)?);
    }
    if !inline.is_empty() {
        sources.push("inline".to_string());
    }

    Ok(InputBundle {
        rows,
        source: sources.join("+"),
    })
}

#[cfg(test)]
#[path = "../../tests/src_inline/input/tests.rs"]
mod tests;
