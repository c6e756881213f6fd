// src/write/mod.rs
use anyhow::{Context, Result};
use std::path::Path;

use crate::extract::Table;

/// Serialize `table` to a comma-delimited UTF-8 file at `path`: one header
/// line plus one line per data row, no synthetic index column. Creates or
/// truncates `path`.
pub fn write_csv(table: &Table, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create {}", path.display()))?;

    wtr.write_record(&table.headers)?;
    for row in &table.rows {
        wtr.write_record(row)?;
    }
    wtr.flush()
        .with_context(|| format!("Failed to flush {}", path.display()))?;

    Ok(())
}
