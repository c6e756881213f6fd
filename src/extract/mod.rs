// src/extract/mod.rs
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use thiserror::Error;

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("tr").expect("Invalid CSS selector for table rows"));
static DATA_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("Invalid CSS selector for data cells"));
static HEADER_CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("th").expect("Invalid CSS selector for header cells"));

/// How a page marks up its table header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderMode {
    /// The header is repeated inline as an ordinary data row: the first
    /// surviving row is a stray label row, the second is the header, the
    /// rest are data.
    FirstDataRow,
    /// The header lives in dedicated `th` cells, scanned separately; every
    /// surviving row is data.
    SeparateHeaderScan,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    #[error("document contains no table rows")]
    NoRows,
    #[error("no header row found")]
    MissingHeader,
    #[error("row {row} has {found} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// A rectangular table: every row has exactly `headers.len()` cells.
/// Built once per extraction, handed to the writer, then dropped.
#[derive(Debug)]
pub struct Table {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    /// Values of the named column, in row order.
    pub fn column(&self, name: &str) -> Option<Vec<&str>> {
        let idx = self.headers.iter().position(|h| h == name)?;
        Some(self.rows.iter().map(|row| row[idx].as_str()).collect())
    }
}

/// Pull the table out of `html` into a rectangular [`Table`].
///
/// Scans every `tr` in document order, keeps the trimmed text of its `td`
/// cells (`th` cells never count as data), and drops rows with no data
/// cells. The header comes from `mode`; any surviving data row whose width
/// differs from the header's fails the whole extraction rather than being
/// padded or truncated.
pub fn extract(html: &str, mode: HeaderMode) -> Result<Table, ExtractError> {
    let doc = Html::parse_document(html);

    let mut row_count = 0usize;
    let mut rows: Vec<Vec<String>> = Vec::new();
    for tr in doc.select(&ROW_SELECTOR) {
        row_count += 1;
        let cells: Vec<String> = tr.select(&DATA_CELL_SELECTOR).map(cell_text).collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if row_count == 0 {
        return Err(ExtractError::NoRows);
    }

    let (headers, data) = match mode {
        HeaderMode::FirstDataRow => {
            if rows.len() < 2 {
                return Err(ExtractError::MissingHeader);
            }
            let data = rows.split_off(2);
            let headers = rows.pop().ok_or(ExtractError::MissingHeader)?;
            (headers, data)
        }
        HeaderMode::SeparateHeaderScan => {
            let headers: Vec<String> = doc.select(&HEADER_CELL_SELECTOR).map(cell_text).collect();
            if headers.is_empty() {
                return Err(ExtractError::MissingHeader);
            }
            (headers, rows)
        }
    };

    for (idx, row) in data.iter().enumerate() {
        if row.len() != headers.len() {
            return Err(ExtractError::RowWidth {
                row: idx,
                expected: headers.len(),
                found: row.len(),
            });
        }
    }

    Ok(Table {
        headers,
        rows: data,
    })
}

/// Visible text of an element with nested markup discarded and each text
/// fragment whitespace-stripped.
fn cell_text(el: ElementRef) -> String {
    el.text().map(str::trim).collect()
}
