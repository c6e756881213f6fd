//! Scrapes two historical-data pages (CPI and S&P 500) and flattens their
//! HTML tables into CSV files.

pub mod config;
pub mod extract;
pub mod fetch;
pub mod write;

use anyhow::{Context, Result};
use reqwest::Client;
use std::path::Path;
use tracing::info;

/// Run one full fetch → extract → write cycle for a single source.
///
/// Each stage's failure is surfaced with the stage and source named in the
/// error; the output file is only written after a successful extraction.
#[tracing::instrument(level = "info", skip_all, fields(source = source.name))]
pub async fn scrape_source(
    client: &Client,
    source: &config::Source<'_>,
    out_dir: &Path,
) -> Result<()> {
    let html = fetch::fetch_page(client, source.url)
        .await
        .with_context(|| format!("fetching {}", source.name))?;

    let table = extract::extract(&html, source.header_mode)
        .with_context(|| format!("extracting {} table", source.name))?;
    info!(
        rows = table.rows.len(),
        cols = table.headers.len(),
        "extracted table"
    );

    let out_path = out_dir.join(source.out_file);
    write::write_csv(&table, &out_path)
        .with_context(|| format!("writing {}", out_path.display()))?;
    info!(path = %out_path.display(), "wrote csv");

    Ok(())
}
