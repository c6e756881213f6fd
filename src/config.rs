// src/config.rs
use crate::extract::HeaderMode;

/// Sent on every request so the sites serve the same markup they serve a
/// desktop browser.
pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/108.0.0.0 Safari/537.36";

/// Directory the output CSVs land in, relative to the working directory.
pub const OUT_DIR: &str = "data";

/// One scrape target: where to fetch, how its table marks up its header,
/// and the file name to write under [`OUT_DIR`].
#[derive(Debug)]
pub struct Source<'a> {
    pub name: &'a str,
    pub url: &'a str,
    pub out_file: &'a str,
    pub header_mode: HeaderMode,
}

/// The two scrape targets, in the order they are run.
///
/// The CPI page repeats its header inline as an ordinary row; the Yahoo
/// history page uses dedicated `th` cells. Hence the differing modes.
pub static SOURCES: &[Source<'static>] = &[
    Source {
        name: "cpi",
        url: "https://www.usinflationcalculator.com/inflation/consumer-price-index-and-annual-percent-changes-from-1913-to-2008/",
        out_file: "cpi_data.csv",
        header_mode: HeaderMode::FirstDataRow,
    },
    Source {
        name: "sp500",
        url: "https://finance.yahoo.com/quote/%5EGSPC/history/?frequency=1mo&period1=631152000&period2=1738454400",
        out_file: "sp500_data.csv",
        header_mode: HeaderMode::SeparateHeaderScan,
    },
];
