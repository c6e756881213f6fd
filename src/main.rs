use anyhow::{bail, Context, Result};
use econscraper::{config, scrape_source};
use reqwest::Client;
use std::{fs, path::Path};
use tracing::{error, info};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) configure client + output dir ────────────────────────────
    let client = Client::builder()
        .user_agent(config::BROWSER_USER_AGENT)
        .build()
        .context("building HTTP client")?;
    let out_dir = Path::new(config::OUT_DIR);
    fs::create_dir_all(out_dir)
        .with_context(|| format!("creating output dir {}", out_dir.display()))?;

    // ─── 3) run both source pipelines ────────────────────────────────
    // The two sources share no state, so their failures stay isolated:
    // each outcome is reported on its own and neither aborts the other.
    let (cpi, sp500) = tokio::join!(
        scrape_source(&client, &config::SOURCES[0], out_dir),
        scrape_source(&client, &config::SOURCES[1], out_dir),
    );

    let mut failures = 0;
    for (source, outcome) in config::SOURCES.iter().zip([cpi, sp500]) {
        if let Err(err) = outcome {
            error!("{} pipeline failed: {:#}", source.name, err);
            failures += 1;
        }
    }
    if failures > 0 {
        bail!("{failures} of {} source pipelines failed", config::SOURCES.len());
    }

    info!("all done");
    Ok(())
}
