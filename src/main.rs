use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{bail, Context};
use boardbook_meetings::{ListingPage, RowOutcome, Spider, SpiderConfig};
use chrono::{NaiveDate, NaiveDateTime};
use clap::{Parser, Subcommand};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "boardbook_meetings", about = "Extract board meetings from a saved BoardBook listing page")]
struct Cli {
    /// Spider config file (TOML); MEETINGS_* env vars override it
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print meetings as JSON lines
    Parse {
        /// Saved listing page (HTML)
        file: PathBuf,
        /// Page URL recorded as each meeting's source (default: configured start URL)
        #[arg(short, long)]
        url: Option<String>,
        /// Reference time for status, YYYY-MM-DD or YYYY-MM-DDTHH:MM[:SS] (default: now)
        #[arg(long)]
        now: Option<String>,
        /// One pretty-printed JSON array instead of JSON lines
        #[arg(long)]
        pretty: bool,
    },
    /// Show what happened to each candidate row
    Rows {
        /// Saved listing page (HTML)
        file: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();

    let cfg = SpiderConfig::load(cli.config.as_deref()).context("Failed to load spider config")?;
    let spider = Spider::from_config(&cfg)?;
    info!(spider = %spider.name, agency = %spider.agency, "Loaded spider");

    match cli.command {
        Commands::Parse { file, url, now, pretty } => {
            let page = read_page(&file)?;
            let page_url = url.unwrap_or_else(|| spider.start_url.clone());
            let reference_time = match now {
                Some(s) => parse_reference_time(&s)?,
                None => chrono::Local::now().naive_local(),
            };

            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            let mut count = 0usize;

            if pretty {
                let meetings: Vec<_> = spider.meetings(&page, &page_url, reference_time).collect();
                count = meetings.len();
                serde_json::to_writer_pretty(&mut out, &meetings)?;
                writeln!(out)?;
            } else {
                for meeting in spider.meetings(&page, &page_url, reference_time) {
                    serde_json::to_writer(&mut out, &meeting)?;
                    writeln!(out)?;
                    count += 1;
                }
            }

            if count == 0 {
                warn!("No meetings found in {}", file.display());
            }
            info!(
                "Extracted {} meetings in {:.1}ms",
                count,
                t0.elapsed().as_secs_f64() * 1000.0
            );
        }
        Commands::Rows { file } => {
            let page = read_page(&file)?;
            let reference_time = chrono::Local::now().naive_local();

            println!("{:>3} | {:<9} | {:<9} | {}", "#", "Outcome", "Status", "Detail");
            println!("{}", "-".repeat(80));

            let mut assembled = 0usize;
            let mut skipped = 0usize;
            for (i, outcome) in spider
                .outcomes(&page, &spider.start_url, reference_time)
                .enumerate()
            {
                match outcome {
                    RowOutcome::Assembled(m) => {
                        assembled += 1;
                        println!(
                            "{:>3} | {:<9} | {:<9} | {}",
                            i + 1,
                            "assembled",
                            m.status.as_str(),
                            truncate(&m.id, 64)
                        );
                    }
                    RowOutcome::Skipped { text } => {
                        skipped += 1;
                        println!(
                            "{:>3} | {:<9} | {:<9} | {}",
                            i + 1,
                            "skipped",
                            "-",
                            truncate(&text, 64)
                        );
                    }
                }
            }

            println!("\n{} rows | {} assembled | {} skipped", assembled + skipped, assembled, skipped);
            if assembled + skipped == 0 {
                warn!("No rows matched the row selector");
            }
        }
    }

    Ok(())
}

fn read_page(path: &Path) -> anyhow::Result<ListingPage> {
    let markup = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    Ok(ListingPage::parse(&markup))
}

fn parse_reference_time(s: &str) -> anyhow::Result<NaiveDateTime> {
    let s = s.trim();
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Ok(dt);
        }
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Ok(d.and_time(chrono::NaiveTime::MIN));
    }
    bail!("Unrecognized --now value: {}", s)
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max).collect();
        format!("{}...", truncated)
    }
}
