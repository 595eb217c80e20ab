//! Panchang generator binary.
//!
//! Computes daily panchang records and muhurats for directory cities, and
//! runs bulk range sweeps into the in-memory store. Output is JSON on
//! stdout; downstream persistence is a platform concern.
//!
//! # Usage
//!
//! ```bash
//! # One day (defaults to today, configured default city)
//! panchang-gen daily --date 2026-01-15 --city Varanasi
//!
//! # Daily auspicious windows
//! panchang-gen muhurats --date 2026-01-15
//!
//! # A full range, fanned out across workers
//! panchang-gen range --start 2026-01-01 --end 2026-12-31 --city Delhi
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use panchang_engine::models::parse_date;
use panchang_engine::services::bulk;
use panchang_engine::{EngineConfig, MemoryStore, PanchangEngine, PanchangStore};

#[derive(Parser)]
#[command(name = "panchang-gen", about = "Vedic panchang calculation engine")]
struct Cli {
    /// Optional TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compute the daily record for one date.
    Daily {
        /// Date (YYYY-MM-DD); defaults to today.
        #[arg(long)]
        date: Option<String>,
        /// Directory city; defaults to the configured default city.
        #[arg(long)]
        city: Option<String>,
    },
    /// Compute the daily auspicious windows for one date.
    Muhurats {
        #[arg(long)]
        date: Option<String>,
        #[arg(long)]
        city: Option<String>,
    },
    /// Generate an inclusive date range.
    Range {
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        #[arg(long)]
        city: Option<String>,
        /// Worker fan-out; defaults to the configured concurrency.
        #[arg(long)]
        concurrency: Option<usize>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => EngineConfig::load(path)?,
        None => EngineConfig::default(),
    };
    let default_city = config.default_city.clone();
    let default_concurrency = config.bulk_concurrency;
    let engine = PanchangEngine::new(config);

    // "Today" is resolved here, before entering the engine; nothing inside
    // the engine reads the clock.
    let resolve_date = |date: Option<String>| -> anyhow::Result<chrono::NaiveDate> {
        match date {
            Some(s) => Ok(parse_date(&s)?),
            None => Ok(chrono::Local::now().date_naive()),
        }
    };

    match cli.command {
        Command::Daily { date, city } => {
            let date = resolve_date(date)?;
            let city = city.unwrap_or(default_city);
            let record = engine.calculate(date, &city)?;
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Command::Muhurats { date, city } => {
            let date = resolve_date(date)?;
            let city = city.unwrap_or(default_city);
            let muhurats = engine.calculate_muhurats(date, &city)?;
            println!("{}", serde_json::to_string_pretty(&muhurats)?);
        }
        Command::Range {
            start,
            end,
            city,
            concurrency,
        } => {
            let start = parse_date(&start)?;
            let end = parse_date(&end)?;
            let city = city.unwrap_or(default_city);
            let store = Arc::new(MemoryStore::new());

            let outcome = bulk::generate_range(
                Arc::new(engine),
                Arc::clone(&store) as Arc<dyn PanchangStore>,
                start,
                end,
                &city,
                concurrency.unwrap_or(default_concurrency),
            )
            .await;

            info!(
                generated = outcome.generated,
                failed = outcome.failed,
                "range complete"
            );
            println!(
                "{}",
                serde_json::json!({
                    "city": city,
                    "start": start,
                    "end": end,
                    "generated": outcome.generated,
                    "failed": outcome.failed,
                })
            );
        }
    }

    Ok(())
}
