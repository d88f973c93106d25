// NEO Impact - Hypothetical impact risk reports for Near-Earth Objects
// Library entry point shared by the CLI binary and tests

pub mod api_client;
pub mod classification;
pub mod cli;
pub mod config;
pub mod error;
pub mod feed;
pub mod neo_record;
pub mod physics_engine;
pub mod report;

use std::path::Path;

use chrono::Utc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_client::{NeoObject, NeoWsClient};
use cli::{Cli, Command};
use config::Config;
use error::Result;

pub use report::{analyze, generate_report, NeoAnalysis, Section, SECTION_ORDER};

/// Install the stderr log subscriber; `RUST_LOG` overrides the default filter
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "neo_impact_lib=info,neo_impact=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

pub async fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env()?.with_overrides(cli.api_key, cli.base_url);
    tracing::debug!("Using NeoWs at {}", config.base_url);

    match cli.command {
        Command::Analyze {
            reference_id,
            file,
            date,
            json,
            output,
        } => {
            let neo = match (file, reference_id) {
                (Some(path), _) => {
                    tracing::info!("Reading NEO record from {}", path.display());
                    NeoObject::from_json(&std::fs::read_to_string(&path)?)?
                }
                (None, Some(id)) => {
                    let id = cli::normalize_reference_id(&id)?;
                    NeoWsClient::new(&config)?.fetch_neo(id).await?
                }
                (None, None) => return Err(error::AppError::input(cli::MISSING_ID_MESSAGE)),
            };

            let today = date.unwrap_or_else(|| Utc::now().date_naive());
            let analysis = analyze(&neo, today);
            let text = if json {
                serde_json::to_string_pretty(&analysis)?
            } else {
                analysis.render()
            };
            emit(&text, output.as_deref())
        }
        Command::Feed { start, end } => {
            cli::validate_feed_range(start, end)?;
            let start = start.format("%Y-%m-%d").to_string();
            let end = end.format("%Y-%m-%d").to_string();

            let response = NeoWsClient::new(&config)?.fetch_feed(&start, &end).await?;
            let entries = feed::summarize_feed(&response);
            tracing::info!("Feed returned {} objects", entries.len());
            emit(&feed::render_feed(&response, &entries), None)
        }
    }
}

fn emit(text: &str, output: Option<&Path>) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, text)?;
            tracing::info!("Report written to {}", path.display());
        }
        None => println!("{}", text),
    }
    Ok(())
}
