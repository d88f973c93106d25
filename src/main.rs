// NEO Impact command line entry point

use clap::Parser;

use neo_impact_lib::cli::{describe_error, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    neo_impact_lib::init_tracing();

    let cli = Cli::parse();
    neo_impact_lib::run(cli)
        .await
        .map_err(|e| anyhow::anyhow!(describe_error(&e)))
}
