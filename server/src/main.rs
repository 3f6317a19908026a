use std::path::PathBuf;

use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod checks;
mod config;
mod http;

use config::read_config;
use content::Portfolio;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[arg(short, long, default_value = "/etc/portfolio/config.toml")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // RUST_LOG overrides, so that the tower-http request spans can be turned
    // up without a rebuild
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("portfolio server starting up, processing config file");

    let config = read_config(PathBuf::from(args.config)).await?;

    info!("performing filesystem sanity checks");

    checks::all(&config)?;

    let portfolio = Portfolio::builtin()?;

    for path in checks::missing_catalog_files(&config, &portfolio) {
        warn!("catalog references {path:?}, which does not exist");
    }

    info!("startup complete!");

    http::svc::serve_http(config).await
}
