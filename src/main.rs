// src/main.rs

use std::path::PathBuf;

use clap::Parser;
use eyre::Result;

use nft_feeds_deploy::{
    config::{load_config_with, ConfigOverrides},
    deploy, logging,
    record::Recorder,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Deploys the NFT floor price feed contract and records its address", long_about = None)]
struct Cli {
    /// Optional: target network name, overriding the NETWORK environment variable.
    #[arg(long, value_name = "NETWORK")]
    network: Option<String>,

    /// Optional: RPC endpoint, overriding RPC_URL.
    #[arg(long, value_name = "URL")]
    rpc_url: Option<String>,

    /// Optional: compiled-artifact directory, overriding ARTIFACTS_DIR.
    #[arg(long, value_name = "DIR")]
    artifacts_dir: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let config = load_config_with(ConfigOverrides {
        network: cli.network,
        rpc_url: cli.rpc_url,
        artifacts_dir: cli.artifacts_dir,
    })?;

    deploy::run(&config, &Recorder::default()).await
}
