// src/bin/verify.rs
//
// Read-verification entry point: resolves the floor-price feed at a known
// address and calls its view accessor. No transaction is submitted.

use clap::Parser;
use ethers::types::Address;
use eyre::{Result, WrapErr};
use tracing::info;

use nft_feeds_deploy::{config::load_config, feed, logging, network::NetworkContext};

#[derive(Parser, Debug)]
#[command(author, version, about = "Reads the latest price from a deployed NFT floor price feed", long_about = None)]
struct Cli {
    /// Feed contract address to query.
    #[arg(long, value_name = "ADDRESS", default_value = feed::NFT_FLOOR_PRICE_FEED)]
    address: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let cli = Cli::parse();
    let address = cli
        .address
        .parse::<Address>()
        .wrap_err("Feed address is not a valid hex address")?;

    let config = load_config()?;
    let context = NetworkContext::connect(&config).await?;

    let price = feed::read_latest_price(context.client, address).await?;
    info!("getLatestPrice() = {}", price);
    Ok(())
}
