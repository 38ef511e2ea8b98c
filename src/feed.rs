// src/feed.rs

use std::sync::Arc;

use ethers::{
    prelude::Middleware,
    types::{Address, I256},
};
use tracing::info;

use crate::{bindings::NFTFloorPriceFeeds, error::ReadError, network::Client};

/// Known pre-deployed floor-price feed on goerli.
pub const NFT_FLOOR_PRICE_FEED: &str = "0x528cb1ce480594f670f4aede6a1c9beda9850c86";

/// Binds the feed interface to a deployed address, checking that code
/// actually exists there. Handles are built on demand and not cached.
pub async fn resolve_feed(
    client: Arc<Client>,
    address: Address,
) -> Result<NFTFloorPriceFeeds<Client>, ReadError> {
    let code = client
        .get_code(address, None)
        .await
        .map_err(|source| ReadError::CallFailure {
            function: "eth_getCode",
            address,
            source: Box::new(source),
        })?;
    if code.is_empty() {
        return Err(ReadError::ResolutionFailure { address });
    }
    Ok(NFTFloorPriceFeeds::new(address, client))
}

/// Calls the feed's `getLatestPrice` accessor. Pure read against the latest
/// block; no transaction is submitted.
pub async fn read_latest_price(client: Arc<Client>, address: Address) -> Result<I256, ReadError> {
    let feed = resolve_feed(client.clone(), address).await?;
    let price = feed
        .get_latest_price()
        .call()
        .await
        .map_err(|source| ReadError::CallFailure {
            function: "getLatestPrice",
            address,
            source: Box::new(source),
        })?;
    info!("Latest price from {:?}: {}", address, price);
    Ok(price)
}
