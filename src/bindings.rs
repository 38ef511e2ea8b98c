// src/bindings.rs
#![allow(clippy::all)]
use ethers::prelude::abigen;

abigen!(
    NFTFloorPriceFeeds,
    r#"[
        function getLatestPrice() external view returns (int256)
    ]"#,
    event_derives(serde::Deserialize, serde::Serialize)
);
