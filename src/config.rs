// src/config.rs

use std::{env, path::PathBuf};

use dotenv::dotenv;
use eyre::Result;
use tracing::info;

use crate::network::Network;

/// Well-known dev-node account key (hardhat/anvil account #1). Used when no
/// PRIVATE_KEY is configured so localhost runs work out of the box.
const DEV_PRIVATE_KEY: &str =
    "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";

const LOCAL_RPC_URL: &str = "http://localhost:8545";
const GOERLI_RPC_URL: &str = "https://goerli.infura.io/v3/9aa3d95b3bc440fa88ea12eaa4456161";

const DEFAULT_ARTIFACTS_DIR: &str = "artifacts";

#[derive(Debug, Clone)]
pub struct Config {
    /// Target network for this run.
    pub network: Network,
    /// HTTP RPC endpoint of the target network.
    pub rpc_url: String,
    /// Deployment credential.
    pub private_key: String,
    /// Directory holding compiled contract bytecode, one `<Name>.bin` per
    /// contract.
    pub artifacts_dir: PathBuf,
    /// Block-explorer verification key. Carried for the verification service;
    /// nothing in this crate calls the explorer API.
    pub etherscan_api_key: Option<String>,
}

/// CLI-provided settings. These take precedence over the environment and are
/// applied before any default is resolved.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub network: Option<String>,
    pub rpc_url: Option<String>,
    pub artifacts_dir: Option<PathBuf>,
}

/// Builds the process configuration once, from `.env` and the environment.
/// The result is passed by parameter into the flows; nothing reads the
/// environment after this returns.
pub fn load_config() -> Result<Config> {
    load_config_with(ConfigOverrides::default())
}

/// Like [`load_config`], with CLI overrides folded in. The network override
/// participates in endpoint resolution: `--network goerli` without an
/// explicit RPC_URL selects goerli's default endpoint, never the local node.
pub fn load_config_with(overrides: ConfigOverrides) -> Result<Config> {
    dotenv().ok();

    let parse_optional = |var_name: &str| -> Option<String> {
        env::var(var_name).ok().filter(|s| !s.is_empty())
    };

    let network =
        Network::from_env_value(overrides.network.or_else(|| env::var("NETWORK").ok()));
    let rpc_url = overrides
        .rpc_url
        .or_else(|| parse_optional("RPC_URL"))
        .unwrap_or_else(|| default_rpc_url(&network));
    let private_key = parse_optional("PRIVATE_KEY").unwrap_or_else(|| DEV_PRIVATE_KEY.to_string());
    let artifacts_dir = overrides
        .artifacts_dir
        .or_else(|| parse_optional("ARTIFACTS_DIR").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_ARTIFACTS_DIR));
    let etherscan_api_key = parse_optional("ETHERSCAN_API_KEY");

    info!("Configuration loaded. Network: {}", network);
    Ok(Config {
        network,
        rpc_url,
        private_key,
        artifacts_dir,
        etherscan_api_key,
    })
}

/// Endpoint used when RPC_URL is not set: the pinned public endpoint for
/// networks we know, the local dev node otherwise.
fn default_rpc_url(network: &Network) -> String {
    match network {
        Network::Named(name) if name == "goerli" => GOERLI_RPC_URL.to_string(),
        _ => LOCAL_RPC_URL.to_string(),
    }
}
