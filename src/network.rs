// src/network.rs

use std::{fmt, sync::Arc};

use ethers::prelude::{Http, LocalWallet, Middleware, Provider, Signer, SignerMiddleware};
use eyre::{Result, WrapErr};
use tracing::info;

use crate::config::Config;

/// Signer-wrapped HTTP client used by every chain interaction in this crate.
pub type Client = SignerMiddleware<Provider<Http>, LocalWallet>;

/// Identity of the network a run is targeting.
///
/// An unset selection is a valid state, not an error: record files written
/// for such runs use the literal `undefined` label, matching the files the
/// previous tooling produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Network {
    Named(String),
    #[default]
    Unnamed,
}

impl Network {
    /// Maps the raw environment value to a network identity. Unset or blank
    /// means unnamed, never an empty-string name.
    pub fn from_env_value(value: Option<String>) -> Self {
        match value {
            Some(name) if !name.trim().is_empty() => Network::Named(name.trim().to_string()),
            _ => Network::Unnamed,
        }
    }

    /// Label used in record file names.
    pub fn label(&self) -> &str {
        match self {
            Network::Named(name) => name,
            Network::Unnamed => "undefined",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Network identity plus the signing client bound to it. Resolved once per
/// process invocation and read-only afterward.
#[derive(Debug, Clone)]
pub struct NetworkContext {
    pub network: Network,
    pub client: Arc<Client>,
}

impl NetworkContext {
    /// Connects the provider, binds the wallet to the endpoint's chain id and
    /// wraps both in a signer middleware.
    pub async fn connect(config: &Config) -> Result<Self> {
        let provider = Provider::<Http>::try_from(config.rpc_url.as_str())
            .wrap_err_with(|| format!("Invalid RPC endpoint: {}", config.rpc_url))?;
        let chain_id = provider
            .get_chainid()
            .await
            .wrap_err_with(|| format!("Failed to reach RPC endpoint {}", config.rpc_url))?
            .as_u64();
        info!("RPC OK. Chain ID: {}", chain_id);

        let wallet = config
            .private_key
            .parse::<LocalWallet>()
            .wrap_err("PRIVATE_KEY is not a valid private key")?
            .with_chain_id(chain_id);
        let client = Arc::new(SignerMiddleware::new(provider, wallet));

        Ok(Self {
            network: config.network.clone(),
            client,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_value_maps_to_named_network() {
        let network = Network::from_env_value(Some("goerli".to_string()));
        assert_eq!(network, Network::Named("goerli".to_string()));
        assert_eq!(network.label(), "goerli");
    }

    #[test]
    fn unset_and_blank_values_are_unnamed() {
        assert_eq!(Network::from_env_value(None), Network::Unnamed);
        assert_eq!(Network::from_env_value(Some(String::new())), Network::Unnamed);
        assert_eq!(Network::from_env_value(Some("   ".to_string())), Network::Unnamed);
    }

    #[test]
    fn unnamed_network_keeps_the_undefined_label() {
        assert_eq!(Network::Unnamed.label(), "undefined");
        assert_eq!(Network::default(), Network::Unnamed);
    }

    #[test]
    fn surrounding_whitespace_is_trimmed() {
        let network = Network::from_env_value(Some(" goerli\n".to_string()));
        assert_eq!(network.label(), "goerli");
    }
}
