// src/deploy.rs

use std::{fs, path::Path, sync::Arc};

use ethers::{
    abi::Abi,
    prelude::ContractFactory,
    types::{Address, Bytes},
};
use eyre::Result;
use tracing::{info, warn};

use crate::{
    config::Config,
    error::DeploymentFailure,
    network::{Client, Network, NetworkContext},
    record::{DeploymentRecord, Recorder},
};

/// The one contract this tool deploys.
pub const MAIN_CONTRACT: &str = "MainContract";

/// Deploys a named contract from its compiled artifact and blocks until the
/// deployment transaction is confirmed.
///
/// The artifact is `<artifacts_dir>/<name>.bin`, hex bytecode with or without
/// a `0x` prefix. Constructor arguments are empty; nothing in scope takes
/// any.
pub async fn deploy_contract(
    client: Arc<Client>,
    name: &str,
    artifacts_dir: &Path,
) -> Result<Address, DeploymentFailure> {
    let path = artifacts_dir.join(format!("{name}.bin"));
    info!("Deploying {} from {}", name, path.display());

    let bytecode_hex =
        fs::read_to_string(&path).map_err(|source| DeploymentFailure::Artifact {
            name: name.to_string(),
            path: path.clone(),
            source,
        })?;
    let cleaned = bytecode_hex.trim().trim_start_matches("0x");
    let bytecode = hex::decode(cleaned).map_err(|source| DeploymentFailure::Bytecode {
        name: name.to_string(),
        source,
    })?;

    let factory = ContractFactory::new(Abi::default(), Bytes::from(bytecode), client);
    let deployer = factory.deploy(()).map_err(|source| DeploymentFailure::Rejected {
        name: name.to_string(),
        source: Box::new(source),
    })?;

    info!("Sending deployment transaction...");
    // send() waits for the deployment receipt, so the returned address is
    // confirmed on-chain.
    let contract = deployer
        .send()
        .await
        .map_err(|source| DeploymentFailure::Rejected {
            name: name.to_string(),
            source: Box::new(source),
        })?;

    Ok(contract.address())
}

/// Persists the record, logging the outcome. A write failure is logged and
/// swallowed rather than propagated: the contract is already live by the
/// time this runs, and conflating a broken filesystem with a failed
/// deployment would misreport the run.
pub fn save_record(recorder: &Recorder, record: &DeploymentRecord, network: &Network) {
    match recorder.save(record, network) {
        Ok(path) => info!("Addresses are saved into {}...", path.display()),
        Err(err) => warn!("Write file error: {err}"),
    }
}

/// The whole deploy flow: connect, deploy, record. The record write is
/// strictly sequenced after the confirmed address is known.
pub async fn run(config: &Config, recorder: &Recorder) -> Result<()> {
    let context = NetworkContext::connect(config).await?;

    info!("Deploying...");
    let address = deploy_contract(
        context.client.clone(),
        MAIN_CONTRACT,
        &config.artifacts_dir,
    )
    .await?;
    info!("Deployed!");
    info!("{}: {:?}", MAIN_CONTRACT, address);

    let mut record = DeploymentRecord::new();
    record.insert(MAIN_CONTRACT, address);
    save_record(recorder, &record, &context.network);

    Ok(())
}
