// src/record.rs

use std::{
    collections::BTreeMap,
    fs, io,
    path::PathBuf,
};

use ethers::types::Address;
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::{error::RecordWriteFailure, network::Network};

/// Directory the record files live in, relative to the working directory.
pub const RECORD_DIR: &str = "address";

/// Contract name → deployed address, for one network. Serializes to a plain
/// JSON object keyed by contract name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentRecord(BTreeMap<String, Address>);

impl DeploymentRecord {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, address: Address) {
        self.0.insert(name.into(), address);
    }

    pub fn get(&self, name: &str) -> Option<&Address> {
        self.0.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Pretty JSON with 4-space indentation, the format the record files have
    /// always used.
    fn to_json(&self) -> Result<String, serde_json::Error> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.serialize(&mut serializer)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Persists deployment records under a fixed directory. The file path is
/// deterministic given the network, so repeated runs for the same network
/// overwrite the same file wholesale. No merging with previous contents and
/// no cross-process locking; concurrent runs against one network race with
/// last-writer-wins.
#[derive(Debug, Clone)]
pub struct Recorder {
    out_dir: PathBuf,
}

impl Default for Recorder {
    fn default() -> Self {
        Self::new(RECORD_DIR)
    }
}

impl Recorder {
    pub fn new(out_dir: impl Into<PathBuf>) -> Self {
        Self {
            out_dir: out_dir.into(),
        }
    }

    /// `<out_dir>/address-<network>.json`.
    pub fn record_path(&self, network: &Network) -> PathBuf {
        self.out_dir.join(format!("address-{}.json", network.label()))
    }

    /// Writes the record for `network`, creating the output directory if it
    /// does not exist yet (single level, idempotent) and overwriting any
    /// existing file at the path. Returns the path written on success; the
    /// caller owns the decision of whether a failure aborts anything.
    pub fn save(
        &self,
        record: &DeploymentRecord,
        network: &Network,
    ) -> Result<PathBuf, RecordWriteFailure> {
        match fs::create_dir(&self.out_dir) {
            Ok(()) => {}
            Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {}
            Err(err) => return Err(RecordWriteFailure::CreateDir(self.out_dir.clone(), err)),
        }

        let path = self.record_path(network);
        let json = record.to_json()?;
        fs::write(&path, json).map_err(|err| RecordWriteFailure::WriteFile(path.clone(), err))?;
        Ok(path)
    }
}
