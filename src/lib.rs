// src/lib.rs

// Re-export modules needed by the binaries and integration tests
pub mod bindings;
pub mod config;
pub mod deploy;
pub mod error;
pub mod feed;
pub mod logging;
pub mod network;
pub mod record;

// Public types re-exported for convenience
pub use config::{load_config, load_config_with, Config, ConfigOverrides};
pub use error::{DeploymentFailure, ReadError, RecordWriteFailure};
pub use network::{Client, Network, NetworkContext};
pub use record::{DeploymentRecord, Recorder, RECORD_DIR};
