//! Wallet-connection configuration for the NFT marketplace frontend.
//!
//! This crate provides:
//! - The registry of supported chains (Optimism, Mode, Base)
//! - Environment sources the RPC endpoints are read from
//! - Assembly and validation of the [`AppConfig`] handed to the wallet layer

pub mod app;
pub mod chain;
pub mod env;

pub use app::{assemble, AppConfig, Transport, Transports, APP_NAME, PROJECT_ID, SUPPORTED_CHAINS};
pub use chain::{AddEthereumChainParameter, Chain, NativeCurrency, UnknownChain};
pub use env::{DotenvFile, EnvSource, Layered, ProcessEnv};

use alloy_primitives::ChainId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The application name is blank
    #[error("App name must not be empty")]
    EmptyAppName,

    /// The project id is not a 32 character hex string
    #[error("Invalid project id: {0:?}")]
    InvalidProjectId(String),

    /// No chains were supplied
    #[error("At least one chain must be configured")]
    NoChains,

    /// The same chain is listed more than once
    #[error("Chain listed twice: {0}")]
    DuplicateChain(Chain),

    /// A listed chain has no transport
    #[error("No transport configured for {chain} (chain id {chain_id})")]
    MissingTransport { chain: Chain, chain_id: ChainId },

    /// A transport exists for a chain that is not listed
    #[error("Transport configured for unlisted chain id {0}")]
    UnlistedTransport(ChainId),

    /// A dotenv file could not be read or parsed
    #[error("Failed to load env file {path}: {reason}")]
    EnvFile { path: String, reason: String },
}
