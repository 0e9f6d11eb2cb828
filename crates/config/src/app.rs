//! Wallet-connection configuration for the marketplace frontend.
//!
//! [`assemble`] pairs every supported chain with the RPC endpoint found in the
//! environment and hands the result to [`AppConfig::new`], which checks that
//! the pieces fit together. Transports are lazy: nothing here performs I/O.

use crate::{
    chain::{AddEthereumChainParameter, Chain},
    env::EnvSource,
    ConfigError,
};
use alloy_primitives::ChainId;
use serde::{Serialize, Serializer};
use std::collections::{btree_map, BTreeMap};

/// Display name reported to wallets.
pub const APP_NAME: &str = "NFT Marketplace";

/// WalletConnect project id attributing connection requests to this app.
pub const PROJECT_ID: &str = "16956586d2d3a2a7372f4b57330c2896";

/// Networks offered to the user, in display order.
pub const SUPPORTED_CHAINS: [Chain; 3] = [Chain::Optimism, Chain::Mode, Chain::Base];

/// HTTP transport bound to one chain.
///
/// Holds the endpoint exactly as configured. An unset or empty endpoint is
/// kept as is and only resolved when a connection is made.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Transport {
    chain: Chain,
    chain_id: ChainId,
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Transport {
    pub const fn http(chain: Chain, url: Option<String>) -> Self {
        Self {
            chain,
            chain_id: chain.id(),
            url,
        }
    }

    pub const fn chain(&self) -> Chain {
        self.chain
    }

    pub const fn chain_id(&self) -> ChainId {
        self.chain_id
    }

    /// The configured endpoint, if any.
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Whether an endpoint was actually configured.
    pub fn has_endpoint(&self) -> bool {
        self.url().is_some_and(|url| !url.trim().is_empty())
    }

    /// Endpoint to connect to: the configured one, or the chain's public RPC
    /// when it is unset or empty.
    pub fn resolved_url(&self) -> &str {
        match self.url() {
            Some(url) if !url.trim().is_empty() => url.trim(),
            _ => self.chain.default_rpc_url(),
        }
    }
}

/// One transport per chain, keyed by chain id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transports(BTreeMap<ChainId, Transport>);

impl Transports {
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Insert a transport, returning the one it replaced for the same chain.
    pub fn insert(&mut self, transport: Transport) -> Option<Transport> {
        self.0.insert(transport.chain_id(), transport)
    }

    pub fn get(&self, chain_id: ChainId) -> Option<&Transport> {
        self.0.get(&chain_id)
    }

    pub fn contains(&self, chain_id: ChainId) -> bool {
        self.0.contains_key(&chain_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Transports ordered by chain id.
    pub fn iter(&self) -> btree_map::Values<'_, ChainId, Transport> {
        self.0.values()
    }
}

impl FromIterator<Transport> for Transports {
    fn from_iter<I: IntoIterator<Item = Transport>>(iter: I) -> Self {
        let mut transports = Self::new();
        for transport in iter {
            transports.insert(transport);
        }
        transports
    }
}

impl Serialize for Transports {
    // Serialised as a list so formats without integer map keys (TOML) work.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.values())
    }
}

/// Assembled wallet-connection configuration.
///
/// Built once at startup and never mutated; share it by reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppConfig {
    app_name: String,
    project_id: String,
    chains: Vec<Chain>,
    transports: Transports,
}

impl AppConfig {
    /// Validate and assemble a configuration.
    ///
    /// # Errors
    ///
    /// Fails if the app name is empty, the project id is not 32 hex
    /// characters, the chain list is empty or repeats a chain, a listed chain
    /// has no transport, or a transport targets a chain that is not listed.
    pub fn new(
        app_name: impl Into<String>,
        project_id: impl Into<String>,
        chains: Vec<Chain>,
        transports: Transports,
    ) -> Result<Self, ConfigError> {
        let app_name = app_name.into();
        let project_id = project_id.into();

        if app_name.trim().is_empty() {
            return Err(ConfigError::EmptyAppName);
        }
        if project_id.len() != 32 || !project_id.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ConfigError::InvalidProjectId(project_id));
        }
        if chains.is_empty() {
            return Err(ConfigError::NoChains);
        }

        for (i, chain) in chains.iter().enumerate() {
            if chains[..i].contains(chain) {
                return Err(ConfigError::DuplicateChain(*chain));
            }
            if !transports.contains(chain.id()) {
                return Err(ConfigError::MissingTransport {
                    chain: *chain,
                    chain_id: chain.id(),
                });
            }
        }
        if let Some(extra) = transports.iter().find(|t| !chains.contains(&t.chain())) {
            return Err(ConfigError::UnlistedTransport(extra.chain_id()));
        }

        Ok(Self {
            app_name,
            project_id,
            chains,
            transports,
        })
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// Supported chains in display order.
    pub fn chains(&self) -> &[Chain] {
        &self.chains
    }

    pub const fn transports(&self) -> &Transports {
        &self.transports
    }

    pub fn transport(&self, chain: Chain) -> Option<&Transport> {
        self.transports.get(chain.id())
    }

    /// Chains whose RPC endpoint was not configured.
    pub fn unset_endpoints(&self) -> Vec<Chain> {
        self.chains
            .iter()
            .copied()
            .filter(|chain| self.transport(*chain).is_some_and(|t| !t.has_endpoint()))
            .collect()
    }

    /// EIP-3085 parameters for adding `chain` to a wallet, using the endpoint
    /// this configuration would connect to.
    pub fn add_chain_params(&self, chain: Chain) -> Option<AddEthereumChainParameter> {
        self.transport(chain)
            .map(|transport| chain.add_chain_params(transport.resolved_url()))
    }
}

/// Assemble the marketplace configuration from `env`.
///
/// Reads one RPC variable per supported chain. Missing variables are not an
/// error: the transport is created without an endpoint.
pub fn assemble(env: &impl EnvSource) -> Result<AppConfig, ConfigError> {
    let transports = SUPPORTED_CHAINS
        .iter()
        .map(|chain| Transport::http(*chain, env.var(chain.rpc_env_var())))
        .collect();

    AppConfig::new(APP_NAME, PROJECT_ID, SUPPORTED_CHAINS.to_vec(), transports)
}
