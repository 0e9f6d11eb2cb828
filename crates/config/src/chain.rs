//! Registry of the networks the marketplace frontend can connect to.
//!
//! Each [`Chain`] carries its canonical identity (chain id, display name,
//! native currency) together with the public endpoints used when no RPC URL
//! is configured for it.

use alloy_primitives::ChainId;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A supported network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Chain {
    Optimism,
    Mode,
    Base,
}

/// Native currency of a chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

const ETHER: NativeCurrency = NativeCurrency {
    name: "Ether",
    symbol: "ETH",
    decimals: 18,
};

impl Chain {
    /// EIP-155 chain id.
    pub const fn id(self) -> ChainId {
        match self {
            Self::Optimism => 10,
            Self::Mode => 34443,
            Self::Base => 8453,
        }
    }

    /// Human readable network name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Optimism => "OP Mainnet",
            Self::Mode => "Mode Mainnet",
            Self::Base => "Base",
        }
    }

    pub const fn native_currency(self) -> NativeCurrency {
        // All three are OP Stack L2s settling in ETH.
        ETHER
    }

    /// Public RPC endpoint used when none is configured.
    pub const fn default_rpc_url(self) -> &'static str {
        match self {
            Self::Optimism => "https://mainnet.optimism.io",
            Self::Mode => "https://mainnet.mode.network",
            Self::Base => "https://mainnet.base.org",
        }
    }

    pub const fn block_explorer_url(self) -> &'static str {
        match self {
            Self::Optimism => "https://optimistic.etherscan.io",
            Self::Mode => "https://modescan.io",
            Self::Base => "https://basescan.org",
        }
    }

    /// Environment variable holding this chain's RPC endpoint.
    pub const fn rpc_env_var(self) -> &'static str {
        match self {
            Self::Optimism => "OPTIMISM_RPC_URL",
            Self::Mode => "MODE_RPC_URL",
            Self::Base => "BASE_RPC_URL",
        }
    }

    /// Look up a chain by its EIP-155 id.
    pub const fn from_id(id: ChainId) -> Option<Self> {
        match id {
            10 => Some(Self::Optimism),
            34443 => Some(Self::Mode),
            8453 => Some(Self::Base),
            _ => None,
        }
    }

    /// Build the EIP-3085 `wallet_addEthereumChain` parameters for this chain.
    pub fn add_chain_params(self, rpc_url: &str) -> AddEthereumChainParameter {
        AddEthereumChainParameter {
            chain_id: format!("{:#x}", self.id()),
            chain_name: self.name().to_string(),
            native_currency: self.native_currency(),
            rpc_urls: vec![rpc_url.to_string()],
            block_explorer_urls: vec![self.block_explorer_url().to_string()],
        }
    }
}

impl fmt::Display for Chain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Optimism => "optimism",
            Self::Mode => "mode",
            Self::Base => "base",
        };
        f.write_str(name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown chain: {0}")]
pub struct UnknownChain(pub String);

impl FromStr for Chain {
    type Err = UnknownChain;

    /// Accepts the lowercase network name or the decimal chain id.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "optimism" | "op" => Ok(Self::Optimism),
            "mode" => Ok(Self::Mode),
            "base" => Ok(Self::Base),
            other => other
                .parse::<ChainId>()
                .ok()
                .and_then(Self::from_id)
                .ok_or_else(|| UnknownChain(s.to_string())),
        }
    }
}

/// Payload of the EIP-3085 `wallet_addEthereumChain` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AddEthereumChainParameter {
    /// Hex encoded chain id, `0x` prefixed
    pub chain_id: String,
    pub chain_name: String,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<String>,
    pub block_explorer_urls: Vec<String>,
}
