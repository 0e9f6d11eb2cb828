//! Connections for the transports of an [`config::AppConfig`].
//!
//! Assembling a configuration never touches the network. The functions here
//! are where a [`Transport`] becomes an alloy provider, on first use.

use alloy_primitives::ChainId;
use alloy_provider::{Provider, ProviderBuilder};
use config::{Chain, Transport};
use reqwest::Url;
use thiserror::Error;
use tracing::{debug, info};

#[derive(Error, Debug)]
pub enum ClientError {
    /// Error parsing or validating URLs
    #[error("Invalid RPC URL: {0}")]
    InvalidUrl(String),

    /// Error talking to the RPC endpoint
    #[error("Connection error: {0}")]
    Connection(String),

    /// The endpoint serves a different chain than the transport is bound to
    #[error("RPC for {chain} returned chain id {actual}, expected {expected}")]
    ChainMismatch {
        chain: Chain,
        expected: ChainId,
        actual: ChainId,
    },
}

/// Convenience function to create an ethereum rpc provider from url.
pub fn create_provider(rpc_url: &str) -> Result<impl Provider + Clone, ClientError> {
    let url: Url = rpc_url
        .parse()
        .map_err(|e| ClientError::InvalidUrl(format!("{rpc_url:?}: {e}")))?;
    let provider = ProviderBuilder::new().connect_http(url);

    Ok(provider)
}

/// Create a provider for `transport`.
///
/// Uses the configured endpoint, or the chain's public RPC when none is set.
/// No request is sent until the provider is used.
pub fn connect(transport: &Transport) -> Result<impl Provider + Clone, ClientError> {
    let url = transport.resolved_url();
    if !transport.has_endpoint() {
        debug!(chain = %transport.chain(), url, "No RPC endpoint configured, using public RPC");
    }

    create_provider(url)
}

/// Connect to `transport` and check that it serves the expected chain.
///
/// Returns the chain id reported by the endpoint.
pub async fn probe(transport: &Transport) -> Result<ChainId, ClientError> {
    let chain = transport.chain();
    let provider = connect(transport)?;

    let actual = provider
        .get_chain_id()
        .await
        .map_err(|e| ClientError::Connection(format!("{chain}: {e}")))?;

    if actual != transport.chain_id() {
        return Err(ClientError::ChainMismatch {
            chain,
            expected: transport.chain_id(),
            actual,
        });
    }

    info!(%chain, chain_id = actual, "RPC endpoint reachable");
    Ok(actual)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_url() {
        let result = create_provider("not a url");
        assert!(matches!(result, Err(ClientError::InvalidUrl(_))));
    }

    #[test]
    fn test_connect_without_endpoint_uses_public_rpc() {
        let transport = Transport::http(Chain::Mode, None);
        assert!(connect(&transport).is_ok());
    }

    #[test]
    fn test_connect_rejects_malformed_endpoint() {
        let transport = Transport::http(Chain::Base, Some("base rpc".to_string()));
        assert!(matches!(connect(&transport), Err(ClientError::InvalidUrl(_))));
    }

    #[tokio::test]
    async fn test_probe_unreachable_endpoint() {
        // Nothing listens on the discard port.
        let transport = Transport::http(Chain::Optimism, Some("http://127.0.0.1:9".to_string()));
        let result = probe(&transport).await;
        assert!(matches!(result, Err(ClientError::Connection(_))));
    }

    #[tokio::test]
    #[ignore = "requires network access"]
    async fn test_probe_public_rpc() {
        let transport = Transport::http(Chain::Base, None);
        assert_eq!(probe(&transport).await.unwrap(), 8453);
    }
}
