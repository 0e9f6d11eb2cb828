pub mod output;

use alloy_primitives::ChainId;
use client::ClientError;
use config::{AppConfig, Chain, DotenvFile, EnvSource, Layered, ProcessEnv};
use std::path::Path;
use tokio::task::JoinSet;
use tracing::{info, warn};

/// Process environment layered over an optional dotenv file.
pub type StartupEnv = Layered<ProcessEnv, DotenvFile>;

/// Build the environment the configuration is assembled from.
///
/// Variables already set in the process take precedence over the file. A
/// missing file is not an error; a malformed one is.
pub fn load_env(env_file: impl AsRef<Path>) -> eyre::Result<StartupEnv> {
    let path = env_file.as_ref();

    let file = if path.exists() {
        let file = DotenvFile::load(path)?;
        info!(path = %path.display(), vars = file.len(), "Loaded env file");
        file
    } else {
        info!(path = %path.display(), "No env file found, using process environment only");
        DotenvFile::default()
    };

    Ok(Layered::new(ProcessEnv, file))
}

/// Assemble the configuration and warn about chains without an endpoint.
pub fn load_config(env: &impl EnvSource) -> eyre::Result<AppConfig> {
    let config = config::assemble(env)?;

    for chain in config.unset_endpoints() {
        warn!(
            %chain,
            var = chain.rpc_env_var(),
            fallback = chain.default_rpc_url(),
            "RPC endpoint not set"
        );
    }

    Ok(config)
}

/// Outcome of probing one chain's transport.
#[derive(Debug)]
pub struct ProbeOutcome {
    pub chain: Chain,
    pub url: String,
    pub result: Result<ChainId, ClientError>,
}

impl ProbeOutcome {
    pub const fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Probe every transport concurrently.
///
/// Outcomes are returned in the configuration's chain order.
pub async fn probe_all(config: &AppConfig) -> Vec<ProbeOutcome> {
    let mut tasks = JoinSet::new();
    for (index, chain) in config.chains().iter().enumerate() {
        let Some(transport) = config.transport(*chain).cloned() else {
            continue;
        };
        tasks.spawn(async move {
            let result = client::probe(&transport).await;
            let outcome = ProbeOutcome {
                chain: transport.chain(),
                url: transport.resolved_url().to_string(),
                result,
            };
            (index, outcome)
        });
    }

    let mut outcomes = Vec::with_capacity(config.chains().len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(outcome) => outcomes.push(outcome),
            Err(e) => warn!("Probe task failed: {}", e),
        }
    }
    outcomes.sort_by_key(|(index, _)| *index);

    outcomes.into_iter().map(|(_, outcome)| outcome).collect()
}
