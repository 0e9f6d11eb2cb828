//! Inspect the wallet-connection configuration of the marketplace frontend.
//!
//! - `show`: print the assembled configuration
//! - `probe`: connect to every configured RPC and check its chain id
//! - `add-chain`: print EIP-3085 `wallet_addEthereumChain` parameters

use clap::{Parser, Subcommand};
use config::Chain;
use tracing::{error, info};
use wallet_config::{
    load_config, load_env,
    output::{render, render_probes, Format},
    probe_all,
};

#[derive(Parser)]
#[command(name = "wallet-config")]
#[command(about = "Assemble and check the wallet-connection configuration")]
struct Cli {
    /// Dotenv file to read RPC URLs from; process variables take precedence
    #[arg(long, env = "WALLET_CONFIG_ENV_FILE", default_value = ".env")]
    env_file: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the assembled configuration
    Show {
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },

    /// Check that every RPC endpoint is reachable and serves the right chain
    Probe,

    /// Print wallet_addEthereumChain parameters for a chain (name or id)
    AddChain { chain: Chain },
}

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let env = load_env(&cli.env_file)?;
    let config = load_config(&env)?;

    info!(
        app = config.app_name(),
        chains = ?config.chains(),
        "Assembled wallet configuration"
    );

    match cli.command {
        Command::Show { format } => {
            println!("{}", render(&config, format)?);
        }
        Command::Probe => {
            let outcomes = probe_all(&config).await;
            println!("{}", render_probes(&outcomes)?);

            let failed: Vec<_> = outcomes.iter().filter(|o| !o.is_ok()).collect();
            for outcome in &failed {
                if let Err(e) = &outcome.result {
                    error!(chain = %outcome.chain, url = %outcome.url, "Probe failed: {}", e);
                }
            }
            if !failed.is_empty() {
                eyre::bail!("{} of {} RPC endpoints failed", failed.len(), outcomes.len());
            }
        }
        Command::AddChain { chain } => {
            let params = config
                .add_chain_params(chain)
                .ok_or_else(|| eyre::eyre!("{chain} is not configured"))?;
            println!("{}", serde_json::to_string_pretty(&params)?);
        }
    }

    Ok(())
}
