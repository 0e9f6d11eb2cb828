
use config::{Chain, DotenvFile, EnvSource, Layered, SUPPORTED_CHAINS};
use setup::{env_file, full_env, BASE_URL, MODE_URL, OPTIMISM_URL};
use std::collections::HashMap;
use wallet_config::{load_config, load_env};

#[test]
fn test_one_transport_per_chain() {
    let config = load_config(&full_env()).unwrap();

    assert_eq!(config.transports().len(), 3);
    for chain in SUPPORTED_CHAINS {
        let transport = config.transport(chain).unwrap();
        assert_eq!(transport.chain_id(), chain.id());
    }
}

#[test]
fn test_no_cross_assignment() {
    let config = load_config(&full_env()).unwrap();

    assert_eq!(config.transport(Chain::Optimism).unwrap().url(), Some(OPTIMISM_URL));
    assert_eq!(config.transport(Chain::Mode).unwrap().url(), Some(MODE_URL));
    assert_eq!(config.transport(Chain::Base).unwrap().url(), Some(BASE_URL));
}

#[test]
fn test_chain_order_is_stable() {
    let mut env = full_env();
    env.remove("OPTIMISM_RPC_URL");

    for source in [full_env(), env, HashMap::new()] {
        let config = load_config(&source).unwrap();
        assert_eq!(config.chains(), &[Chain::Optimism, Chain::Mode, Chain::Base]);
        assert_eq!(config.app_name(), "NFT Marketplace");
        assert_eq!(config.project_id(), "16956586d2d3a2a7372f4b57330c2896");
    }
}

#[test]
fn test_unset_variables_still_assemble() {
    let config = load_config(&HashMap::<String, String>::new()).unwrap();

    assert_eq!(config.transports().len(), 3);
    for chain in SUPPORTED_CHAINS {
        assert_eq!(config.transport(chain).unwrap().url(), None);
    }
    assert_eq!(config.unset_endpoints(), SUPPORTED_CHAINS.to_vec());
}

#[test]
fn test_assembly_is_idempotent() {
    let env = full_env();
    let first = load_config(&env).unwrap();
    let second = load_config(&env).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_env_file_fills_gaps() {
    let file = env_file(&format!(
        "OPTIMISM_RPC_URL={OPTIMISM_URL}\nMODE_RPC_URL=https://file.mode.example\n"
    ));
    let dotenv = DotenvFile::load(file.path()).unwrap();
    // Stand in for the process environment without mutating it.
    let process = HashMap::from([("MODE_RPC_URL".to_string(), MODE_URL.to_string())]);
    let env = Layered::new(process, dotenv);

    let config = load_config(&env).unwrap();
    assert_eq!(config.transport(Chain::Optimism).unwrap().url(), Some(OPTIMISM_URL));
    assert_eq!(config.transport(Chain::Mode).unwrap().url(), Some(MODE_URL));
    assert_eq!(config.transport(Chain::Base).unwrap().url(), None);
}

#[test]
fn test_load_env_reads_file() {
    let file = env_file("WALLET_CONFIG_TEST_MARKER=from-file\n");
    let env = load_env(file.path()).unwrap();

    assert_eq!(env.var("WALLET_CONFIG_TEST_MARKER").as_deref(), Some("from-file"));
}

#[test]
fn test_malformed_env_file_is_rejected() {
    let file = env_file("NOT A VALID LINE\n");
    assert!(load_env(file.path()).is_err());
}

#[test]
fn test_missing_env_file_is_tolerated() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_env(dir.path().join(".env")).is_ok());
}
