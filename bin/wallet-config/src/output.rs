//! Rendering of the assembled configuration and probe results.

use crate::ProbeOutcome;
use clap::ValueEnum;
use config::AppConfig;
use serde::Serialize;

/// Output format for `show`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    #[default]
    Json,
    Toml,
}

pub fn render(config: &AppConfig, format: Format) -> eyre::Result<String> {
    let rendered = match format {
        Format::Json => serde_json::to_string_pretty(config)?,
        Format::Toml => toml::to_string_pretty(config)?,
    };

    Ok(rendered)
}

#[derive(Debug, Serialize)]
struct ProbeLine<'a> {
    chain: String,
    url: &'a str,
    ok: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    chain_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

/// Render probe outcomes as a JSON array.
pub fn render_probes(outcomes: &[ProbeOutcome]) -> eyre::Result<String> {
    let lines: Vec<ProbeLine<'_>> = outcomes
        .iter()
        .map(|outcome| ProbeLine {
            chain: outcome.chain.to_string(),
            url: &outcome.url,
            ok: outcome.is_ok(),
            chain_id: outcome.result.as_ref().ok().copied(),
            error: outcome.result.as_ref().err().map(ToString::to_string),
        })
        .collect();

    Ok(serde_json::to_string_pretty(&lines)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::ClientError;
    use config::Chain;
    use std::collections::HashMap;

    fn sample_config() -> AppConfig {
        let env = HashMap::from([(
            "BASE_RPC_URL".to_string(),
            "https://base.example".to_string(),
        )]);
        config::assemble(&env).unwrap()
    }

    #[test]
    fn test_render_json() {
        let rendered = render(&sample_config(), Format::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["project_id"], "16956586d2d3a2a7372f4b57330c2896");
        assert_eq!(value["transports"].as_array().unwrap().len(), 3);
    }

    #[test]
    fn test_render_toml() {
        let rendered = render(&sample_config(), Format::Toml).unwrap();

        assert!(rendered.contains("app_name = \"NFT Marketplace\""));
        assert!(rendered.contains("[[transports]]"));
        assert!(rendered.contains("url = \"https://base.example\""));
    }

    #[test]
    fn test_render_probes() {
        let outcomes = vec![
            ProbeOutcome {
                chain: Chain::Optimism,
                url: "https://op.example".to_string(),
                result: Ok(10),
            },
            ProbeOutcome {
                chain: Chain::Mode,
                url: "https://mode.example".to_string(),
                result: Err(ClientError::ChainMismatch {
                    chain: Chain::Mode,
                    expected: 34443,
                    actual: 1,
                }),
            },
        ];

        let rendered = render_probes(&outcomes).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value[0]["ok"], true);
        assert_eq!(value[0]["chain_id"], 10);
        assert_eq!(value[1]["chain"], "mode");
        assert_eq!(value[1]["ok"], false);
        assert!(value[1]["error"].as_str().unwrap().contains("expected 34443"));
    }
}
