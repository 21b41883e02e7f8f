// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use url::Url;

use crate::constants;

/// Service configuration loaded from environment variables.
///
/// Every value has a compiled-in default matching the production cluster, so
/// the binary runs without any environment set up.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web frontend listens on
    pub listen_addr: String,
    /// API server URL embedded in rendered kubeconfigs
    pub cluster_server: String,
    /// Base64-encoded CA certificate for the cluster entry
    pub cluster_ca_data: String,
    /// Cluster name in rendered kubeconfigs
    pub cluster_name: String,
    /// Context name in rendered kubeconfigs
    pub context_name: String,
    /// ClusterRole bound to each team's service accounts
    pub player_role: String,
    /// Lifetime of issued tokens in seconds
    pub token_ttl_seconds: i64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let cluster_server = env_or("CLUSTER_SERVER", constants::cluster::SERVER);
        Url::parse(&cluster_server)
            .with_context(|| format!("CLUSTER_SERVER is not a valid URL: {}", cluster_server))?;

        let token_ttl_seconds = match env::var("TOKEN_TTL_SECONDS") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("TOKEN_TTL_SECONDS is not a number: {}", v))?,
            Err(_) => constants::TOKEN_TTL_SECONDS,
        };

        Ok(Config {
            listen_addr: env_or("LISTEN_ADDR", constants::LISTEN_ADDR),
            cluster_server,
            cluster_ca_data: env_or("CLUSTER_CA_DATA", constants::cluster::CA_DATA),
            cluster_name: env_or("CLUSTER_NAME", constants::cluster::NAME),
            context_name: env_or("CONTEXT_NAME", constants::cluster::CONTEXT),
            player_role: env_or("PLAYER_CLUSTER_ROLE", constants::PLAYER_CLUSTER_ROLE),
            token_ttl_seconds,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
