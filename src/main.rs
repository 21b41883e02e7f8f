// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;

use havnesjef::api;
use havnesjef::config::Config;
use havnesjef::provision::TeamProvisioner;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("Starting Havnesjef");

    // Load configuration
    let config = Config::from_env()?;
    info!(
        "Configuration loaded: listen_addr={} cluster={}",
        config.listen_addr, config.cluster_name
    );

    // Create Kubernetes client
    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    let provisioner = TeamProvisioner::new(client, config.clone());

    api::serve(&config, provisioner).await
}
