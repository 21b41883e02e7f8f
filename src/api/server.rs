// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Web frontend: the signup form and the provisioning endpoint.

use axum::extract::{Form, State};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::api::pages;
use crate::config::Config;
use crate::provision::TeamProvisioner;

#[derive(Clone)]
struct AppState {
    provisioner: TeamProvisioner,
}

#[derive(Debug, Deserialize)]
struct TeamForm {
    team: String,
}

/// Build the router serving the signup form and the provisioning endpoint
pub fn router(provisioner: TeamProvisioner) -> Router {
    Router::new()
        .route("/", get(index).post(create_team))
        .with_state(AppState { provisioner })
}

/// Bind the configured listen address and serve until the process stops.
/// A bind failure propagates and takes the process down.
pub async fn serve(config: &Config, provisioner: TeamProvisioner) -> anyhow::Result<()> {
    let app = router(provisioner);

    info!("Running on {}", config.listen_addr);
    let listener = TcpListener::bind(&config.listen_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn index() -> Html<&'static str> {
    Html(pages::INDEX)
}

/// Provision the submitted team and render its kubeconfig, or the error page
/// when any step of the sequence failed.
async fn create_team(State(state): State<AppState>, Form(form): Form<TeamForm>) -> Html<String> {
    match state.provisioner.provision(&form.team).await {
        Ok(kubeconfig) => {
            info!("Created new team {}", form.team);
            Html(pages::success(&form.team, &kubeconfig))
        }
        Err(err) => {
            error!("Failed creating team {}: {}", form.team, err);
            Html(pages::error(&form.team, &err.to_string()))
        }
    }
}
