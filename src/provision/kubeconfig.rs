// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Rendering of self-contained kubeconfig documents for provisioned teams.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::Result;

/// Inputs for one rendered kubeconfig. The namespace and user are both the
/// team name; everything else comes from [`crate::config::Config`].
#[derive(Debug)]
pub struct KubeconfigParams<'a> {
    pub server: &'a str,
    pub ca_data: &'a str,
    pub cluster_name: &'a str,
    pub context_name: &'a str,
    pub namespace: &'a str,
    pub user: &'a str,
    pub token: &'a str,
}

/// Render a kubeconfig with a single cluster, context, and user entry.
///
/// Pure serialization, no cluster interaction. The document is complete on
/// its own: saving it and pointing kubectl at it grants exactly the access
/// the team's role binding permits.
pub fn render_kubeconfig(params: &KubeconfigParams<'_>) -> Result<String> {
    let doc = KubeconfigDoc {
        api_version: "v1".to_string(),
        clusters: vec![NamedCluster {
            cluster: ClusterEntry {
                certificate_authority_data: params.ca_data.to_string(),
                server: params.server.to_string(),
            },
            name: params.cluster_name.to_string(),
        }],
        contexts: vec![NamedContext {
            context: ContextEntry {
                cluster: params.cluster_name.to_string(),
                namespace: params.namespace.to_string(),
                user: params.user.to_string(),
            },
            name: params.context_name.to_string(),
        }],
        current_context: params.context_name.to_string(),
        kind: "Config".to_string(),
        preferences: BTreeMap::new(),
        users: vec![NamedUser {
            name: params.user.to_string(),
            user: UserEntry {
                token: params.token.to_string(),
            },
        }],
    };

    Ok(serde_yaml::to_string(&doc)?)
}

/// The kubeconfig v1 document shape, limited to the fields this service emits.
#[derive(Debug, Serialize, Deserialize)]
pub struct KubeconfigDoc {
    #[serde(rename = "apiVersion")]
    pub api_version: String,
    pub clusters: Vec<NamedCluster>,
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context")]
    pub current_context: String,
    pub kind: String,
    pub preferences: BTreeMap<String, String>,
    pub users: Vec<NamedUser>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamedCluster {
    pub cluster: ClusterEntry,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClusterEntry {
    #[serde(rename = "certificate-authority-data")]
    pub certificate_authority_data: String,
    pub server: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamedContext {
    pub context: ContextEntry,
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContextEntry {
    pub cluster: String,
    pub namespace: String,
    pub user: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct NamedUser {
    pub name: String,
    pub user: UserEntry,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserEntry {
    pub token: String,
}
