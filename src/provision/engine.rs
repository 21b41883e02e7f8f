// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! The team provisioning sequence.

use crate::config::Config;
use crate::constants::coordinates;
use crate::error::{HavnesjefError, Result};
use crate::provision::kubeconfig::{render_kubeconfig, KubeconfigParams};
use k8s_openapi::api::authentication::v1::{TokenRequest, TokenRequestSpec};
use k8s_openapi::api::core::v1::{Namespace, Secret, ServiceAccount};
use k8s_openapi::api::rbac::v1::{RoleBinding, RoleRef, Subject};
use kube::{
    api::{ObjectMeta, PostParams},
    Api, Client, ResourceExt,
};
use std::collections::BTreeMap;
use tracing::{info, instrument};

const RBAC_API_GROUP: &str = "rbac.authorization.k8s.io";

/// Provisions team workspaces: a namespace, a service account, a bound
/// token, and a role binding, all named after the team. Holds no state of
/// its own; the cluster is the source of truth.
#[derive(Clone)]
pub struct TeamProvisioner {
    client: Client,
    config: Config,
}

impl TeamProvisioner {
    pub fn new(client: Client, config: Config) -> Self {
        Self { client, config }
    }

    /// Run the provisioning sequence for a team and render its kubeconfig.
    ///
    /// Steps run strictly in order and each one requires the previous one to
    /// have succeeded. The first failure is returned as-is; objects created
    /// before the failure are left in the cluster. A taken team name fails
    /// at namespace creation with an already-exists error before anything
    /// else is touched.
    #[instrument(skip(self))]
    pub async fn provision(&self, team: &str) -> Result<String> {
        let namespace = self.create_namespace(team).await?;
        let namespace_name = namespace.name_any();

        let account = self.create_service_account(&namespace_name).await?;
        let token = self.issue_token(&namespace_name, &account.name_any()).await?;
        self.create_coordinates_secret(&namespace_name).await?;
        self.create_role_binding(&namespace_name).await?;

        render_kubeconfig(&KubeconfigParams {
            server: &self.config.cluster_server,
            ca_data: &self.config.cluster_ca_data,
            cluster_name: &self.config.cluster_name,
            context_name: &self.config.context_name,
            namespace: &namespace_name,
            user: &namespace_name,
            token: &token,
        })
    }

    async fn create_namespace(&self, team: &str) -> Result<Namespace> {
        let namespaces: Api<Namespace> = Api::all(self.client.clone());
        let ns = Namespace {
            metadata: ObjectMeta {
                name: Some(team.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let created = namespaces.create(&PostParams::default(), &ns).await?;
        info!("Created namespace {}", created.name_any());
        Ok(created)
    }

    async fn create_service_account(&self, namespace: &str) -> Result<ServiceAccount> {
        let accounts: Api<ServiceAccount> = Api::namespaced(self.client.clone(), namespace);
        let account = ServiceAccount {
            metadata: ObjectMeta {
                name: Some(namespace.to_string()),
                ..Default::default()
            },
            ..Default::default()
        };

        let created = accounts.create(&PostParams::default(), &account).await?;
        info!("Created service account {}/{}", namespace, created.name_any());
        Ok(created)
    }

    /// Issue a bound token for the team's service account via the
    /// TokenRequest subresource.
    async fn issue_token(&self, namespace: &str, account: &str) -> Result<String> {
        let accounts: Api<ServiceAccount> = Api::namespaced(self.client.clone(), namespace);
        let request = TokenRequest {
            metadata: Default::default(),
            spec: TokenRequestSpec {
                audiences: vec![],
                bound_object_ref: None,
                expiration_seconds: Some(self.config.token_ttl_seconds),
            },
            status: None,
        };

        let issued = accounts
            .create_token_request(account, &PostParams::default(), &request)
            .await?;

        let token = issued.status.map(|s| s.token).unwrap_or_default();
        if token.is_empty() {
            return Err(HavnesjefError::TokenMissing(account.to_string()));
        }

        info!("Issued token for service account {}/{}", namespace, account);
        Ok(token)
    }

    async fn create_coordinates_secret(&self, namespace: &str) -> Result<()> {
        let secrets: Api<Secret> = Api::namespaced(self.client.clone(), namespace);
        let secret = Secret {
            metadata: ObjectMeta {
                name: Some(coordinates::SECRET_NAME.to_string()),
                ..Default::default()
            },
            string_data: Some(BTreeMap::from([(
                coordinates::KEY.to_string(),
                coordinates::VALUE.to_string(),
            )])),
            ..Default::default()
        };

        secrets.create(&PostParams::default(), &secret).await?;
        info!("Created secret {}/{}", namespace, coordinates::SECRET_NAME);
        Ok(())
    }

    /// Bind every service account in the team namespace to the player role.
    async fn create_role_binding(&self, namespace: &str) -> Result<()> {
        let bindings: Api<RoleBinding> = Api::namespaced(self.client.clone(), namespace);
        let binding = RoleBinding {
            metadata: ObjectMeta {
                name: Some(namespace.to_string()),
                ..Default::default()
            },
            role_ref: RoleRef {
                api_group: RBAC_API_GROUP.to_string(),
                kind: "ClusterRole".to_string(),
                name: self.config.player_role.clone(),
            },
            subjects: Some(vec![Subject {
                api_group: Some(RBAC_API_GROUP.to_string()),
                kind: "Group".to_string(),
                name: format!("system:serviceaccounts:{}", namespace),
                ..Default::default()
            }]),
        };

        bindings.create(&PostParams::default(), &binding).await?;
        info!(
            "Created role binding {}/{} for role {}",
            namespace, namespace, self.config.player_role
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{
        already_exists_json, forbidden_json, invalid_name_json, namespace_json,
        role_binding_json, secret_json, service_account_json, test_config, token_request_json,
        MockApiServer,
    };

    fn provisioner_for(mock: &MockApiServer) -> TeamProvisioner {
        TeamProvisioner::new(mock.clone().into_client(), test_config())
    }

    fn happy_path_mock(team: &str) -> MockApiServer {
        MockApiServer::new()
            .on_post("/api/v1/namespaces", 201, &namespace_json(team))
            .on_post(
                &format!("/api/v1/namespaces/{}/serviceaccounts", team),
                201,
                &service_account_json(team, team),
            )
            .on_post(
                &format!("/api/v1/namespaces/{}/serviceaccounts/{}/token", team, team),
                201,
                &token_request_json(team, team, "sekrit-token"),
            )
            .on_post(
                &format!("/api/v1/namespaces/{}/secrets", team),
                201,
                &secret_json(coordinates::SECRET_NAME, team),
            )
            .on_post(
                &format!(
                    "/apis/rbac.authorization.k8s.io/v1/namespaces/{}/rolebindings",
                    team
                ),
                201,
                &role_binding_json(team, team, "pleesah-player"),
            )
    }

    #[tokio::test]
    async fn test_provision_renders_team_scoped_kubeconfig() {
        let mock = happy_path_mock("vikingene");
        let provisioner = provisioner_for(&mock);

        let kubeconfig = provisioner.provision("vikingene").await.unwrap();

        assert!(kubeconfig.contains("namespace: vikingene"));
        assert!(kubeconfig.contains("user: vikingene"));
        assert!(kubeconfig.contains("token: sekrit-token"));
        assert!(kubeconfig.contains("server: https://cluster.test:6443"));
    }

    #[tokio::test]
    async fn test_provision_runs_steps_in_order() {
        let mock = happy_path_mock("vikingene");
        let provisioner = provisioner_for(&mock);

        provisioner.provision("vikingene").await.unwrap();

        let paths: Vec<String> = mock.requests().iter().map(|r| r.path.clone()).collect();
        assert_eq!(
            paths,
            vec![
                "/api/v1/namespaces",
                "/api/v1/namespaces/vikingene/serviceaccounts",
                "/api/v1/namespaces/vikingene/serviceaccounts/vikingene/token",
                "/api/v1/namespaces/vikingene/secrets",
                "/apis/rbac.authorization.k8s.io/v1/namespaces/vikingene/rolebindings",
            ]
        );
    }

    #[tokio::test]
    async fn test_token_request_carries_24h_expiration() {
        let mock = happy_path_mock("vikingene");
        let provisioner = provisioner_for(&mock);

        provisioner.provision("vikingene").await.unwrap();

        let requests = mock.requests();
        let token_request: serde_json::Value = serde_json::from_str(&requests[2].body).unwrap();
        assert_eq!(token_request["spec"]["expirationSeconds"], 86400);
    }

    #[tokio::test]
    async fn test_role_binding_grants_player_role_to_namespace_group() {
        let mock = happy_path_mock("vikingene");
        let provisioner = provisioner_for(&mock);

        provisioner.provision("vikingene").await.unwrap();

        let requests = mock.requests();
        let binding: serde_json::Value = serde_json::from_str(&requests[4].body).unwrap();
        assert_eq!(binding["metadata"]["name"], "vikingene");
        assert_eq!(binding["roleRef"]["kind"], "ClusterRole");
        assert_eq!(binding["roleRef"]["name"], "pleesah-player");
        assert_eq!(binding["subjects"][0]["kind"], "Group");
        assert_eq!(
            binding["subjects"][0]["name"],
            "system:serviceaccounts:vikingene"
        );
    }

    #[tokio::test]
    async fn test_provision_creates_coordinates_secret() {
        let mock = happy_path_mock("vikingene");
        let provisioner = provisioner_for(&mock);

        provisioner.provision("vikingene").await.unwrap();

        let requests = mock.requests();
        let secret: serde_json::Value = serde_json::from_str(&requests[3].body).unwrap();
        assert_eq!(secret["metadata"]["name"], "koordinatene-mine");
        assert_eq!(secret["stringData"]["KOORDINATER"], "59.9124° N, 10.7962° E");
    }

    #[tokio::test]
    async fn test_taken_team_name_fails_before_any_other_step() {
        let mock = MockApiServer::new().on_post(
            "/api/v1/namespaces",
            409,
            &already_exists_json("namespaces", "vikingene"),
        );
        let provisioner = provisioner_for(&mock);

        let err = provisioner.provision("vikingene").await.unwrap_err();

        assert!(err.is_already_exists());
        assert_eq!(mock.requests().len(), 1);
    }

    #[tokio::test]
    async fn test_token_failure_halts_the_sequence() {
        let mock = MockApiServer::new()
            .on_post("/api/v1/namespaces", 201, &namespace_json("vikingene"))
            .on_post(
                "/api/v1/namespaces/vikingene/serviceaccounts",
                201,
                &service_account_json("vikingene", "vikingene"),
            )
            .on_post(
                "/api/v1/namespaces/vikingene/serviceaccounts/vikingene/token",
                403,
                &forbidden_json("tokenrequests is forbidden"),
            );
        let provisioner = provisioner_for(&mock);

        let err = provisioner.provision("vikingene").await.unwrap_err();

        assert!(!err.is_already_exists());
        assert!(err.to_string().contains("forbidden"));
        // No secret or role binding request after the failing step
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_empty_token_in_response_is_an_error() {
        let team = "vikingene";
        let mock = MockApiServer::new()
            .on_post("/api/v1/namespaces", 201, &namespace_json(team))
            .on_post(
                "/api/v1/namespaces/vikingene/serviceaccounts",
                201,
                &service_account_json(team, team),
            )
            .on_post(
                "/api/v1/namespaces/vikingene/serviceaccounts/vikingene/token",
                201,
                &token_request_json(team, team, ""),
            );
        let provisioner = provisioner_for(&mock);

        let err = provisioner.provision(team).await.unwrap_err();

        assert!(matches!(err, HavnesjefError::TokenMissing(_)));
        assert_eq!(mock.requests().len(), 3);
    }

    #[tokio::test]
    async fn test_invalid_name_is_rejected_at_namespace_creation() {
        let mock = MockApiServer::new().on_post(
            "/api/v1/namespaces",
            422,
            &invalid_name_json("Namespace", "name must not be empty"),
        );
        let provisioner = provisioner_for(&mock);

        let err = provisioner.provision("").await.unwrap_err();

        assert!(!err.is_already_exists());
        assert_eq!(mock.requests().len(), 1);
    }
}
