// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HavnesjefError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("token request for service account {0} returned no token")]
    TokenMissing(String),

    #[error("failed to render kubeconfig: {0}")]
    RenderError(#[from] serde_yaml::Error),
}

impl HavnesjefError {
    /// True when the API server rejected a create because the name is taken.
    pub fn is_already_exists(&self) -> bool {
        matches!(
            self,
            HavnesjefError::KubeError(kube::Error::Api(err)) if err.code == 409
        )
    }
}

pub type Result<T> = std::result::Result<T, HavnesjefError>;
