// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeployError {
    #[error("Kubernetes API error: {0}")]
    KubeError(#[from] kube::Error),

    #[error("Namespace creation failed: {0}")]
    NamespaceError(String),

    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    #[error("Failed to render manifest: {0}")]
    RenderError(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, DeployError>;
