// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;

use crate::constants::env as vars;

/// Deployment configuration loaded from environment variables.
///
/// Values are passed through to the manifests as-is; only presence of the
/// required variables is checked here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Namespace ADS is deployed into
    pub namespace: String,
    /// Registry hosting the ADS and init images
    pub container_registry: String,
    pub container_tag: String,
    /// Name of the image pull secret for the registry
    pub registry_creds_name: String,
    pub azure_subscription: String,
    /// Comma separated namespaces ADS watches
    pub app_namespaces: String,
    pub osm_id: String,
    /// Running on hosted CI, where no Azure auth file is mounted
    pub is_github: bool,
    /// Print the manifests instead of applying them
    pub dry_run: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| {
            lookup(key).with_context(|| format!("{} environment variable not set", key))
        };
        let optional = |key: &str| lookup(key).unwrap_or_default();

        let namespace = required(vars::NAMESPACE)?;
        let container_registry = required(vars::CONTAINER_REGISTRY)?;
        let container_tag = required(vars::CONTAINER_TAG)?;

        let is_github = lookup(vars::IS_GITHUB).is_some_and(|v| v == "true");
        let dry_run: bool = lookup(vars::DRY_RUN)
            .unwrap_or("false".to_string())
            .parse()
            .unwrap_or(false);

        Ok(Config {
            namespace,
            container_registry,
            container_tag,
            registry_creds_name: optional(vars::REGISTRY_CREDS_NAME),
            azure_subscription: optional(vars::AZURE_SUBSCRIPTION),
            app_namespaces: optional(vars::APP_NAMESPACES),
            osm_id: optional(vars::OSM_ID),
            is_github,
            dry_run,
        })
    }
}
