// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Name shared by the ADS service, pod, container and its `app` label
pub const ADS_NAME: &str = "ads";

/// Port ADS serves the aggregated discovery API on
pub const ADS_PORT: i32 = 15128;

/// Field manager used for server-side apply
pub const FIELD_MANAGER: &str = "osm-deploy";

/// Sidecar injector webhook ports
pub mod webhook {
    /// Port exposed on the service, the conventional TLS port
    pub const SERVICE_PORT: i32 = 443;
    /// Port the injector webhook listens on inside the ADS container
    pub const TARGET_PORT: i32 = 9090;
}

/// Container images
pub mod images {
    pub const DEFAULT_ENVOY: &str = "envoyproxy/envoy-alpine:v1.14.1";
    /// Sub-path under the registry holding the init container image
    pub const INIT_SUBPATH: &str = "init";
}

/// Environment variables read by [`crate::config::Config::from_env`]
pub mod env {
    pub const NAMESPACE: &str = "K8S_NAMESPACE";
    pub const CONTAINER_REGISTRY: &str = "CTR_REGISTRY";
    pub const CONTAINER_TAG: &str = "CTR_TAG";
    pub const REGISTRY_CREDS_NAME: &str = "CTR_REGISTRY_CREDS_NAME";
    pub const AZURE_SUBSCRIPTION: &str = "AZURE_SUBSCRIPTION";
    pub const APP_NAMESPACES: &str = "APP_NAMESPACES";
    pub const OSM_ID: &str = "OSM_ID";
    pub const IS_GITHUB: &str = "IS_GITHUB";
    pub const DRY_RUN: &str = "DRY_RUN";
}
