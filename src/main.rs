// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use kube::Client;
use tracing::info;
use tracing_subscriber::EnvFilter;

use osm_deploy::config::Config;
use osm_deploy::kubernetes::deploy;
use osm_deploy::manifests::{build_pod, build_service, render_yaml};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for rendered manifests
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: namespace={}, registry={}, tag={}",
        config.namespace, config.container_registry, config.container_tag
    );

    let service = build_service(&config.namespace);
    let pod = build_pod(&config.namespace, &config);

    if config.dry_run {
        print!("{}", render_yaml(&service, &pod)?);
        return Ok(());
    }

    let client = Client::try_default().await?;
    info!("Connected to Kubernetes cluster");

    deploy(&client, &service, &pod).await?;
    Ok(())
}
