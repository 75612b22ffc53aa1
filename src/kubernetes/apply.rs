// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Server-side apply of the ADS service and pod

use crate::constants::FIELD_MANAGER;
use crate::error::{DeployError, Result};
use crate::kubernetes::ensure_namespace_exists;
use k8s_openapi::api::core::v1::{Pod, Service};
use k8s_openapi::NamespaceResourceScope;
use kube::{
    api::{Patch, PatchParams},
    Api, Client, Resource, ResourceExt,
};
use serde::{de::DeserializeOwned, Serialize};
use std::fmt::Debug;
use tracing::{info, instrument};

/// Ensure the target namespace exists, then apply the service and the pod
#[instrument(skip(client, service, pod), fields(service = %service.name_any()))]
pub async fn deploy(client: &Client, service: &Service, pod: &Pod) -> Result<()> {
    let (_, namespace) = object_ref(service)?;

    ensure_namespace_exists(client, namespace).await?;
    apply_service(client, service).await?;
    apply_pod(client, pod).await?;

    info!("Deployed ADS to namespace {}", namespace);
    Ok(())
}

#[instrument(skip(client, service), fields(service = %service.name_any()))]
pub async fn apply_service(client: &Client, service: &Service) -> Result<Service> {
    apply(client, service).await
}

#[instrument(skip(client, pod), fields(pod = %pod.name_any()))]
pub async fn apply_pod(client: &Client, pod: &Pod) -> Result<Pod> {
    apply(client, pod).await
}

async fn apply<K>(client: &Client, object: &K) -> Result<K>
where
    K: Resource<Scope = NamespaceResourceScope> + Clone + Debug + DeserializeOwned + Serialize,
    K::DynamicType: Default,
{
    let (name, namespace) = object_ref(object)?;
    let dt = K::DynamicType::default();
    let kind = K::kind(&dt);

    info!("Applying {} {}/{}", kind, namespace, name);

    let api: Api<K> = Api::namespaced(client.clone(), namespace);
    let pp = PatchParams::apply(FIELD_MANAGER).force();
    let applied = api.patch(name, &pp, &Patch::Apply(object)).await?;

    info!("Applied {} {}/{}", kind, namespace, name);
    Ok(applied)
}

/// Name and namespace of a namespaced object, both required for apply
fn object_ref<K>(object: &K) -> Result<(&str, &str)>
where
    K: Resource,
    K::DynamicType: Default,
{
    let dt = K::DynamicType::default();
    let kind = K::kind(&dt);
    let meta = object.meta();

    let Some(name) = meta.name.as_deref() else {
        return Err(DeployError::InvalidManifest(format!("{} has no name", kind)));
    };
    let Some(namespace) = meta.namespace.as_deref() else {
        return Err(DeployError::InvalidManifest(format!(
            "{} {} has no namespace",
            kind, name
        )));
    };

    Ok((name, namespace))
}
