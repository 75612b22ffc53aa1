// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Manifests for deploying the aggregated discovery service (ADS).
//!
//! Builders are pure: they take the namespace and configuration explicitly
//! and never read the environment.

pub mod identity;
pub mod pod;
pub mod service;

pub use identity::Identity;
pub use pod::{build_args, build_pod};
pub use service::build_service;

use crate::error::Result;
use k8s_openapi::api::core::v1::{Pod, Service};
use serde::Serialize;

const DOCUMENT_SEPARATOR: &str = "---\n";

/// Render the service and pod as a multi-document YAML stream
pub fn render_yaml(service: &Service, pod: &Pod) -> Result<String> {
    let documents = [to_document(service)?, to_document(pod)?];
    Ok(documents.join(DOCUMENT_SEPARATOR))
}

fn to_document<T: Serialize>(object: &T) -> Result<String> {
    Ok(serde_yaml::to_string(object)?)
}
