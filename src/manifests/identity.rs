// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Name, namespace and labels shared by the ADS service and pod.

use crate::constants::ADS_NAME;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;

/// Identity of the ADS workload within a namespace.
///
/// The service selector and the pod labels are both taken from here, so the
/// service always selects the pod.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    pub namespace: String,
    pub labels: BTreeMap<String, String>,
}

impl Identity {
    /// Resolve the ADS identity for a namespace. The namespace is not validated.
    pub fn resolve(namespace: &str) -> Self {
        Identity {
            name: ADS_NAME.to_string(),
            namespace: namespace.to_string(),
            labels: BTreeMap::from([("app".to_string(), ADS_NAME.to_string())]),
        }
    }

    /// Name of the discovery port, shared by the service and the container
    pub fn port_name(&self) -> String {
        format!("{}-port", self.name)
    }

    pub fn object_meta(&self) -> ObjectMeta {
        ObjectMeta {
            name: Some(self.name.clone()),
            namespace: Some(self.namespace.clone()),
            labels: Some(self.labels.clone()),
            ..Default::default()
        }
    }
}
