// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Service exposing ADS and the sidecar injector webhook.

use super::Identity;
use crate::constants::{webhook, ADS_PORT};
use k8s_openapi::api::core::v1::{Service, ServicePort, ServiceSpec};
use k8s_openapi::apimachinery::pkg::util::intstr::IntOrString;

const INJECTOR_PORT_NAME: &str = "sidecar-injector";

/// Build the NodePort service for ADS in `namespace`
pub fn build_service(namespace: &str) -> Service {
    let identity = Identity::resolve(namespace);

    Service {
        metadata: identity.object_meta(),
        spec: Some(ServiceSpec {
            ports: Some(vec![
                ServicePort {
                    name: Some(identity.port_name()),
                    port: ADS_PORT,
                    target_port: Some(IntOrString::Int(ADS_PORT)),
                    ..Default::default()
                },
                // Exposed on 443 but the webhook listens on its own port
                ServicePort {
                    name: Some(INJECTOR_PORT_NAME.to_string()),
                    port: webhook::SERVICE_PORT,
                    target_port: Some(IntOrString::Int(webhook::TARGET_PORT)),
                    ..Default::default()
                },
            ]),
            selector: Some(identity.labels),
            type_: Some("NodePort".to_string()),
            ..Default::default()
        }),
        ..Default::default()
    }
}
