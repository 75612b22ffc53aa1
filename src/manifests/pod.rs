// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Pod running the ADS container.

use super::Identity;
use crate::config::Config;
use crate::constants::{images, ADS_NAME, ADS_PORT};
use k8s_openapi::api::core::v1::{
    ConfigMapVolumeSource, Container, ContainerPort, LocalObjectReference, Pod, PodSpec,
    SecretVolumeSource, Volume, VolumeMount,
};

const ADS_COMMAND: &str = "/ads";
const AZURE_AUTH_FILE: &str = "/azure/azureAuth.json";

const CERTS_DIR: &str = "/etc/ssl/certs";

// Certificate material as (volume, file name under CERTS_DIR)
const CERT_PEM: (&str, &str) = ("ca-certpemstore-ads", "cert.pem");
const KEY_PEM: (&str, &str) = ("ca-keypemstore-ads", "key.pem");
const ROOT_CERT_PEM: (&str, &str) = ("ca-rootcertpemstore", "root-cert.pem");
const ROOT_KEY_PEM: (&str, &str) = ("ca-rootkeypemstore", "root-key.pem");

const KUBECONFIG_VOLUME: &str = "kubeconfig";
const AZURECONFIG_VOLUME: &str = "azureconfig";
const WEBHOOK_TLS_VOLUME: &str = "webhook-tls-certs";

/// Arguments placed ahead of the base arguments when `applies` holds.
struct PrefixRule {
    applies: fn(&Config) -> bool,
    args: &'static [&'static str],
}

/// Evaluated in order; matching blocks are concatenated in this order.
const PREFIX_RULES: &[PrefixRule] = &[PrefixRule {
    applies: needs_azure_auth_file,
    args: &["--azureAuthFile", AZURE_AUTH_FILE],
}];

/// Outside hosted CI the Azure auth file is mounted through `azureconfig`
fn needs_azure_auth_file(config: &Config) -> bool {
    !config.is_github
}

/// Build the ADS pod for `namespace` from `config`
pub fn build_pod(namespace: &str, config: &Config) -> Pod {
    let identity = Identity::resolve(namespace);

    let container = Container {
        name: ADS_NAME.to_string(),
        image: Some(ads_image(config)),
        image_pull_policy: Some("Always".to_string()),
        ports: Some(vec![ContainerPort {
            name: Some(identity.port_name()),
            container_port: ADS_PORT,
            ..Default::default()
        }]),
        command: Some(vec![ADS_COMMAND.to_string()]),
        args: Some(build_args(namespace, config)),
        volume_mounts: Some(volume_mounts()),
        ..Default::default()
    };

    Pod {
        metadata: identity.object_meta(),
        spec: Some(PodSpec {
            containers: vec![container],
            volumes: Some(volumes()),
            image_pull_secrets: Some(vec![LocalObjectReference {
                name: config.registry_creds_name.clone(),
            }]),
            ..Default::default()
        }),
        ..Default::default()
    }
}

/// Command line arguments for the ADS container.
///
/// Values follow their flag. Prefix rules are evaluated first and their
/// arguments are placed in front of the base list, which is never reordered.
pub fn build_args(namespace: &str, config: &Config) -> Vec<String> {
    let prefix = PREFIX_RULES
        .iter()
        .filter(|rule| (rule.applies)(config))
        .flat_map(|rule| rule.args.iter().map(|arg| arg.to_string()));

    prefix.chain(base_args(namespace, config)).collect()
}

fn base_args(namespace: &str, config: &Config) -> Vec<String> {
    let flags = [
        ("--kubeconfig", "/kube/config".to_string()),
        ("--azureSubscriptionID", config.azure_subscription.clone()),
        ("--verbosity", "trace".to_string()),
        ("--osmID", config.osm_id.clone()),
        ("--osmNamespace", namespace.to_string()),
        ("--appNamespaces", config.app_namespaces.clone()),
        ("--certpem", cert_path(CERT_PEM)),
        ("--keypem", cert_path(KEY_PEM)),
        ("--rootcertpem", cert_path(ROOT_CERT_PEM)),
        ("--rootkeypem", cert_path(ROOT_KEY_PEM)),
        ("--init-container-image", init_container_image(config)),
        ("--sidecar-image", images::DEFAULT_ENVOY.to_string()),
    ];

    flags
        .into_iter()
        .flat_map(|(flag, value)| [flag.to_string(), value])
        .collect()
}

/// `<registry>/ads:<tag>`
pub fn ads_image(config: &Config) -> String {
    format!(
        "{}/{}:{}",
        config.container_registry, ADS_NAME, config.container_tag
    )
}

/// Init container image, `init` under the registry path
pub fn init_container_image(config: &Config) -> String {
    let registry = config.container_registry.trim_end_matches('/');
    if registry.is_empty() {
        images::INIT_SUBPATH.to_string()
    } else {
        format!("{}/{}", registry, images::INIT_SUBPATH)
    }
}

fn cert_path((_, file): (&str, &str)) -> String {
    format!("{}/{}", CERTS_DIR, file)
}

fn volumes() -> Vec<Volume> {
    vec![
        config_map_volume(KUBECONFIG_VOLUME),
        config_map_volume(AZURECONFIG_VOLUME),
        config_map_volume(CERT_PEM.0),
        config_map_volume(ROOT_CERT_PEM.0),
        config_map_volume(KEY_PEM.0),
        config_map_volume(ROOT_KEY_PEM.0),
        Volume {
            name: WEBHOOK_TLS_VOLUME.to_string(),
            secret: Some(SecretVolumeSource {
                secret_name: Some(WEBHOOK_TLS_VOLUME.to_string()),
                ..Default::default()
            }),
            ..Default::default()
        },
    ]
}

/// Volume backed by the config map of the same name
fn config_map_volume(name: &str) -> Volume {
    Volume {
        name: name.to_string(),
        config_map: Some(ConfigMapVolumeSource {
            name: name.to_string(),
            ..Default::default()
        }),
        ..Default::default()
    }
}

fn volume_mounts() -> Vec<VolumeMount> {
    vec![
        VolumeMount {
            name: KUBECONFIG_VOLUME.to_string(),
            mount_path: "/kube".to_string(),
            ..Default::default()
        },
        VolumeMount {
            name: AZURECONFIG_VOLUME.to_string(),
            mount_path: "/azure".to_string(),
            ..Default::default()
        },
        cert_mount(CERT_PEM),
        cert_mount(KEY_PEM),
        cert_mount(ROOT_KEY_PEM),
        cert_mount(ROOT_CERT_PEM),
        VolumeMount {
            name: WEBHOOK_TLS_VOLUME.to_string(),
            mount_path: "/run/secrets/tls".to_string(),
            read_only: Some(true),
            ..Default::default()
        },
    ]
}

/// Mount a single file of a certificate volume into `CERTS_DIR`
fn cert_mount(cert: (&str, &str)) -> VolumeMount {
    let (volume, file) = cert;
    VolumeMount {
        name: volume.to_string(),
        mount_path: cert_path(cert),
        sub_path: Some(file.to_string()),
        ..Default::default()
    }
}
