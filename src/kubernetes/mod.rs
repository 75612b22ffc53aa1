// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Submitting the ADS manifests to a cluster.

pub mod apply;
pub mod namespaces;

pub use apply::{apply_pod, apply_service, deploy};
pub use namespaces::ensure_namespace_exists;
