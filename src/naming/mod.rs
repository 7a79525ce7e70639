// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deterministic, length-bounded resource names.
//!
//! Every resource class follows the same pattern: join the identifying
//! components with `-` in a fixed order, then apply the length policy.
//!
//! # Length Policy
//!
//! * Candidate length `<= max_name_length` (63 by default): returned unchanged
//! * Candidate length `> max_name_length`: replaced by a prefix plus the
//!   [`content_address`] of the *full* candidate
//!
//! Lengths are measured in bytes, which equals characters for the ASCII names
//! the cluster accepts. The hashed form is 7 + 32 = 39 bytes with the default
//! table, well inside the limit.
//!
//! Derivation is total: empty components are concatenated as empty strings.
//! An empty deployment name is a caller error that still yields a name; use
//! `config::validate_deployment` to reject it beforehand.
//!
//! # Example
//!
//! ```rust
//! use seldon_topology::naming::NameDeriver;
//!
//! let names = NameDeriver::default();
//!
//! assert_eq!(
//!     names.service_orchestrator_name("fraud-detector", "default"),
//!     "fraud-detector-default-svc-orch"
//! );
//!
//! let long = "fraud-detector".repeat(70);
//! let hashed = names.service_orchestrator_name(&long, "default");
//! assert!(hashed.starts_with("seldon-"));
//! assert_eq!(hashed.len(), 39);
//! ```

mod hash;

pub use hash::content_address;

use crate::config::{ComponentSpec, NamingConfig};
use crate::observability::messages::naming::{NameHashed, PredictorKeyOverridden};
use crate::observability::messages::StructuredLog;
use std::collections::BTreeMap;

/// Derives resource names from a [`NamingConfig`] table.
///
/// Holds no mutable state; share one instance freely across threads.
#[derive(Debug, Clone, Default)]
pub struct NameDeriver {
    config: NamingConfig,
}

impl NameDeriver {
    pub fn new(config: NamingConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &NamingConfig {
        &self.config
    }

    /// Name of the deployment resource itself: `<deployment>`.
    pub fn deployment_name(&self, deployment_name: &str) -> String {
        self.bounded(deployment_name.to_string(), &self.config.hash_prefix)
    }

    /// `<deployment>-<predictor><explainer_suffix>`
    pub fn explainer_name(&self, deployment_name: &str, predictor_name: &str) -> String {
        let candidate = format!(
            "{}-{}{}",
            deployment_name, predictor_name, self.config.explainer_suffix
        );
        self.bounded(candidate, &self.config.hash_prefix)
    }

    /// Name of the deployment created for one component spec of a predictor.
    ///
    /// `<deployment>-<predictor>-<index>-<pod>`, where `<pod>` is the component's
    /// metadata name or, when that is absent or empty, its container names
    /// joined with `-` in declared order. Hashed names use the deployment name
    /// prefix joined with `-`.
    pub fn pod_spec_deployment_name(
        &self,
        deployment_name: &str,
        predictor_name: &str,
        index: usize,
        component: &ComponentSpec,
    ) -> String {
        let pod = match component.pod_name() {
            Some(name) => name.to_string(),
            None => component.container_names().collect::<Vec<_>>().join("-"),
        };
        let candidate = format!("{}-{}-{}-{}", deployment_name, predictor_name, index, pod);
        let prefix = format!("{}-", self.config.deployment_name_prefix);
        self.bounded(candidate, &prefix)
    }

    /// `<deployment>-<predictor><svc_orch_suffix>`
    pub fn service_orchestrator_name(&self, deployment_name: &str, predictor_name: &str) -> String {
        let candidate = format!(
            "{}-{}{}",
            deployment_name, predictor_name, self.config.svc_orch_suffix
        );
        self.bounded(candidate, &self.config.hash_prefix)
    }

    /// Key identifying a predictor's service.
    ///
    /// If `annotations` carries the custom service name annotation, its value
    /// is returned verbatim with no length policy applied. Otherwise
    /// `<deployment>-<predictor>`.
    pub fn predictor_key(
        &self,
        deployment_name: &str,
        predictor_name: &str,
        annotations: &BTreeMap<String, String>,
    ) -> String {
        let annotation = self.config.custom_svc_name_annotation.as_str();
        if let Some(key) = annotations.get(annotation) {
            PredictorKeyOverridden {
                predictor: predictor_name,
                annotation,
                key,
            }
            .log();
            return key.clone();
        }

        let candidate = format!("{}-{}", deployment_name, predictor_name);
        self.bounded(candidate, &self.config.hash_prefix)
    }

    /// `<deployment>-<predictor>-<container>`
    pub fn container_service_name(
        &self,
        deployment_name: &str,
        predictor_name: &str,
        container_name: &str,
    ) -> String {
        let candidate = format!("{}-{}-{}", deployment_name, predictor_name, container_name);
        self.bounded(candidate, &self.config.hash_prefix)
    }

    fn bounded(&self, candidate: String, prefix: &str) -> String {
        if candidate.len() <= self.config.max_name_length {
            return candidate;
        }

        let derived = format!("{}{}", prefix, content_address(&candidate));
        NameHashed {
            candidate: &candidate,
            derived: &derived,
            max_length: self.config.max_name_length,
        }
        .log();
        derived
    }
}
