// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    ANNOTATION_CUSTOM_SVC_NAME, DEPLOYMENT_NAME_PREFIX, EXPLAINER_NAME_SUFFIX, HASHED_NAME_PREFIX,
    MAX_NAME_LENGTH, SVC_ORCH_SUFFIX,
};
use serde::Deserialize;

/// Naming table handed to the name deriver.
///
/// Every field is optional in YAML and falls back to the built-in constant,
/// so a table can override a single entry (handy in tests).
///
/// # Fields
/// * `max_name_length` - Longest name returned unhashed (defaults to 63)
/// * `hash_prefix` - Prefix for hashed names (defaults to `seldon-`)
/// * `deployment_name_prefix` - Prefix for hashed per-component deployment names, joined with `-`
/// * `svc_orch_suffix` - Suffix of service orchestrator names
/// * `explainer_suffix` - Suffix of explainer deployment names
/// * `custom_svc_name_annotation` - Predictor annotation that overrides the predictor key
///
/// # Example
/// ```yaml
/// max_name_length: 63
/// hash_prefix: "seldon-"
/// svc_orch_suffix: "-svc-orch"
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct NamingConfig {
    pub max_name_length: usize,
    pub hash_prefix: String,
    pub deployment_name_prefix: String,
    pub svc_orch_suffix: String,
    pub explainer_suffix: String,
    pub custom_svc_name_annotation: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            max_name_length: MAX_NAME_LENGTH,
            hash_prefix: HASHED_NAME_PREFIX.to_string(),
            deployment_name_prefix: DEPLOYMENT_NAME_PREFIX.to_string(),
            svc_orch_suffix: SVC_ORCH_SUFFIX.to_string(),
            explainer_suffix: EXPLAINER_NAME_SUFFIX.to_string(),
            custom_svc_name_annotation: ANNOTATION_CUSTOM_SVC_NAME.to_string(),
        }
    }
}
