// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::naming::NamingConfig;
use crate::errors::ConfigError;
use crate::graph::{Endpoint, PredictiveUnit};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// A complete inference deployment resource.
///
/// Mirrors the cluster resource an operator would receive. Only the parts that
/// feed name derivation and graph queries are typed; pod templates, autoscaler
/// and disruption budget payloads are carried as opaque YAML values.
///
/// # Example
/// ```yaml
/// apiVersion: machinelearning.seldon.io/v1
/// kind: SeldonDeployment
/// metadata:
///   name: fraud-detector
/// spec:
///   predictors:
///     - name: default
///       graph:
///         name: classifier
///         type: MODEL
///       componentSpecs:
///         - spec:
///             containers:
///               - name: classifier
///                 image: fraud/classifier:1.0
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeldonDeployment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub metadata: ObjectMeta,
    pub spec: SeldonDeploymentSpec,
}

impl SeldonDeployment {
    /// The deployment's identifying name.
    pub fn name(&self) -> &str {
        self.metadata.name.as_deref().unwrap_or_default()
    }
}

/// The subset of resource metadata this crate reads.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectMeta {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeldonDeploymentSpec {
    /// Deprecated name field, kept for compatibility with older resources
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_predictor: Option<String>,
    pub predictors: Vec<PredictorSpec>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<Protocol>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<Transport>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_type: Option<ServerType>,
}

/// One predictor: a graph plus the pods that host its units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictorSpec {
    pub name: String,
    pub graph: PredictiveUnit,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub component_specs: Vec<ComponentSpec>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub annotations: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub labels: BTreeMap<String, String>,
    #[serde(default)]
    pub traffic: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explainer: Option<Explainer>,
    #[serde(default)]
    pub shadow: bool,
}

/// A pod template hosting one or more units.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComponentSpec {
    #[serde(default)]
    pub metadata: ObjectMeta,
    #[serde(default)]
    pub spec: PodSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hpa_spec: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keda_spec: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pdb_spec: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replicas: Option<i32>,
}

impl ComponentSpec {
    /// Explicit pod name, if one was given and is non-empty.
    pub fn pod_name(&self) -> Option<&str> {
        self.metadata.name.as_deref().filter(|name| !name.is_empty())
    }

    /// Container names in declared order.
    pub fn container_names(&self) -> impl Iterator<Item = &str> {
        self.spec.containers.iter().map(|c| c.name.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PodSpec {
    #[serde(default)]
    pub containers: Vec<Container>,
    /// Everything else in the pod spec, passed through untouched
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Container {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_yaml::Value>,
}

impl Container {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Model explainer deployed alongside a predictor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explainer {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub explainer_type: Option<ExplainerType>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model_uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_account_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_spec: Option<serde_yaml::Value>,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub config: BTreeMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub env_secret_ref_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExplainerType {
    AnchorTabular,
    AnchorImages,
    AnchorText,
    Counterfactuals,
    Contrastive,
    KernelShap,
    IntegratedGradients,
    #[serde(rename = "ALE")]
    Ale,
    TreeShap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Protocol {
    Seldon,
    Tensorflow,
    Kfserving,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Transport {
    Rest,
    Grpc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServerType {
    Rpc,
    Kafka,
}

fn read_file(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

/// Parse a deployment from YAML text.
pub fn parse_deployment_yaml(content: &str) -> Result<SeldonDeployment, ConfigError> {
    Ok(serde_yaml::from_str(content)?)
}

/// Parse a deployment from JSON text.
pub fn parse_deployment_json(content: &str) -> Result<SeldonDeployment, ConfigError> {
    Ok(serde_json::from_str(content)?)
}

/// Load a deployment from a file.
///
/// Files ending in `.json` are parsed as JSON, anything else as YAML.
pub fn load_deployment<P: AsRef<Path>>(path: P) -> Result<SeldonDeployment, ConfigError> {
    let path = path.as_ref();
    let content = read_file(path)?;

    match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => parse_deployment_json(&content),
        _ => parse_deployment_yaml(&content),
    }
}

/// Load a deployment and validate it before handing it out.
///
/// All validation findings are returned together in `ConfigError::Invalid`.
pub fn load_and_validate_deployment<P: AsRef<Path>>(
    path: P,
) -> Result<SeldonDeployment, ConfigError> {
    let deployment = load_deployment(path)?;

    crate::config::validate_deployment(&deployment).map_err(ConfigError::Invalid)?;

    Ok(deployment)
}

/// Load a naming table from a YAML file.
pub fn load_naming_config<P: AsRef<Path>>(path: P) -> Result<NamingConfig, ConfigError> {
    let content = read_file(path.as_ref())?;
    Ok(serde_yaml::from_str(&content)?)
}
