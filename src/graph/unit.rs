// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{
    LABEL_COMBINER, LABEL_MODEL, LABEL_OUTPUT_TRANSFORMER, LABEL_ROUTER, LABEL_TRANSFORMER,
    LOCAL_ENGINE_HOST,
};
use serde::{Deserialize, Serialize};

/// A single stage of an inference pipeline.
///
/// Predictive units form an ordered, rooted n-ary tree: the root is the entry
/// point of a predictor's graph and each unit owns its children directly.
/// Unit names are expected to be unique across the whole tree. That contract
/// is checked by `config::validate_deployment`, never by the traversal code,
/// which simply returns the first pre-order match.
///
/// Optional fields stay `Option` so that "absent" and "present but empty" are
/// distinguishable after deserialization.
///
/// # Example
/// ```yaml
/// name: classifier
/// type: MODEL
/// endpoint:
///   service_host: localhost
///   service_port: 9000
///   type: REST
/// children: []
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictiveUnit {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<PredictiveUnit>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub unit_type: Option<UnitType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implementation: Option<Implementation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub methods: Option<Vec<UnitMethod>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<Endpoint>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub parameters: Vec<Parameter>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub model_uri: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub service_account_name: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub env_secret_ref_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logger: Option<PayloadLogger>,
}

impl PredictiveUnit {
    /// Create a bare unit with no children and no optional fields set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
            unit_type: None,
            implementation: None,
            methods: None,
            endpoint: None,
            parameters: Vec::new(),
            model_uri: String::new(),
            service_account_name: String::new(),
            env_secret_ref_name: String::new(),
            logger: None,
        }
    }

    /// Builder-style helper for attaching children in declared order.
    pub fn with_children(mut self, children: Vec<PredictiveUnit>) -> Self {
        self.children = children;
        self
    }

    pub fn with_type(mut self, unit_type: UnitType) -> Self {
        self.unit_type = Some(unit_type);
        self
    }

    pub fn with_endpoint(mut self, endpoint: Endpoint) -> Self {
        self.endpoint = Some(endpoint);
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// True when this unit is bound to the in-process execution engine.
    ///
    /// A unit without an endpoint is never the local engine unit.
    pub fn is_local_engine(&self) -> bool {
        self.endpoint
            .as_ref()
            .is_some_and(|endpoint| endpoint.service_host == LOCAL_ENGINE_HOST)
    }

    /// Whether the unit declares the given capability hook.
    pub fn implements(&self, method: UnitMethod) -> bool {
        self.methods
            .as_ref()
            .is_some_and(|methods| methods.contains(&method))
    }
}

/// Tears the tree down level by level so deep graphs cannot overflow the
/// stack. Each detached unit is dropped with no children left to recurse into.
impl Drop for PredictiveUnit {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut unit) = pending.pop() {
            pending.append(&mut unit.children);
        }
    }
}

/// Role of a unit within the pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitType {
    #[serde(rename = "UNKNOWN_TYPE")]
    Unknown,
    Router,
    Combiner,
    Model,
    Transformer,
    OutputTransformer,
}

impl UnitType {
    /// Pod label marking a component that hosts a unit of this role.
    ///
    /// Units of unknown type carry no role label.
    pub fn label(&self) -> Option<&'static str> {
        match self {
            UnitType::Unknown => None,
            UnitType::Router => Some(LABEL_ROUTER),
            UnitType::Combiner => Some(LABEL_COMBINER),
            UnitType::Model => Some(LABEL_MODEL),
            UnitType::Transformer => Some(LABEL_TRANSFORMER),
            UnitType::OutputTransformer => Some(LABEL_OUTPUT_TRANSFORMER),
        }
    }
}

/// Built-in execution backend for a unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Implementation {
    #[serde(rename = "UNKNOWN_IMPLEMENTATION")]
    Unknown,
    #[serde(rename = "SIMPLE_MODEL")]
    SimpleModel,
    #[serde(rename = "SIMPLE_ROUTER")]
    SimpleRouter,
    #[serde(rename = "RANDOM_ABTEST")]
    RandomAbTest,
    #[serde(rename = "AVERAGE_COMBINER")]
    AverageCombiner,
}

/// Capability hooks a unit may implement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UnitMethod {
    TransformInput,
    TransformOutput,
    Route,
    Aggregate,
    SendFeedback,
}

/// Network binding for a unit.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Endpoint {
    #[serde(default)]
    pub service_host: String,
    #[serde(default)]
    pub service_port: i32,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub transport: Option<TransportType>,
    #[serde(rename = "httpPort", default)]
    pub http_port: i32,
    #[serde(rename = "grpcPort", default)]
    pub grpc_port: i32,
}

impl Endpoint {
    pub fn new(service_host: impl Into<String>, service_port: i32) -> Self {
        Self {
            service_host: service_host.into(),
            service_port,
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TransportType {
    #[serde(rename = "REST")]
    Rest,
    #[serde(rename = "GRPC")]
    Grpc,
}

/// A unit parameter. The value stays string-encoded; `kind` says how the
/// serving runtime should interpret it and may be left out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    #[serde(default)]
    pub value: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<ParameterType>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ParameterType {
    Int,
    Float,
    Double,
    String,
    Bool,
}

/// Request/response payload logging side channel.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PayloadLogger {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<LoggerMode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoggerMode {
    All,
    Request,
    Response,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_unit_with_wire_names() {
        let yaml = r#"
name: router
type: ROUTER
implementation: RANDOM_ABTEST
methods: [ROUTE, SEND_FEEDBACK]
endpoint:
  service_host: localhost
  service_port: 9000
  type: GRPC
  grpcPort: 5001
parameters:
  - name: ratioA
    value: "0.5"
    type: FLOAT
modelUri: gs://models/router
logger:
  url: http://logger.default
  mode: request
children:
  - name: a
  - name: b
"#;

        let unit: PredictiveUnit = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(unit.unit_type, Some(UnitType::Router));
        assert_eq!(unit.implementation, Some(Implementation::RandomAbTest));
        assert!(unit.implements(UnitMethod::Route));
        assert!(!unit.implements(UnitMethod::Aggregate));
        let endpoint = unit.endpoint.as_ref().unwrap();
        assert_eq!(endpoint.transport, Some(TransportType::Grpc));
        assert_eq!(endpoint.grpc_port, 5001);
        assert_eq!(unit.parameters[0].kind, Some(ParameterType::Float));
        assert_eq!(unit.model_uri, "gs://models/router");
        assert_eq!(unit.logger.as_ref().unwrap().mode, Some(LoggerMode::Request));
        assert_eq!(unit.children.len(), 2);
        assert!(unit.children[0].is_leaf());
    }

    #[test]
    fn absent_optionals_stay_absent() {
        let unit: PredictiveUnit = serde_yaml::from_str("name: bare").unwrap();

        assert_eq!(unit.unit_type, None);
        assert_eq!(unit.methods, None);
        assert_eq!(unit.endpoint, None);
        assert!(!unit.is_local_engine());
        assert!(!unit.implements(UnitMethod::TransformInput));
    }

    #[test]
    fn empty_methods_list_is_present() {
        let unit: PredictiveUnit = serde_yaml::from_str("name: m\nmethods: []").unwrap();
        assert_eq!(unit.methods, Some(vec![]));
    }

    #[test]
    fn local_engine_requires_exact_host() {
        let local = PredictiveUnit::new("a").with_endpoint(Endpoint::new("localhost", 9000));
        let remote = PredictiveUnit::new("b").with_endpoint(Endpoint::new("localhost.svc", 9000));

        assert!(local.is_local_engine());
        assert!(!remote.is_local_engine());
    }

    #[test]
    fn unit_type_labels() {
        assert_eq!(UnitType::Router.label(), Some("seldon.io/router"));
        assert_eq!(
            UnitType::OutputTransformer.label(),
            Some("seldon.io/output-transformer")
        );
        assert_eq!(UnitType::Unknown.label(), None);
    }

    #[test]
    fn unknown_type_wire_name() {
        let unit: PredictiveUnit = serde_yaml::from_str("name: u\ntype: UNKNOWN_TYPE").unwrap();
        assert_eq!(unit.unit_type, Some(UnitType::Unknown));

        let json = serde_json::to_value(&PredictiveUnit::new("m").with_type(UnitType::OutputTransformer)).unwrap();
        assert_eq!(json["type"], "OUTPUT_TRANSFORMER");
    }

    #[test]
    fn parameter_without_type_still_loads() {
        let yaml = r#"
name: model
parameters:
  - name: threshold
    value: "0.75"
  - name: verbose
"#;
        let unit: PredictiveUnit = serde_yaml::from_str(yaml).unwrap();

        assert_eq!(unit.parameters[0].kind, None);
        assert_eq!(unit.parameters[0].value, "0.75");
        assert_eq!(unit.parameters[1].value, "");

        let json = serde_json::to_value(&unit.parameters[0]).unwrap();
        assert!(json.get("type").is_none());
    }

    #[test]
    fn dropping_detaches_children_without_losing_clones() {
        let tree = PredictiveUnit::new("root").with_children(vec![
            PredictiveUnit::new("a").with_children(vec![PredictiveUnit::new("a1")]),
            PredictiveUnit::new("b"),
        ]);
        let subtree = tree.children[0].clone();

        drop(tree);

        assert_eq!(subtree.name, "a");
        assert_eq!(subtree.children[0].name, "a1");
    }
}
