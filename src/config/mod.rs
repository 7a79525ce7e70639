// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod loader;
mod naming;
mod validation;

pub mod consts;

pub use loader::{
    load_and_validate_deployment, load_deployment, load_naming_config, parse_deployment_json,
    parse_deployment_yaml, ComponentSpec, Container, Explainer, ExplainerType, ObjectMeta,
    PodSpec, PredictorSpec, Protocol, SeldonDeployment, SeldonDeploymentSpec, ServerType,
    Transport,
};
pub use naming::NamingConfig;
pub use validation::validate_deployment;
