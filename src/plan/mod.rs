// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Resource plan: every derived name a controller needs for one deployment.
//!
//! The plan applies the [`NameDeriver`] to each predictor, its component
//! specs, containers and explainer, and records which unit of the graph runs
//! next to the engine. It is a read-only view; nothing here talks to a cluster.

use crate::config::{PredictorSpec, SeldonDeployment};
use crate::graph::{find_local_engine_unit, flatten_tree};
use crate::naming::NameDeriver;
use crate::observability::messages::plan::{NoLocalEngineUnit, PlanBuilt, PlanStarted};
use crate::observability::messages::StructuredLog;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResourcePlan {
    pub deployment_name: String,
    pub predictors: Vec<PredictorPlan>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictorPlan {
    pub predictor: String,
    pub predictor_key: String,
    pub service_orchestrator: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explainer: Option<String>,
    /// One deployment per component spec, in declared order
    pub component_deployments: Vec<String>,
    /// One service per container, across all component specs
    pub container_services: Vec<ContainerService>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_engine_unit: Option<String>,
    /// Unit names in pre-order
    pub units: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContainerService {
    pub container: String,
    pub service: String,
}

impl ResourcePlan {
    pub fn build(names: &NameDeriver, deployment: &SeldonDeployment) -> Self {
        let deployment_name = deployment.name();
        let start_msg = PlanStarted {
            deployment: deployment_name,
            predictor_count: deployment.spec.predictors.len(),
        };

        let span = start_msg.span("resource_plan");
        let _guard = span.enter();
        start_msg.log();

        let predictors: Vec<PredictorPlan> = deployment
            .spec
            .predictors
            .iter()
            .map(|predictor| PredictorPlan::build(names, deployment_name, predictor))
            .collect();

        let plan = Self {
            deployment_name: names.deployment_name(deployment_name),
            predictors,
        };

        PlanBuilt {
            deployment: deployment_name,
            predictor_count: plan.predictors.len(),
            unit_count: plan.predictors.iter().map(|p| p.units.len()).sum(),
            resource_count: plan.resource_count(),
        }
        .log();

        plan
    }

    /// Count of derived resource names in the plan, including the deployment.
    pub fn resource_count(&self) -> usize {
        1 + self
            .predictors
            .iter()
            .map(|p| {
                2 + usize::from(p.explainer.is_some())
                    + p.component_deployments.len()
                    + p.container_services.len()
            })
            .sum::<usize>()
    }

    pub fn predictor(&self, name: &str) -> Option<&PredictorPlan> {
        self.predictors.iter().find(|p| p.predictor == name)
    }
}

impl PredictorPlan {
    fn build(names: &NameDeriver, deployment_name: &str, predictor: &PredictorSpec) -> Self {
        let predictor_name = predictor.name.as_str();

        let component_deployments = predictor
            .component_specs
            .iter()
            .enumerate()
            .map(|(index, component)| {
                names.pod_spec_deployment_name(deployment_name, predictor_name, index, component)
            })
            .collect();

        let container_services = predictor
            .component_specs
            .iter()
            .flat_map(|component| component.container_names())
            .map(|container| ContainerService {
                container: container.to_string(),
                service: names.container_service_name(deployment_name, predictor_name, container),
            })
            .collect();

        let local_engine_unit = find_local_engine_unit(&predictor.graph).map(|u| u.name.clone());
        if local_engine_unit.is_none() {
            NoLocalEngineUnit {
                predictor: predictor_name,
            }
            .log();
        }

        Self {
            predictor: predictor_name.to_string(),
            predictor_key: names.predictor_key(
                deployment_name,
                predictor_name,
                &predictor.annotations,
            ),
            service_orchestrator: names.service_orchestrator_name(deployment_name, predictor_name),
            explainer: predictor
                .explainer
                .as_ref()
                .map(|_| names.explainer_name(deployment_name, predictor_name)),
            component_deployments,
            container_services,
            local_engine_unit,
            units: flatten_tree(&predictor.graph)
                .into_iter()
                .map(|u| u.name.clone())
                .collect(),
        }
    }
}
