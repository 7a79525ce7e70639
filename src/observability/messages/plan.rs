// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for resource plan construction.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// Resource plan construction started for a deployment.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct PlanStarted<'a> {
    pub deployment: &'a str,
    pub predictor_count: usize,
}

impl Display for PlanStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Building resource plan for '{}' with {} predictors",
            self.deployment, self.predictor_count
        )
    }
}

impl StructuredLog for PlanStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            deployment = self.deployment,
            predictor_count = self.predictor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "plan",
            span_name = name,
            deployment = self.deployment,
            predictor_count = self.predictor_count,
        )
    }
}

/// A predictor graph has no unit bound to the local engine.
///
/// Not an error: every stage is then reached over the network.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct NoLocalEngineUnit<'a> {
    pub predictor: &'a str,
}

impl Display for NoLocalEngineUnit<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Predictor '{}' has no unit bound to localhost; all units are remote",
            self.predictor
        )
    }
}

impl StructuredLog for NoLocalEngineUnit<'_> {
    fn log(&self) {
        tracing::debug!(predictor = self.predictor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "no_local_engine_unit",
            span_name = name,
            predictor = self.predictor,
        )
    }
}

/// Resource plan built for a deployment.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use seldon_topology::observability::messages::plan::PlanBuilt;
///
/// let msg = PlanBuilt {
///     deployment: "fraud-detector",
///     predictor_count: 2,
///     unit_count: 5,
///     resource_count: 9,
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct PlanBuilt<'a> {
    pub deployment: &'a str,
    pub predictor_count: usize,
    pub unit_count: usize,
    pub resource_count: usize,
}

impl Display for PlanBuilt<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Built resource plan for '{}': {} predictors, {} units, {} derived names",
            self.deployment, self.predictor_count, self.unit_count, self.resource_count
        )
    }
}

impl StructuredLog for PlanBuilt<'_> {
    fn log(&self) {
        tracing::info!(
            deployment = self.deployment,
            predictor_count = self.predictor_count,
            unit_count = self.unit_count,
            resource_count = self.resource_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "plan_built",
            span_name = name,
            deployment = self.deployment,
            predictor_count = self.predictor_count,
            unit_count = self.unit_count,
        )
    }
}
