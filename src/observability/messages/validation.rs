// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for deployment validation warnings and errors.
//!
//! This module contains message types for logging events related to:
//! * Validation lifecycle (start, completion, failure)
//! * Individual findings: missing or duplicate names, unknown default predictor

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A predictor graph holds more than one unit with the same name.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use seldon_topology::observability::messages::validation::DuplicateUnitName;
///
/// let msg = DuplicateUnitName {
///     predictor: "default",
///     unit: "classifier",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct DuplicateUnitName<'a> {
    pub predictor: &'a str,
    pub unit: &'a str,
}

impl Display for DuplicateUnitName<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Duplicate unit name '{}' in predictor '{}' - searches will return the first pre-order match",
            self.unit, self.predictor
        )
    }
}

impl StructuredLog for DuplicateUnitName<'_> {
    fn log(&self) {
        tracing::error!(
            predictor = self.predictor,
            unit = self.unit,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_unit_name",
            span_name = name,
            predictor = self.predictor,
            unit = self.unit,
        )
    }
}

/// The deployment has no metadata name.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyDeploymentName;

impl Display for EmptyDeploymentName {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Deployment has no name; every derived resource name would be anonymous")
    }
}

impl StructuredLog for EmptyDeploymentName {
    fn log(&self) {
        tracing::error!("{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("empty_deployment_name", span_name = name)
    }
}

/// A predictor was declared without a name.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct EmptyPredictorName {
    pub index: usize,
}

impl Display for EmptyPredictorName {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Predictor at index {} has no name", self.index)
    }
}

impl StructuredLog for EmptyPredictorName {
    fn log(&self) {
        tracing::error!(index = self.index, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!("empty_predictor_name", span_name = name, index = self.index)
    }
}

/// Two predictors of one deployment share a name.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use seldon_topology::observability::messages::validation::DuplicatePredictorName;
///
/// let msg = DuplicatePredictorName { predictor: "canary" };
/// assert_eq!(
///     msg.to_string(),
///     "Duplicate predictor name 'canary' - derived names would collide"
/// );
/// ```
pub struct DuplicatePredictorName<'a> {
    pub predictor: &'a str,
}

impl Display for DuplicatePredictorName<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Duplicate predictor name '{}' - derived names would collide",
            self.predictor
        )
    }
}

impl StructuredLog for DuplicatePredictorName<'_> {
    fn log(&self) {
        tracing::error!(predictor = self.predictor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "duplicate_predictor_name",
            span_name = name,
            predictor = self.predictor,
        )
    }
}

/// The default predictor names no declared predictor.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct UnknownDefaultPredictor<'a> {
    pub predictor: &'a str,
}

impl Display for UnknownDefaultPredictor<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Default predictor '{}' is not declared in the deployment",
            self.predictor
        )
    }
}

impl StructuredLog for UnknownDefaultPredictor<'_> {
    fn log(&self) {
        tracing::error!(predictor = self.predictor, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "unknown_default_predictor",
            span_name = name,
            predictor = self.predictor,
        )
    }
}

/// Deployment validation started.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ValidationStarted<'a> {
    pub deployment: &'a str,
    pub predictor_count: usize,
}

impl Display for ValidationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Starting validation of deployment '{}' with {} predictors",
            self.deployment, self.predictor_count
        )
    }
}

impl StructuredLog for ValidationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            deployment = self.deployment,
            predictor_count = self.predictor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "validation",
            span_name = name,
            deployment = self.deployment,
            predictor_count = self.predictor_count,
        )
    }
}

/// Deployment validation completed successfully.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ValidationCompleted<'a> {
    pub deployment: &'a str,
    pub predictor_count: usize,
}

impl Display for ValidationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Deployment '{}' validated successfully ({} predictors)",
            self.deployment, self.predictor_count
        )
    }
}

impl StructuredLog for ValidationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            deployment = self.deployment,
            predictor_count = self.predictor_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "validation_completed",
            span_name = name,
            deployment = self.deployment,
            predictor_count = self.predictor_count,
        )
    }
}

/// Deployment validation failed.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use seldon_topology::observability::messages::validation::ValidationFailed;
///
/// let msg = ValidationFailed {
///     deployment: "fraud-detector",
///     error_count: 3,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Validation of deployment 'fraud-detector' failed with 3 errors"
/// );
/// ```
pub struct ValidationFailed<'a> {
    pub deployment: &'a str,
    pub error_count: usize,
}

impl Display for ValidationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Validation of deployment '{}' failed with {} errors",
            self.deployment, self.error_count
        )
    }
}

impl StructuredLog for ValidationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            deployment = self.deployment,
            error_count = self.error_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "validation_failed",
            span_name = name,
            deployment = self.deployment,
            error_count = self.error_count,
        )
    }
}
