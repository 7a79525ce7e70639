// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Deployment validation.
//!
//! Name derivation and graph searches never fail, so they cannot report
//! contract violations themselves. This module checks those contracts up
//! front so a caller can reject a deployment before deriving names from it.
//!
//! # Validation Pipeline
//!
//! 1. **Deployment name**: the primary identifying component must be non-empty
//! 2. **Predictor names**: non-empty and unique within the deployment
//! 3. **Unit names**: unique across each predictor's graph
//! 4. **Default predictor**: when set, must name a declared predictor
//!
//! All findings are accumulated so the caller sees every problem at once.
//!
//! # Examples
//!
//! ```rust
//! use seldon_topology::config::{parse_deployment_yaml, validate_deployment};
//! use seldon_topology::errors::ValidationError;
//!
//! let deployment = parse_deployment_yaml(r#"
//! metadata:
//!   name: iris
//! spec:
//!   predictors:
//!     - name: default
//!       graph:
//!         name: model
//!         children:
//!           - name: model
//! "#).unwrap();
//!
//! let errors = validate_deployment(&deployment).unwrap_err();
//! assert_eq!(errors, vec![ValidationError::DuplicateUnitName {
//!     predictor: "default".to_string(),
//!     unit: "model".to_string(),
//! }]);
//! ```

use crate::config::SeldonDeployment;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{
    DuplicatePredictorName, DuplicateUnitName, EmptyDeploymentName, EmptyPredictorName,
    UnknownDefaultPredictor, ValidationCompleted, ValidationFailed, ValidationStarted,
};
use crate::observability::messages::StructuredLog;
use std::collections::HashSet;

/// Validate a deployment, returning every finding.
///
/// # Returns
///
/// * `Ok(())` - Deployment satisfies all naming and graph contracts
/// * `Err(Vec<ValidationError>)` - All findings, in pipeline order
pub fn validate_deployment(deployment: &SeldonDeployment) -> Result<(), Vec<ValidationError>> {
    let predictor_count = deployment.spec.predictors.len();
    let start_msg = ValidationStarted {
        deployment: deployment.name(),
        predictor_count,
    };

    let span = start_msg.span("validate_deployment");
    let _guard = span.enter();
    start_msg.log();

    let mut errors = Vec::new();

    if deployment.name().is_empty() {
        EmptyDeploymentName.log();
        errors.push(ValidationError::EmptyDeploymentName);
    }

    errors.extend(validate_predictor_names(deployment));
    errors.extend(validate_unique_unit_names(deployment));
    errors.extend(validate_default_predictor(deployment));

    if errors.is_empty() {
        ValidationCompleted {
            deployment: deployment.name(),
            predictor_count,
        }
        .log();
        Ok(())
    } else {
        ValidationFailed {
            deployment: deployment.name(),
            error_count: errors.len(),
        }
        .log();
        Err(errors)
    }
}

/// Predictor names must be non-empty and unique, since each one feeds
/// every name derived for that predictor.
fn validate_predictor_names(deployment: &SeldonDeployment) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for (index, predictor) in deployment.spec.predictors.iter().enumerate() {
        if predictor.name.is_empty() {
            EmptyPredictorName { index }.log();
            errors.push(ValidationError::EmptyPredictorName { index });
        } else if !seen.insert(predictor.name.as_str()) {
            DuplicatePredictorName {
                predictor: &predictor.name,
            }
            .log();
            errors.push(ValidationError::DuplicatePredictorName {
                predictor: predictor.name.clone(),
            });
        }
    }

    errors
}

/// Each duplicated unit name is reported once per predictor, however many
/// times it repeats.
fn validate_unique_unit_names(deployment: &SeldonDeployment) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    for predictor in &deployment.spec.predictors {
        let mut seen = HashSet::new();
        let mut reported = HashSet::new();

        for unit in predictor.graph.iter() {
            let name = unit.name.as_str();
            if !seen.insert(name) && reported.insert(name) {
                DuplicateUnitName {
                    predictor: &predictor.name,
                    unit: name,
                }
                .log();
                errors.push(ValidationError::DuplicateUnitName {
                    predictor: predictor.name.clone(),
                    unit: name.to_string(),
                });
            }
        }
    }

    errors
}

fn validate_default_predictor(deployment: &SeldonDeployment) -> Option<ValidationError> {
    let default = deployment.spec.default_predictor.as_deref()?;
    let declared = deployment
        .spec
        .predictors
        .iter()
        .any(|predictor| predictor.name == default);

    if declared {
        return None;
    }

    UnknownDefaultPredictor { predictor: default }.log();
    Some(ValidationError::UnknownDefaultPredictor {
        predictor: default.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ObjectMeta, PredictorSpec, SeldonDeploymentSpec};
    use crate::graph::PredictiveUnit;
    use crate::observability::capture::capture_logs;

    fn deployment(name: &str, predictors: Vec<PredictorSpec>) -> SeldonDeployment {
        SeldonDeployment {
            metadata: ObjectMeta {
                name: Some(name.to_string()),
                ..ObjectMeta::default()
            },
            spec: SeldonDeploymentSpec {
                predictors,
                ..SeldonDeploymentSpec::default()
            },
            ..SeldonDeployment::default()
        }
    }

    fn predictor(name: &str, graph: PredictiveUnit) -> PredictorSpec {
        PredictorSpec {
            name: name.to_string(),
            graph,
            ..PredictorSpec::default()
        }
    }

    #[test]
    fn valid_deployment_passes() {
        let graph = PredictiveUnit::new("router").with_children(vec![
            PredictiveUnit::new("model-a"),
            PredictiveUnit::new("model-b"),
        ]);
        let dep = deployment("ab-test", vec![predictor("main", graph)]);

        assert!(validate_deployment(&dep).is_ok());
    }

    #[test]
    fn same_unit_name_in_different_predictors_is_fine() {
        let dep = deployment(
            "two",
            vec![
                predictor("a", PredictiveUnit::new("model")),
                predictor("b", PredictiveUnit::new("model")),
            ],
        );

        assert!(validate_deployment(&dep).is_ok());
    }

    #[test]
    fn empty_deployment_name() {
        let dep = deployment("", vec![predictor("p", PredictiveUnit::new("m"))]);

        assert_eq!(
            validate_deployment(&dep).unwrap_err(),
            vec![ValidationError::EmptyDeploymentName]
        );
    }

    #[test]
    fn predictor_name_problems() {
        let dep = deployment(
            "d",
            vec![
                predictor("", PredictiveUnit::new("m")),
                predictor("p", PredictiveUnit::new("m")),
                predictor("p", PredictiveUnit::new("m")),
            ],
        );

        assert_eq!(
            validate_deployment(&dep).unwrap_err(),
            vec![
                ValidationError::EmptyPredictorName { index: 0 },
                ValidationError::DuplicatePredictorName {
                    predictor: "p".to_string()
                },
            ]
        );
    }

    #[test]
    fn duplicate_unit_reported_once() {
        let graph = PredictiveUnit::new("x").with_children(vec![
            PredictiveUnit::new("x"),
            PredictiveUnit::new("y").with_children(vec![PredictiveUnit::new("x")]),
        ]);
        let dep = deployment("d", vec![predictor("p", graph)]);

        assert_eq!(
            validate_deployment(&dep).unwrap_err(),
            vec![ValidationError::DuplicateUnitName {
                predictor: "p".to_string(),
                unit: "x".to_string(),
            }]
        );
    }

    #[test]
    fn unknown_default_predictor() {
        let mut dep = deployment("d", vec![predictor("p", PredictiveUnit::new("m"))]);
        dep.spec.default_predictor = Some("missing".to_string());

        let errors = validate_deployment(&dep).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::UnknownDefaultPredictor {
                predictor: "missing".to_string()
            }]
        );
        assert_eq!(
            errors[0].to_string(),
            "Default predictor 'missing' is not defined in predictors"
        );

        dep.spec.default_predictor = Some("p".to_string());
        assert!(validate_deployment(&dep).is_ok());
    }

    #[test]
    fn errors_accumulate() {
        let graph = PredictiveUnit::new("m").with_children(vec![PredictiveUnit::new("m")]);
        let mut dep = deployment("", vec![predictor("", graph)]);
        dep.spec.default_predictor = Some("nope".to_string());

        assert_eq!(validate_deployment(&dep).unwrap_err().len(), 4);
    }

    #[test]
    fn every_finding_is_logged_at_error() {
        let graph = PredictiveUnit::new("m").with_children(vec![PredictiveUnit::new("m")]);
        let mut dep = deployment(
            "",
            vec![
                predictor("", PredictiveUnit::new("x")),
                predictor("p", graph),
                predictor("p", PredictiveUnit::new("y")),
            ],
        );
        dep.spec.default_predictor = Some("nope".to_string());

        let (result, logs) = capture_logs(|| validate_deployment(&dep));

        assert_eq!(result.unwrap_err().len(), 5);
        for expected in [
            "Deployment has no name",
            "Predictor at index 0 has no name",
            "Duplicate predictor name 'p'",
            "Duplicate unit name 'm' in predictor 'p'",
            "Default predictor 'nope' is not declared",
        ] {
            let line = logs
                .lines()
                .find(|line| line.contains(expected))
                .unwrap_or_else(|| panic!("missing log line for {:?} in:\n{}", expected, logs));
            assert!(line.contains("ERROR"), "not logged at error: {}", line);
        }
    }

    #[test]
    fn findings_are_logged_inside_validation_span() {
        let dep = deployment("", vec![predictor("p", PredictiveUnit::new("m"))]);

        let (_, logs) = capture_logs(|| validate_deployment(&dep));

        let line = logs
            .lines()
            .find(|line| line.contains("Deployment has no name"))
            .unwrap();
        assert!(line.contains("validation{"), "event outside span: {}", line);
        assert!(line.contains("validate_deployment"));
    }
}
