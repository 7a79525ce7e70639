// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Findings from deployment validation.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The deployment has no metadata name to derive resource names from
    EmptyDeploymentName,
    /// A predictor was declared without a name
    EmptyPredictorName {
        /// Position of the predictor in the deployment
        index: usize,
    },
    /// Two predictors share a name
    DuplicatePredictorName {
        predictor: String,
    },
    /// Two units of one predictor graph share a name
    DuplicateUnitName {
        /// The predictor whose graph holds the duplicate
        predictor: String,
        /// The duplicated unit name
        unit: String,
    },
    /// `defaultPredictor` names a predictor that is not defined
    UnknownDefaultPredictor {
        predictor: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptyDeploymentName => {
                write!(f, "Deployment metadata.name must not be empty")
            }
            ValidationError::EmptyPredictorName { index } => {
                write!(f, "Predictor at index {} has an empty name", index)
            }
            ValidationError::DuplicatePredictorName { predictor } => {
                write!(f, "Duplicate predictor name: '{}'", predictor)
            }
            ValidationError::DuplicateUnitName { predictor, unit } => {
                write!(
                    f,
                    "Predictor '{}' graph contains more than one unit named '{}'",
                    predictor, unit
                )
            }
            ValidationError::UnknownDefaultPredictor { predictor } => {
                write!(
                    f,
                    "Default predictor '{}' is not defined in predictors",
                    predictor
                )
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Errors raised while loading a deployment or naming table.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration validation failed:\n{}", join_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}
