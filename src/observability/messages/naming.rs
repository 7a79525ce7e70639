// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for name derivation events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A candidate name exceeded the length limit and was replaced by its hash.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct NameHashed<'a> {
    pub candidate: &'a str,
    pub derived: &'a str,
    pub max_length: usize,
}

impl Display for NameHashed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Name '{}' is {} characters (limit {}), using '{}'",
            self.candidate,
            self.candidate.len(),
            self.max_length,
            self.derived
        )
    }
}

impl StructuredLog for NameHashed<'_> {
    fn log(&self) {
        tracing::debug!(
            candidate = self.candidate,
            candidate_length = self.candidate.len(),
            derived = self.derived,
            max_length = self.max_length,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "name_hashed",
            span_name = name,
            candidate = self.candidate,
            derived = self.derived,
        )
    }
}

/// The predictor key came from an annotation instead of being derived.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
///
/// # Example
/// ```
/// use seldon_topology::observability::messages::naming::PredictorKeyOverridden;
///
/// let msg = PredictorKeyOverridden {
///     predictor: "default",
///     annotation: "seldon.io/svc-name",
///     key: "my-svc",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct PredictorKeyOverridden<'a> {
    pub predictor: &'a str,
    pub annotation: &'a str,
    pub key: &'a str,
}

impl Display for PredictorKeyOverridden<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Predictor '{}' key overridden by annotation '{}': '{}'",
            self.predictor, self.annotation, self.key
        )
    }
}

impl StructuredLog for PredictorKeyOverridden<'_> {
    fn log(&self) {
        tracing::debug!(
            predictor = self.predictor,
            annotation = self.annotation,
            key = self.key,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "predictor_key_overridden",
            span_name = name,
            predictor = self.predictor,
            key = self.key,
        )
    }
}
