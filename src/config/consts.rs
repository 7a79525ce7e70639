// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Hard ceiling for derived resource names (DNS label length)
pub const MAX_NAME_LENGTH: usize = 63;
/// Prefix placed in front of the content hash when a name is too long
pub const HASHED_NAME_PREFIX: &str = "seldon-";
/// Prefix for hashed per-component deployment names (joined with `-`)
pub const DEPLOYMENT_NAME_PREFIX: &str = "seldon";
pub const SVC_ORCH_SUFFIX: &str = "-svc-orch";
pub const EXPLAINER_NAME_SUFFIX: &str = "-explainer";
/// Number of digest bytes kept for the content address (128 bits)
pub const NAME_HASH_BYTES: usize = 16;

/// Endpoint host marking the unit that runs next to the engine
pub const LOCAL_ENGINE_HOST: &str = "localhost";

/// Pod labels marking a component that hosts a unit of the given role
pub const LABEL_ROUTER: &str = "seldon.io/router";
pub const LABEL_COMBINER: &str = "seldon.io/combiner";
pub const LABEL_MODEL: &str = "seldon.io/model";
pub const LABEL_TRANSFORMER: &str = "seldon.io/transformer";
pub const LABEL_OUTPUT_TRANSFORMER: &str = "seldon.io/output-transformer";

/// Predictor annotation overriding the generated predictor key verbatim
pub const ANNOTATION_CUSTOM_SVC_NAME: &str = "seldon.io/svc-name";
