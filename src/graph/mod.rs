// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The predictive unit graph: how models, routers, combiners and transformers
//! are composed into one deployable inference pipeline.

mod traversal;
mod unit;

pub use traversal::{find_local_engine_unit, find_unit_by_name, flatten_tree, PreOrder};
pub use unit::{
    Endpoint, Implementation, LoggerMode, Parameter, ParameterType, PayloadLogger,
    PredictiveUnit, TransportType, UnitMethod, UnitType,
};
