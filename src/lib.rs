// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // deployment model, loader, validation
pub mod errors;     // error handling
pub mod graph;      // predictive unit tree
pub mod naming;     // length-bounded resource names
pub mod observability;
pub mod plan;       // per-deployment resource plan
