// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Every diagnostic event in this crate is a message struct that implements
//! `Display` and [`messages::StructuredLog`]. Log sites construct the message
//! and call `.log()`, which emits it through `tracing` with structured fields
//! at the level fixed for that message. No log site formats its own strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::naming` - name derivation events (hashing, annotation overrides)
//! * `messages::validation` - deployment validation findings and lifecycle
//! * `messages::plan` - resource plan construction
//!
//! # Usage
//!
//! ```rust
//! use seldon_topology::observability::messages::naming::NameHashed;
//! use seldon_topology::observability::messages::StructuredLog;
//!
//! let msg = NameHashed {
//!     candidate: "a-very-long-candidate-name",
//!     derived: "seldon-0123456789abcdef0123456789abcdef",
//!     max_length: 63,
//! };
//!
//! msg.log();
//! ```

pub mod messages;

#[cfg(test)]
pub(crate) mod capture;
