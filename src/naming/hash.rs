// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::NAME_HASH_BYTES;
use sha2::{Digest, Sha256};

/// Hex-encoded 128-bit content address of `text`.
///
/// SHA-256 truncated to its first 16 bytes, so the result is always 32
/// lowercase hex characters.
pub fn content_address(text: &str) -> String {
    let digest = Sha256::digest(text.as_bytes());
    hex::encode(&digest[..NAME_HASH_BYTES])
}
