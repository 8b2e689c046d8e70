//! SHA-256 over textual inputs, rendered as lowercase hex.
//!
//! Prover and verifier must agree on these encodings byte for byte: a leaf is
//! the decimal rendering of its value, an inner node is the concatenation of
//! its children's hex digests.

use sha2::{Digest, Sha256};

pub const DIGEST_HEX_LEN: usize = 64;

pub fn hash_string(input: &str) -> String {
    hex::encode(Sha256::digest(input.as_bytes()))
}

pub fn hash_leaf(value: i64) -> String {
    hash_string(&value.to_string())
}

pub fn hash_node(left: &str, right: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(left.as_bytes());
    hasher.update(right.as_bytes());
    hex::encode(hasher.finalize())
}
