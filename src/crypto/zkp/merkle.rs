use rand_core::{CryptoRng, RngCore};

use crate::crypto::hash::{hash_leaf, hash_node};
use crate::types::{Error, Result};

/// Binary SHA-256 tree over integer leaves, padded with zeros to a power of two.
///
/// Nodes are stored heap-style: the root is node 1 and node `k` has children
/// `2k` and `2k + 1`. Leaf `i` lives at node `leaf_count + i`.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    leaf_count: usize,
    leaves: Vec<i64>,
    nodes: Vec<String>,
}

impl MerkleTree {
    pub fn build(values: &[i64]) -> Self {
        let leaf_count = next_pow2(values.len().max(1));
        let mut leaves = values.to_vec();
        leaves.resize(leaf_count, 0);
        let mut nodes = vec![String::new(); leaf_count * 2];
        for (i, &leaf) in leaves.iter().enumerate() {
            nodes[leaf_count + i] = hash_leaf(leaf);
        }
        for i in (1..leaf_count).rev() {
            nodes[i] = hash_node(&nodes[i * 2], &nodes[i * 2 + 1]);
        }
        Self {
            leaf_count,
            leaves,
            nodes,
        }
    }

    pub fn root(&self) -> &str {
        &self.nodes[1]
    }

    /// Returns the leaf value and its sibling digests, leaf-to-root.
    pub fn open(&self, index: usize) -> Option<(i64, Vec<String>)> {
        let value = *self.leaves.get(index)?;
        let mut idx = self.leaf_count + index;
        let mut path = Vec::with_capacity(self.height());
        while idx > 1 {
            path.push(self.nodes[idx ^ 1].clone());
            idx /= 2;
        }
        Some((value, path))
    }

    pub fn verify_path(root: &str, data_size: usize, index: usize, value: i64, path: &[String]) -> bool {
        match fold_path(data_size, index, value, path) {
            Ok(folded) => folded == root,
            Err(_) => false,
        }
    }

    pub fn leaf_count(&self) -> usize {
        self.leaf_count
    }

    pub fn height(&self) -> usize {
        self.leaf_count.trailing_zeros() as usize
    }
}

/// Recomputes the root implied by `value` sitting at `index` of a tree built
/// over `data_size` values.
fn fold_path(data_size: usize, index: usize, value: i64, path: &[String]) -> Result<String> {
    let leaf_count = next_pow2(data_size.max(1));
    if index >= leaf_count {
        return Err(Error::MalformedPath);
    }
    let mut node = leaf_count + index;
    let mut cur = hash_leaf(value);
    for sibling in path {
        if node <= 1 {
            return Err(Error::MalformedPath);
        }
        cur = if node % 2 == 0 {
            hash_node(&cur, sibling)
        } else {
            hash_node(sibling, &cur)
        };
        node /= 2;
    }
    if node != 1 {
        return Err(Error::MalformedPath);
    }
    Ok(cur)
}

/// Merkle commitment that hides its values: every logical value is paired with
/// a private random nonce leaf, so equal values never share a subtree digest.
///
/// Logical value `i` is physical leaf `2i`; its nonce is leaf `2i + 1` and is
/// never revealed except as the first sibling digest of the value's path.
#[derive(Clone, Debug)]
pub struct ZkMerkleTree {
    data_size: usize,
    inner: MerkleTree,
}

impl ZkMerkleTree {
    pub fn build<R: RngCore + CryptoRng>(values: &[i64], rng: &mut R) -> Self {
        let leaves = pad_and_interleave(values, || i64::from(rng.next_u32()));
        Self {
            data_size: values.len(),
            inner: MerkleTree::build(&leaves),
        }
    }

    pub fn root(&self) -> &str {
        self.inner.root()
    }

    pub fn open(&self, logical_index: usize) -> Option<(i64, Vec<String>)> {
        if logical_index >= self.data_size {
            return None;
        }
        self.inner.open(logical_index * 2)
    }

    pub fn data_size(&self) -> usize {
        self.data_size
    }
}

/// Checks that `value` is committed at `logical_index` of a [`ZkMerkleTree`]
/// built over `data_size` values. Never panics; malformed input yields `false`.
pub fn verify_zk_path(root: &str, data_size: usize, logical_index: usize, value: i64, path: &[String]) -> bool {
    if logical_index >= data_size {
        return false;
    }
    let Some(physical_size) = data_size.checked_mul(2) else {
        return false;
    };
    MerkleTree::verify_path(root, physical_size, logical_index * 2, value, path)
}

/// Pads `values` with zeros to the next power of two and interleaves each slot
/// with a fresh nonce: `[v0, n0, v1, n1, ...]`.
pub fn pad_and_interleave<F: FnMut() -> i64>(values: &[i64], mut nonce: F) -> Vec<i64> {
    let padded = next_pow2(values.len().max(1));
    let mut leaves = Vec::with_capacity(padded * 2);
    for i in 0..padded {
        leaves.push(values.get(i).copied().unwrap_or(0));
        leaves.push(nonce());
    }
    leaves
}

pub(crate) fn next_pow2(mut n: usize) -> usize {
    n = n.saturating_sub(1);
    n |= n >> 1;
    n |= n >> 2;
    n |= n >> 4;
    n |= n >> 8;
    n |= n >> 16;
    if usize::BITS == 64 {
        n |= n >> 32;
    }
    n.saturating_add(1)
}
