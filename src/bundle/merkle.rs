//! Binary Merkle tree over hex-encoded hashes
//!
//! Nodes are lowercase hex strings; a parent is the hash of the UTF-8
//! concatenation of its two children's hex strings. A level with an odd
//! node count pairs its last node with itself.

use std::fmt;
use std::str::FromStr;

use sha2::{Digest, Sha256};

use crate::errors::{EngineError, EngineResult};
use crate::types::{ProofElement, ProofPosition};

/// Hash algorithm for leaf and node hashing, fixed at construction.
/// Parsing an unsupported name fails fast, before any tree exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashAlgorithm {
    #[default]
    Sha256,
}

impl HashAlgorithm {
    pub fn hash_hex(&self, data: &[u8]) -> String {
        match self {
            HashAlgorithm::Sha256 => hex::encode(Sha256::digest(data)),
        }
    }
}

impl FromStr for HashAlgorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> EngineResult<Self> {
        match s {
            "sha256" => Ok(HashAlgorithm::Sha256),
            other => Err(EngineError::UnsupportedHashAlgorithm { name: other.to_string() }),
        }
    }
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha256 => f.write_str("sha256"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MerkleTree {
    algorithm: HashAlgorithm,
    /// Level 0 holds the leaf hashes; the last level holds the root.
    /// Empty for a tree built over zero leaves.
    levels: Vec<Vec<String>>,
}

impl MerkleTree {
    /// Build the full tree. With `already_hashed` the leaves are taken as
    /// hex digests verbatim; otherwise each leaf is hashed first.
    pub fn build(algorithm: HashAlgorithm, leaves: &[String], already_hashed: bool) -> Self {
        let leaf_hashes: Vec<String> = if already_hashed {
            leaves.to_vec()
        } else {
            leaves.iter().map(|leaf| algorithm.hash_hex(leaf.as_bytes())).collect()
        };

        if leaf_hashes.is_empty() {
            return MerkleTree { algorithm, levels: Vec::new() };
        }

        let mut levels = vec![leaf_hashes];
        while levels[levels.len() - 1].len() > 1 {
            let previous = &levels[levels.len() - 1];
            let mut level = Vec::with_capacity(previous.len().div_ceil(2));
            for pair in previous.chunks(2) {
                let left = &pair[0];
                let right = pair.get(1).unwrap_or(left);
                level.push(algorithm.hash_hex(format!("{left}{right}").as_bytes()));
            }
            levels.push(level);
        }

        MerkleTree { algorithm, levels }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    pub fn leaves(&self) -> &[String] {
        self.levels.first().map_or(&[], Vec::as_slice)
    }

    /// The single top-level node. `None` only for the zero-leaf tree.
    pub fn root(&self) -> Option<&str> {
        self.levels.last()?.first().map(String::as_str)
    }

    /// Inclusion proof for the leaf at `index`: one sibling per level,
    /// tagged with its side. A node without a distinct sibling proves
    /// against itself, mirroring the duplication used at build time.
    ///
    /// Out-of-range indices return an empty proof; callers must check the
    /// proof length before trusting it (a single-leaf tree also proves with
    /// an empty proof).
    pub fn proof(&self, index: usize) -> Vec<ProofElement> {
        if index >= self.leaf_count() {
            return Vec::new();
        }

        let mut proof = Vec::with_capacity(self.levels.len().saturating_sub(1));
        let mut current_index = index;

        for level in &self.levels[..self.levels.len() - 1] {
            let (sibling_index, position) = if current_index % 2 == 0 {
                (current_index + 1, ProofPosition::Right)
            } else {
                (current_index - 1, ProofPosition::Left)
            };
            let hash = level.get(sibling_index).unwrap_or(&level[current_index]).clone();
            proof.push(ProofElement { position, hash });
            current_index /= 2;
        }

        proof
    }

    /// Replay the hash chain from `leaf_hash` through `proof` and compare
    /// the final digest to `root`.
    pub fn validate(&self, proof: &[ProofElement], leaf_hash: &str, root: &str) -> bool {
        let mut current = leaf_hash.to_string();
        for element in proof {
            let combined = match element.position {
                ProofPosition::Left => format!("{}{}", element.hash, current),
                ProofPosition::Right => format!("{}{}", current, element.hash),
            };
            current = self.algorithm.hash_hex(combined.as_bytes());
        }
        current == root
    }
}
