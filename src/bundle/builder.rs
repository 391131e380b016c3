//! Transaction bundle construction
//!
//! The engine commits a set of pre-signed transaction identifiers to a
//! Merkle root and attaches one inclusion proof per transaction. Relay
//! submission is a collaborator concern behind `BundleRelay`; the builder
//! never performs network calls.

use chrono::Utc;
use tracing::info;

use crate::bundle::merkle::{HashAlgorithm, MerkleTree};
use crate::errors::EngineResult;
use crate::types::{MerkleBundle, RelayAck};

pub struct BundleBuilder {
    algorithm: HashAlgorithm,
}

impl BundleBuilder {
    pub fn new(algorithm: HashAlgorithm) -> Self {
        BundleBuilder { algorithm }
    }

    /// Construct a builder from a configured algorithm name; unsupported
    /// names fail here, not when the first bundle is built.
    pub fn from_algorithm_name(name: &str) -> EngineResult<Self> {
        Ok(Self::new(name.parse()?))
    }

    /// Commit an ordered set of opaque, pre-signed transaction identifiers.
    pub fn build_bundle(&self, signed_txs: &[String]) -> MerkleBundle {
        let tree = MerkleTree::build(self.algorithm, signed_txs, false);
        let proofs = (0..signed_txs.len()).map(|i| tree.proof(i)).collect();
        let root = tree.root().map(str::to_string);

        info!(
            transactions = signed_txs.len(),
            root = root.as_deref().unwrap_or("<empty>"),
            "Built transaction bundle"
        );

        MerkleBundle {
            transactions: signed_txs.to_vec(),
            root,
            proofs,
            timestamp: Utc::now(),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }
}

/// External relay transport. Implementations own delivery, retries, and
/// any relay-protocol details; the engine only hands over the bundle and
/// the block it targets.
pub trait BundleRelay {
    fn submit(&self, bundle: &MerkleBundle, target_block: u64) -> anyhow::Result<RelayAck>;
}
