//! Transaction bundle commitment types

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which side a proof element sits on when its hash is concatenated with
/// the running hash during validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProofPosition {
    Left,
    Right,
}

/// One step of a Merkle inclusion proof.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProofElement {
    pub position: ProofPosition,
    pub hash: String,
}

/// A committed transaction set, ready for an external relay transport.
///
/// `root` is `None` only for an empty transaction set; `proofs` holds one
/// inclusion proof per transaction, in order.
#[derive(Debug, Clone, Serialize)]
pub struct MerkleBundle {
    pub transactions: Vec<String>,
    pub root: Option<String>,
    pub proofs: Vec<Vec<ProofElement>>,
    pub timestamp: DateTime<Utc>,
}

/// Acknowledgment returned by a relay transport.
#[derive(Debug, Clone, Serialize)]
pub struct RelayAck {
    pub relay: String,
    pub target_block: u64,
}
