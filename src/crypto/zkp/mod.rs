//! Commit-challenge-reveal proof that a hidden sign assignment balances a
//! public sequence of integers.

pub mod challenge;
pub mod engine;
pub mod merkle;
pub mod proof;
pub mod transcript;
pub mod witness;

pub use challenge::{ChallengeDeriver, HashChallenge, SeededChallenge};
pub use engine::PartitionEngine;
pub use merkle::{pad_and_interleave, verify_zk_path, MerkleTree, ZkMerkleTree};
pub use proof::{Proof, RoundRecord};
pub use transcript::Transcript;
pub use witness::Witness;
