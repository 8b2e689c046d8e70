//! Non-interactive zero-knowledge proof of a partition witness.
//!
//! A prover who knows signs `s_i ∈ {+1, -1}` with `Σ s_i · p_i = 0` commits,
//! round by round, to blinded running sums of the signed problem in a
//! nonce-padded Merkle tree. Each round opens one challenged position and its
//! cyclic successor; the challenge is derived from the transcript of all
//! earlier rounds, so no interactive verifier is needed.
//!
//! ```no_run
//! let problem = [1, 2, 3, 6, 6, 6, 12];
//! let assignment = [1, 1, 1, -1, -1, -1, 1];
//! let proof = partition_zk::get_proof(&problem, &assignment, 8).unwrap();
//! assert!(partition_zk::verify_proof(&problem, &proof));
//! ```

#![forbid(unsafe_code)]

pub mod config;
pub mod crypto;
pub mod types;

use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

pub use config::{ProverConfig, VerifierConfig};
pub use crypto::zkp::{PartitionEngine, Proof, RoundRecord};
pub use types::{Error, Result};

/// Proves `num_queries` rounds with blinding randomness drawn from the OS.
pub fn get_proof(problem: &[i64], assignment: &[i64], num_queries: usize) -> Result<Proof> {
    let mut rng = ChaCha20Rng::from_entropy();
    PartitionEngine::new().prove_with_rng(problem, assignment, ProverConfig::new(num_queries), &mut rng)
}

/// Checks `proof` with [`VerifierConfig::default`], which requires at least
/// one round: an empty proof is rejected rather than accepted as vacuously
/// true. Use [`PartitionEngine::verify`] with `min_queries: 0` to accept it.
pub fn verify_proof(problem: &[i64], proof: &Proof) -> bool {
    PartitionEngine::new().verify(problem, proof, VerifierConfig::default())
}
