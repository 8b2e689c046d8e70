//! Non-interactive challenge selection.
//!
//! A challenge is a position in `[0, domain_size]` computed from the public
//! transcript alone, so the verifier can recompute it instead of trusting the
//! index stored in the proof. Derivers never touch the prover's blinding RNG.

use rand::Rng;
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use sha2::{Digest, Sha256};

use crate::crypto::zkp::transcript::Transcript;

const CHAL_DOMAIN: &[u8] = b"PARTITION-ZK-CHAL";

pub trait ChallengeDeriver {
    /// Uniform index in `[0, domain_size]` inclusive.
    fn derive_index(&self, transcript: &Transcript, domain_size: usize) -> usize;
}

/// Reseeds a ChaCha20 generator with the transcript digest before every draw.
///
/// The draw is always 64 bits wide so that 32- and 64-bit targets agree.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SeededChallenge;

impl ChallengeDeriver for SeededChallenge {
    fn derive_index(&self, transcript: &Transcript, domain_size: usize) -> usize {
        let mut rng = ChaCha20Rng::from_seed(transcript.seed());
        let index = rng.gen_range(0..=domain_size as u64);
        usize::try_from(index).unwrap_or(domain_size)
    }
}

/// Hash-as-random-oracle derivation: SHA-256 counter blocks over the
/// transcript digest, reduced by rejection sampling.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HashChallenge;

impl ChallengeDeriver for HashChallenge {
    fn derive_index(&self, transcript: &Transcript, domain_size: usize) -> usize {
        let bound = domain_size as u128 + 1;
        // Smallest accepted word (2^64 mod bound); everything below would bias the low residues.
        let floor = ((1u128 << 64) % bound) as u64;
        let seed = transcript.seed();
        let mut counter = 0u64;
        loop {
            let mut hasher = Sha256::new();
            hasher.update(CHAL_DOMAIN);
            hasher.update(seed);
            hasher.update(counter.to_be_bytes());
            let block = hasher.finalize();
            for chunk in block.chunks_exact(8) {
                let mut word = [0u8; 8];
                word.copy_from_slice(chunk);
                let x = u64::from_be_bytes(word);
                if x >= floor {
                    return (u128::from(x) % bound) as usize;
                }
            }
            counter = counter.wrapping_add(1);
        }
    }
}
