use sha2::{Digest, Sha256};

use crate::crypto::zkp::proof::RoundRecord;

const TRANSCRIPT_DOMAIN: &[u8] = b"PARTITION-ZK-TRANSCRIPT-v1";
const ROUND_DOMAIN: &[u8] = b"PARTITION-ZK-ROUND";

/// Append-only public record of a proof: the problem followed by every round
/// produced so far.
///
/// The canonical encoding is absorbed into a running SHA-256 state; every
/// variable-length item is length-prefixed so distinct transcripts cannot
/// collide by re-splitting fields.
#[derive(Clone)]
pub struct Transcript {
    hasher: Sha256,
    rounds: usize,
}

impl Transcript {
    pub fn new(problem: &[i64]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(TRANSCRIPT_DOMAIN);
        hasher.update((problem.len() as u64).to_be_bytes());
        for &num in problem {
            hasher.update(num.to_be_bytes());
        }
        Self { hasher, rounds: 0 }
    }

    pub fn append_round(&mut self, round: &RoundRecord) {
        self.hasher.update(ROUND_DOMAIN);
        self.hasher.update((self.rounds as u64).to_be_bytes());
        absorb_str(&mut self.hasher, &round.root);
        self.hasher.update((round.challenge_index as u64).to_be_bytes());
        self.hasher.update(round.value_a.to_be_bytes());
        absorb_path(&mut self.hasher, &round.path_a);
        self.hasher.update(round.value_b.to_be_bytes());
        absorb_path(&mut self.hasher, &round.path_b);
        self.rounds += 1;
    }

    /// Digest of everything absorbed so far; the transcript itself is untouched.
    pub fn seed(&self) -> [u8; 32] {
        let digest = self.hasher.clone().finalize();
        let mut out = [0u8; 32];
        out.copy_from_slice(&digest);
        out
    }

    pub fn rounds(&self) -> usize {
        self.rounds
    }
}

fn absorb_str(hasher: &mut Sha256, item: &str) {
    hasher.update((item.len() as u64).to_be_bytes());
    hasher.update(item.as_bytes());
}

fn absorb_path(hasher: &mut Sha256, path: &[String]) {
    hasher.update((path.len() as u64).to_be_bytes());
    for sibling in path {
        absorb_str(hasher, sibling);
    }
}
