use rand_core::{CryptoRng, RngCore};
use tracing::debug;

use crate::config::{ProverConfig, VerifierConfig};
use crate::crypto::zkp::challenge::{ChallengeDeriver, SeededChallenge};
use crate::crypto::zkp::merkle::{verify_zk_path, ZkMerkleTree};
use crate::crypto::zkp::proof::{Proof, RoundRecord};
use crate::crypto::zkp::transcript::Transcript;
use crate::crypto::zkp::witness::{validate_problem, Witness};
use crate::types::{Error, Result};

/// Prover and verifier for the partition statement, generic over how
/// challenges are drawn from the transcript.
#[derive(Clone, Debug, Default)]
pub struct PartitionEngine<D = SeededChallenge> {
    deriver: D,
}

impl PartitionEngine<SeededChallenge> {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<D: ChallengeDeriver> PartitionEngine<D> {
    pub fn with_deriver(deriver: D) -> Self {
        Self { deriver }
    }

    pub fn deriver(&self) -> &D {
        &self.deriver
    }

    /// Runs `cfg.num_queries` chained rounds. Every round commits to a fresh
    /// witness, so `rng` must be a cryptographic generator owned by the prover.
    #[tracing::instrument(skip_all, name = "PartitionEngine::prove", fields(problem_len = problem.len(), num_queries = cfg.num_queries))]
    pub fn prove_with_rng<R: RngCore + CryptoRng>(
        &self,
        problem: &[i64],
        assignment: &[i64],
        cfg: ProverConfig,
        rng: &mut R,
    ) -> Result<Proof> {
        cfg.validate()?;
        let domain_size = problem.len();
        let mut transcript = Transcript::new(problem);
        let mut rounds = Vec::with_capacity(cfg.num_queries);

        for _ in 0..cfg.num_queries {
            let witness = Witness::generate(problem, assignment, rng)?;
            let tree = ZkMerkleTree::build(witness.values(), rng);
            let challenge_index = self.deriver.derive_index(&transcript, domain_size);
            let successor = (challenge_index + 1) % witness.len();
            let (value_a, path_a) = tree.open(challenge_index).ok_or(Error::MalformedPath)?;
            let (value_b, path_b) = tree.open(successor).ok_or(Error::MalformedPath)?;
            let round = RoundRecord {
                root: tree.root().to_string(),
                challenge_index,
                value_a,
                path_a,
                value_b,
                path_b,
            };
            transcript.append_round(&round);
            rounds.push(round);
        }

        debug!(rounds = rounds.len(), "proof generated");
        Ok(Proof::new(rounds))
    }

    /// Replays the transcript and checks every round. Untrusted input never
    /// panics or errors; any failed check yields `false`.
    #[tracing::instrument(skip_all, name = "PartitionEngine::verify", fields(problem_len = problem.len(), rounds = proof.len()))]
    pub fn verify(&self, problem: &[i64], proof: &Proof, cfg: VerifierConfig) -> bool {
        if validate_problem(problem).is_err() {
            debug!("malformed problem");
            return false;
        }
        if proof.len() < cfg.min_queries {
            debug!(min_queries = cfg.min_queries, "too few rounds");
            return false;
        }

        let mut transcript = Transcript::new(problem);
        for (idx, round) in proof.rounds.iter().enumerate() {
            if let Err(reason) = self.check_round(problem, &transcript, round) {
                debug!(round = idx, reason, "round rejected");
                return false;
            }
            transcript.append_round(round);
        }
        true
    }

    fn check_round(
        &self,
        problem: &[i64],
        transcript: &Transcript,
        round: &RoundRecord,
    ) -> core::result::Result<(), &'static str> {
        let n = problem.len();
        let index = self.deriver.derive_index(transcript, n);
        if round.challenge_index != index {
            return Err("challenge index mismatch");
        }

        // In range: one step of the running sum. At n: the sequence wraps to its start.
        let consistent = if index < n {
            round.value_a.abs_diff(round.value_b) == problem[index].unsigned_abs()
        } else {
            round.value_a == round.value_b
        };
        if !consistent {
            return Err("revealed values inconsistent with problem");
        }

        let witness_len = n + 1;
        if !verify_zk_path(&round.root, witness_len, index, round.value_a, &round.path_a) {
            return Err("path for challenged position");
        }
        let successor = (index + 1) % witness_len;
        if !verify_zk_path(&round.root, witness_len, successor, round.value_b, &round.path_b) {
            return Err("path for successor position");
        }
        Ok(())
    }
}
