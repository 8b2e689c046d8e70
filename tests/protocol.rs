use partition_zk::crypto::zkp::HashChallenge;
use partition_zk::{
    get_proof, verify_proof, Error, PartitionEngine, Proof, ProverConfig, VerifierConfig,
};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;

const PROBLEM: [i64; 7] = [1, 2, 3, 6, 6, 6, 12];
const ASSIGNMENT: [i64; 7] = [1, 1, 1, -1, -1, -1, 1];

fn flip_first_hex(s: &str) -> String {
    let mut chars: Vec<char> = s.chars().collect();
    chars[0] = if chars[0] == '0' { '1' } else { '0' };
    chars.into_iter().collect()
}

fn seeded_proof(queries: usize, seed: u64) -> Proof {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    PartitionEngine::new()
        .prove_with_rng(&PROBLEM, &ASSIGNMENT, ProverConfig::new(queries), &mut rng)
        .expect("prove")
}

#[test]
fn demo_instance_verifies() {
    let proof = get_proof(&PROBLEM, &ASSIGNMENT, 3).expect("prove");
    assert_eq!(proof.len(), 3);
    assert!(verify_proof(&PROBLEM, &proof));
}

#[test]
fn honest_proofs_always_verify() {
    let instances: [(&[i64], &[i64]); 4] = [
        (&PROBLEM, &ASSIGNMENT),
        (&[5, 5], &[1, -1]),
        (&[3, 1, 1, 2, 2, 1], &[-1, 1, 1, -1, 1, 1]),
        (&[10, 20, 30, 40, 50, 60, 70, 80, 100], &[-1, -1, -1, -1, 1, -1, -1, 1, 1]),
    ];
    for (problem, assignment) in instances {
        for queries in 1..=12 {
            let proof = get_proof(problem, assignment, queries).expect("prove");
            assert!(verify_proof(problem, &proof), "problem {problem:?} q={queries}");
        }
    }
}

#[test]
fn wraparound_rounds_reveal_equal_values() {
    let proof = seeded_proof(200, 99);
    assert!(verify_proof(&PROBLEM, &proof));
    let wraps: Vec<_> = proof
        .rounds
        .iter()
        .filter(|round| round.challenge_index == PROBLEM.len())
        .collect();
    assert!(!wraps.is_empty());
    for round in wraps {
        assert_eq!(round.value_a, round.value_b);
    }
}

#[test]
fn any_single_mutation_is_rejected() {
    let proof = seeded_proof(4, 17);
    assert!(verify_proof(&PROBLEM, &proof));

    for r in 0..proof.len() {
        let mut bad = proof.clone();
        bad.rounds[r].root = flip_first_hex(&bad.rounds[r].root);
        assert!(!verify_proof(&PROBLEM, &bad), "root of round {r}");

        let mut bad = proof.clone();
        bad.rounds[r].value_a += 1;
        assert!(!verify_proof(&PROBLEM, &bad), "value_a of round {r}");

        let mut bad = proof.clone();
        bad.rounds[r].value_b -= 1;
        assert!(!verify_proof(&PROBLEM, &bad), "value_b of round {r}");

        for j in 0..proof.rounds[r].path_a.len() {
            let mut bad = proof.clone();
            bad.rounds[r].path_a[j] = flip_first_hex(&bad.rounds[r].path_a[j]);
            assert!(!verify_proof(&PROBLEM, &bad), "path_a[{j}] of round {r}");

            let mut bad = proof.clone();
            bad.rounds[r].path_b[j] = flip_first_hex(&bad.rounds[r].path_b[j]);
            assert!(!verify_proof(&PROBLEM, &bad), "path_b[{j}] of round {r}");
        }
    }
}

#[test]
fn shifting_both_values_breaks_commitment() {
    // Keeps the revealed difference intact, so only the Merkle check can catch it.
    let mut proof = seeded_proof(2, 23);
    proof.rounds[0].value_a += 1;
    proof.rounds[0].value_b += 1;
    assert!(!verify_proof(&PROBLEM, &proof));
}

#[test]
fn adversarial_shapes_do_not_panic() {
    let mut proof = seeded_proof(2, 31);
    proof.rounds[0].path_a.clear();
    assert!(!verify_proof(&PROBLEM, &proof));

    let mut proof = seeded_proof(2, 31);
    proof.rounds[1].path_b.push("00".into());
    assert!(!verify_proof(&PROBLEM, &proof));

    let mut proof = seeded_proof(2, 31);
    proof.rounds[0].challenge_index = usize::MAX;
    assert!(!verify_proof(&PROBLEM, &proof));

    let mut proof = seeded_proof(2, 31);
    proof.rounds[0].value_a = i64::MIN;
    proof.rounds[0].value_b = i64::MAX;
    assert!(!verify_proof(&PROBLEM, &proof));

    assert!(!verify_proof(&PROBLEM, &Proof::default()));
}

#[test]
fn json_wire_format_roundtrips() {
    let proof = seeded_proof(3, 5);
    let json = proof.to_json().expect("json");
    let value: serde_json::Value = serde_json::from_str(&json).expect("value");
    let rounds = value.as_array().expect("array of rounds");
    assert_eq!(rounds.len(), 3);
    for round in rounds {
        let fields = round.as_array().expect("positional round");
        assert_eq!(fields.len(), 6);
        assert!(fields[0].is_string());
        assert!(fields[1].is_u64());
        assert!(fields[3].is_array());
        assert!(fields[5].is_array());
    }
    let decoded = Proof::from_json(&json).expect("decode");
    assert_eq!(decoded, proof);
    assert!(verify_proof(&PROBLEM, &decoded));
}

#[test]
fn verifier_must_use_prover_deriver() {
    let engine = PartitionEngine::with_deriver(HashChallenge);
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let proof = engine
        .prove_with_rng(&PROBLEM, &ASSIGNMENT, ProverConfig::new(6), &mut rng)
        .expect("prove");
    assert!(engine.verify(&PROBLEM, &proof, VerifierConfig::default()));
    assert!(!verify_proof(&PROBLEM, &proof));
}

#[test]
fn false_statements_are_never_proved() {
    assert_eq!(
        get_proof(&PROBLEM, &[1; 7], 3).unwrap_err(),
        Error::InvalidProblemInstance
    );
    assert_eq!(
        get_proof(&PROBLEM, &[1, 1, 1, -1, -1, 2, 1], 3).unwrap_err(),
        Error::InvalidAssignment
    );
    assert_eq!(get_proof(&PROBLEM, &ASSIGNMENT, 0).unwrap_err(), Error::NoQueries);
    assert_eq!(get_proof(&[], &[], 1).unwrap_err(), Error::MalformedProblem);
}

#[test]
fn empty_proof_needs_explicit_opt_in() {
    let empty = Proof::default();
    assert!(!verify_proof(&PROBLEM, &empty));
    let lenient = VerifierConfig { min_queries: 0 };
    assert!(PartitionEngine::new().verify(&PROBLEM, &empty, lenient));
}
