use std::env;

use partition_zk::config::DEFAULT_NUM_QUERIES;
use partition_zk::{PartitionEngine, ProverConfig, VerifierConfig};
use rand_chacha::ChaCha20Rng;
use rand_core::SeedableRng;
use tracing_subscriber::EnvFilter;

const PROBLEM: [i64; 7] = [1, 2, 3, 6, 6, 6, 12];
const ASSIGNMENT: [i64; 7] = [1, 1, 1, -1, -1, -1, 1];

#[derive(Clone, Debug, PartialEq, Eq)]
struct DemoConfig {
    num_queries: usize,
    /// Fixed seed for the blinding RNG; `None` draws from the OS.
    seed: Option<u64>,
    pretty: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            num_queries: DEFAULT_NUM_QUERIES,
            seed: None,
            pretty: false,
        }
    }
}

impl DemoConfig {
    fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F: Fn(&str) -> Option<String>>(lookup: F) -> Result<Self, String> {
        let mut cfg = Self::default();
        if let Some(raw) = lookup("PARTITION_ZK_QUERIES") {
            cfg.num_queries = raw
                .trim()
                .parse::<usize>()
                .map_err(|_| format!("PARTITION_ZK_QUERIES: not a count: {raw:?}"))?;
        }
        if let Some(raw) = lookup("PARTITION_ZK_SEED") {
            let seed = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| format!("PARTITION_ZK_SEED: not a u64: {raw:?}"))?;
            cfg.seed = Some(seed);
        }
        cfg.pretty = lookup("PARTITION_ZK_PRETTY")
            .as_deref()
            .map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);
        cfg.prover()
            .validate()
            .map_err(|_| "PARTITION_ZK_QUERIES must be at least 1".to_string())?;
        Ok(cfg)
    }

    fn prover(&self) -> ProverConfig {
        ProverConfig::new(self.num_queries)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();
    if let Err(err) = run() {
        eprintln!("partition demo failed: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = DemoConfig::from_env()?;
    let mut rng = match cfg.seed {
        Some(seed) => ChaCha20Rng::seed_from_u64(seed),
        None => ChaCha20Rng::from_entropy(),
    };
    let engine = PartitionEngine::new();
    let proof = engine.prove_with_rng(&PROBLEM, &ASSIGNMENT, cfg.prover(), &mut rng)?;
    let json = if cfg.pretty {
        proof.to_json_pretty()?
    } else {
        proof.to_json()?
    };
    println!("{json}");
    println!("{}", engine.verify(&PROBLEM, &proof, VerifierConfig::default()));
    Ok(())
}
