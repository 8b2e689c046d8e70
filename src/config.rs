use crate::types::{Error, Result};

pub const DEFAULT_NUM_QUERIES: usize = 3;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProverConfig {
    pub num_queries: usize,
}

impl ProverConfig {
    pub fn new(num_queries: usize) -> Self {
        Self { num_queries }
    }

    pub fn validate(&self) -> Result<()> {
        if self.num_queries == 0 {
            return Err(Error::NoQueries);
        }
        Ok(())
    }
}

impl Default for ProverConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_QUERIES)
    }
}

/// Proofs with fewer than `min_queries` rounds are rejected outright.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct VerifierConfig {
    pub min_queries: usize,
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self { min_queries: 1 }
    }
}
