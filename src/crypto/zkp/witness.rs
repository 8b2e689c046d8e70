use rand::Rng;
use rand_core::{CryptoRng, RngCore};

use crate::types::{Error, Result};

/// Blinded running sums of a signed problem instance.
///
/// Element 0 is a random shift and element `i + 1` is
/// `shift + obfuscator * (signed sum of the first i + 1 terms)`, where the
/// obfuscator is a single random sign for the whole sequence. Single use:
/// a fresh witness must be drawn for every round.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Witness {
    values: Vec<i64>,
}

impl Witness {
    pub fn generate<R: RngCore + CryptoRng>(problem: &[i64], assignment: &[i64], rng: &mut R) -> Result<Self> {
        validate_problem(problem)?;
        if assignment.len() != problem.len() || assignment.iter().any(|&side| side != 1 && side != -1) {
            return Err(Error::InvalidAssignment);
        }

        let side_obfuscator: i64 = if rng.gen::<bool>() { 1 } else { -1 };
        let mut sum = 0i64;
        let mut max = 0i64;
        let mut values = Vec::with_capacity(problem.len() + 1);
        values.push(sum);
        for (&num, &side) in problem.iter().zip(assignment) {
            let step = num
                .checked_mul(side * side_obfuscator)
                .ok_or(Error::MalformedProblem)?;
            sum = sum.checked_add(step).ok_or(Error::MalformedProblem)?;
            values.push(sum);
            max = max.max(num);
        }
        if sum != 0 {
            return Err(Error::InvalidProblemInstance);
        }

        let shift = rng.gen_range(0..=max);
        for value in &mut values {
            *value = value.checked_add(shift).ok_or(Error::MalformedProblem)?;
        }
        Ok(Self { values })
    }

    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// A problem is a non-empty sequence of positive integers.
pub fn validate_problem(problem: &[i64]) -> Result<()> {
    if problem.is_empty() || problem.iter().any(|&num| num <= 0) {
        return Err(Error::MalformedProblem);
    }
    Ok(())
}
