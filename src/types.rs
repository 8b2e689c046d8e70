use thiserror::Error;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// A sign is not +1/-1, or the assignment length differs from the problem.
    #[error("assignment must be a +1/-1 vector with one sign per problem element")]
    InvalidAssignment,
    /// The signed sum of the problem under the assignment is not zero.
    #[error("assignment does not balance the problem to zero")]
    InvalidProblemInstance,
    #[error("problem must be a non-empty sequence of positive integers")]
    MalformedProblem,
    #[error("authentication path does not match the tree height")]
    MalformedPath,
    #[error("at least one query round is required")]
    NoQueries,
    #[error("proof encoding: {0}")]
    Encoding(String),
}

pub type Result<T> = core::result::Result<T, Error>;
