use serde::{Deserialize, Serialize};

use crate::types::{Error, Result};

/// One query round: a tree root, the challenged position, and the openings of
/// that position and its cyclic successor.
///
/// On the wire a round is the positional array
/// `[root, challenge_index, value_a, path_a, value_b, path_b]`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RoundWire", into = "RoundWire")]
pub struct RoundRecord {
    pub root: String,
    pub challenge_index: usize,
    pub value_a: i64,
    pub path_a: Vec<String>,
    pub value_b: i64,
    pub path_b: Vec<String>,
}

#[derive(Serialize, Deserialize)]
struct RoundWire(String, usize, i64, Vec<String>, i64, Vec<String>);

impl From<RoundWire> for RoundRecord {
    fn from(wire: RoundWire) -> Self {
        let RoundWire(root, challenge_index, value_a, path_a, value_b, path_b) = wire;
        Self {
            root,
            challenge_index,
            value_a,
            path_a,
            value_b,
            path_b,
        }
    }
}

impl From<RoundRecord> for RoundWire {
    fn from(round: RoundRecord) -> Self {
        RoundWire(
            round.root,
            round.challenge_index,
            round.value_a,
            round.path_a,
            round.value_b,
            round.path_b,
        )
    }
}

/// Ordered query rounds. Order is significant: each round's challenge is
/// derived from every round before it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Proof {
    pub rounds: Vec<RoundRecord>,
}

impl Proof {
    pub fn new(rounds: Vec<RoundRecord>) -> Self {
        Self { rounds }
    }

    pub fn len(&self) -> usize {
        self.rounds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rounds.is_empty()
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|err| Error::Encoding(err.to_string()))
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|err| Error::Encoding(err.to_string()))
    }

    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|err| Error::Encoding(err.to_string()))
    }
}
