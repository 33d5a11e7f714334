//! Recoverable errors.
//!
//! Only failures that originate outside the engine are reported as values:
//! malformed encoded input and problems with the thread a solve runs on.
//! Broken invariants inside reducers, solvers and decoders are defects and
//! panic instead; `Unsolvable` is a regular result, see [`crate::certificate::Solution`].

use thiserror::Error;

use crate::id::{EdgeId, NodeId, NumberId};
use crate::types::Var;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Malformed encoding: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Solver thread panicked: {0}")]
    WorkerPanicked(String),

    #[error("Solve was cancelled before it finished")]
    Cancelled,

    #[error("Solve did not finish within the time limit")]
    Timeout,

    #[error("{0} solver threads are still running")]
    Busy(usize),

    #[error("Could not spawn solver thread: {0}")]
    Spawn(#[from] std::io::Error),
}

/// Reasons a decoded instance is rejected.
///
/// These are raised while validating a deserialized value and surface to the
/// caller wrapped in [`Error::Json`].
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum InvalidInstance {
    #[error("Variable name is empty")]
    EmptyVariable,

    #[error("Variable {0} is declared twice")]
    DuplicateVariable(Var),

    #[error("Clause {clause} uses undeclared variable {var}")]
    UndeclaredVariable { clause: usize, var: Var },

    #[error("Node {0} is declared twice")]
    DuplicateNode(NodeId),

    #[error("Edge {0} is declared twice")]
    DuplicateEdge(EdgeId),

    #[error("Edge {0} references a node that does not exist")]
    DanglingEdge(EdgeId),

    #[error("Number {id} has {found} digits, expected {expected}")]
    DigitCount { id: NumberId, found: usize, expected: usize },

    #[error("Digit {digit} of {owner} is out of range 0..=9")]
    DigitRange { owner: String, digit: u8 },

    #[error("Number {0} is declared twice")]
    DuplicateNumber(NumberId),
}
