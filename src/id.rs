//! Provenance-carrying identifiers.
//!
//! Every node and number produced by a reduction is named by a variant that
//! records which entity of the input it was built for. Decoders match on the
//! variant to recover the original entity and its polarity, so no side table
//! and no string parsing is ever needed.
//!
//! The `Display` impls render the short prefixed forms (`n%t:x_1`, `nin:n:a`,
//! ...) purely for logging and debugging.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::types::Var;

/// Identifier of a graph node.
///
/// Structural equality makes the scheme unambiguous: two ids are equal only
/// when they have the same variant and the same payload.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum NodeId {
    /// A node authored directly by the user.
    Named(String),

    // 3-CNF-SAT -> Hamiltonian Cycle
    /// Entry connector feeding both ends of the first variable row.
    Source,
    /// Exit connector collecting both ends of the last variable row.
    Target,
    /// Connector between the rows of two consecutive variables.
    Inbetween(Var, Var),
    /// First node of a variable row; entering here assigns `true`.
    TrueEnd(Var),
    /// Interior row node at the given 1-based position.
    Row(Var, usize),
    /// Last node of a variable row; entering here assigns `false`.
    FalseEnd(Var),
    /// Clause node, by 1-based clause index.
    Clause(usize),

    // 3-CNF-SAT -> 3-Coloring
    CoreTrue,
    CoreFalse,
    CoreBuffer,
    VarTrue(Var),
    VarFalse(Var),
    /// Node `slot` (0..=5) of the gadget of the clause with the given 0-based index.
    ClauseGadget(usize, u8),

    // Hamiltonian Cycle -> Hamiltonian Circuit
    Incoming(Box<NodeId>),
    Gap(Box<NodeId>),
    Outgoing(Box<NodeId>),
}

impl NodeId {
    pub fn named(name: impl Into<String>) -> Self {
        NodeId::Named(name.into())
    }

    pub fn incoming(id: &NodeId) -> Self {
        NodeId::Incoming(Box::new(id.clone()))
    }

    pub fn gap(id: &NodeId) -> Self {
        NodeId::Gap(Box::new(id.clone()))
    }

    pub fn outgoing(id: &NodeId) -> Self {
        NodeId::Outgoing(Box::new(id.clone()))
    }

    /// Returns the wrapped original id for the members of a node triplet.
    pub fn triplet_origin(&self) -> Option<&NodeId> {
        match self {
            NodeId::Incoming(id) | NodeId::Gap(id) | NodeId::Outgoing(id) => Some(id),
            _ => None,
        }
    }
}

impl From<&str> for NodeId {
    fn from(name: &str) -> Self {
        NodeId::named(name)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NodeId::Named(name) => write!(f, "n:{}", name),
            NodeId::Source => write!(f, "n%:source"),
            NodeId::Target => write!(f, "n%:target"),
            NodeId::Inbetween(a, b) => write!(f, "n%i:{}_{}", a, b),
            NodeId::TrueEnd(v) => write!(f, "n%t:{}_1", v),
            NodeId::Row(v, pos) => write!(f, "n:{}_{}", v, pos),
            NodeId::FalseEnd(v) => write!(f, "n%f:{}", v),
            NodeId::Clause(idx) => write!(f, "n%c:{}", idx),
            NodeId::CoreTrue => write!(f, "n:T"),
            NodeId::CoreFalse => write!(f, "n:F"),
            NodeId::CoreBuffer => write!(f, "n:B"),
            NodeId::VarTrue(v) => write!(f, "nvt:{}", v),
            NodeId::VarFalse(v) => write!(f, "nvf:{}", v),
            NodeId::ClauseGadget(idx, slot) => write!(f, "nc:{}-{}", idx, slot),
            NodeId::Incoming(id) => write!(f, "nin:{}", id),
            NodeId::Gap(id) => write!(f, "ngap:{}", id),
            NodeId::Outgoing(id) => write!(f, "nout:{}", id),
        }
    }
}

/// Identifier of a directed edge: its ordered pair of endpoints.
///
/// A graph holds at most one edge per ordered pair, so the pair is unique.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    pub from: NodeId,
    pub to: NodeId,
}

impl EdgeId {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to }
    }

    /// The same pair in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to.clone(),
            to: self.from.clone(),
        }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "e:{}-{}", self.from, self.to)
    }
}

/// Identifier of a Subset-Sum number.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub enum NumberId {
    /// A number authored directly by the user.
    Named(String),
    /// Selecting this number assigns `true` to the variable.
    VarTrue(Var),
    /// Selecting this number assigns `false` to the variable.
    VarFalse(Var),
    /// Filler `slot` (1 or 2) of the clause with the given 0-based index.
    Filler(usize, u8),
}

impl NumberId {
    pub fn named(name: impl Into<String>) -> Self {
        NumberId::Named(name.into())
    }
}

impl fmt::Display for NumberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NumberId::Named(name) => write!(f, "{}", name),
            NumberId::VarTrue(v) => write!(f, "T:{}", v),
            NumberId::VarFalse(v) => write!(f, "F:{}", v),
            NumberId::Filler(idx, slot) => write!(f, "filler{}:{}", slot, idx),
        }
    }
}
