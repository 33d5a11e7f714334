//! Certificates (witnesses of "yes" answers) and the solver outcome type.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::id::{NodeId, NumberId};
use crate::types::{Color, Truth, Var};

/// Outcome of a solver: a certificate, or the definite answer "no".
///
/// `Unsolvable` is a regular result, not an error.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "certificate", rename_all = "lowercase")]
pub enum Solution<C> {
    Certificate(C),
    Unsolvable,
}

impl<C> Solution<C> {
    pub fn is_unsolvable(&self) -> bool {
        matches!(self, Solution::Unsolvable)
    }

    pub fn certificate(&self) -> Option<&C> {
        match self {
            Solution::Certificate(c) => Some(c),
            Solution::Unsolvable => None,
        }
    }

    pub fn into_certificate(self) -> Option<C> {
        match self {
            Solution::Certificate(c) => Some(c),
            Solution::Unsolvable => None,
        }
    }

    pub fn map<D>(self, f: impl FnOnce(C) -> D) -> Solution<D> {
        match self {
            Solution::Certificate(c) => Solution::Certificate(f(c)),
            Solution::Unsolvable => Solution::Unsolvable,
        }
    }
}

impl<C> From<Option<C>> for Solution<C> {
    fn from(value: Option<C>) -> Self {
        match value {
            Some(c) => Solution::Certificate(c),
            None => Solution::Unsolvable,
        }
    }
}

/// A truth assignment for the variables of a formula.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment(BTreeMap<Var, Truth>);

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, var: Var, value: Truth) {
        self.0.insert(var, value);
    }

    pub fn get(&self, var: &Var) -> Option<Truth> {
        self.0.get(var).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Var, Truth)> {
        self.0.iter().map(|(v, &t)| (v, t))
    }
}

impl FromIterator<(Var, Truth)> for Assignment {
    fn from_iter<T: IntoIterator<Item = (Var, Truth)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(v, t)| format!("{}={}", v, t)).collect();
        write!(f, "{{{}}}", parts.join(", "))
    }
}

/// A closed walk through a graph: the first node is repeated at the end.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Path(pub Vec<NodeId>);

impl Path {
    pub fn nodes(&self) -> &[NodeId] {
        &self.0
    }

    /// Number of distinct nodes on the cycle.
    pub fn len(&self) -> usize {
        self.0.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.0.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", parts.join(" -> "))
    }
}

/// A color for every node of a graph.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Coloring(#[serde(with = "crate::codec::map_as_pairs")] BTreeMap<NodeId, Color>);

impl Coloring {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, id: NodeId, color: Color) {
        self.0.insert(id, color);
    }

    pub fn get(&self, id: &NodeId) -> Option<Color> {
        self.0.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, Color)> {
        self.0.iter().map(|(id, &c)| (id, c))
    }
}

impl FromIterator<(NodeId, Color)> for Coloring {
    fn from_iter<T: IntoIterator<Item = (NodeId, Color)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// The numbers chosen by a Subset-Sum solver.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Subset {
    /// Chosen numbers, in the order the solver reconstructed them.
    pub chosen: Vec<NumberId>,
    /// Parallel to the instance's numbers: `true` exactly for chosen ones.
    pub used: Vec<bool>,
}

/// A TSP tour together with its total weight.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Tour {
    pub path: Path,
    pub cost: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_accessors() {
        let yes: Solution<u32> = Some(7).into();
        assert!(!yes.is_unsolvable());
        assert_eq!(yes.certificate(), Some(&7));
        assert_eq!(yes.map(|x| x * 2).into_certificate(), Some(14));

        let no: Solution<u32> = None.into();
        assert!(no.is_unsolvable());
        assert_eq!(no.map(|x| x + 1), Solution::Unsolvable);
    }

    #[test]
    fn test_path_len_counts_distinct_nodes() {
        let a = NodeId::named("a");
        let b = NodeId::named("b");
        let path = Path(vec![a.clone(), b.clone(), a.clone()]);
        assert_eq!(path.len(), 2);
        assert_eq!(path.to_string(), "n:a -> n:b -> n:a");
    }

    #[test]
    fn test_assignment_display_is_sorted() {
        let a: Assignment = [
            (Var::new("y"), Truth::False),
            (Var::new("x"), Truth::True),
            (Var::new("z"), Truth::Either),
        ]
        .into_iter()
        .collect();
        assert_eq!(a.to_string(), "{x=true, y=false, z=either}");
    }
}
