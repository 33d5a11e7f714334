//! Directed graphs shared by the Hamiltonian, coloring and TSP problems.
//!
//! A [`Graph`] keeps its nodes and edges in declaration order. Solvers iterate
//! in that order, which makes every certificate reproducible from the instance
//! alone.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::InvalidInstance;
use crate::id::{EdgeId, NodeId};
use crate::types::Color;

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Node {
    pub id: NodeId,
    /// Fixed color; solvers never recolor a pre-colored node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl Node {
    pub fn new(id: NodeId) -> Self {
        Self { id, color: None }
    }

    pub fn colored(id: NodeId, color: Color) -> Self {
        Self { id, color: Some(color) }
    }
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u64>,
}

impl Edge {
    pub fn new(from: NodeId, to: NodeId) -> Self {
        Self { from, to, weight: None }
    }

    pub fn weighted(from: NodeId, to: NodeId, weight: u64) -> Self {
        Self {
            from,
            to,
            weight: Some(weight),
        }
    }

    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.from.clone(), self.to.clone())
    }
}

/// A directed graph with optional node colors and edge weights.
///
/// # Invariants
///
/// - Node ids are unique; edge ids (endpoint pairs) are unique.
/// - Every edge endpoint is a node of the graph.
#[derive(Clone, Default, Serialize, Deserialize)]
#[serde(try_from = "GraphData", into = "GraphData")]
pub struct Graph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    node_index: HashMap<NodeId, usize>,
    edge_index: HashMap<EdgeId, usize>,
}

#[derive(Serialize, Deserialize)]
struct GraphData {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
}

impl TryFrom<GraphData> for Graph {
    type Error = InvalidInstance;

    fn try_from(data: GraphData) -> Result<Self, Self::Error> {
        let mut graph = Graph::new();
        for node in data.nodes {
            if graph.contains_node(&node.id) {
                return Err(InvalidInstance::DuplicateNode(node.id));
            }
            graph.add_node(node);
        }
        for edge in data.edges {
            let id = edge.id();
            if !graph.contains_node(&edge.from) || !graph.contains_node(&edge.to) {
                return Err(InvalidInstance::DanglingEdge(id));
            }
            if graph.contains_edge(&id) {
                return Err(InvalidInstance::DuplicateEdge(id));
            }
            graph.add_edge(edge);
        }
        Ok(graph)
    }
}

impl From<Graph> for GraphData {
    fn from(graph: Graph) -> Self {
        Self {
            nodes: graph.nodes,
            edges: graph.edges,
        }
    }
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node. A node with an already present id is ignored.
    pub fn add_node(&mut self, node: Node) {
        if self.node_index.contains_key(&node.id) {
            return;
        }
        self.node_index.insert(node.id.clone(), self.nodes.len());
        self.nodes.push(node);
    }

    /// Adds an edge. An edge with an already present endpoint pair is ignored.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a node of the graph.
    pub fn add_edge(&mut self, edge: Edge) {
        assert!(
            self.contains_node(&edge.from) && self.contains_node(&edge.to),
            "Edge {} references a node that does not exist",
            edge.id()
        );
        let id = edge.id();
        if self.edge_index.contains_key(&id) {
            return;
        }
        self.edge_index.insert(id, self.edges.len());
        self.edges.push(edge);
    }

    /// Adds both `a -> b` and `b -> a`.
    pub fn add_undirected(&mut self, a: &NodeId, b: &NodeId) {
        self.add_edge(Edge::new(a.clone(), b.clone()));
        self.add_edge(Edge::new(b.clone(), a.clone()));
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn num_nodes(&self) -> usize {
        self.nodes.len()
    }

    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn contains_node(&self, id: &NodeId) -> bool {
        self.node_index.contains_key(id)
    }

    pub fn contains_edge(&self, id: &EdgeId) -> bool {
        self.edge_index.contains_key(id)
    }

    /// Position of the node in declaration order.
    pub fn node_position(&self, id: &NodeId) -> Option<usize> {
        self.node_index.get(id).copied()
    }

    pub fn node(&self, id: &NodeId) -> Option<&Node> {
        self.node_position(id).map(|i| &self.nodes[i])
    }

    pub fn edge(&self, from: &NodeId, to: &NodeId) -> Option<&Edge> {
        self.edge_index
            .get(&EdgeId::new(from.clone(), to.clone()))
            .map(|&i| &self.edges[i])
    }

    pub fn has_edge(&self, from: &NodeId, to: &NodeId) -> bool {
        self.edge(from, to).is_some()
    }

    /// Out-neighbors of every node, as node positions, in edge declaration order.
    pub fn successors(&self) -> Vec<Vec<usize>> {
        let mut adj = vec![Vec::new(); self.nodes.len()];
        for edge in &self.edges {
            adj[self.node_index[&edge.from]].push(self.node_index[&edge.to]);
        }
        adj
    }

    /// Neighbors of every node ignoring edge direction, without duplicates.
    pub fn neighbors(&self) -> Vec<Vec<usize>> {
        let mut adj: Vec<Vec<usize>> = vec![Vec::new(); self.nodes.len()];
        let mut seen = HashSet::new();
        for edge in &self.edges {
            let a = self.node_index[&edge.from];
            let b = self.node_index[&edge.to];
            if seen.insert((a.min(b), a.max(b))) {
                adj[a].push(b);
                if a != b {
                    adj[b].push(a);
                }
            }
        }
        adj
    }

    /// Returns `true` iff `path` is a closed walk visiting every node exactly
    /// once along directed edges, with the first node repeated at the end.
    pub fn is_hamiltonian_cycle(&self, path: &[NodeId]) -> bool {
        let n = self.nodes.len();
        if n == 0 || path.len() != n + 1 || path.first() != path.last() {
            return false;
        }
        let mut seen = HashSet::new();
        for id in &path[..n] {
            if !self.contains_node(id) || !seen.insert(id) {
                return false;
            }
        }
        path.windows(2).all(|w| self.has_edge(&w[0], &w[1]))
    }
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.nodes == other.nodes && self.edges == other.edges
    }
}

impl Eq for Graph {}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("nodes", &self.nodes.len())
            .field("edges", &self.edges.len())
            .finish()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for node in &self.nodes {
            match node.color {
                Some(c) => writeln!(f, "{} [{}]", node.id, c)?,
                None => writeln!(f, "{}", node.id)?,
            }
        }
        for edge in &self.edges {
            match edge.weight {
                Some(w) => writeln!(f, "{} -> {} ({})", edge.from, edge.to, w)?,
                None => writeln!(f, "{} -> {}", edge.from, edge.to)?,
            }
        }
        Ok(())
    }
}

/// Builds a graph of named nodes from `(from, to)` label pairs.
///
/// Nodes are declared in first-seen order.
pub fn graph_from_edges<'a>(edges: impl IntoIterator<Item = (&'a str, &'a str)>) -> Graph {
    let mut graph = Graph::new();
    for (a, b) in edges {
        let a = NodeId::named(a);
        let b = NodeId::named(b);
        graph.add_node(Node::new(a.clone()));
        graph.add_node(Node::new(b.clone()));
        graph.add_edge(Edge::new(a, b));
    }
    graph
}
