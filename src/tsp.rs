//! Weighted TSP decision instances.

use serde::{Deserialize, Serialize};

use crate::graph::Graph;
use crate::id::NodeId;

/// Distance of a pair without an edge.
pub const INFINITY: u64 = u64::MAX;

/// Decide whether a tour of total weight at most `max_cost` exists.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct TspInstance {
    pub graph: Graph,
    pub max_cost: u64,
}

impl TspInstance {
    pub fn new(graph: Graph, max_cost: u64) -> Self {
        Self { graph, max_cost }
    }

    /// Distance matrix indexed by node position.
    ///
    /// An edge without a weight counts as 1. A declared edge `a -> b` also
    /// gives the distance `b -> a`, unless `b -> a` is declared itself.
    /// Pairs without an edge, including the diagonal without a self-loop,
    /// are [`INFINITY`].
    pub fn distances(&self) -> Vec<Vec<u64>> {
        let n = self.graph.num_nodes();
        let mut dist = vec![vec![INFINITY; n]; n];
        let pos = |id: &NodeId| {
            self.graph
                .node_position(id)
                .expect("graph edges always reference existing nodes")
        };
        for edge in self.graph.edges() {
            let w = edge.weight.unwrap_or(1);
            let (a, b) = (pos(&edge.from), pos(&edge.to));
            dist[a][b] = w;
            if !self.graph.has_edge(&edge.to, &edge.from) {
                dist[b][a] = w;
            }
        }
        dist
    }

    /// Total weight of a closed tour, or `None` if it is not a tour of this
    /// instance (wrong length, repeated node, or a missing edge).
    pub fn tour_cost(&self, path: &[NodeId]) -> Option<u64> {
        let n = self.graph.num_nodes();
        if n == 0 || path.len() != n + 1 || path.first() != path.last() {
            return None;
        }
        let mut seen = vec![false; n];
        let mut positions = Vec::with_capacity(path.len());
        for id in path {
            positions.push(self.graph.node_position(id)?);
        }
        for &p in &positions[..n] {
            if std::mem::replace(&mut seen[p], true) {
                return None;
            }
        }
        let dist = self.distances();
        let mut cost: u64 = 0;
        for w in positions.windows(2) {
            let d = dist[w[0]][w[1]];
            if d == INFINITY {
                return None;
            }
            cost = cost.checked_add(d)?;
        }
        Some(cost)
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::{Edge, Node};

    fn n(name: &str) -> NodeId {
        NodeId::named(name)
    }

    fn triangle() -> TspInstance {
        let mut g = Graph::new();
        for name in ["a", "b", "c"] {
            g.add_node(Node::new(n(name)));
        }
        g.add_edge(Edge::weighted(n("a"), n("b"), 2));
        g.add_edge(Edge::weighted(n("b"), n("a"), 5));
        g.add_edge(Edge::new(n("b"), n("c")));
        TspInstance::new(g, 10)
    }

    #[test]
    fn test_distances() {
        let dist = triangle().distances();
        assert_eq!(dist[0][1], 2);
        assert_eq!(dist[1][0], 5);
        assert_eq!(dist[1][2], 1);
        assert_eq!(dist[2][1], 1);
        assert_eq!(dist[0][2], INFINITY);
        assert_eq!(dist[0][0], INFINITY);
    }

    #[test]
    fn test_tour_cost() {
        let mut tsp = triangle();
        assert_eq!(tsp.tour_cost(&[n("a"), n("b"), n("c"), n("a")]), None);
        tsp.graph.add_edge(Edge::weighted(n("c"), n("a"), 4));
        assert_eq!(tsp.tour_cost(&[n("a"), n("b"), n("c"), n("a")]), Some(7));
        assert_eq!(tsp.tour_cost(&[n("a"), n("c"), n("b"), n("a")]), Some(10));
        assert_eq!(tsp.tour_cost(&[n("a"), n("b"), n("a"), n("a")]), None);
    }
}
