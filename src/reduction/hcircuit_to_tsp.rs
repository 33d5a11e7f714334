//! Hamiltonian Circuit to TSP.
//!
//! The TSP graph is complete on the same nodes. An ordered pair costs 1 when
//! it is an edge of the input and 2 otherwise, so a tour of total weight
//! `|V|` exists exactly when the input has a Hamiltonian cycle. Both
//! directions of every pair are emitted, which keeps directed inputs exact.

use log::debug;

use crate::certificate::{Path, Tour};
use crate::graph::{Edge, Graph, Node};
use crate::problem::{HamCircuit, Tsp};
use crate::reduction::{Reduced, Reduction, Step};
use crate::tsp::TspInstance;

/// The reduced instance has as many nodes as the input, and the TSP solver
/// accepts at most [`MAX_TSP_NODES`]. After [`HCycleToHCircuit`] that caps a
/// Hamiltonian Cycle input at `MAX_TSP_NODES / 3` nodes.
///
/// [`MAX_TSP_NODES`]: crate::solve::held_karp::MAX_TSP_NODES
/// [`HCycleToHCircuit`]: crate::reduction::HCycleToHCircuit
pub enum HCircuitToTsp {}

const EDGE_WEIGHT: u64 = 1;
const NON_EDGE_WEIGHT: u64 = 2;

impl Reduction for HCircuitToTsp {
    type Source = HamCircuit;
    type Target = Tsp;

    fn reduce(input: &Graph) -> Reduced<TspInstance> {
        assert!(!input.is_empty(), "Cannot reduce an empty graph");
        let mut graph = Graph::new();
        for node in input.nodes() {
            graph.add_node(Node::new(node.id.clone()));
        }
        for a in input.nodes() {
            for b in input.nodes() {
                let present = input.has_edge(&a.id, &b.id);
                if a.id == b.id {
                    // Only matters for a single node, whose tour is the self-loop.
                    if present {
                        graph.add_edge(Edge::weighted(a.id.clone(), b.id.clone(), EDGE_WEIGHT));
                    }
                    continue;
                }
                let weight = if present { EDGE_WEIGHT } else { NON_EDGE_WEIGHT };
                graph.add_edge(Edge::weighted(a.id.clone(), b.id.clone(), weight));
            }
        }
        let max_cost = input.num_nodes() as u64;

        debug!(
            "HCIRCUIT -> TSP: {} nodes, {} edges -> complete graph with {} edges, bound {}",
            input.num_nodes(),
            input.num_edges(),
            graph.num_edges(),
            max_cost
        );

        let steps = vec![
            Step::new(
                "Complete graph",
                "Every ordered pair of nodes is joined; pairs that are edges of the input weigh 1, \
                 all others weigh 2.",
            ),
            Step::new(
                "Bound",
                format!(
                    "A tour of weight at most {} uses only weight-1 pairs, i.e. only input edges.",
                    max_cost
                ),
            ),
        ];
        Reduced {
            instance: TspInstance::new(graph, max_cost),
            steps,
        }
    }

    fn decode(tsp: &TspInstance, tour: &Tour) -> Path {
        for pair in tour.path.nodes().windows(2) {
            let weight = tsp
                .graph
                .edge(&pair[0], &pair[1])
                .and_then(|e| e.weight)
                .unwrap_or_else(|| panic!("Tour step {} -> {} is not a pair of the graph", pair[0], pair[1]));
            assert_eq!(
                weight, EDGE_WEIGHT,
                "Tour step {} -> {} is not an edge of the circuit instance",
                pair[0], pair[1]
            );
        }
        tour.path.clone()
    }
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::graph::graph_from_edges;
    use crate::id::NodeId;
    use crate::problem::Problem;

    fn n(name: &str) -> NodeId {
        NodeId::named(name)
    }

    #[test]
    fn test_weights() {
        let g = graph_from_edges([("a", "b"), ("b", "c")]);
        let tsp = HCircuitToTsp::reduce(&g).instance;
        assert_eq!(tsp.max_cost, 3);
        assert_eq!(tsp.graph.num_edges(), 6);
        assert_eq!(tsp.graph.edge(&n("a"), &n("b")).unwrap().weight, Some(1));
        assert_eq!(tsp.graph.edge(&n("b"), &n("a")).unwrap().weight, Some(2));
        assert_eq!(tsp.graph.edge(&n("c"), &n("a")).unwrap().weight, Some(2));
    }

    #[test]
    fn test_round_trip() {
        let g = graph_from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a"), ("a", "c")]);
        let tsp = HCircuitToTsp::reduce(&g).instance;
        let tour = Tsp::solve(&tsp).into_certificate().unwrap();
        assert_eq!(tour.cost, 4);
        let circuit = HCircuitToTsp::decode(&tsp, &tour);
        assert!(HamCircuit::verify(&g, &circuit));
    }

    #[test]
    fn test_no_circuit_exceeds_bound() {
        let g = graph_from_edges([("a", "b"), ("b", "c"), ("a", "c")]);
        let tsp = HCircuitToTsp::reduce(&g).instance;
        assert!(Tsp::solve(&tsp).is_unsolvable());
    }

    #[test]
    fn test_single_node() {
        let lonely = {
            let mut g = Graph::new();
            g.add_node(Node::new(n("a")));
            g
        };
        assert!(Tsp::solve(&HCircuitToTsp::reduce(&lonely).instance).is_unsolvable());

        let looped = graph_from_edges([("a", "a")]);
        let tsp = HCircuitToTsp::reduce(&looped).instance;
        let tour = Tsp::solve(&tsp).into_certificate().unwrap();
        assert_eq!(tour.cost, 1);
        assert_eq!(HCircuitToTsp::decode(&tsp, &tour).nodes(), &[n("a"), n("a")]);
    }

    #[test]
    #[should_panic(expected = "is not an edge of the circuit instance")]
    fn test_decode_rejects_heavy_step() {
        let g = graph_from_edges([("a", "b"), ("b", "a"), ("b", "c"), ("c", "a")]);
        let tsp = HCircuitToTsp::reduce(&g).instance;
        let tour = Tour {
            path: Path(vec![n("a"), n("c"), n("b"), n("a")]),
            cost: 5,
        };
        HCircuitToTsp::decode(&tsp, &tour);
    }
}
