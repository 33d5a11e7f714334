//! Hamiltonian Cycle to Hamiltonian Circuit by node splitting.
//!
//! Every node `v` becomes the chain `Incoming(v) -> Gap(v) -> Outgoing(v)`
//! and every edge `a -> b` becomes `Outgoing(a) -> Incoming(b)`. A cycle of
//! the split graph must run through each chain in order, so collapsing the
//! chains gives back a cycle of the original graph.

use std::collections::HashSet;

use log::debug;

use crate::certificate::Path;
use crate::graph::{Edge, Graph, Node};
use crate::id::NodeId;
use crate::problem::{HamCircuit, HamCycle};
use crate::reduction::{Reduced, Reduction, Step};

pub enum HCycleToHCircuit {}

impl Reduction for HCycleToHCircuit {
    type Source = HamCycle;
    type Target = HamCircuit;

    fn reduce(input: &Graph) -> Reduced<Graph> {
        assert!(!input.is_empty(), "Cannot reduce an empty graph");
        let mut graph = Graph::new();
        for node in input.nodes() {
            let chain = [
                NodeId::incoming(&node.id),
                NodeId::gap(&node.id),
                NodeId::outgoing(&node.id),
            ];
            for id in &chain {
                graph.add_node(Node::new(id.clone()));
            }
            graph.add_edge(Edge::new(chain[0].clone(), chain[1].clone()));
            graph.add_edge(Edge::new(chain[1].clone(), chain[2].clone()));
        }
        for edge in input.edges() {
            graph.add_edge(Edge::new(
                NodeId::outgoing(&edge.from),
                NodeId::incoming(&edge.to),
            ));
        }

        debug!(
            "HCYCLE -> HCIRCUIT: {} nodes, {} edges -> {} nodes, {} edges",
            input.num_nodes(),
            input.num_edges(),
            graph.num_nodes(),
            graph.num_edges()
        );

        let steps = vec![
            Step::new(
                "Split nodes",
                format!(
                    "Each of the {} nodes becomes a chain in -> gap -> out.",
                    input.num_nodes()
                ),
            ),
            Step::new(
                "Rewire edges",
                format!(
                    "Each of the {} edges a -> b now leaves out(a) and enters in(b).",
                    input.num_edges()
                ),
            ),
        ];
        Reduced { instance: graph, steps }
    }

    fn decode(_graph: &Graph, path: &Path) -> Path {
        let mut collapsed: Vec<NodeId> = Vec::new();
        for id in path.nodes() {
            let origin = id
                .triplet_origin()
                .unwrap_or_else(|| panic!("Node {} is not part of a split node", id));
            if collapsed.last() != Some(origin) {
                collapsed.push(origin.clone());
            }
        }
        // A single chain closed on itself collapses to one node.
        if collapsed.len() == 1 {
            collapsed.push(collapsed[0].clone());
        }
        let n = collapsed.len().saturating_sub(1);
        let mut seen = HashSet::new();
        for id in &collapsed[..n] {
            assert!(seen.insert(id), "Split node {} is visited in two separate runs", id);
        }
        Path(collapsed)
    }
}
