//! Backtracking search for directed Hamiltonian cycles.
//!
//! Used for both Hamiltonian Cycle and Hamiltonian Circuit instances: the
//! question is the same, only the graphs differ.

use log::{debug, trace};

use crate::certificate::{Path, Solution};
use crate::graph::Graph;

struct Search<'a> {
    successors: &'a [Vec<usize>],
    visited: Vec<bool>,
    path: Vec<usize>,
}

impl Search<'_> {
    fn extend(&mut self, current: usize) -> bool {
        let successors = self.successors;
        let start = self.path[0];
        if self.path.len() == self.visited.len() {
            return successors[current].contains(&start);
        }
        for &next in &successors[current] {
            if self.visited[next] {
                continue;
            }
            self.visited[next] = true;
            self.path.push(next);
            if self.extend(next) {
                return true;
            }
            trace!("backtrack from node #{}", next);
            self.path.pop();
            self.visited[next] = false;
        }
        false
    }
}

/// Finds a directed Hamiltonian cycle starting at the first declared node.
///
/// Successors are tried in edge declaration order. The returned path repeats
/// the start node at the end.
///
/// # Panics
///
/// Panics if the graph has no nodes.
pub fn solve(graph: &Graph) -> Solution<Path> {
    assert!(!graph.is_empty(), "Cannot search an empty graph");
    debug!(
        "hamilton: {} nodes, {} edges",
        graph.num_nodes(),
        graph.num_edges()
    );

    let successors = graph.successors();
    let mut search = Search {
        successors: &successors,
        visited: vec![false; graph.num_nodes()],
        path: vec![0],
    };
    search.visited[0] = true;

    if !search.extend(0) {
        debug!("hamilton: no cycle");
        return Solution::Unsolvable;
    }

    let nodes = graph.nodes();
    let mut cycle: Vec<_> = search.path.iter().map(|&i| nodes[i].id.clone()).collect();
    cycle.push(nodes[0].id.clone());
    Solution::Certificate(Path(cycle))
}
