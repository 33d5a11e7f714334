//! Backtracking 3-coloring with pre-colored nodes.

use log::{debug, trace};

use crate::certificate::{Coloring, Solution};
use crate::graph::Graph;
use crate::types::Color;

struct Search<'a> {
    neighbors: &'a [Vec<usize>],
    fixed: Vec<bool>,
    colors: Vec<Option<Color>>,
}

impl Search<'_> {
    /// Whether node `i` may take `color` given the colors assigned so far.
    fn fits(&self, i: usize, color: Color) -> bool {
        self.neighbors[i]
            .iter()
            .all(|&j| j != i && self.colors[j] != Some(color))
    }

    fn assign(&mut self, i: usize) -> bool {
        if i == self.colors.len() {
            return true;
        }
        if self.fixed[i] {
            let color = self.colors[i].expect("fixed nodes are colored");
            return self.fits(i, color) && self.assign(i + 1);
        }
        for color in Color::ALL {
            if !self.fits(i, color) {
                continue;
            }
            self.colors[i] = Some(color);
            if self.assign(i + 1) {
                return true;
            }
            trace!("uncolor node #{}", i);
        }
        self.colors[i] = None;
        false
    }
}

/// Finds a 3-coloring respecting pre-colored nodes.
///
/// Nodes are colored in declaration order, trying colors 0, 1, 2. Edges are
/// read as undirected. A self-loop makes the graph uncolorable.
///
/// # Panics
///
/// Panics if the graph has no nodes.
pub fn solve(graph: &Graph) -> Solution<Coloring> {
    assert!(!graph.is_empty(), "Cannot color an empty graph");
    let neighbors = graph.neighbors();
    let colors: Vec<Option<Color>> = graph.nodes().iter().map(|n| n.color).collect();
    let fixed: Vec<bool> = colors.iter().map(Option::is_some).collect();
    debug!(
        "coloring: {} nodes, {} pre-colored",
        colors.len(),
        fixed.iter().filter(|&&f| f).count()
    );

    let mut search = Search {
        neighbors: &neighbors,
        fixed,
        colors,
    };
    if !search.assign(0) {
        debug!("coloring: not 3-colorable");
        return Solution::Unsolvable;
    }

    let coloring = graph
        .nodes()
        .iter()
        .zip(search.colors)
        .map(|(node, color)| {
            let color = color.expect("every node is colored after a successful search");
            (node.id.clone(), color)
        })
        .collect();
    Solution::Certificate(coloring)
}
