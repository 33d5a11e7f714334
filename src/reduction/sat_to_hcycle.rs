//! 3-CNF-SAT to Hamiltonian Cycle.
//!
//! Every variable becomes a row of `3C + 3` nodes (C = number of clauses)
//! joined in both directions. A Hamiltonian cycle traverses each row in one
//! direction: entering at the true end (left to right) means the variable is
//! true, entering at the false end means it is false.
//!
//! Rows are chained through connector nodes: `Source` feeds both ends of the
//! first row, `Inbetween(prev, next)` leads from both ends of one row to both
//! ends of the next, and `Target` collects the last row and returns to
//! `Source`.
//!
//! Clause `i` (counting from 1) owns positions `3i` and `3i + 1` on the row
//! of each of its literals. A clause node can only be visited as a detour
//! between those two positions, and the detour points the way a row is
//! traversed when the literal is true: left to right for `x`, right to left
//! for `!x`.

use std::collections::HashSet;

use log::debug;

use crate::certificate::{Assignment, Path};
use crate::cnf::Cnf3;
use crate::graph::{Edge, Graph, Node};
use crate::id::NodeId;
use crate::problem::{HamCycle, Sat3};
use crate::reduction::{decide, fill_undecided, Reduced, Reduction, Step};
use crate::types::Var;

pub enum SatToHCycle {}

/// Node at 1-based `position` of the row of `var`, for a row of length `len`.
fn row_node(var: &Var, position: usize, len: usize) -> NodeId {
    match position {
        1 => NodeId::TrueEnd(var.clone()),
        p if p == len => NodeId::FalseEnd(var.clone()),
        p => NodeId::Row(var.clone(), p),
    }
}

fn ends(var: &Var) -> [NodeId; 2] {
    [NodeId::TrueEnd(var.clone()), NodeId::FalseEnd(var.clone())]
}

impl Reduction for SatToHCycle {
    type Source = Sat3;
    type Target = HamCycle;

    fn reduce(cnf: &Cnf3) -> Reduced<Graph> {
        assert!(!cnf.is_empty(), "Cannot reduce an empty formula");
        let vars = cnf.variables();
        let len = 3 * cnf.num_clauses() + 3;
        let mut graph = Graph::new();

        graph.add_node(Node::new(NodeId::Source));
        for var in vars {
            for p in 1..=len {
                graph.add_node(Node::new(row_node(var, p, len)));
            }
        }
        for pair in vars.windows(2) {
            graph.add_node(Node::new(NodeId::Inbetween(pair[0].clone(), pair[1].clone())));
        }
        graph.add_node(Node::new(NodeId::Target));
        for i in 1..=cnf.num_clauses() {
            graph.add_node(Node::new(NodeId::Clause(i)));
        }

        for var in vars {
            for p in 1..len {
                graph.add_undirected(&row_node(var, p, len), &row_node(var, p + 1, len));
            }
        }

        let mut connect = |from: &NodeId, to: &NodeId| {
            graph.add_edge(Edge::new(from.clone(), to.clone()));
        };
        for (k, var) in vars.iter().enumerate() {
            let connector = if k == 0 {
                NodeId::Source
            } else {
                let connector = NodeId::Inbetween(vars[k - 1].clone(), var.clone());
                for end in ends(&vars[k - 1]) {
                    connect(&end, &connector);
                }
                connector
            };
            for end in ends(var) {
                connect(&connector, &end);
            }
        }
        if let Some(last) = vars.last() {
            for end in ends(last) {
                connect(&end, &NodeId::Target);
            }
        }
        connect(&NodeId::Target, &NodeId::Source);

        for (j, clause) in cnf.clauses().iter().enumerate() {
            let i = j + 1;
            let kappa = NodeId::Clause(i);
            for lit in clause.literals() {
                let left = row_node(&lit.var, 3 * i, len);
                let right = row_node(&lit.var, 3 * i + 1, len);
                let (enter, leave) = if lit.negated { (right, left) } else { (left, right) };
                connect(&enter, &kappa);
                connect(&kappa, &leave);
            }
        }

        debug!(
            "3SAT -> HCYCLE: {} variables, {} clauses -> {} nodes, {} edges",
            cnf.num_vars(),
            cnf.num_clauses(),
            graph.num_nodes(),
            graph.num_edges()
        );

        let steps = vec![
            Step::new(
                "Variable rows",
                format!(
                    "Each of the {} variables gets a row of {} nodes linked in both directions. \
                     Traversing a row from its true end assigns true, from its false end assigns false.",
                    cnf.num_vars(),
                    len
                ),
            ),
            Step::new(
                "Connectors",
                "Source, the in-between nodes and Target join the rows into one big loop; \
                 each connector may enter the next row at either end.",
            ),
            Step::new(
                "Clause detours",
                format!(
                    "Each of the {} clause nodes can be visited from the row of any of its literals, \
                     but only in the direction that makes that literal true.",
                    cnf.num_clauses()
                ),
            ),
        ];
        Reduced { instance: graph, steps }
    }

    fn decode(graph: &Graph, path: &Path) -> Assignment {
        // Rows without clause detours belong to variables no clause uses.
        let constrained: HashSet<&Var> = graph
            .edges()
            .iter()
            .filter_map(|e| match (&e.from, &e.to) {
                (NodeId::Row(var, _), NodeId::Clause(_)) => Some(var),
                _ => None,
            })
            .collect();

        let mut assignment = Assignment::new();
        for pair in path.nodes().windows(2) {
            if !matches!(pair[0], NodeId::Source | NodeId::Inbetween(..)) {
                continue;
            }
            let (var, value) = match &pair[1] {
                NodeId::TrueEnd(var) => (var, true),
                NodeId::FalseEnd(var) => (var, false),
                other => panic!("Connector {} leads to {}, not to a row end", pair[0], other),
            };
            if constrained.contains(var) {
                decide(&mut assignment, var, value);
            }
        }
        let vars = graph.nodes().iter().filter_map(|node| match &node.id {
            NodeId::TrueEnd(var) => Some(var),
            _ => None,
        });
        fill_undecided(&mut assignment, vars);
        assignment
    }
}
