//! 3-CNF-SAT to 3-Coloring.
//!
//! A pre-colored core triangle fixes the meaning of the colors: `CoreTrue`
//! gets [`Color::TRUE`], `CoreFalse` gets [`Color::FALSE`] and `CoreBuffer`
//! gets [`Color::BUFFER`]. Each variable contributes a triangle with the
//! buffer node, so its two literal nodes take opposite truth colors. Each
//! clause contributes a six-node gadget that is colorable exactly when at
//! least one of its three literal nodes has the true color.

use std::collections::HashSet;

use log::debug;

use crate::certificate::{Assignment, Coloring};
use crate::cnf::Cnf3;
use crate::graph::{Graph, Node};
use crate::id::NodeId;
use crate::problem::{Coloring3, Sat3};
use crate::reduction::{decide, fill_undecided, Reduced, Reduction, Step};
use crate::types::{Color, Literal, Var};

pub enum SatToColoring {}

fn literal_node(lit: &Literal) -> NodeId {
    if lit.negated {
        NodeId::VarFalse(lit.var.clone())
    } else {
        NodeId::VarTrue(lit.var.clone())
    }
}

impl Reduction for SatToColoring {
    type Source = Sat3;
    type Target = Coloring3;

    fn reduce(cnf: &Cnf3) -> Reduced<Graph> {
        assert!(!cnf.is_empty(), "Cannot reduce an empty formula");
        let mut graph = Graph::new();
        let (t, f, b) = (NodeId::CoreTrue, NodeId::CoreFalse, NodeId::CoreBuffer);

        graph.add_node(Node::colored(t.clone(), Color::TRUE));
        graph.add_node(Node::colored(f.clone(), Color::FALSE));
        graph.add_node(Node::colored(b.clone(), Color::BUFFER));
        graph.add_undirected(&f, &t);
        graph.add_undirected(&b, &f);
        graph.add_undirected(&t, &b);

        for var in cnf.variables() {
            let pos = NodeId::VarTrue(var.clone());
            let neg = NodeId::VarFalse(var.clone());
            graph.add_node(Node::new(pos.clone()));
            graph.add_node(Node::new(neg.clone()));
            graph.add_undirected(&pos, &neg);
            graph.add_undirected(&pos, &b);
            graph.add_undirected(&neg, &b);
        }

        for (j, clause) in cnf.clauses().iter().enumerate() {
            let k: [NodeId; 6] = std::array::from_fn(|slot| NodeId::ClauseGadget(j, slot as u8));
            for id in &k {
                graph.add_node(Node::new(id.clone()));
            }
            for (a, c) in [(0, 3), (1, 4), (2, 5)] {
                graph.add_undirected(&k[a], &k[c]);
            }
            for node in &k[..4] {
                graph.add_undirected(&t, node);
            }
            graph.add_undirected(&k[3], &k[4]);
            graph.add_undirected(&k[4], &k[5]);
            graph.add_undirected(&k[5], &f);
            for (slot, lit) in clause.literals().iter().enumerate() {
                graph.add_undirected(&literal_node(lit), &k[slot]);
            }
        }

        debug!(
            "3SAT -> 3CG: {} variables, {} clauses -> {} nodes, {} edges",
            cnf.num_vars(),
            cnf.num_clauses(),
            graph.num_nodes(),
            graph.num_edges()
        );

        let steps = vec![
            Step::new(
                "Core triangle",
                "Three pre-colored nodes T, F and B fix which color means true, false and neither.",
            ),
            Step::new(
                "Variable triangles",
                format!(
                    "Each of the {} variables gets a true and a false literal node, joined to each other \
                     and to B, so exactly one of them takes the true color.",
                    cnf.num_vars()
                ),
            ),
            Step::new(
                "Clause gadgets",
                format!(
                    "Each of the {} clauses gets six nodes wired to T, F and its literal nodes; \
                     the gadget has a valid coloring only if some literal node is colored true.",
                    cnf.num_clauses()
                ),
            ),
        ];
        Reduced { instance: graph, steps }
    }

    fn decode(graph: &Graph, coloring: &Coloring) -> Assignment {
        // Literal nodes wired into no clause gadget carry no information.
        let constrained: HashSet<&Var> = graph
            .edges()
            .iter()
            .filter_map(|e| match (&e.from, &e.to) {
                (NodeId::VarTrue(var) | NodeId::VarFalse(var), NodeId::ClauseGadget(..)) => Some(var),
                _ => None,
            })
            .collect();

        let mut assignment = Assignment::new();
        for (id, color) in coloring.iter() {
            let (var, positive) = match id {
                NodeId::VarTrue(var) => (var, true),
                NodeId::VarFalse(var) => (var, false),
                _ => continue,
            };
            if !constrained.contains(var) {
                continue;
            }
            let value = match color {
                Color::TRUE => positive,
                Color::FALSE => !positive,
                _ => panic!("Literal node {} has the buffer color", id),
            };
            decide(&mut assignment, var, value);
        }
        let vars = graph.nodes().iter().filter_map(|node| match &node.id {
            NodeId::VarTrue(var) => Some(var),
            _ => None,
        });
        fill_undecided(&mut assignment, vars);
        assignment
    }
}
