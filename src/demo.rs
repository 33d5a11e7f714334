//! Built-in sample instances.

use crate::cnf::{clause, Cnf3};
use crate::graph::{graph_from_edges, Graph};

type ClauseList = &'static [[&'static str; 3]];
type EdgeList = &'static [(&'static str, &'static str)];

/// Sample formulas, by name.
pub const FORMULAS: &[(&str, ClauseList)] = &[
    (
        "NO_SOLUTION",
        &[
            ["x", "y", "z"],
            ["!x", "y", "z"],
            ["x", "!y", "z"],
            ["!x", "!y", "z"],
            ["x", "y", "!z"],
            ["!x", "y", "!z"],
            ["x", "!y", "!z"],
            ["!x", "!y", "!z"],
        ],
    ),
    ("BASIC", &[["x", "y", "z"], ["a", "b", "c"]]),
    ("FALSE", &[["!x", "!x", "!x"], ["!y", "!y", "x"], ["!x", "!x", "y"]]),
    (
        "FALSE_NOSOL",
        &[["!x", "!x", "!x"], ["!y", "!y", "x"], ["!x", "!x", "y"], ["x", "x", "x"]],
    ),
];

/// Sample directed graphs, by name.
pub const GRAPHS: &[(&str, EdgeList)] = &[
    ("CYCLE", &[("0", "1"), ("1", "2"), ("2", "3"), ("3", "4"), ("4", "0")]),
    ("PATH", &[("0", "1"), ("1", "2"), ("2", "3"), ("3", "4")]),
    (
        "COMPLETE",
        &[
            ("0", "1"),
            ("1", "2"),
            ("2", "3"),
            ("3", "4"),
            ("0", "2"),
            ("0", "3"),
            ("0", "4"),
            ("1", "3"),
            ("1", "4"),
            ("2", "4"),
        ],
    ),
];

/// Builds the sample formula called `name`.
pub fn formula(name: &str) -> Option<Cnf3> {
    FORMULAS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, clauses)| Cnf3::from_clauses(clauses.iter().map(|&lits| clause(lits))))
}

/// Builds the sample graph called `name`.
pub fn graph(name: &str) -> Option<Graph> {
    GRAPHS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, edges)| graph_from_edges(edges.iter().copied()))
}
