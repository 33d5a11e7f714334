//! Brute-force ground truth shared by the integration tests.

#![allow(dead_code)]

use np_reductions::certificate::Assignment;
use np_reductions::cnf::{Clause, Cnf3};
use np_reductions::graph::{Edge, Graph, Node};
use np_reductions::id::NodeId;
use np_reductions::types::{Literal, Truth, Var};
use rand::prelude::*;

pub const NAMES: [&str; 4] = ["a", "b", "c", "d"];

/// Builds a formula from `(variable index, negated)` triples.
pub fn formula(clauses: &[[(usize, bool); 3]]) -> Cnf3 {
    Cnf3::from_clauses(clauses.iter().map(|lits| {
        let [a, b, c] = lits.map(|(v, negated)| Literal::new(Var::new(NAMES[v]), negated));
        Clause::new(a, b, c)
    }))
}

/// Random formula over the first `num_vars` names.
pub fn random_formula(rng: &mut impl Rng, num_vars: usize, num_clauses: usize) -> Cnf3 {
    let clauses: Vec<[(usize, bool); 3]> = (0..num_clauses)
        .map(|_| std::array::from_fn(|_| (rng.random_range(0..num_vars), rng.random_bool(0.5))))
        .collect();
    formula(&clauses)
}

pub fn is_satisfiable(cnf: &Cnf3) -> bool {
    let vars = cnf.variables();
    (0..1u32 << vars.len()).any(|mask| {
        let assignment: Assignment = vars
            .iter()
            .enumerate()
            .map(|(i, v)| (v.clone(), Truth::from((mask >> i) & 1 == 1)))
            .collect();
        cnf.is_satisfied_by(&assignment)
    })
}

/// Graph on nodes `0..n` with the edges `(a, b)` where `adjacency[a * n + b]`.
pub fn digraph(n: usize, adjacency: &[bool]) -> Graph {
    let ids: Vec<NodeId> = (0..n).map(|i| NodeId::named(i.to_string())).collect();
    let mut graph = Graph::new();
    for id in &ids {
        graph.add_node(Node::new(id.clone()));
    }
    for a in 0..n {
        for b in 0..n {
            if adjacency[a * n + b] {
                graph.add_edge(Edge::new(ids[a].clone(), ids[b].clone()));
            }
        }
    }
    graph
}

/// Calls `visit` with every ordering of `0..n` that starts with 0.
pub fn for_each_tour(n: usize, visit: &mut impl FnMut(&[usize])) {
    fn go(order: &mut Vec<usize>, used: &mut [bool], visit: &mut impl FnMut(&[usize])) {
        if order.len() == used.len() {
            visit(order);
            return;
        }
        for i in 0..used.len() {
            if !used[i] {
                used[i] = true;
                order.push(i);
                go(order, used, visit);
                order.pop();
                used[i] = false;
            }
        }
    }
    let mut used = vec![false; n];
    used[0] = true;
    go(&mut vec![0], &mut used, visit);
}

pub fn has_hamiltonian_cycle(n: usize, adjacency: &[bool]) -> bool {
    let mut found = false;
    for_each_tour(n, &mut |order| {
        let mut steps = order.iter().zip(order.iter().cycle().skip(1));
        if steps.all(|(&a, &b)| adjacency[a * n + b]) {
            found = true;
        }
    });
    found
}
