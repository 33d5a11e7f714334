//! The six decision problems, as marker types.
//!
//! A [`Problem`] ties an instance type to its certificate type, its exact
//! solver and a verifier. Verifiers are independent of the solvers: they
//! check a certificate directly against the instance, which is how tests and
//! the pipeline confirm that a decoded certificate really answers the input.

use std::fmt;

use num_bigint::BigUint;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::certificate::{Assignment, Coloring, Path, Solution, Subset, Tour};
use crate::cnf::Cnf3;
use crate::graph::Graph;
use crate::solve;
use crate::ssp::SubsetSum;
use crate::tsp::TspInstance;

pub trait Problem: 'static {
    /// Short name used in logs.
    const NAME: &'static str;

    type Instance: Clone + fmt::Debug + Serialize + DeserializeOwned + Send + 'static;
    type Certificate: Clone + fmt::Debug + Eq + Serialize + DeserializeOwned + Send + 'static;

    /// Decides the instance exactly.
    ///
    /// # Panics
    ///
    /// Panics if the instance is empty.
    fn solve(instance: &Self::Instance) -> Solution<Self::Certificate>;

    /// Returns `true` iff `certificate` witnesses a "yes" answer for `instance`.
    fn verify(instance: &Self::Instance, certificate: &Self::Certificate) -> bool;
}

/// 3-CNF satisfiability.
pub enum Sat3 {}

/// Directed Hamiltonian cycle.
pub enum HamCycle {}

/// Directed Hamiltonian cycle on a graph produced by the node-splitting
/// reduction. Same question as [`HamCycle`], kept apart so that the two ends of
/// that reduction are distinct types.
pub enum HamCircuit {}

/// Graph 3-coloring with optional pre-colored nodes.
pub enum Coloring3 {}

/// Subset-Sum over decimal digit vectors.
pub enum Ssp {}

/// Decision TSP: is there a tour of weight at most the bound?
pub enum Tsp {}

impl Problem for Sat3 {
    const NAME: &'static str = "3SAT";
    type Instance = Cnf3;
    type Certificate = Assignment;

    fn solve(cnf: &Cnf3) -> Solution<Assignment> {
        solve::dpll::solve(cnf)
    }

    fn verify(cnf: &Cnf3, assignment: &Assignment) -> bool {
        cnf.is_satisfied_by(assignment)
    }
}

impl Problem for HamCycle {
    const NAME: &'static str = "HCYCLE";
    type Instance = Graph;
    type Certificate = Path;

    fn solve(graph: &Graph) -> Solution<Path> {
        solve::hamilton::solve(graph)
    }

    fn verify(graph: &Graph, path: &Path) -> bool {
        graph.is_hamiltonian_cycle(path.nodes())
    }
}

impl Problem for HamCircuit {
    const NAME: &'static str = "HCIRCUIT";
    type Instance = Graph;
    type Certificate = Path;

    fn solve(graph: &Graph) -> Solution<Path> {
        solve::hamilton::solve(graph)
    }

    fn verify(graph: &Graph, path: &Path) -> bool {
        graph.is_hamiltonian_cycle(path.nodes())
    }
}

impl Problem for Coloring3 {
    const NAME: &'static str = "3CG";
    type Instance = Graph;
    type Certificate = Coloring;

    fn solve(graph: &Graph) -> Solution<Coloring> {
        solve::coloring::solve(graph)
    }

    fn verify(graph: &Graph, coloring: &Coloring) -> bool {
        is_proper_coloring(graph, coloring)
    }
}

impl Problem for Ssp {
    const NAME: &'static str = "SSP";
    type Instance = SubsetSum;
    type Certificate = Subset;

    fn solve(ssp: &SubsetSum) -> Solution<Subset> {
        solve::subset_sum::solve(ssp)
    }

    fn verify(ssp: &SubsetSum, subset: &Subset) -> bool {
        if !ssp.is_solved_by(&subset.used) {
            return false;
        }
        // `chosen` must list exactly the numbers marked in `used`.
        let mut marked: Vec<_> = ssp
            .numbers()
            .iter()
            .zip(&subset.used)
            .filter(|&(_, &u)| u)
            .map(|(n, _)| &n.id)
            .collect();
        let mut chosen: Vec<_> = subset.chosen.iter().collect();
        marked.sort();
        chosen.sort();
        marked == chosen
    }
}

impl Problem for Tsp {
    const NAME: &'static str = "TSP";
    type Instance = TspInstance;
    type Certificate = Tour;

    fn solve(tsp: &TspInstance) -> Solution<Tour> {
        solve::held_karp::solve(tsp)
    }

    fn verify(tsp: &TspInstance, tour: &Tour) -> bool {
        tsp.tour_cost(tour.path.nodes()) == Some(tour.cost) && tour.cost <= tsp.max_cost
    }
}

/// Every node colored, pre-colors kept, no edge joins two equal colors.
pub fn is_proper_coloring(graph: &Graph, coloring: &Coloring) -> bool {
    if coloring.len() != graph.num_nodes() {
        return false;
    }
    for node in graph.nodes() {
        match (coloring.get(&node.id), node.color) {
            (None, _) => return false,
            (Some(c), Some(fixed)) if c != fixed => return false,
            _ => {}
        }
    }
    graph
        .edges()
        .iter()
        .all(|e| coloring.get(&e.from) != coloring.get(&e.to))
}

/// Sum of the chosen numbers, for reporting.
pub fn subset_value(ssp: &SubsetSum, subset: &Subset) -> BigUint {
    ssp.numbers()
        .iter()
        .zip(&subset.used)
        .filter(|&(_, &u)| u)
        .map(|(n, _)| n.value())
        .sum()
}
