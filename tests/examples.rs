//! End-to-end runs on the built-in sample instances.

mod common;

use np_reductions::cnf::{clause, Cnf3};
use np_reductions::demo;
use np_reductions::graph::graph_from_edges;
use np_reductions::pipeline;
use np_reductions::problem::{HamCircuit, Problem, Sat3, Ssp, Tsp};
use np_reductions::reduction::{
    HCircuitToTsp, HCycleToHCircuit, Reduction, SatToColoring, SatToHCycle, SatToSsp,
};
use np_reductions::ssp::SubsetSum;
use np_reductions::tsp::TspInstance;
use np_reductions::types::{Truth, Var};
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use test_log::test;

#[test]
fn test_single_clause_through_every_sat_reduction() {
    let cnf = Cnf3::from_clauses([clause(["x", "y", "z"])]);
    let via_hcycle = pipeline::run::<SatToHCycle>(&cnf).decoded.unwrap();
    let via_coloring = pipeline::run::<SatToColoring>(&cnf).decoded.unwrap();
    let via_ssp = pipeline::run::<SatToSsp>(&cnf).decoded.unwrap();
    for assignment in [via_hcycle, via_coloring, via_ssp] {
        assert!(cnf.is_satisfied_by(&assignment));
        assert_eq!(assignment.len(), 3);
    }
}

#[test]
fn test_false_has_exactly_one_model() {
    let cnf = demo::formula("FALSE").unwrap();
    let x = Var::new("x");
    let y = Var::new("y");
    let results = [
        pipeline::run::<SatToHCycle>(&cnf).decoded,
        pipeline::run::<SatToColoring>(&cnf).decoded,
        pipeline::run::<SatToSsp>(&cnf).decoded,
        Sat3::solve(&cnf).into_certificate(),
    ];
    for assignment in results {
        let assignment = assignment.unwrap();
        assert_eq!(assignment.get(&x), Some(Truth::False));
        assert_eq!(assignment.get(&y), Some(Truth::False));
    }
}

#[test]
fn test_false_nosol_is_unsolvable_everywhere() {
    let cnf = demo::formula("FALSE_NOSOL").unwrap();
    assert!(Sat3::solve(&cnf).is_unsolvable());
    assert!(!pipeline::run::<SatToHCycle>(&cnf).is_solvable());
    assert!(!pipeline::run::<SatToColoring>(&cnf).is_solvable());
    assert!(!pipeline::run::<SatToSsp>(&cnf).is_solvable());
}

#[test]
fn test_no_solution() {
    let cnf = demo::formula("NO_SOLUTION").unwrap();
    assert!(Sat3::solve(&cnf).is_unsolvable());
    let outcome = pipeline::run::<SatToColoring>(&cnf);
    assert!(outcome.solution.is_unsolvable());
    assert_eq!(outcome.reduced.instance.num_nodes(), 3 + 2 * 3 + 6 * 8);
}

#[test]
fn test_cycle_down_to_tsp() {
    let graph = demo::graph("CYCLE").unwrap();
    let split = pipeline::run::<HCycleToHCircuit>(&graph);
    assert_eq!(split.reduced.instance.num_nodes(), 15);
    let cycle = split.decoded.unwrap();
    assert_eq!(cycle.len(), 5);

    let tsp = pipeline::run::<HCircuitToTsp>(&split.reduced.instance);
    let tour = tsp.solution.certificate().unwrap();
    assert_eq!(tour.cost, 15);
    let circuit = tsp.decoded.unwrap();
    assert!(HamCircuit::verify(&split.reduced.instance, &circuit));
}

#[test]
fn test_path_down_to_tsp() {
    let graph = demo::graph("PATH").unwrap();
    let split = pipeline::run::<HCycleToHCircuit>(&graph);
    assert!(!split.is_solvable());
    assert!(!pipeline::run::<HCircuitToTsp>(&split.reduced.instance).is_solvable());
}

#[test]
fn test_square_tsp_bound() {
    let square = graph_from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
    let reduced = HCircuitToTsp::reduce(&square).instance;
    assert_eq!(reduced.max_cost, 4);

    let tour = Tsp::solve(&reduced).into_certificate().unwrap();
    assert_eq!(tour.cost, 4);
    assert_eq!(tour.path.nodes().first(), tour.path.nodes().last());

    let tight = TspInstance::new(reduced.graph, 3);
    assert!(Tsp::solve(&tight).is_unsolvable());
}

#[test]
fn test_small_subset_sum() {
    let ssp = SubsetSum::from_values(&[1, 2, 3], 3);
    let subset = Ssp::solve(&ssp).into_certificate().unwrap();
    assert!(Ssp::verify(&ssp, &subset));
    assert_eq!(subset.used, vec![true, true, false]);
}

#[test]
fn test_reductions_are_deterministic() {
    let mut rng = ChaCha8Rng::seed_from_u64(42);
    for _ in 0..20 {
        let cnf = common::random_formula(&mut rng, 4, 5);
        let copy = cnf.clone();
        assert_eq!(
            SatToHCycle::reduce(&cnf).instance,
            SatToHCycle::reduce(&copy).instance
        );
        assert_eq!(
            SatToColoring::reduce(&cnf).instance,
            SatToColoring::reduce(&copy).instance
        );
        assert_eq!(SatToSsp::reduce(&cnf).instance, SatToSsp::reduce(&copy).instance);
    }
}
