//! Solving reduced instances on the worker thread.

use std::time::Duration;

use np_reductions::cnf::{clause, Cnf3};
use np_reductions::demo;
use np_reductions::error::Result;
use np_reductions::graph::graph_from_edges;
use np_reductions::pipeline;
use np_reductions::problem::{Problem, Tsp};
use np_reductions::reduction::{
    HCircuitToTsp, HCycleToHCircuit, Reduction, SatToColoring, SatToSsp, SourceCertificate,
    SourceInstance,
};
use np_reductions::runner::{Runner, RunnerConfig};
use test_log::test;

fn solve_on_worker<R: Reduction>(
    runner: &mut Runner,
    instance: &SourceInstance<R>,
) -> Result<Option<SourceCertificate<R>>> {
    let reduced = R::reduce(instance);
    let ticket = runner.submit::<R::Target>(&reduced.instance)?;
    let solution = ticket.wait_timeout(Duration::from_secs(60))?;
    Ok(pipeline::finish::<R>(instance, &reduced.instance, &solution))
}

#[test]
fn test_reduced_instances_on_worker() -> Result<()> {
    let mut runner = Runner::new(RunnerConfig {
        thread_name: "it-solver".to_string(),
        ..RunnerConfig::default()
    });

    let cnf = Cnf3::from_clauses([clause(["x", "!y", "z"]), clause(["!x", "y", "!z"])]);
    let assignment = solve_on_worker::<SatToColoring>(&mut runner, &cnf)?.unwrap();
    assert!(cnf.is_satisfied_by(&assignment));

    let assignment = solve_on_worker::<SatToSsp>(&mut runner, &cnf)?.unwrap();
    assert!(cnf.is_satisfied_by(&assignment));

    let nosol = demo::formula("FALSE_NOSOL").unwrap();
    assert!(solve_on_worker::<SatToSsp>(&mut runner, &nosol)?.is_none());

    let cycle = demo::graph("CYCLE").unwrap();
    let path = solve_on_worker::<HCycleToHCircuit>(&mut runner, &cycle)?.unwrap();
    assert!(cycle.is_hamiltonian_cycle(path.nodes()));
    Ok(())
}

#[test]
fn test_worker_matches_local_pipeline() -> Result<()> {
    let mut runner = Runner::default();
    for name in ["BASIC", "FALSE", "FALSE_NOSOL"] {
        let cnf = demo::formula(name).unwrap();
        let local = pipeline::run::<SatToColoring>(&cnf);
        let remote = solve_on_worker::<SatToColoring>(&mut runner, &cnf)?;
        assert_eq!(local.decoded, remote, "{}", name);
    }
    Ok(())
}

#[test]
fn test_tsp_on_worker() -> Result<()> {
    let square = graph_from_edges([("a", "b"), ("b", "c"), ("c", "d"), ("d", "a")]);
    let reduced = HCircuitToTsp::reduce(&square).instance;
    let mut runner = Runner::default();

    let tour = runner.submit::<Tsp>(&reduced)?.wait()?.into_certificate().unwrap();
    assert_eq!(tour.cost, 4);
    assert!(Tsp::verify(&reduced, &tour));

    let circuit = solve_on_worker::<HCircuitToTsp>(&mut runner, &square)?.unwrap();
    assert!(square.is_hamiltonian_cycle(circuit.nodes()));
    Ok(())
}
