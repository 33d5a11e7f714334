//! Reduce, solve, decode.
//!
//! ```
//! use np_reductions::cnf::{clause, Cnf3};
//! use np_reductions::pipeline;
//! use np_reductions::reduction::SatToColoring;
//!
//! let cnf = Cnf3::from_clauses([clause(["x", "!y", "z"]), clause(["!x", "y", "y"])]);
//! let outcome = pipeline::run::<SatToColoring>(&cnf);
//! let assignment = outcome.decoded.expect("formula is satisfiable");
//! assert!(cnf.is_satisfied_by(&assignment));
//! ```

use log::info;

use crate::certificate::Solution;
use crate::problem::Problem;
use crate::reduction::{Reduced, Reduction, SourceCertificate, SourceInstance, TargetCertificate, TargetInstance};

/// Everything one pipeline run produced.
pub struct Outcome<R: Reduction> {
    pub reduced: Reduced<TargetInstance<R>>,
    pub solution: Solution<TargetCertificate<R>>,
    /// Certificate for the input, present iff the reduced instance was solved.
    pub decoded: Option<SourceCertificate<R>>,
}

impl<R: Reduction> Outcome<R> {
    pub fn is_solvable(&self) -> bool {
        self.decoded.is_some()
    }
}

/// Reduces `instance` with `R`, solves the reduced instance and decodes the
/// certificate back.
///
/// # Panics
///
/// Panics if the decoded certificate does not verify against `instance`,
/// which means the reduction is broken, and whenever the target solver
/// rejects the reduced instance. The one size limit in the crate is the TSP
/// solver's [`MAX_TSP_NODES`](crate::solve::held_karp::MAX_TSP_NODES): chaining
/// [`HCycleToHCircuit`](crate::reduction::HCycleToHCircuit) into
/// [`HCircuitToTsp`](crate::reduction::HCircuitToTsp) triples the node count,
/// so Hamiltonian Cycle inputs above six nodes cannot go all the way to TSP.
pub fn run<R: Reduction>(instance: &SourceInstance<R>) -> Outcome<R> {
    let reduced = R::reduce(instance);
    let solution = R::Target::solve(&reduced.instance);
    let decoded = finish::<R>(instance, &reduced.instance, &solution);
    Outcome {
        reduced,
        solution,
        decoded,
    }
}

/// Decodes and checks a solution of an already reduced instance.
///
/// This is the second half of [`run`], for callers that solve the reduced
/// instance elsewhere (see [`crate::runner`]).
pub fn finish<R: Reduction>(
    instance: &SourceInstance<R>,
    reduced: &TargetInstance<R>,
    solution: &Solution<TargetCertificate<R>>,
) -> Option<SourceCertificate<R>> {
    let certificate = match solution {
        Solution::Certificate(c) => c,
        Solution::Unsolvable => {
            info!("{} -> {}: unsolvable", R::Source::NAME, R::Target::NAME);
            return None;
        }
    };
    let decoded = R::decode(reduced, certificate);
    assert!(
        R::Source::verify(instance, &decoded),
        "Decoded {} certificate does not verify: {:?}",
        R::Source::NAME,
        decoded
    );
    info!("{} -> {}: solved", R::Source::NAME, R::Target::NAME);
    Some(decoded)
}
