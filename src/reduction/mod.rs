//! Polynomial-time reductions between the problems of [`crate::problem`].
//!
//! A [`Reduction`] maps an instance of its source problem to an equivalent
//! instance of its target problem, and maps a certificate of the target
//! instance back to a certificate of the source instance. Reducers are pure
//! and deterministic: equal inputs give structurally equal outputs.
//!
//! Every synthetic node or number carries its provenance in its identifier
//! (see [`crate::id`]), which is all a decoder needs. Variables that occur
//! in no clause are decoded as [`Truth::Either`], whatever the certificate
//! happens to pick for them.
//!
//! Alongside the instance, a reducer returns a list of [`Step`]s describing
//! the construction in prose. Nothing in the crate consumes them.

use crate::certificate::Assignment;
use crate::problem::Problem;
use crate::types::{Truth, Var};

pub mod hcircuit_to_tsp;
pub mod hcycle_to_hcircuit;
pub mod sat_to_coloring;
pub mod sat_to_hcycle;
pub mod sat_to_ssp;

pub use hcircuit_to_tsp::HCircuitToTsp;
pub use hcycle_to_hcircuit::HCycleToHCircuit;
pub use sat_to_coloring::SatToColoring;
pub use sat_to_hcycle::SatToHCycle;
pub use sat_to_ssp::SatToSsp;

/// One annotated stage of a construction.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Step {
    pub title: String,
    pub description: String,
}

impl Step {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Output of a reducer.
#[derive(Debug, Clone)]
pub struct Reduced<I> {
    pub instance: I,
    pub steps: Vec<Step>,
}

pub type SourceInstance<R> = <<R as Reduction>::Source as Problem>::Instance;
pub type SourceCertificate<R> = <<R as Reduction>::Source as Problem>::Certificate;
pub type TargetInstance<R> = <<R as Reduction>::Target as Problem>::Instance;
pub type TargetCertificate<R> = <<R as Reduction>::Target as Problem>::Certificate;

pub trait Reduction: 'static {
    type Source: Problem;
    type Target: Problem;

    /// Builds the target instance.
    ///
    /// # Panics
    ///
    /// Panics if the input is empty.
    fn reduce(instance: &SourceInstance<Self>) -> Reduced<TargetInstance<Self>>;

    /// Maps a certificate of the reduced instance back to the source problem.
    ///
    /// # Panics
    ///
    /// Panics if the certificate contains identifiers this reduction never
    /// produces, or implies contradictory values for one source element.
    fn decode(
        reduced: &TargetInstance<Self>,
        certificate: &TargetCertificate<Self>,
    ) -> SourceCertificate<Self>;
}

/// Records `var = value` in a decoded assignment.
///
/// # Panics
///
/// Panics if `var` was already decided the other way.
pub(crate) fn decide(assignment: &mut Assignment, var: &Var, value: bool) {
    if let Some(previous) = assignment.get(var).and_then(Truth::value) {
        assert_eq!(
            previous, value,
            "Certificate implies both values for variable {}",
            var
        );
    }
    assignment.set(var.clone(), Truth::from(value));
}

/// Marks every listed variable without a decision as [`Truth::Either`].
pub(crate) fn fill_undecided<'a>(assignment: &mut Assignment, vars: impl IntoIterator<Item = &'a Var>) {
    for var in vars {
        if assignment.get(var).is_none() {
            assignment.set(var.clone(), Truth::Either);
        }
    }
}
