//! # np-reductions: NP-complete problems, reductions and exact solvers
//!
//! **`np-reductions`** builds the classic polynomial-time reductions between
//! NP-complete decision problems, decides every problem exactly for small
//! instances, and maps certificates back through each reduction.
//!
//! ## Problems
//!
//! | Problem | Instance | Certificate | Solver |
//! |---|---|---|---|
//! | 3-CNF-SAT | [`Cnf3`][crate::cnf::Cnf3] | [`Assignment`][crate::certificate::Assignment] | DPLL |
//! | Hamiltonian Cycle | [`Graph`][crate::graph::Graph] | [`Path`][crate::certificate::Path] | backtracking |
//! | Hamiltonian Circuit | [`Graph`][crate::graph::Graph] | [`Path`][crate::certificate::Path] | backtracking |
//! | 3-Coloring | [`Graph`][crate::graph::Graph] | [`Coloring`][crate::certificate::Coloring] | backtracking |
//! | Subset-Sum | [`SubsetSum`][crate::ssp::SubsetSum] | [`Subset`][crate::certificate::Subset] | reachable-sum DP |
//! | TSP | [`TspInstance`][crate::tsp::TspInstance] | [`Tour`][crate::certificate::Tour] | Held–Karp |
//!
//! A solver answers either with a certificate or with
//! [`Solution::Unsolvable`][crate::certificate::Solution::Unsolvable], which is
//! a regular answer and not an error.
//!
//! ## Reductions
//!
//! ```text
//!          ┌──> Hamiltonian Cycle ──> Hamiltonian Circuit ──> TSP
//! 3-CNF-SAT├──> 3-Coloring
//!          └──> Subset-Sum
//! ```
//!
//! Every reduction implements [`Reduction`][crate::reduction::Reduction]: it
//! builds the target instance and decodes target certificates back. Synthetic
//! nodes and numbers carry their origin in their identifiers
//! ([`NodeId`][crate::id::NodeId], [`NumberId`][crate::id::NumberId]), so a
//! decoder reads provenance directly off a certificate.
//!
//! ## Basic Usage
//!
//! ```rust
//! use np_reductions::cnf::{clause, Cnf3};
//! use np_reductions::pipeline;
//! use np_reductions::reduction::SatToSsp;
//!
//! // (x | y | z) & (!x | !y | z)
//! let cnf = Cnf3::from_clauses([clause(["x", "y", "z"]), clause(["!x", "!y", "z"])]);
//!
//! // Reduce to Subset-Sum, solve, and decode the chosen numbers.
//! let outcome = pipeline::run::<SatToSsp>(&cnf);
//! println!("target = {:?}", outcome.reduced.instance.target());
//!
//! let assignment = outcome.decoded.unwrap();
//! assert!(cnf.is_satisfied_by(&assignment));
//! ```
//!
//! ## Core Components
//!
//! - **[`reduction`]**: the five reducers and their decoders.
//! - **[`solve`]**: the exact solvers.
//! - **[`pipeline`]**: reduce, solve and decode in one call.
//! - **[`runner`]**: solve on a worker thread, exchanging JSON.
//! - **[`codec`]**: JSON encoding with validation of decoded instances.
//!
//! Instance sizes are meant to stay small: every solver is exponential in
//! the worst case.

pub mod certificate;
pub mod cnf;
pub mod codec;
pub mod demo;
pub mod error;
pub mod graph;
pub mod id;
pub mod pipeline;
pub mod problem;
pub mod reduction;
pub mod runner;
pub mod solve;
pub mod ssp;
pub mod tsp;
pub mod types;
