//! Exact solvers, one per problem.
//!
//! Every solver is deterministic: ties are broken by declaration order, so
//! equal instances always yield equal certificates. All of them are
//! exponential in the worst case and meant for small instances only.

pub mod coloring;
pub mod dpll;
pub mod hamilton;
pub mod held_karp;
pub mod subset_sum;
