//! DPLL search for 3-CNF formulas.
//!
//! The classic loop: stop on a satisfied or falsified formula, propagate unit
//! clauses, eliminate pure literals, and otherwise branch on the first
//! unassigned variable (true first). Each branch works on its own copy of the
//! partial assignment, so nothing has to be undone on backtracking.

use log::{debug, trace};

use crate::certificate::{Assignment, Solution};
use crate::cnf::Cnf3;
use crate::types::Truth;

/// A literal over variable positions: `(index, negated)`.
type Lit = (usize, bool);

/// Partial assignment indexed by variable position.
type Partial = Vec<Option<bool>>;

fn lit_value(lit: Lit, partial: &Partial) -> Option<bool> {
    partial[lit.0].map(|v| v != lit.1)
}

fn is_satisfied(clause: &[Lit; 3], partial: &Partial) -> bool {
    clause.iter().any(|&l| lit_value(l, partial) == Some(true))
}

fn is_falsified(clause: &[Lit; 3], partial: &Partial) -> bool {
    clause.iter().all(|&l| lit_value(l, partial) == Some(false))
}

/// The only unassigned literal of an unsatisfied clause, if exactly one remains.
fn unit_literal(clause: &[Lit; 3], partial: &Partial) -> Option<Lit> {
    if is_satisfied(clause, partial) {
        return None;
    }
    let mut free = clause.iter().filter(|&&l| partial[l.0].is_none());
    let first = *free.next()?;
    // A clause like (x | x | y) with y false is still a unit on x.
    if free.all(|&l| l == first) {
        Some(first)
    } else {
        None
    }
}

/// Polarities of the unassigned literals of unsatisfied clauses, per variable.
///
/// Bit 0: seen positive, bit 1: seen negative. Zero means the variable no
/// longer occurs in any open clause.
fn occurrences(clauses: &[[Lit; 3]], partial: &Partial) -> Vec<u8> {
    let mut polarity = vec![0u8; partial.len()];
    for clause in clauses.iter().filter(|c| !is_satisfied(c, partial)) {
        for &(var, negated) in clause {
            if partial[var].is_none() {
                polarity[var] |= if negated { 2 } else { 1 };
            }
        }
    }
    polarity
}

/// First variable (in declaration order) that occurs with one polarity only.
fn pure_literal(polarity: &[u8]) -> Option<Lit> {
    polarity.iter().enumerate().find_map(|(var, &p)| match p {
        1 => Some((var, false)),
        2 => Some((var, true)),
        _ => None,
    })
}

fn search(clauses: &[[Lit; 3]], mut partial: Partial) -> Option<Partial> {
    loop {
        if clauses.iter().all(|c| is_satisfied(c, &partial)) {
            return Some(partial);
        }
        if clauses.iter().any(|c| is_falsified(c, &partial)) {
            return None;
        }
        let forced = clauses
            .iter()
            .find_map(|c| unit_literal(c, &partial))
            .or_else(|| pure_literal(&occurrences(clauses, &partial)));
        match forced {
            Some((var, negated)) => {
                trace!("forced x{} = {}", var, !negated);
                partial[var] = Some(!negated);
            }
            None => break,
        }
    }

    // Variables outside every open clause stay unassigned and end up `Either`.
    // The formula is neither satisfied nor falsified, so some open clause has
    // a free literal.
    let var = occurrences(clauses, &partial).iter().position(|&p| p != 0)?;
    for value in [true, false] {
        trace!("branch x{} = {}", var, value);
        let mut branch = partial.clone();
        branch[var] = Some(value);
        if let Some(model) = search(clauses, branch) {
            return Some(model);
        }
    }
    None
}

/// Decides satisfiability of `cnf`.
///
/// Variables left unassigned by the search are reported as [`Truth::Either`].
///
/// # Panics
///
/// Panics if the formula has no variables or no clauses.
pub fn solve(cnf: &Cnf3) -> Solution<Assignment> {
    assert!(!cnf.is_empty(), "Cannot solve an empty formula");
    debug!("dpll: {} variables, {} clauses", cnf.num_vars(), cnf.num_clauses());

    let clauses: Vec<[Lit; 3]> = cnf
        .clauses()
        .iter()
        .map(|c| {
            c.literals().clone().map(|l| {
                let index = cnf
                    .var_index(&l.var)
                    .expect("clause variables are declared by construction");
                (index, l.negated)
            })
        })
        .collect();

    let model = search(&clauses, vec![None; cnf.num_vars()]);
    debug!("dpll: {}", if model.is_some() { "satisfiable" } else { "unsatisfiable" });

    model
        .map(|partial| {
            cnf.variables()
                .iter()
                .zip(partial)
                .map(|(var, value)| (var.clone(), value.map_or(Truth::Either, Truth::from)))
                .collect()
        })
        .into()
}

#[cfg(test)]
mod tests {
    use test_log::test;

    use super::*;
    use crate::cnf::clause;
    use crate::types::Var;

    #[test]
    fn test_single_clause() {
        let cnf = Cnf3::from_clauses([clause(["x", "y", "z"])]);
        let model = solve(&cnf).into_certificate().unwrap();
        assert!(cnf.is_satisfied_by(&model));
        // x is pure and gets fixed first; y and z stay free.
        assert_eq!(model.get(&Var::new("x")), Some(Truth::True));
        assert_eq!(model.get(&Var::new("y")), Some(Truth::Either));
        assert_eq!(model.get(&Var::new("z")), Some(Truth::Either));
    }

    #[test]
    fn test_all_sign_combinations_unsat() {
        let mut cnf = Cnf3::new();
        for mask in 0..8 {
            let lit = |i: usize, name: &str| {
                if mask & (1 << i) != 0 {
                    format!("!{}", name)
                } else {
                    name.to_string()
                }
            };
            let (a, b, c) = (lit(0, "x"), lit(1, "y"), lit(2, "z"));
            cnf.add_clause(clause([a.as_str(), b.as_str(), c.as_str()]));
        }
        assert!(solve(&cnf).is_unsolvable());
    }

    #[test]
    fn test_unit_propagation_chain() {
        let cnf = Cnf3::from_clauses([
            clause(["x", "x", "x"]),
            clause(["!x", "!x", "y"]),
            clause(["!y", "!y", "z"]),
            clause(["!z", "!z", "!x"]),
        ]);
        assert!(solve(&cnf).is_unsolvable());
    }

    #[test]
    fn test_unit_with_duplicate_literal() {
        let cnf = Cnf3::from_clauses([
            clause(["!y", "!y", "!y"]),
            clause(["x", "x", "y"]),
            clause(["!x", "z", "z"]),
        ]);
        let model = solve(&cnf).into_certificate().unwrap();
        assert!(cnf.is_satisfied_by(&model));
        assert_eq!(model.get(&Var::new("y")), Some(Truth::False));
        assert_eq!(model.get(&Var::new("x")), Some(Truth::True));
        assert_eq!(model.get(&Var::new("z")), Some(Truth::True));
    }

    #[test]
    fn test_branching_needed() {
        // No units and no pure literals at the root.
        let cnf = Cnf3::from_clauses([
            clause(["x", "y", "y"]),
            clause(["!x", "!y", "!y"]),
            clause(["x", "!y", "!y"]),
            clause(["!x", "y", "y"]),
        ]);
        assert!(solve(&cnf).is_unsolvable());

        let cnf = Cnf3::from_clauses([
            clause(["x", "y", "y"]),
            clause(["!x", "!y", "!y"]),
        ]);
        let model = solve(&cnf).into_certificate().unwrap();
        assert!(cnf.is_satisfied_by(&model));
        assert_eq!(model.get(&Var::new("x")), Some(Truth::True));
        assert_eq!(model.get(&Var::new("y")), Some(Truth::False));
    }

    #[test]
    fn test_unused_variable_stays_either() {
        let mut cnf = Cnf3::new();
        cnf.add_variable(Var::new("w"));
        cnf.add_clause(clause(["x", "y", "y"]));
        cnf.add_clause(clause(["!x", "!y", "!y"]));
        let model = solve(&cnf).into_certificate().unwrap();
        assert!(cnf.is_satisfied_by(&model));
        assert_eq!(model.get(&Var::new("w")), Some(Truth::Either));
        assert_eq!(model.get(&Var::new("x")), Some(Truth::True));
        assert_eq!(model.get(&Var::new("y")), Some(Truth::False));
    }

    #[test]
    fn test_unused_variable_on_unsat_formula() {
        let mut cnf = Cnf3::new();
        cnf.add_variable(Var::new("w"));
        cnf.add_clause(clause(["x", "y", "y"]));
        cnf.add_clause(clause(["!x", "!y", "!y"]));
        cnf.add_clause(clause(["x", "!y", "!y"]));
        cnf.add_clause(clause(["!x", "y", "y"]));
        assert!(solve(&cnf).is_unsolvable());
    }

    #[test]
    #[should_panic(expected = "Cannot solve an empty formula")]
    fn test_empty_formula_panics() {
        solve(&Cnf3::new());
    }
}
