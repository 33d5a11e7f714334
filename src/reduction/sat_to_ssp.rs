//! 3-CNF-SAT to Subset-Sum.
//!
//! Numbers have one decimal digit per variable followed by one per clause.
//! For each variable there are two numbers, one per polarity, both with a 1 in
//! the variable's digit and a 1 in the digit of every clause the literal
//! satisfies. Each clause also gets two filler numbers with a single 1 in its
//! digit. The target has 1 in every variable digit (pick exactly one polarity
//! per variable) and 3 in every clause digit (at least one true literal, the
//! rest made up by fillers).
//!
//! A clause digit collects at most three literal numbers and two fillers, so
//! no column sum exceeds 5 and additions never carry.

use std::collections::HashSet;

use log::debug;

use crate::certificate::{Assignment, Subset};
use crate::cnf::Cnf3;
use crate::id::NumberId;
use crate::problem::{Sat3, Ssp};
use crate::reduction::{decide, fill_undecided, Reduced, Reduction, Step};
use crate::ssp::{SspNumber, SubsetSum, RADIX};
use crate::types::Var;

pub enum SatToSsp {}

impl Reduction for SatToSsp {
    type Source = Sat3;
    type Target = Ssp;

    fn reduce(cnf: &Cnf3) -> Reduced<SubsetSum> {
        assert!(!cnf.is_empty(), "Cannot reduce an empty formula");
        let v = cnf.num_vars();
        let c = cnf.num_clauses();
        let width = v + c;

        let mut true_digits = vec![vec![0u8; width]; v];
        let mut false_digits = vec![vec![0u8; width]; v];
        for i in 0..v {
            true_digits[i][i] = 1;
            false_digits[i][i] = 1;
        }
        for (j, clause) in cnf.clauses().iter().enumerate() {
            for lit in clause.literals() {
                let i = cnf
                    .var_index(&lit.var)
                    .expect("clause variables are declared by construction");
                let digits = if lit.negated { &mut false_digits[i] } else { &mut true_digits[i] };
                digits[v + j] = 1;
            }
        }

        let target: Vec<u8> = std::iter::repeat(1)
            .take(v)
            .chain(std::iter::repeat(3).take(c))
            .collect();
        let mut ssp = SubsetSum::new(target);
        for (i, var) in cnf.variables().iter().enumerate() {
            ssp.add_number(SspNumber::new(NumberId::VarTrue(var.clone()), true_digits[i].clone()));
            ssp.add_number(SspNumber::new(NumberId::VarFalse(var.clone()), false_digits[i].clone()));
        }
        for j in 0..c {
            for slot in [1, 2] {
                let mut digits = vec![0u8; width];
                digits[v + j] = 1;
                ssp.add_number(SspNumber::new(NumberId::Filler(j, slot), digits));
            }
        }

        for col in 0..width {
            let sum: u32 = ssp.numbers().iter().map(|n| n.digits[col] as u32).sum();
            assert!(sum < RADIX as u32, "Column {} sums to {}, which would carry", col, sum);
        }

        debug!(
            "3SAT -> SSP: {} variables, {} clauses -> {} numbers of {} digits",
            v,
            c,
            ssp.numbers().len(),
            width
        );

        let steps = vec![
            Step::new(
                "Digits",
                format!(
                    "Every number has {} digits: one per variable, then one per clause.",
                    width
                ),
            ),
            Step::new(
                "Literal numbers",
                "Each variable gets a true and a false number marking the variable digit \
                 and the digits of the clauses that literal satisfies.",
            ),
            Step::new(
                "Fillers and target",
                "Two fillers per clause let any clause with one to three true literals reach 3 \
                 in its digit; the target is 1 per variable digit and 3 per clause digit.",
            ),
        ];
        Reduced { instance: ssp, steps }
    }

    fn decode(ssp: &SubsetSum, subset: &Subset) -> Assignment {
        // A literal number with no clause digit set belongs to a variable no
        // clause uses.
        let constrained: HashSet<&Var> = ssp
            .numbers()
            .iter()
            .filter(|n| n.digits.iter().filter(|&&d| d != 0).count() > 1)
            .filter_map(|n| match &n.id {
                NumberId::VarTrue(var) | NumberId::VarFalse(var) => Some(var),
                _ => None,
            })
            .collect();

        let mut assignment = Assignment::new();
        for id in &subset.chosen {
            match id {
                NumberId::VarTrue(var) | NumberId::VarFalse(var) if !constrained.contains(var) => {}
                NumberId::VarTrue(var) => decide(&mut assignment, var, true),
                NumberId::VarFalse(var) => decide(&mut assignment, var, false),
                NumberId::Filler(..) => {}
                NumberId::Named(_) => panic!("Number {} was not produced by the reduction", id),
            }
        }
        let vars = ssp.numbers().iter().filter_map(|n| match &n.id {
            NumberId::VarTrue(var) => Some(var),
            _ => None,
        });
        fill_undecided(&mut assignment, vars);
        assignment
    }
}
