//! Formulas in conjunctive normal form with exactly three literals per clause.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::certificate::Assignment;
use crate::error::InvalidInstance;
use crate::types::{Literal, Truth, Var};

/// A disjunction of exactly three literals.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Clause {
    pub literals: [Literal; 3],
}

impl Clause {
    pub fn new(a: Literal, b: Literal, c: Literal) -> Self {
        Self { literals: [a, b, c] }
    }

    /// Builds a clause from a slice of literals.
    ///
    /// # Panics
    ///
    /// Panics unless exactly three literals are given.
    pub fn from_slice(lits: &[Literal]) -> Self {
        assert_eq!(lits.len(), 3, "A clause must have exactly 3 literals, got {}", lits.len());
        Self::new(lits[0].clone(), lits[1].clone(), lits[2].clone())
    }

    pub fn literals(&self) -> &[Literal; 3] {
        &self.literals
    }

    /// Evaluates the clause under a (possibly partial) assignment.
    ///
    /// Returns `Some(true)` if some literal is true, `Some(false)` if every
    /// literal is assigned and false, and `None` otherwise.
    pub fn evaluate(&self, value_of: impl Fn(&Var) -> Option<bool>) -> Option<bool> {
        let mut undecided = false;
        for lit in &self.literals {
            match value_of(&lit.var) {
                Some(v) if lit.value(v) => return Some(true),
                Some(_) => {}
                None => undecided = true,
            }
        }
        if undecided {
            None
        } else {
            Some(false)
        }
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [a, b, c] = &self.literals;
        write!(f, "({} | {} | {})", a, b, c)
    }
}

/// A 3-CNF formula: declared variables and a list of clauses.
///
/// Variables keep their declaration order, which every reducer and solver
/// follows, so equal formulas always produce identical outputs.
///
/// # Invariants
///
/// - Variable names are unique.
/// - Every literal refers to a declared variable.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Cnf3Data")]
pub struct Cnf3 {
    variables: Vec<Var>,
    clauses: Vec<Clause>,
}

#[derive(Deserialize)]
struct Cnf3Data {
    variables: Vec<Var>,
    clauses: Vec<Clause>,
}

impl TryFrom<Cnf3Data> for Cnf3 {
    type Error = InvalidInstance;

    fn try_from(data: Cnf3Data) -> Result<Self, Self::Error> {
        let mut seen = HashSet::new();
        for var in &data.variables {
            if var.name().is_empty() {
                return Err(InvalidInstance::EmptyVariable);
            }
            if !seen.insert(var) {
                return Err(InvalidInstance::DuplicateVariable(var.clone()));
            }
        }
        for (i, clause) in data.clauses.iter().enumerate() {
            for lit in &clause.literals {
                if !seen.contains(&lit.var) {
                    return Err(InvalidInstance::UndeclaredVariable {
                        clause: i,
                        var: lit.var.clone(),
                    });
                }
            }
        }
        Ok(Self {
            variables: data.variables,
            clauses: data.clauses,
        })
    }
}

impl Cnf3 {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a formula from clauses, declaring variables in first-seen order.
    pub fn from_clauses(clauses: impl IntoIterator<Item = Clause>) -> Self {
        let mut cnf = Self::new();
        for clause in clauses {
            cnf.add_clause(clause);
        }
        cnf
    }

    /// Declares a variable. Declaring it again is a no-op.
    pub fn add_variable(&mut self, var: Var) {
        if !self.variables.contains(&var) {
            self.variables.push(var);
        }
    }

    /// Appends a clause, declaring its variables.
    pub fn add_clause(&mut self, clause: Clause) {
        for lit in &clause.literals {
            self.add_variable(lit.var.clone());
        }
        self.clauses.push(clause);
    }

    pub fn variables(&self) -> &[Var] {
        &self.variables
    }

    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }

    pub fn num_vars(&self) -> usize {
        self.variables.len()
    }

    pub fn num_clauses(&self) -> usize {
        self.clauses.len()
    }

    /// Position of the variable in declaration order.
    pub fn var_index(&self, var: &Var) -> Option<usize> {
        self.variables.iter().position(|v| v == var)
    }

    pub fn is_empty(&self) -> bool {
        self.variables.is_empty() || self.clauses.is_empty()
    }

    /// Evaluates the formula under an assignment.
    ///
    /// `Either` variables count as unassigned, so a formula that depends on
    /// them evaluates to `None`.
    pub fn evaluate(&self, assignment: &Assignment) -> Option<bool> {
        let value_of = |v: &Var| assignment.get(v).and_then(Truth::value);
        let mut result = Some(true);
        for clause in &self.clauses {
            match clause.evaluate(value_of) {
                Some(true) => {}
                Some(false) => return Some(false),
                None => result = None,
            }
        }
        result
    }

    /// Returns `true` iff every clause has a true literal under `assignment`.
    pub fn is_satisfied_by(&self, assignment: &Assignment) -> bool {
        self.evaluate(assignment) == Some(true)
    }
}

impl fmt::Display for Cnf3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, clause) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, " & ")?;
            }
            write!(f, "{}", clause)?;
        }
        Ok(())
    }
}

/// Builds a clause from three signed variable names: a leading `!` negates.
///
/// ```
/// use np_reductions::cnf::clause;
///
/// let c = clause(["x", "!y", "z"]);
/// assert!(c.literals()[1].is_negated());
/// ```
pub fn clause(lits: [&str; 3]) -> Clause {
    let [a, b, c] = lits.map(|s| match s.strip_prefix('!') {
        Some(name) => Var::new(name).neg(),
        None => Var::new(s).pos(),
    });
    Clause::new(a, b, c)
}
