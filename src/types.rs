//! Type-safe wrappers for variables, literals, truth values and colors.
//!
//! This module provides the small newtypes shared by every problem in the crate,
//! so that a variable name is never confused with a node label and a color is
//! never confused with a plain integer.

use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// A boolean variable, identified by its name.
///
/// Variable names come from the formula author and are used verbatim as the
/// payload of synthetic identifiers (see [`crate::id`]).
///
/// # Invariants
///
/// - Variable names are non-empty.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Var(String);

impl Var {
    /// Creates a new variable with the given name.
    ///
    /// # Panics
    ///
    /// Panics if `name` is empty.
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        assert!(!name.is_empty(), "Variable names must be non-empty");
        Var(name)
    }

    /// Returns the variable name.
    pub fn name(&self) -> &str {
        &self.0
    }

    /// Returns the positive literal of this variable.
    pub fn pos(&self) -> Literal {
        Literal::new(self.clone(), false)
    }

    /// Returns the negative literal of this variable.
    pub fn neg(&self) -> Literal {
        Literal::new(self.clone(), true)
    }
}

impl fmt::Display for Var {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Var {
    fn from(name: &str) -> Self {
        Var::new(name)
    }
}

impl From<String> for Var {
    fn from(name: String) -> Self {
        Var::new(name)
    }
}

/// A possibly negated variable.
#[derive(Debug, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
pub struct Literal {
    pub var: Var,
    pub negated: bool,
}

impl Literal {
    pub fn new(var: Var, negated: bool) -> Self {
        Self { var, negated }
    }

    pub fn is_negated(&self) -> bool {
        self.negated
    }

    /// Value of the literal under the given value of its variable.
    pub fn value(&self, var_value: bool) -> bool {
        var_value != self.negated
    }
}

impl Neg for Literal {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            var: self.var,
            negated: !self.negated,
        }
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", if self.negated { "!" } else { "" }, self.var)
    }
}

/// Three-valued truth used in satisfying assignments.
///
/// `Either` marks a variable whose value does not matter: it is constrained by
/// no clause that the rest of the assignment leaves unsatisfied.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Truth {
    True,
    False,
    Either,
}

impl Truth {
    /// Returns the definite value, or `None` for `Either`.
    pub fn value(self) -> Option<bool> {
        match self {
            Truth::True => Some(true),
            Truth::False => Some(false),
            Truth::Either => None,
        }
    }
}

impl From<bool> for Truth {
    fn from(value: bool) -> Self {
        if value {
            Truth::True
        } else {
            Truth::False
        }
    }
}

impl fmt::Display for Truth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Truth::True => write!(f, "true"),
            Truth::False => write!(f, "false"),
            Truth::Either => write!(f, "either"),
        }
    }
}

/// One of the three colors of a 3-coloring.
///
/// # Invariants
///
/// - The raw value is 0, 1 or 2.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Color(u8);

impl Color {
    /// All colors, in the order the coloring solver tries them.
    pub const ALL: [Color; 3] = [Color(0), Color(1), Color(2)];

    /// Color of false literals (and of the core `F` node).
    pub const FALSE: Color = Color(0);
    /// Color of true literals (and of the core `T` node).
    pub const TRUE: Color = Color(1);
    /// Color reserved for the core `B` node.
    pub const BUFFER: Color = Color(2);

    /// Creates a color from its number.
    ///
    /// # Panics
    ///
    /// Panics if `value > 2`.
    pub fn new(value: u8) -> Self {
        assert!(value < 3, "Colors must be in 0..=2, got {}", value);
        Color(value)
    }

    /// Returns the raw color number.
    pub fn index(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self {
        color.0
    }
}

impl TryFrom<u8> for Color {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value < 3 {
            Ok(Color(value))
        } else {
            Err(format!("color {} is out of range 0..=2", value))
        }
    }
}
