//! Numeric comparison expressions `(op arg1 arg2)`

use super::equal;
use crate::error::{ExpError, Result};
use crate::lang::{Images, Number, Substitution, Term, Variable};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Relational operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comp {
    Equal,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    NotEqual,
}

impl Comp {
    pub const ALL: [Comp; 6] = [
        Comp::Equal,
        Comp::Less,
        Comp::LessEqual,
        Comp::Greater,
        Comp::GreaterEqual,
        Comp::NotEqual,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Comp::Equal => "=",
            Comp::Less => "<",
            Comp::LessEqual => "<=",
            Comp::Greater => ">",
            Comp::GreaterEqual => ">=",
            Comp::NotEqual => "!=",
        }
    }

    /// Apply the operator to two reduced operands
    pub fn compare(self, lhs: Number, rhs: Number) -> bool {
        match self {
            Comp::Equal => lhs.value() == rhs.value(),
            Comp::Less => lhs.value() < rhs.value(),
            Comp::LessEqual => lhs.value() <= rhs.value(),
            Comp::Greater => lhs.value() > rhs.value(),
            Comp::GreaterEqual => lhs.value() >= rhs.value(),
            Comp::NotEqual => lhs.value() != rhs.value(),
        }
    }
}

impl fmt::Display for Comp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Query surface used by state evaluation
pub trait Evaluable {
    /// True if [`Evaluable::evaluate`] can produce a result
    fn is_evaluable(&self) -> bool;

    /// Reduce to a truth value
    fn evaluate(&self) -> Result<bool>;
}

/// A comparison between two terms
///
/// Values are never mutated; [`FCompExp::apply`] and
/// [`FCompExp::standardize`] return new expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FCompExp {
    op: Comp,
    arg1: Term,
    arg2: Term,
}

impl FCompExp {
    pub fn new(op: Comp, arg1: Term, arg2: Term) -> Self {
        FCompExp { op, arg1, arg2 }
    }

    /// Start building an expression whose operands arrive separately
    pub fn builder(op: Comp) -> FCompExpBuilder {
        FCompExpBuilder {
            op,
            arg1: None,
            arg2: None,
        }
    }

    pub fn op(&self) -> Comp {
        self.op
    }

    pub fn arg1(&self) -> &Term {
        &self.arg1
    }

    pub fn arg2(&self) -> &Term {
        &self.arg2
    }

    /// Apply a substitution to both operands
    pub fn apply(&self, subst: &Substitution) -> FCompExp {
        FCompExp {
            op: self.op,
            arg1: self.arg1.apply(subst),
            arg2: self.arg2.apply(subst),
        }
    }

    /// Standardize the variables of this expression in a fresh context
    pub fn standardize(&self) -> FCompExp {
        self.standardize_with(&mut Images::new())
    }

    /// Standardize the variables of this expression, continuing `images`
    pub fn standardize_with(&self, images: &mut Images) -> FCompExp {
        let arg1 = self.arg1.standardize(images);
        let arg2 = self.arg2.standardize(images);
        FCompExp {
            op: self.op,
            arg1,
            arg2,
        }
    }

    pub fn is_ground(&self) -> bool {
        self.arg1.is_ground() && self.arg2.is_ground()
    }

    /// Variables of both operands in order of first occurrence
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut vars = IndexSet::new();
        self.arg1.collect_variables(&mut vars);
        self.arg2.collect_variables(&mut vars);
        vars
    }

    pub fn occurs(&self, term: &Term) -> bool {
        self.arg1.occurs(term) || self.arg2.occurs(term)
    }

    /// The general evaluability rule: both operands are ground and
    /// recursively numbers or arithmetic functions
    pub fn is_numeric_evaluable(&self) -> bool {
        self.arg1.is_numeric() && self.arg2.is_numeric()
    }

    /// Reduce each operand to a number on its own
    pub(crate) fn reduce_operands(&self) -> Result<(Number, Number)> {
        let op1 = self.arg1.evaluate_numeric()?;
        let op2 = self.arg2.evaluate_numeric()?;
        Ok((op1, op2))
    }

    pub(crate) fn not_evaluable(&self) -> ExpError {
        debug!(expression = %self, "comparison is not evaluable");
        ExpError::NotEvaluable(format!("comparison function {}", self))
    }
}

impl Evaluable for FCompExp {
    fn is_evaluable(&self) -> bool {
        match self.op {
            Comp::Equal | Comp::NotEqual => equal::is_evaluable(self),
            _ => self.is_numeric_evaluable(),
        }
    }

    fn evaluate(&self) -> Result<bool> {
        let result = match self.op {
            Comp::Equal => equal::evaluate(self)?,
            Comp::NotEqual => !equal::evaluate(self)?,
            op => {
                if !self.is_numeric_evaluable() {
                    return Err(self.not_evaluable());
                }
                let (op1, op2) = self.reduce_operands()?;
                op.compare(op1, op2)
            }
        };
        debug!(expression = %self, result, "evaluated comparison");
        Ok(result)
    }
}

impl fmt::Display for FCompExp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} {} {})", self.op, self.arg1, self.arg2)
    }
}

/// Collects the operands of an [`FCompExp`], e.g. while a parser walks
/// the source text
#[derive(Debug, Clone)]
pub struct FCompExpBuilder {
    op: Comp,
    arg1: Option<Term>,
    arg2: Option<Term>,
}

impl FCompExpBuilder {
    pub fn arg1(mut self, term: Term) -> Self {
        self.arg1 = Some(term);
        self
    }

    pub fn arg2(mut self, term: Term) -> Self {
        self.arg2 = Some(term);
        self
    }

    /// Fails with `InvalidArgument` if an operand is missing
    pub fn build(self) -> Result<FCompExp> {
        let arg1 = self.arg1.ok_or_else(|| {
            ExpError::InvalidArgument(format!("comparison {}: missing first argument", self.op))
        })?;
        let arg2 = self.arg2.ok_or_else(|| {
            ExpError::InvalidArgument(format!("comparison {}: missing second argument", self.op))
        })?;
        Ok(FCompExp::new(self.op, arg1, arg2))
    }
}
