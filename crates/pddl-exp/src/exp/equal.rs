//! Equality comparison `(= arg1 arg2)`
//!
//! Equality relaxes the general evaluability rule: two constants can be
//! compared by identity even though neither is numeric.

use super::comp::{Comp, Evaluable, FCompExp};
use crate::error::{ExpError, Result};
use crate::lang::{Constant, Images, Substitution, Term, Variable};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

fn constant_operands(exp: &FCompExp) -> Option<(&Constant, &Constant)> {
    match (exp.arg1(), exp.arg2()) {
        (Term::Constant(c1), Term::Constant(c2)) => Some((c1, c2)),
        _ => None,
    }
}

pub(crate) fn is_evaluable(exp: &FCompExp) -> bool {
    exp.is_numeric_evaluable() || constant_operands(exp).is_some()
}

/// Equality of the operands of `exp`, whatever its operator
pub(crate) fn evaluate(exp: &FCompExp) -> Result<bool> {
    if exp.is_numeric_evaluable() {
        let (op1, op2) = exp.reduce_operands()?;
        Ok(Comp::Equal.compare(op1, op2))
    } else if let Some((c1, c2)) = constant_operands(exp) {
        Ok(c1 == c2)
    } else {
        Err(exp.not_evaluable())
    }
}

/// An equality comparison
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "FCompExp", into = "FCompExp")]
pub struct EqualComp(FCompExp);

impl EqualComp {
    pub fn new(arg1: Term, arg2: Term) -> Self {
        EqualComp(FCompExp::new(Comp::Equal, arg1, arg2))
    }

    /// Always [`Comp::Equal`]
    pub fn op(&self) -> Comp {
        self.0.op()
    }

    pub fn arg1(&self) -> &Term {
        self.0.arg1()
    }

    pub fn arg2(&self) -> &Term {
        self.0.arg2()
    }

    pub fn as_comp(&self) -> &FCompExp {
        &self.0
    }

    pub fn apply(&self, subst: &Substitution) -> EqualComp {
        EqualComp(self.0.apply(subst))
    }

    pub fn standardize(&self) -> EqualComp {
        EqualComp(self.0.standardize())
    }

    pub fn standardize_with(&self, images: &mut Images) -> EqualComp {
        EqualComp(self.0.standardize_with(images))
    }

    pub fn is_ground(&self) -> bool {
        self.0.is_ground()
    }

    pub fn variables(&self) -> IndexSet<Variable> {
        self.0.variables()
    }

    pub fn occurs(&self, term: &Term) -> bool {
        self.0.occurs(term)
    }
}

impl Evaluable for EqualComp {
    fn is_evaluable(&self) -> bool {
        is_evaluable(&self.0)
    }

    fn evaluate(&self) -> Result<bool> {
        self.0.evaluate()
    }
}

impl From<EqualComp> for FCompExp {
    fn from(exp: EqualComp) -> Self {
        exp.0
    }
}

impl TryFrom<FCompExp> for EqualComp {
    type Error = ExpError;

    fn try_from(exp: FCompExp) -> Result<Self> {
        if exp.op() != Comp::Equal {
            return Err(ExpError::InvalidArgument(format!(
                "{} is not an equality comparison",
                exp
            )));
        }
        Ok(EqualComp(exp))
    }
}

impl fmt::Display for EqualComp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
