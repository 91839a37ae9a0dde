//! Terms of the planning-domain expression language

use crate::error::{ArithmeticError, ExpError, Result};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A variable, e.g. `?x`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Variable {
    pub name: String,
}

impl Variable {
    pub fn new(name: impl Into<String>) -> Self {
        Variable { name: name.into() }
    }
}

/// A constant naming an object of the problem, e.g. `block-a`
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Constant {
    pub name: String,
}

impl Constant {
    pub fn new(name: impl Into<String>) -> Self {
        Constant { name: name.into() }
    }
}

/// A numeric literal; always finite, so equality is reflexive
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "NumberRepr")]
pub struct Number {
    value: f64,
}

#[derive(Deserialize)]
struct NumberRepr {
    value: f64,
}

impl TryFrom<NumberRepr> for Number {
    type Error = ExpError;

    fn try_from(repr: NumberRepr) -> Result<Self> {
        Number::new(repr.value)
    }
}

impl Number {
    /// Fails with `InvalidArgument` for infinite or NaN values
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(ExpError::InvalidArgument(format!(
                "numeric literal {} is not finite",
                value
            )));
        }
        Ok(Number { value })
    }

    pub fn value(self) -> f64 {
        self.value
    }
}

/// Arithmetic operators of numeric expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArithOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    /// Unary negation
    Minus,
}

impl ArithOp {
    /// Number of operands the operator takes
    pub fn arity(self) -> usize {
        match self {
            ArithOp::Minus => 1,
            ArithOp::Add | ArithOp::Subtract | ArithOp::Multiply | ArithOp::Divide => 2,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            ArithOp::Add => "+",
            ArithOp::Subtract | ArithOp::Minus => "-",
            ArithOp::Multiply => "*",
            ArithOp::Divide => "/",
        }
    }
}

/// An arithmetic operator applied to sub-terms
///
/// The operand count always matches [`ArithOp::arity`]; construction goes
/// through [`ArithmeticFunction::new`], deserialization included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ArithmeticFunctionRepr")]
pub struct ArithmeticFunction {
    op: ArithOp,
    args: Vec<Term>,
}

#[derive(Deserialize)]
struct ArithmeticFunctionRepr {
    op: ArithOp,
    args: Vec<Term>,
}

impl TryFrom<ArithmeticFunctionRepr> for ArithmeticFunction {
    type Error = ExpError;

    fn try_from(repr: ArithmeticFunctionRepr) -> Result<Self> {
        ArithmeticFunction::new(repr.op, repr.args)
    }
}

impl ArithmeticFunction {
    pub fn new(op: ArithOp, args: Vec<Term>) -> Result<Self> {
        if args.len() != op.arity() {
            return Err(ExpError::InvalidArgument(format!(
                "operator {} expects {} operand(s), got {}",
                op.symbol(),
                op.arity(),
                args.len()
            )));
        }
        Ok(ArithmeticFunction { op, args })
    }

    pub fn op(&self) -> ArithOp {
        self.op
    }

    pub fn args(&self) -> &[Term] {
        &self.args
    }

    /// Rebuild with the same operator over new operands of the same count
    pub(crate) fn map_args(&self, f: impl FnMut(&Term) -> Term) -> ArithmeticFunction {
        ArithmeticFunction {
            op: self.op,
            args: self.args.iter().map(f).collect(),
        }
    }

    /// Reduce this function to a number
    pub fn evaluate(&self) -> Result<Number> {
        let values = self
            .args
            .iter()
            .map(Term::evaluate_numeric)
            .collect::<Result<Vec<_>>>()?;

        let value = match (self.op, values.as_slice()) {
            (ArithOp::Add, [a, b]) => a.value + b.value,
            (ArithOp::Subtract, [a, b]) => a.value - b.value,
            (ArithOp::Multiply, [a, b]) => a.value * b.value,
            (ArithOp::Divide, [a, b]) => {
                if b.value == 0.0 {
                    return Err(ArithmeticError::DivisionByZero {
                        expression: self.to_string(),
                    }
                    .into());
                }
                a.value / b.value
            }
            (ArithOp::Minus, [a]) => -a.value,
            _ => {
                return Err(ExpError::InvalidArgument(format!(
                    "malformed arithmetic function {}",
                    self
                )))
            }
        };

        if !value.is_finite() {
            return Err(ArithmeticError::NonFinite {
                expression: self.to_string(),
            }
            .into());
        }
        Ok(Number { value })
    }
}

/// Discriminant of a [`Term`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TermId {
    Variable,
    Constant,
    Number,
    ArithmeticFunction,
}

/// A term of the expression language
///
/// Terms are never mutated in place; substitution and standardization
/// build new terms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Term {
    Variable(Variable),
    Constant(Constant),
    Number(Number),
    ArithmeticFunction(ArithmeticFunction),
}

impl Term {
    pub fn variable(name: impl Into<String>) -> Term {
        Term::Variable(Variable::new(name))
    }

    pub fn constant(name: impl Into<String>) -> Term {
        Term::Constant(Constant::new(name))
    }

    /// Fails with `InvalidArgument` for infinite or NaN values
    pub fn number(value: f64) -> Result<Term> {
        Number::new(value).map(Term::Number)
    }

    /// Build an arithmetic function term, checking the operand count
    pub fn arithmetic(op: ArithOp, args: Vec<Term>) -> Result<Term> {
        ArithmeticFunction::new(op, args).map(Term::ArithmeticFunction)
    }

    pub fn term_id(&self) -> TermId {
        match self {
            Term::Variable(_) => TermId::Variable,
            Term::Constant(_) => TermId::Constant,
            Term::Number(_) => TermId::Number,
            Term::ArithmeticFunction(_) => TermId::ArithmeticFunction,
        }
    }

    /// True if no variable occurs in this term
    pub fn is_ground(&self) -> bool {
        match self {
            Term::Variable(_) => false,
            Term::Constant(_) | Term::Number(_) => true,
            Term::ArithmeticFunction(func) => func.args.iter().all(Term::is_ground),
        }
    }

    /// True if this term is a number or an arithmetic function whose
    /// operands are recursively numeric. Such a term is always ground.
    pub fn is_numeric(&self) -> bool {
        match self {
            Term::Number(_) => true,
            Term::ArithmeticFunction(func) => func.args.iter().all(Term::is_numeric),
            Term::Variable(_) | Term::Constant(_) => false,
        }
    }

    /// Variables of this term in order of first occurrence
    pub fn variables(&self) -> IndexSet<Variable> {
        let mut vars = IndexSet::new();
        self.collect_variables(&mut vars);
        vars
    }

    pub fn collect_variables(&self, vars: &mut IndexSet<Variable>) {
        match self {
            Term::Variable(v) => {
                vars.insert(v.clone());
            }
            Term::Constant(_) | Term::Number(_) => {}
            Term::ArithmeticFunction(func) => {
                for arg in &func.args {
                    arg.collect_variables(vars);
                }
            }
        }
    }

    /// True if `term` is this term or one of its sub-terms
    pub fn occurs(&self, term: &Term) -> bool {
        if self == term {
            return true;
        }
        match self {
            Term::ArithmeticFunction(func) => func.args.iter().any(|arg| arg.occurs(term)),
            _ => false,
        }
    }

    /// Reduce this term to a number
    pub fn evaluate_numeric(&self) -> Result<Number> {
        match self {
            Term::Number(n) => Ok(*n),
            Term::ArithmeticFunction(func) => func.evaluate(),
            Term::Variable(_) | Term::Constant(_) => {
                Err(ExpError::NotEvaluable(format!("term {}", self)))
            }
        }
    }
}

impl From<Variable> for Term {
    fn from(value: Variable) -> Self {
        Term::Variable(value)
    }
}

impl From<Constant> for Term {
    fn from(value: Constant) -> Self {
        Term::Constant(value)
    }
}

impl From<Number> for Term {
    fn from(value: Number) -> Self {
        Term::Number(value)
    }
}

impl From<ArithmeticFunction> for Term {
    fn from(value: ArithmeticFunction) -> Self {
        Term::ArithmeticFunction(value)
    }
}

// Display in PDDL prefix notation

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl fmt::Display for ArithmeticFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}", self.op.symbol())?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Variable(v) => write!(f, "{}", v),
            Term::Constant(c) => write!(f, "{}", c),
            Term::Number(n) => write!(f, "{}", n),
            Term::ArithmeticFunction(func) => write!(f, "{}", func),
        }
    }
}
