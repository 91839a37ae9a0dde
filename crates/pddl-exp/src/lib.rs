//! Comparison expressions of a planning-domain description language
//!
//! This library provides the term model (variables, constants, numbers and
//! arithmetic functions), substitutions, variable standardization and the
//! evaluation of comparison expressions such as `(= ?x block-a)` or
//! `(<= (+ ?fuel 1) 10)`.

pub mod config;
pub mod error;
pub mod exp;
pub mod lang;

pub use config::StandardizeConfig;
pub use error::{ArithmeticError, ExpError, Result};

pub use lang::{
    ArithOp, ArithmeticFunction, Constant, Images, Number, Substitution, Term, TermId, Variable,
};

pub use exp::{Comp, EqualComp, Evaluable, FCompExp, FCompExpBuilder};
