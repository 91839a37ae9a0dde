//! Term language: terms, substitutions and variable standardization

pub mod standardize;
pub mod substitution;
pub mod term;

pub use standardize::Images;
pub use substitution::Substitution;
pub use term::{ArithOp, ArithmeticFunction, Constant, Number, Term, TermId, Variable};
