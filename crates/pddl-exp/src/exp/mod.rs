//! Comparison expressions and their evaluation

pub mod comp;
pub mod equal;

#[cfg(test)]
mod proptest_tests;

pub use comp::{Comp, Evaluable, FCompExp, FCompExpBuilder};
pub use equal::EqualComp;
