//! Variable substitutions

use super::term::{Term, Variable};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from variable names to replacement terms
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Substitution {
    map: IndexMap<String, Term>,
}

impl Substitution {
    /// Create a new empty substitution
    pub fn new() -> Self {
        Substitution {
            map: IndexMap::new(),
        }
    }

    /// Bind a variable to a term, returning the previous binding if any
    pub fn bind(&mut self, var: Variable, term: Term) -> Option<Term> {
        self.map.insert(var.name, term)
    }

    /// Get the term bound to a variable name, if bound
    pub fn get(&self, name: &str) -> Option<&Term> {
        self.map.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.map.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Bindings in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Term)> {
        self.map.iter().map(|(name, term)| (name.as_str(), term))
    }

    /// Compose two substitutions: applying the result equals applying
    /// `self` then `other`
    pub fn compose(&self, other: &Substitution) -> Substitution {
        let mut result = Substitution::new();

        for (name, term) in &self.map {
            result.map.insert(name.clone(), term.apply(other));
        }

        for (name, term) in &other.map {
            if !self.map.contains_key(name) {
                result.map.insert(name.clone(), term.clone());
            }
        }

        result
    }
}

impl FromIterator<(Variable, Term)> for Substitution {
    fn from_iter<I: IntoIterator<Item = (Variable, Term)>>(iter: I) -> Self {
        let mut subst = Substitution::new();
        for (var, term) in iter {
            subst.bind(var, term);
        }
        subst
    }
}

impl Term {
    /// Apply a substitution to this term
    ///
    /// Bound variables are replaced by their terms as-is; the replacement is
    /// not itself rewritten.
    pub fn apply(&self, subst: &Substitution) -> Term {
        match self {
            Term::Variable(v) => subst.get(&v.name).cloned().unwrap_or_else(|| self.clone()),
            Term::Constant(_) | Term::Number(_) => self.clone(),
            Term::ArithmeticFunction(func) => {
                Term::ArithmeticFunction(func.map_args(|arg| arg.apply(subst)))
            }
        }
    }
}
