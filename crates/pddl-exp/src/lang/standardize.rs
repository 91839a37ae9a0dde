//! Variable standardization
//!
//! Standardization renames every variable of an expression to a fresh name.
//! The [`Images`] context records the name chosen for each original
//! variable, so that all occurrences of one variable within a pass, across
//! both operands of a comparison or across several expressions sharing the
//! context, receive the same image. Free variables are treated as
//! existentially quantified and are renamed like any other.

use super::term::{Term, Variable};
use crate::config::StandardizeConfig;
use crate::error::Result;
use indexmap::IndexMap;
use tracing::trace;

/// Rename map threaded through one standardization pass
#[derive(Debug, Clone, Default)]
pub struct Images {
    map: IndexMap<String, String>,
    next_index: usize,
    config: StandardizeConfig,
}

impl Images {
    /// Create an empty context using the default naming scheme
    pub fn new() -> Self {
        Images {
            map: IndexMap::new(),
            next_index: 0,
            config: StandardizeConfig::default(),
        }
    }

    /// Create an empty context; fails with `InvalidArgument` if the
    /// config could produce colliding names
    pub fn with_config(config: StandardizeConfig) -> Result<Self> {
        config.validate()?;
        Ok(Images {
            map: IndexMap::new(),
            next_index: config.first_index,
            config,
        })
    }

    /// Image already chosen for an original variable name
    pub fn get(&self, original: &str) -> Option<&str> {
        self.map.get(original).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// (original, image) pairs in the order the originals were first seen
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Image of `original`, allocating and recording a fresh one on first sight
    pub fn image_of(&mut self, original: &str) -> String {
        if let Some(image) = self.map.get(original) {
            return image.clone();
        }
        let image = self.config.fresh_name(original, self.next_index);
        self.next_index += 1;
        trace!(original, image = %image, "standardized variable");
        self.map.insert(original.to_string(), image.clone());
        image
    }
}

impl Term {
    /// Rename every variable of this term through `images`
    pub fn standardize(&self, images: &mut Images) -> Term {
        match self {
            Term::Variable(v) => Term::Variable(Variable::new(images.image_of(&v.name))),
            Term::Constant(_) | Term::Number(_) => self.clone(),
            Term::ArithmeticFunction(func) => {
                Term::ArithmeticFunction(func.map_args(|arg| arg.standardize(images)))
            }
        }
    }
}
