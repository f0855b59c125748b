//! Name-based lookup of evaluators.
//!
//! Lets experiment code pick the objective (and the UF1 correction form)
//! from configuration instead of hardcoding a type.

use super::types::ObjectiveFunction;
use super::uf1::{CorrectionForm, Uf1};
use crate::error::{MopsoError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Registry mapping names to shared evaluators.
pub struct ObjectiveRegistry {
    functions: HashMap<String, Arc<dyn ObjectiveFunction>>,
}

impl ObjectiveRegistry {
    /// Creates a registry with the built-in benchmarks:
    ///
    /// - `"uf1"`: UF1 with [`CorrectionForm::SumOfSquares`]
    /// - `"uf1-square-of-sum"`: UF1 with [`CorrectionForm::SquareOfSum`]
    pub fn new() -> Self {
        let mut registry = Self {
            functions: HashMap::new(),
        };
        for form in [CorrectionForm::SumOfSquares, CorrectionForm::SquareOfSum] {
            let uf1 = Uf1::new().with_correction(form);
            registry.register(uf1.name().to_string(), Arc::new(uf1));
        }
        registry
    }

    /// Registers (or replaces) an evaluator under `name`.
    pub fn register(&mut self, name: impl Into<String>, function: Arc<dyn ObjectiveFunction>) {
        self.functions.insert(name.into(), function);
    }

    /// Looks up an evaluator by name.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mopso::objective::ObjectiveRegistry;
    ///
    /// let registry = ObjectiveRegistry::new();
    /// let uf1 = registry.get("uf1").unwrap();
    /// assert_eq!(uf1.evaluate(&[1.0], 1).unwrap(), vec![1.0, 0.0]);
    /// assert!(registry.get("zdt1").is_err());
    /// ```
    pub fn get(&self, name: &str) -> Result<Arc<dyn ObjectiveFunction>> {
        self.functions
            .get(name)
            .cloned()
            .ok_or_else(|| MopsoError::UnknownObjective {
                name: name.to_string(),
            })
    }

    /// Registered names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.functions.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ObjectiveRegistry {
    fn default() -> Self {
        Self::new()
    }
}
