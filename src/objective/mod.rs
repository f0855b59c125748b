//! Objective evaluators.
//!
//! An evaluator is a pure function from a decision vector to one cost per
//! objective. Particles call it through [`ObjectiveFunction`]; the
//! [`Uf1`] benchmark is the built-in example.
//!
//! # Key Types
//!
//! - [`ObjectiveFunction`]: Evaluator contract (closures qualify)
//! - [`Uf1`]: CEC 2009 UF1 bi-objective benchmark
//! - [`CorrectionForm`]: Aggregation strategy of the UF1 correction terms
//! - [`ObjectiveRegistry`]: Name to evaluator lookup

mod registry;
mod types;
mod uf1;

pub use registry::ObjectiveRegistry;
pub use types::ObjectiveFunction;
pub use uf1::{CorrectionForm, Uf1};
