//! Population setup.
//!
//! Builds a ranked-ready population: particles with ids `0..size`, uniform
//! random positions inside the configured bounds and evaluated costs.
//! Swarm update dynamics and archive maintenance belong to the caller.
//!
//! # Key Types
//!
//! - [`PopulationConfig`]: Size, bounds, seed and parallel evaluation
//! - [`initialize_population`]: Creates and evaluates the particles
//! - [`evaluate_population`]: Re-evaluates costs after an external update

mod config;
mod init;

pub use config::PopulationConfig;
pub use init::{evaluate_population, initialize_population};
