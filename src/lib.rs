//! Building blocks for multi-objective swarm optimizers.
//!
//! Provides the parts of a MOPSO-style optimizer that carry non-trivial
//! structure, leaving the update loop to the caller:
//!
//! - **Particles**: Candidate solutions with bounds, position, cost vector
//!   and a domination flag.
//! - **Dominance ranking**: Pareto dominance (minimization) and a
//!   list-order population pass that tags every particle as dominated or
//!   non-dominated.
//! - **Objectives**: A pluggable evaluator contract and the UF1
//!   bi-objective benchmark with selectable correction form.
//! - **Population**: Seeded initialization with optional parallel cost
//!   evaluation.
//!
//! # Example
//!
//! ```
//! use u_mopso::objective::Uf1;
//! use u_mopso::particle::{check_domination, Particle};
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//! let uf1 = Uf1::new();
//! let mut swarm: Vec<Particle> = (0..10)
//!     .map(|id| {
//!         let mut p = Particle::new(id, 5, vec![0.0; 5], vec![1.0; 5]).unwrap();
//!         p.initialize_position(&mut rng);
//!         p.set_cost(&uf1).unwrap();
//!         p
//!     })
//!     .collect();
//!
//! check_domination(&mut swarm).unwrap();
//! let front: Vec<usize> = swarm.iter().filter(|p| !p.is_dominated()).map(|p| p.id()).collect();
//! assert!(!front.is_empty());
//! ```
//!
//! # Features
//!
//! - `parallel`: rayon-backed cost evaluation in [`population`]
//! - `serde`: `Serialize`/`Deserialize` for [`particle::Particle`] and
//!   [`objective::CorrectionForm`]

pub mod error;
pub mod objective;
pub mod particle;
pub mod population;

pub use error::{MopsoError, Result};
