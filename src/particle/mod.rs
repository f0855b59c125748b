//! Candidate solutions and Pareto dominance.
//!
//! A [`Particle`] owns its position, its evaluated cost vector and a
//! `dominated` flag. Ranking a population is a free function over a slice
//! of particles rather than a method, since it reads every member.
//!
//! # Key Types
//!
//! - [`Particle`]: Position, bounds, cost and domination flag
//! - [`check_domination`]: Writes the flags of a population in place
//! - [`rank_population`]: Same pass, returned as a [`DominationRanking`]
//!
//! # References
//!
//! - Coello Coello & Lechuga (2002), "MOPSO: A Proposal for Multiple
//!   Objective Particle Swarm Optimization"

mod dominance;
mod types;

pub use dominance::{check_domination, rank_population, DominationRanking};
pub use types::Particle;
