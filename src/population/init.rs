//! Population initialization: random positions and initial costs.

use super::config::PopulationConfig;
use crate::error::Result;
use crate::objective::ObjectiveFunction;
use crate::particle::Particle;
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Creates `config.size` particles with random positions and evaluated costs.
///
/// Ids run from `0` in list order. Positions are drawn sequentially from a
/// single RNG, so a fixed seed reproduces the population regardless of
/// whether costs are evaluated in parallel.
///
/// Domination flags are left at `false`; rank the result with
/// [`check_domination`](crate::particle::check_domination).
///
/// # Errors
///
/// Configuration errors from [`PopulationConfig::validate`], or the first
/// evaluator error.
///
/// # Examples
///
/// ```
/// use u_mopso::objective::Uf1;
/// use u_mopso::particle::check_domination;
/// use u_mopso::population::{initialize_population, PopulationConfig};
///
/// let config = PopulationConfig::default()
///     .with_size(20)
///     .with_uniform_bounds(10, 0.0, 1.0)
///     .with_seed(7);
/// let mut particles = initialize_population(&config, &Uf1::new()).unwrap();
/// check_domination(&mut particles).unwrap();
///
/// assert_eq!(particles.len(), 20);
/// assert!(particles.iter().any(|p| !p.is_dominated()));
/// ```
pub fn initialize_population<O: ObjectiveFunction + ?Sized>(
    config: &PopulationConfig,
    objective: &O,
) -> Result<Vec<Particle>> {
    config.validate()?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut particles = Vec::with_capacity(config.size);
    for id in 0..config.size {
        let mut particle = Particle::new(
            id,
            config.dimension,
            config.lower.clone(),
            config.upper.clone(),
        )?;
        particle.initialize_position(&mut rng);
        particles.push(particle);
    }

    evaluate_population(&mut particles, objective, config.parallel)?;

    log::debug!(
        "initialized {} particles (dim {}) with {}",
        particles.len(),
        config.dimension,
        objective.name()
    );
    Ok(particles)
}

/// Evaluates the cost of every particle at its current position.
///
/// With the `parallel` feature and `parallel == true` the evaluations run
/// on the rayon pool; each particle only writes its own cost.
pub fn evaluate_population<O: ObjectiveFunction + ?Sized>(
    particles: &mut [Particle],
    objective: &O,
    parallel: bool,
) -> Result<()> {
    if parallel {
        evaluate_parallel(particles, objective)
    } else {
        particles.iter_mut().try_for_each(|p| p.set_cost(objective))
    }
}

#[cfg(feature = "parallel")]
fn evaluate_parallel<O: ObjectiveFunction + ?Sized>(
    particles: &mut [Particle],
    objective: &O,
) -> Result<()> {
    particles
        .par_iter_mut()
        .try_for_each(|p| p.set_cost(objective))
}

#[cfg(not(feature = "parallel"))]
fn evaluate_parallel<O: ObjectiveFunction + ?Sized>(
    particles: &mut [Particle],
    objective: &O,
) -> Result<()> {
    particles.iter_mut().try_for_each(|p| p.set_cost(objective))
}
