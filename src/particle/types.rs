//! The particle entity.

use crate::error::{MopsoError, Result};
use crate::objective::ObjectiveFunction;
use rand::Rng;
use std::fmt;

/// A candidate solution of a multi-objective problem.
///
/// Holds the decision vector (`position`), its evaluated objective vector
/// (`cost`) and the `dominated` flag written by
/// [`check_domination`](super::check_domination).
///
/// The flag is only meaningful relative to the population passed to the
/// last ranking call. Re-rank whenever population membership or any cost
/// changes; [`rank_population`](super::rank_population) avoids the stale
/// flag entirely by returning the result out of band.
///
/// `velocity`, `trial` and `is_improved` are bookkeeping for the swarm or
/// colony loop that owns the particle; nothing in this crate reads them.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    id: usize,
    dim: usize,
    position: Vec<f64>,
    cost: Option<Vec<f64>>,
    pub(super) dominated: bool,
    lower_bound: Vec<f64>,
    upper_bound: Vec<f64>,

    /// Step size owned by the external update rule.
    pub velocity: f64,

    /// Consecutive iterations without improvement.
    pub trial: usize,

    /// Whether the last external update improved this particle.
    pub is_improved: bool,
}

impl Particle {
    /// Creates a particle at the origin with no cost.
    ///
    /// Both bound vectors must have length `dim`. Whether
    /// `lower_bound[j] <= upper_bound[j]` holds is the caller's concern.
    ///
    /// # Errors
    ///
    /// [`MopsoError::BoundsMismatch`] if a bound length differs from `dim`.
    pub fn new(id: usize, dim: usize, lower_bound: Vec<f64>, upper_bound: Vec<f64>) -> Result<Self> {
        if lower_bound.len() != dim || upper_bound.len() != dim {
            return Err(MopsoError::BoundsMismatch {
                dim,
                lower_len: lower_bound.len(),
                upper_len: upper_bound.len(),
            });
        }
        Ok(Self {
            id,
            dim,
            position: vec![0.0; dim],
            cost: None,
            dominated: false,
            lower_bound,
            upper_bound,
            velocity: 0.0,
            trial: 0,
            is_improved: false,
        })
    }

    /// Sets the initial value of the `dominated` flag.
    pub fn with_dominated(mut self, dominated: bool) -> Self {
        self.dominated = dominated;
        self
    }

    /// Identity assigned at construction.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Number of decision variables.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The decision vector.
    pub fn position(&self) -> &[f64] {
        &self.position
    }

    /// Mutable access for external update steps. The length stays `dim`.
    pub fn position_mut(&mut self) -> &mut [f64] {
        &mut self.position
    }

    /// The objective vector, or `None` before the first evaluation.
    pub fn cost(&self) -> Option<&[f64]> {
        self.cost.as_deref()
    }

    /// Flag written by the last ranking pass over this particle.
    pub fn is_dominated(&self) -> bool {
        self.dominated
    }

    /// Per-coordinate lower bounds.
    pub fn lower_bound(&self) -> &[f64] {
        &self.lower_bound
    }

    /// Per-coordinate upper bounds.
    pub fn upper_bound(&self) -> &[f64] {
        &self.upper_bound
    }

    /// Draws a uniform random position inside the bounds.
    ///
    /// Each coordinate becomes `lb + u * (ub - lb)` with `u` in `[0, 1)`.
    /// Calling it again re-randomizes the position.
    pub fn initialize_position<R: Rng>(&mut self, rng: &mut R) {
        for j in 0..self.dim {
            let lb = self.lower_bound[j];
            let ub = self.upper_bound[j];
            let u: f64 = rng.random();
            self.position[j] = lb + u * (ub - lb);
        }
    }

    /// Evaluates the current position and stores the result as the cost.
    ///
    /// Overwrites any previous cost. The output length is not checked here;
    /// ranking reports mismatched lengths.
    pub fn set_cost<O: ObjectiveFunction + ?Sized>(&mut self, objective: &O) -> Result<()> {
        let cost = objective.evaluate(&self.position, self.dim)?;
        log::trace!("particle {} evaluated by {}: {:?}", self.id, objective.name(), cost);
        self.cost = Some(cost);
        Ok(())
    }

    /// Returns the cost, or [`MopsoError::CostNotSet`].
    pub(crate) fn require_cost(&self) -> Result<&[f64]> {
        self.cost
            .as_deref()
            .ok_or(MopsoError::CostNotSet { id: self.id })
    }
}

impl fmt::Display for Particle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Particle(id={}, velocity={}, position={:?}, cost={:?}, dominated={}, trial={})",
            self.id, self.velocity, self.position, self.cost, self.dominated, self.trial
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::Uf1;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn unit(dim: usize) -> Particle {
        Particle::new(0, dim, vec![0.0; dim], vec![1.0; dim]).unwrap()
    }

    #[test]
    fn test_new_defaults() {
        let p = Particle::new(3, 4, vec![-1.0; 4], vec![1.0; 4]).unwrap();
        assert_eq!(p.id(), 3);
        assert_eq!(p.dim(), 4);
        assert_eq!(p.position(), &[0.0; 4]);
        assert!(p.cost().is_none());
        assert!(!p.is_dominated());
        assert_eq!(p.velocity, 0.0);
        assert_eq!(p.trial, 0);
        assert!(!p.is_improved);
    }

    #[test]
    fn test_new_bounds_mismatch() {
        let err = Particle::new(0, 3, vec![0.0; 3], vec![1.0; 2]).unwrap_err();
        assert_eq!(
            err,
            MopsoError::BoundsMismatch {
                dim: 3,
                lower_len: 3,
                upper_len: 2
            }
        );
    }

    #[test]
    fn test_with_dominated() {
        assert!(unit(2).with_dominated(true).is_dominated());
    }

    #[test]
    fn test_initialize_is_seeded() {
        let mut a = unit(5);
        let mut b = unit(5);
        a.initialize_position(&mut StdRng::seed_from_u64(7));
        b.initialize_position(&mut StdRng::seed_from_u64(7));
        assert_eq!(a.position(), b.position());
    }

    #[test]
    fn test_initialize_degenerate_bounds() {
        let mut p = Particle::new(0, 2, vec![0.5, -2.0], vec![0.5, -2.0]).unwrap();
        p.initialize_position(&mut StdRng::seed_from_u64(1));
        assert_eq!(p.position(), &[0.5, -2.0]);
    }

    #[test]
    fn test_set_cost_overwrites() {
        let mut p = unit(3);
        p.set_cost(&Uf1::new()).unwrap();
        let first = p.cost().unwrap().to_vec();
        assert_eq!(first.len(), 2);

        p.position_mut()[0] = 1.0;
        p.set_cost(&Uf1::new()).unwrap();
        assert_ne!(p.cost().unwrap(), first.as_slice());
    }

    #[test]
    fn test_set_cost_propagates_evaluator_error() {
        let mut p = Particle::new(0, 0, vec![], vec![]).unwrap();
        let err = p.set_cost(&Uf1::new()).unwrap_err();
        assert!(err.is_input_error());
        assert!(p.cost().is_none());
    }

    #[test]
    fn test_set_cost_with_closure() {
        let mut p = unit(2);
        p.position_mut().copy_from_slice(&[0.2, 0.4]);
        p.set_cost(&|x: &[f64], d: usize| vec![x.iter().sum::<f64>(), d as f64])
            .unwrap();
        let cost = p.cost().unwrap();
        assert!((cost[0] - 0.6).abs() < 1e-12);
        assert_eq!(cost[1], 2.0);
    }

    #[test]
    fn test_display() {
        let s = unit(1).to_string();
        assert!(s.starts_with("Particle(id=0"));
        assert!(s.contains("cost=None"));
        assert!(s.contains("dominated=false"));
    }

    proptest! {
        #[test]
        fn prop_initialize_respects_bounds(
            seed in any::<u64>(),
            bounds in prop::collection::vec((-100.0f64..100.0, 0.0f64..50.0), 1..12),
        ) {
            let lower: Vec<f64> = bounds.iter().map(|&(lo, _)| lo).collect();
            let upper: Vec<f64> = bounds.iter().map(|&(lo, w)| lo + w).collect();
            let mut p = Particle::new(0, bounds.len(), lower.clone(), upper.clone()).unwrap();
            p.initialize_position(&mut StdRng::seed_from_u64(seed));
            for j in 0..bounds.len() {
                prop_assert!(p.position()[j] >= lower[j]);
                prop_assert!(p.position()[j] <= upper[j]);
            }
        }
    }
}
