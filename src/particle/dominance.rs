//! Pareto dominance and population domination ranking.
//!
//! All objectives are **minimized**. Ranking follows a fixed list-order
//! scan, so when several predecessors could dominate a particle the first
//! surviving one in list order is credited and the scan for that particle
//! stops there.

use super::types::Particle;
use crate::error::{MopsoError, Result};

impl Particle {
    /// Returns `true` if `self` Pareto-dominates `other`.
    ///
    /// `self` dominates `other` iff it is no worse on every objective and
    /// strictly better on at least one. Identical cost vectors and
    /// trade-offs both yield `false`.
    ///
    /// # Errors
    ///
    /// - [`MopsoError::CostNotSet`] if either particle has no cost
    /// - [`MopsoError::CostLengthMismatch`] if the objective counts differ
    ///
    /// # Examples
    ///
    /// ```
    /// use u_mopso::particle::Particle;
    ///
    /// let mut a = Particle::new(0, 1, vec![0.0], vec![1.0]).unwrap();
    /// let mut b = Particle::new(1, 1, vec![0.0], vec![1.0]).unwrap();
    /// a.set_cost(&|_: &[f64], _: usize| vec![1.0, 1.0]).unwrap();
    /// b.set_cost(&|_: &[f64], _: usize| vec![2.0, 2.0]).unwrap();
    ///
    /// assert!(a.dominates(&b).unwrap());
    /// assert!(!b.dominates(&a).unwrap());
    /// ```
    pub fn dominates(&self, other: &Particle) -> Result<bool> {
        let (a, b) = comparable_costs(self, other)?;
        Ok(dominates_costs(a, b))
    }
}

fn comparable_costs<'a>(left: &'a Particle, right: &'a Particle) -> Result<(&'a [f64], &'a [f64])> {
    let a = left.require_cost()?;
    let b = right.require_cost()?;
    if a.len() != b.len() {
        return Err(MopsoError::CostLengthMismatch {
            left_id: left.id(),
            left_len: a.len(),
            right_id: right.id(),
            right_len: b.len(),
        });
    }
    Ok((a, b))
}

/// Weak dominance on every axis plus strict improvement on one.
fn dominates_costs(a: &[f64], b: &[f64]) -> bool {
    let mut strictly_better = false;
    for (&va, &vb) in a.iter().zip(b.iter()) {
        // Negated so a NaN objective never counts as "no worse".
        if !(va <= vb) {
            return false;
        }
        if va < vb {
            strictly_better = true;
        }
    }
    strictly_better
}

/// Outcome of a ranking pass, indexed by list position.
#[derive(Debug, Clone, PartialEq)]
pub struct DominationRanking {
    /// Particle ids in list order.
    pub ids: Vec<usize>,

    /// `dominated[i]` is the flag the pass assigns to the `i`-th particle.
    pub dominated: Vec<bool>,

    /// Index of the particle credited with dominating the `i`-th one.
    ///
    /// `None` for non-dominated particles. Under the list-order scan this
    /// is the first surviving predecessor that dominates it, or the first
    /// successor that dominated it while it was still surviving.
    pub dominator: Vec<Option<usize>>,
}

impl DominationRanking {
    /// Number of ranked particles.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns `true` if no particle was ranked.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Flag for the first particle with the given id, if any.
    pub fn is_dominated(&self, id: usize) -> Option<bool> {
        self.ids
            .iter()
            .position(|&pid| pid == id)
            .map(|i| self.dominated[i])
    }

    /// Index of the particle credited with dominating position `index`.
    pub fn dominator_of(&self, index: usize) -> Option<usize> {
        self.dominator.get(index).copied().flatten()
    }

    /// List positions of the non-dominated particles, in order.
    pub fn non_dominated_indices(&self) -> Vec<usize> {
        self.dominated
            .iter()
            .enumerate()
            .filter(|(_, &d)| !d)
            .map(|(i, _)| i)
            .collect()
    }

    /// Writes the flags into `particles`, matched by list position.
    ///
    /// # Errors
    ///
    /// [`MopsoError::RankingLengthMismatch`] if `particles` has a different
    /// length than the ranking; no flag is written in that case.
    pub fn apply_to(&self, particles: &mut [Particle]) -> Result<()> {
        if particles.len() != self.dominated.len() {
            return Err(MopsoError::RankingLengthMismatch {
                ranked: self.dominated.len(),
                population: particles.len(),
            });
        }
        for (p, &d) in particles.iter_mut().zip(self.dominated.iter()) {
            p.dominated = d;
        }
        Ok(())
    }
}

/// Ranks a population without touching the particles.
///
/// Runs the same list-order scan as [`check_domination`] and returns the
/// flags together with the dominator credited for each particle. Use this
/// when particles are shared between several populations, where stored
/// flags would go stale.
///
/// # Errors
///
/// Fails before any comparison if a cost is missing or the objective
/// counts differ across the population.
pub fn rank_population(particles: &[Particle]) -> Result<DominationRanking> {
    let costs = validate_costs(particles)?;
    let n = costs.len();
    let mut dominated = vec![false; n];
    let mut dominator = vec![None; n];

    for i in 0..n {
        dominated[i] = false;
        dominator[i] = None;
        for j in 0..i {
            if dominated[j] {
                continue;
            }
            if dominates_costs(costs[i], costs[j]) {
                dominated[j] = true;
                dominator[j] = Some(i);
            } else if dominates_costs(costs[j], costs[i]) {
                dominated[i] = true;
                dominator[i] = Some(j);
                break;
            }
        }
    }

    let ranking = DominationRanking {
        ids: particles.iter().map(Particle::id).collect(),
        dominated,
        dominator,
    };
    log::debug!(
        "ranked {} particles: {} non-dominated",
        n,
        ranking.non_dominated_indices().len()
    );
    Ok(ranking)
}

/// Tags every particle as dominated or non-dominated.
///
/// For each particle `i` in list order: reset its flag, then scan the
/// predecessors `j < i` that are still non-dominated. If `i` dominates
/// `j`, flag `j` and keep scanning; if `j` dominates `i`, flag `i` and
/// stop scanning for `i`. Only flags change; membership and order do not.
///
/// O(n² · k) for `n` particles with `k` objectives.
///
/// # Errors
///
/// All costs are validated first, so on error no flag has been modified.
///
/// # Examples
///
/// ```
/// use u_mopso::particle::{check_domination, Particle};
///
/// let costs = [[1.0, 1.0], [2.0, 2.0], [0.5, 3.0]];
/// let mut population: Vec<Particle> = costs
///     .iter()
///     .enumerate()
///     .map(|(id, c)| {
///         let mut p = Particle::new(id, 1, vec![0.0], vec![1.0]).unwrap();
///         let c = c.to_vec();
///         p.set_cost(&move |_: &[f64], _: usize| c.clone()).unwrap();
///         p
///     })
///     .collect();
///
/// check_domination(&mut population).unwrap();
/// let flags: Vec<bool> = population.iter().map(|p| p.is_dominated()).collect();
/// assert_eq!(flags, vec![false, true, false]);
/// ```
pub fn check_domination(particles: &mut [Particle]) -> Result<()> {
    rank_population(particles)?.apply_to(particles)
}

/// Collects every cost, checking presence and a common objective count.
fn validate_costs(particles: &[Particle]) -> Result<Vec<&[f64]>> {
    let mut costs = Vec::with_capacity(particles.len());
    let mut expected: Option<(usize, usize)> = None;
    for p in particles {
        let cost = p.require_cost()?;
        match expected {
            None => expected = Some((p.id(), cost.len())),
            Some((left_id, left_len)) if left_len != cost.len() => {
                return Err(MopsoError::CostLengthMismatch {
                    left_id,
                    left_len,
                    right_id: p.id(),
                    right_len: cost.len(),
                });
            }
            Some(_) => {}
        }
        costs.push(cost);
    }
    Ok(costs)
}
