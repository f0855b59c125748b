//! Evaluator contract shared by particles and populations.

use crate::error::Result;

/// A multi-objective cost function.
///
/// Maps a decision vector and its dimension to one value per objective.
/// All objectives are **minimized**. Implementations must be deterministic
/// for identical input and free of side effects, which lets callers
/// evaluate distinct particles concurrently.
///
/// Any `Fn(&[f64], usize) -> Vec<f64> + Send + Sync` closure is an
/// evaluator:
///
/// ```
/// use u_mopso::objective::ObjectiveFunction;
///
/// let sphere_pair = |x: &[f64], _dimension: usize| {
///     let s: f64 = x.iter().map(|v| v * v).sum();
///     vec![s, (s - 1.0).abs()]
/// };
/// assert_eq!(sphere_pair.evaluate(&[1.0, 0.0], 2).unwrap(), vec![1.0, 0.0]);
/// ```
pub trait ObjectiveFunction: Send + Sync {
    /// Evaluates `position` and returns the objective vector.
    ///
    /// The output length is fixed per evaluator.
    fn evaluate(&self, position: &[f64], dimension: usize) -> Result<Vec<f64>>;

    /// Human-readable name, used in logs.
    fn name(&self) -> &str {
        "custom"
    }
}

impl<F> ObjectiveFunction for F
where
    F: Fn(&[f64], usize) -> Vec<f64> + Send + Sync,
{
    fn evaluate(&self, position: &[f64], dimension: usize) -> Result<Vec<f64>> {
        Ok(self(position, dimension))
    }
}
