//! Population configuration.

use crate::error::{MopsoError, Result};

/// Configuration for [`initialize_population`](super::initialize_population).
///
/// # Examples
///
/// ```
/// use u_mopso::population::PopulationConfig;
///
/// let config = PopulationConfig::default()
///     .with_size(50)
///     .with_uniform_bounds(30, 0.0, 1.0)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct PopulationConfig {
    /// Number of particles.
    pub size: usize,

    /// Number of decision variables per particle.
    pub dimension: usize,

    /// Per-coordinate lower bounds (length `dimension`).
    pub lower: Vec<f64>,

    /// Per-coordinate upper bounds (length `dimension`).
    pub upper: Vec<f64>,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,

    /// Whether to evaluate costs in parallel using rayon.
    ///
    /// Only takes effect with the `parallel` feature.
    pub parallel: bool,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            size: 100,
            dimension: 30,
            lower: vec![0.0; 30],
            upper: vec![1.0; 30],
            seed: None,
            parallel: false,
        }
    }
}

impl PopulationConfig {
    /// Sets the population size.
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Sets the dimension together with explicit bounds.
    pub fn with_bounds(mut self, lower: Vec<f64>, upper: Vec<f64>) -> Self {
        self.dimension = lower.len();
        self.lower = lower;
        self.upper = upper;
        self
    }

    /// Sets the dimension with the same `[lo, hi]` on every coordinate.
    pub fn with_uniform_bounds(mut self, dimension: usize, lo: f64, hi: f64) -> Self {
        self.dimension = dimension;
        self.lower = vec![lo; dimension];
        self.upper = vec![hi; dimension];
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel cost evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.size == 0 {
            return Err(MopsoError::EmptyPopulation);
        }
        if self.dimension == 0 {
            return Err(MopsoError::InvalidDimension {
                dimension: self.dimension,
            });
        }
        if self.lower.len() != self.dimension || self.upper.len() != self.dimension {
            return Err(MopsoError::BoundsMismatch {
                dim: self.dimension,
                lower_len: self.lower.len(),
                upper_len: self.upper.len(),
            });
        }
        for (index, (&lower, &upper)) in self.lower.iter().zip(self.upper.iter()).enumerate() {
            // Negated so NaN bounds are rejected too.
            if !(lower <= upper) {
                return Err(MopsoError::InvalidBounds {
                    index,
                    lower,
                    upper,
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PopulationConfig::default();
        assert_eq!(config.size, 100);
        assert_eq!(config.dimension, 30);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_with_bounds_sets_dimension() {
        let config = PopulationConfig::default().with_bounds(vec![0.0, -1.0], vec![1.0, 1.0]);
        assert_eq!(config.dimension, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_empty() {
        let config = PopulationConfig::default().with_size(0);
        assert_eq!(config.validate(), Err(MopsoError::EmptyPopulation));
    }

    #[test]
    fn test_validate_zero_dimension() {
        let config = PopulationConfig::default().with_uniform_bounds(0, 0.0, 1.0);
        assert!(config.validate().unwrap_err().is_input_error());
    }

    #[test]
    fn test_validate_bounds_mismatch() {
        let mut config = PopulationConfig::default();
        config.upper.pop();
        assert!(config.validate().unwrap_err().is_bounds_error());
    }

    #[test]
    fn test_validate_inverted_bounds() {
        let config = PopulationConfig::default().with_bounds(vec![0.0, 2.0], vec![1.0, 1.0]);
        assert_eq!(
            config.validate(),
            Err(MopsoError::InvalidBounds {
                index: 1,
                lower: 2.0,
                upper: 1.0
            })
        );
    }

    #[test]
    fn test_validate_nan_bound() {
        let config = PopulationConfig::default().with_bounds(vec![f64::NAN], vec![1.0]);
        assert!(config.validate().is_err());
    }
}
