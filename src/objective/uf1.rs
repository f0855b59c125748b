//! UF1 bi-objective benchmark (CEC 2009 unconstrained suite).
//!
//! Decision variables live in `[0, 1]` for `x0` and are compared against
//! a sine reference curve for the remaining coordinates. The Pareto set is
//! `x_j = sin(6*pi*x0 + j*pi/n)`, where the front is `f2 = 1 - sqrt(f1)`.
//!
//! # References
//!
//! - Zhang et al. (2009), "Multiobjective optimization Test Instances for
//!   the CEC 2009 Special Session and Competition"

use super::types::ObjectiveFunction;
use crate::error::{MopsoError, Result};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

/// How the per-subset deviations from the reference curve are aggregated.
///
/// The two forms are different functions and produce different fronts
/// away from the Pareto set; pick one explicitly for reproducible runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CorrectionForm {
    /// `sum((x_j - s_j)^2)`. The published UF1 definition.
    #[default]
    SumOfSquares,

    /// `(sum(x_j - s_j))^2`. Deviations of opposite sign cancel.
    SquareOfSum,
}

impl CorrectionForm {
    /// Canonical name accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            CorrectionForm::SumOfSquares => "sum-of-squares",
            CorrectionForm::SquareOfSum => "square-of-sum",
        }
    }

    fn aggregate(self, deviations: impl Iterator<Item = f64>) -> f64 {
        match self {
            CorrectionForm::SumOfSquares => deviations.map(|d| d * d).sum(),
            CorrectionForm::SquareOfSum => {
                let s: f64 = deviations.sum();
                s * s
            }
        }
    }
}

impl fmt::Display for CorrectionForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CorrectionForm {
    type Err = MopsoError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "sum-of-squares" => Ok(CorrectionForm::SumOfSquares),
            "square-of-sum" => Ok(CorrectionForm::SquareOfSum),
            _ => Err(MopsoError::UnknownCorrectionForm { name: s.to_string() }),
        }
    }
}

/// The UF1 evaluator.
///
/// Returns `[f1, f2]` with
///
/// - `f1 = x0 + (2/|J1|) * C(J1)`
/// - `f2 = 1 - sqrt(x0) + (2/|J2|) * C(J2)`
///
/// where `J1` / `J2` are the odd / even indices in `1..=dimension-1` and
/// `C` is the selected [`CorrectionForm`]. A term whose index set is empty
/// is omitted.
///
/// # Examples
///
/// ```
/// use u_mopso::objective::{CorrectionForm, ObjectiveFunction, Uf1};
///
/// let uf1 = Uf1::new().with_correction(CorrectionForm::SumOfSquares);
/// let cost = uf1.evaluate(&[0.25], 1).unwrap();
/// assert_eq!(cost, vec![0.25, 0.5]);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Uf1 {
    correction: CorrectionForm,
}

impl Uf1 {
    /// Number of objectives produced by [`Uf1::evaluate`](ObjectiveFunction::evaluate).
    pub const NUM_OBJECTIVES: usize = 2;

    /// Creates a UF1 evaluator with the sum-of-squares correction.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the correction form.
    pub fn with_correction(mut self, correction: CorrectionForm) -> Self {
        self.correction = correction;
        self
    }

    /// The selected correction form.
    pub fn correction(&self) -> CorrectionForm {
        self.correction
    }

    /// Normalized correction over the indices `j` in `start..dimension`
    /// stepping by 2. `None` when the index set is empty.
    fn correction_term(&self, x: &[f64], dimension: usize, start: usize) -> Option<f64> {
        let n = dimension as f64;
        let indices: Vec<usize> = (start..dimension).step_by(2).collect();
        if indices.is_empty() {
            return None;
        }
        let deviations = indices
            .iter()
            .map(|&j| x[j] - (6.0 * PI * x[0] + j as f64 * PI / n).sin());
        Some(2.0 / indices.len() as f64 * self.correction.aggregate(deviations))
    }
}

impl ObjectiveFunction for Uf1 {
    fn evaluate(&self, position: &[f64], dimension: usize) -> Result<Vec<f64>> {
        if dimension == 0 {
            return Err(MopsoError::InvalidDimension { dimension });
        }
        if position.len() < dimension {
            return Err(MopsoError::PositionTooShort {
                expected: dimension,
                got: position.len(),
            });
        }

        let x0 = position[0];
        let f1 = x0 + self.correction_term(position, dimension, 1).unwrap_or(0.0);
        let f2 = 1.0 - x0.sqrt() + self.correction_term(position, dimension, 2).unwrap_or(0.0);
        Ok(vec![f1, f2])
    }

    fn name(&self) -> &str {
        match self.correction {
            CorrectionForm::SumOfSquares => "uf1",
            CorrectionForm::SquareOfSum => "uf1-square-of-sum",
        }
    }
}
