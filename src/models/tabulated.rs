//! Permittivity interpolated from tabulated (experimental) data.

use crate::errors::{check_frequency, require_finite, ConstructionError, DomainError};
use crate::math::{CScalar, Scalar};

use super::Permittivity;

/// Behaviour of a [`PermittivityTable`] queried outside its sampled range.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BoundaryPolicy {
    /// Report [`DomainError::OutOfRange`].
    #[default]
    Reject,
    /// Return the value of the nearest boundary sample.
    Clamp,
}

/// Linear interpolation between tabulated `(ω, ε)` samples.
///
/// Real and imaginary parts are interpolated independently. Sample
/// frequencies must be strictly increasing; queries outside the sampled range
/// fail unless [`BoundaryPolicy::Clamp`] is selected.
///
/// # Example
/// ~~~
/// use num_complex::Complex;
/// use permittivity::models::{BoundaryPolicy, Permittivity, PermittivityTable};
///
/// let table = PermittivityTable::new(
///     vec![1.0, 2.0, 4.0],
///     vec![Complex::new(4.0, -1.0), Complex::new(3.0, -1.0), Complex::new(2.0, -0.5)],
/// )
/// .unwrap();
/// assert_eq!(table.permittivity(1.5).unwrap(), Complex::new(3.5, -1.0));
/// assert!(table.permittivity(8.0).is_err());
///
/// let clamped = table.with_boundary_policy(BoundaryPolicy::Clamp);
/// assert_eq!(clamped.permittivity(8.0).unwrap(), Complex::new(2.0, -0.5));
/// ~~~
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "TableSamples"))]
#[derive(Debug, Clone, PartialEq)]
pub struct PermittivityTable {
    omega: Vec<Scalar>,
    eps: Vec<CScalar>,
    boundary: BoundaryPolicy,
}

/// Unvalidated table contents, as read from a serialized model.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TableSamples {
    omega: Vec<Scalar>,
    eps: Vec<CScalar>,
    #[serde(default)]
    boundary: BoundaryPolicy,
}

#[cfg(feature = "serde")]
impl TryFrom<TableSamples> for PermittivityTable {
    type Error = ConstructionError;

    fn try_from(samples: TableSamples) -> Result<Self, Self::Error> {
        Ok(Self::new(samples.omega, samples.eps)?.with_boundary_policy(samples.boundary))
    }
}

impl PermittivityTable {
    /// Minimum number of samples required to interpolate.
    pub const MIN_SAMPLES: usize = 2;

    /// Creates a table from parallel frequency (rad/s) and permittivity lists.
    pub fn new(omega: Vec<Scalar>, eps: Vec<CScalar>) -> Result<Self, ConstructionError> {
        if omega.len() != eps.len() {
            return Err(ConstructionError::LengthMismatch {
                frequencies: omega.len(),
                values: eps.len(),
            });
        }
        if omega.len() < Self::MIN_SAMPLES {
            return Err(ConstructionError::TooFewSamples {
                found: omega.len(),
                required: Self::MIN_SAMPLES,
            });
        }
        for &w in &omega {
            require_finite("omega", w)?;
        }
        for e in &eps {
            require_finite("eps", e.re)?;
            require_finite("eps", e.im)?;
        }
        if let Some(index) = omega.windows(2).position(|pair| pair[1] <= pair[0]) {
            return Err(ConstructionError::NonIncreasingFrequency {
                index: index + 1,
                previous: omega[index],
                current: omega[index + 1],
            });
        }
        tracing::debug!(
            samples = omega.len(),
            min = omega[0],
            max = omega[omega.len() - 1],
            "built permittivity table"
        );
        Ok(Self {
            omega,
            eps,
            boundary: BoundaryPolicy::default(),
        })
    }

    /// Creates a table from `(ω, ε)` pairs.
    pub fn from_samples(samples: impl IntoIterator<Item = (Scalar, CScalar)>) -> Result<Self, ConstructionError> {
        let (omega, eps) = samples.into_iter().unzip();
        Self::new(omega, eps)
    }

    /// Selects how queries outside the sampled range are answered.
    #[must_use]
    pub fn with_boundary_policy(mut self, boundary: BoundaryPolicy) -> Self {
        self.boundary = boundary;
        self
    }

    /// Active boundary policy.
    #[must_use]
    pub fn boundary_policy(&self) -> BoundaryPolicy {
        self.boundary
    }

    /// Sample frequencies in rad/s, strictly increasing.
    #[must_use]
    pub fn frequencies(&self) -> &[Scalar] {
        &self.omega
    }

    /// Sample permittivities, aligned with [`frequencies`](Self::frequencies).
    #[must_use]
    pub fn values(&self) -> &[CScalar] {
        &self.eps
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.omega.len()
    }

    /// Always `false`: a table holds at least [`MIN_SAMPLES`](Self::MIN_SAMPLES) samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.omega.is_empty()
    }

    /// Lowest and highest sampled frequency.
    #[must_use]
    pub fn range(&self) -> (Scalar, Scalar) {
        (self.omega[0], self.omega[self.omega.len() - 1])
    }

    /// Interpolates at `omega`, which must lie inside [`range`](Self::range).
    fn interpolate(&self, omega: Scalar) -> CScalar {
        // First sample at or above omega; in range, so 0 only on an exact hit.
        let hi = self.omega.partition_point(|&w| w < omega);
        if self.omega[hi] == omega {
            return self.eps[hi];
        }
        let lo = hi - 1;
        let (w0, w1) = (self.omega[lo], self.omega[hi]);
        let (e0, e1) = (self.eps[lo], self.eps[hi]);
        let t = (omega - w0) / (w1 - w0);
        CScalar::new(e0.re + (e1.re - e0.re) * t, e0.im + (e1.im - e0.im) * t)
    }
}

impl Permittivity for PermittivityTable {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let (min, max) = self.range();
        if omega < min || omega > max {
            return match self.boundary {
                BoundaryPolicy::Reject => Err(DomainError::OutOfRange { omega, min, max }),
                BoundaryPolicy::Clamp => {
                    tracing::trace!(omega, min, max, "clamping table query to boundary");
                    let edge = if omega < min { 0 } else { self.eps.len() - 1 };
                    Ok(self.eps[edge])
                }
            };
        }
        Ok(self.interpolate(omega))
    }

    fn name(&self) -> &'static str {
        "PermittivityTable"
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use num_complex::Complex;

    use super::*;

    fn table() -> PermittivityTable {
        PermittivityTable::from_samples([
            (1.0, Complex::new(10.0, -2.0)),
            (2.0, Complex::new(8.0, -2.0)),
            (5.0, Complex::new(2.0, -0.5)),
            (9.0, Complex::new(1.0, 0.0)),
        ])
        .unwrap()
    }

    #[test]
    fn exact_samples_are_returned_verbatim() {
        let t = table();
        for (&w, &e) in t.frequencies().iter().zip(t.values()) {
            assert_eq!(t.permittivity(w).unwrap(), e);
        }
    }

    #[test]
    fn midpoint_with_equal_imaginary_parts_keeps_them() {
        let eps = table().permittivity(1.5).unwrap();
        assert_eq!(eps.im, -2.0);
        assert_relative_eq!(eps.re, 9.0);
    }

    #[test]
    fn interpolation_is_linear_inside_each_interval() {
        let t = table();
        let eps = t.permittivity(3.5).unwrap();
        assert_relative_eq!(eps.re, 5.0, epsilon = 1.0e-12);
        assert_relative_eq!(eps.im, -1.25, epsilon = 1.0e-12);
        let eps = t.permittivity(8.0).unwrap();
        assert_relative_eq!(eps.re, 1.25, epsilon = 1.0e-12);
        assert_relative_eq!(eps.im, -0.125, epsilon = 1.0e-12);
    }

    #[test]
    fn out_of_range_is_rejected_by_default() {
        let t = table();
        assert_eq!(t.boundary_policy(), BoundaryPolicy::Reject);
        assert_eq!(
            t.permittivity(0.5),
            Err(DomainError::OutOfRange {
                omega: 0.5,
                min: 1.0,
                max: 9.0
            })
        );
        assert!(t.permittivity(9.000_001).is_err());
    }

    #[test]
    fn clamping_is_opt_in() {
        let t = table().with_boundary_policy(BoundaryPolicy::Clamp);
        assert_eq!(t.permittivity(0.0).unwrap(), Complex::new(10.0, -2.0));
        assert_eq!(t.permittivity(1.0e6).unwrap(), Complex::new(1.0, 0.0));
        assert!(t.permittivity(Scalar::INFINITY).is_err());
    }

    #[test]
    fn duplicate_frequencies_are_rejected() {
        let eps = vec![Complex::new(1.0, 0.0); 3];
        assert_eq!(
            PermittivityTable::new(vec![1.0, 2.0, 2.0], eps),
            Err(ConstructionError::NonIncreasingFrequency {
                index: 2,
                previous: 2.0,
                current: 2.0
            })
        );
    }

    #[test]
    fn malformed_inputs_are_rejected() {
        let one = Complex::new(1.0, 0.0);
        assert!(matches!(
            PermittivityTable::new(vec![2.0, 1.0], vec![one, one]),
            Err(ConstructionError::NonIncreasingFrequency { index: 1, .. })
        ));
        assert_eq!(
            PermittivityTable::new(vec![1.0], vec![one]),
            Err(ConstructionError::TooFewSamples { found: 1, required: 2 })
        );
        assert_eq!(
            PermittivityTable::new(vec![1.0, 2.0], vec![one]),
            Err(ConstructionError::LengthMismatch {
                frequencies: 2,
                values: 1
            })
        );
        assert!(PermittivityTable::new(vec![1.0, Scalar::NAN], vec![one, one]).is_err());
        assert!(PermittivityTable::new(vec![1.0, 2.0], vec![one, Complex::new(0.0, Scalar::INFINITY)]).is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialization_revalidates_samples() {
        let bad = r#"{"omega":[1.0,2.0,2.0],"eps":[[1.0,0.0],[1.0,0.0],[1.0,0.0]]}"#;
        assert!(serde_json::from_str::<PermittivityTable>(bad).is_err());

        let good = r#"{"omega":[1.0,2.0],"eps":[[1.0,0.0],[3.0,-1.0]],"boundary":"clamp"}"#;
        let t: PermittivityTable = serde_json::from_str(good).unwrap();
        assert_eq!(t.boundary_policy(), BoundaryPolicy::Clamp);
        assert_eq!(t.permittivity(5.0).unwrap(), Complex::new(3.0, -1.0));
    }

    #[test]
    fn range_and_len() {
        let t = table();
        assert_eq!(t.range(), (1.0, 9.0));
        assert_eq!(t.len(), 4);
        assert!(!t.is_empty());
    }
}
