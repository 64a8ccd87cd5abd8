//! Perfect dielectrics, lossy dielectrics and conductors.

use crate::constants::VACUUM_PERMITTIVITY;
use crate::errors::{check_frequency, require_finite, require_non_negative, ConstructionError, DomainError};
use crate::math::{real, CScalar, Scalar, J};

use super::{pole_term, Permittivity};

/// Frequency-independent permittivity, ε(ω) = ε.
///
/// The value may be complex to describe a constant loss.
///
/// # Example
/// ~~~
/// use permittivity::models::{DielectricConstant, Permittivity};
/// let glass = DielectricConstant::real(2.25);
/// assert_eq!(glass.permittivity(1.0e15).unwrap().re, 2.25);
/// assert_eq!(DielectricConstant::vacuum().permittivity(0.0).unwrap().re, 1.0);
/// ~~~
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricConstant {
    eps: CScalar,
}

impl DielectricConstant {
    /// Creates a constant complex permittivity.
    #[must_use]
    pub const fn new(eps: CScalar) -> Self {
        Self { eps }
    }

    /// Creates a constant real permittivity.
    #[must_use]
    pub const fn real(eps: Scalar) -> Self {
        Self::new(real(eps))
    }

    /// Free space, ε = 1.
    #[must_use]
    pub const fn vacuum() -> Self {
        Self::real(1.0)
    }

    /// The constant value.
    #[must_use]
    pub const fn eps(&self) -> CScalar {
        self.eps
    }
}

impl Permittivity for DielectricConstant {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(self.eps)
    }

    fn name(&self) -> &'static str {
        "DielectricConstant"
    }
}

/// Dielectric with static conductivity loss,
/// ε(ω) = ε∞ + σ / (jωε₀) = ε∞ − jσ / (ωε₀).
///
/// Covers perfect dielectrics (σ = 0), lossy materials and, as σ grows,
/// good conductors. A non-zero conductivity has a pole at ω = 0. With σ = 0
/// the conductivity term is absent, so the model is defined at ω = 0 and
/// returns ε∞ there instead of a [`DomainError::Pole`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DielectricModel {
    eps_inf: Scalar,
    sigma: Scalar,
}

impl DielectricModel {
    /// Creates a model with high-frequency permittivity `eps_inf` and
    /// conductivity `sigma` (S/m).
    pub fn new(eps_inf: Scalar, sigma: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            eps_inf: require_finite("eps_inf", eps_inf)?,
            sigma: require_non_negative("sigma", sigma)?,
        })
    }

    /// Lossless dielectric with permittivity `eps_inf`.
    pub fn lossless(eps_inf: Scalar) -> Result<Self, ConstructionError> {
        Self::new(eps_inf, 0.0)
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Static conductivity σ in S/m.
    #[must_use]
    pub fn sigma(&self) -> Scalar {
        self.sigma
    }
}

impl Permittivity for DielectricModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(self.eps_inf + conductivity_term(self.name(), self.sigma, omega)?)
    }

    fn name(&self) -> &'static str {
        "DielectricModel"
    }
}

/// Static conductivity contribution σ / (jωε₀).
pub(crate) fn conductivity_term(model: &'static str, sigma: Scalar, omega: Scalar) -> Result<CScalar, DomainError> {
    pole_term(model, omega, real(sigma), J * (omega * VACUUM_PERMITTIVITY))
}
