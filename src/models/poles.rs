//! Fixed-size pole records.
//!
//! Composite models store their poles as plain `Vec`s of these records; the
//! scalar Debye, Drude and Lorentz models evaluate through the same records so
//! a one-pole composite reproduces its scalar counterpart bit for bit.

use num_complex::Complex;

use crate::errors::{require_finite, require_non_negative, ConstructionError, DomainError};
use crate::math::{real, CScalar, Scalar, J};

use super::pole_term;

/// One Debye relaxation term `Δε / (1 + jωτ)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DebyePole {
    pub(crate) eps: Scalar,
    pub(crate) tau: Scalar,
}

impl DebyePole {
    /// Creates a pole with strength `eps` (Δε) and relaxation time `tau` (s).
    pub fn new(eps: Scalar, tau: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            eps: require_finite("eps", eps)?,
            tau: require_non_negative("tau", tau)?,
        })
    }

    /// Permittivity change Δε due to this dispersion.
    #[must_use]
    pub fn eps(&self) -> Scalar {
        self.eps
    }

    /// Relaxation time τ in seconds.
    #[must_use]
    pub fn tau(&self) -> Scalar {
        self.tau
    }

    pub(crate) fn contribution(&self, omega: Scalar) -> CScalar {
        real(self.eps) / (1.0 + J * (omega * self.tau))
    }
}

/// One Lorentz oscillator term `Δε ωₚ² / (ωₚ² − ω(ω + j2δ))`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzPole {
    pub(crate) eps: Scalar,
    pub(crate) omega_p: Scalar,
    pub(crate) delta: Scalar,
}

impl LorentzPole {
    /// Creates an oscillator with strength `eps` (Δε), resonance `omega_p`
    /// (rad/s) and damping `delta` (rad/s).
    pub fn new(eps: Scalar, omega_p: Scalar, delta: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            eps: require_finite("eps", eps)?,
            omega_p: require_non_negative("omega_p", omega_p)?,
            delta: require_non_negative("delta", delta)?,
        })
    }

    /// Oscillator strength Δε.
    #[must_use]
    pub fn eps(&self) -> Scalar {
        self.eps
    }

    /// Resonance angular frequency in rad/s.
    #[must_use]
    pub fn omega_p(&self) -> Scalar {
        self.omega_p
    }

    /// Damping rate δ in rad/s.
    #[must_use]
    pub fn delta(&self) -> Scalar {
        self.delta
    }

    pub(crate) fn contribution(&self, model: &'static str, omega: Scalar) -> Result<CScalar, DomainError> {
        let wp2 = self.omega_p * self.omega_p;
        let denominator = real(wp2) - omega * Complex::new(omega, 2.0 * self.delta);
        pole_term(model, omega, real(self.eps * wp2), denominator)
    }
}

/// Intraband free-carrier term `−ωₚ² / (ω² + jωγ)`.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrudePole {
    pub(crate) omega_p: Scalar,
    pub(crate) gamma: Scalar,
}

impl DrudePole {
    /// Creates a term with plasma frequency `omega_p` and collision rate `gamma` (rad/s).
    pub fn new(omega_p: Scalar, gamma: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            omega_p: require_non_negative("omega_p", omega_p)?,
            gamma: require_non_negative("gamma", gamma)?,
        })
    }

    /// Plasma angular frequency ωₚ in rad/s.
    #[must_use]
    pub fn omega_p(&self) -> Scalar {
        self.omega_p
    }

    /// Collision rate γ = 1/τ in rad/s.
    #[must_use]
    pub fn gamma(&self) -> Scalar {
        self.gamma
    }

    pub(crate) fn contribution(&self, model: &'static str, omega: Scalar) -> Result<CScalar, DomainError> {
        let denominator = Complex::new(omega * omega, omega * self.gamma);
        pole_term(model, omega, real(-self.omega_p * self.omega_p), denominator)
    }
}
