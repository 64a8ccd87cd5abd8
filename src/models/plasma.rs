//! Free-carrier (Drude, plasma) and bound-oscillator (Lorentz) models.

use crate::errors::{check_frequency, require_finite, ConstructionError, DomainError};
use crate::math::{CScalar, Scalar};

use super::poles::{DrudePole, LorentzPole};
use super::Permittivity;

/// Drude model of intraband electron motion:
///
/// ε(ω) = 1 − ωₚ² / (ω² + jωγ)
///
/// with collision rate γ = Γ = 1/τ. This is a Lorentz oscillator with zero
/// resonance frequency, so ω = 0 is always a pole unless ωₚ = 0.
///
/// # Example
/// ~~~
/// use permittivity::models::{DrudeModel, Permittivity};
/// let gold = DrudeModel::new(1.37e16, 1.0e14).unwrap();
/// assert!(gold.permittivity(2.0e15).unwrap().re < 0.0);
/// assert!(gold.permittivity(0.0).is_err());
/// ~~~
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrudeModel {
    pole: DrudePole,
}

impl DrudeModel {
    /// Creates a Drude model from plasma frequency `omega_p` and collision rate `gamma` (rad/s).
    pub fn new(omega_p: Scalar, gamma: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            pole: DrudePole::new(omega_p, gamma)?,
        })
    }

    /// Plasma angular frequency ωₚ in rad/s.
    #[must_use]
    pub fn omega_p(&self) -> Scalar {
        self.pole.omega_p()
    }

    /// Collision rate γ in rad/s.
    #[must_use]
    pub fn gamma(&self) -> Scalar {
        self.pole.gamma()
    }
}

impl Permittivity for DrudeModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(1.0 + self.pole.contribution(self.name(), omega)?)
    }

    fn name(&self) -> &'static str {
        "DrudeModel"
    }
}

/// Lossless free-electron plasma, the γ = 0 limit of [`DrudeModel`]:
///
/// ε(ω) = 1 − ωₚ² / ω²
///
/// Negative below the plasma frequency, zero at it, approaching 1 above.
/// ω = 0 is a [`DomainError::Pole`] except when ωₚ = 0: without carriers the
/// plasma term is absent and the model returns 1 at every frequency, DC
/// included.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreeElectronPlasmaModel {
    pole: DrudePole,
}

impl FreeElectronPlasmaModel {
    /// Creates a plasma with angular plasma frequency `omega_p` (rad/s).
    pub fn new(omega_p: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            pole: DrudePole::new(omega_p, 0.0)?,
        })
    }

    /// Plasma angular frequency ωₚ in rad/s.
    #[must_use]
    pub fn omega_p(&self) -> Scalar {
        self.pole.omega_p()
    }
}

impl Permittivity for FreeElectronPlasmaModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(1.0 + self.pole.contribution(self.name(), omega)?)
    }

    fn name(&self) -> &'static str {
        "FreeElectronPlasmaModel"
    }
}

/// Lorentz oscillator model of interband (bound electron) transitions:
///
/// ε(ω) = ε∞ + Δε ω₀² / (ω₀² − ω(ω + j2δ))
///
/// An undamped oscillator (δ = 0) has a pole at its resonance ω = ω₀.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LorentzModel {
    eps_inf: Scalar,
    pole: LorentzPole,
}

impl LorentzModel {
    /// Creates an oscillator with background `eps_inf`, strength `delta_eps`,
    /// resonance `omega_0` and damping `delta` (rad/s).
    pub fn new(eps_inf: Scalar, delta_eps: Scalar, omega_0: Scalar, delta: Scalar) -> Result<Self, ConstructionError> {
        Ok(Self {
            eps_inf: require_finite("eps_inf", eps_inf)?,
            pole: LorentzPole::new(delta_eps, omega_0, delta)?,
        })
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// The oscillator term.
    #[must_use]
    pub fn pole(&self) -> &LorentzPole {
        &self.pole
    }
}

impl Permittivity for LorentzModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        Ok(self.eps_inf + self.pole.contribution(self.name(), omega)?)
    }

    fn name(&self) -> &'static str {
        "LorentzModel"
    }
}
