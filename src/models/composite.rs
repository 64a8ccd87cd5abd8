//! Composite models built from several poles of one family.
//!
//! Poles are summed in the order they were supplied so floating-point results
//! are reproducible. The first pole that fails aborts the evaluation.

use crate::errors::{check_frequency, require_finite, require_non_negative, ConstructionError, DomainError};
use crate::math::{real, CScalar, Scalar};

use super::dielectric::conductivity_term;
use super::poles::{DebyePole, DrudePole, LorentzPole};
use super::Permittivity;

fn check_pole_count(parameter: &'static str, expected: usize, found: usize) -> Result<(), ConstructionError> {
    if expected == found {
        Ok(())
    } else {
        Err(ConstructionError::PoleCountMismatch {
            parameter,
            expected,
            found,
        })
    }
}

/// Multi-pole Debye model with static conductivity:
///
/// ε(ω) = ε∞ + Σᵢ Δεᵢ / (1 + jωτᵢ) + σₛ / (jωε₀)
///
/// where σₛ is the static conductivity and Δεᵢ the change in permittivity due
/// to the i-th dispersion. An empty pole list is a lossy dielectric.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiPoleDebyeModel {
    eps_inf: Scalar,
    sigma: Scalar,
    poles: Vec<DebyePole>,
}

impl MultiPoleDebyeModel {
    /// Creates a model from pole records.
    pub fn new(
        eps_inf: Scalar,
        sigma: Scalar,
        poles: impl IntoIterator<Item = DebyePole>,
    ) -> Result<Self, ConstructionError> {
        let model = Self {
            eps_inf: require_finite("eps_inf", eps_inf)?,
            sigma: require_non_negative("sigma", sigma)?,
            poles: poles.into_iter().collect(),
        };
        tracing::debug!(poles = model.poles.len(), sigma, "built multi-pole Debye model");
        Ok(model)
    }

    /// Creates a model from parallel lists of pole strengths `eps` and
    /// relaxation times `tau`.
    pub fn from_parameters(
        eps_inf: Scalar,
        sigma: Scalar,
        eps: &[Scalar],
        tau: &[Scalar],
    ) -> Result<Self, ConstructionError> {
        check_pole_count("tau", eps.len(), tau.len())?;
        let poles = eps
            .iter()
            .zip(tau)
            .map(|(&e, &t)| DebyePole::new(e, t))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(eps_inf, sigma, poles)
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Static conductivity σₛ in S/m.
    #[must_use]
    pub fn sigma(&self) -> Scalar {
        self.sigma
    }

    /// Poles in summation order.
    #[must_use]
    pub fn poles(&self) -> &[DebyePole] {
        &self.poles
    }

    /// Static permittivity ε∞ + Σ Δεᵢ, ignoring conductivity.
    #[must_use]
    pub fn static_permittivity(&self) -> Scalar {
        self.eps_inf + self.poles.iter().map(DebyePole::eps).sum::<Scalar>()
    }
}

impl Permittivity for MultiPoleDebyeModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let mut dispersion = real(0.0);
        for pole in &self.poles {
            dispersion += pole.contribution(omega);
        }
        let conduction = conductivity_term(self.name(), self.sigma, omega)?;
        Ok(self.eps_inf + dispersion + conduction)
    }

    fn name(&self) -> &'static str {
        "MultiPoleDebyeModel"
    }
}

/// Multiple Lorentz oscillator poles, optionally combined with a Drude
/// intraband term:
///
/// ε(ω) = ε∞ + Σᵢ Δεᵢ ωₚᵢ² / (ωₚᵢ² − ω(ω + j2δᵢ)) [− ωₚ² / (ω² + jωγ)]
///
/// The Drude term is absent unless added with [`MultiLorentzPoleModel::with_drude`].
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct MultiLorentzPoleModel {
    eps_inf: Scalar,
    poles: Vec<LorentzPole>,
    #[cfg_attr(feature = "serde", serde(default))]
    drude: Option<DrudePole>,
}

impl MultiLorentzPoleModel {
    /// Creates a model from oscillator records.
    pub fn new(eps_inf: Scalar, poles: impl IntoIterator<Item = LorentzPole>) -> Result<Self, ConstructionError> {
        let model = Self {
            eps_inf: require_finite("eps_inf", eps_inf)?,
            poles: poles.into_iter().collect(),
            drude: None,
        };
        tracing::debug!(poles = model.poles.len(), "built multi-Lorentz model");
        Ok(model)
    }

    /// Creates a model from parallel lists of strengths `eps`, resonance
    /// frequencies `omega_p` and damping rates `delta`.
    pub fn from_parameters(
        eps_inf: Scalar,
        eps: &[Scalar],
        omega_p: &[Scalar],
        delta: &[Scalar],
    ) -> Result<Self, ConstructionError> {
        check_pole_count("omega_p", eps.len(), omega_p.len())?;
        check_pole_count("delta", eps.len(), delta.len())?;
        let poles = eps
            .iter()
            .zip(omega_p)
            .zip(delta)
            .map(|((&e, &w), &d)| LorentzPole::new(e, w, d))
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(eps_inf, poles)
    }

    /// Adds a Drude free-carrier term.
    #[must_use]
    pub fn with_drude(mut self, drude: DrudePole) -> Self {
        self.drude = Some(drude);
        self
    }

    /// High-frequency permittivity ε∞.
    #[must_use]
    pub fn eps_inf(&self) -> Scalar {
        self.eps_inf
    }

    /// Oscillators in summation order.
    #[must_use]
    pub fn poles(&self) -> &[LorentzPole] {
        &self.poles
    }

    /// The Drude term, if any.
    #[must_use]
    pub fn drude(&self) -> Option<&DrudePole> {
        self.drude.as_ref()
    }
}

impl Permittivity for MultiLorentzPoleModel {
    fn permittivity(&self, omega: Scalar) -> Result<CScalar, DomainError> {
        check_frequency(omega)?;
        let mut total = real(self.eps_inf);
        if let Some(drude) = &self.drude {
            total += drude.contribution(self.name(), omega)?;
        }
        for pole in &self.poles {
            total += pole.contribution(self.name(), omega)?;
        }
        Ok(total)
    }

    fn name(&self) -> &'static str {
        "MultiLorentzPoleModel"
    }
}
